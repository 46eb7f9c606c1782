/// A named, anchorable region of the single page. Declaration order in
/// [`SECTIONS`] is both the tracking order and the navigation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub label: &'static str,
}

/// Hero stays first so it wins the scroll-spy at the top of the page; the
/// navbar only renders `SECTIONS[1..]` (the brand mark links to hero).
pub const SECTIONS: [Section; 5] = [
    Section {
        id: "hero",
        label: "Home",
    },
    Section {
        id: "about",
        label: "About",
    },
    Section {
        id: "robotics",
        label: "Robotics",
    },
    Section {
        id: "open-source",
        label: "Open Source",
    },
    Section {
        id: "contact",
        label: "Contact",
    },
];

/// Quiet period after the last scroll event before the navbar chrome
/// drops back to transparent.
pub const SCROLL_SETTLE_MS: f64 = 150.0;

impl Section {
    pub fn anchor(&self) -> String {
        format!("#{}", self.id)
    }
}

/// Picks the active section from measured top edges: the first section in
/// declared order whose top lies within the upper half of the viewport.
/// `None` means no section qualifies and the caller should keep its
/// previous selection.
pub fn pick_active(tops: &[(Section, f64)], viewport_height: f64) -> Option<Section> {
    tops.iter()
        .find(|(_, top)| *top >= 0.0 && *top <= viewport_height / 2.0)
        .map(|(section, _)| *section)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tops_for(offsets: &[f64]) -> Vec<(Section, f64)> {
        SECTIONS
            .iter()
            .copied()
            .zip(offsets.iter().copied())
            .collect()
    }

    #[test]
    fn test_section_ids_are_unique_and_hero_first() {
        for (i, a) in SECTIONS.iter().enumerate() {
            for b in &SECTIONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
        assert_eq!(SECTIONS[0].id, "hero");
    }

    #[test]
    fn test_pick_active_is_always_a_known_section() {
        // Sweep a synthetic page layout past the viewport and check the
        // selection is either None or a member of SECTIONS.
        let viewport = 900.0;
        let section_height = 1000.0;
        for scroll_y in (0..5000).step_by(37) {
            let offsets = SECTIONS
                .iter()
                .enumerate()
                .map(|(i, s)| (*s, i as f64 * section_height - scroll_y as f64))
                .collect::<Vec<_>>();
            if let Some(active) = pick_active(&offsets, viewport) {
                assert!(SECTIONS.contains(&active));
            }
        }
    }

    #[test]
    fn test_about_at_forty_percent_of_viewport_is_active() {
        let viewport = 1000.0;
        // About's top edge sits at 40% of viewport height; hero has
        // scrolled off above.
        let offsets = tops_for(&[-600.0, 400.0, 1400.0, 2400.0, 3400.0]);
        assert_eq!(pick_active(&offsets, viewport).map(|s| s.id), Some("about"));
    }

    #[test]
    fn test_declared_order_breaks_ties() {
        // Two sections both inside the upper half: the earlier one wins.
        let viewport = 1000.0;
        let offsets = tops_for(&[-600.0, 100.0, 300.0, 2400.0, 3400.0]);
        assert_eq!(pick_active(&offsets, viewport).map(|s| s.id), Some("about"));
    }

    #[test]
    fn test_no_candidate_yields_none() {
        // Everything either above the viewport or below its upper half.
        let viewport = 1000.0;
        let offsets = tops_for(&[-3000.0, -2000.0, -1000.0, 600.0, 1600.0]);
        assert_eq!(pick_active(&offsets, viewport), None);
    }

    #[test]
    fn test_boundary_values_are_inclusive() {
        let viewport = 1000.0;
        let at_zero = tops_for(&[0.0, 1000.0, 2000.0, 3000.0, 4000.0]);
        assert_eq!(pick_active(&at_zero, viewport).map(|s| s.id), Some("hero"));
        let at_half = tops_for(&[-1000.0, 500.0, 2000.0, 3000.0, 4000.0]);
        assert_eq!(pick_active(&at_half, viewport).map(|s| s.id), Some("about"));
        let past_half = tops_for(&[-1000.0, 500.1, 2000.0, 3000.0, 4000.0]);
        assert_eq!(pick_active(&past_half, viewport), None);
    }
}
