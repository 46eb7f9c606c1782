//! Pure view-state for the scroll-driven animations: reveal variants and
//! their keyframes, the once/repeat visibility machine, and the math the
//! backdrop decorators derive their styles from. Nothing here touches the
//! DOM, so it all runs under plain `cargo test`.

/// Reveal animation kinds supported by `AnimateOnScroll`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Animation {
    #[default]
    Fade,
    SlideUp,
    SlideLeft,
    SlideRight,
    Scale,
    Rotate,
}

/// One endpoint of a reveal transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Keyframe {
    pub opacity: f64,
    pub transform: &'static str,
}

impl Animation {
    /// Style of the element before it has entered view.
    pub fn hidden(&self) -> Keyframe {
        let transform = match self {
            Animation::Fade => "none",
            Animation::SlideUp => "translateY(50px)",
            Animation::SlideLeft => "translateX(50px)",
            Animation::SlideRight => "translateX(-50px)",
            Animation::Scale => "scale(0.8)",
            Animation::Rotate => "rotate(-5deg)",
        };
        Keyframe {
            opacity: 0.0,
            transform,
        }
    }

    /// All variants settle to the same resting style.
    pub fn visible(&self) -> Keyframe {
        Keyframe {
            opacity: 1.0,
            transform: "none",
        }
    }
}

/// Edge-triggered visibility for a reveal wrapper, fed raw intersection
/// booleans. With `once` set, the first entry into view is final; otherwise
/// visibility mirrors the current intersection state.
#[derive(Debug, Clone, Copy)]
pub struct RevealState {
    visible: bool,
    once: bool,
}

impl RevealState {
    pub fn new(once: bool) -> Self {
        Self {
            visible: false,
            once,
        }
    }

    /// Feed the latest intersection reading and return the resulting
    /// visibility.
    pub fn observe(&mut self, intersecting: bool) -> bool {
        if intersecting {
            self.visible = true;
        } else if !self.once {
            self.visible = false;
        }
        self.visible
    }

    pub fn visible(&self) -> bool {
        self.visible
    }
}

/// Overall page scroll progress: 0 at the top of the document, 1 once the
/// bottom of the viewport reaches the bottom of the document.
pub fn page_progress(scroll_y: f64, scroll_height: f64, viewport_height: f64) -> f64 {
    let range = scroll_height - viewport_height;
    if range <= 0.0 {
        return 0.0;
    }
    (scroll_y / range).clamp(0.0, 1.0)
}

/// Progress of a container scrolling off the top of the viewport: 0 while
/// its top edge is at or below the viewport top, 1 once the container has
/// fully left.
pub fn container_progress(top: f64, height: f64) -> f64 {
    if height <= 0.0 {
        return 0.0;
    }
    (-top / height).clamp(0.0, 1.0)
}

/// Derived style for the hero parallax wrapper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Parallax {
    pub opacity: f64,
    pub scale: f64,
}

/// Opacity fades out over the first half of the container's exit, scale
/// grows to 1.1 over the whole of it.
pub fn hero_parallax(progress: f64) -> Parallax {
    let progress = progress.clamp(0.0, 1.0);
    Parallax {
        opacity: 1.0 - (progress / 0.5).min(1.0),
        scale: 1.0 + 0.1 * progress,
    }
}

/// Background offset in px for the moving grid layer, driven by page
/// progress: drifts left and down as the page scrolls.
pub fn grid_drift(progress: f64) -> (f64, f64) {
    let progress = progress.clamp(0.0, 1.0);
    (-50.0 * progress, 100.0 * progress)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VARIANTS: [Animation; 6] = [
        Animation::Fade,
        Animation::SlideUp,
        Animation::SlideLeft,
        Animation::SlideRight,
        Animation::Scale,
        Animation::Rotate,
    ];

    #[test]
    fn test_hidden_keyframes_start_transparent() {
        for animation in VARIANTS {
            assert_eq!(animation.hidden().opacity, 0.0);
            assert_eq!(animation.visible().opacity, 1.0);
            assert_eq!(animation.visible().transform, "none");
        }
    }

    #[test]
    fn test_slide_variants_move_along_distinct_axes() {
        assert!(Animation::SlideUp.hidden().transform.contains("translateY"));
        assert!(Animation::SlideLeft.hidden().transform.contains("translateX(50px)"));
        assert!(Animation::SlideRight.hidden().transform.contains("translateX(-50px)"));
    }

    #[test]
    fn test_reveal_once_is_irreversible() {
        let mut state = RevealState::new(true);
        assert!(!state.visible());
        assert!(!state.observe(false));
        assert!(state.observe(true));
        // Leaving view again must not hide a fire-once reveal.
        assert!(state.observe(false));
        assert!(state.observe(true));
        assert!(state.observe(false));
        assert!(state.visible());
    }

    #[test]
    fn test_reveal_repeat_mirrors_intersection() {
        let mut state = RevealState::new(false);
        assert!(!state.observe(false));
        assert!(state.observe(true));
        assert!(!state.observe(false));
        assert!(state.observe(true));
    }

    #[test]
    fn test_page_progress_clamps_and_handles_short_pages() {
        assert_eq!(page_progress(0.0, 3000.0, 1000.0), 0.0);
        assert_eq!(page_progress(1000.0, 3000.0, 1000.0), 0.5);
        assert_eq!(page_progress(2000.0, 3000.0, 1000.0), 1.0);
        assert_eq!(page_progress(5000.0, 3000.0, 1000.0), 1.0);
        // Page shorter than the viewport never scrolls.
        assert_eq!(page_progress(10.0, 500.0, 1000.0), 0.0);
    }

    #[test]
    fn test_container_progress_tracks_exit() {
        assert_eq!(container_progress(100.0, 800.0), 0.0);
        assert_eq!(container_progress(0.0, 800.0), 0.0);
        assert_eq!(container_progress(-400.0, 800.0), 0.5);
        assert_eq!(container_progress(-800.0, 800.0), 1.0);
        assert_eq!(container_progress(-2000.0, 800.0), 1.0);
        assert_eq!(container_progress(-400.0, 0.0), 0.0);
    }

    #[test]
    fn test_hero_parallax_endpoints() {
        let start = hero_parallax(0.0);
        assert_eq!(start.opacity, 1.0);
        assert_eq!(start.scale, 1.0);
        // Fully faded halfway out.
        assert_eq!(hero_parallax(0.5).opacity, 0.0);
        let end = hero_parallax(1.0);
        assert_eq!(end.opacity, 0.0);
        assert!((end.scale - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_grid_drift_is_monotonic_and_bounded() {
        assert_eq!(grid_drift(0.0), (0.0, 0.0));
        assert_eq!(grid_drift(1.0), (-50.0, 100.0));
        assert_eq!(grid_drift(2.0), (-50.0, 100.0));
        let (x_mid, y_mid) = grid_drift(0.5);
        assert_eq!(x_mid, -25.0);
        assert_eq!(y_mid, 50.0);
    }
}
