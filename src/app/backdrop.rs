use leptos::{html, prelude::*};
use leptos_use::{
    use_element_bounding, use_intersection_observer_with_options, UseElementBoundingReturn,
    UseIntersectionObserverOptions,
};

use super::scroll::use_page_progress;
use crate::motion::{container_progress, grid_drift, hero_parallax, RevealState};

/// Corner a gradient blob is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    fn inset(&self) -> &'static str {
        match self {
            Corner::TopLeft => "top:-15%;left:-15%;",
            Corner::TopRight => "top:-15%;right:-15%;",
            Corner::BottomLeft => "bottom:-15%;left:-15%;",
            Corner::BottomRight => "bottom:-15%;right:-15%;",
        }
    }

    /// Left-side blobs tilt the opposite way so the pair doesn't move in
    /// lockstep.
    fn drift_class(&self) -> &'static str {
        match self {
            Corner::TopLeft | Corner::BottomLeft => "animate-blob-drift-left",
            Corner::TopRight | Corner::BottomRight => "animate-blob-drift",
        }
    }
}

/// Fixed full-viewport grid-and-dots layer behind the page. Pans slowly on
/// its own (CSS keyframes) and drifts left/down with page scroll.
#[component]
pub fn MovingGrid(
    #[prop(default = 60.0)] size: f64,
    #[prop(default = "rgba(59, 130, 246, 0.08)")] color: &'static str,
    #[prop(default = "rgba(56, 189, 248, 0.2)")] dot_color: &'static str,
    #[prop(default = 0.45)] opacity: f64,
    #[prop(default = 4.0)] dot_size: f64,
) -> impl IntoView {
    let progress = use_page_progress();
    let style = move || {
        let (x, y) = grid_drift(progress());
        let dot = dot_size / 4.0;
        format!(
            "background-image:linear-gradient(to right, {color} 1px, transparent 1px),\
             linear-gradient(to bottom, {color} 1px, transparent 1px),\
             radial-gradient(circle, {dot_color} {dot}px, transparent {dot}px);\
             background-size:{size}px {size}px,{size}px {size}px,{size}px {size}px;\
             transform:translate({x}px, {y}px);"
        )
    };

    view! {
        <div
            class="fixed inset-0 z-0 pointer-events-none overflow-hidden"
            style=format!("opacity:{opacity};")
        >
            <div class="absolute -inset-32 animate-grid-pan" style=style></div>
        </div>
    }
}

/// Fixed, blurred radial-gradient blob pinned to a viewport corner.
#[component]
pub fn GradientAccent(
    #[prop(default = Corner::TopRight)] position: Corner,
    #[prop(default = 600.0)] size: f64,
    #[prop(default = "rgba(59, 130, 246, 0.4)")] color1: &'static str,
    #[prop(default = "rgba(59, 130, 246, 0.1)")] color2: &'static str,
    #[prop(default = 0.4)] opacity: f64,
) -> impl IntoView {
    let style = format!(
        "{}width:{size}px;height:{size}px;\
         background:radial-gradient(circle, {color1} 0%, {color2} 70%, transparent 100%);\
         opacity:{opacity};",
        position.inset()
    );

    view! {
        <div
            class=format!(
                "fixed pointer-events-none blur-3xl rounded-full {}",
                position.drift_class(),
            )
            style=style
        ></div>
    }
}

/// Fades and slightly zooms its content as the container scrolls off the
/// top of the viewport.
#[component]
pub fn ParallaxBackground(children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let UseElementBoundingReturn { top, height, .. } = use_element_bounding(node_ref);

    let style = move || {
        let parallax = hero_parallax(container_progress(top(), height()));
        format!(
            "opacity:{};transform:scale({});",
            parallax.opacity, parallax.scale
        )
    };

    view! {
        <div node_ref=node_ref class="relative min-h-screen w-full overflow-hidden">
            <div class="relative z-10 min-h-screen w-full" style=style>
                {children()}
            </div>
        </div>
    }
}

/// Which edge of the owning section the transition band sits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
}

/// Gradient seam between sections that slides into place whenever it
/// enters view, and back out when it leaves (repeat-mode reveal).
#[component]
pub fn SectionTransition(
    #[prop(default = Edge::Bottom)] position: Edge,
    #[prop(default = "from-yellow-50/50 to-yellow-100/30")] color: &'static str,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (in_view, set_in_view) = signal(false);
    let state = StoredValue::new(RevealState::new(false));

    let _ = use_intersection_observer_with_options(
        node_ref,
        move |entries, _| {
            let intersecting = entries
                .first()
                .map(|entry| entry.is_intersecting())
                .unwrap_or(false);
            state.update_value(|s| {
                s.observe(intersecting);
            });
            set_in_view(state.with_value(|s| s.visible()));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![0.8]),
    );

    let (edge_class, direction, hidden_offset) = match position {
        Edge::Top => ("top-0", "bg-gradient-to-b", "-100%"),
        Edge::Bottom => ("bottom-0", "bg-gradient-to-t", "100%"),
    };
    let style = move || {
        let offset = if in_view() { "0" } else { hidden_offset };
        format!(
            "transform:translateY({offset});\
             transition:transform 0.8s cubic-bezier(0.34, 1.56, 0.64, 1);"
        )
    };

    view! {
        <div
            node_ref=node_ref
            class=format!("absolute w-full left-0 pointer-events-none {edge_class} h-24 overflow-hidden")
        >
            <div class=format!("w-full h-full {direction} {color}") style=style></div>
        </div>
    }
}
