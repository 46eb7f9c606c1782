use leptos::{html, prelude::*};
use leptos_use::{use_intersection_observer_with_options, UseIntersectionObserverOptions};

use crate::motion::{Animation, RevealState};

/// Wraps content in a `<div>` that transitions from the animation's hidden
/// keyframe to its visible one when the element crosses the intersection
/// threshold. With `once` (the default) the reveal never reverses; with
/// `once=false` it follows the element in and out of view.
#[component]
pub fn AnimateOnScroll(
    #[prop(optional)] animation: Animation,
    #[prop(default = 0.5)] duration: f64,
    #[prop(default = 0.0)] delay: f64,
    #[prop(default = 0.1)] threshold: f64,
    #[prop(default = true)] once: bool,
    #[prop(default = "")] class: &'static str,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let (visible, set_visible) = signal(false);
    let state = StoredValue::new(RevealState::new(once));

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
            set_visible(state.with_value(|s| s.visible()));
        },
        UseIntersectionObserverOptions::default().thresholds(vec![threshold]),
    );

    let style = move || {
        let keyframe = if visible() {
            animation.visible()
        } else {
            animation.hidden()
        };
        format!(
            "opacity:{};transform:{};transition:opacity {duration}s ease-out {delay}s, transform {duration}s ease-out {delay}s;",
            keyframe.opacity, keyframe.transform
        )
    };

    view! {
        <div node_ref=node_ref class=class style=style>
            {children()}
        </div>
    }
}
