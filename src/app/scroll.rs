use leptos::ev;
use leptos::prelude::*;
use leptos_use::{
    use_event_listener, use_timeout_fn, use_window, use_window_scroll, UseTimeoutFnReturn,
};

use crate::motion::page_progress;
use crate::sections::{pick_active, Section, SCROLL_SETTLE_MS, SECTIONS};

/// Viewport-driven navbar state: which section is in the upper half of the
/// viewport, and whether the user scrolled within the last 150ms.
pub struct ScrollSpy {
    pub active: Signal<Section>,
    pub is_scrolling: Signal<bool>,
}

/// Tracks the active section across scroll and resize events. The settle
/// timer lives inside this hook, so each instance owns its own debounce.
pub fn use_scroll_spy() -> ScrollSpy {
    let (active, set_active) = signal(SECTIONS[0]);
    let (is_scrolling, set_is_scrolling) = signal(false);

    let UseTimeoutFnReturn { start, stop, .. } =
        use_timeout_fn(move |_: ()| set_is_scrolling(false), SCROLL_SETTLE_MS);

    let recompute = move || {
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        let document = document();
        let tops = SECTIONS
            .iter()
            .filter_map(|section| {
                document
                    .get_element_by_id(section.id)
                    .map(|el| (*section, el.get_bounding_client_rect().top()))
            })
            .collect::<Vec<_>>();
        // No qualifying section keeps the previous selection.
        if let Some(section) = pick_active(&tops, viewport_height) {
            set_active(section);
        }
    };

    let _ = use_event_listener(use_window(), ev::scroll, move |_| {
        set_is_scrolling(true);
        // Trailing-edge debounce: each event supersedes the pending expiry.
        stop();
        start(());
        recompute();
    });
    let _ = use_event_listener(use_window(), ev::resize, move |_| recompute());

    ScrollSpy {
        active: active.into(),
        is_scrolling: is_scrolling.into(),
    }
}

/// Page scroll progress in [0, 1], recomputed from document metrics on the
/// client only; the server renders the top-of-page style.
pub fn use_page_progress() -> Signal<f64> {
    let (_, scroll_y) = use_window_scroll();
    let (progress, set_progress) = signal(0.0);
    Effect::new(move |_| {
        let y = scroll_y.get();
        let Some(root) = document().document_element() else {
            return;
        };
        let viewport_height = window()
            .inner_height()
            .ok()
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0);
        set_progress(page_progress(y, root.scroll_height() as f64, viewport_height));
    });
    progress.into()
}
