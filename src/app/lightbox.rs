use leptos::either::Either;
use leptos::prelude::*;

use crate::media::MediaKind;

/// Renders a media path as either a lazily-loaded image or an autoplaying,
/// muted, looping video, depending on its extension.
fn media_view(
    kind: MediaKind,
    src: &'static str,
    alt: &'static str,
    class: &'static str,
) -> impl IntoView {
    match kind {
        MediaKind::Image => Either::Left(view! {
            <img src=src alt=alt class=class loading="lazy" width="800" height="450" />
        }),
        MediaKind::Video => Either::Right(view! {
            <video autoplay loop muted playsinline class=class width="800" height="450">
                <source src=src type="video/mp4" />
                "Your browser does not support the video tag."
            </video>
        }),
    }
}

/// Thumbnail with a hover expand affordance; clicking it opens this
/// instance's lightbox with the same media at full size.
#[component]
pub fn MediaFigure(
    src: &'static str,
    alt: &'static str,
    #[prop(default = "")] class: &'static str,
) -> impl IntoView {
    let kind = MediaKind::from_path(src);
    let (open, set_open) = signal(false);

    view! {
        <div
            class="relative group cursor-pointer"
            title="Click to expand"
            on:click=move |_| set_open(true)
        >
            {media_view(kind, src, alt, class)}
            <div class="absolute top-2 right-2 bg-black bg-opacity-50 rounded-full p-1.5 text-white opacity-0 group-hover:opacity-100 transition-opacity">
                <svg class="w-4 h-4" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                    <path
                        stroke-linecap="round"
                        stroke-linejoin="round"
                        stroke-width="2"
                        d="M4 8V4m0 0h4M4 4l5 5m11-1V4m0 0h-4m4 0l-5 5M4 16v4m0 0h4m-4 0l5-5m11 5l-5-5m5 5v-4m0 4h-4"
                    />
                </svg>
            </div>
        </div>
        <Lightbox open=open set_open=set_open>
            {media_view(kind, src, alt, "w-full h-auto")}
        </Lightbox>
    }
}

/// Full-screen overlay for expanded media. Closed on mount; the backdrop
/// and the close button both dismiss it, clicks on the content panel do
/// not.
#[component]
fn Lightbox(open: ReadSignal<bool>, set_open: WriteSignal<bool>, children: ChildrenFn) -> impl IntoView {
    view! {
        <Show when=move || open()>
            <div
                class="fixed inset-0 z-50 flex items-center justify-center p-4 bg-slate-950/80 backdrop-blur"
                on:click=move |_| set_open(false)
            >
                <div
                    class="relative max-w-4xl w-full overflow-hidden rounded-3xl border border-white/10 bg-slate-900/90 shadow-2xl"
                    on:click=|ev| ev.stop_propagation()
                >
                    <button
                        class="absolute top-4 right-4 text-slate-400 transition-colors hover:text-white"
                        aria-label="Close modal"
                        on:click=move |_| set_open(false)
                    >
                        <svg class="w-6 h-6" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path
                                stroke-linecap="round"
                                stroke-linejoin="round"
                                stroke-width="2"
                                d="M6 18L18 6M6 6l12 12"
                            />
                        </svg>
                    </button>
                    <div class="p-4">{children()}</div>
                </div>
            </div>
        </Show>
    }
}
