use leptos::either::Either;
use leptos::prelude::*;

use super::scroll::{use_scroll_spy, ScrollSpy};
use crate::sections::{Section, SECTIONS};

/// Fixed navigation bar. The chrome goes translucent-with-blur while the
/// page is actively scrolling; the link for the active section is
/// highlighted and underlined. On small screens the links collapse into a
/// hamburger menu.
#[component]
pub fn Navbar() -> impl IntoView {
    let ScrollSpy {
        active,
        is_scrolling,
    } = use_scroll_spy();
    let (menu_open, set_menu_open) = signal(false);

    let bar_class = move || {
        if is_scrolling() {
            "transition-all duration-300 bg-white/80 backdrop-blur-md shadow-lg"
        } else {
            "transition-all duration-300 bg-transparent"
        }
    };

    view! {
        <nav class="fixed w-full z-50">
            <div class=bar_class>
                <div class="max-w-7xl mx-auto px-4 sm:px-6 lg:px-8">
                    <div class="flex items-center justify-between h-16">
                        <a
                            href="#hero"
                            class="text-2xl font-bold bg-gradient-to-r from-blue-700 to-blue-500 bg-clip-text text-transparent"
                        >
                            "BC"
                        </a>
                        <div class="hidden md:flex space-x-8">
                            {SECTIONS[1..]
                                .iter()
                                .map(|section| {
                                    let section = *section;
                                    view! { <NavLink section=section active=active /> }
                                })
                                .collect_view()}
                        </div>
                        <div class="md:hidden">
                            <button
                                class="text-gray-700 hover:text-blue-600 focus:outline-none"
                                aria-label="Toggle navigation menu"
                                on:click=move |_| set_menu_open(!menu_open.get_untracked())
                            >
                                <svg
                                    xmlns="http://www.w3.org/2000/svg"
                                    class="h-6 w-6"
                                    fill="none"
                                    viewBox="0 0 24 24"
                                    stroke="currentColor"
                                >
                                    {move || {
                                        if menu_open() {
                                            Either::Left(
                                                view! {
                                                    <path
                                                        stroke-linecap="round"
                                                        stroke-linejoin="round"
                                                        stroke-width="2"
                                                        d="M6 18L18 6M6 6l12 12"
                                                    />
                                                },
                                            )
                                        } else {
                                            Either::Right(
                                                view! {
                                                    <path
                                                        stroke-linecap="round"
                                                        stroke-linejoin="round"
                                                        stroke-width="2"
                                                        d="M4 6h16M4 12h16M4 18h16"
                                                    />
                                                },
                                            )
                                        }
                                    }}
                                </svg>
                            </button>
                        </div>
                    </div>
                    {move || {
                        menu_open()
                            .then(|| {
                                view! {
                                    <div class="md:hidden bg-white/95 backdrop-blur-md rounded-b-lg shadow-lg py-2">
                                        {SECTIONS[1..]
                                            .iter()
                                            .map(|section| {
                                                let section = *section;
                                                view! {
                                                    <a
                                                        href=section.anchor()
                                                        class=move || {
                                                            if active() == section {
                                                                "block px-4 py-2 text-base font-medium hover:bg-blue-50 text-blue-600 font-semibold"
                                                            } else {
                                                                "block px-4 py-2 text-base font-medium hover:bg-blue-50 text-gray-700"
                                                            }
                                                        }
                                                        on:click=move |_| set_menu_open(false)
                                                    >
                                                        {section.label}
                                                    </a>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                            })
                    }}
                </div>
            </div>
        </nav>
    }
}

#[component]
fn NavLink(section: Section, active: Signal<Section>) -> impl IntoView {
    view! {
        <a
            href=section.anchor()
            class=move || {
                if active() == section {
                    "text-blue-600 font-semibold transition-colors"
                } else {
                    "text-gray-700 hover:text-blue-600 transition-colors"
                }
            }
        >
            {section.label}
            {move || {
                (active() == section)
                    .then(|| view! { <div class="h-1 bg-blue-500 mt-1 rounded-full"></div> })
            }}
        </a>
    }
}
