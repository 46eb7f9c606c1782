//! Inline SVG icons (Lucide outlines plus the X logo).

use leptos::prelude::*;

macro_rules! outline_icon {
    ($name:ident, $($path:expr),+ $(,)?) => {
        #[component]
        pub fn $name(#[prop(default = 24)] size: u32) -> impl IntoView {
            view! {
                <svg
                    xmlns="http://www.w3.org/2000/svg"
                    width=size
                    height=size
                    viewBox="0 0 24 24"
                    fill="none"
                    stroke="currentColor"
                    stroke-width="2"
                    stroke-linecap="round"
                    stroke-linejoin="round"
                >
                    $(<path d=$path />)+
                </svg>
            }
        }
    };
}

outline_icon!(
    GithubIcon,
    "M15 22v-4a4.8 4.8 0 0 0-1-3.5c3 0 6-2 6-5.5.08-1.25-.27-2.48-1-3.5.28-1.15.28-2.35 0-3.5 0 0-1 0-3 1.5-2.64-.5-5.36-.5-8 0C6 2 5 2 5 2c-.3 1.15-.3 2.35 0 3.5A5.403 5.403 0 0 0 4 9c0 3.5 3 5.5 6 5.5-.39.49-.68 1.05-.85 1.65S8.93 17.38 9 18v4",
    "M9 18c-4.51 2-5-2-7-2",
);

outline_icon!(
    LinkedinIcon,
    "M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4V8h4",
    "M2 9h4v12H2z",
    "M4 2a2 2 0 1 0 0 4 2 2 0 0 0 0-4",
);

outline_icon!(
    MailIcon,
    "M2 6a2 2 0 0 1 2-2h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2z",
    "m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7",
);

outline_icon!(ChevronDownIcon, "m6 9 6 6 6-6");

outline_icon!(
    UserIcon,
    "M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2",
    "M12 3a4 4 0 1 0 0 8 4 4 0 0 0 0-8",
);

outline_icon!(
    BriefcaseIcon,
    "M16 20V4a2 2 0 0 0-2-2h-4a2 2 0 0 0-2 2v16",
    "M4 6h16a2 2 0 0 1 2 2v10a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2z",
);

/// The X logo ships as a filled path, not a Lucide outline.
#[component]
pub fn XIcon(#[prop(default = 24)] size: u32) -> impl IntoView {
    view! {
        <svg
            viewBox="0 0 24 24"
            width=size
            height=size
            stroke="currentColor"
            fill="none"
        >
            <path d="M16.99 0h3.308l-7.227 8.26 8.502 11.24h-6.657l-5.214-6.817L3.736 19.5H.426l7.73-8.835L0 0h6.826l4.713 6.231L16.99 0zm-1.161 17.52h1.833L5.83 1.876H3.83L15.829 17.52z" />
        </svg>
    }
}
