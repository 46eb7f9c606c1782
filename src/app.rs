mod backdrop;
mod home;
mod icons;
mod lightbox;
mod nav;
mod reveal;
mod scroll;

use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

use backdrop::{Corner, GradientAccent, MovingGrid};
use home::HomePage;
use nav::Navbar;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="light" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-sans">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("Ben Caunt - {title}") />

        <Router>
            <div class="min-h-screen bg-gradient-to-br from-gray-100 via-gray-50 to-gray-200">
                <MovingGrid
                    size=70.0
                    color="rgba(59, 130, 246, 0.06)"
                    dot_color="rgba(59, 130, 246, 0.15)"
                />
                <GradientAccent
                    position=Corner::TopRight
                    size=800.0
                    color1="rgba(59, 130, 246, 0.15)"
                    color2="rgba(59, 130, 246, 0.05)"
                />
                <GradientAccent
                    position=Corner::BottomLeft
                    size=600.0
                    color1="rgba(37, 99, 235, 0.15)"
                    color2="rgba(59, 130, 246, 0.05)"
                />
                <Navbar />
                <main>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
