#![cfg_attr(all(windows, not(debug_assertions)), windows_subsystem = "windows")]

#[cfg(feature = "desktop")]
use dioxus::desktop::{tao::window::WindowBuilder, Config};
use dioxus::prelude::*;

use ui::components::Navbar;
use ui::views::{Dashboard, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(DesktopNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

// Embedded shared theme (ui/assets/theme/main.css); no separate desktop
// /assets needed.
const MAIN_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

#[cfg(feature = "desktop")]
fn main() {
    dioxus::logger::initialize_default();

    LaunchBuilder::desktop()
        .with_cfg(
            Config::new().with_window(
                WindowBuilder::new()
                    .with_title(format!("Noodleboard – v{}", env!("CARGO_PKG_VERSION")))
                    .with_maximized(true),
            ),
        )
        .launch(App);
}

#[cfg(all(feature = "server", not(feature = "desktop")))]
fn main() {
    dioxus::logger::initialize_default();
    LaunchBuilder::server().launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Always inline embedded CSS (no external file dependency for
        // desktop builds)
        document::Style { "{MAIN_CSS_INLINE}" }

        Router::<Route> {}
    }
}

#[component]
fn DesktopNavbar() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar__link", to: Route::Home {}, "Home" }
            Link { class: "navbar__link", to: Route::Dashboard {}, "Dashboard" }
        }
        Outlet::<Route> {}
    }
}
