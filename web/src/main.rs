use dioxus::prelude::*;

use ui::components::Navbar;
use ui::views::{Dashboard, Home};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/dashboard")]
    Dashboard {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `Navbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        Navbar {
            Link { class: "navbar__link", to: Route::Home {}, "Home" }
            Link { class: "navbar__link", to: Route::Dashboard {}, "Dashboard" }
        }
        Outlet::<Route> {}
    }
}
