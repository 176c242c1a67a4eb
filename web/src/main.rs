use dioxus::logger::tracing::Level;
use dioxus::prelude::*;

use ui::components::app_navbar::{register_nav, NavBuilder};
use ui::components::AppNavbar;
use ui::core::config::PageConfig;
use ui::views::{Activities, Performance};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Activities {},
    #[route("/performance")]
    Performance {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn nav_activities(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Activities {},
        "{label}"
    })
}
fn nav_performance(label: &str) -> Element {
    rsx!(Link {
        class: "navbar__link",
        to: Route::Performance {},
        "{label}"
    })
}

fn main() {
    dioxus::logger::init(Level::INFO).expect("failed to init logger");
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    register_nav(NavBuilder {
        activities: nav_activities,
        performance: nav_performance,
    });

    // Read once; the hosting page does not change it afterwards.
    use_context_provider(PageConfig::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
