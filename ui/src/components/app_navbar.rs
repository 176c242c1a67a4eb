use dioxus::prelude::*;
use once_cell::sync::OnceCell;

/// Platforms register a `NavBuilder` providing fully constructed `Link`
/// elements, so `ui` does not need to know each platform's `Route` enum.
///
/// ```ignore
/// use ui::components::app_navbar::{register_nav, NavBuilder};
/// register_nav(NavBuilder {
///     activities: |label| rsx!( Link { class: "navbar__link", to: Route::Activities {}, "{label}" } ),
///     performance: |label| rsx!( Link { class: "navbar__link", to: Route::Performance {}, "{label}" } ),
/// });
/// ```
///
/// Without a registered builder the navbar renders whatever `children` it
/// was given.
pub struct NavBuilder {
    pub activities: fn(label: &str) -> Element,
    pub performance: fn(label: &str) -> Element,
}

static NAV_BUILDER: OnceCell<NavBuilder> = OnceCell::new();

pub fn register_nav(builder: NavBuilder) {
    let _ = NAV_BUILDER.set(builder);
}

#[component]
pub fn AppNavbar(children: Element) -> Element {
    rsx! {
        nav { id: "navbar", class: "navbar",
            span { class: "navbar__brand", "Running index" }
            if let Some(builder) = NAV_BUILDER.get() {
                {(builder.activities)("Activities")}
                {(builder.performance)("Performance")}
            } else {
                {children}
            }
        }
    }
}
