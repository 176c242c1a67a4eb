use dioxus::prelude::*;

use crate::dashboards::PerformanceDashboard;

#[component]
pub fn Performance() -> Element {
    rsx! {
        section { class: "page page-performance",
            h1 { "Performance" }
            p { "Average running index per week." }
            PerformanceDashboard {}
        }
    }
}
