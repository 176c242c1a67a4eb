use dioxus::prelude::*;

use crate::dashboards::ActivitiesDashboard;

#[component]
pub fn Activities() -> Element {
    rsx! {
        section { class: "page page-activities",
            h1 { "Activities" }
            p { "Pick a year range and press Show to chart the running index of every logged activity." }
            ActivitiesDashboard {}
        }
    }
}
