use std::rc::Rc;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;

use crate::charts::{ChartHandle, PlatformBackend};
use crate::core::config::PageConfig;
use crate::core::fetch::StatsClient;
use crate::core::request::RequestSlot;
use crate::core::years::parse_year;
use crate::dashboards::{load_series, report};

use super::series::{activity_series, ACTIVITIES_CANVAS_ID, ACTIVITIES_STYLE};

/// Request id, year range selectors and the activities chart.
///
/// The chart is (re)built only when the button is pressed.
#[component]
pub fn ActivitiesDashboard() -> Element {
    let config = try_use_context::<PageConfig>().unwrap_or_default();
    let client = use_hook(|| Rc::new(StatsClient::new(&config)));

    let mut request_guid = use_signal(|| config.request_guid.clone());
    let mut years = use_signal(|| config.year_range());
    let chart = use_signal(|| {
        ChartHandle::new(
            PlatformBackend::default(),
            ACTIVITIES_CANVAS_ID,
            ACTIVITIES_STYLE,
        )
    });
    let mut requests = use_signal(RequestSlot::default);
    let last_error = use_signal(|| Option::<String>::None);

    let build_chart = move |_| {
        let client = client.clone();
        let guid = request_guid();
        let range = years();
        let request = requests.write().supersede(async move {
            client
                .activities(&guid, range.start(), range.finish())
                .await
        });

        let mut chart = chart;
        spawn(async move {
            let outcome =
                load_series(request, activity_series, |series| chart.write().render(series)).await;
            report("activities", outcome, last_error);
        });
    };

    let on_start_change = move |evt: FormEvent| match parse_year(&evt.value()) {
        Some(year) => years.write().select_start(year),
        None => warn!(value = %evt.value(), "ignoring unparsable yearStart"),
    };

    let on_finish_change = move |evt: FormEvent| match parse_year(&evt.value()) {
        Some(year) => years.write().select_finish(year),
        None => warn!(value = %evt.value(), "ignoring unparsable yearFinish"),
    };

    let range = years();
    let guid_value = request_guid();
    let (points, drawn) = chart.with(|handle| (handle.data().len(), handle.is_drawn()));

    rsx! {
        section { class: "dashboard dashboard-activities",
            div { class: "dashboard__controls",
                label { class: "dashboard__field",
                    span { class: "dashboard__label", "Request" }
                    input {
                        id: "requestGuidInput",
                        r#type: "text",
                        class: "dashboard__input",
                        value: "{guid_value}",
                        oninput: move |evt| request_guid.set(evt.value()),
                    }
                }
                label { class: "dashboard__field",
                    span { class: "dashboard__label", "From" }
                    select {
                        id: "yearStart",
                        class: "dashboard__select",
                        onchange: on_start_change,
                        for year in range.start_options().iter().copied() {
                            option {
                                key: "{year}",
                                value: "{year}",
                                selected: range.start() == Some(year),
                                "{year}"
                            }
                        }
                    }
                }
                label { class: "dashboard__field",
                    span { class: "dashboard__label", "To" }
                    select {
                        id: "yearFinish",
                        class: "dashboard__select",
                        onchange: on_finish_change,
                        for year in range.finish_options().iter().copied() {
                            option {
                                key: "{year}",
                                value: "{year}",
                                selected: range.finish() == Some(year),
                                "{year}"
                            }
                        }
                    }
                }
                button {
                    id: "chartButton",
                    r#type: "button",
                    class: "button button--primary",
                    onclick: build_chart,
                    "Show"
                }
            }

            div { class: "dashboard__chart",
                canvas { id: ACTIVITIES_CANVAS_ID }
            }

            if drawn {
                span { class: "dashboard__meta", "{points} activities" }
            }

            if let Some(err) = last_error() {
                div { class: "dashboard__error", "⚠️ {err}" }
            }
        }
    }
}
