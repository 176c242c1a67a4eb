use std::rc::Rc;

use dioxus::prelude::*;

use crate::charts::{ChartHandle, PlatformBackend};
use crate::core::config::PageConfig;
use crate::core::fetch::StatsClient;
use crate::core::request::RequestSlot;
use crate::dashboards::{load_series, report};

use super::series::{performance_series, PERFORMANCE_CANVAS_ID, PERFORMANCE_STYLE};

/// Weekly running index chart, loaded once when the view mounts.
#[component]
pub fn PerformanceDashboard() -> Element {
    let config = try_use_context::<PageConfig>().unwrap_or_default();
    let client = use_hook(|| Rc::new(StatsClient::new(&config)));

    let request_guid = use_signal(|| config.request_guid.clone());
    let chart = use_signal(|| {
        ChartHandle::new(
            PlatformBackend::default(),
            PERFORMANCE_CANVAS_ID,
            PERFORMANCE_STYLE,
        )
    });
    let mut requests = use_signal(RequestSlot::default);
    let last_error = use_signal(|| Option::<String>::None);

    use_effect(move || {
        let client = client.clone();
        let guid = request_guid.peek().clone();
        let request =
            requests.write().supersede(async move { client.performance(&guid).await });

        let mut chart = chart;
        spawn(async move {
            let outcome =
                load_series(request, performance_series, |series| chart.write().render(series))
                    .await;
            report("performance statistics", outcome, last_error);
        });
    });

    let guid_value = request_guid();
    let (weeks, drawn) = chart.with(|handle| (handle.data().len(), handle.is_drawn()));

    rsx! {
        section { class: "dashboard dashboard-performance",
            input { id: "requestGuidInput", r#type: "hidden", value: "{guid_value}" }

            div { class: "dashboard__chart",
                canvas { id: PERFORMANCE_CANVAS_ID }
            }

            if drawn {
                span { class: "dashboard__meta", "{weeks} weeks" }
            }

            if let Some(err) = last_error() {
                div { class: "dashboard__error", "⚠️ {err}" }
            }
        }
    }
}
