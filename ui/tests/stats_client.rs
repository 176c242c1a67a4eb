//! Exercises the native statistics client against an in-process server that
//! mimics the `/rest/request` endpoints.

use std::collections::HashMap;
use std::time::Duration;

use axum::{
    extract::{Path, Query},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Router,
};
use serde_json::json;
use tokio::net::TcpListener;

use ui::core::config::PageConfig;
use ui::core::fetch::{FetchError, StatsClient};
use ui::core::records::Reading;

async fn activities(
    Path(guid): Path<String>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    match guid.as_str() {
        "broken" => (StatusCode::INTERNAL_SERVER_ERROR, "boom".to_string()),
        "garbled" => (StatusCode::OK, "<html>not json</html>".to_string()),
        "nothing" => (StatusCode::OK, "null".to_string()),
        "none" => (StatusCode::OK, "[]".to_string()),
        _ => {
            // Echo the requested range back through the records.
            let start = params.get("yearStart").cloned().unwrap_or_default();
            let finish = params.get("yearFinish").cloned().unwrap_or_default();
            let body = json!([
                {
                    "eventDate": format!("{start}-04-01"),
                    "distance": 10.2,
                    "duration": "00:51:40",
                    "avgPace": "5:04",
                    "avgHr": 149,
                    "elevationGain": 66,
                    "runningIndex": 53.0
                },
                {
                    "eventDate": format!("{finish}-09-12"),
                    "distance": 21.1,
                    "duration": "01:49:02",
                    "avgPace": "5:10",
                    "avgHr": 155,
                    "elevationGain": null,
                    "runningIndex": 54.5
                }
            ]);
            (StatusCode::OK, body.to_string())
        }
    }
}

async fn statistic(Path(guid): Path<String>) -> impl IntoResponse {
    if guid == "slow" {
        tokio::time::sleep(Duration::from_millis(500)).await;
    }
    let body = json!([
        { "year": 2020, "week": 52, "avgRunningIndex": 50.5 },
        { "year": 2021, "week": 1, "avgRunningIndex": 51.0 },
        { "year": 2021, "week": 2, "avgRunningIndex": 49.75 }
    ]);
    (StatusCode::OK, body.to_string())
}

async fn spawn_server() -> String {
    let app = Router::new()
        .route("/rest/request/:guid", get(activities))
        .route("/rest/request/:guid/statistic", get(statistic));
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind random port");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn client(base: &str, timeout_ms: u64) -> StatsClient {
    StatsClient::new(&PageConfig {
        api_base: base.to_string(),
        request_timeout_ms: timeout_ms,
        ..PageConfig::default()
    })
}

#[tokio::test]
async fn activities_pass_year_range_as_query() {
    let base = spawn_server().await;
    let records = client(&base, 5_000)
        .activities("abc-123", Some(2019), Some(2021))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].event_date, Reading::Text("2019-04-01".into()));
    assert_eq!(records[1].event_date, Reading::Text("2021-09-12".into()));
    assert_eq!(records[1].elevation_gain, Reading::Missing);
    assert_eq!(records[1].running_index, 54.5);
}

#[tokio::test]
async fn statistic_endpoint_returns_weeks_in_order() {
    let base = spawn_server().await;
    let records = client(&base, 5_000)
        .performance("abc-123")
        .await
        .unwrap()
        .unwrap();

    let weeks: Vec<(i32, u32)> = records.iter().map(|r| (r.year, r.week)).collect();
    assert_eq!(weeks, vec![(2020, 52), (2021, 1), (2021, 2)]);
    assert_eq!(records[2].avg_running_index, 49.75);
}

#[tokio::test]
async fn empty_and_null_bodies_are_distinguished() {
    let base = spawn_server().await;
    let client = client(&base, 5_000);

    let empty = client.activities("none", Some(2020), Some(2020)).await.unwrap();
    assert_eq!(empty, Some(Vec::new()));

    let null = client.activities("nothing", None, None).await.unwrap();
    assert_eq!(null, None);
}

#[tokio::test]
async fn server_errors_surface_as_status() {
    let base = spawn_server().await;
    let err = client(&base, 5_000)
        .activities("broken", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Status(500)));
}

#[tokio::test]
async fn garbled_bodies_surface_as_decode_errors() {
    let base = spawn_server().await;
    let err = client(&base, 5_000)
        .activities("garbled", None, None)
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn slow_responses_time_out() {
    let base = spawn_server().await;
    let err = client(&base, 100).performance("slow").await.unwrap_err();
    assert!(matches!(err, FetchError::Timeout(100)));
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let err = client(&format!("http://{addr}"), 2_000)
        .performance("abc-123")
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}
