//! Client for the statistics endpoints.
//!
//! Browser builds go through `window.fetch`; native builds use `reqwest`.
//! Both return the raw body, which is decoded the same way on every platform.

use dioxus::logger::tracing::debug;
#[cfg(not(target_arch = "wasm32"))]
use dioxus::logger::tracing::warn;
use serde::de::DeserializeOwned;
use thiserror::Error;
use url::Url;

use super::config::PageConfig;
use super::records::{ActivityRecord, PerformanceRecord};

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Network(String),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("request timed out after {0} ms")]
    Timeout(u64),
    #[error("invalid API base {0}")]
    InvalidBase(String),
}

/// URL of the per-activity endpoint. Years without a selection are omitted.
pub fn activities_url(
    base: &Url,
    request_guid: &str,
    year_start: Option<i32>,
    year_finish: Option<i32>,
) -> Result<Url, FetchError> {
    let mut url = endpoint(base, &[request_guid])?;
    if year_start.is_some() || year_finish.is_some() {
        let mut query = url.query_pairs_mut();
        if let Some(year) = year_start {
            query.append_pair("yearStart", &year.to_string());
        }
        if let Some(year) = year_finish {
            query.append_pair("yearFinish", &year.to_string());
        }
    }
    Ok(url)
}

/// URL of the weekly statistics endpoint.
pub fn statistic_url(base: &Url, request_guid: &str) -> Result<Url, FetchError> {
    endpoint(base, &[request_guid, "statistic"])
}

/// `{base}/rest/request/{segments..}`, each segment percent-encoded on its own.
fn endpoint(base: &Url, segments: &[&str]) -> Result<Url, FetchError> {
    let mut url = base.clone();
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| FetchError::InvalidBase(base.to_string()))?
        .pop_if_empty()
        .extend(["rest", "request"])
        .extend(segments);
    Ok(url)
}

/// Decode a JSON array body. A `null` body yields `None`.
pub fn decode_list<T: DeserializeOwned>(body: &str) -> Result<Option<Vec<T>>, FetchError> {
    Ok(serde_json::from_str(body)?)
}

#[derive(Debug, Clone)]
pub struct StatsClient {
    api_base: String,
    timeout_ms: u64,
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
}

impl StatsClient {
    pub fn new(config: &PageConfig) -> Self {
        let api_base = config.api_base.trim().to_string();
        let timeout_ms = config.request_timeout_ms;

        #[cfg(not(target_arch = "wasm32"))]
        {
            // The timeout is set per request, so a fallback client still honours it.
            let http = reqwest::Client::builder().build().unwrap_or_else(|err| {
                warn!(%err, "HTTP client setup failed; using the default client");
                reqwest::Client::default()
            });
            Self {
                api_base,
                timeout_ms,
                http,
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            Self {
                api_base,
                timeout_ms,
            }
        }
    }

    /// The configured base as an absolute URL. A relative or empty base is
    /// resolved against the hosting page's origin.
    fn base_url(&self) -> Result<Url, FetchError> {
        let invalid =
            |err: url::ParseError| FetchError::InvalidBase(format!("{:?}: {err}", self.api_base));
        match Url::parse(&self.api_base) {
            Ok(url) => Ok(url),
            Err(url::ParseError::RelativeUrlWithoutBase) => {
                page_origin()?.join(&self.api_base).map_err(invalid)
            }
            Err(err) => Err(invalid(err)),
        }
    }

    pub async fn activities(
        &self,
        request_guid: &str,
        year_start: Option<i32>,
        year_finish: Option<i32>,
    ) -> Result<Option<Vec<ActivityRecord>>, FetchError> {
        let url = activities_url(&self.base_url()?, request_guid, year_start, year_finish)?;
        self.get_list(&url).await
    }

    pub async fn performance(
        &self,
        request_guid: &str,
    ) -> Result<Option<Vec<PerformanceRecord>>, FetchError> {
        let url = statistic_url(&self.base_url()?, request_guid)?;
        self.get_list(&url).await
    }

    async fn get_list<T: DeserializeOwned>(&self, url: &Url) -> Result<Option<Vec<T>>, FetchError> {
        debug!(%url, "fetching statistics");
        let body = self.get_text(url.as_str()).await?;
        decode_list(&body)
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http
            .get(url)
            .timeout(std::time::Duration::from_millis(self.timeout_ms))
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| self.transport_error(err))?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status(status.as_u16()));
        }
        response
            .text()
            .await
            .map_err(|err| self.transport_error(err))
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn transport_error(&self, err: reqwest::Error) -> FetchError {
        if err.is_timeout() {
            FetchError::Timeout(self.timeout_ms)
        } else {
            FetchError::Network(err.to_string())
        }
    }

    #[cfg(target_arch = "wasm32")]
    async fn get_text(&self, url: &str) -> Result<String, FetchError> {
        use futures::future::{select, Either};
        use gloo_timers::future::TimeoutFuture;

        let request = Box::pin(browser_get(url));
        let deadline = Box::pin(TimeoutFuture::new(
            u32::try_from(self.timeout_ms).unwrap_or(u32::MAX),
        ));
        match select(request, deadline).await {
            Either::Left((outcome, _)) => outcome,
            Either::Right(_) => Err(FetchError::Timeout(self.timeout_ms)),
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn page_origin() -> Result<Url, FetchError> {
    let origin = web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .ok_or_else(|| FetchError::InvalidBase("page origin unavailable".into()))?;
    Url::parse(&origin).map_err(|err| FetchError::InvalidBase(format!("{origin}: {err}")))
}

#[cfg(not(target_arch = "wasm32"))]
fn page_origin() -> Result<Url, FetchError> {
    Err(FetchError::InvalidBase("a relative base needs a hosting page".into()))
}

#[cfg(target_arch = "wasm32")]
async fn browser_get(url: &str) -> Result<String, FetchError> {
    use wasm_bindgen::{JsCast, JsValue};
    use wasm_bindgen_futures::JsFuture;
    use web_sys::{Request, RequestInit, Response};

    fn js_error(value: JsValue) -> FetchError {
        FetchError::Network(
            value
                .as_string()
                .unwrap_or_else(|| format!("{value:?}")),
        )
    }

    let window = web_sys::window().ok_or_else(|| FetchError::Network("window unavailable".into()))?;

    let init = RequestInit::new();
    init.set_method("GET");
    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(js_error)?;

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into::<Response>()
        .map_err(|_| FetchError::Network("fetch did not yield a Response".into()))?;

    if !response.ok() {
        return Err(FetchError::Status(response.status()));
    }

    let text = JsFuture::from(response.text().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(text.as_string().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("http://stats.test/").unwrap()
    }

    #[test]
    fn activities_url_carries_both_years() {
        let url = activities_url(&base(), "a1b2", Some(2019), Some(2021)).unwrap();
        assert_eq!(
            url.as_str(),
            "http://stats.test/rest/request/a1b2?yearStart=2019&yearFinish=2021"
        );
    }

    #[test]
    fn activities_url_omits_unselected_years() {
        let url = activities_url(&base(), "a1b2", None, Some(2021)).unwrap();
        assert_eq!(url.as_str(), "http://stats.test/rest/request/a1b2?yearFinish=2021");

        let url = activities_url(&base(), "a1b2", None, None).unwrap();
        assert_eq!(url.as_str(), "http://stats.test/rest/request/a1b2");
        assert_eq!(url.query(), None);
    }

    #[test]
    fn statistic_url_appends_suffix() {
        let url = statistic_url(&base(), "0f8fad5b-d9cb-469f-a165-70867728950e").unwrap();
        assert_eq!(
            url.as_str(),
            "http://stats.test/rest/request/0f8fad5b-d9cb-469f-a165-70867728950e/statistic"
        );
    }

    #[test]
    fn guid_is_encoded_as_one_segment() {
        let url = statistic_url(&base(), "a/b c").unwrap();
        assert_eq!(url.path(), "/rest/request/a%2Fb%20c/statistic");

        let url = activities_url(&base(), "ü", None, None).unwrap();
        assert_eq!(url.path(), "/rest/request/%C3%BC");
    }

    #[test]
    fn base_path_is_kept_with_or_without_trailing_slash() {
        for raw in ["http://stats.test/api", "http://stats.test/api/"] {
            let base = Url::parse(raw).unwrap();
            let url = statistic_url(&base, "g").unwrap();
            assert_eq!(url.as_str(), "http://stats.test/api/rest/request/g/statistic");
        }
    }

    #[test]
    fn base_query_and_fragment_are_dropped() {
        let base = Url::parse("http://stats.test/?debug=1#top").unwrap();
        let url = activities_url(&base, "g", Some(2020), None).unwrap();
        assert_eq!(url.as_str(), "http://stats.test/rest/request/g?yearStart=2020");
    }

    #[test]
    fn opaque_base_is_rejected() {
        let base = Url::parse("mailto:runner@example.org").unwrap();
        let err = statistic_url(&base, "g").unwrap_err();
        assert!(matches!(err, FetchError::InvalidBase(_)));
    }

    #[test]
    fn decode_distinguishes_null_and_empty() {
        let empty: Option<Vec<PerformanceRecord>> = decode_list("[]").unwrap();
        assert_eq!(empty, Some(Vec::new()));

        let null: Option<Vec<PerformanceRecord>> = decode_list("null").unwrap();
        assert_eq!(null, None);
    }

    #[test]
    fn decode_reports_malformed_bodies() {
        let err = decode_list::<PerformanceRecord>("<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));

        let err = decode_list::<PerformanceRecord>(r#"[{"year": 2020}]"#).unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn absolute_base_is_used_as_is() {
        let client = StatsClient::new(&PageConfig {
            api_base: "http://127.0.0.1:8080/".into(),
            ..PageConfig::default()
        });
        assert_eq!(client.base_url().unwrap().as_str(), "http://127.0.0.1:8080/");
    }

    #[test]
    fn relative_base_needs_a_hosting_page() {
        let client = StatsClient::new(&PageConfig::default());
        let err = client.base_url().unwrap_err();
        assert!(matches!(err, FetchError::InvalidBase(_)));
    }
}
