//! HTTP transport for the inference service, backed by gloo-net.

use gloo_net::http::Request;
use predictor_core::{Clock, PredictionRequest, RawResponse, Transport};
use wasm_bindgen::JsValue;
use web_sys::{File, FormData, RequestCache};

/// Browser implementation of [`Transport`] using `fetch`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    type Payload = File;

    async fn post_file(
        &self,
        url: &str,
        request: &PredictionRequest<File>,
    ) -> Result<RawResponse, String> {
        let form_data = FormData::new().map_err(js_error)?;
        form_data
            .append_with_blob_and_filename(request.field(), request.payload(), request.filename())
            .map_err(js_error)?;

        let response = Request::post(url)
            .body(form_data)
            .map_err(transport_error)?
            .send()
            .await
            .map_err(transport_error)?;

        read_response(response).await
    }

    async fn get(&self, url: &str) -> Result<RawResponse, String> {
        let response = Request::get(url)
            .cache(RequestCache::NoStore)
            .send()
            .await
            .map_err(transport_error)?;

        read_response(response).await
    }
}

async fn read_response(response: gloo_net::http::Response) -> Result<RawResponse, String> {
    let status = response.status();
    // An unreadable body is left for the caller to treat as malformed.
    let body = response.text().await.unwrap_or_default();
    Ok(RawResponse { status, body })
}

/// [`Clock`] reading `performance.now()`, or `Date.now()` without it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PerformanceClock;

impl Clock for PerformanceClock {
    fn now_ms(&self) -> f64 {
        web_sys::window()
            .and_then(|w| w.performance())
            .map(|p| p.now())
            .unwrap_or_else(js_sys::Date::now)
    }
}

/// Message of a failed fetch, without the JS error name
/// (`"Failed to fetch"` rather than `"TypeError: Failed to fetch"`).
fn transport_error(e: gloo_net::Error) -> String {
    match e {
        gloo_net::Error::JsError(js) => js.message,
        other => other.to_string(),
    }
}

/// Extract a readable message from a thrown JS value.
pub fn js_error(e: JsValue) -> String {
    js_sys::Reflect::get(&e, &"message".into())
        .ok()
        .and_then(|v| v.as_string())
        .or_else(|| e.as_string())
        .unwrap_or_else(|| "Unknown JS error".to_string())
}
