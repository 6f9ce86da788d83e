//! HTTP API Client
//!
//! Functions for communicating with the bot control panel API.

use gloo_net::http::Request;

use crate::chart::IndicatorPayload;

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:5000/api";

/// Get the API base URL from local storage or use default
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("botboard_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

/// Error body returned by the API
#[derive(Debug, serde::Deserialize)]
pub struct ApiError {
    pub error: String,
    #[serde(default)]
    pub code: Option<String>,
}

/// Fetch the technical-analysis frames for every running bot.
///
/// Called once on page load. There is no retry; a failure leaves the chart
/// absent.
pub async fn fetch_indicator_frames() -> Result<IndicatorPayload, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/technical-analysis", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let error: ApiError = response.json().await.unwrap_or(ApiError {
            error: "Unknown error".to_string(),
            code: None,
        });
        return Err(error.error);
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
