//! API utilities for the contact and careers endpoints
//!
//! Provides helper functions for constructing API URLs and posting forms.

use super::config::site_config;
use contracts::shared::contact::ContactErrorBody;
use contracts::shared::form::SubmitOutcome;
use futures::future::{select, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use serde::Serialize;

/// Get the base URL for API requests
///
/// Uses `api.base_url` from the site config; when it is empty the API is
/// expected on the same origin as the page.
///
/// # Returns
/// - API base URL like "https://api.example.com" or "https://example.com"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let configured = site_config().api.base_url.trim_end_matches('/');
    if !configured.is_empty() {
        return configured.to_string();
    }

    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    window.location().origin().unwrap_or_default()
}

/// Build a full API URL from a path
///
/// # Example
/// ```rust,ignore
/// let url = api_url("/contact");
/// ```
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

async fn send_json<T: Serialize>(url: String, body: &T) -> Result<SubmitOutcome, String> {
    let response = Request::post(&url)
        .json(body)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if response.ok() {
        return Ok(SubmitOutcome::Accepted);
    }

    let status = response.status();
    match response.json::<ContactErrorBody>().await {
        Ok(body) => Ok(SubmitOutcome::Rejected {
            message: body.message,
            errors: body.errors.unwrap_or_default(),
        }),
        Err(e) => Err(format!("Request failed: {} ({})", status, e)),
    }
}

/// POST `body` as JSON to `path` and map every result to a `SubmitOutcome`.
///
/// Bounded by `api.submit_timeout_ms`; a timeout counts as a failure so the
/// form never stays in Submitting.
pub async fn post_form<T: Serialize>(path: &str, body: &T) -> SubmitOutcome {
    let url = api_url(path);
    let timeout_ms = site_config().api.submit_timeout_ms;

    let request = Box::pin(send_json(url.clone(), body));
    let timeout = Box::pin(TimeoutFuture::new(timeout_ms));

    match select(request, timeout).await {
        Either::Left((Ok(outcome), _)) => outcome,
        Either::Left((Err(e), _)) => SubmitOutcome::Failed(e),
        Either::Right(_) => {
            log::warn!("POST {} timed out after {} ms", url, timeout_ms);
            SubmitOutcome::Failed(format!("timeout after {} ms", timeout_ms))
        }
    }
}
