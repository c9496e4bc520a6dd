//! Low-level Fetch API plumbing.
//!
//! Thin wrappers over `web_sys` fetch: a JSON GET and multipart POSTs. Every
//! request is fire-and-forget from the caller's point of view; there is no
//! timeout, cancellation, or de-duplication. A hung backend hangs the
//! corresponding UI element.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Request, RequestInit, RequestMode, Response};

use super::error::FetchError;

/// JSON body the backend attaches to non-2xx responses.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    detail: Option<String>,
}

/// Fetch and parse JSON from a URL.
pub async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let text = send(url, &opts).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParse(e.to_string()))
}

/// POST a multipart form and parse the JSON response.
pub async fn post_form<T: DeserializeOwned>(url: &str, form: &FormData) -> Result<T, FetchError> {
    let text = post_form_raw(url, form).await?;
    serde_json::from_str(&text).map_err(|e| FetchError::JsonParse(e.to_string()))
}

/// POST a multipart form, ignoring the response body on success.
pub async fn post_form_discard(url: &str, form: &FormData) -> Result<(), FetchError> {
    post_form_raw(url, form).await.map(|_| ())
}

async fn post_form_raw(url: &str, form: &FormData) -> Result<String, FetchError> {
    let opts = RequestInit::new();
    opts.set_method("POST");
    opts.set_mode(RequestMode::Cors);
    opts.set_body(form.as_ref());

    send(url, &opts).await
}

/// Dispatch a request and return the response body text.
///
/// Non-2xx responses become [`FetchError::Api`], carrying the body's `detail`
/// field when it parses as the backend's error shape.
async fn send(url: &str, opts: &RequestInit) -> Result<String, FetchError> {
    let window = web_sys::window().ok_or(FetchError::NoWindow)?;

    let request =
        Request::new_with_str_and_init(url, opts).map_err(|_| FetchError::RequestCreationFailed)?;

    let resp_value = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| {
            FetchError::Network(e.as_string().unwrap_or_else(|| "fetch rejected".to_string()))
        })?;

    let resp: Response = resp_value.dyn_into().map_err(|_| FetchError::InvalidContent)?;

    // Read the body in both cases; error bodies carry the failure detail.
    let text = read_text(&resp).await?;

    if !resp.ok() {
        let detail = serde_json::from_str::<ErrorBody>(&text)
            .ok()
            .and_then(|body| body.detail);
        return Err(FetchError::Api {
            status: resp.status(),
            detail,
        });
    }

    Ok(text)
}

async fn read_text(resp: &Response) -> Result<String, FetchError> {
    let text = JsFuture::from(resp.text().map_err(|_| FetchError::ResponseReadFailed)?)
        .await
        .map_err(|_| FetchError::ResponseReadFailed)?;
    text.as_string().ok_or(FetchError::InvalidContent)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_body_detail_parses() {
        let body: ErrorBody = serde_json::from_str(r#"{"detail": "index missing"}"#).unwrap();
        assert_eq!(body.detail.as_deref(), Some("index missing"));
    }

    #[test]
    fn test_error_body_without_detail() {
        let body: ErrorBody = serde_json::from_str("{}").unwrap();
        assert!(body.detail.is_none());
    }
}
