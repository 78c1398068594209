//! HTTP client for the review service.
//!
//! One method per server operation. Non-2xx responses become
//! [`ApiError::Server`] carrying the JSON body's `detail` message when the
//! server sent one. The admin bearer token lives in the client itself for the
//! lifetime of the tab; authenticated methods fail fast with
//! [`ApiError::NotAuthenticated`] before touching the network.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{
    AdminSettings, HealthStatus, LoginResponse, ReviewResult, SaveResponse, ToneInfo, UsageStats,
};
use std::sync::OnceLock;

use crate::store::SelectedFile;

/// Get the API base URL based on current environment
/// - In development (localhost): use http://localhost:8000
/// - In production: use same origin (the service serves the static bundle)
fn get_api_base() -> String {
    let hostname = web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default();

    if hostname == "localhost" || hostname == "127.0.0.1" {
        "http://localhost:8000".to_string()
    } else {
        "".to_string()
    }
}

/// Lazy-static equivalent for WASM - computed at first use
static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// Get the cached API base URL
pub fn api_base() -> &'static str {
    API_BASE_CACHE.get_or_init(get_api_base).as_str()
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// An authenticated call was attempted with no token set. Raised before
    /// any request is made — an empty bearer header is never sent.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The server answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// The request never completed (offline, DNS, CORS, ...).
    #[error("Request failed: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Failed to parse response: {0}")]
    Decode(String),
}

/// Read a failed response's `detail` message, falling back to the status.
async fn error_from_response(response: Response) -> ApiError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();

    let message = serde_json::from_str::<serde_json::Value>(&body)
        .ok()
        .and_then(|json| {
            json.get("detail")
                .and_then(|v| v.as_str())
                .map(str::to_string)
        })
        .unwrap_or_else(|| format!("HTTP error: {status}"));

    ApiError::Server { status, message }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        return Err(error_from_response(response).await);
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

fn network(e: gloo_net::Error) -> ApiError {
    ApiError::Network(e.to_string())
}

/// The review option ids as the server expects them: one comma-delimited
/// query value.
pub fn options_query(options: &[String]) -> String {
    options.join(",")
}

// ============================================================================
// Client
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ApiClient {
    base: String,
    admin_token: Option<String>,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            admin_token: None,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.admin_token.is_some()
    }

    /// Drop the admin session. The token only ever lives in memory.
    pub fn clear_admin_token(&mut self) {
        self.admin_token = None;
    }

    fn bearer(&self) -> Result<String, ApiError> {
        match &self.admin_token {
            Some(token) => Ok(format!("Bearer {token}")),
            None => Err(ApiError::NotAuthenticated),
        }
    }

    pub async fn health(&self) -> Result<HealthStatus, ApiError> {
        let url = format!("{}/health", self.base);
        let response = Request::get(&url).send().await.map_err(network)?;
        decode(response).await
    }

    pub async fn tones(&self) -> Result<ToneInfo, ApiError> {
        let url = format!("{}/tones", self.base);
        let response = Request::get(&url).send().await.map_err(network)?;
        decode(response).await
    }

    /// Submit a manuscript for review. The file goes up as multipart form
    /// data under the `file` field with its original name and MIME type; the
    /// chosen option ids ride along as one comma-delimited query parameter.
    pub async fn submit_review(
        &self,
        file: &SelectedFile,
        options: &[String],
    ) -> Result<ReviewResult, ApiError> {
        let query = options_query(options);
        let encoded = js_sys::encode_uri_component(&query)
            .as_string()
            .unwrap_or(query);
        let url = format!("{}/review?options={}", self.base, encoded);

        let form = manuscript_form(file)?;
        let response = Request::post(&url)
            .body(form)
            .map_err(|e| ApiError::Network(format!("failed to encode request: {e}")))?
            .send()
            .await
            .map_err(network)?;

        decode(response).await
    }

    /// Exchange the admin password for a bearer token. On success the token
    /// is retained for subsequent authenticated calls.
    pub async fn admin_login(&mut self, password: &str) -> Result<LoginResponse, ApiError> {
        let url = format!("{}/admin/login", self.base);
        let response = Request::post(&url)
            .json(&serde_json::json!({ "password": password }))
            .map_err(|e| ApiError::Network(format!("failed to encode request: {e}")))?
            .send()
            .await
            .map_err(network)?;

        let login: LoginResponse = decode(response).await?;
        self.admin_token = Some(login.token.clone());
        Ok(login)
    }

    pub async fn admin_settings(&self) -> Result<AdminSettings, ApiError> {
        let bearer = self.bearer()?;
        let url = format!("{}/admin/settings", self.base);
        let response = Request::get(&url)
            .header("Authorization", &bearer)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    pub async fn update_tone(&self, tone: &str) -> Result<SaveResponse, ApiError> {
        let bearer = self.bearer()?;
        let url = format!("{}/admin/settings", self.base);
        let response = Request::post(&url)
            .header("Authorization", &bearer)
            .json(&serde_json::json!({ "tone": tone }))
            .map_err(|e| ApiError::Network(format!("failed to encode request: {e}")))?
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }

    pub async fn usage_stats(&self) -> Result<UsageStats, ApiError> {
        let bearer = self.bearer()?;
        let url = format!("{}/admin/usage", self.base);
        let response = Request::get(&url)
            .header("Authorization", &bearer)
            .send()
            .await
            .map_err(network)?;
        decode(response).await
    }
}

/// Build the multipart body for a manuscript submission.
fn manuscript_form(file: &SelectedFile) -> Result<web_sys::FormData, ApiError> {
    let upload_error = |_| ApiError::Network("failed to build upload body".to_string());

    let parts = js_sys::Array::new();
    parts.push(&js_sys::Uint8Array::from(file.bytes.as_slice()));

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(&file.mime);

    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&parts, &options)
        .map_err(upload_error)?;

    let form = web_sys::FormData::new().map_err(upload_error)?;
    form.append_with_blob_and_filename("file", &blob, &file.name)
        .map_err(upload_error)?;
    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_query_is_comma_delimited() {
        let options = vec!["typo".to_string(), "grammar".to_string(), "pacing".to_string()];
        assert_eq!(options_query(&options), "typo,grammar,pacing");
    }

    #[test]
    fn options_query_handles_single_option() {
        assert_eq!(options_query(&["typo".to_string()]), "typo");
    }

    #[test]
    fn authenticated_calls_fail_fast_without_token() {
        let client = ApiClient::new("http://localhost:8000");
        assert_eq!(client.bearer(), Err(ApiError::NotAuthenticated));
    }

    #[test]
    fn bearer_header_wraps_the_token() {
        let mut client = ApiClient::new("http://localhost:8000");
        client.admin_token = Some("tok-123".to_string());
        assert_eq!(client.bearer().unwrap(), "Bearer tok-123");
        assert!(client.is_authenticated());

        client.clear_admin_token();
        assert!(!client.is_authenticated());
    }

    #[test]
    fn server_error_displays_its_message() {
        let err = ApiError::Server {
            status: 422,
            message: "File is empty".to_string(),
        };
        assert_eq!(err.to_string(), "File is empty");
    }
}
