use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::header::CACHE_CONTROL;
use serde_json::Value;

/// Fixed location of the remote project document. Not configurable.
pub const REMOTE_JSON_URL: &str =
    "https://dev.deepthought.education/assets/uploads/files/files/others/ddugky_project.json";

// A hung remote must not stall startup forever
const FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Error type for the remote fetch
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("remote returned status {0}")]
    Status(reqwest::StatusCode),
}

/// GET the remote document, bypassing intermediary caches.
/// Any non-2xx status is an error, and the body must parse as JSON.
pub fn fetch_remote(url: &str) -> Result<Value, FetchError> {
    let client = Client::builder().timeout(FETCH_TIMEOUT).build()?;
    let response = client.get(url).header(CACHE_CONTROL, "no-cache").send()?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    Ok(response.json()?)
}
