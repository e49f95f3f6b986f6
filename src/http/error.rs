//! Classification of failed download responses.

use reqwest::StatusCode;

/// A download that reached the server but was answered with a non-success status.
#[derive(Debug)]
pub enum DownloadError {
    /// No artifact exists at the requested URL (HTTP 404)
    NotFound(String),
    /// Any other 4xx response
    ClientError(u16),
    /// Any 5xx response
    ServerError(u16),
    /// Anything else that `error_for_status` rejected
    Unexpected(u16),
}

impl std::fmt::Display for DownloadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DownloadError::NotFound(url) => {
                write!(
                    f,
                    "No prebuilt binary found at {}. Your platform may not be supported.",
                    url
                )
            }
            DownloadError::ClientError(status) => {
                write!(f, "Download request rejected with HTTP {}", status)
            }
            DownloadError::ServerError(status) => {
                write!(f, "Download server error: HTTP {}. Try again later.", status)
            }
            DownloadError::Unexpected(status) => {
                write!(f, "Unexpected HTTP {} response", status)
            }
        }
    }
}

impl std::error::Error for DownloadError {}

/// Turns an error from `error_for_status()` into a user-facing [`DownloadError`].
/// Errors without a status (connection, TLS, DNS) are passed through untouched.
pub fn classify_error(error: reqwest::Error) -> anyhow::Error {
    let Some(status) = error.status() else {
        return anyhow::Error::from(error);
    };

    let classified = match status {
        StatusCode::NOT_FOUND => DownloadError::NotFound(
            error
                .url()
                .map(|url| url.to_string())
                .unwrap_or_else(|| "the requested URL".to_string()),
        ),
        s if s.is_client_error() => DownloadError::ClientError(s.as_u16()),
        s if s.is_server_error() => DownloadError::ServerError(s.as_u16()),
        s => DownloadError::Unexpected(s.as_u16()),
    };

    anyhow::Error::from(classified)
}
