use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors from the admin client and session store.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Request never got a response
    #[error("Network error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Non-success response, with the server's message when it sent one
    #[error("{message} (HTTP {status})")]
    Api { status: u16, message: String },

    #[error("Session expired. Please sign in again.")]
    SessionExpired,

    #[error("Not signed in. Run `safari-blog login` first.")]
    NotLoggedIn,

    #[error("Session file {}: {source}", path.display())]
    SessionFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("{0}")]
    Invalid(String),
}

pub type Result<T> = std::result::Result<T, AdminError>;

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a failed response to an error.
///
/// On authenticated requests 401 and 403 mean the stored token is no longer
/// accepted. Elsewhere (login) they carry the server's explanation.
pub(crate) fn error_for_status(
    status: u16,
    body: &str,
    authenticated: bool,
    fallback: &str,
) -> AdminError {
    if authenticated && matches!(status, 401 | 403) {
        return AdminError::SessionExpired;
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
        .unwrap_or_else(|| fallback.to_string());

    AdminError::Api { status, message }
}
