//! Error taxonomy for articles API round-trips.

use reqwest::StatusCode;

/// Failure of a single API round-trip.
///
/// Every operation catches these locally and turns them into a user-visible
/// message; nothing here crosses the workspace boundary as a raw error.
#[derive(Debug)]
pub enum ApiError {
    /// The request never produced a usable HTTP exchange: connection refused,
    /// DNS failure, timeout, or an undecodable body (reqwest reports all of
    /// these through the same error type).
    Transport(reqwest::Error),
    /// The server rejected the presented token (HTTP 401).
    AuthRejected,
    /// Any other non-acting status, with the server's human-readable detail
    /// when the body carried one.
    Server {
        status: StatusCode,
        detail: String,
    },
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Transport(err) => write!(f, "{err}"),
            ApiError::AuthRejected => write!(f, "authentication rejected (HTTP 401)"),
            ApiError::Server { status, detail } => {
                if detail.is_empty() {
                    write!(f, "server error (HTTP {status})")
                } else {
                    f.write_str(detail)
                }
            }
        }
    }
}

impl std::error::Error for ApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ApiError::Transport(err) => Some(err),
            _ => None,
        }
    }
}
