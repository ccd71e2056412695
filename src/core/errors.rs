use thiserror::Error;

/*-------------------------------------------------------------------------------------------------
  Errors and Results
-------------------------------------------------------------------------------------------------*/

/// Errors that can occur while fetching and decoding a CDN address list.
///
/// The fact-facing operations never return these; they are logged and the fact reports an
/// empty list. The `try_*` operations return them for callers that want the detail.
#[derive(Debug, Error)]
pub enum Error {
    /// The endpoint descriptor (host, port, path) does not form a valid HTTPS URL.
    #[error("invalid endpoint: {0}")]
    Endpoint(String),

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// DNS resolution, connect, TLS handshake, timeout or body read failure.
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("unexpected HTTP status {status} from {url}")]
    Protocol { url: String, status: u16 },

    /// The response body could not be decoded.
    #[error("invalid response body: {0}")]
    Decode(#[from] serde_json::Error),
}

// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;

/*--------------------------------------------------------------------------------------
  Log Error Function
--------------------------------------------------------------------------------------*/

#[cfg(test)]
pub(crate) fn log_error(error: &Error) {
    log::error!("{}", error);
}
