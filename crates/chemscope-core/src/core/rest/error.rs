use thiserror::Error;

/// The failure taxonomy for remote calls.
///
/// Three modes exist: network failure, a non-success HTTP status, and a
/// malformed response body. A well-formed response with no usable result is
/// not a transport failure; the lookup layer models that case itself.
/// Nothing here retries or logs.
#[derive(Debug, Error)]
pub enum RestError {
    /// The request could not be completed at the transport level.
    #[error("network error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status code.
    #[error("unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    /// The response body did not match the expected shape.
    #[error("malformed response: {0}")]
    Decode(#[from] serde_json::Error),
}
