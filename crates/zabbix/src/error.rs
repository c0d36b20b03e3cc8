//! Error taxonomy for the upstream RPC layer.

/// Errors surfaced by [`crate::ZabbixClient`] operations.
#[derive(Debug, thiserror::Error)]
pub enum ZabbixError {
    /// The HTTP request itself failed (connection, DNS, timeout, ...).
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    /// The upstream answered with a non-200 HTTP status. The body is
    /// never decoded as a success in this case.
    #[error("upstream returned HTTP status {status}")]
    Status {
        /// HTTP status code.
        status: u16,
    },

    /// The response body could not be decoded, or a field had the
    /// wrong type.
    #[error("malformed upstream response: {0}")]
    Malformed(String),

    /// The upstream returned a structured application error. The
    /// upstream message is preserved verbatim.
    #[error("upstream rejected request: {0}")]
    Rejected(String),

    /// Login was attempted with an empty username or password; no
    /// network call is made.
    #[error("username and password must not be empty")]
    EmptyCredentials,
}
