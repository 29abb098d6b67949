//! Error types for proof API operations

use pob_core::CoreError;
use serde_json::Value;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur while talking to the proof API
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// Transport-level failure (connect, TLS, body read)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with a non-success status
    #[error("{endpoint} failed with status {status}: {payload}")]
    Status {
        endpoint: String,
        status: u16,
        /// Structured error payload, when the body was JSON
        body: Option<Value>,
        /// Rendered payload: the JSON body if any, else the raw text
        payload: String,
    },

    /// Pre-login response carried no `result.message`
    #[error("pre-login response is missing the challenge message")]
    MissingChallengeMessage,

    /// A login step returned no usable cookies
    #[error("{stage} response carried no session cookies")]
    MissingCookies { stage: &'static str },

    /// Login answered `result.success == false`
    #[error("login rejected: {0}")]
    LoginRejected(String),

    /// Provers response had no `result.provers` list
    #[error("No provers found")]
    NoProvers,

    /// No listed prover matches the requested address
    #[error("Prover not found: {0}")]
    ProverNotFound(String),

    /// Signing or key failure
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// Failed to serialize or deserialize data
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ClientError {
    /// Prover lookup failed (as opposed to a protocol or transport failure)
    pub fn is_lookup_failure(&self) -> bool {
        matches!(self, ClientError::NoProvers | ClientError::ProverNotFound(_))
    }
}
