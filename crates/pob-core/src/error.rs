//! Error types for pob-core

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid private key: {0}")]
    InvalidKey(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Unknown proof type: {0}")]
    UnknownProofType(String),

    #[error("Unknown challenge type: {0}")]
    UnknownChallengeType(String),
}
