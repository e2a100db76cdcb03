use alloy::transports::{RpcError, TransportError};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Missing or malformed configuration file.
    #[error("configuration error: {0}")]
    Config(String),

    /// ABI file unreadable, or an interface that does not declare what we need.
    #[error("abi error: {0}")]
    Abi(String),

    #[error("invalid private key: {0}")]
    InvalidKey(String),

    #[error("invalid address for {name}: {value:?}")]
    InvalidAddress { name: String, value: String },

    #[error("batch must contain at least one call")]
    EmptyBatch,

    #[error("signing failed: {0}")]
    Signing(String),

    /// The node answered with an error response (revert, bad signature, funds...).
    #[error("transaction rejected (code {code}): {message}")]
    Rejected { code: i64, message: String },

    /// The node could not be reached or answered with something unparseable.
    #[error("transport error: {0}")]
    Transport(String),
}

impl Error {
    pub fn is_rejection(&self) -> bool {
        matches!(self, Error::Rejected { .. })
    }
}

impl From<TransportError> for Error {
    fn from(err: TransportError) -> Self {
        match err {
            RpcError::ErrorResp(payload) => Error::Rejected {
                code: payload.code,
                message: payload.message.to_string(),
            },
            other => Error::Transport(other.to_string()),
        }
    }
}
