//! Bridge error taxonomy.
//!
//! Local validation failures (`InvalidAddress`, `InvalidTokenAddress`) are
//! produced before any network I/O. `Internal` marks a downstream builder
//! that failed to produce a transaction despite valid-looking inputs; it is
//! non-retryable and opaque. Everything the transport raises after
//! submission propagates unchanged as `Chain`.

use thiserror::Error;

use crate::chain::ChainError;

/// Errors surfaced through bridge operations.
#[derive(Debug, Error)]
pub enum BridgeError {
    /// Malformed recipient or user address text.
    #[error("invalid address '{0}'")]
    InvalidAddress(String),

    /// Malformed token contract address text.
    #[error("invalid token address '{0}'")]
    InvalidTokenAddress(String),

    /// A downstream builder failed to produce a transaction.
    #[error("internal error: {0}")]
    Internal(String),

    /// Transport or contract-layer failure, propagated unchanged.
    #[error(transparent)]
    Chain(#[from] ChainError),
}

/// Result type for bridge operations.
pub type BridgeResult<T> = Result<T, BridgeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_chain_errors_propagate_unchanged() {
        let err: BridgeError = ChainError::Rpc("boom".to_string()).into();
        assert_eq!(err.to_string(), "RPC error: boom");
    }

    #[test]
    fn test_address_error_display() {
        let err = BridgeError::InvalidAddress("0x12".to_string());
        assert_eq!(err.to_string(), "invalid address '0x12'");
    }
}
