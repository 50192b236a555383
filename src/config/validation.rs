//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check value ranges (timeouts > 0, multiplier >= 1.0)
//! - Check that URLs and addresses actually parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: BridgeConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use alloy::primitives::Address;
use thiserror::Error;

use crate::config::schema::BridgeConfig;

/// A single semantic problem found in a configuration.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("invalid RPC URL '{0}'")]
    InvalidRpcUrl(String),

    #[error("invalid failover RPC URL '{0}'")]
    InvalidFailoverUrl(String),

    #[error("chain_id must be non-zero")]
    ZeroChainId,

    #[error("rpc_timeout_secs must be non-zero")]
    ZeroRpcTimeout,

    #[error("confirmation_timeout_secs must be non-zero")]
    ZeroConfirmationTimeout,

    #[error("gas_price_multiplier must be at least 1.0, got {0}")]
    GasMultiplierTooLow(f64),

    #[error("max_gas_price_gwei must be non-zero")]
    ZeroMaxGasPrice,

    #[error("invalid rollup contract address '{0}'")]
    InvalidContractAddress(String),
}

/// Validate a configuration, collecting every problem found.
pub fn validate_config(config: &BridgeConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.chain.rpc_url.parse::<url::Url>().is_err() {
        errors.push(ValidationError::InvalidRpcUrl(config.chain.rpc_url.clone()));
    }
    for url in &config.chain.failover_urls {
        if url.parse::<url::Url>().is_err() {
            errors.push(ValidationError::InvalidFailoverUrl(url.clone()));
        }
    }
    if config.chain.chain_id == 0 {
        errors.push(ValidationError::ZeroChainId);
    }
    if config.chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::ZeroRpcTimeout);
    }
    if config.chain.confirmation_timeout_secs == 0 {
        errors.push(ValidationError::ZeroConfirmationTimeout);
    }
    if config.chain.gas_price_multiplier < 1.0 {
        errors.push(ValidationError::GasMultiplierTooLow(
            config.chain.gas_price_multiplier,
        ));
    }
    if config.chain.max_gas_price_gwei == 0 {
        errors.push(ValidationError::ZeroMaxGasPrice);
    }
    if config.rollup.contract_address.parse::<Address>().is_err() {
        errors.push(ValidationError::InvalidContractAddress(
            config.rollup.contract_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
