//! Asset descriptions and amount handling.

use alloy::primitives::U256;
use serde::{Deserialize, Serialize};

use crate::bridge::error::{BridgeError, BridgeResult};

/// Approval amount used when no explicit limit is given: 2^256 - 1.
pub const MAX_APPROVE_AMOUNT: U256 = U256::MAX;

/// Allowance threshold used when no explicit threshold is given: 2^255.
pub const DEFAULT_APPROVE_THRESHOLD: U256 = U256::from_limbs([0, 0, 0, 1 << 63]);

/// A fungible asset on the settlement chain.
///
/// Decimals policy stays with the chain client; the bridge only needs to
/// know which path moves the asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// True for the chain's base currency, moved without a contract call.
    pub is_native: bool,

    /// ERC20 contract address; ignored for the native asset.
    #[serde(default)]
    pub address: String,
}

impl Token {
    /// The chain's base currency.
    pub fn native() -> Self {
        Self {
            is_native: true,
            address: String::new(),
        }
    }

    /// An ERC20 token at the given contract address.
    pub fn erc20(address: impl Into<String>) -> Self {
        Self {
            is_native: false,
            address: address.into(),
        }
    }
}

/// Parse a wei-scale amount from decimal text.
///
/// Round-trips exactly with `U256::to_string` for all values up to
/// 2^256 - 1; no silent rounding.
pub fn parse_amount(text: &str) -> BridgeResult<U256> {
    U256::from_str_radix(text, 10)
        .map_err(|e| BridgeError::Internal(format!("invalid decimal amount '{}': {}", text, e)))
}
