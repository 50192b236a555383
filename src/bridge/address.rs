//! Textual address resolution.
//!
//! Pure, synchronous, no I/O. Every operation that takes a textual address
//! resolves it here before any chain call is issued, so malformed input
//! never costs a network round-trip.

use alloy::primitives::Address;

use crate::bridge::error::{BridgeError, BridgeResult};
use crate::bridge::types::Token;

/// Parse a textual recipient or user address into its 20-byte form.
///
/// Rejects wrong lengths and invalid characters rather than truncating.
pub fn resolve_address(text: &str) -> BridgeResult<Address> {
    text.parse::<Address>()
        .map_err(|_| BridgeError::InvalidAddress(text.to_string()))
}

/// Parse a token's contract address.
///
/// The native asset has no contract address, so it fails here too.
pub fn resolve_token_address(token: &Token) -> BridgeResult<Address> {
    token
        .address
        .parse::<Address>()
        .map_err(|_| BridgeError::InvalidTokenAddress(token.address.clone()))
}
