//! ERC20 spending allowance for the rollup contract.

use alloy::network::TransactionBuilder;
use alloy::primitives::U256;
use alloy::rpc::types::TransactionRequest;

use crate::bridge::address::resolve_token_address;
use crate::bridge::error::BridgeResult;
use crate::bridge::pending::PendingResult;
use crate::bridge::types::{Token, DEFAULT_APPROVE_THRESHOLD, MAX_APPROVE_AMOUNT};
use crate::bridge::ChainBridge;
use crate::chain::{ChainError, TxOutcome};
use crate::contracts::erc20;

impl ChainBridge {
    /// Approve the rollup contract to pull deposits of `token` from the
    /// controlling account.
    ///
    /// With no explicit `limit` the approval amount is the maximum
    /// representable value, 2^256 - 1. A malformed token address resolves
    /// the handle to `InvalidTokenAddress` without any network call.
    pub fn approve(&self, token: &Token, limit: Option<U256>) -> PendingResult<TxOutcome> {
        let token_address = match resolve_token_address(token) {
            Ok(addr) => addr,
            Err(err) => return PendingResult::failed(err),
        };
        let amount = limit.unwrap_or(MAX_APPROVE_AMOUNT);
        let spender = self.rollup_contract();

        tracing::debug!(
            token = %token_address,
            spender = %spender,
            amount = %amount,
            "Approving rollup contract"
        );

        let bridge = self.clone();
        PendingResult::spawn(async move {
            let data = erc20::approve_calldata(spender, amount);
            let tx = bridge
                .tx_builder()
                .build(token_address, U256::ZERO, data)
                .await
                .map_err(ChainBridge::build_failure)?;

            Ok(bridge.tx_builder().submit(tx).await?)
        })
    }

    /// Check whether the allowance granted to the rollup contract already
    /// covers deposits.
    ///
    /// Returns true iff the current allowance strictly exceeds `threshold`
    /// (default 2^255). Single read; blocks only on that read.
    pub async fn is_approved(&self, token: &Token, threshold: Option<U256>) -> BridgeResult<bool> {
        let token_address = resolve_token_address(token)?;
        let threshold = threshold.unwrap_or(DEFAULT_APPROVE_THRESHOLD);

        let data = erc20::allowance_calldata(self.account(), self.rollup_contract());
        let tx = TransactionRequest::default()
            .with_to(token_address)
            .with_input(data);

        let returndata = self.client().call(&tx).await?;
        let allowance = erc20::decode_allowance(&returndata)
            .map_err(|e| ChainError::Rpc(format!("ABI decode failed: {}", e)))?;

        Ok(allowance > threshold)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_approval_amount_is_max() {
        assert_eq!(MAX_APPROVE_AMOUNT, U256::MAX);
    }

    #[test]
    fn test_threshold_comparison_is_strict() {
        let threshold = U256::from(100u64);
        // The gate requires allowance > threshold, not >=
        assert!(!(U256::from(100u64) > threshold));
        assert!(U256::from(101u64) > threshold);
    }
}
