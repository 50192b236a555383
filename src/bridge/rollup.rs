//! Rollup contract operations: deposits, full exits, auth-pubkey-hash
//! registration.

use alloy::primitives::{hex, Bytes, U256};

use crate::bridge::address::{resolve_address, resolve_token_address};
use crate::bridge::error::{BridgeError, BridgeResult};
use crate::bridge::pending::PendingResult;
use crate::bridge::types::Token;
use crate::bridge::ChainBridge;
use crate::chain::TxOutcome;
use crate::contracts::rollup;

impl ChainBridge {
    /// Deposit `amount` of `token` into the rollup for `user_address`.
    ///
    /// The native asset goes through `depositETH` with the amount riding
    /// as transaction value; ERC20 tokens go through `depositERC20` after
    /// the token contract address resolves.
    pub fn deposit(&self, token: &Token, amount: U256, user_address: &str) -> PendingResult<TxOutcome> {
        let user = match resolve_address(user_address) {
            Ok(addr) => addr,
            Err(err) => return PendingResult::failed(err),
        };
        let rollup_contract = self.rollup_contract();

        if token.is_native {
            tracing::debug!(user = %user, amount = %amount, "Native deposit");

            let bridge = self.clone();
            PendingResult::spawn(async move {
                let data = rollup::deposit_eth_calldata(user);
                let tx = bridge
                    .tx_builder()
                    .build(rollup_contract, amount, data)
                    .await
                    .map_err(ChainBridge::build_failure)?;

                Ok(bridge.tx_builder().submit(tx).await?)
            })
        } else {
            let token_address = match resolve_token_address(token) {
                Ok(addr) => addr,
                Err(err) => return PendingResult::failed(err),
            };

            tracing::debug!(
                token = %token_address,
                user = %user,
                amount = %amount,
                "ERC20 deposit"
            );

            let bridge = self.clone();
            PendingResult::spawn(async move {
                let data = rollup::deposit_erc20_calldata(token_address, amount, user);
                let tx = bridge
                    .tx_builder()
                    .build(rollup_contract, U256::ZERO, data)
                    .await
                    .map_err(ChainBridge::build_failure)?;

                Ok(bridge.tx_builder().submit(tx).await?)
            })
        }
    }

    /// Request a full exit of `token` for the rollup account `account_id`.
    pub fn full_exit(&self, token: &Token, account_id: u32) -> PendingResult<TxOutcome> {
        let token_address = match resolve_token_address(token) {
            Ok(addr) => addr,
            Err(err) => return PendingResult::failed(err),
        };
        let rollup_contract = self.rollup_contract();

        tracing::debug!(token = %token_address, account_id, "Requesting full exit");

        let bridge = self.clone();
        PendingResult::spawn(async move {
            let data = rollup::full_exit_calldata(account_id, token_address);
            let tx = bridge
                .tx_builder()
                .build(rollup_contract, U256::ZERO, data)
                .await
                .map_err(ChainBridge::build_failure)?;

            Ok(bridge.tx_builder().submit(tx).await?)
        })
    }

    /// Register an auth-pubkey-hash for the controlling account at the
    /// given rollup nonce.
    ///
    /// The hex string is decoded and forwarded unchanged; no length policy
    /// is applied here, that stays with the rollup contract.
    pub fn set_auth_pubkey_hash(&self, pubkey_hash: &str, nonce: u32) -> PendingResult<TxOutcome> {
        let hash_bytes = match decode_pubkey_hash(pubkey_hash) {
            Ok(bytes) => bytes,
            Err(err) => return PendingResult::failed(err),
        };
        let rollup_contract = self.rollup_contract();

        tracing::debug!(nonce, "Registering auth pubkey hash");

        let bridge = self.clone();
        PendingResult::spawn(async move {
            let data = rollup::set_auth_pubkey_hash_calldata(hash_bytes, nonce);
            let tx = bridge
                .tx_builder()
                .build(rollup_contract, U256::ZERO, data)
                .await
                .map_err(ChainBridge::build_failure)?;

            Ok(bridge.tx_builder().submit(tx).await?)
        })
    }
}

/// Decode a hex-encoded pubkey hash (with or without 0x prefix).
fn decode_pubkey_hash(text: &str) -> BridgeResult<Bytes> {
    hex::decode(text)
        .map(Bytes::from)
        .map_err(|e| BridgeError::Internal(format!("invalid pubkey hash hex '{}': {}", text, e)))
}
