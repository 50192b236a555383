//! Transfer routing between the native-asset and ERC20 paths.

use alloy::primitives::{Bytes, U256};

use crate::bridge::address::{resolve_address, resolve_token_address};
use crate::bridge::pending::PendingResult;
use crate::bridge::types::Token;
use crate::bridge::ChainBridge;
use crate::chain::TxOutcome;
use crate::contracts::erc20;

impl ChainBridge {
    /// Transfer `amount` of `token` to the recipient `to`.
    ///
    /// The native asset moves as a plain value transfer; anything else
    /// resolves the token's contract address first and moves through an
    /// ERC20 `transfer` call. A token that is not native never falls
    /// through to the native path.
    pub fn transfer(&self, token: &Token, amount: U256, to: &str) -> PendingResult<TxOutcome> {
        let recipient = match resolve_address(to) {
            Ok(addr) => addr,
            Err(err) => return PendingResult::failed(err),
        };

        if token.is_native {
            tracing::debug!(recipient = %recipient, amount = %amount, "Native transfer");

            let bridge = self.clone();
            PendingResult::spawn(async move {
                let tx = bridge
                    .tx_builder()
                    .build(recipient, amount, Bytes::new())
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
                recipient = %recipient,
                amount = %amount,
                "ERC20 transfer"
            );

            let bridge = self.clone();
            PendingResult::spawn(async move {
                let data = erc20::transfer_calldata(recipient, amount);
                let tx = bridge
                    .tx_builder()
                    .build(token_address, U256::ZERO, data)
                    .await
                    .map_err(ChainBridge::build_failure)?;

                Ok(bridge.tx_builder().submit(tx).await?)
            })
        }
    }
}
