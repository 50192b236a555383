//! Read-only queries for the controlling account.

use alloy::network::TransactionBuilder;
use alloy::primitives::U256;
use alloy::rpc::types::TransactionRequest;

use crate::bridge::pending::PendingResult;
use crate::bridge::ChainBridge;
use crate::chain::ChainError;
use crate::contracts::rollup;

impl ChainBridge {
    /// Native-asset balance of the controlling account, in wei.
    pub fn get_balance(&self) -> PendingResult<U256> {
        let client = self.client().clone();
        let account = self.account();

        PendingResult::spawn(async move { Ok(client.get_balance(account).await?) })
    }

    /// Settlement-chain transaction count of the controlling account.
    pub fn get_nonce(&self) -> PendingResult<U256> {
        let client = self.client().clone();
        let account = self.account();

        PendingResult::spawn(async move {
            let count = client.get_transaction_count(account).await?;
            Ok(U256::from(count))
        })
    }

    /// Whether an auth-pubkey-hash is recorded on-chain for the
    /// controlling account at the given rollup nonce.
    ///
    /// True iff the stored auth fact is non-empty.
    pub fn is_auth_pubkey_hash_set(&self, nonce: u32) -> PendingResult<bool> {
        let bridge = self.clone();

        PendingResult::spawn(async move {
            let data = rollup::auth_facts_calldata(bridge.account(), nonce);
            let tx = TransactionRequest::default()
                .with_to(bridge.rollup_contract())
                .with_input(data);

            let returndata = bridge.client().call(&tx).await?;

            // Decoded on the same task that awaited the response
            let fact = rollup::decode_auth_fact(&returndata)
                .map_err(|e| ChainError::Rpc(format!("ABI decode failed: {}", e)))?;

            Ok(auth_fact_present(&fact))
        })
    }
}

/// An auth fact counts as registered iff its raw bytes are non-empty.
fn auth_fact_present(fact: &[u8]) -> bool {
    !fact.is_empty()
}
