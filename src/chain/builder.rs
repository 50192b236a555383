//! Transaction building, submission, and confirmation monitoring.
//!
//! # Responsibilities
//! - Build transactions with chain-synced nonces and gas price checks
//! - Broadcast transactions through the client
//! - Poll receipts until the configured confirmation depth is reached

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, Bytes, TxHash, U256};
use alloy::rpc::types::TransactionRequest;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::chain::client::ChainClient;
use crate::chain::types::{ChainError, ChainResult, TxOutcome};

/// Transaction builder bound to the controlling account.
#[derive(Clone)]
pub struct TxBuilder {
    client: ChainClient,
    account: Address,
    /// Local nonce counter, re-synced from the chain on every build.
    nonce: Arc<AtomicU64>,
}

impl TxBuilder {
    /// Create a new transaction builder.
    pub fn new(client: ChainClient, account: Address) -> Self {
        Self {
            client,
            account,
            nonce: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Build a transaction request with gas estimation.
    ///
    /// # Arguments
    /// * `to` - Destination address
    /// * `value` - Amount of native asset to send, in wei
    /// * `data` - Call data (empty for plain value transfers)
    pub async fn build(
        &self,
        to: Address,
        value: U256,
        data: Bytes,
    ) -> ChainResult<TransactionRequest> {
        // Get current nonce from chain and sync the local counter
        let chain_nonce = self.client.get_transaction_count(self.account).await?;
        self.nonce.store(chain_nonce, Ordering::SeqCst);

        // Get gas price
        let gas_price = self.client.get_gas_price().await?;
        let gas_price_gwei = gas_price / 1_000_000_000;

        // Check against max gas price
        let config = self.client.config();
        if gas_price_gwei > config.max_gas_price_gwei as u128 {
            return Err(ChainError::GasPriceTooHigh {
                current_gwei: gas_price_gwei as u64,
                max_gwei: config.max_gas_price_gwei,
            });
        }

        // Apply multiplier for safety margin
        let adjusted_gas_price = (gas_price as f64 * config.gas_price_multiplier) as u128;

        let nonce = self.nonce.fetch_add(1, Ordering::SeqCst);

        let tx = TransactionRequest::default()
            .with_from(self.account)
            .with_to(to)
            .with_value(value)
            .with_input(data)
            .with_nonce(nonce)
            .with_gas_price(adjusted_gas_price)
            .with_chain_id(config.chain_id);

        let gas_limit = self.client.estimate_gas(&tx).await?;

        Ok(tx.with_gas_limit(gas_limit))
    }

    /// Broadcast a built transaction and wait for it to confirm.
    pub async fn submit(&self, tx: TransactionRequest) -> ChainResult<TxOutcome> {
        let tx_hash = self.client.send_transaction(tx).await?;
        tracing::info!(tx_hash = %tx_hash, "Transaction submitted");

        self.wait_for_confirmation(tx_hash).await
    }

    /// Wait for a transaction to reach the configured confirmation depth.
    ///
    /// Polls receipts every two seconds up to `confirmation_timeout_secs`.
    /// A reverted transaction resolves to `ChainError::Reverted`.
    pub async fn wait_for_confirmation(&self, tx_hash: TxHash) -> ChainResult<TxOutcome> {
        let required_confirmations = self.client.confirmation_blocks();
        let timeout_duration =
            Duration::from_secs(self.client.config().confirmation_timeout_secs);
        let poll_interval = Duration::from_secs(2);

        let result = timeout(timeout_duration, async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                // Get the receipt
                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                // Check if transaction succeeded
                if !receipt.status() {
                    return Err(ChainError::Reverted("Transaction reverted".to_string()));
                }

                // Get current block number
                let current_block = self.client.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                let confirmations = current_block.saturating_sub(tx_block) as u32;

                if confirmations >= required_confirmations {
                    return Ok(TxOutcome {
                        tx_hash,
                        block_number: tx_block,
                    });
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations = confirmations,
                    required = required_confirmations,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(_) => Err(ChainError::ConfirmationTimeout(required_confirmations)),
        }
    }
}

impl std::fmt::Debug for TxBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TxBuilder")
            .field("account", &self.account)
            .field("nonce", &self.nonce.load(Ordering::SeqCst))
            .finish()
    }
}
