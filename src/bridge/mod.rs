//! Bridge facade between the wallet SDK and the settlement chain.
//!
//! # Data Flow
//! ```text
//! caller input (textual addresses, amounts, tokens)
//!     → address.rs (resolve before any I/O)
//!     → allowance.rs / transfer.rs (plain-chain operations)
//!     → rollup.rs (rollup contract operations)
//!     → queries.rs (read-only lookups)
//!     → pending.rs (one async handle per operation)
//! ```
//!
//! # Design Decisions
//! - Every write operation moves through the same states:
//!   validating → building → submitted → confirmed | failed.
//!   Validation and building are local; a failure there resolves the
//!   handle without touching the network
//! - The bridge holds no mutable shared state beyond the transport's
//!   nonce counter; the controlling account identity is fixed at
//!   construction

pub mod address;
pub mod allowance;
pub mod error;
pub mod pending;
pub mod queries;
pub mod rollup;
pub mod transfer;
pub mod types;

use std::sync::Arc;

use alloy::primitives::Address;

use crate::bridge::address::resolve_address;
use crate::chain::{ChainClient, Keystore, TxBuilder};
use crate::config::BridgeConfig;

pub use error::{BridgeError, BridgeResult};
pub use pending::PendingResult;
pub use types::Token;

/// Client-side bridge to the rollup's settlement chain.
///
/// Owns the immutable identity of the controlling account plus handles to
/// the chain connection; cheap to clone and share across tasks.
#[derive(Clone, Debug)]
pub struct ChainBridge {
    client: ChainClient,
    builder: TxBuilder,
    account: Address,
    rollup_contract: Address,
}

impl ChainBridge {
    /// Construct a bridge for the given configuration and signing
    /// credential.
    ///
    /// The rollup contract address is resolved here, once; a malformed
    /// address fails construction before any connection is attempted.
    pub async fn new(config: BridgeConfig, keystore: Arc<dyn Keystore>) -> BridgeResult<Self> {
        let rollup_contract = resolve_address(&config.rollup.contract_address)?;

        let account = keystore.address();
        let client = ChainClient::new(config.chain, keystore.as_ref()).await?;
        let builder = TxBuilder::new(client.clone(), account);

        tracing::info!(
            account = %account,
            rollup_contract = %rollup_contract,
            "Bridge initialized"
        );

        Ok(Self {
            client,
            builder,
            account,
            rollup_contract,
        })
    }

    /// Address of the controlling account.
    pub fn account(&self) -> Address {
        self.account
    }

    /// Address of the rollup contract on the settlement chain.
    pub fn rollup_contract(&self) -> Address {
        self.rollup_contract
    }

    /// The underlying chain client.
    pub fn client(&self) -> &ChainClient {
        &self.client
    }

    pub(crate) fn tx_builder(&self) -> &TxBuilder {
        &self.builder
    }

    /// Map a build-stage failure to the opaque internal-error class.
    pub(crate) fn build_failure(err: crate::chain::ChainError) -> BridgeError {
        BridgeError::Internal(err.to_string())
    }
}
