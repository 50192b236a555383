//! Settlement-chain transport subsystem.
//!
//! # Data Flow
//! ```text
//! Keystore (signing credential)
//!     → client.rs (RPC connection with timeouts + failover)
//!     → builder.rs (nonce/gas handling, broadcast, confirmation polling)
//! ```
//!
//! # Security Constraints
//! - Private keys ONLY from environment variables or caller-supplied hex
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts
//! - Graceful degradation when the chain is unreachable at startup

pub mod builder;
pub mod client;
pub mod keystore;
pub mod types;

pub use builder::TxBuilder;
pub use client::ChainClient;
pub use keystore::{Keystore, LocalKeystore};
pub use types::{ChainError, ChainId, ChainResult, TxOutcome};
