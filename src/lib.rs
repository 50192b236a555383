//! Client-side bridge between a layer-2 wallet SDK and its Ethereum
//! settlement chain.
//!
//! # Architecture Overview
//!
//! ```text
//!                    ┌──────────────────────────────────────────────┐
//!                    │                 CHAIN BRIDGE                  │
//!                    │                                               │
//!   Caller input     │  ┌─────────┐   ┌───────────┐   ┌──────────┐  │
//!   ─────────────────┼─▶│ address │──▶│ allowance │   │  rollup  │  │
//!   (tokens, amounts │  │ resolve │   │ transfer  │   │   ops    │  │
//!    textual addrs)  │  └─────────┘   └─────┬─────┘   └────┬─────┘  │
//!                    │                       │              │        │
//!                    │                       ▼              ▼        │
//!                    │                ┌─────────────────────────┐   │
//!   PendingResult    │                │     chain transport      │   │
//!   ◀────────────────┼────────────────│ client + builder + keys  │◀──┼── JSON-RPC
//!                    │                └─────────────────────────┘   │
//!                    │                                               │
//!                    │  ┌────────────────────────────────────────┐  │
//!                    │  │        Cross-Cutting Concerns           │  │
//!                    │  │   config        observability           │  │
//!                    │  └────────────────────────────────────────┘  │
//!                    └──────────────────────────────────────────────┘
//! ```
//!
//! Every write operation validates its inputs locally, builds and signs a
//! transaction, submits it, and reports confirmation or failure through a
//! single [`PendingResult`] handle. Malformed input fails the handle
//! before any network round-trip.

// Core subsystems
pub mod bridge;
pub mod chain;
pub mod config;
pub mod contracts;

// Cross-cutting concerns
pub mod observability;

pub use bridge::{ChainBridge, PendingResult, Token};
pub use bridge::error::{BridgeError, BridgeResult};
pub use bridge::types::parse_amount;
pub use chain::{ChainClient, ChainError, Keystore, LocalKeystore, TxOutcome};
pub use config::{BridgeConfig, ChainConfig, RollupConfig};
