//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events via tracing)
//!
//! Consumers:
//!     → Log aggregation (stdout, file, remote)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every event (addresses, hashes, amounts)
//! - Log level configurable via RUST_LOG
//! - The library only emits; subscriber setup is opt-in for embedders

pub mod logging;
