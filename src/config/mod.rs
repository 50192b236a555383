//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → BridgeConfig (validated, immutable)
//!     → handed to ChainBridge at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once a bridge is constructed; changing it means
//!   constructing a new bridge
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::load_config;
pub use schema::BridgeConfig;
pub use schema::ChainConfig;
pub use schema::RollupConfig;
