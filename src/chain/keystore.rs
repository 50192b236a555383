//! Signing credentials for the controlling account.
//!
//! # Security
//! - Private keys are loaded ONLY from environment variables
//! - Keys are never logged or serialized
//!
//! # Design Decisions
//! - The bridge depends on the `Keystore` capability trait, never on a
//!   concrete credential kind; a keystore registers itself with the
//!   transaction wallet through the single `register` method

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::chain::types::{ChainError, ChainResult};

/// Environment variable name for the private key.
pub const PRIVATE_KEY_ENV_VAR: &str = "BRIDGE_ETH_PRIVATE_KEY";

/// Opaque signing credential bound to the controlling account.
///
/// The bridge never inspects credential internals; it only needs the
/// account address and a way to register the credential with the
/// transaction-signing wallet at client construction.
pub trait Keystore: Send + Sync {
    /// Address of the controlling account.
    fn address(&self) -> Address;

    /// Register the signing credential with a transaction wallet.
    fn register(&self, wallet: &mut EthereumWallet);
}

/// In-process keystore backed by a hex-encoded private key.
#[derive(Clone)]
pub struct LocalKeystore {
    signer: PrivateKeySigner,
}

impl LocalKeystore {
    /// Create a keystore from a hex-encoded private key string.
    ///
    /// # Arguments
    /// * `private_key_hex` - Hex string (with or without 0x prefix)
    ///
    /// # Security
    /// The private key is parsed and stored securely. It is never logged.
    pub fn from_private_key(private_key_hex: &str) -> ChainResult<Self> {
        // Strip 0x prefix if present
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Keystore(format!("Invalid private key format: {}", e)))?;

        tracing::info!(address = %signer.address(), "Keystore initialized");

        Ok(Self { signer })
    }

    /// Load a keystore from the environment.
    ///
    /// Reads `BRIDGE_ETH_PRIVATE_KEY` from environment.
    pub fn from_env() -> ChainResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            ChainError::Keystore(format!(
                "Environment variable {} not set",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;

        Self::from_private_key(&private_key)
    }
}

impl Keystore for LocalKeystore {
    fn address(&self) -> Address {
        self.signer.address()
    }

    fn register(&self, wallet: &mut EthereumWallet) {
        wallet.register_default_signer(self.signer.clone());
    }
}

impl std::fmt::Debug for LocalKeystore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocalKeystore")
            .field("address", &self.signer.address())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Well-known test private key (Anvil's first account)
    const TEST_PRIVATE_KEY: &str =
        "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";

    #[test]
    fn test_keystore_from_private_key() {
        let keystore = LocalKeystore::from_private_key(TEST_PRIVATE_KEY).unwrap();
        // This is the corresponding address for the test key
        assert_eq!(
            keystore.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_keystore_with_0x_prefix() {
        let keystore =
            LocalKeystore::from_private_key(&format!("0x{}", TEST_PRIVATE_KEY)).unwrap();
        assert_eq!(
            keystore.address().to_string().to_lowercase(),
            "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266"
        );
    }

    #[test]
    fn test_invalid_private_key() {
        let result = LocalKeystore::from_private_key("invalid_key");
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("Invalid private key"));
    }

    #[test]
    fn test_registration_sets_default_signer() {
        let keystore = LocalKeystore::from_private_key(TEST_PRIVATE_KEY).unwrap();
        let mut wallet = EthereumWallet::default();
        keystore.register(&mut wallet);

        use alloy::network::NetworkWallet;
        let registered: Address =
            <EthereumWallet as NetworkWallet<alloy::network::Ethereum>>::default_signer_address(
                &wallet,
            );
        assert_eq!(registered, keystore.address());
    }
}
