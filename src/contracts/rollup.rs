//! Rollup contract calldata helpers.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;

use super::IRollup;

/// Encode a `depositETH(userAddress)` call. The deposited amount rides as
/// the transaction value.
pub fn deposit_eth_calldata(user_address: Address) -> Bytes {
    IRollup::depositETHCall {
        userAddress: user_address,
    }
    .abi_encode()
    .into()
}

/// Encode a `depositERC20(token, amount, userAddress)` call.
pub fn deposit_erc20_calldata(token: Address, amount: U256, user_address: Address) -> Bytes {
    IRollup::depositERC20Call {
        token,
        amount,
        userAddress: user_address,
    }
    .abi_encode()
    .into()
}

/// Encode a `requestFullExit(accountId, token)` call.
pub fn full_exit_calldata(account_id: u32, token: Address) -> Bytes {
    IRollup::requestFullExitCall {
        accountId: account_id,
        token,
    }
    .abi_encode()
    .into()
}

/// Encode a `setAuthPubkeyHash(pubkeyHash, nonce)` call.
pub fn set_auth_pubkey_hash_calldata(pubkey_hash: Bytes, nonce: u32) -> Bytes {
    IRollup::setAuthPubkeyHashCall {
        pubkeyHash: pubkey_hash,
        nonce,
    }
    .abi_encode()
    .into()
}

/// Encode an `authFacts(owner, nonce)` call.
pub fn auth_facts_calldata(owner: Address, nonce: u32) -> Bytes {
    IRollup::authFactsCall { owner, nonce }.abi_encode().into()
}

/// Decode the returndata of an `authFacts` call.
pub fn decode_auth_fact(data: &[u8]) -> Result<Bytes, alloy::sol_types::Error> {
    IRollup::authFactsCall::abi_decode_returns(data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloy::primitives::address;
    use alloy::sol_types::SolValue;

    const USER: Address = address!("70997970c51812dc3a010c7d01b50e0d17dc79c8");

    #[test]
    fn test_deposit_eth_calldata_shape() {
        let data = deposit_eth_calldata(USER);
        // 4-byte selector + one address word
        assert_eq!(data.len(), 36);
    }

    #[test]
    fn test_set_auth_pubkey_hash_forwards_bytes_unchanged() {
        let hash = Bytes::from(vec![0xab, 0xcd, 0xef, 0x01]);
        let data = set_auth_pubkey_hash_calldata(hash.clone(), 5);

        let decoded = IRollup::setAuthPubkeyHashCall::abi_decode(&data).unwrap();
        assert_eq!(decoded.pubkeyHash, hash);
        assert_eq!(decoded.nonce, 5);
    }

    #[test]
    fn test_auth_fact_decode_nonempty() {
        let fact = Bytes::from(vec![0x11u8; 32]);
        let encoded = fact.abi_encode();
        assert_eq!(decode_auth_fact(&encoded).unwrap(), fact);
    }

    #[test]
    fn test_auth_fact_decode_empty() {
        let fact = Bytes::new();
        let encoded = fact.abi_encode();
        assert!(decode_auth_fact(&encoded).unwrap().is_empty());
    }
}
