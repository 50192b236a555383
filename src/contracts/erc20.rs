//! ERC20 calldata helpers.

use alloy::primitives::{Address, Bytes, U256};
use alloy::sol_types::SolCall;

use super::IERC20;

/// Encode an `approve(spender, amount)` call.
pub fn approve_calldata(spender: Address, amount: U256) -> Bytes {
    IERC20::approveCall { spender, amount }.abi_encode().into()
}

/// Encode a `transfer(to, amount)` call.
pub fn transfer_calldata(to: Address, amount: U256) -> Bytes {
    IERC20::transferCall { to, amount }.abi_encode().into()
}

/// Encode an `allowance(owner, spender)` call.
pub fn allowance_calldata(owner: Address, spender: Address) -> Bytes {
    IERC20::allowanceCall { owner, spender }.abi_encode().into()
}

/// Decode the returndata of an `allowance` call.
pub fn decode_allowance(data: &[u8]) -> Result<U256, alloy::sol_types::Error> {
    IERC20::allowanceCall::abi_decode_returns(data)
}
