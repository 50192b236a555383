//! On-chain contract surfaces.
//!
//! # Responsibilities
//! - `alloy::sol!` bindings for the ERC20 surface and the rollup contract
//! - Calldata encoding and returndata decoding helpers
//!
//! The bridge shapes calls into these interfaces; ABI encoding itself is
//! owned by alloy.

use alloy::sol;

pub mod erc20;
pub mod rollup;

sol! {
    /// Minimal ERC20 surface used by the bridge.
    contract IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function transfer(address to, uint256 amount) external returns (bool);
        function allowance(address owner, address spender) external view returns (uint256);
    }

    /// Rollup contract entry points used by the bridge.
    contract IRollup {
        function depositETH(address userAddress) external payable;
        function depositERC20(address token, uint256 amount, address userAddress) external;
        function requestFullExit(uint32 accountId, address token) external;
        function setAuthPubkeyHash(bytes pubkeyHash, uint32 nonce) external;
        function authFacts(address owner, uint32 nonce) external view returns (bytes);
    }
}
