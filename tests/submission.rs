//! Write-path integration test: build, sign, broadcast, confirm against a
//! mock JSON-RPC backend.

use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use alloy::primitives::{hex, Address, U256};
use alloy::sol_types::SolCall;
use rollup_bridge::contracts::IERC20;
use rollup_bridge::{BridgeConfig, BridgeError, ChainBridge, LocalKeystore, Token};
use serde_json::json;

mod common;

// Well-known test private key (Anvil's first account)
const TEST_PRIVATE_KEY: &str =
    "ac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
const ROLLUP_CONTRACT: &str = "0x5fbdb2315678afecb367f032d93f642f64180aa3";
const RECIPIENT: &str = "0x70997970c51812dc3a010c7d01b50e0d17dc79c8";
const TOKEN_CONTRACT: &str = "0x9fe46736679d2d9a65f0992f2272de9f3c7fa6e0";
const TX_HASH: &str = "0x1111111111111111111111111111111111111111111111111111111111111111";

fn receipt_json(status: &str) -> serde_json::Value {
    json!({
        "transactionHash": TX_HASH,
        "transactionIndex": "0x0",
        "blockHash": "0x2222222222222222222222222222222222222222222222222222222222222222",
        "blockNumber": "0xe",
        "from": "0xf39fd6e51aad88f6f4ce6ab8827279cfffb92266",
        "to": RECIPIENT,
        "contractAddress": null,
        "gasUsed": "0x5208",
        "cumulativeGasUsed": "0x5208",
        "effectiveGasPrice": "0x3b9aca00",
        "status": status,
        "type": "0x0",
        "logs": [],
        "logsBloom": format!("0x{}", "00".repeat(256)),
    })
}

fn mock_handler(status: &'static str) -> impl Fn(&str, &serde_json::Value) -> serde_json::Value {
    move |method, _params| match method {
        "eth_chainId" => json!("0x7a69"),
        "eth_getTransactionCount" => json!("0x0"),
        "eth_gasPrice" => json!("0x3b9aca00"), // 1 gwei
        "eth_estimateGas" => json!("0x5208"),
        "eth_sendRawTransaction" => json!(TX_HASH),
        "eth_getTransactionReceipt" => receipt_json(status),
        "eth_blockNumber" => json!("0x10"),
        _ => json!(null),
    }
}

/// Happy-path handler that also records the calldata of every
/// eth_estimateGas request, so a test can inspect what was built.
fn capturing_handler(
    captured: Arc<Mutex<Option<String>>>,
) -> impl Fn(&str, &serde_json::Value) -> serde_json::Value {
    let inner = mock_handler("0x1");
    move |method, params| {
        if method == "eth_estimateGas" {
            let tx = &params[0];
            let data = tx
                .get("input")
                .or_else(|| tx.get("data"))
                .and_then(|v| v.as_str())
                .map(str::to_string);
            *captured.lock().unwrap() = data;
        }
        inner(method, params)
    }
}

fn decode_approve(captured: &Mutex<Option<String>>) -> IERC20::approveCall {
    let data = captured.lock().unwrap().clone().expect("no calldata recorded");
    let raw = hex::decode(data.trim_start_matches("0x")).unwrap();
    IERC20::approveCall::abi_decode(&raw).unwrap()
}

async fn mock_bridge(addr: SocketAddr) -> ChainBridge {
    let mut config = BridgeConfig::default();
    config.chain.rpc_url = format!("http://{}", addr);
    config.chain.chain_id = 31337;
    config.chain.rpc_timeout_secs = 5;
    config.chain.confirmation_blocks = 1;
    config.chain.confirmation_timeout_secs = 10;
    config.rollup.contract_address = ROLLUP_CONTRACT.to_string();

    let keystore = Arc::new(LocalKeystore::from_private_key(TEST_PRIVATE_KEY).unwrap());
    ChainBridge::new(config, keystore).await.unwrap()
}

#[tokio::test]
async fn test_native_transfer_confirms() {
    let addr: SocketAddr = "127.0.0.1:28481".parse().unwrap();
    common::start_mock_rpc(addr, mock_handler("0x1")).await;

    let bridge = mock_bridge(addr).await;

    let pending = bridge.transfer(&Token::native(), U256::from(1u64), RECIPIENT);
    assert!(!pending.failed_early());

    let outcome = pending.wait().await.unwrap();
    assert_eq!(outcome.tx_hash.to_string(), TX_HASH);
    assert_eq!(outcome.block_number, 0xe);
}

#[tokio::test]
async fn test_approve_without_limit_requests_max_allowance() {
    let addr: SocketAddr = "127.0.0.1:28483".parse().unwrap();
    let captured = Arc::new(Mutex::new(None));
    common::start_mock_rpc(addr, capturing_handler(captured.clone())).await;

    let bridge = mock_bridge(addr).await;
    let token = Token::erc20(TOKEN_CONTRACT);

    let outcome = bridge.approve(&token, None).wait().await.unwrap();
    assert_eq!(outcome.tx_hash.to_string(), TX_HASH);

    let call = decode_approve(&captured);
    assert_eq!(call.amount, U256::MAX);
    assert_eq!(call.spender, ROLLUP_CONTRACT.parse::<Address>().unwrap());
}

#[tokio::test]
async fn test_approve_with_limit_requests_exact_allowance() {
    let addr: SocketAddr = "127.0.0.1:28484".parse().unwrap();
    let captured = Arc::new(Mutex::new(None));
    common::start_mock_rpc(addr, capturing_handler(captured.clone())).await;

    let bridge = mock_bridge(addr).await;
    let token = Token::erc20(TOKEN_CONTRACT);

    let limit = U256::from(123_456u64);
    bridge.approve(&token, Some(limit)).wait().await.unwrap();

    let call = decode_approve(&captured);
    assert_eq!(call.amount, limit);
    assert_eq!(call.spender, ROLLUP_CONTRACT.parse::<Address>().unwrap());
}

#[tokio::test]
async fn test_reverted_transaction_fails_the_handle() {
    let addr: SocketAddr = "127.0.0.1:28482".parse().unwrap();
    common::start_mock_rpc(addr, mock_handler("0x0")).await;

    let bridge = mock_bridge(addr).await;

    let pending = bridge.deposit(&Token::native(), U256::from(1u64), RECIPIENT);
    let err = pending.wait().await.unwrap_err();
    assert!(matches!(err, BridgeError::Chain(_)));
    assert!(err.to_string().contains("reverted"));
}
