use crate::account::client::ChainClient;
use crate::error::{Error, Result};
use crate::types::config::*;
use alloy::primitives::{Address, TxHash, address, b256};
use alloy::rpc::types::TransactionRequest;
use async_trait::async_trait;
use std::collections::HashMap;
use std::fs;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use tempfile::TempDir;

pub const SIMULATED_HASH: TxHash =
    b256!("0x65ae1b483d814e2267efd849acc39305267e3972d3db5990a2bf1b621f7ea74e");

enum Reply {
    Accept,
    Reject { code: i64, message: String },
    Unreachable,
}

/// In-process node: scripted nonce and submission reply, every call recorded.
pub struct SimulatedNetwork {
    nonce: u64,
    reply: Reply,
    nonce_queries: Mutex<Vec<Address>>,
    submissions: Mutex<Vec<TransactionRequest>>,
    submit_attempts: AtomicUsize,
}

impl SimulatedNetwork {
    pub fn new(nonce: u64) -> Self {
        Self {
            nonce,
            reply: Reply::Accept,
            nonce_queries: Mutex::new(Vec::new()),
            submissions: Mutex::new(Vec::new()),
            submit_attempts: AtomicUsize::new(0),
        }
    }

    pub fn rejecting(nonce: u64, code: i64, message: &str) -> Self {
        Self {
            reply: Reply::Reject {
                code,
                message: message.to_string(),
            },
            ..Self::new(nonce)
        }
    }

    pub fn unreachable() -> Self {
        Self {
            reply: Reply::Unreachable,
            ..Self::new(0)
        }
    }

    pub fn nonce_queries(&self) -> Vec<Address> {
        self.nonce_queries.lock().unwrap().clone()
    }

    pub fn submissions(&self) -> Vec<TransactionRequest> {
        self.submissions.lock().unwrap().clone()
    }

    pub fn submit_attempts(&self) -> usize {
        self.submit_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ChainClient for SimulatedNetwork {
    async fn transaction_count(&self, address: Address) -> Result<u64> {
        self.nonce_queries.lock().unwrap().push(address);
        match self.reply {
            Reply::Unreachable => Err(Error::Transport("connection refused".to_string())),
            _ => Ok(self.nonce),
        }
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<TxHash> {
        self.submit_attempts.fetch_add(1, Ordering::SeqCst);
        match &self.reply {
            Reply::Accept => {
                self.submissions.lock().unwrap().push(request);
                Ok(SIMULATED_HASH)
            }
            Reply::Reject { code, message } => Err(Error::Rejected {
                code: *code,
                message: message.clone(),
            }),
            Reply::Unreachable => Err(Error::Transport("connection refused".to_string())),
        }
    }
}

pub const AUTHORITY_KEY: &str =
    "0xac0974bec39a17e36ba4a6b4d238ff944bacb478cbed5efcae784d7bf4f2ff80";
pub const SPONSOR_KEY: &str = "0x59c6995e998f97a5a0044966f0945389dc9e86dae88c7a8412f4603b6b78690d";
pub const SPONSOR2_KEY: &str =
    "0x5de4111afa1a4b94908f83103eb1f1706367c2e68ca870fc3fb9a804cdab365a";

pub const SEPOLIA_BATCH: Address = address!("0xCACACACACACACACACACACACACACACACACACACACA");
pub const HOLESKY_BATCH: Address = address!("0xCBCBCBCBCBCBCBCBCBCBCBCBCBCBCBCBCBCBCBCB");
pub const SEPOLIA_WETH_ADDRESS: Address = address!("0x7b79995e5f793a07bc00c21412e50ecae098e7f9");
pub const HOLESKY_WETH_ADDRESS: Address = address!("0x94373a4919B3240D86eA41593D5eBa789FEF3848");
pub const REGISTRY: Address = address!("0x2222222222222222222222222222222222222222");
pub const OPT_IN_SERVICE: Address = address!("0x3333333333333333333333333333333333333333");

const CONFIG: &str = r#"
[networks.sepolia]
chain_id = 11155111
rpc_url = "env:SEPOLIA_RPC"
explorer_url = "https://sepolia.etherscan.io"

[networks.holesky]
chain_id = 17000
rpc_url = "env:HOLESKY_RPC"
explorer_url = "https://holesky.etherscan.io"
"#;

/// A complete configuration on disk, using the interfaces shipped in `abis/`.
pub fn config_fixture() -> (TempDir, Config) {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("config.toml"), CONFIG).unwrap();
    fs::write(
        dir.path().join(BATCH_DELEGATION_ABI),
        include_str!("../../../abis/batch_eth_delegation.json"),
    )
    .unwrap();
    fs::write(
        dir.path().join(OPERATOR_REGISTRY_ABI),
        include_str!("../../../abis/sepolia_operator_registry.json"),
    )
    .unwrap();
    fs::write(
        dir.path().join(OPT_IN_ABI),
        include_str!("../../../abis/sepolia_opt_in.json"),
    )
    .unwrap();

    let vars: HashMap<&str, String> = HashMap::from([
        (PRIVATE_KEY, AUTHORITY_KEY.to_string()),
        (SPONSOR_PRIVATE_KEY, SPONSOR_KEY.to_string()),
        (SPONSOR2_PRIVATE_KEY, SPONSOR2_KEY.to_string()),
        (SEPOLIA_BATCH_ETH_DELEGATION_CA, SEPOLIA_BATCH.to_string()),
        (HOLESKY_BATCH_ETH_DELEGATION_CA, HOLESKY_BATCH.to_string()),
        (SEPOLIA_WETH, SEPOLIA_WETH_ADDRESS.to_string()),
        (HOLESKY_WETH, HOLESKY_WETH_ADDRESS.to_string()),
        (SEPOLIA_SYMBIOTIC_OPERATOR_REGISTRY, REGISTRY.to_string()),
        (SEPOLIA_SYMBIOTIC_OPT_IN_SERVICE, OPT_IN_SERVICE.to_string()),
    ]);
    let config = Config::from_lookup(&dir.path().join("config.toml"), dir.path(), |name| {
        vars.get(name).cloned()
    })
    .unwrap();

    (dir, config)
}
