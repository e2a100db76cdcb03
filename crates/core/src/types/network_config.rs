use alloy::primitives::TxHash;
use serde::Serialize;

/// A target network: chain id, RPC endpoint and block explorer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NetworkConfig {
    pub name: String,
    pub chain_id: u64,
    #[serde(skip)]
    pub rpc_url: String,
    pub explorer_url: String,
}

impl NetworkConfig {
    pub fn tx_url(&self, hash: &TxHash) -> String {
        format!("{}/tx/{}", self.explorer_url, hash)
    }
}
