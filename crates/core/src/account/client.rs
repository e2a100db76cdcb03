use crate::account::account::Account;
use crate::error::{Error, Result};
use crate::types::network_config::NetworkConfig;
use alloy::network::EthereumWallet;
use alloy::primitives::{Address, TxHash};
use alloy::providers::{DynProvider, Provider, ProviderBuilder};
use alloy::rpc::types::TransactionRequest;
use alloy::transports::http::reqwest::Url;
use async_trait::async_trait;
use log::debug;

/// The two node calls a scenario needs.
#[async_trait]
pub trait ChainClient: Send + Sync {
    async fn transaction_count(&self, address: Address) -> Result<u64>;

    /// Fills, signs and submits `request`; returns as soon as the node accepts it.
    async fn send_transaction(&self, request: TransactionRequest) -> Result<TxHash>;
}

/// HTTP provider bound to one network and one signing account.
pub struct AlloyClient {
    network: String,
    provider: DynProvider,
}

impl AlloyClient {
    pub fn connect(network: &NetworkConfig, account: &Account) -> Result<Self> {
        let url: Url = network.rpc_url.parse().map_err(|e| {
            Error::Config(format!(
                "invalid rpc url {:?} for network {}: {e}",
                network.rpc_url, network.name
            ))
        })?;

        debug!(
            "Connecting to {} (chain {}) as {}",
            network.name,
            network.chain_id,
            account.address()
        );
        let provider = ProviderBuilder::new()
            .wallet(EthereumWallet::from(account.signer().clone()))
            .connect_http(url)
            .erased();

        Ok(Self {
            network: network.name.clone(),
            provider,
        })
    }
}

#[async_trait]
impl ChainClient for AlloyClient {
    /// Counts mempool transactions too, so the result matches the nonce the
    /// filler gives the outer transaction.
    async fn transaction_count(&self, address: Address) -> Result<u64> {
        debug!("Querying pending nonce of {} on {}", address, self.network);
        let count = self.provider.get_transaction_count(address).pending().await?;
        Ok(count)
    }

    async fn send_transaction(&self, request: TransactionRequest) -> Result<TxHash> {
        let pending = self.provider.send_transaction(request).await?;
        Ok(*pending.tx_hash())
    }
}
