use super::{SEPOLIA, calls, connect};
use crate::account::account::Account;
use crate::account::client::ChainClient;
use crate::authorization::builder::{build_authorization, sign_authorization};
use crate::batch::encoder::BatchEncoder;
use crate::dispatch::dispatcher::{Outcome, submit};
use crate::types::config::{Config, PRIVATE_KEY};
use crate::types::delegated_transaction::DelegatedTransaction;
use crate::types::network_config::NetworkConfig;
use eyre::Result;
use log::{debug, info};

pub const DEFAULT_NONCE: u64 = 2;

/// Same authorizations as the dual scenario, with a caller-chosen nonce: lower
/// than, equal to or far beyond the authority's current one.
pub async fn run(config: &Config, nonce: u64, dry_run: bool) -> Result<Outcome> {
    let (network, authority, client) =
        connect(config, SEPOLIA, &config.keys.authority, PRIVATE_KEY)?;
    run_with(&client, config, network, &authority, nonce, dry_run).await
}

pub async fn run_with<C>(
    client: &C,
    config: &Config,
    network: &NetworkConfig,
    authority: &Account,
    nonce: u64,
    dry_run: bool,
) -> Result<Outcome>
where
    C: ChainClient + ?Sized,
{
    let batch_contract = config.contracts.batch_delegation(&network.name)?;
    let registry = config.contracts.operator_registry()?;
    let weth = config.contracts.weth(&network.name)?;

    info!("Probing authorization nonce {}", nonce);
    let mut signed = Vec::new();
    for target in [batch_contract, registry] {
        let authorization =
            build_authorization(client, authority, network.chain_id, target, Some(nonce)).await?;
        signed.push(sign_authorization(authority, authorization)?);
        debug!("Authorization signed for {}", target);
    }

    let encoder = BatchEncoder::from_abi(&config.abis.batch_delegation)?;
    let data = encoder.encode(&calls::deposit_transfer_approve(weth)?)?;

    let tx = DelegatedTransaction::new(authority.address(), authority.address(), data)
        .with_authorizations(signed);
    Ok(submit(client, network, tx, dry_run).await?)
}
