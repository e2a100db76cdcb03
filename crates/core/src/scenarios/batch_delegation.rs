use super::{SEPOLIA, calls, connect};
use crate::account::account::Account;
use crate::account::client::ChainClient;
use crate::authorization::builder::{build_self_executed_authorization, sign_authorization};
use crate::batch::encoder::BatchEncoder;
use crate::dispatch::dispatcher::{Outcome, submit};
use crate::types::config::{Config, PRIVATE_KEY};
use crate::types::delegated_transaction::DelegatedTransaction;
use crate::types::network_config::NetworkConfig;
use eyre::Result;
use log::debug;

/// The authority delegates to the batch contract and calls itself with three calls.
pub async fn run(config: &Config, dry_run: bool) -> Result<Outcome> {
    let (network, authority, client) =
        connect(config, SEPOLIA, &config.keys.authority, PRIVATE_KEY)?;
    run_with(&client, config, network, &authority, dry_run).await
}

pub async fn run_with<C>(
    client: &C,
    config: &Config,
    network: &NetworkConfig,
    authority: &Account,
    dry_run: bool,
) -> Result<Outcome>
where
    C: ChainClient + ?Sized,
{
    let batch_contract = config.contracts.batch_delegation(&network.name)?;
    let weth = config.contracts.weth(&network.name)?;

    let authorization = build_self_executed_authorization(
        client,
        authority,
        network.chain_id,
        batch_contract,
        None,
    )
    .await?;
    let signed = sign_authorization(authority, authorization)?;
    debug!("Authorization signed for {}", batch_contract);

    let encoder = BatchEncoder::from_abi(&config.abis.batch_delegation)?;
    let data = encoder.encode(&calls::deposit_transfer_approve(weth)?)?;
    debug!("Batch encoded ({} bytes)", data.len());

    let tx = DelegatedTransaction::new(authority.address(), authority.address(), data)
        .with_authorization(signed);
    Ok(submit(client, network, tx, dry_run).await?)
}
