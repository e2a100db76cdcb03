use super::{HOLESKY, SEPOLIA, connect};
use crate::account::account::Account;
use crate::account::client::ChainClient;
use crate::authorization::builder::{
    build_self_executed_authorization, recover_authority, sign_authorization,
};
use crate::dispatch::dispatcher::Outcome;
use crate::types::config::{Config, PRIVATE_KEY};
use crate::types::network_config::NetworkConfig;
use eyre::Result;
use log::info;
use serde_json::json;

/// Signs, through a sepolia client, an authorization bound to holesky's chain id.
/// Nothing is submitted.
pub async fn run(config: &Config, nonce: Option<u64>) -> Result<Outcome> {
    let (network, authority, client) =
        connect(config, SEPOLIA, &config.keys.authority, PRIVATE_KEY)?;
    let foreign = config.network(HOLESKY)?;
    run_with(&client, config, network, foreign, &authority, nonce).await
}

pub async fn run_with<C>(
    client: &C,
    config: &Config,
    network: &NetworkConfig,
    foreign: &NetworkConfig,
    authority: &Account,
    nonce: Option<u64>,
) -> Result<Outcome>
where
    C: ChainClient + ?Sized,
{
    let batch_contract = config.contracts.batch_delegation(&network.name)?;

    let authorization = build_self_executed_authorization(
        client,
        authority,
        foreign.chain_id,
        batch_contract,
        nonce,
    )
    .await?;
    let signed = sign_authorization(authority, authorization)?;
    let recovered = recover_authority(&signed)?;
    info!(
        "Signed authorization for chain {} through a {} client",
        foreign.chain_id, network.name
    );

    Ok(Outcome::Signed {
        description: json!({
            "client": network.name,
            "authority": recovered.to_string(),
            "address": signed.address.to_string(),
            "chainId": signed.chain_id.to_string(),
            "nonce": signed.nonce,
            "yParity": signed.y_parity(),
            "r": format!("{:#x}", signed.r()),
            "s": format!("{:#x}", signed.s()),
        }),
    })
}
