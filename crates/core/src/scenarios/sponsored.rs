use super::{HOLESKY, SEPOLIA, calls, connect};
use crate::account::account::Account;
use crate::account::client::ChainClient;
use crate::authorization::builder::{build_authorization, sign_authorization};
use crate::batch::encoder::BatchEncoder;
use crate::dispatch::dispatcher::{Outcome, submit};
use crate::types::call::Call;
use crate::types::config::{Config, PRIVATE_KEY, SPONSOR_PRIVATE_KEY};
use crate::types::delegated_transaction::DelegatedTransaction;
use crate::types::network_config::NetworkConfig;
use eyre::{Result, WrapErr, eyre};
use log::debug;

/// Authority nonce used when none is given: an already-used value on sepolia,
/// a far-future one on holesky.
pub fn default_nonce(network: &str) -> Option<u64> {
    match network {
        SEPOLIA => Some(3),
        HOLESKY => Some(1001),
        _ => None,
    }
}

/// The sponsor pays for and sends a transaction executing the authority's batch.
pub async fn run(
    config: &Config,
    network: &str,
    nonce: Option<u64>,
    dry_run: bool,
) -> Result<Outcome> {
    let nonce = nonce
        .or_else(|| default_nonce(network))
        .ok_or_else(|| eyre!("no sponsored scenario for network {network}"))?;

    let (network, sponsor, client) =
        connect(config, network, &config.keys.sponsor, SPONSOR_PRIVATE_KEY)?;
    let authority = Account::from_private_key(&config.keys.authority)
        .wrap_err_with(|| format!("{PRIVATE_KEY} is invalid"))?;
    debug!("Authority ready: {}", authority.address());

    run_with(&client, config, network, &sponsor, &authority, nonce, dry_run).await
}

pub async fn run_with<C>(
    client: &C,
    config: &Config,
    network: &NetworkConfig,
    sponsor: &Account,
    authority: &Account,
    nonce: u64,
    dry_run: bool,
) -> Result<Outcome>
where
    C: ChainClient + ?Sized,
{
    let batch_contract = config.contracts.batch_delegation(&network.name)?;
    let weth = config.contracts.weth(&network.name)?;

    let authorization =
        build_authorization(client, authority, network.chain_id, batch_contract, Some(nonce))
            .await?;
    let signed = sign_authorization(authority, authorization)?;
    debug!("Authorization signed by {} at nonce {}", authority.address(), nonce);

    let batch: Vec<Call> = match network.name.as_str() {
        HOLESKY => vec![calls::weth_deposit(weth, calls::ether("0.001")?)],
        _ => calls::deposit_transfer_approve(weth)?,
    };
    let encoder = BatchEncoder::from_abi(&config.abis.batch_delegation)?;
    let data = encoder.encode(&batch)?;

    let tx = DelegatedTransaction::new(sponsor.address(), authority.address(), data)
        .with_authorization(signed);
    Ok(submit(client, network, tx, dry_run).await?)
}
