use super::{SEPOLIA, calls, connect};
use crate::account::account::Account;
use crate::account::client::ChainClient;
use crate::authorization::builder::{build_self_executed_authorization, sign_authorization};
use crate::batch::encoder::{BatchEncoder, encode_function};
use crate::dispatch::dispatcher::{Outcome, submit};
use crate::types::call::Call;
use crate::types::config::{Config, PRIVATE_KEY};
use crate::types::delegated_transaction::DelegatedTransaction;
use crate::types::network_config::NetworkConfig;
use alloy::dyn_abi::DynSolValue;
use alloy::primitives::U256;
use eyre::Result;
use log::debug;

/// Delegates straight to the target contracts instead of the batch contract, then
/// calls the batch contract directly. The node is expected to revert it.
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
    let registry = config.contracts.operator_registry()?;
    let opt_in_service = config.contracts.opt_in_service()?;

    let mut signed = Vec::new();
    for target in [weth, registry, opt_in_service] {
        let authorization =
            build_self_executed_authorization(client, authority, network.chain_id, target, None)
                .await?;
        signed.push(sign_authorization(authority, authorization)?);
        debug!("Authorization signed for {}", target);
    }

    let register = encode_function(&config.abis.operator_registry, "registerOperator", &[])?;
    let opt_in = encode_function(
        &config.abis.opt_in,
        "optIn",
        &[DynSolValue::Address(calls::OPT_IN_WHERE)],
    )?;
    let batch = vec![
        calls::weth_deposit(weth, calls::ether("0.0001")?),
        Call::new(registry, register, U256::ZERO),
        Call::new(opt_in_service, opt_in, U256::ZERO),
    ];

    let encoder = BatchEncoder::from_abi(&config.abis.batch_delegation)?;
    let data = encoder.encode(&batch)?;

    let tx = DelegatedTransaction::new(authority.address(), batch_contract, data)
        .with_authorizations(signed);
    Ok(submit(client, network, tx, dry_run).await?)
}
