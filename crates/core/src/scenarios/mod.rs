//! One module per experiment. Each exposes `run`, which connects to the
//! configured network, and `run_with`, which takes any [`ChainClient`].
//!
//! [`ChainClient`]: crate::account::client::ChainClient

pub mod batch_delegation;
pub mod calls;
pub mod cross_chain;
pub mod dual_authorization;
pub mod multi_target;
pub mod nonce_override;
pub mod replay;
pub mod sponsored;

use crate::account::account::Account;
use crate::account::client::AlloyClient;
use crate::types::config::Config;
use crate::types::network_config::NetworkConfig;
use eyre::{Result, WrapErr};
use log::debug;

pub const SEPOLIA: &str = "sepolia";
pub const HOLESKY: &str = "holesky";

/// Resolves `network`, builds the sending account from `key` and connects to the node.
pub(crate) fn connect<'a>(
    config: &'a Config,
    network: &str,
    key: &str,
    key_name: &str,
) -> Result<(&'a NetworkConfig, Account, AlloyClient)> {
    let network = config.network(network)?;
    debug!("Configured for {} (chain {})", network.name, network.chain_id);

    let account =
        Account::from_private_key(key).wrap_err_with(|| format!("{key_name} is invalid"))?;
    let client = AlloyClient::connect(network, &account)?;
    debug!("Account ready: {}", account.address());

    Ok((network, account, client))
}
