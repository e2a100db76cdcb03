use super::{HOLESKY, connect};
use crate::account::account::Account;
use crate::account::client::ChainClient;
use crate::authorization::builder::replayed_authorization;
use crate::dispatch::dispatcher::{Outcome, submit};
use crate::types::config::{Config, SPONSOR2_PRIVATE_KEY};
use crate::types::delegated_transaction::DelegatedTransaction;
use crate::types::network_config::NetworkConfig;
use alloy::eips::eip7702::SignedAuthorization;
use alloy::primitives::{Address, Bytes, address, bytes, uint};
use eyre::Result;
use log::info;

/// Batch contract the published authorizations delegate to.
pub const REPLAYED_CONTRACT: Address = address!("0x7fbd22c5e75fd65a217513c6e5c8fca59207cca1");

/// Account whose code the replayed authorization is expected to install.
pub const REPLAY_TARGET: Address = address!("0x8c2451ae6edf47e9e17bcfa14062fc783df37d2f");

/// `execute([{to: 0x6b58…45ea, data: deposit(), value: 0.001 ether}])`.
pub const REPLAY_CALLDATA: Bytes = bytes!(
    "a6d0ad61"
    "0000000000000000000000000000000000000000000000000000000000000020"
    "0000000000000000000000000000000000000000000000000000000000000001"
    "0000000000000000000000000000000000000000000000000000000000000020"
    "0000000000000000000000000000000000000000000000000000000000000060"
    "0000000000000000000000006b5817e7091bc0c747741e96820b0199388245ea"
    "00000000000000000000000000000000000000000000000000038d7ea4c68000"
    "0000000000000000000000000000000000000000000000000000000000000004"
    "d0e30db000000000000000000000000000000000000000000000000000000000"
);

/// Authorizations already published on holesky.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PublishedAuthorization {
    /// Signed at the authority's first nonce.
    First,
    /// Signed at the far-future nonce 1001.
    FarFuture,
}

impl PublishedAuthorization {
    pub fn signed(self) -> SignedAuthorization {
        match self {
            PublishedAuthorization::First => replayed_authorization(
                REPLAYED_CONTRACT,
                17000,
                0,
                1,
                uint!(0xc5ec2404c1ffb8728282d385ecc8f55d8d0c468d4e374d552871ef6e39afe468_U256),
                uint!(0x60f1650fc7fa29b3fab92046c87ac0e83d107a4969842d579820e09aafc10dbc_U256),
            ),
            PublishedAuthorization::FarFuture => replayed_authorization(
                REPLAYED_CONTRACT,
                17000,
                1001,
                0,
                uint!(0xb0384133579f2b5aa6a269298a456c8dcb4b3422c3ded812111d8c61144a6dd1_U256),
                uint!(0x1569a05ede0b56af6c8434c763712cf1a578c089ed29026e3b7c062c9c2c8b10_U256),
            ),
        }
    }
}

/// A third party resubmits a previously published authorization.
pub async fn run(
    config: &Config,
    authorization: PublishedAuthorization,
    dry_run: bool,
) -> Result<Outcome> {
    let (network, sender, client) = connect(
        config,
        HOLESKY,
        &config.keys.second_sponsor,
        SPONSOR2_PRIVATE_KEY,
    )?;
    run_with(&client, network, &sender, authorization, dry_run).await
}

pub async fn run_with<C>(
    client: &C,
    network: &NetworkConfig,
    sender: &Account,
    authorization: PublishedAuthorization,
    dry_run: bool,
) -> Result<Outcome>
where
    C: ChainClient + ?Sized,
{
    let signed = authorization.signed();
    info!("Replaying authorization at nonce {} from {}", signed.nonce, sender.address());

    let tx = DelegatedTransaction::new(sender.address(), REPLAY_TARGET, REPLAY_CALLDATA)
        .with_authorization(signed);
    Ok(submit(client, network, tx, dry_run).await?)
}
