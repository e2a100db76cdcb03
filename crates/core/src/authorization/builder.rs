use crate::account::account::Account;
use crate::account::client::ChainClient;
use crate::error::{Error, Result};
use alloy::eips::eip7702::{Authorization, SignedAuthorization};
use alloy::primitives::{Address, U256};
use alloy::signers::SignerSync;
use log::debug;

/// Builds an authorization delegating `authority`'s code to `contract`.
///
/// An explicit `nonce` is embedded as given, without touching the network, so
/// used or far-future values can be probed. Otherwise the authority's current
/// transaction count is queried once and embedded unchanged, which is what a
/// sponsored submission needs.
///
/// `chain_id` is never checked against the client's network; `0` means any chain.
pub async fn build_authorization<C>(
    client: &C,
    authority: &Account,
    chain_id: u64,
    contract: Address,
    nonce: Option<u64>,
) -> Result<Authorization>
where
    C: ChainClient + ?Sized,
{
    let nonce = match nonce {
        Some(nonce) => nonce,
        None => client.transaction_count(authority.address()).await?,
    };

    debug!(
        "Built authorization for {} -> {} (chain {}, nonce {})",
        authority.address(),
        contract,
        chain_id,
        nonce
    );

    Ok(Authorization {
        chain_id: U256::from(chain_id),
        address: contract,
        nonce,
    })
}

/// Like [`build_authorization`], for an authority that also sends the transaction.
///
/// The outer transaction consumes the current nonce before the authorization list
/// is processed, so a queried nonce is bumped by one.
pub async fn build_self_executed_authorization<C>(
    client: &C,
    authority: &Account,
    chain_id: u64,
    contract: Address,
    nonce: Option<u64>,
) -> Result<Authorization>
where
    C: ChainClient + ?Sized,
{
    let nonce = match nonce {
        Some(nonce) => nonce,
        None => client.transaction_count(authority.address()).await? + 1,
    };
    build_authorization(client, authority, chain_id, contract, Some(nonce)).await
}

pub fn sign_authorization(
    authority: &Account,
    authorization: Authorization,
) -> Result<SignedAuthorization> {
    let hash = authorization.signature_hash();
    let signature = authority
        .signer()
        .sign_hash_sync(&hash)
        .map_err(|e| Error::Signing(e.to_string()))?;
    Ok(authorization.into_signed(signature))
}

pub fn recover_authority(signed: &SignedAuthorization) -> Result<Address> {
    signed
        .recover_authority()
        .map_err(|e| Error::Signing(e.to_string()))
}

pub fn verify_authorization(signed: &SignedAuthorization, expected: Address) -> bool {
    matches!(recover_authority(signed), Ok(authority) if authority == expected)
}

/// Rebuilds an authorization published earlier, signature included.
pub fn replayed_authorization(
    contract: Address,
    chain_id: u64,
    nonce: u64,
    y_parity: u8,
    r: U256,
    s: U256,
) -> SignedAuthorization {
    let inner = Authorization {
        chain_id: U256::from(chain_id),
        address: contract,
        nonce,
    };
    SignedAuthorization::new_unchecked(inner, y_parity, r, s)
}
