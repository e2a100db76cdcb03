use crate::account::client::ChainClient;
use crate::batch::encoder::decode_batch;
use crate::error::Result;
use crate::types::delegated_transaction::DelegatedTransaction;
use crate::types::network_config::NetworkConfig;
use alloy::primitives::TxHash;
use log::{debug, error, info};
use serde_json::Value;
use std::fmt;

/// Terminal state of a scenario run.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Succeeded { hash: TxHash, url: String },
    Failed { reason: String },
    /// Assembled but not submitted.
    DryRun { description: Value },
    /// Nothing to submit; the scenario only signs.
    Signed { description: Value },
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Succeeded { url, .. } => write!(f, "✅ Transaction successful: {url}"),
            Outcome::Failed { reason } => write!(f, "❌ Transaction failed: {reason}"),
            Outcome::DryRun { description } | Outcome::Signed { description } => {
                let pretty =
                    serde_json::to_string_pretty(description).map_err(|_| fmt::Error)?;
                write!(f, "{pretty}")
            }
        }
    }
}

/// Submits `tx` once. Does not wait for inclusion.
pub async fn dispatch<C>(client: &C, tx: DelegatedTransaction) -> Result<TxHash>
where
    C: ChainClient + ?Sized,
{
    debug!(
        "Dispatching {} -> {} with {} authorization(s)",
        tx.sender,
        tx.to,
        tx.authorizations.len()
    );
    let hash = client.send_transaction(tx.into_rpc_request()).await?;
    debug!("Dispatched {}", hash);
    Ok(hash)
}

/// Dispatches `tx` and turns a node rejection into [`Outcome::Failed`].
///
/// Transport errors are returned as-is.
pub async fn dispatch_and_report<C>(
    client: &C,
    network: &NetworkConfig,
    tx: DelegatedTransaction,
) -> Result<Outcome>
where
    C: ChainClient + ?Sized,
{
    match dispatch(client, tx).await {
        Ok(hash) => {
            let url = network.tx_url(&hash);
            info!("Transaction accepted by {}: {}", network.name, hash);
            Ok(Outcome::Succeeded { hash, url })
        }
        Err(err) if err.is_rejection() => {
            error!("Transaction rejected by {}: {}", network.name, err);
            Ok(Outcome::Failed {
                reason: err.to_string(),
            })
        }
        Err(err) => Err(err),
    }
}

/// Either describes `tx` or hands it to [`dispatch_and_report`].
pub async fn submit<C>(
    client: &C,
    network: &NetworkConfig,
    tx: DelegatedTransaction,
    dry_run: bool,
) -> Result<Outcome>
where
    C: ChainClient + ?Sized,
{
    if dry_run {
        info!("Dry run, not submitting to {}", network.name);
        return Ok(Outcome::DryRun {
            description: describe(network, &tx),
        });
    }
    dispatch_and_report(client, network, tx).await
}

/// JSON view of `tx`, with the batch payload decoded when it is one.
pub fn describe(network: &NetworkConfig, tx: &DelegatedTransaction) -> Value {
    let mut description = tx.describe();
    description["network"] = Value::from(network.name.clone());
    description["chainId"] = Value::from(network.chain_id);
    if let Ok(calls) = decode_batch(&tx.data) {
        description["calls"] = serde_json::to_value(calls).unwrap_or(Value::Null);
    }
    description
}
