use crate::error::{Error, Result};
use crate::types::network_config::NetworkConfig;
use alloy::json_abi::JsonAbi;
use alloy::primitives::Address;
use dotenv::dotenv;
use log::{debug, warn};
use std::collections::BTreeMap;
use std::path::Path;
use std::{env, fs};
use toml::Value;

pub const PRIVATE_KEY: &str = "PRIVATE_KEY";
pub const SPONSOR_PRIVATE_KEY: &str = "SPONSOR_PRIVATE_KEY";
pub const SPONSOR2_PRIVATE_KEY: &str = "SPONSOR2_PRIVATE_KEY";
pub const SEPOLIA_BATCH_ETH_DELEGATION_CA: &str = "SEPOLIA_BATCH_ETH_DELEGATION_CA";
pub const HOLESKY_BATCH_ETH_DELEGATION_CA: &str = "HOLESKY_BATCH_ETH_DELEGATION_CA";
pub const SEPOLIA_WETH: &str = "SEPOLIA_WETH";
pub const HOLESKY_WETH: &str = "HOLESKY_WETH";
pub const SEPOLIA_SYMBIOTIC_OPERATOR_REGISTRY: &str = "SEPOLIA_SYMBIOTIC_OPERATOR_REGISTRY";
pub const SEPOLIA_SYMBIOTIC_OPT_IN_SERVICE: &str = "SEPOLIA_SYMBIOTIC_OPT_IN_SERVICE";

pub const BATCH_DELEGATION_ABI: &str = "batch_eth_delegation.json";
pub const OPERATOR_REGISTRY_ABI: &str = "sepolia_operator_registry.json";
pub const OPT_IN_ABI: &str = "sepolia_opt_in.json";

/// Private keys read from the environment. Empty when unset.
#[derive(Clone, Default)]
pub struct Keys {
    pub authority: String,
    pub sponsor: String,
    pub second_sponsor: String,
}

impl std::fmt::Debug for Keys {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mask = |k: &str| if k.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("Keys")
            .field("authority", &mask(&self.authority))
            .field("sponsor", &mask(&self.sponsor))
            .field("second_sponsor", &mask(&self.second_sponsor))
            .finish()
    }
}

/// Deployed contract addresses, kept as raw strings until a scenario needs them.
#[derive(Debug, Clone, Default)]
pub struct Contracts {
    pub sepolia_batch_delegation: String,
    pub holesky_batch_delegation: String,
    pub sepolia_weth: String,
    pub holesky_weth: String,
    pub sepolia_operator_registry: String,
    pub sepolia_opt_in_service: String,
}

impl Contracts {
    pub fn batch_delegation(&self, network: &str) -> Result<Address> {
        match network {
            "sepolia" => parse_address(
                SEPOLIA_BATCH_ETH_DELEGATION_CA,
                &self.sepolia_batch_delegation,
            ),
            "holesky" => parse_address(
                HOLESKY_BATCH_ETH_DELEGATION_CA,
                &self.holesky_batch_delegation,
            ),
            other => Err(Error::Config(format!(
                "no batch delegation contract for network {other}"
            ))),
        }
    }

    pub fn weth(&self, network: &str) -> Result<Address> {
        match network {
            "sepolia" => parse_address(SEPOLIA_WETH, &self.sepolia_weth),
            "holesky" => parse_address(HOLESKY_WETH, &self.holesky_weth),
            other => Err(Error::Config(format!("no WETH contract for network {other}"))),
        }
    }

    pub fn operator_registry(&self) -> Result<Address> {
        parse_address(
            SEPOLIA_SYMBIOTIC_OPERATOR_REGISTRY,
            &self.sepolia_operator_registry,
        )
    }

    pub fn opt_in_service(&self) -> Result<Address> {
        parse_address(
            SEPOLIA_SYMBIOTIC_OPT_IN_SERVICE,
            &self.sepolia_opt_in_service,
        )
    }
}

#[derive(Debug, Clone)]
pub struct Abis {
    pub batch_delegation: JsonAbi,
    pub operator_registry: JsonAbi,
    pub opt_in: JsonAbi,
}

/// Everything a scenario run needs, built once and passed by reference.
#[derive(Debug, Clone)]
pub struct Config {
    pub keys: Keys,
    pub contracts: Contracts,
    pub abis: Abis,
    networks: BTreeMap<String, NetworkConfig>,
}

impl Config {
    /// Loads `.env`, then reads the process environment, `config_path` and the ABI files in `abi_dir`.
    pub fn load(config_path: &Path, abi_dir: &Path) -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(config_path, abi_dir, |name| env::var(name).ok())
    }

    /// Same as [`Config::load`] with an injected environment.
    pub fn from_lookup<F>(config_path: &Path, abi_dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let keys = Keys {
            authority: read_var(&lookup, PRIVATE_KEY),
            sponsor: read_var(&lookup, SPONSOR_PRIVATE_KEY),
            second_sponsor: read_var(&lookup, SPONSOR2_PRIVATE_KEY),
        };

        let contracts = Contracts {
            sepolia_batch_delegation: read_var(&lookup, SEPOLIA_BATCH_ETH_DELEGATION_CA),
            holesky_batch_delegation: read_var(&lookup, HOLESKY_BATCH_ETH_DELEGATION_CA),
            sepolia_weth: read_var(&lookup, SEPOLIA_WETH),
            holesky_weth: read_var(&lookup, HOLESKY_WETH),
            sepolia_operator_registry: read_var(&lookup, SEPOLIA_SYMBIOTIC_OPERATOR_REGISTRY),
            sepolia_opt_in_service: read_var(&lookup, SEPOLIA_SYMBIOTIC_OPT_IN_SERVICE),
        };

        let config_content = fs::read_to_string(config_path).map_err(|e| {
            Error::Config(format!("failed to read {}: {e}", config_path.display()))
        })?;
        let raw_config: Value = config_content
            .parse::<Value>()
            .map_err(|e| Error::Config(format!("malformed {}: {e}", config_path.display())))?;
        let networks = read_networks(&raw_config, &lookup)?;

        let abis = Abis {
            batch_delegation: read_abi(abi_dir, BATCH_DELEGATION_ABI)?,
            operator_registry: read_abi(abi_dir, OPERATOR_REGISTRY_ABI)?,
            opt_in: read_abi(abi_dir, OPT_IN_ABI)?,
        };

        debug!("Loaded {} network(s) from {}", networks.len(), config_path.display());

        Ok(Self {
            keys,
            contracts,
            abis,
            networks,
        })
    }

    pub fn network(&self, name: &str) -> Result<&NetworkConfig> {
        self.networks
            .get(name)
            .ok_or_else(|| Error::Config(format!("network {name} not found in config")))
    }
}

pub fn parse_address(name: &str, value: &str) -> Result<Address> {
    value.parse().map_err(|_| Error::InvalidAddress {
        name: name.to_string(),
        value: value.to_string(),
    })
}

fn read_var<F>(lookup: &F, name: &str) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) => value,
        None => {
            warn!("Environment variable {} not set, defaulting to empty", name);
            String::new()
        }
    }
}

fn read_networks<F>(raw_config: &Value, lookup: &F) -> Result<BTreeMap<String, NetworkConfig>>
where
    F: Fn(&str) -> Option<String>,
{
    let table = raw_config
        .get("networks")
        .and_then(|n| n.as_table())
        .ok_or_else(|| Error::Config("[networks] table not found".to_string()))?;

    let mut networks = BTreeMap::new();
    for (name, entry) in table {
        let chain_id = entry
            .get("chain_id")
            .and_then(|v| v.as_integer())
            .and_then(|v| u64::try_from(v).ok())
            .ok_or_else(|| Error::Config(format!("chain_id not found for network: {name}")))?;

        let url_str = entry
            .get("rpc_url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| Error::Config(format!("rpc_url not found for network: {name}")))?;
        let rpc_url = match url_str.strip_prefix("env:") {
            Some(env_var) => read_var(lookup, env_var),
            None => url_str.to_string(),
        };

        let explorer_url = entry
            .get("explorer_url")
            .and_then(|v| v.as_str())
            .ok_or_else(|| {
                Error::Config(format!("explorer_url not found for network: {name}"))
            })?
            .trim_end_matches('/')
            .to_string();

        networks.insert(
            name.clone(),
            NetworkConfig {
                name: name.clone(),
                chain_id,
                rpc_url,
                explorer_url,
            },
        );
    }

    Ok(networks)
}

fn read_abi(abi_dir: &Path, file: &str) -> Result<JsonAbi> {
    let path = abi_dir.join(file);
    let content = fs::read_to_string(&path)
        .map_err(|e| Error::Config(format!("failed to read abi {}: {e}", path.display())))?;
    serde_json::from_str(&content)
        .map_err(|e| Error::Config(format!("malformed abi {}: {e}", path.display())))
}
