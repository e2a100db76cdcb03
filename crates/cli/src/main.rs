use clap::{Parser, Subcommand, ValueEnum};
use eyre::{Result, WrapErr};
use log::debug;
use probe_core::{
    dispatch::dispatcher::Outcome,
    scenarios::{
        self, batch_delegation, cross_chain, dual_authorization, multi_target, nonce_override,
        replay::{self, PublishedAuthorization},
        sponsored,
    },
    types::config::Config,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Network table
    #[arg(long = "config", short = 'c', default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Directory holding the contract interfaces
    #[arg(long = "abi-dir", default_value = "abis", global = true)]
    abi_dir: PathBuf,

    /// Print the assembled transaction instead of sending it
    #[arg(long = "dry-run", global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum Network {
    Sepolia,
    Holesky,
}

impl Network {
    fn name(self) -> &'static str {
        match self {
            Network::Sepolia => scenarios::SEPOLIA,
            Network::Holesky => scenarios::HOLESKY,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Published {
    /// Authorization signed at nonce 0
    First,
    /// Authorization signed at nonce 1001
    FarFuture,
}

#[derive(Subcommand)]
enum Commands {
    /// Delegate to the batch contract and run deposit, transfer and approve
    BatchDelegation,
    /// Delegate to WETH, the operator registry and the opt-in service at once
    MultiTarget,
    /// Sign two authorizations, both at the queried nonce + 1
    DualAuthorization,
    /// Sign two authorizations at a chosen nonce
    NonceOverride {
        /// Authorization nonce
        #[arg(long = "nonce", short = 'n', default_value_t = nonce_override::DEFAULT_NONCE)]
        nonce: u64,
    },
    /// Sign a holesky authorization through a sepolia client
    CrossChain {
        /// Authorization nonce, queried when omitted
        #[arg(long = "nonce", short = 'n')]
        nonce: Option<u64>,
    },
    /// Let the sponsor pay for the authority's batch
    Sponsored {
        /// Network
        #[arg(long = "network", value_enum, default_value = "sepolia")]
        network: Network,

        /// Authority nonce, 3 on sepolia and 1001 on holesky when omitted
        #[arg(long = "nonce", short = 'n')]
        nonce: Option<u64>,
    },
    /// Resubmit an authorization published on holesky
    Replay {
        /// Which published authorization to reuse
        #[arg(long = "authorization", short = 'a', value_enum, default_value = "first")]
        authorization: Published,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = Config::load(&cli.config, &cli.abi_dir)
        .wrap_err_with(|| format!("failed to load {}", cli.config.display()))?;
    debug!("Configuration loaded");

    let outcome: Outcome = match &cli.command {
        Commands::BatchDelegation => batch_delegation::run(&config, cli.dry_run).await?,
        Commands::MultiTarget => multi_target::run(&config, cli.dry_run).await?,
        Commands::DualAuthorization => dual_authorization::run(&config, cli.dry_run).await?,
        Commands::NonceOverride { nonce } => {
            nonce_override::run(&config, *nonce, cli.dry_run).await?
        }
        Commands::CrossChain { nonce } => cross_chain::run(&config, *nonce).await?,
        Commands::Sponsored { network, nonce } => {
            sponsored::run(&config, network.name(), *nonce, cli.dry_run).await?
        }
        Commands::Replay { authorization } => {
            let authorization = match authorization {
                Published::First => PublishedAuthorization::First,
                Published::FarFuture => PublishedAuthorization::FarFuture,
            };
            replay::run(&config, authorization, cli.dry_run).await?
        }
    };

    println!("{}", outcome);
    Ok(())
}
