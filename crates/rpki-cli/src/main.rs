//! rpki CLI
//!
//! Inspects and controls the RPKI validator sessions of a running BGP
//! daemon:
//! - `rpki server` shows session health
//! - `rpki server <address> <reset|softreset|enable>` controls a session
//! - `rpki table` shows the ROA table learned from the validators

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use rpki_cli::commands;
use rpki_cli::error::CliError;
use rpki_cli::ipc::DaemonClient;
use rpki_cli::output::print_error;
use rpki_core::config;

#[derive(Parser)]
#[command(name = "rpki")]
#[command(author, version, about = "Inspect and control RPKI validator sessions of a BGP daemon")]
#[command(propagate_version = true)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Daemon API host (overrides config)
    #[arg(short = 'u', long, global = true, env = "RPKI_HOST")]
    host: Option<String>,

    /// Daemon API port (overrides config)
    #[arg(short, long, global = true, env = "RPKI_PORT")]
    port: Option<u16>,

    /// Enable verbose output
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show RPKI validator sessions, or reset/softreset/enable one
    Server {
        /// Nothing to show all sessions, or `<ip address> <reset|softreset|enable>`
        #[arg(value_name = "ARGS")]
        args: Vec<String>,
    },

    /// Show the ROA table
    Table {
        /// Only show ROAs learned from this validator
        address: Option<String>,
        /// Address family (ipv4, ipv6, ...)
        #[arg(short = 'a', long, default_value = "")]
        address_family: String,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Setup logging based on verbosity
    let log_level = match (cli.quiet, cli.verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.into()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let config_file = config::load_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "Failed to load config from {:?}",
            cli.config.clone().unwrap_or_else(config::default_config_path)
        )
    })?;
    let client_config = config_file.client.with_overrides(cli.host, cli.port);

    // One client for the whole run
    let client = DaemonClient::new(client_config.api_address());

    let result = {
        let mut out = std::io::stdout().lock();
        match cli.command {
            Commands::Server { args } => commands::server_command(&client, &args, &mut out).await,
            Commands::Table {
                address,
                address_family,
            } => {
                commands::table_command(&client, address.as_deref(), &address_family, &mut out)
                    .await
            }
        }
    };

    match result {
        Ok(()) => Ok(()),
        Err(CliError::Usage(e)) => {
            println!("{}", e);
            std::process::exit(1);
        }
        Err(e) => {
            print_error(&e.to_string());
            std::process::exit(1);
        }
    }
}
