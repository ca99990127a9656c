//! # kn-source-kamelet
//!
//! Entry point of the plugin binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use tracing::debug;

use kn_source_kamelet::cli::{version_command, Cli, Commands, DescribeTypeCommand};
use kn_source_kamelet::client::KubePluginParams;
use kn_source_kamelet::config::PluginConfig;

#[tokio::main]
async fn main() -> Result<()> {
    // Configure rustls crypto provider FIRST, before any other operations
    // Required for rustls 0.23+ when no default provider is set via features
    // This must be called synchronously before any async operations that use rustls
    rustls::crypto::ring::default_provider()
        .install_default()
        .unwrap_or_else(|_| panic!("Failed to install rustls crypto provider"));

    let config = PluginConfig::from_env();

    // Logs go to stderr; stdout is reserved for command output
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("kn_source_kamelet={}", config.log_level).into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?config, "Loaded plugin configuration");

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::DescribeType(args) => {
            let params = KubePluginParams::new(cli.kubeconfig, cli.context, config.clone());
            DescribeTypeCommand::new(&params, &config)
                .run(&args, &mut out)
                .await
                .context("Failed to describe Kamelet type")?;
        }
        Commands::Version => version_command(&mut out).context("Failed to print version")?,
    }

    out.flush().context("Failed to flush output")?;
    Ok(())
}
