//! # kn-source-kamelet CLI
//!
//! Command-line surface of the plugin.
//!
//! ## Usage
//!
//! ```bash
//! # Describe given Kamelets
//! kn-source-kamelet describe-type NAME
//!
//! # Describe given Kamelets in YAML output format
//! kn-source-kamelet describe-type NAME -o yaml
//!
//! # Show build information
//! kn-source-kamelet version
//! ```

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::printers::OutputFormat;

mod describe_type;
mod version;

pub use describe_type::{
    as_api_conditions, write_kamelet, write_kamelet_properties, DescribeTypeCommand,
};
pub use version::version_command;

const DESCRIBE_EXAMPLE: &str = "\
Examples:
  # Describe given Kamelets
  kn-source-kamelet describe-type NAME

  # Describe given Kamelets in YAML output format
  kn-source-kamelet describe-type NAME -o yaml

  # Print the title of a Kamelet
  kn-source-kamelet describe-type NAME -o jsonpath='{.spec.definition.title}'
";

/// Knative plugin for Apache Camel K Kamelet event sources
#[derive(Debug, Parser)]
#[command(name = "kn-source-kamelet")]
#[command(
    about = "Knative plugin for Apache Camel K Kamelet event sources",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the kubeconfig file (defaults to $KUBECONFIG or ~/.kube/config)
    #[arg(long, global = true)]
    pub kubeconfig: Option<PathBuf>,

    /// Kubernetes context to use
    #[arg(long, global = true)]
    pub context: Option<String>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show details of given Kamelet source type
    #[command(name = "describe-type", visible_alias = "dt", after_help = DESCRIBE_EXAMPLE)]
    DescribeType(DescribeTypeArgs),
    /// Print version and build information
    Version,
}

/// Arguments of `describe-type`
#[derive(Debug, Clone, Default, Args)]
pub struct DescribeTypeArgs {
    /// Name of the Kamelet
    ///
    /// Exactly one name is accepted; the count is checked by the command so
    /// the error message names the plugin.
    #[arg(value_name = "NAME")]
    pub names: Vec<String>,

    /// Kubernetes namespace (defaults to current context namespace)
    #[arg(short, long)]
    pub namespace: Option<String>,

    /// More output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Output format. One of: json|yaml|name|jsonpath|jsonpath-as-json|url.
    #[arg(short, long)]
    pub output: Option<OutputFormat>,
}
