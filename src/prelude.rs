//! # Prelude
//!
//! Re-exports commonly used types and traits for convenience.
//!
//! ```rust
//! use kn_source_kamelet::prelude::*;
//! ```

// CRD types - most commonly used
pub use crate::crd::*;

// Command surface
pub use crate::cli::{Cli, Commands, DescribeTypeArgs, DescribeTypeCommand};

// Collaborator traits - implemented by tests and alternative backends
pub use crate::client::{KameletClient, KubePluginParams, PluginParams};

pub use crate::config::PluginConfig;
pub use crate::error::KameletError;
pub use crate::printers::OutputFormat;
