//! kn-source-kamelet Library
//!
//! Core functionality of the `kn-source-kamelet` plugin: Kamelet CRD types,
//! the Kubernetes client seam, describe/structured printers and the
//! `describe-type` command. Unit tests live in the module files.
//!
//! ## Quick Start
//!
//! ```rust
//! use kn_source_kamelet::prelude::*;
//! ```

pub mod cli;
pub mod client;
pub mod config;
pub mod constants;
pub mod crd;
pub mod describe;
pub mod error;
pub mod prelude;
pub mod printers;
