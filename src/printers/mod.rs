//! # Printers
//!
//! Output plumbing shared by the plugin commands.
//!
//! - `prefix_writer.rs` - indented, column-aligned text for describe output
//! - `structured.rs` - JSON / YAML / name printers and the `--output` formats
//! - `jsonpath.rs` - `jsonpath=<template>` templates

mod jsonpath;
mod prefix_writer;
mod structured;

pub use jsonpath::JsonPathTemplate;
pub use prefix_writer::{label, PrefixWriter, Section};
pub use structured::{print_obj, self_link, OutputFormat, ALLOWED_FORMATS};
