//! # Custom Resource Definitions
//!
//! Client-side types for the Apache Camel K `Kamelet` resource
//! (`camel.apache.org/v1alpha1`).
//!
//! The CRD itself is installed by Camel K; these types only need to read it.
//!
//! ## Module Structure
//!
//! - `spec.rs` - Kamelet resource, spec and event type slots
//! - `definition.rs` - JSON schema definition of the Kamelet properties
//! - `status.rs` - Status, phase and condition types

mod definition;
mod spec;
mod status;

// Re-export all public types
pub use definition::{ExternalDocumentation, JsonSchemaProp, JsonSchemaProps};
pub use spec::{EventTypeSpec, Kamelet, KameletSpec, SourceSpec};
pub use status::{KameletCondition, KameletProperty, KameletStatus};
