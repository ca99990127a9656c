//! # Describe Type Command
//!
//! Shows the details of a Kamelet event source type, either as structured
//! output (`--output json|yaml|name|jsonpath|url`) or as a human-readable description.

use chrono::{DateTime, Utc};
use std::io::Write;
use tracing::debug;

use super::DescribeTypeArgs;
use crate::client::{resolve_namespace, PluginParams};
use crate::config::PluginConfig;
use crate::constants::CONDITION_READY;
use crate::crd::{JsonSchemaProps, Kamelet, KameletCondition};
use crate::describe::{
    join_and_truncate, parse_timestamp, write_conditions, write_metadata, ApiCondition,
};
use crate::error::KameletError;
use crate::printers::{label, print_obj, self_link, OutputFormat, PrefixWriter};

const COMMAND_NAME: &str = "describe-type";

/// `describe-type` bound to its collaborators for one invocation
#[derive(Debug)]
pub struct DescribeTypeCommand<'a, P: PluginParams + ?Sized> {
    params: &'a P,
    config: &'a PluginConfig,
}

impl<'a, P: PluginParams + ?Sized> DescribeTypeCommand<'a, P> {
    pub fn new(params: &'a P, config: &'a PluginConfig) -> Self {
        Self { params, config }
    }

    /// Run the command, writing its output to `out`
    pub async fn run(&self, args: &DescribeTypeArgs, out: &mut dyn Write) -> Result<(), KameletError> {
        self.run_at(args, out, Utc::now()).await
    }

    /// Run the command with ages computed relative to `now`
    pub async fn run_at(
        &self,
        args: &DescribeTypeArgs,
        out: &mut dyn Write,
        now: DateTime<Utc>,
    ) -> Result<(), KameletError> {
        let [name] = args.names.as_slice() else {
            return Err(KameletError::InvalidArguments {
                command: COMMAND_NAME,
            });
        };

        let namespace = resolve_namespace(self.params, args.namespace.as_deref()).await?;
        let client = self.params.new_kamelet_client().await?;

        debug!(namespace = %namespace, name = %name, "Fetching Kamelet");
        let kamelet = client.get_kamelet(&namespace, name).await?;

        if !kamelet.is_event_source() {
            return Err(KameletError::NotEventSource(name.clone()));
        }

        match &args.output {
            Some(OutputFormat::Url) => {
                writeln!(out, "{}", self_link(&kamelet))?;
                return Ok(());
            }
            Some(format) => {
                debug!(format = format.as_str(), "Printing structured output");
                return print_obj(format, &kamelet, out);
            }
            None => {}
        }

        let mut dw = PrefixWriter::new(out);
        write_kamelet(&mut dw, &kamelet, args.verbose, self.config.truncate_at, now);
        dw.write_line();
        dw.flush()?;

        let conditions = kamelet
            .status
            .as_ref()
            .map(|status| as_api_conditions(&status.conditions))
            .unwrap_or_default();
        write_conditions(&mut dw, &conditions, args.verbose, now);
        dw.flush()?;

        Ok(())
    }
}

/// Write metadata, description, provider, phase and properties of a Kamelet
pub fn write_kamelet<W: Write>(
    dw: &mut PrefixWriter<W>,
    kamelet: &Kamelet,
    print_details: bool,
    truncate_at: usize,
    now: DateTime<Utc>,
) {
    write_metadata(dw, &kamelet.metadata, print_details, truncate_at, now);

    let definition = &kamelet.spec.definition;
    if definition.title.is_empty() {
        dw.write_attribute("Description", &definition.description);
    } else {
        dw.write_attribute(
            "Description",
            &format!("{} - {}", definition.title, definition.description),
        );
    }
    dw.write_attribute("Provider", kamelet.provider());
    dw.write_attribute("Phase", kamelet.phase());

    dw.write_line();
    write_kamelet_properties(dw, definition, print_details, truncate_at);
}

/// Write the `Properties` section
///
/// Verbose output is a table of name, required flag, type and description;
/// otherwise the property names are listed on one truncated line.
pub fn write_kamelet_properties<W: Write>(
    dw: &mut PrefixWriter<W>,
    definition: &JsonSchemaProps,
    print_details: bool,
    truncate_at: usize,
) {
    const PROPERTIES: &str = "Properties";

    if print_details {
        let mut section = dw.write_attribute(PROPERTIES, "");
        let max_len = definition.max_property_name_len();
        section.writef(format_args!(
            "{:<max_len$} {:<8} {:<8} {}\n",
            "Name", "Required", "Type", "Description"
        ));
        for (name, property) in &definition.properties {
            section.writef(format_args!(
                "{:<max_len$} {:<8} {:<8} {}\n",
                name,
                definition.is_required(name),
                property.type_,
                property.description
            ));
        }
    } else {
        let max_width = truncate_at.saturating_sub(PROPERTIES.len() + 2);
        let names = join_and_truncate(definition.properties.keys(), max_width);
        dw.write_cols_ln(&[&label(PROPERTIES), &names]);
    }
}

/// Map Kamelet conditions 1:1 onto generic Ready conditions
pub fn as_api_conditions(conditions: &[KameletCondition]) -> Vec<ApiCondition> {
    conditions
        .iter()
        .map(|condition| ApiCondition {
            type_: CONDITION_READY.to_string(),
            status: condition.status.clone(),
            last_transition_time: condition
                .last_transition_time
                .as_deref()
                .and_then(parse_timestamp),
            reason: condition.reason.clone().unwrap_or_default(),
            message: condition.message.clone().unwrap_or_default(),
            ..ApiCondition::default()
        })
        .collect()
}
