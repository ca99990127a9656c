//! # Structured Printers
//!
//! Output formats selectable with `--output`, and the generic printer that
//! serializes a resource unchanged or through a JSONPath template.

use kube::Resource;
use serde::Serialize;
use std::io::Write;
use std::str::FromStr;

use super::jsonpath::JsonPathTemplate;
use crate::error::KameletError;

/// Formats accepted by `--output`, as shown in the usage text
pub const ALLOWED_FORMATS: &str = "json|yaml|name|jsonpath|jsonpath-as-json|url";

/// Output formats accepted by `--output` (names are case-insensitive)
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// JSON document
    Json,
    /// YAML document
    Yaml,
    /// `<resource>.<group>/<name>`
    Name,
    /// Self link of the resource
    Url,
    /// `jsonpath=<template>`: the template with its actions filled in
    JsonPath(String),
    /// `jsonpath-as-json=<template>`: the selected values as a JSON array
    JsonPathAsJson(String),
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Name => "name",
            OutputFormat::Url => "url",
            OutputFormat::JsonPath(_) => "jsonpath",
            OutputFormat::JsonPathAsJson(_) => "jsonpath-as-json",
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (kind, template) = match s.split_once('=') {
            Some((kind, template)) => (kind, Some(template)),
            None => (s, None),
        };
        match (kind.to_ascii_lowercase().as_str(), template) {
            ("json", None) => Ok(OutputFormat::Json),
            ("yaml", None) => Ok(OutputFormat::Yaml),
            ("name", None) => Ok(OutputFormat::Name),
            ("url", None) => Ok(OutputFormat::Url),
            ("jsonpath", Some(template)) => {
                JsonPathTemplate::parse(template)?;
                Ok(OutputFormat::JsonPath(template.to_string()))
            }
            ("jsonpath-as-json", Some(template)) => {
                JsonPathTemplate::parse(template)?;
                Ok(OutputFormat::JsonPathAsJson(template.to_string()))
            }
            ("jsonpath" | "jsonpath-as-json", None) => Err(format!(
                "{kind} output format requires a template, e.g. {kind}='{{.metadata.name}}'"
            )),
            _ => Err(format!(
                "unable to match a printer suitable for the output format {s:?}, allowed formats are: {ALLOWED_FORMATS}"
            )),
        }
    }
}

/// Print `obj` in the given structured format
///
/// `Url` is not a structured format; the caller resolves it before reaching
/// the printer, so asking for it here is an error.
pub fn print_obj<K>(format: &OutputFormat, obj: &K, out: &mut dyn Write) -> Result<(), KameletError>
where
    K: Resource<DynamicType = ()> + Serialize,
{
    match format {
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, obj)?;
            writeln!(out)?;
        }
        OutputFormat::Yaml => {
            out.write_all(serde_yaml::to_string(obj)?.as_bytes())?;
        }
        OutputFormat::Name => {
            writeln!(
                out,
                "{}.{}/{}",
                K::plural(&()),
                K::group(&()),
                obj.meta().name.as_deref().unwrap_or_default()
            )?;
        }
        OutputFormat::JsonPath(template) => {
            let template = JsonPathTemplate::parse(template).map_err(KameletError::Print)?;
            template.render(&serde_json::to_value(obj)?, out)?;
        }
        OutputFormat::JsonPathAsJson(template) => {
            let template = JsonPathTemplate::parse(template).map_err(KameletError::Print)?;
            let value = serde_json::to_value(obj)?;
            serde_json::to_writer_pretty(&mut *out, &template.select(&value))?;
            writeln!(out)?;
        }
        OutputFormat::Url => {
            return Err(KameletError::Print(
                "url is not a structured output format".to_string(),
            ));
        }
    }
    Ok(())
}

/// Self link of a namespaced resource
///
/// Servers since Kubernetes 1.20 leave `metadata.selfLink` empty; the API
/// path of the object is returned in that case.
pub fn self_link<K>(obj: &K) -> String
where
    K: Resource<DynamicType = ()>,
{
    let meta = obj.meta();
    match meta.self_link.as_deref() {
        Some(link) if !link.is_empty() => link.to_string(),
        _ => format!(
            "{}/{}",
            K::url_path(&(), meta.namespace.as_deref()),
            meta.name.as_deref().unwrap_or_default()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crd::Kamelet;

    fn kamelet(yaml: &str) -> Kamelet {
        serde_yaml::from_str(yaml).unwrap()
    }

    const TIMER: &str = r"
apiVersion: camel.apache.org/v1alpha1
kind: Kamelet
metadata:
  name: timer-source
  namespace: default
spec:
  definition:
    title: Timer Source
";

    #[test]
    fn test_output_format_parses_case_insensitively() {
        assert_eq!("URL".parse::<OutputFormat>(), Ok(OutputFormat::Url));
        assert_eq!("Yaml".parse::<OutputFormat>(), Ok(OutputFormat::Yaml));
        assert_eq!(
            "JSONPath={.metadata.Name}".parse::<OutputFormat>(),
            Ok(OutputFormat::JsonPath("{.metadata.Name}".to_string()))
        );
    }

    #[test]
    fn test_output_format_rejects_unknown_and_incomplete_formats() {
        for format in ["wide", "jsonpath", "json=x", "jsonpath={.metadata"] {
            assert!(
                format.parse::<OutputFormat>().is_err(),
                "{format:?} should be rejected"
            );
        }
    }

    #[test]
    fn test_jsonpath_format() {
        let mut out = Vec::new();
        let format: OutputFormat = "jsonpath={.metadata.name}: {.spec.definition.title}"
            .parse()
            .unwrap();
        print_obj(&format, &kamelet(TIMER), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "timer-source: Timer Source");
    }

    #[test]
    fn test_jsonpath_as_json_format() {
        let mut out = Vec::new();
        let format: OutputFormat = "jsonpath-as-json={.metadata.name}".parse().unwrap();
        print_obj(&format, &kamelet(TIMER), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[\n  \"timer-source\"\n]\n");
    }

    #[test]
    fn test_name_format() {
        let mut out = Vec::new();
        print_obj(&OutputFormat::Name, &kamelet(TIMER), &mut out).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "kamelets.camel.apache.org/timer-source\n"
        );
    }

    #[test]
    fn test_json_format_is_plain_serialization() {
        let k = kamelet(TIMER);
        let mut out = Vec::new();
        print_obj(&OutputFormat::Json, &k, &mut out).unwrap();
        let expected = format!("{}\n", serde_json::to_string_pretty(&k).unwrap());
        assert_eq!(String::from_utf8(out).unwrap(), expected);
    }

    #[test]
    fn test_url_is_rejected_by_structured_printer() {
        let mut out = Vec::new();
        let result = print_obj(&OutputFormat::Url, &kamelet(TIMER), &mut out);
        assert!(matches!(result, Err(KameletError::Print(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_self_link_falls_back_to_api_path() {
        assert_eq!(
            self_link(&kamelet(TIMER)),
            "/apis/camel.apache.org/v1alpha1/namespaces/default/kamelets/timer-source"
        );
    }

    #[test]
    fn test_self_link_prefers_metadata() {
        let mut k = kamelet(TIMER);
        k.metadata.self_link = Some("https://cluster/kamelets/timer-source".to_string());
        assert_eq!(self_link(&k), "https://cluster/kamelets/timer-source");
    }
}
