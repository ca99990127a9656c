//! # JSONPath Templates
//!
//! Templates for `--output jsonpath=<template>` in the kubectl form: literal
//! text mixed with `{<path>}` actions, where a path such as
//! `.spec.definition.title` is relative to the printed object.
//!
//! Missing fields select nothing instead of failing.

use serde_json::Value;
use serde_json_path::JsonPath;
use std::io::Write;

use crate::error::KameletError;

/// Parsed JSONPath template
#[derive(Debug)]
pub struct JsonPathTemplate {
    segments: Vec<Segment>,
}

#[derive(Debug)]
enum Segment {
    Text(String),
    Query(JsonPath),
}

impl JsonPathTemplate {
    /// Parse a template, failing on unclosed or invalid actions
    pub fn parse(template: &str) -> Result<Self, String> {
        let mut segments = Vec::new();
        let mut rest = template;
        while let Some(open) = rest.find('{') {
            if open > 0 {
                segments.push(Segment::Text(rest[..open].to_string()));
            }
            let action = &rest[open + 1..];
            let close = action
                .find('}')
                .ok_or_else(|| format!("unclosed action in template {template:?}"))?;
            segments.push(Segment::Query(parse_query(&action[..close])?));
            rest = &action[close + 1..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Text(rest.to_string()));
        }
        Ok(Self { segments })
    }

    /// Values selected by every action of the template, in order
    pub fn select<'v>(&self, value: &'v Value) -> Vec<&'v Value> {
        self.segments
            .iter()
            .filter_map(|segment| match segment {
                Segment::Query(path) => Some(path.query(value).all()),
                Segment::Text(_) => None,
            })
            .flatten()
            .collect()
    }

    /// Write the template with each action replaced by its selected values
    ///
    /// Strings are written as is, other values as compact JSON; several
    /// values of one action are separated by a space.
    pub fn render(&self, value: &Value, out: &mut dyn Write) -> Result<(), KameletError> {
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.write_all(text.as_bytes())?,
                Segment::Query(path) => {
                    let rendered = path
                        .query(value)
                        .all()
                        .into_iter()
                        .map(value_text)
                        .collect::<Result<Vec<_>, _>>()?;
                    out.write_all(rendered.join(" ").as_bytes())?;
                }
            }
        }
        Ok(())
    }
}

fn parse_query(action: &str) -> Result<JsonPath, String> {
    let action = action.trim();
    if action.is_empty() {
        return Err("empty action in jsonpath template".to_string());
    }
    let query = if let Some(relative) = action.strip_prefix('@') {
        format!("${relative}")
    } else if action.starts_with('$') {
        action.to_string()
    } else if action.starts_with('.') || action.starts_with('[') {
        format!("${action}")
    } else {
        format!("$.{action}")
    };
    JsonPath::parse(&query).map_err(|e| format!("invalid jsonpath {action:?}: {e}"))
}

fn value_text(value: &Value) -> Result<String, serde_json::Error> {
    match value {
        Value::String(text) => Ok(text.clone()),
        other => serde_json::to_string(other),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn kamelet() -> Value {
        json!({
            "metadata": {"name": "timer-source", "namespace": "default"},
            "spec": {
                "definition": {
                    "title": "Timer Source",
                    "required": ["message"],
                    "properties": {
                        "message": {"type": "string"},
                        "period": {"type": "integer", "default": 1000}
                    }
                }
            }
        })
    }

    fn render(template: &str) -> String {
        let mut out = Vec::new();
        JsonPathTemplate::parse(template)
            .unwrap()
            .render(&kamelet(), &mut out)
            .unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_render_mixes_text_and_values() {
        assert_eq!(
            render("{.metadata.namespace}/{.metadata.name}: {.spec.definition.title}"),
            "default/timer-source: Timer Source"
        );
    }

    #[test]
    fn test_non_string_values_render_as_json() {
        assert_eq!(
            render("{.spec.definition.properties.period.default} {.spec.definition.required}"),
            "1000 [\"message\"]"
        );
    }

    #[test]
    fn test_wildcard_values_are_space_separated() {
        assert_eq!(
            render("{.spec.definition.properties.*.type}"),
            "string integer"
        );
    }

    #[test]
    fn test_missing_fields_render_empty() {
        assert_eq!(render("[{.status.phase}]"), "[]");
    }

    #[test]
    fn test_path_forms_are_equivalent() {
        for template in ["{.metadata.name}", "{metadata.name}", "{$.metadata.name}", "{@.metadata.name}"] {
            assert_eq!(render(template), "timer-source", "template {template}");
        }
    }

    #[test]
    fn test_select_collects_values_of_all_actions() {
        let template = JsonPathTemplate::parse("{.metadata.name} {.metadata.namespace}").unwrap();
        let value = kamelet();
        assert_eq!(
            template.select(&value),
            vec![&json!("timer-source"), &json!("default")]
        );
    }

    #[test]
    fn test_invalid_templates_are_rejected() {
        for template in ["{.metadata.name", "{}", "{.metadata[}"] {
            assert!(
                JsonPathTemplate::parse(template).is_err(),
                "template {template:?} should be rejected"
            );
        }
    }
}
