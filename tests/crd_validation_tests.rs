//! # CRD Validation Tests
//!
//! Tests that Kamelet resources as served by Camel K deserialize into the
//! client-side types, including optional and legacy fields.

mod common;

use common::{kamelet, LOG_SINK, TIMER_SOURCE};
use kn_source_kamelet::crd::Kamelet;
use kube::Resource;

#[test]
fn test_timer_source_fields() {
    let k = kamelet(TIMER_SOURCE);

    assert_eq!(k.metadata.name.as_deref(), Some("timer-source"));
    assert!(k.is_event_source());
    assert_eq!(k.provider(), "Apache Software Foundation");
    assert_eq!(k.phase(), "Ready");

    let definition = &k.spec.definition;
    assert_eq!(definition.title, "Timer Source");
    assert_eq!(definition.required, vec!["message".to_string()]);
    assert!(definition.is_required("message"));
    assert!(!definition.is_required("period"));
    assert_eq!(definition.max_property_name_len(), "message".len());
    assert_eq!(definition.properties["period"].type_, "integer");
    assert_eq!(
        definition.properties["period"].default,
        Some(serde_json::json!(1000))
    );
    assert_eq!(k.spec.types["out"].media_type, "text/plain");

    let status = k.status.as_ref().expect("status should be present");
    assert_eq!(status.conditions.len(), 1);
    assert_eq!(status.conditions[0].status, "True");
    assert_eq!(status.conditions[0].reason.as_deref(), Some("Validated"));
}

#[test]
fn test_properties_iterate_in_name_order() {
    let k = kamelet(TIMER_SOURCE);
    let names: Vec<&str> = k.spec.definition.properties.keys().map(String::as_str).collect();
    assert_eq!(names, vec!["message", "period"]);
}

#[test]
fn test_minimal_kamelet_defaults() {
    let k = kamelet(LOG_SINK);
    assert!(!k.is_event_source());
    assert_eq!(k.provider(), "");
    assert_eq!(k.phase(), "");
    assert!(k.status.is_none());
    assert!(k.spec.definition.properties.is_empty());
    assert_eq!(k.spec.definition.max_property_name_len(), 0);
}

#[test]
fn test_kamelet_without_labels_is_not_a_source() {
    let k: Kamelet = serde_yaml::from_str(
        r"
apiVersion: camel.apache.org/v1alpha1
kind: Kamelet
metadata:
  name: unlabelled
spec: {}
",
    )
    .expect("Should deserialize Kamelet with empty spec");
    assert!(!k.is_event_source());
}

#[test]
fn test_full_definition_fields() {
    let k: Kamelet = serde_yaml::from_str(
        r#"
apiVersion: camel.apache.org/v1alpha1
kind: Kamelet
metadata:
  name: aws-s3-source
  labels:
    camel.apache.org/kamelet.type: source
spec:
  definition:
    title: AWS S3 Source
    description: Receive data from AWS S3 Bucket
    type: object
    required: [bucketNameOrArn, accessKey]
    properties:
      accessKey:
        title: Access Key
        type: string
        format: password
        x-descriptors:
          - urn:alm:descriptor:com.tectonic.ui:password
      region:
        type: string
        enum: ["eu-west-1", "us-east-1"]
        example: eu-west-1
    externalDocs:
      url: https://camel.apache.org
  flow:
    from:
      uri: aws2-s3:{{bucketNameOrArn}}
  dependencies:
    - camel:aws2-s3
status:
  phase: Error
  properties:
    - name: region
      default: eu-west-1
"#,
    )
    .expect("Should deserialize Kamelet with all definition fields");

    let definition = &k.spec.definition;
    assert_eq!(definition.type_, "object");
    assert_eq!(definition.properties["accessKey"].format, "password");
    assert_eq!(definition.properties["accessKey"].x_descriptors.len(), 1);
    assert_eq!(definition.properties["region"].enum_values.len(), 2);
    assert_eq!(
        definition.external_docs.as_ref().map(|d| d.url.as_str()),
        Some("https://camel.apache.org")
    );
    assert!(k.spec.flow.is_some());
    assert!(k.spec.template.is_none());
    assert_eq!(k.spec.dependencies, vec!["camel:aws2-s3".to_string()]);
    assert_eq!(k.phase(), "Error");
    let status = k.status.as_ref().unwrap();
    assert_eq!(status.properties[0].default.as_deref(), Some("eu-west-1"));
}

#[test]
fn test_resource_coordinates() {
    assert_eq!(Kamelet::group(&()), "camel.apache.org");
    assert_eq!(Kamelet::version(&()), "v1alpha1");
    assert_eq!(Kamelet::kind(&()), "Kamelet");
    assert_eq!(Kamelet::plural(&()), "kamelets");
}

#[test]
fn test_serialization_round_trip_keeps_wire_names() {
    let k = kamelet(TIMER_SOURCE);
    let value = serde_json::to_value(&k).unwrap();
    assert_eq!(value["apiVersion"], "camel.apache.org/v1alpha1");
    assert_eq!(value["kind"], "Kamelet");
    assert_eq!(value["spec"]["types"]["out"]["mediaType"], "text/plain");
    assert_eq!(
        value["status"]["conditions"][0]["lastTransitionTime"],
        "2024-05-01T10:01:00Z"
    );
    // Empty optional fields are not serialized
    assert!(value["spec"].get("sources").is_none());
    assert!(value["spec"]["definition"]["properties"]["message"]
        .get("default")
        .is_none());
}
