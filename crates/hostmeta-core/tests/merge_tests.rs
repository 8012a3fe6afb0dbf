//! End-to-end merge of the canonical standards + study fixtures

use hostmeta_core::{
    FlatHostTypes, HostTypeDefinition, SampleTypeRecord, StandardsTree, StudyConfig,
    combine_standards_and_study,
};
use hostmeta_test_utils::fixtures::{STANDARDS_YAML, STUDY_YAML};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};

fn standards() -> StandardsTree {
    serde_yaml::from_str(STANDARDS_YAML).unwrap()
}

fn study() -> StudyConfig {
    serde_yaml::from_str(STUDY_YAML).unwrap()
}

fn resolved() -> FlatHostTypes {
    combine_standards_and_study(&study(), &standards())
        .unwrap()
        .flatten()
        .unwrap()
}

fn field_json(host: &HostTypeDefinition, field: &str) -> Value {
    serde_json::to_value(&host.metadata_fields[field]).unwrap()
}

#[test]
fn test_fixtures_pass_load_checks() {
    standards().check_sample_types().unwrap();
    study().check_sample_types().unwrap();
}

#[test]
fn test_combined_tree_keeps_nesting() {
    let combined = combine_standards_and_study(&study(), &standards()).unwrap();

    let host_associated = &combined.host_type_specific_metadata["host_associated"];
    let human = &host_associated.host_type_specific_metadata["human"];
    assert!(human.host_type_specific_metadata.contains_key("dude"));
    assert_eq!(human.default.as_deref(), Some("not collected"));
    assert_eq!(
        field_json(human, "dna_extracted"),
        json!({ "allowed": ["true"], "default": "true", "type": "string" })
    );
    assert_eq!(
        field_json(host_associated, "geo_loc_name"),
        json!({
            "allowed": ["USA:CA:San Diego"],
            "default": "USA:CA:San Diego",
            "empty": false,
            "is_phi": false,
            "required": true,
            "type": "string"
        })
    );
}

#[test]
fn test_flat_dictionary_has_every_host_type() {
    let flat = resolved();

    assert_eq!(
        flat.names().collect::<Vec<_>>(),
        vec!["control", "dude", "host_associated", "human"]
    );
    for (_, host) in flat.iter() {
        assert!(host.host_type_specific_metadata.is_empty());
    }
}

#[test]
fn test_human_inherits_study_and_standards() {
    let flat = resolved();
    let human = flat.host_type("human").unwrap();

    assert_eq!(human.default.as_deref(), Some("not collected"));
    assert_eq!(
        field_json(human, "geo_loc_name"),
        json!({
            "allowed": ["USA:CA:San Diego"],
            "default": "USA:CA:San Diego",
            "empty": false,
            "is_phi": false,
            "required": true,
            "type": "string"
        })
    );
    assert_eq!(
        field_json(human, "dna_extracted"),
        json!({
            "allowed": ["true"],
            "default": "true",
            "empty": false,
            "is_phi": false,
            "required": true,
            "type": "string"
        })
    );
    // The deeper standards definition beats the study's host_associated override.
    assert_eq!(
        field_json(human, "host_type"),
        json!({
            "allowed": ["human"],
            "default": "human",
            "empty": false,
            "is_phi": false,
            "required": true,
            "type": "string"
        })
    );
}

#[test]
fn test_human_sample_types() {
    let flat = resolved();
    let samples = &flat.host_type("human").unwrap().sample_type_specific_metadata;

    assert_eq!(
        samples.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["dung", "f", "fe", "feces", "stool"]
    );
    assert_eq!(samples["f"], SampleTypeRecord::based_on("stool"));
    assert_eq!(samples["fe"], SampleTypeRecord::alias("stool"));
    assert_eq!(samples["feces"], SampleTypeRecord::alias("stool"));

    assert_eq!(
        serde_json::to_value(&samples["dung"]).unwrap(),
        json!({
            "base_type": "stool",
            "metadata_fields": {
                "description": {
                    "allowed": ["human dung"],
                    "default": "human dung",
                    "type": "string"
                },
                "physical_specimen_location": {
                    "allowed": ["FIELD"],
                    "default": "FIELD",
                    "type": "string"
                }
            }
        })
    );
    assert_eq!(
        serde_json::to_value(&samples["stool"]).unwrap(),
        json!({
            "metadata_fields": {
                "description": {
                    "allowed": ["human stool"],
                    "default": "human stool",
                    "type": "string"
                },
                "elevation": { "default": 14, "type": "number" },
                "physical_specimen_location": {
                    "allowed": ["UCSDST"],
                    "default": "UCSDST",
                    "empty": false,
                    "is_phi": false,
                    "required": true,
                    "type": "string"
                },
                "physical_specimen_remaining": {
                    "allowed": ["false"],
                    "default": "false",
                    "empty": false,
                    "is_phi": false,
                    "required": true,
                    "type": "string"
                }
            }
        })
    );
}

#[test]
fn test_dude_inherits_human() {
    let flat = resolved();
    let human = flat.host_type("human").unwrap();
    let dude = flat.host_type("dude").unwrap();

    assert_eq!(dude.default, human.default);
    assert_eq!(
        dude.sample_type_specific_metadata,
        human.sample_type_specific_metadata
    );
    assert_eq!(
        field_json(dude, "host_type"),
        json!({
            "allowed": ["dude"],
            "default": "dude",
            "empty": false,
            "is_phi": false,
            "required": true,
            "type": "string"
        })
    );
}

#[test]
fn test_control_is_untouched_by_human_overrides() {
    let flat = resolved();
    let control = flat.host_type("control").unwrap();

    assert_eq!(control.default.as_deref(), Some("not provided"));
    assert_eq!(
        field_json(control, "dna_extracted")["allowed"],
        json!(["true", "false"])
    );
    assert_eq!(
        control
            .sample_type_specific_metadata
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>(),
        vec!["fe", "stool"]
    );
}

#[test]
fn test_sample_type_fields_for_validator() {
    let flat = resolved();

    let dung = flat.sample_type_fields("human", "dung").unwrap();
    assert_eq!(dung["description"].default, Some(json!("human dung")));
    assert_eq!(dung["physical_specimen_location"].default, Some(json!("FIELD")));
    assert_eq!(dung["elevation"].default, Some(json!(14)));
    assert_eq!(dung["country"].default, Some(json!("USA")));
    // a plain type override leaves the inherited anyof in place
    assert!(dung["elevation"].anyof.is_some());

    let stool = flat.sample_type_fields("human", "stool").unwrap();
    assert_eq!(flat.sample_type_fields("human", "feces").unwrap(), stool);
    assert_eq!(flat.sample_type_fields("human", "f").unwrap(), stool);
}

#[test]
fn test_flat_output_serializes_without_empty_keys() {
    let flat = resolved();

    let yaml = serde_yaml::to_string(&flat).unwrap();

    assert!(!yaml.contains("host_type_specific_metadata"));
    let round: FlatHostTypes = serde_yaml::from_str(&yaml).unwrap();
    assert_eq!(round, flat);
}
