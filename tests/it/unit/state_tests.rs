//! Client state decoding and merge tests

use crate::helpers::{TestChartModelBuilder, debug_app_config, host};
use cyoc_playground::playground::PlaygroundVersion;
use cyoc_playground::state::{ClientState, PartialClientState, get_client_state};
use serde_json::json;

fn state_from(raw: &str) -> ClientState {
    let model = TestChartModelBuilder::new()
        .with_visual_props(json!({ "clientState": raw }))
        .build();
    get_client_state(host(model, debug_app_config()).as_ref())
}

#[test]
fn test_stored_fields_merge_over_defaults() {
    let state = state_from(r#"{"playground":{"code":{"jsCodeBase64":"YQ=="}}}"#);

    assert_eq!(state.version, 1);
    assert_eq!(state.playground.version, PlaygroundVersion::V1);
    assert_eq!(state.playground.code.js_code_base64, "YQ==");
    assert_eq!(state.playground.code.css_code_base64, "");
    assert_eq!(state.playground.split_sizes, [55.0, 45.0]);
}

#[test]
fn test_malformed_field_falls_back_alone() {
    let state = state_from(r#"{"playground":{"splitSizes":"wide","code":{"cssCodeBase64":"Yg=="}}}"#);

    assert_eq!(state.playground.split_sizes, [55.0, 45.0]);
    assert_eq!(state.playground.code.css_code_base64, "Yg==");
}

#[test]
fn test_split_sizes_are_replaced_not_merged() {
    let state = state_from(r#"{"playground":{"splitSizes":[10,90,5]}}"#);
    assert_eq!(state.playground.split_sizes, [55.0, 45.0]);

    let state = state_from(r#"{"playground":{"splitSizes":[10,90]}}"#);
    assert_eq!(state.playground.split_sizes, [10.0, 90.0]);
}

#[test]
fn test_unknown_playground_version_is_kept() {
    let state = state_from(r#"{"playground":{"version":"v9"}}"#);
    assert_eq!(state.playground.version, PlaygroundVersion::Unknown("v9".to_string()));

    let json = serde_json::to_value(&state).unwrap();
    assert_eq!(json["playground"]["version"], json!("v9"));
}

#[test]
fn test_unknown_fields_are_ignored() {
    let state = state_from(r#"{"theme":"dark","playground":{"extra":true}}"#);
    assert_eq!(state, ClientState::default());
}

#[test]
fn test_partial_update_serializes_only_set_fields() {
    let partial = PartialClientState::split_sizes([30.0, 70.0]);
    assert_eq!(
        serde_json::to_value(&partial).unwrap(),
        json!({ "playground": { "splitSizes": [30.0, 70.0] } })
    );
}
