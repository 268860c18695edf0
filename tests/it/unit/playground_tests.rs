//! Playground data and code sample tests

use crate::helpers::{debug_app_config, host, palette_config, sales_model};
use cyoc_playground::PlaygroundError;
use cyoc_playground::playground::{PlaygroundVersion, default_js_code_sample, generate_playground_data};
use cyoc_playground::settings::PlaygroundSettings;

#[test]
fn test_v1_data_carries_sdk_and_system_info() {
    let ctx = host(sales_model(), debug_app_config());
    let data =
        generate_playground_data(&PlaygroundVersion::V1, ctx.as_ref(), &PlaygroundSettings::default())
            .unwrap();

    assert_eq!(data.dyoc_sdk.js_cdn_url, "/dyocsdk/dist/dyocsdk.mjs");
    assert_eq!(data.dyoc_sdk.css_cdn_url, "/dyocsdk/dist/dyocsdk.css");
    assert_eq!(data.dyoc_sdk.sdk_key, "viz");
    assert_eq!(data.dyoc_sdk.init_data.data.len(), 3);
    assert_eq!(data.dyoc_sdk.init_data.ts_system_info.color_palettes, vec!["#000002"]);
    assert!(data.dyoc_sdk.init_data.ts_system_info.is_debug_mode);

    let json = serde_json::to_value(&data).unwrap();
    assert_eq!(json["version"], "v1");
    assert_eq!(json["dyocSDK"]["initData"]["tsSystemInfo"]["colorPallettes"][0], "#000002");
    assert_eq!(json["font"]["fontsCdnUrl"], "/fonts/optimo-plain.css");
}

#[test]
fn test_unknown_version_uses_latest_generator() {
    let ctx = host(sales_model(), debug_app_config());
    let data = generate_playground_data(
        &PlaygroundVersion::Unknown("v7".to_string()),
        ctx.as_ref(),
        &PlaygroundSettings::default(),
    )
    .unwrap();

    assert_eq!(data.version, PlaygroundVersion::LATEST);
}

#[test]
fn test_palette_mismatch_is_an_error() {
    let ctx = host(sales_model(), palette_config(2, 7));
    let err =
        generate_playground_data(&PlaygroundVersion::V1, ctx.as_ref(), &PlaygroundSettings::default())
            .unwrap_err();

    assert!(matches!(err, PlaygroundError::ColorPalettes { expected: 10, actual: 7 }));
}

#[test]
fn test_data_url_sdk_path_is_used_inline() {
    let settings = PlaygroundSettings {
        sdk_js_path: "text/javascript;base64,AAAA".to_string(),
        sdk_base_url: "https://cdn.example.com/".to_string(),
        ..Default::default()
    };
    let ctx = host(sales_model(), debug_app_config());
    let data = generate_playground_data(&PlaygroundVersion::V1, ctx.as_ref(), &settings).unwrap();

    assert_eq!(data.dyoc_sdk.js_cdn_url, "data:text/javascript;base64,AAAA");
    assert_eq!(
        data.dyoc_sdk.css_cdn_url,
        "https://cdn.example.com/dyocsdk/dist/dyocsdk.css"
    );
}

#[test]
fn test_js_sample_uses_first_measure_and_attribute() {
    let code = default_js_code_sample(&sales_model());

    assert!(code.starts_with("const { muze, getDataFromSearchQuery } = viz;\n"));
    assert!(code.contains(".rows([\"Sales\"])"));
    assert!(code.contains(".columns([\"Region\"])"));
    assert!(code.contains(".mount(\"#chart\")"));
}
