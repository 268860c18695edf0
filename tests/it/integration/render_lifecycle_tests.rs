//! Render lifecycle integration tests

use crate::helpers::{TestChartModelBuilder, debug_app_config, host, palette_config, sales_model};
use cyoc_playground::PlaygroundError;
use cyoc_playground::app::App;
use cyoc_playground::editors::CodeLanguage;
use cyoc_playground::host::{ChartContext, ChartToTsEvent, TsToChartEvent};
use cyoc_playground::playground::default_js_code_sample;
use cyoc_playground::settings::PlaygroundSettings;
use cyoc_playground::utils::encode_base64;
use serde_json::json;

fn stored_code(js: &str, css: &str, html: &str) -> serde_json::Value {
    let state = json!({
        "playground": {
            "code": {
                "jsCodeBase64": js,
                "cssCodeBase64": css,
                "htmlCodeBase64": html,
            }
        }
    });
    json!({ "clientState": state.to_string() })
}

#[tokio::test]
async fn test_first_render_emits_lifecycle_in_order() {
    let ctx = host(sales_model(), debug_app_config());
    let mut app = App::new(ctx.clone(), PlaygroundSettings::default());

    app.init().await.unwrap();

    assert_eq!(ctx.event_names(), vec!["RenderStart", "RenderComplete"]);
    assert!(app.is_mounted());
    assert_eq!(app.preview().unwrap().generation(), 1);

    let editors = app.editors().unwrap();
    assert!(editors.value(CodeLanguage::Js).contains(".rows([\"Sales\"])"));
    assert!(!editors.value(CodeLanguage::Css).is_empty());
}

#[tokio::test]
async fn test_render_error_is_reported_then_completed() {
    let ctx = host(sales_model(), palette_config(2, 5));
    let mut app = App::new(ctx.clone(), PlaygroundSettings::default());

    app.render().await.unwrap();

    assert_eq!(ctx.event_names(), vec!["RenderStart", "RenderError", "RenderComplete"]);
    match &ctx.events()[1] {
        ChartToTsEvent::RenderError { has_error, error } => {
            assert!(has_error);
            assert!(error.contains("does not match with the numColorPalettes * 5 (10)"));
        }
        other => panic!("unexpected event {:?}", other),
    }
    assert!(app.preview().unwrap().document().is_none());
}

#[tokio::test]
async fn test_rejected_start_still_completes() {
    let ctx = host(sales_model(), debug_app_config());
    ctx.reject_event("RenderStart");
    let mut app = App::new(ctx.clone(), PlaygroundSettings::default());

    app.render().await.unwrap();

    assert_eq!(ctx.event_names(), vec!["RenderError", "RenderComplete"]);
    assert!(!app.is_mounted());
}

#[tokio::test]
async fn test_stored_code_is_loaded_into_editors() {
    let model = TestChartModelBuilder::new()
        .with_attribute("c-region", "Region")
        .with_visual_props(stored_code(&encode_base64("const a = 1;"), "", ""))
        .build();
    let ctx = host(model, debug_app_config());
    let mut app = App::new(ctx.clone(), PlaygroundSettings::default());

    app.render().await.unwrap();

    let editors = app.editors().unwrap();
    assert_eq!(editors.value(CodeLanguage::Js), "const a = 1;");
    assert!(!editors.value(CodeLanguage::Html).is_empty());
    assert!(app.preview().unwrap().document().unwrap().contains("const a = 1;"));
}

#[tokio::test]
async fn test_undecodable_stored_code_falls_back_to_sample() {
    let model = TestChartModelBuilder::new()
        .with_visual_props(stored_code("%%%", "", ""))
        .build();
    let ctx = host(model, debug_app_config());
    let mut app = App::new(ctx.clone(), PlaygroundSettings::default());

    app.render().await.unwrap();

    assert_eq!(ctx.event_names(), vec!["RenderStart", "RenderComplete"]);
    assert_eq!(
        app.editors().unwrap().value(CodeLanguage::Js),
        default_js_code_sample(&ctx.chart_model())
    );
    assert_eq!(app.preview().unwrap().generation(), 1);
}

#[tokio::test]
async fn test_unpadded_stored_code_is_loaded() {
    let model = TestChartModelBuilder::new()
        .with_visual_props(stored_code("YQ", "", ""))
        .build();
    let ctx = host(model, debug_app_config());
    let mut app = App::new(ctx.clone(), PlaygroundSettings::default());

    app.render().await.unwrap();

    assert_eq!(ctx.event_names(), vec!["RenderStart", "RenderComplete"]);
    assert_eq!(app.editors().unwrap().value(CodeLanguage::Js), "a");
}

#[tokio::test]
async fn test_visual_props_update_does_not_rerender() {
    let ctx = host(sales_model(), debug_app_config());
    let mut app = App::new(ctx.clone(), PlaygroundSettings::default());
    app.init().await.unwrap();

    let answer = ctx.trigger(TsToChartEvent::VisualPropsUpdate, &json!({}));
    assert_eq!(answer, Some(json!({ "triggerRenderChart": false })));
}

#[test]
fn test_parts_are_unavailable_before_render() {
    let ctx = host(sales_model(), debug_app_config());
    let app = App::new(ctx, PlaygroundSettings::default());

    assert!(matches!(app.editors(), Err(PlaygroundError::NotInitialized("code editors"))));
    assert!(matches!(app.preview(), Err(PlaygroundError::NotInitialized("preview"))));
    assert!(matches!(app.playground_data(), Err(PlaygroundError::NotInitialized(_))));
    assert!(matches!(app.layout(), Err(PlaygroundError::NotInitialized(_))));
}

#[tokio::test]
async fn test_preview_document_holds_lockdown_and_snippets() {
    let ctx = host(sales_model(), debug_app_config());
    let mut app = App::new(ctx, PlaygroundSettings::default());
    app.init().await.unwrap();

    let iframe = app.preview().unwrap().to_iframe_html();
    assert!(iframe.contains(r#"sandbox="allow-scripts allow-same-origin""#));

    let document = app.preview().unwrap().document().unwrap();
    assert!(document.contains("window.alert = function() {};"));
    assert!(document.contains("window.sessionStorage.clear();"));
    assert!(document.contains(r#"<div id="chart"></div>"#));
    assert!(document.contains(r#"window["viz"] = ___DYOCSDK___("#));
    assert!(document.contains(".rows([\"Sales\"])"));
}
