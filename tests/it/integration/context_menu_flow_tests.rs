//! Context menus from a chart click inside the preview to the host

use crate::helpers::{debug_app_config, host, sales_model};
use cyoc_playground::app::App;
use cyoc_playground::comm::MessageTarget;
use cyoc_playground::host::{ChartToTsEvent, InMemoryChartContext};
use cyoc_playground::sdk::{DyocSdk, MuzeCanvas};
use cyoc_playground::settings::PlaygroundSettings;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

#[derive(Default)]
struct RecordingCanvas {
    mounted: Option<String>,
}

impl MuzeCanvas for RecordingCanvas {
    fn config(&mut self, _config: Value) {}
    fn layers(&mut self, _layers: Value) {}
    fn set_width(&mut self, _width: f64) {}
    fn set_height(&mut self, _height: f64) {}
    fn mount(&mut self, target: &str) {
        self.mounted = Some(target.to_string());
    }
}

async fn rendered_app(ctx: Arc<InMemoryChartContext>) -> App {
    let mut app = App::new(ctx, PlaygroundSettings::default());
    app.init().await.unwrap();
    app
}

#[tokio::test]
async fn test_geom_click_opens_host_context_menu() {
    let ctx = host(sales_model(), debug_app_config());
    let mut app = rendered_app(ctx.clone()).await;
    ctx.clear_events();

    // Iframe side: the SDK posts to the parent window
    let (tx, mut parent_rx) = mpsc::unbounded_channel::<Value>();
    let parent: Arc<dyn MessageTarget> = Arc::new(tx);
    let init_data = app.playground_data().unwrap().dyoc_sdk.init_data.clone();
    let sdk = DyocSdk::new(init_data, parent);
    let mut canvas = sdk.canvas(RecordingCanvas::default());
    canvas.mount("#chart", None, Instant::now());
    assert_eq!(canvas.canvas().mounted.as_deref(), Some("#chart"));

    canvas
        .on_context_menu(&json!({
            "type": "geom",
            "event": { "clientX": 10, "clientY": 20 },
            "targetPoint": [["Region", "Sales", "_id"], ["East", 120.5, 0]],
            "colFacets": {},
            "rowFacets": {}
        }))
        .unwrap();

    // Parent side
    let message = parent_rx.try_recv().unwrap();
    assert!(app.on_window_message(&message));
    assert_eq!(app.process_channel_events().await.unwrap(), 1);

    assert_eq!(ctx.event_names(), vec!["CloseContextMenu", "OpenContextMenu"]);
    match &ctx.events()[1] {
        ChartToTsEvent::OpenContextMenu {
            event,
            clicked_point,
            selected_points,
        } => {
            assert_eq!((event.client_x, event.client_y), (10.0, 20.0));
            assert_eq!(selected_points.len(), 1);
            assert_eq!(
                serde_json::to_value(clicked_point).unwrap(),
                json!({
                    "tuple": [
                        { "columnId": "c-region", "value": "East" },
                        { "columnId": "c-sales", "value": 120.5 }
                    ]
                })
            );
        }
        other => panic!("unexpected event {:?}", other),
    }
}

#[tokio::test]
async fn test_axis_click_on_unknown_field_only_closes_menus() {
    let ctx = host(sales_model(), debug_app_config());
    let mut app = rendered_app(ctx.clone()).await;
    ctx.clear_events();

    let message = json!({
        "type": "ShowContextMenu",
        "payload": {
            "type": "x-axis-tick",
            "event": { "clientX": 1, "clientY": 2 },
            "dataPath": [{ "field": "Missing", "value": "x" }]
        }
    });
    assert!(app.on_window_message(&message));
    app.process_channel_events().await.unwrap();

    assert_eq!(ctx.event_names(), vec!["CloseContextMenu"]);
}

#[tokio::test]
async fn test_hide_all_closes_both_menus() {
    let ctx = host(sales_model(), debug_app_config());
    let mut app = rendered_app(ctx.clone()).await;
    ctx.clear_events();

    let (tx, mut parent_rx) = mpsc::unbounded_channel::<Value>();
    let init_data = app.playground_data().unwrap().dyoc_sdk.init_data.clone();
    let sdk = DyocSdk::new(init_data, Arc::new(tx));
    sdk.on_document_click().unwrap();

    let message = parent_rx.try_recv().unwrap();
    assert!(app.on_window_message(&message));
    app.process_channel_events().await.unwrap();

    assert_eq!(ctx.event_names(), vec!["CloseContextMenu", "CloseAxisMenu"]);

    ctx.clear_events();
    app.on_document_click().await.unwrap();
    assert_eq!(ctx.event_names(), vec!["CloseContextMenu", "CloseAxisMenu"]);
}

#[tokio::test]
async fn test_render_completed_is_acknowledged_without_host_events() {
    let ctx = host(sales_model(), debug_app_config());
    let mut app = rendered_app(ctx.clone()).await;
    ctx.clear_events();

    assert!(app.on_window_message(&json!({ "type": "RenderCompleted", "payload": null })));
    assert!(!app.on_window_message(&json!({ "source": "devtools" })));

    assert_eq!(app.process_channel_events().await.unwrap(), 1);
    assert!(ctx.events().is_empty());
}
