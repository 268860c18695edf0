//! Host chart context.
//!
//! The host SDK hands the chart a context object: it exposes the chart model
//! and app configuration, accepts events from the chart and calls back into
//! the chart on host-side changes. `ChartContext` is that seam; the browser
//! shell implements it over the real SDK and tests use `InMemoryChartContext`.

mod mock;

pub use mock::InMemoryChartContext;

use crate::constants::MEASURE_NAMES_AND_VALUES_COLUMNS;
use crate::error::Result;
use crate::types::{AppConfig, ChartConfig, ChartConfigDimension, ChartModel, Point, Query, QueryParams};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Callback registered for a host-to-chart event. The return value is handed
/// back to the host (e.g. `{ "triggerRenderChart": false }`).
pub type EventHandler = Box<dyn Fn(&Value) -> Value + Send + Sync>;

/// Screen position of the interaction that opened a context menu
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointerEvent {
    pub client_x: f64,
    pub client_y: f64,
}

/// Events the chart sends to the host
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "payload", rename_all_fields = "camelCase")]
pub enum ChartToTsEvent {
    RenderStart,
    RenderError {
        has_error: bool,
        error: String,
    },
    RenderComplete,
    UpdateVisualProps {
        visual_props: Value,
    },
    OpenContextMenu {
        event: PointerEvent,
        clicked_point: Point,
        selected_points: Vec<Point>,
    },
    CloseContextMenu,
    CloseAxisMenu,
}

impl ChartToTsEvent {
    pub fn name(&self) -> &'static str {
        match self {
            ChartToTsEvent::RenderStart => "RenderStart",
            ChartToTsEvent::RenderError { .. } => "RenderError",
            ChartToTsEvent::RenderComplete => "RenderComplete",
            ChartToTsEvent::UpdateVisualProps { .. } => "UpdateVisualProps",
            ChartToTsEvent::OpenContextMenu { .. } => "OpenContextMenu",
            ChartToTsEvent::CloseContextMenu => "CloseContextMenu",
            ChartToTsEvent::CloseAxisMenu => "CloseAxisMenu",
        }
    }
}

/// Events the host sends to the chart
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TsToChartEvent {
    VisualPropsUpdate,
    DataUpdate,
    ConfigUpdate,
}

/// The host SDK chart context
#[async_trait]
pub trait ChartContext: Send + Sync {
    /// Current chart model (columns, query results, visual props)
    fn chart_model(&self) -> ChartModel;

    /// Host application configuration
    fn app_config(&self) -> AppConfig;

    /// Register a handler for a host-to-chart event
    fn on(&self, event: TsToChartEvent, handler: EventHandler);

    /// Send an event to the host and wait for it to be accepted
    async fn emit_event(&self, event: ChartToTsEvent) -> Result<()>;
}

/// Read a visual property by dot-separated path, falling back to `default`
/// when any segment is missing
pub fn get_visual_prop(model: &ChartModel, path: &str, default: Value) -> Value {
    let Some(mut current) = model.visual_props.as_ref() else {
        return default;
    };

    for segment in path.split('.').filter(|s| !s.is_empty()) {
        match current.get(segment) {
            Some(next) => current = next,
            None => return default,
        }
    }

    if current.is_null() { default } else { current.clone() }
}

/// Columns the playground exposes to the host, without the synthetic
/// measure names/values columns
fn playground_columns(model: &ChartModel) -> Vec<crate::types::ChartColumn> {
    model
        .columns
        .iter()
        .filter(|c| !MEASURE_NAMES_AND_VALUES_COLUMNS.contains(&c.name.as_str()))
        .cloned()
        .collect()
}

/// The single `basic` config with every usable column in the `fields` section
pub fn default_chart_config(model: &ChartModel) -> Vec<ChartConfig> {
    let config = ChartConfig {
        key: "basic".to_string(),
        dimensions: vec![ChartConfigDimension {
            key: "fields".to_string(),
            columns: playground_columns(model),
        }],
    };
    tracing::debug!("Default chart config with {} columns", config.dimensions[0].columns.len());
    vec![config]
}

/// One query over every usable column, limited to `size` rows
pub fn queries_from_chart_config(_configs: &[ChartConfig], model: &ChartModel, size: u32) -> Vec<Query> {
    vec![Query {
        query_columns: playground_columns(model),
        query_params: Some(QueryParams { size: Some(size) }),
    }]
}
