//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestChartModelBuilder` - Builder pattern for host chart models
//! - `sales_model()` - Region / Order Date / Sales fixture
//! - Host app config and in-memory host helpers

use cyoc_playground::constants::CLIENT_STATE_VIS_PROP_KEY;
use cyoc_playground::host::InMemoryChartContext;
use cyoc_playground::types::{
    AppConfig, AppOptions, ChartColorPalette, ChartColumn, ChartModel, ColumnAggregationType,
    ColumnType, DataType, QueryData, QueryResult, StyleConfig,
};
use serde_json::{Value, json};
use std::sync::Arc;

// ============================================================================
// TestChartModelBuilder
// ============================================================================

/// Builder for host chart models with a single result page.
///
/// # Example
/// ```ignore
/// let model = TestChartModelBuilder::new()
///     .with_attribute("c-region", "Region")
///     .with_measure("c-sales", "Sales")
///     .with_row(vec![json!("East"), json!(10)])
///     .build();
/// ```
#[derive(Default)]
pub struct TestChartModelBuilder {
    columns: Vec<ChartColumn>,
    rows: Vec<Vec<Value>>,
    visual_props: Option<Value>,
}

impl TestChartModelBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_column(mut self, column: ChartColumn) -> Self {
        self.columns.push(column);
        self
    }

    pub fn with_attribute(self, id: &str, name: &str) -> Self {
        self.with_column(ChartColumn::new(id, name, ColumnType::Attribute, DataType::String))
    }

    pub fn with_date(self, id: &str, name: &str) -> Self {
        self.with_column(ChartColumn::new(id, name, ColumnType::Attribute, DataType::Date))
    }

    pub fn with_measure(self, id: &str, name: &str) -> Self {
        self.with_column(
            ChartColumn::new(id, name, ColumnType::Measure, DataType::Number)
                .with_aggregation(ColumnAggregationType::Sum),
        )
    }

    /// Add a row; values follow the column order
    pub fn with_row(mut self, values: Vec<Value>) -> Self {
        self.rows.push(values);
        self
    }

    pub fn with_visual_props(mut self, visual_props: Value) -> Self {
        self.visual_props = Some(visual_props);
        self
    }

    /// Build the model. Without rows the model has no result pages.
    pub fn build(self) -> ChartModel {
        let data = (!self.rows.is_empty()).then(|| {
            vec![QueryResult {
                data: QueryData {
                    columns: self.columns.iter().map(|c| c.id.clone()).collect(),
                    data_value: self.rows,
                },
            }]
        });

        ChartModel {
            columns: self.columns,
            data,
            visual_props: self.visual_props,
        }
    }
}

// ============================================================================
// Fixtures
// ============================================================================

/// Two regions with an order date and a sales total
pub fn sales_model() -> ChartModel {
    TestChartModelBuilder::new()
        .with_attribute("c-region", "Region")
        .with_date("c-date", "Order Date")
        .with_measure("c-sales", "Sales")
        .with_row(vec![json!("East"), json!(1_700_000_000), json!(120.5)])
        .with_row(vec![json!("West"), json!(1_700_086_400), json!(80)])
        .build()
}

/// App config with `num_palettes` palettes of `colors` colors in total
pub fn palette_config(num_palettes: usize, colors: usize) -> AppConfig {
    let colors: Vec<String> = (0..colors).map(|i| format!("#00000{}", i % 10)).collect();
    AppConfig {
        app_options: Some(AppOptions {
            is_debug_mode: true,
            ..Default::default()
        }),
        style_config: Some(StyleConfig {
            num_color_palettes: Some(num_palettes),
            chart_color_palettes: Some(vec![ChartColorPalette { colors: json!(colors) }]),
        }),
    }
}

/// Debug-mode host config with a single valid palette
pub fn debug_app_config() -> AppConfig {
    palette_config(1, 5)
}

pub fn host(model: ChartModel, app_config: AppConfig) -> Arc<InMemoryChartContext> {
    cyoc_playground::logger::init_tracing();
    Arc::new(InMemoryChartContext::new(model, app_config))
}

/// Client state as stored in the host's visual props
pub fn stored_client_state(ctx: &InMemoryChartContext) -> Option<Value> {
    use cyoc_playground::host::ChartContext;

    let props = ctx.chart_model().visual_props?;
    let raw = props.get(CLIENT_STATE_VIS_PROP_KEY)?.as_str()?.to_string();
    serde_json::from_str(&raw).ok()
}
