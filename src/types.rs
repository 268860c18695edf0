//! Host chart model types.
//!
//! These mirror the shapes the host chart SDK hands to a custom chart:
//! columns, query results, visual properties and app configuration. They
//! serialize in the host's camelCase wire format.

use serde::{Deserialize, Serialize};
use serde_json::Value;

// ============================================================================
// Column Types
// ============================================================================

/// Role of a column in the host query
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnType {
    Measure,
    Attribute,
    Date,
    Unknown,
}

impl From<String> for ColumnType {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "MEASURE" => ColumnType::Measure,
            "ATTRIBUTE" => ColumnType::Attribute,
            "DATE" => ColumnType::Date,
            _ => ColumnType::Unknown,
        }
    }
}

/// Storage type of a column's values
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataType {
    Date,
    Time,
    DateTime,
    Number,
    String,
    Boolean,
    Unknown,
}

impl From<String> for DataType {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "DATE" => DataType::Date,
            "TIME" => DataType::Time,
            "DATE_TIME" => DataType::DateTime,
            "NUMBER" | "INT32" | "INT64" | "FLOAT" | "DOUBLE" => DataType::Number,
            "STRING" | "CHAR" | "VARCHAR" => DataType::String,
            "BOOLEAN" | "BOOL" => DataType::Boolean,
            _ => DataType::Unknown,
        }
    }
}

/// Synthetic columns the host adds for "measure names / measure values"
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChartSpecificColumnType {
    MeasureValues,
    MeasureNames,
    #[default]
    None,
}

impl From<String> for ChartSpecificColumnType {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "MEASURE_VALUES" => ChartSpecificColumnType::MeasureValues,
            "MEASURE_NAMES" => ChartSpecificColumnType::MeasureNames,
            _ => ChartSpecificColumnType::None,
        }
    }
}

/// Host aggregation applied to a measure column
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ColumnAggregationType {
    Sum,
    Average,
    Min,
    Max,
    Count,
    CountDistinct,
    StdDeviation,
    Variance,
    None,
    Other,
}

impl From<String> for ColumnAggregationType {
    fn from(s: String) -> Self {
        match s.to_uppercase().as_str() {
            "SUM" => ColumnAggregationType::Sum,
            "AVERAGE" => ColumnAggregationType::Average,
            "MIN" => ColumnAggregationType::Min,
            "MAX" => ColumnAggregationType::Max,
            "COUNT" => ColumnAggregationType::Count,
            "COUNT_DISTINCT" => ColumnAggregationType::CountDistinct,
            "STD_DEVIATION" => ColumnAggregationType::StdDeviation,
            "VARIANCE" => ColumnAggregationType::Variance,
            "NONE" => ColumnAggregationType::None,
            _ => ColumnAggregationType::Other,
        }
    }
}

/// Time buckets whose values are plain ordinals (e.g. day of week) rather
/// than epoch timestamps
pub const DATE_NUM_TIME_BUCKETS: [&str; 11] = [
    "DAY_OF_WEEK",
    "DAY_OF_MONTH",
    "DAY_OF_QUARTER",
    "DAY_OF_YEAR",
    "WEEK_OF_MONTH",
    "WEEK_OF_QUARTER",
    "WEEK_OF_YEAR",
    "MONTH_OF_QUARTER",
    "MONTH_OF_YEAR",
    "QUARTER_OF_YEAR",
    "HOUR_OF_DAY",
];

/// A single field in the host's query result
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartColumn {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: ColumnType,
    pub data_type: DataType,
    #[serde(default)]
    pub chart_specific_column_type: ChartSpecificColumnType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub aggregation_type: Option<ColumnAggregationType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time_bucket: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_calendar_type: Option<String>,
}

impl ChartColumn {
    pub fn new(id: &str, name: &str, column_type: ColumnType, data_type: DataType) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            column_type,
            data_type,
            chart_specific_column_type: ChartSpecificColumnType::None,
            aggregation_type: None,
            time_bucket: None,
            custom_calendar_type: None,
        }
    }

    pub fn with_aggregation(mut self, aggregation: ColumnAggregationType) -> Self {
        self.aggregation_type = Some(aggregation);
        self
    }

    pub fn with_chart_specific_type(mut self, kind: ChartSpecificColumnType) -> Self {
        self.chart_specific_column_type = kind;
        self
    }

    pub fn with_time_bucket(mut self, bucket: &str) -> Self {
        self.time_bucket = Some(bucket.to_string());
        self
    }

    pub fn with_custom_calendar(mut self, calendar: &str) -> Self {
        self.custom_calendar_type = Some(calendar.to_string());
        self
    }

    /// Whether the host attached a custom (fiscal) calendar to this column
    pub fn has_custom_calendar(&self) -> bool {
        self.custom_calendar_type
            .as_deref()
            .is_some_and(|c| !c.is_empty())
    }

    /// Whether date values of this column are ordinals instead of timestamps
    pub fn is_date_num_column(&self) -> bool {
        self.time_bucket
            .as_deref()
            .is_some_and(|b| DATE_NUM_TIME_BUCKETS.contains(&b))
    }
}

// ============================================================================
// Query Results
// ============================================================================

/// One page of columnar query results: values are stored per row, with
/// positions matching `columns` (column ids)
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryData {
    pub columns: Vec<String>,
    pub data_value: Vec<Vec<Value>>,
}

/// Result of one query issued for the chart
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct QueryResult {
    pub data: QueryData,
}

/// The host's chart model
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartModel {
    pub columns: Vec<ChartColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<QueryResult>>,
    /// Opaque string-keyed map persisted by the host
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub visual_props: Option<Value>,
}

// ============================================================================
// Chart Config & Queries
// ============================================================================

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfigDimension {
    pub key: String,
    pub columns: Vec<ChartColumn>,
}

/// Column placement chosen for the chart
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ChartConfig {
    pub key: String,
    pub dimensions: Vec<ChartConfigDimension>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u32>,
}

/// Query the chart asks the host to run
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Query {
    pub query_columns: Vec<ChartColumn>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query_params: Option<QueryParams>,
}

// ============================================================================
// App Config
// ============================================================================

/// Flags describing where and how the chart is embedded
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppOptions {
    pub is_debug_mode: bool,
    pub is_liveboard_context: bool,
    pub is_mobile: bool,
    pub is_print_mode: bool,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartColorPalette {
    /// Either a flat list of colors or a list whose first element is that list
    #[serde(default)]
    pub colors: Value,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StyleConfig {
    pub num_color_palettes: Option<usize>,
    pub chart_color_palettes: Option<Vec<ChartColorPalette>>,
}

/// Host application configuration
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AppConfig {
    pub app_options: Option<AppOptions>,
    pub style_config: Option<StyleConfig>,
}

impl AppConfig {
    /// App options, defaulted when the host sent none
    pub fn options(&self) -> AppOptions {
        self.app_options.clone().unwrap_or_default()
    }
}

// ============================================================================
// Points
// ============================================================================

/// One `(column, value)` pair of a selected point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointTuple {
    pub column_id: String,
    pub value: Value,
}

/// A point selected in the chart, as the host understands it
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub tuple: Vec<PointTuple>,
}

impl Point {
    /// Add a tuple unless the column is already present
    pub fn push_tuple(&mut self, column_id: &str, value: Value) {
        if self.tuple.iter().any(|t| t.column_id == column_id) {
            return;
        }
        self.tuple.push(PointTuple {
            column_id: column_id.to_string(),
            value,
        });
    }
}
