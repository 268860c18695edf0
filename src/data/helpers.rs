//! Column classification and value conversion helpers

use super::Datum;
use crate::constants::TS_NULL_VALUE;
use crate::types::{ChartColumn, ChartSpecificColumnType, ColumnType, DataType};
use serde_json::Value;

pub fn is_measure_values(col: &ChartColumn) -> bool {
    col.chart_specific_column_type == ChartSpecificColumnType::MeasureValues
}

pub fn is_measure_names(col: &ChartColumn) -> bool {
    col.chart_specific_column_type == ChartSpecificColumnType::MeasureNames
}

pub fn is_measure_or_measure_values(col: &ChartColumn) -> bool {
    col.column_type == ColumnType::Measure || is_measure_values(col)
}

/// Synthetic "measure names" or "measure values" column
pub fn is_mn_mv_column(col: &ChartColumn) -> bool {
    is_measure_names(col) || is_measure_values(col)
}

pub fn is_date_field(col: &ChartColumn) -> bool {
    matches!(
        col.data_type,
        DataType::Date | DataType::Time | DataType::DateTime
    )
}

pub fn measure_columns(columns: &[ChartColumn]) -> Vec<&ChartColumn> {
    columns
        .iter()
        .filter(|c| c.column_type == ColumnType::Measure)
        .collect()
}

pub fn attribute_columns(columns: &[ChartColumn]) -> Vec<&ChartColumn> {
    columns
        .iter()
        .filter(|c| c.column_type == ColumnType::Attribute)
        .collect()
}

/// Host epoch seconds to epoch milliseconds
pub fn from_ts_date_value(ts_timestamp: f64) -> f64 {
    ts_timestamp * 1000.0
}

/// Epoch milliseconds back to host epoch seconds
pub fn to_ts_date_value(timestamp: f64) -> f64 {
    timestamp / 1000.0
}

/// Convert a Muze value back to the raw value the host expects in point
/// tuples. Missing values become the host's null marker.
pub fn convert_datum_to_ts_value(col: &ChartColumn, value: &Value) -> Value {
    match value {
        Value::Null => return Value::String(TS_NULL_VALUE.to_string()),
        Value::String(s) if s == TS_NULL_VALUE => return value.clone(),
        _ => {}
    }

    if col.is_date_num_column() {
        return number_value(super::to_number(value));
    }

    if is_date_field(col) {
        return number_value(to_ts_date_value(super::to_number(value)));
    }

    match value {
        Value::Number(_) | Value::String(_) => value.clone(),
        other => Value::String(super::to_text(other)),
    }
}

fn number_value(n: f64) -> Value {
    Datum::number(n).to_json()
}
