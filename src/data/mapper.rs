//! Chart model to Muze dataset

use super::{Datum, Schema, build_schema, from_ts_date_value, is_date_field, to_number, to_text};
use crate::types::{ChartColumn, ChartModel};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Header row followed by positional data rows
pub type RowArrayData = Vec<Vec<Datum>>;

/// Schema plus dataset handed to the preview iframe
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DataAndSchema {
    pub schema: Schema,
    pub data: RowArrayData,
}

/// Build the Muze schema and row-array dataset from the first query result
/// of the chart model.
///
/// Values whose column id is unknown to the model are skipped, leaving the
/// schema slot as `null`. A model without results yields the header only.
pub fn build_data_and_schema(chart_model: &ChartModel) -> DataAndSchema {
    let schema = build_schema(&chart_model.columns);

    let columns_by_id: HashMap<&str, &ChartColumn> = chart_model
        .columns
        .iter()
        .map(|c| (c.id.as_str(), c))
        .collect();

    let header = schema.iter().map(|s| Datum::Text(s.name.clone())).collect();
    let mut data: RowArrayData = vec![header];

    let Some(query_data) = chart_model
        .data
        .as_ref()
        .and_then(|pages| pages.first())
        .map(|page| &page.data)
    else {
        return DataAndSchema { schema, data };
    };

    for row_values in &query_data.data_value {
        let mut by_name: HashMap<&str, Datum> = HashMap::new();

        for (col_idx, col_id) in query_data.columns.iter().enumerate() {
            let Some(col) = columns_by_id.get(col_id.as_str()) else {
                continue;
            };
            let raw = row_values.get(col_idx).unwrap_or(&Value::Null);
            by_name.insert(col.name.as_str(), convert_from_ts_value(col, raw));
        }

        let row = schema
            .iter()
            .map(|unit| by_name.get(unit.name.as_str()).cloned().unwrap_or_default())
            .collect();
        data.push(row);
    }

    tracing::debug!(
        "Mapped {} rows across {} fields",
        data.len() - 1,
        schema.len()
    );

    DataAndSchema { schema, data }
}

/// Convert one host cell into a Muze datum
pub fn convert_from_ts_value(col: &ChartColumn, ts_value: &Value) -> Datum {
    if col.has_custom_calendar() {
        return match ts_value.pointer("/v/s") {
            None | Some(Value::Null) => Datum::Null,
            Some(s) if col.is_date_num_column() => Datum::number(to_number(s)),
            Some(s) => Datum::number(from_ts_date_value(to_number(s))),
        };
    }

    if ts_value.is_null() {
        return Datum::Null;
    }

    if is_date_field(col) {
        Datum::number(from_ts_date_value(to_number(ts_value)))
    } else {
        Datum::Text(to_text(ts_value))
    }
}
