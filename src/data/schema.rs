//! Muze field schema

use serde::{Deserialize, Serialize};

use crate::types::{ChartColumn, ColumnAggregationType};

/// Aggregation functions Muze understands
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationFunc {
    Sum,
    Avg,
    Min,
    Max,
    First,
    Last,
    Count,
    Std,
}

impl AggregationFunc {
    /// Map a host aggregation; anything without a Muze counterpart sums
    pub fn from_host(aggregation: Option<ColumnAggregationType>) -> Self {
        match aggregation {
            Some(ColumnAggregationType::Sum) => AggregationFunc::Sum,
            Some(ColumnAggregationType::Average) => AggregationFunc::Avg,
            Some(ColumnAggregationType::Min) => AggregationFunc::Min,
            Some(ColumnAggregationType::Max) => AggregationFunc::Max,
            Some(ColumnAggregationType::Count) => AggregationFunc::Count,
            Some(ColumnAggregationType::StdDeviation) => AggregationFunc::Std,
            _ => AggregationFunc::Sum,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Dimension,
    Measure,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldSubtype {
    Categorical,
    Temporal,
    Binned,
    Continuous,
}

/// Schema entry for one field
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitSchema {
    pub name: String,
    pub display_name: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    pub subtype: FieldSubtype,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub def_agg_fn: Option<AggregationFunc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bin_size: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
}

pub type Schema = Vec<UnitSchema>;

impl UnitSchema {
    fn dimension(name: &str, subtype: FieldSubtype) -> Self {
        Self {
            name: name.to_string(),
            display_name: name.to_string(),
            field_type: FieldType::Dimension,
            subtype,
            def_agg_fn: None,
            bin_size: None,
            format: None,
        }
    }

    pub fn measure(name: &str, aggregation: AggregationFunc) -> Self {
        Self {
            field_type: FieldType::Measure,
            def_agg_fn: Some(aggregation),
            ..Self::dimension(name, FieldSubtype::Continuous)
        }
    }

    pub fn categorical(name: &str) -> Self {
        Self::dimension(name, FieldSubtype::Categorical)
    }

    pub fn temporal(name: &str) -> Self {
        Self::dimension(name, FieldSubtype::Temporal)
    }

    pub fn is_measure(&self) -> bool {
        self.field_type == FieldType::Measure
    }
}

/// Derive the schema entry for a host column
pub fn unit_schema_for(col: &ChartColumn) -> UnitSchema {
    if super::is_measure_or_measure_values(col) {
        UnitSchema::measure(&col.name, AggregationFunc::from_host(col.aggregation_type))
    } else if super::is_date_field(col) {
        UnitSchema::temporal(&col.name)
    } else {
        UnitSchema::categorical(&col.name)
    }
}

/// Schema for every host column, in column order
pub fn build_schema(columns: &[ChartColumn]) -> Schema {
    columns.iter().map(unit_schema_for).collect()
}
