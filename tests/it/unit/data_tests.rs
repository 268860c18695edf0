//! Data and schema mapping tests

use crate::helpers::{TestChartModelBuilder, sales_model};
use cyoc_playground::data::{
    AggregationFunc, Datum, FieldSubtype, FieldType, build_data_and_schema, convert_from_ts_value,
};
use cyoc_playground::types::{
    ChartColumn, ChartSpecificColumnType, ColumnAggregationType, ColumnType, DataType,
};
use serde_json::json;

#[test]
fn test_schema_follows_column_roles() {
    let result = build_data_and_schema(&sales_model());

    insta::assert_json_snapshot!(result.schema, @r#"
    [
      {
        "name": "Region",
        "displayName": "Region",
        "type": "dimension",
        "subtype": "categorical"
      },
      {
        "name": "Order Date",
        "displayName": "Order Date",
        "type": "dimension",
        "subtype": "temporal"
      },
      {
        "name": "Sales",
        "displayName": "Sales",
        "type": "measure",
        "subtype": "continuous",
        "defAggFn": "sum"
      }
    ]
    "#);
}

#[test]
fn test_rows_convert_dates_and_stringify_values() {
    let result = build_data_and_schema(&sales_model());

    assert_eq!(
        serde_json::to_value(&result.data).unwrap(),
        json!([
            ["Region", "Order Date", "Sales"],
            ["East", 1_700_000_000_000_i64, "120.5"],
            ["West", 1_700_086_400_000_i64, "80"],
        ])
    );
}

#[test]
fn test_model_without_pages_yields_header_only() {
    let model = TestChartModelBuilder::new()
        .with_attribute("c-region", "Region")
        .build();

    let result = build_data_and_schema(&model);
    assert_eq!(result.data, vec![vec![Datum::from("Region")]]);
}

#[test]
fn test_measure_values_column_is_a_measure() {
    let model = TestChartModelBuilder::new()
        .with_column(
            ChartColumn::new("c-mv", "Measure values", ColumnType::Attribute, DataType::Number)
                .with_chart_specific_type(ChartSpecificColumnType::MeasureValues),
        )
        .build();

    let result = build_data_and_schema(&model);
    assert!(result.schema[0].is_measure());
}

#[test]
fn test_invalid_date_becomes_null() {
    let model = TestChartModelBuilder::new()
        .with_date("c-date", "Order Date")
        .with_row(vec![json!("not a date")])
        .with_row(vec![json!(null)])
        .build();

    let result = build_data_and_schema(&model);
    assert_eq!(result.data[1], vec![Datum::Null]);
    assert_eq!(result.data[2], vec![Datum::Null]);
}

#[test]
fn test_average_measure_with_region() {
    let model = TestChartModelBuilder::new()
        .with_column(
            ChartColumn::new("c-sales", "Sales", ColumnType::Measure, DataType::Number)
                .with_aggregation(ColumnAggregationType::Average),
        )
        .with_attribute("c-region", "Region")
        .with_row(vec![json!(10), json!("East")])
        .with_row(vec![json!(20), json!("West")])
        .build();

    let result = build_data_and_schema(&model);

    assert_eq!(result.schema[0].def_agg_fn, Some(AggregationFunc::Avg));
    assert_eq!(result.schema[0].subtype, FieldSubtype::Continuous);
    assert_eq!(result.schema[1].field_type, FieldType::Dimension);
    assert_eq!(result.schema[1].subtype, FieldSubtype::Categorical);

    assert_eq!(result.data.len(), 3);
    assert!(result.data.iter().all(|row| row.len() == result.schema.len()));
    assert_eq!(result.data[0], vec![Datum::from("Sales"), Datum::from("Region")]);
}

#[test]
fn test_unknown_column_ids_leave_null_slots() {
    let mut model = sales_model();
    if let Some(page) = model.data.as_mut().and_then(|pages| pages.first_mut()) {
        page.data.columns[2] = "c-gone".to_string();
    }

    let result = build_data_and_schema(&model);
    assert_eq!(result.data[1][2], Datum::Null);
    assert_eq!(result.data[1][0], Datum::from("East"));
}

#[test]
fn test_extreme_measure_values_use_exponent_text() {
    let sales = ChartColumn::new("c-sales", "Sales", ColumnType::Measure, DataType::Number);

    assert_eq!(convert_from_ts_value(&sales, &json!(1e21)), Datum::Text("1e+21".to_string()));
    assert_eq!(convert_from_ts_value(&sales, &json!(1e-7)), Datum::Text("1e-7".to_string()));
    assert_eq!(convert_from_ts_value(&sales, &json!(0.5)), Datum::Text("0.5".to_string()));
}
