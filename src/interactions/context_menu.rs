//! Host side: channel payloads to host context menus

use crate::comm::{ContextMenuTarget, FieldValues, ShowContextMenuPayload};
use crate::constants::{TOTALS_VALUE, TS_NULL_VALUE};
use crate::data::{convert_datum_to_ts_value, is_measure_names, is_mn_mv_column};
use crate::error::Result;
use crate::host::{ChartContext, ChartToTsEvent, PointerEvent};
use crate::logger::Logger;
use crate::types::{ChartColumn, ColumnType, Point};
use serde_json::Value;
use std::collections::HashMap;

fn is_totals_value(value: &Value) -> bool {
    value.as_str() == Some(TOTALS_VALUE)
}

/// Columns keyed by display name; later duplicates win
fn columns_by_name(columns: &[ChartColumn]) -> HashMap<&str, &ChartColumn> {
    columns.iter().map(|c| (c.name.as_str(), c)).collect()
}

/// Point for a facet header or axis tick. A "measure names" entry selects
/// the named measure with a null value.
fn data_path_point(columns: &HashMap<&str, &ChartColumn>, payload: &ShowContextMenuPayload) -> Point {
    let mut point = Point::default();

    for entry in payload.data_path.iter().flatten() {
        let Some(col) = columns.get(entry.field.as_str()) else {
            continue;
        };
        if is_totals_value(&entry.value) {
            continue;
        }

        if is_measure_names(col) {
            if let Some(measure) = entry.value.as_str().and_then(|name| columns.get(name)) {
                point.push_tuple(&measure.id, Value::String(TS_NULL_VALUE.to_string()));
            }
        } else {
            point.push_tuple(&col.id, convert_datum_to_ts_value(col, &entry.value));
        }
    }

    point
}

/// Point for one clicked mark: facet values first, then attributes, then
/// measures. With a "measure names" field only the named measure is kept.
fn data_point(
    columns: &HashMap<&str, &ChartColumn>,
    target: &FieldValues,
    facets: [Option<&FieldValues>; 2],
) -> Point {
    let mut point = Point::default();

    for (field, value) in facets.into_iter().flatten().flatten() {
        if let Some(col) = columns.get(field.as_str())
            && !is_mn_mv_column(col)
            && !is_totals_value(value)
        {
            point.push_tuple(&col.id, convert_datum_to_ts_value(col, value));
        }
    }

    let measure_name = target.iter().find_map(|(field, value)| {
        let col = columns.get(field.as_str())?;
        if is_measure_names(col) { value.as_str() } else { None }
    });

    let mut attributes = Vec::new();
    let mut measures = Vec::new();

    for (field, value) in target {
        if is_totals_value(value) || value.is_null() {
            continue;
        }
        let Some(col) = columns.get(field.as_str()) else {
            continue;
        };
        if is_mn_mv_column(col) {
            continue;
        }

        let ts_value = convert_datum_to_ts_value(col, value);
        match col.column_type {
            ColumnType::Attribute => attributes.push((*col, ts_value)),
            ColumnType::Measure => {
                if measure_name.is_none_or(|name| name == col.name) {
                    measures.push((*col, ts_value));
                }
            }
            _ => {}
        }
    }

    for (col, value) in attributes.into_iter().chain(measures) {
        point.push_tuple(&col.id, value);
    }

    point
}

/// Host points for a context-menu payload, without empty points
pub fn build_context_menu_points(columns: &[ChartColumn], payload: &ShowContextMenuPayload) -> Vec<Point> {
    let columns = columns_by_name(columns);

    let points = match payload.target {
        ContextMenuTarget::RowsFacet
        | ContextMenuTarget::ColumnsFacet
        | ContextMenuTarget::XAxisTick
        | ContextMenuTarget::YAxisTick => vec![data_path_point(&columns, payload)],
        ContextMenuTarget::DataPoint => payload
            .target_point
            .iter()
            .flatten()
            .map(|target| {
                data_point(
                    &columns,
                    target,
                    [payload.col_facets.as_ref(), payload.row_facets.as_ref()],
                )
            })
            .collect(),
    };

    points.into_iter().filter(|p| !p.tuple.is_empty()).collect()
}

/// Close any open host menu, then open one for the clicked points
pub async fn handle_context_menu_event(
    ctx: &dyn ChartContext,
    payload: &ShowContextMenuPayload,
    logger: Logger,
) -> Result<()> {
    ctx.emit_event(ChartToTsEvent::CloseContextMenu).await?;

    let selected_points = build_context_menu_points(&ctx.chart_model().columns, payload);
    logger.debug(format!("Context menu points: {}", selected_points.len()));

    let Some(clicked_point) = selected_points.first().cloned() else {
        return Ok(());
    };

    ctx.emit_event(ChartToTsEvent::OpenContextMenu {
        event: PointerEvent {
            client_x: payload.event.client_x,
            client_y: payload.event.client_y,
        },
        clicked_point,
        selected_points,
    })
    .await
}
