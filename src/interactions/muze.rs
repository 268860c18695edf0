//! Iframe side: Muze interaction payloads to channel payloads

use crate::comm::{ClientPosition, ContextMenuTarget, DataPathEntry, FieldValues, ShowContextMenuPayload};
use crate::data::Schema;
use serde_json::{Map, Value};

/// Normalize a raw Muze value. Missing and invalid-marker values (Muze
/// represents those as objects) become `null`, numbers stay numbers and
/// everything else becomes text.
pub fn muze_raw_value_to_datum(value: &Value) -> Value {
    match value {
        Value::Null | Value::Object(_) => Value::Null,
        Value::Number(_) => value.clone(),
        other => Value::String(crate::data::to_text(other)),
    }
}

fn muze_target(kind: &str) -> Option<ContextMenuTarget> {
    match kind {
        "rowFacetHeader" => Some(ContextMenuTarget::RowsFacet),
        "columnFacetHeader" => Some(ContextMenuTarget::ColumnsFacet),
        "xAxes" => Some(ContextMenuTarget::XAxisTick),
        "yAxes" => Some(ContextMenuTarget::YAxisTick),
        "geom" => Some(ContextMenuTarget::DataPoint),
        _ => None,
    }
}

fn client_position(payload: &Value) -> ClientPosition {
    let coord = |key: &str| {
        payload
            .get("event")
            .and_then(|e| e.get(key))
            .and_then(Value::as_f64)
            .unwrap_or_default()
    };
    ClientPosition {
        client_x: coord("clientX"),
        client_y: coord("clientY"),
    }
}

fn resolve_facets(facets: Option<&Value>) -> FieldValues {
    facets
        .and_then(Value::as_object)
        .map(|map| {
            map.iter()
                .map(|(field, value)| (field.clone(), muze_raw_value_to_datum(value)))
                .collect()
        })
        .unwrap_or_default()
}

/// Target points of a geom interaction. Muze sends a table whose first row
/// holds field names; only fields present in the schema are kept.
fn resolve_target_points(target_point: Option<&Value>, schema: &Schema) -> Option<Vec<FieldValues>> {
    let rows = target_point?.as_array()?;
    if rows.len() < 2 {
        return None;
    }
    let fields = rows[0].as_array()?;

    let points = rows[1..]
        .iter()
        .map(|row| {
            let mut point = Map::new();
            for (idx, field) in fields.iter().enumerate() {
                let Some(name) = field.as_str() else {
                    continue;
                };
                if schema.iter().any(|unit| unit.name == name) {
                    let raw = row.get(idx).unwrap_or(&Value::Null);
                    point.insert(name.to_string(), muze_raw_value_to_datum(raw));
                }
            }
            point
        })
        .collect();

    Some(points)
}

/// Translate a Muze context-menu interaction; unsupported targets yield
/// `None`
pub fn muze_context_menu_payload(muze_payload: &Value, schema: &Schema) -> Option<ShowContextMenuPayload> {
    let target = muze_target(muze_payload.get("type")?.as_str()?)?;
    let event = client_position(muze_payload);

    if target == ContextMenuTarget::DataPoint {
        return Some(ShowContextMenuPayload {
            target,
            event,
            data_path: None,
            target_point: resolve_target_points(muze_payload.get("targetPoint"), schema),
            col_facets: Some(resolve_facets(muze_payload.get("colFacets"))),
            row_facets: Some(resolve_facets(muze_payload.get("rowFacets"))),
        });
    }

    let data_path = muze_payload
        .get("dataPath")
        .and_then(Value::as_array)
        .map(|entries| {
            entries
                .iter()
                .map(|entry| DataPathEntry {
                    field: entry
                        .get("field")
                        .map(crate::data::to_text)
                        .unwrap_or_default(),
                    value: muze_raw_value_to_datum(entry.get("value").unwrap_or(&Value::Null)),
                })
                .collect()
        })
        .unwrap_or_default();

    Some(ShowContextMenuPayload {
        target,
        event,
        data_path: Some(data_path),
        target_point: None,
        col_facets: None,
        row_facets: None,
    })
}
