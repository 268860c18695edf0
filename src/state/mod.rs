//! Client state stored in the host's visual properties
//!
//! The state lives as a JSON string under a single visual-prop key. Reads
//! never fail: anything that does not parse falls back to the default.

mod types;

pub use types::*;

use crate::constants::CLIENT_STATE_VIS_PROP_KEY;
use crate::data::to_text;
use crate::error::Result;
use crate::host::{ChartContext, ChartToTsEvent, get_visual_prop};
use crate::logger::Logger;
use serde_json::{Map, Value};

/// Current client state, merged over the defaults
pub fn get_client_state(ctx: &dyn ChartContext) -> ClientState {
    let mut state = ClientState::default();
    if let Some(stored) = extract_client_state(ctx) {
        state.merge(stored);
    }
    state
}

/// Logger following the host's current debug flag
fn state_logger(ctx: &dyn ChartContext) -> Logger {
    Logger::with_debug_mode(ctx.app_config().options().is_debug_mode)
}

fn extract_client_state(ctx: &dyn ChartContext) -> Option<PartialClientState> {
    let raw = get_visual_prop(&ctx.chart_model(), CLIENT_STATE_VIS_PROP_KEY, Value::Null);
    let json = match raw {
        Value::Null => return None,
        Value::String(s) => s,
        other => to_text(&other),
    };

    let parsed: Value = match serde_json::from_str(&json) {
        Ok(value) => value,
        Err(e) => {
            state_logger(ctx).error(format!("Failed to parse client state: {}", e));
            return None;
        }
    };

    if !parsed.is_object() {
        return None;
    }

    match serde_json::from_value(parsed) {
        Ok(partial) => Some(partial),
        Err(e) => {
            state_logger(ctx).error(format!("Failed to decode client state: {}", e));
            None
        }
    }
}

/// Merge `changes` over the current state and hand the result to the host
pub async fn update_client_state(ctx: &dyn ChartContext, changes: PartialClientState) -> Result<()> {
    let new_state = get_client_state(ctx).merged(changes);
    store_client_state(ctx, &new_state).await
}

async fn store_client_state(ctx: &dyn ChartContext, state: &ClientState) -> Result<()> {
    let state_json = serde_json::to_string(state)?;

    let mut visual_props = match ctx.chart_model().visual_props {
        Some(Value::Object(map)) => map,
        _ => Map::new(),
    };
    visual_props.insert(CLIENT_STATE_VIS_PROP_KEY.to_string(), Value::String(state_json));

    ctx.emit_event(ChartToTsEvent::UpdateVisualProps {
        visual_props: Value::Object(visual_props),
    })
    .await
}
