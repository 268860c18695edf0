//! Wire types for the preview iframe channel

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Raw `{ type, payload }` message as posted between windows
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MessageData {
    #[serde(rename = "type")]
    pub kind: String,
    pub payload: Value,
}

impl MessageData {
    /// Structural check: an object with a string `type` and a `payload` key
    pub fn from_value(value: &Value) -> Option<Self> {
        let obj = value.as_object()?;
        let kind = obj.get("type")?.as_str()?;
        let payload = obj.get("payload")?;
        Some(Self {
            kind: kind.to_string(),
            payload: payload.clone(),
        })
    }
}

/// What was right-clicked in the preview
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContextMenuTarget {
    RowsFacet,
    ColumnsFacet,
    XAxisTick,
    YAxisTick,
    DataPoint,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientPosition {
    pub client_x: f64,
    pub client_y: f64,
}

/// One `(field, value)` step of a facet or axis path
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DataPathEntry {
    pub field: String,
    pub value: Value,
}

/// Field name to value, as Muze reports it
pub type FieldValues = Map<String, Value>;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowContextMenuPayload {
    #[serde(rename = "type")]
    pub target: ContextMenuTarget,
    pub event: ClientPosition,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_path: Option<Vec<DataPathEntry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_point: Option<Vec<FieldValues>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub col_facets: Option<FieldValues>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub row_facets: Option<FieldValues>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ChannelEventKind {
    ShowContextMenu,
    RenderCompleted,
    HideAllContextMenus,
}

impl ChannelEventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            ChannelEventKind::ShowContextMenu => "ShowContextMenu",
            ChannelEventKind::RenderCompleted => "RenderCompleted",
            ChannelEventKind::HideAllContextMenus => "HideAllContextMenus",
        }
    }
}

/// Decoded channel event
#[derive(Clone, Debug, PartialEq)]
pub enum ChannelEvent {
    ShowContextMenu(ShowContextMenuPayload),
    RenderCompleted,
    HideAllContextMenus,
}

impl ChannelEvent {
    pub fn kind(&self) -> ChannelEventKind {
        match self {
            ChannelEvent::ShowContextMenu(_) => ChannelEventKind::ShowContextMenu,
            ChannelEvent::RenderCompleted => ChannelEventKind::RenderCompleted,
            ChannelEvent::HideAllContextMenus => ChannelEventKind::HideAllContextMenus,
        }
    }

    /// Decode a structurally valid message; unknown types and payloads that
    /// do not fit the type yield `None`
    pub fn decode(message: &MessageData) -> Option<Self> {
        match message.kind.as_str() {
            "ShowContextMenu" => serde_json::from_value(message.payload.clone())
                .ok()
                .map(ChannelEvent::ShowContextMenu),
            "RenderCompleted" => Some(ChannelEvent::RenderCompleted),
            "HideAllContextMenus" => Some(ChannelEvent::HideAllContextMenus),
            _ => None,
        }
    }

    pub fn to_message(&self) -> MessageData {
        let payload = match self {
            ChannelEvent::ShowContextMenu(payload) => {
                serde_json::to_value(payload).unwrap_or(Value::Null)
            }
            ChannelEvent::RenderCompleted | ChannelEvent::HideAllContextMenus => Value::Null,
        };
        MessageData {
            kind: self.kind().as_str().to_string(),
            payload,
        }
    }
}
