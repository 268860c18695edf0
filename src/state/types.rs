//! Persisted client state.
//!
//! This is serialized as JSON into the host's visual properties, so field
//! names are part of the storage format. Bump `version` on incompatible
//! changes.

use crate::constants::{CLIENT_STATE_SCHEMA_LATEST_VERSION, DEFAULT_SPLIT_SIZES};
use crate::playground::PlaygroundVersion;
use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeState {
    pub js_code_base64: String,
    pub css_code_base64: String,
    pub html_code_base64: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaygroundState {
    pub version: PlaygroundVersion,
    pub code: CodeState,
    pub split_sizes: [f64; 2],
}

impl Default for PlaygroundState {
    fn default() -> Self {
        Self {
            version: PlaygroundVersion::LATEST,
            code: CodeState::default(),
            split_sizes: DEFAULT_SPLIT_SIZES,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClientState {
    pub version: u32,
    pub playground: PlaygroundState,
}

impl Default for ClientState {
    fn default() -> Self {
        Self {
            version: CLIENT_STATE_SCHEMA_LATEST_VERSION,
            playground: PlaygroundState::default(),
        }
    }
}

// ============================================================================
// Partial State
// ============================================================================

/// Drop a field that does not decode instead of failing the whole state
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialCodeState {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub js_code_base64: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub css_code_base64: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub html_code_base64: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialPlaygroundState {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<PlaygroundVersion>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub code: Option<PartialCodeState>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub split_sizes: Option<[f64; 2]>,
}

/// Any subset of `ClientState`, used both for decoding stored state and
/// for updates
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PartialClientState {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<u32>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub playground: Option<PartialPlaygroundState>,
}

impl PartialClientState {
    /// Update touching only the split sizes
    pub fn split_sizes(sizes: [f64; 2]) -> Self {
        Self {
            playground: Some(PartialPlaygroundState {
                split_sizes: Some(sizes),
                ..Default::default()
            }),
            ..Default::default()
        }
    }

    /// Update replacing all three stored code buffers
    pub fn code(js_base64: String, css_base64: String, html_base64: String) -> Self {
        Self {
            playground: Some(PartialPlaygroundState {
                code: Some(PartialCodeState {
                    js_code_base64: Some(js_base64),
                    css_code_base64: Some(css_base64),
                    html_code_base64: Some(html_base64),
                }),
                ..Default::default()
            }),
            ..Default::default()
        }
    }
}

// ============================================================================
// Merge
// ============================================================================

impl CodeState {
    pub fn merge(&mut self, partial: PartialCodeState) {
        if let Some(js) = partial.js_code_base64 {
            self.js_code_base64 = js;
        }
        if let Some(css) = partial.css_code_base64 {
            self.css_code_base64 = css;
        }
        if let Some(html) = partial.html_code_base64 {
            self.html_code_base64 = html;
        }
    }
}

impl PlaygroundState {
    pub fn merge(&mut self, partial: PartialPlaygroundState) {
        if let Some(version) = partial.version {
            self.version = version;
        }
        if let Some(code) = partial.code {
            self.code.merge(code);
        }
        // Arrays are replaced wholesale
        if let Some(sizes) = partial.split_sizes {
            self.split_sizes = sizes;
        }
    }
}

impl ClientState {
    /// Deep-merge a partial state over this one
    pub fn merge(&mut self, partial: PartialClientState) {
        if let Some(version) = partial.version {
            self.version = version;
        }
        if let Some(playground) = partial.playground {
            self.playground.merge(playground);
        }
    }

    pub fn merged(mut self, partial: PartialClientState) -> Self {
        self.merge(partial);
        self
    }
}
