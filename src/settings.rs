//! Playground settings.
//!
//! Settings are stored as JSON. Every field has a default, so partial or
//! older files load cleanly and missing files fall back to defaults.

use crate::constants::{
    CANVAS_RESIZE_THROTTLE_MS, DEFAULT_FONT_FAMILY, DEFAULT_QUERY_SIZE, DOCS_URL,
    EDITOR_CHANGE_DEBOUNCE_MS, SPLIT_MIN_SIZE_PX,
};
use anyhow::Context as _;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Tunables for the playground host side and the preview document
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PlaygroundSettings {
    /// Trailing debounce applied to editor changes before persisting code
    pub editor_debounce_ms: u64,
    /// Throttle applied to canvas resize notifications
    pub resize_throttle_ms: u64,
    /// Row limit requested from the host per query
    pub query_size: u32,
    /// Minimum pane size for the split layout
    pub split_min_size: u32,
    /// Base URL that relative SDK resource paths are resolved against
    pub sdk_base_url: String,
    /// SDK module path (relative to `sdk_base_url`, absolute, or a data URL)
    pub sdk_js_path: String,
    /// SDK stylesheet path
    pub sdk_css_path: String,
    /// Stylesheet declaring the chart font faces
    pub fonts_cdn_url: String,
    /// Font stack used by charts
    pub font_family: String,
    /// Documentation link shown under the editors
    pub docs_url: String,
}

impl Default for PlaygroundSettings {
    fn default() -> Self {
        Self {
            editor_debounce_ms: EDITOR_CHANGE_DEBOUNCE_MS,
            resize_throttle_ms: CANVAS_RESIZE_THROTTLE_MS,
            query_size: DEFAULT_QUERY_SIZE,
            split_min_size: SPLIT_MIN_SIZE_PX,
            sdk_base_url: "/".to_string(),
            sdk_js_path: "dyocsdk/dist/dyocsdk.mjs".to_string(),
            sdk_css_path: "dyocsdk/dist/dyocsdk.css".to_string(),
            fonts_cdn_url: "fonts/optimo-plain.css".to_string(),
            font_family: DEFAULT_FONT_FAMILY.to_string(),
            docs_url: DOCS_URL.to_string(),
        }
    }
}

impl PlaygroundSettings {
    pub fn editor_debounce(&self) -> Duration {
        Duration::from_millis(self.editor_debounce_ms)
    }

    pub fn resize_throttle(&self) -> Duration {
        Duration::from_millis(self.resize_throttle_ms)
    }

    /// Load settings from a JSON file
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read settings from {}", path.display()))?;
        let settings = serde_json::from_str(&content)
            .with_context(|| format!("Invalid settings JSON in {}", path.display()))?;
        Ok(settings)
    }

    /// Load settings, falling back to defaults when the file is missing or invalid
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Using default settings: {:#}", e);
                Self::default()
            }
        }
    }

    /// Write settings as pretty JSON, creating parent directories
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write settings to {}", path.display()))?;
        Ok(())
    }
}

/// Default location of the settings file in the user's config directory
pub fn default_settings_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("cyoc-playground").join("settings.json"))
}
