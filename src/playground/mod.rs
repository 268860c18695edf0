//! Versioned playground data
//!
//! Everything the preview iframe needs to boot the SDK: resource URLs, the
//! init data (dataset, schema, system info) and font details. Stored client
//! state names the version it was written against so older charts keep
//! getting the data shape they were built for.

mod code_samples;
mod palettes;

pub use code_samples::*;
pub use palettes::*;

use crate::constants::SDK_GLOBAL_KEY;
use crate::data::{DataAndSchema, RowArrayData, Schema, build_data_and_schema};
use crate::error::Result;
use crate::host::ChartContext;
use crate::logger::Logger;
use crate::settings::PlaygroundSettings;
use crate::utils::resolve_import_resource_url;
use serde::{Deserialize, Serialize};

/// Version of the playground data contract
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PlaygroundVersion {
    V1,
    /// A version this build does not know; the raw string is kept so it is
    /// written back unchanged
    Unknown(String),
}

impl PlaygroundVersion {
    pub const LATEST: PlaygroundVersion = PlaygroundVersion::V1;

    pub fn as_str(&self) -> &str {
        match self {
            PlaygroundVersion::V1 => "v1",
            PlaygroundVersion::Unknown(raw) => raw,
        }
    }
}

impl From<String> for PlaygroundVersion {
    fn from(s: String) -> Self {
        match s.as_str() {
            "v1" => PlaygroundVersion::V1,
            _ => PlaygroundVersion::Unknown(s),
        }
    }
}

impl From<PlaygroundVersion> for String {
    fn from(v: PlaygroundVersion) -> Self {
        v.as_str().to_string()
    }
}

impl std::fmt::Display for PlaygroundVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Host environment flags forwarded into the iframe
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TsSystemInfo {
    pub is_debug_mode: bool,
    pub is_liveboard_context: bool,
    pub is_mobile: bool,
    pub is_print_mode: bool,
    /// Primary color of each host palette
    #[serde(rename = "colorPallettes")]
    pub color_palettes: Vec<String>,
}

/// Data the SDK is constructed with inside the iframe
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SdkInitData {
    pub data: RowArrayData,
    pub schema: Schema,
    pub ts_system_info: TsSystemInfo,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DyocSdkInfo {
    pub js_cdn_url: String,
    pub css_cdn_url: String,
    pub init_data: SdkInitData,
    /// Global the SDK instance is bound to
    pub sdk_key: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FontInfo {
    pub font_family: String,
    pub fonts_cdn_url: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlaygroundData {
    pub version: PlaygroundVersion,
    #[serde(rename = "dyocSDK")]
    pub dyoc_sdk: DyocSdkInfo,
    pub font: FontInfo,
}

type PlaygroundDataGenerator = fn(&dyn ChartContext, &PlaygroundSettings) -> Result<PlaygroundData>;

fn generator_for(version: &PlaygroundVersion) -> Option<PlaygroundDataGenerator> {
    match version {
        PlaygroundVersion::V1 => Some(generate_v1 as PlaygroundDataGenerator),
        PlaygroundVersion::Unknown(_) => None,
    }
}

/// Playground data for the stored version, or for the latest version when
/// the stored one is unknown
pub fn generate_playground_data(
    version: &PlaygroundVersion,
    ctx: &dyn ChartContext,
    settings: &PlaygroundSettings,
) -> Result<PlaygroundData> {
    let generator = match generator_for(version) {
        Some(generator) => generator,
        None => {
            Logger::with_debug_mode(ctx.app_config().options().is_debug_mode).warn(format!(
                "Playground version {} from client state is unknown, using {}",
                version,
                PlaygroundVersion::LATEST
            ));
            generator_for(&PlaygroundVersion::LATEST).ok_or_else(|| {
                crate::error::PlaygroundError::PlaygroundData(format!(
                    "no generator for {}",
                    PlaygroundVersion::LATEST
                ))
            })?
        }
    };

    generator(ctx, settings)
}

fn generate_v1(ctx: &dyn ChartContext, settings: &PlaygroundSettings) -> Result<PlaygroundData> {
    let app_config = ctx.app_config();
    let options = app_config.options();

    let js_cdn_url =
        resolve_import_resource_url(&settings.sdk_js_path, "text/javascript", &settings.sdk_base_url);
    let css_cdn_url =
        resolve_import_resource_url(&settings.sdk_css_path, "text/css", &settings.sdk_base_url);
    Logger::with_debug_mode(options.is_debug_mode)
        .debug(format!("SDK import URLs: js: {}, css: {}", js_cdn_url, css_cdn_url));

    let ts_system_info = TsSystemInfo {
        is_debug_mode: options.is_debug_mode,
        is_liveboard_context: options.is_liveboard_context,
        is_mobile: options.is_mobile,
        is_print_mode: options.is_print_mode,
        color_palettes: extract_color_palettes(&app_config)?
            .into_iter()
            .map(|p| p.primary_color)
            .collect(),
    };

    let DataAndSchema { schema, data } = build_data_and_schema(&ctx.chart_model());

    Ok(PlaygroundData {
        version: PlaygroundVersion::V1,
        dyoc_sdk: DyocSdkInfo {
            js_cdn_url,
            css_cdn_url,
            init_data: SdkInitData {
                data,
                schema,
                ts_system_info,
            },
            sdk_key: SDK_GLOBAL_KEY.to_string(),
        },
        font: FontInfo {
            font_family: settings.font_family.clone(),
            fonts_cdn_url: resolve_import_resource_url(
                &settings.fonts_cdn_url,
                "text/css",
                &settings.sdk_base_url,
            ),
        },
    })
}
