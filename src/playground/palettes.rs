//! Host color palettes

use crate::constants::COLORS_PER_PALETTE;
use crate::error::{PlaygroundError, Result};
use crate::types::AppConfig;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One host palette: the middle color is primary, the rest secondary
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorPalette {
    pub primary_color: String,
    pub secondary_colors: Vec<String>,
}

/// Flat color list from the first host palette entry. The host sends either
/// a list of colors or a list whose first element is that list.
fn flat_colors(app_config: &AppConfig) -> Option<Vec<String>> {
    let colors = app_config
        .style_config
        .as_ref()?
        .chart_color_palettes
        .as_ref()?
        .first()?
        .colors
        .as_array()?;

    let list = match colors.first() {
        Some(Value::Array(nested)) => nested,
        Some(Value::String(_)) => colors,
        _ => return None,
    };

    Some(
        list.iter()
            .map(|c| c.as_str().unwrap_or_default().to_string())
            .collect(),
    )
}

/// Split the host colors into palettes of five.
///
/// Missing palette count or colors yield no palettes; a color count other
/// than `numColorPalettes * 5` is an error.
pub fn extract_color_palettes(app_config: &AppConfig) -> Result<Vec<ColorPalette>> {
    let num_palettes = app_config
        .style_config
        .as_ref()
        .and_then(|s| s.num_color_palettes)
        .filter(|n| *n > 0);

    let (Some(num_palettes), Some(colors)) = (num_palettes, flat_colors(app_config)) else {
        return Ok(Vec::new());
    };

    let expected = num_palettes * COLORS_PER_PALETTE;
    if colors.len() != expected {
        return Err(PlaygroundError::ColorPalettes {
            expected,
            actual: colors.len(),
        });
    }

    let mid = COLORS_PER_PALETTE / 2;
    let palettes = colors
        .chunks(COLORS_PER_PALETTE)
        .map(|chunk| ColorPalette {
            primary_color: chunk[mid].clone(),
            secondary_colors: chunk
                .iter()
                .enumerate()
                .filter(|(i, _)| *i != mid)
                .map(|(_, c)| c.clone())
                .collect(),
        })
        .collect();

    Ok(palettes)
}
