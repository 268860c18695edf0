//! Small shared helpers

use crate::error::Result;
use base64::Engine as _;
use base64::alphabet;
use base64::engine::general_purpose::STANDARD;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};

/// Standard alphabet, padding optional, trailing bits ignored
const FORGIVING: GeneralPurpose = GeneralPurpose::new(
    &alphabet::STANDARD,
    GeneralPurposeConfig::new()
        .with_decode_padding_mode(DecodePaddingMode::Indifferent)
        .with_decode_allow_trailing_bits(true),
);

/// Base64 of the UTF-8 bytes of `value`
pub fn encode_base64(value: &str) -> String {
    STANDARD.encode(value.as_bytes())
}

/// Decode stored base64. Whitespace is skipped, padding is optional and
/// the URL-safe `-` and `_` are read as `+` and `/`.
pub fn decode_base64(value: &str) -> Result<String> {
    let normalized: String = value
        .chars()
        .filter(|c| !c.is_ascii_whitespace() && *c != '=')
        .map(|c| match c {
            '-' => '+',
            '_' => '/',
            other => other,
        })
        .collect();
    let bytes = FORGIVING.decode(normalized)?;
    Ok(String::from_utf8(bytes)?)
}

/// Resolve an SDK resource path into something an import or `<link>` can
/// load.
///
/// - `data:<mime>...` is used as is
/// - `<mime>...` (a data URL without its scheme) gets `data:` prepended
/// - absolute URLs and root-relative paths are used as is
/// - anything else is joined onto `base_url`
pub fn resolve_import_resource_url(resource_path: &str, mime_type: &str, base_url: &str) -> String {
    if resource_path.starts_with(&format!("data:{}", mime_type)) {
        return resource_path.to_string();
    }
    if resource_path.starts_with(mime_type) {
        return format!("data:{}", resource_path);
    }
    if resource_path.contains("://") || resource_path.starts_with('/') {
        return resource_path.to_string();
    }

    let base = base_url.trim_end_matches('/');
    let path = resource_path.trim_start_matches("./");
    format!("{}/{}", base, path)
}

/// Escape text for embedding in HTML attribute values
pub fn escape_html_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}
