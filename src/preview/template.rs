//! Preview document generation

use crate::playground::PlaygroundData;

/// Script run before any user code: neutralizes dialogs, file pickers,
/// window control and fullscreen, and empties web storage
const DISABLED_APIS_SCRIPT: &str = r#"<script>
                    // Disable dialogs
                    window.alert = function() {};
                    window.confirm = function() { return true; };
                    window.prompt = function() { return null; };
                    window.print = function() {};

                    // Disable file system access
                    window.showOpenFilePicker = function() {};
                    window.showSaveFilePicker = function() {};
                    window.showDirectoryPicker = function() {};
                    window.showModal = function() {};

                    // Disable window manipulation
                    window.open = function() { return null; };
                    window.close = function() {};
                    window.moveTo = function() {};
                    window.resizeTo = function() {};

                    // Disable fullscreen and clear storage
                    window.requestFullscreen = function() {};
                    document.requestFullscreen = function() {};
                    window.localStorage.clear();
                    window.sessionStorage.clear();
                </script>"#;

/// JSON that can sit inside a `<script>` element
fn script_safe_json(value: &impl serde::Serialize) -> serde_json::Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

/// Full HTML document for the preview iframe: fonts and SDK styles, the
/// user's CSS and HTML, the API lockdown script, then a module script that
/// boots the SDK and runs the user's JS in its own scope
pub fn generate_preview_code(
    pg_data: &PlaygroundData,
    js_code: &str,
    css_code: &str,
    html_code: &str,
) -> serde_json::Result<String> {
    let sdk = &pg_data.dyoc_sdk;
    let init_data = script_safe_json(&sdk.init_data)?;
    let sdk_key = script_safe_json(&sdk.sdk_key)?;
    let sdk_url = script_safe_json(&sdk.js_cdn_url)?;

    Ok(format!(
        r#"
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="UTF-8">
                <meta name="viewport" content="width=device-width, initial-scale=1.0">

                <link href="{fonts_url}" rel="stylesheet">
                <style>
                    #muze-layout-container-1 * {{
                        font-family: {font_family} !important;
                        font-size: 11px !important;
                    }}
                </style>

                <link rel="stylesheet" href="{sdk_css_url}">
                <style>{css_code}</style>
            </head>
            <body>
                {html_code}
                {disabled_apis}
                <script type="module">
                    import ___DYOCSDK___ from {sdk_url};
                    window[{sdk_key}] = ___DYOCSDK___({init_data});

                    (() => {{
                        {js_code}
                    }})();
                </script>
            </body>
        </html>
    "#,
        fonts_url = pg_data.font.fonts_cdn_url,
        font_family = pg_data.font.font_family,
        sdk_css_url = sdk.css_cdn_url,
        css_code = css_code,
        html_code = html_code,
        disabled_apis = DISABLED_APIS_SCRIPT,
        sdk_url = sdk_url,
        sdk_key = sdk_key,
        init_data = init_data,
        js_code = js_code,
    ))
}
