//! Adapts generated chart code to the preview iframe globals

use once_cell::sync::Lazy;
use regex::Regex;

const VIZ_BINDING: &str = "const { muze, getDataFromSearchQuery } = window.viz;";

struct Rewrite {
    pattern: Lazy<Regex>,
    replacement: &'static str,
}

macro_rules! rewrite {
    ($pattern:expr, $replacement:expr) => {
        Rewrite {
            pattern: Lazy::new(|| Regex::new($pattern).expect("valid rewrite regex")),
            replacement: $replacement,
        }
    };
}

static REWRITES: [Rewrite; 8] = [
    rewrite!(
        r#"const\s+(?:env|muze)\s*=\s*require\s*\(\s*['"]@viz/muze['"]\s*\)"#,
        "const env = window.viz.muze"
    ),
    rewrite!(r"const\s+Muze\s*=\s*env\.Muze", "const Muze = window.viz.muze"),
    rewrite!(
        r"const\s+\{\s*muze\s*,\s*getDataFromSearchQuery\s*\}\s*=\s*viz\s*;",
        VIZ_BINDING
    ),
    rewrite!(
        r"const\s+\{\s*muze\s*,\s*getDataFromSearchQuery\s*\}\s*=\s*thoughtspot\s*;",
        VIZ_BINDING
    ),
    rewrite!(
        r"thoughtspot\.getDataFromSearchQuery",
        "window.viz.getDataFromSearchQuery"
    ),
    rewrite!(r"thoughtspot\.muze", "window.viz.muze"),
    rewrite!(
        r#"import\s+\{\s*.*?\s*\}\s+from\s+['"]@thoughtspot/ts-chart-sdk['"]\s*;"#,
        "// ThoughtSpot SDK imports handled internally"
    ),
    rewrite!(r"getChartContext\s*\(", "// getChartContext handled internally: "),
];

/// Line endings after which no semicolon is added
const STATEMENT_ENDINGS: [char; 4] = [';', '{', '}', ','];
const UNTERMINATED_PREFIXES: [&str; 5] = ["//", "/*", "*", "import ", "export "];

/// Rewrite generated code so it runs against `window.viz`
pub fn transform_code(code: &str) -> String {
    let mut transformed = code.to_string();
    for rewrite in REWRITES.iter() {
        transformed = rewrite
            .pattern
            .replace_all(&transformed, rewrite.replacement)
            .into_owned();
    }

    if !transformed.contains("window.viz")
        && !transformed.contains("const { muze, getDataFromSearchQuery }")
    {
        transformed = format!("{}\n{}", VIZ_BINDING, transformed);
    }

    transformed
        .split('\n')
        .map(|line| {
            let trimmed = line.trim();
            let needs_semicolon = !trimmed.is_empty()
                && !trimmed.ends_with(STATEMENT_ENDINGS)
                && !UNTERMINATED_PREFIXES.iter().any(|p| trimmed.starts_with(p));
            if needs_semicolon {
                format!("{};", line)
            } else {
                line.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}
