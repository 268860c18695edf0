//! Starter code shown when no code has been stored yet

use crate::data::{attribute_columns, measure_columns};
use crate::types::ChartModel;

fn quoted_names(names: &[&str]) -> String {
    names
        .iter()
        .map(|n| format!("\"{}\"", n))
        .collect::<Vec<_>>()
        .join(",")
}

/// Bar chart of the first measure against the first attribute
pub fn default_js_code_sample(model: &ChartModel) -> String {
    let rows: Vec<&str> = measure_columns(&model.columns)
        .into_iter()
        .take(1)
        .map(|c| c.name.as_str())
        .collect();
    let columns: Vec<&str> = attribute_columns(&model.columns)
        .into_iter()
        .take(1)
        .map(|c| c.name.as_str())
        .collect();

    format!(
        r##"const {{ muze, getDataFromSearchQuery }} = viz;
  
const data = getDataFromSearchQuery();

muze.canvas()
.rows([{}])
.columns([{}])
.data(data)
.mount("#chart")
"##,
        quoted_names(&rows),
        quoted_names(&columns)
    )
}

pub fn default_css_code_sample() -> String {
    r#"html, body {
    margin: 0;
    padding: 0;
}

#chart {
    width: 100vw;
    height: 100vh;
}"#
    .to_string()
}

pub fn default_html_code_sample() -> String {
    r#"<div id="chart"></div>"#.to_string()
}
