//! Cell values and the loose scalar coercions the host data relies on.

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A single cell of the row-array dataset
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Datum {
    #[default]
    Null,
    Number(f64),
    Text(String),
}

impl Datum {
    /// Numeric datum, with NaN normalized to `Null`
    pub fn number(n: f64) -> Self {
        if n.is_nan() { Datum::Null } else { Datum::Number(n) }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Datum::Null)
    }

    /// JSON form; whole numbers are written as integers
    pub fn to_json(&self) -> Value {
        match self {
            Datum::Null => Value::Null,
            Datum::Number(n) => number_to_json(*n),
            Datum::Text(s) => Value::String(s.clone()),
        }
    }
}

impl Serialize for Datum {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

impl From<&str> for Datum {
    fn from(s: &str) -> Self {
        Datum::Text(s.to_string())
    }
}

impl From<f64> for Datum {
    fn from(n: f64) -> Self {
        Datum::number(n)
    }
}

fn number_to_json(n: f64) -> Value {
    if n.fract() == 0.0 && n.abs() < i64::MAX as f64 {
        Value::Number((n as i64).into())
    } else {
        serde_json::Number::from_f64(n)
            .map(Value::Number)
            .unwrap_or(Value::Null)
    }
}

/// Numeric coercion of a host scalar: trimmed strings are parsed (empty is
/// zero), booleans become 0/1, anything unparseable is NaN
pub fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_numeric_str(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [single] => to_number(single),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

fn parse_numeric_str(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    // Rust accepts "inf"/"nan" spellings the host never produces as numbers
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && !matches!(c, 'e' | 'E')) {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Text form of a host scalar; numbers print without a trailing `.0`
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => match n.as_f64() {
            Some(f) => format_number(f),
            None => n.to_string(),
        },
        Value::String(s) => s.clone(),
        Value::Array(items) => items.iter().map(to_text).collect::<Vec<_>>().join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Shortest decimal form of a number. Magnitudes from 1e21 up and below
/// 1e-6 use exponent notation with a signed exponent (`1e+21`, `1e-7`).
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        let s = if n > 0.0 { "Infinity" } else { "-Infinity" };
        s.to_string()
    } else if n != 0.0 && (n.abs() >= 1e21 || n.abs() < 1e-6) {
        let formatted = format!("{:e}", n);
        match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        }
    } else if n == 0.0 {
        "0".to_string()
    } else {
        format!("{}", n)
    }
}
