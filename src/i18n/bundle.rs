//! Bundle store
//!
//! Turns a decoded translation document into a flat table from dotted key
//! to an ordered list of candidate strings. Arrays become several
//! candidates, nested objects are joined into the key with `.`, and any
//! other value is stringified. Nothing in here fails once the document
//! has been decoded.

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Number, Value};

use crate::utils::errors::DecodeError;

/// Separator used when joining nested object keys
pub const KEY_DELIMITER: &str = ".";

/// Flattened translation table for one source document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bundle {
    entries: HashMap<String, Vec<String>>,
}

/// Serialized format of a bundle source
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Json,
    Toml,
}

impl SourceFormat {
    /// Pick the format from the file extension, JSON unless it is `.toml`
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => SourceFormat::Toml,
            _ => SourceFormat::Json,
        }
    }
}

impl Bundle {
    /// Decode raw source bytes and flatten the resulting document
    pub fn from_slice(bytes: &[u8], format: SourceFormat) -> Result<Self, DecodeError> {
        let document: Value = match format {
            SourceFormat::Json => serde_json::from_slice(bytes)?,
            SourceFormat::Toml => toml::from_str(std::str::from_utf8(bytes)?)?,
        };

        match document {
            Value::Object(map) => Ok(Self::flatten(&map)),
            other => Err(DecodeError::NotAnObject {
                found: kind_of(&other),
            }),
        }
    }

    /// Flatten a nested document into dotted keys
    pub fn flatten(document: &Map<String, Value>) -> Self {
        let mut entries = HashMap::new();
        flatten_into(None, document, &mut entries);
        Self { entries }
    }

    /// Candidates for `key`; an empty candidate list counts as absent
    pub fn get(&self, key: &str) -> Option<&[String]> {
        self.entries
            .get(key)
            .map(Vec::as_slice)
            .filter(|candidates| !candidates.is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for Bundle {
    fn from_iter<I: IntoIterator<Item = (String, Vec<String>)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

fn flatten_into(prefix: Option<&str>, document: &Map<String, Value>, entries: &mut HashMap<String, Vec<String>>) {
    for (key, content) in document {
        let full_key = match prefix {
            Some(prefix) => format!("{}{}{}", prefix, KEY_DELIMITER, key),
            None => key.clone(),
        };

        match content {
            Value::Object(nested) => flatten_into(Some(&full_key), nested, entries),
            Value::Array(values) => {
                entries.insert(full_key, values.iter().map(stringify).collect());
            }
            other => {
                entries.insert(full_key, vec![stringify(other)]);
            }
        }
    }
}

/// Render a decoded value the way the host formats untyped values:
/// strings verbatim, `[a b]` for arrays and `map[k:v]` for objects.
/// Decoded numbers are doubles, so `1000000` prints as `1e+06`.
pub(crate) fn stringify(value: &Value) -> String {
    write_value(value, NumberStyle::Float)
}

/// Like [`stringify`], but integers supplied by the caller keep their
/// integer form.
pub(crate) fn stringify_var(value: &Value) -> String {
    write_value(value, NumberStyle::Typed)
}

#[derive(Clone, Copy)]
enum NumberStyle {
    Float,
    Typed,
}

fn write_value(value: &Value, style: NumberStyle) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => "<nil>".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => write_number(n, style),
        Value::Array(values) => {
            let items: Vec<String> = values.iter().map(|v| write_value(v, style)).collect();
            format!("[{}]", items.join(" "))
        }
        Value::Object(map) => {
            let mut pairs: Vec<(&String, &Value)> = map.iter().collect();
            pairs.sort_by(|a, b| a.0.cmp(b.0));
            let items: Vec<String> = pairs
                .into_iter()
                .map(|(k, v)| format!("{}:{}", k, write_value(v, style)))
                .collect();
            format!("map[{}]", items.join(" "))
        }
    }
}

fn write_number(n: &Number, style: NumberStyle) -> String {
    if let NumberStyle::Typed = style {
        if let Some(i) = n.as_i64() {
            return i.to_string();
        }
        if let Some(u) = n.as_u64() {
            return u.to_string();
        }
    }
    match n.as_f64() {
        Some(f) => format_float(f),
        None => n.to_string(),
    }
}

/// Shortest round-trip digits, switching to exponent form (`1e+06`,
/// `2.5e-07`) when the decimal exponent is below -4 or at least 6.
fn format_float(f: f64) -> String {
    if !f.is_finite() {
        return if f.is_nan() {
            "NaN".to_string()
        } else if f > 0.0 {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }

    let scientific = format!("{:e}", f);
    let Some((mantissa, exponent)) = scientific.split_once('e') else {
        return f.to_string();
    };
    let exponent: i32 = match exponent.parse() {
        Ok(exponent) => exponent,
        Err(_) => return f.to_string(),
    };

    if f == 0.0 || (-4..6).contains(&exponent) {
        f.to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.unsigned_abs())
    }
}

pub(crate) fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
