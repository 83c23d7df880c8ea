//! Variable interpolation
//!
//! Candidates may contain actions delimited by `{{` and `}}`:
//!
//! | Action | Meaning |
//! |--------|---------|
//! | `{{.Name}}` | value of variable `Name` |
//! | `{{.User.Name}}` | field `Name` of the object held in `User` |
//! | `{{.}}` | the whole variable map |
//! | `{{/* note */}}` | comment, renders nothing |
//!
//! A `-` right after `{{` or right before `}}`, followed or preceded by
//! whitespace, trims the whitespace of the neighbouring text.
//!
//! Lookups are strict: a variable that is not present is an error rather
//! than an empty string.

use std::sync::OnceLock;

use regex::Regex;
use serde_json::{Map, Value};
use thiserror::Error;

use super::bundle::{kind_of, stringify_var};

pub const LEFT_DELIM: &str = "{{";
pub const RIGHT_DELIM: &str = "}}";

const NO_VALUE: &str = "<no value>";

/// Interpolation failures
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    #[error("template parse error: {0}")]
    Parse(String),

    #[error("map has no entry for key \"{name}\"")]
    MissingKey { name: String },

    #[error("can't evaluate field {field} in type {found}")]
    NotAnObject { field: String, found: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Node {
    Text(String),
    Dot,
    Field(Vec<String>),
}

/// A parsed candidate, ready to be executed against variables
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    nodes: Vec<Node>,
}

fn action_pattern() -> &'static Regex {
    static ACTION_RE: OnceLock<Regex> = OnceLock::new();
    ACTION_RE.get_or_init(|| {
        // A comment body is scanned up to `*/`, so it may contain `}}`
        Regex::new(r"(?s)\{\{(-[ \t\r\n])?(/\*(?:[^*]|\*+[^*/])*\*+/|.*?)([ \t\r\n]-)?\}\}")
            .expect("action pattern is valid")
    })
}

fn identifier_pattern() -> &'static Regex {
    static IDENT_RE: OnceLock<Regex> = OnceLock::new();
    IDENT_RE.get_or_init(|| Regex::new(r"^[\p{L}\p{N}_]+$").expect("identifier pattern is valid"))
}

/// Whether `raw` contains anything to interpolate
pub fn has_actions(raw: &str) -> bool {
    raw.contains(LEFT_DELIM)
}

/// Parse and execute `source` in one go
pub fn render(source: &str, vars: &Map<String, Value>) -> Result<String, RenderError> {
    Template::parse(source)?.execute(vars)
}

impl Template {
    pub fn parse(source: &str) -> Result<Self, RenderError> {
        let mut nodes = Vec::new();
        let mut cursor = 0;
        let mut trim_next = false;

        for captures in action_pattern().captures_iter(source) {
            let Some(whole) = captures.get(0) else {
                continue;
            };
            let mut text = &source[cursor..whole.start()];
            if trim_next {
                text = text.trim_start();
            }
            if captures.get(1).is_some() {
                text = text.trim_end();
            }
            push_text(&mut nodes, text)?;

            let body = captures.get(2).map_or("", |m| m.as_str());
            if let Some(node) = parse_action(body)? {
                nodes.push(node);
            }

            trim_next = captures.get(3).is_some();
            cursor = whole.end();
        }

        let mut tail = &source[cursor..];
        if trim_next {
            tail = tail.trim_start();
        }
        push_text(&mut nodes, tail)?;

        Ok(Self { nodes })
    }

    pub fn execute(&self, vars: &Map<String, Value>) -> Result<String, RenderError> {
        let mut out = String::new();
        for node in &self.nodes {
            match node {
                Node::Text(text) => out.push_str(text),
                Node::Dot => out.push_str(&stringify_var(&Value::Object(vars.clone()))),
                Node::Field(path) => out.push_str(&print(resolve(vars, path)?)),
            }
        }
        Ok(out)
    }
}

fn push_text(nodes: &mut Vec<Node>, text: &str) -> Result<(), RenderError> {
    if text.contains(LEFT_DELIM) {
        return Err(RenderError::Parse("unclosed action".to_string()));
    }
    if !text.is_empty() {
        nodes.push(Node::Text(text.to_string()));
    }
    Ok(())
}

fn parse_action(body: &str) -> Result<Option<Node>, RenderError> {
    let body = body.trim();

    if body.starts_with("/*") {
        return if body.ends_with("*/") && body.len() >= 4 {
            Ok(None)
        } else {
            Err(RenderError::Parse("unclosed comment".to_string()))
        };
    }

    if body.is_empty() {
        return Err(RenderError::Parse("missing value for command".to_string()));
    }

    if body == "." {
        return Ok(Some(Node::Dot));
    }

    let path = body
        .strip_prefix('.')
        .ok_or_else(|| RenderError::Parse(format!("unsupported action \"{}\"", body)))?;

    let fields: Vec<String> = path.split('.').map(str::to_string).collect();
    if let Some(bad) = fields.iter().find(|f| !identifier_pattern().is_match(f)) {
        return Err(RenderError::Parse(format!("bad field name \"{}\" in \"{}\"", bad, body)));
    }

    Ok(Some(Node::Field(fields)))
}

fn resolve<'a>(vars: &'a Map<String, Value>, path: &[String]) -> Result<&'a Value, RenderError> {
    let (first, rest) = path
        .split_first()
        .ok_or_else(|| RenderError::Parse("empty field chain".to_string()))?;

    let mut current = vars
        .get(first)
        .ok_or_else(|| RenderError::MissingKey { name: first.clone() })?;

    for field in rest {
        current = match current {
            Value::Object(map) => map
                .get(field)
                .ok_or_else(|| RenderError::MissingKey { name: field.clone() })?,
            other => {
                return Err(RenderError::NotAnObject {
                    field: field.clone(),
                    found: kind_of(other),
                })
            }
        };
    }

    Ok(current)
}

fn print(value: &Value) -> String {
    match value {
        Value::Null => NO_VALUE.to_string(),
        other => stringify_var(other),
    }
}
