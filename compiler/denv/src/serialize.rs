//! Text serialization of a parsed document.
//!
//! Output is one `key=value` line per flattened store entry, followed by
//! one `export key=value` line per export. Comments, quote style and the
//! original layout are not preserved. Re-parsing the output reproduces the
//! same flattened values for everything the text syntax can express:
//! negative numbers and keys that are not identifiers (both possible only
//! from decoded JSON blocks) do not survive.

use denv_ir::{Map, Value};
use denv_parse::NestedStore;

/// Serialize `store` and `exports` as newline-joined lines.
pub fn to_text(store: &NestedStore, exports: &Map) -> String {
    let mut out = String::new();
    for (key, value) in &store.flatten() {
        line(&mut out, "", key, value);
    }
    for (key, value) in exports {
        line(&mut out, "export ", key, value);
    }
    out
}

fn line(out: &mut String, prefix: &str, key: &str, value: &Value) {
    if !out.is_empty() {
        out.push('\n');
    }
    out.push_str(prefix);
    out.push_str(key);
    out.push('=');
    write_value(out, value);
}

/// Append the literal for `value`.
///
/// Strings are double-quoted and escaped, floats keep a fractional part,
/// booleans are bare words, and maps are written as JSON blocks.
pub fn write_value(out: &mut String, value: &Value) {
    match value {
        Value::String(s) => write_quoted(out, s),
        Value::Integer(_) | Value::Float(_) | Value::Boolean(_) | Value::Opaque(_) => {
            out.push_str(&value.to_string());
        }
        Value::List(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_value(out, item);
            }
            out.push(']');
        }
        Value::Map(_) => out.push_str(&value.to_json().to_string()),
    }
}

fn write_quoted(out: &mut String, s: &str) {
    out.push('"');
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\t' => out.push_str("\\t"),
            '\r' => out.push_str("\\r"),
            '$' if chars.peek() == Some(&'{') => out.push_str("\\$"),
            other => out.push(other),
        }
    }
    out.push('"');
}
