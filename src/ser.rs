//! Canonical serialization.
//!
//! This module re-emits a [`Document`] as TOON text, mirroring the parser's
//! grammar exactly so that `parse(serialize(doc))` reconstructs an
//! equivalent document. Output is deterministic: mapping entries render in
//! insertion order, record lists render header first then one comma-joined
//! row per record.
//!
//! The round trip is exact for any document the grammar can express. Two
//! constructions fall outside it: an empty record list renders as `k: []`
//! and loses its header schema, and scalar strings containing newlines or
//! (inside rows) commas have no quoted form in this format.
//!
//! ## Usage
//!
//! ```rust
//! use toon_codec::{parse, serialize};
//!
//! let doc = parse("meta:\n  version: 1.0\ncount: 3");
//! let text = serialize(&doc, 0);
//! assert_eq!(text, "meta:\n  version: 1.0\ncount: 3");
//! ```

use crate::{Document, Map, Options, Value};

/// Serializes a document to canonical TOON text with the default options
/// (2-space indent step).
///
/// `base_indent` is the nesting level of the root mapping's entries; 0 for
/// a standalone document, higher when splicing the output under an existing
/// scope in a prompt template.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{parse, serialize};
///
/// let doc = parse("key: value");
/// assert_eq!(serialize(&doc, 0), "key: value");
/// assert_eq!(serialize(&doc, 1), "  key: value");
/// ```
#[must_use]
pub fn serialize(doc: &Document, base_indent: usize) -> String {
    serialize_with_options(doc, base_indent, &Options::default())
}

/// Serializes a document with an explicit indent step.
#[must_use]
pub fn serialize_with_options(doc: &Document, base_indent: usize, options: &Options) -> String {
    let mut lines = Vec::new();
    write_map(&mut lines, doc.root(), base_indent, options);
    lines.join("\n")
}

/// Serializes a single keyed value at the given nesting level.
///
/// Useful when a pipeline stage wants to re-inject one subtree rather than
/// a whole document.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{serialize_value, Options, Value};
///
/// let text = serialize_value("count", &Value::from(3), 0, &Options::default());
/// assert_eq!(text, "count: 3");
/// ```
#[must_use]
pub fn serialize_value(key: &str, value: &Value, indent_level: usize, options: &Options) -> String {
    let mut lines = Vec::new();
    write_entry(&mut lines, key, value, indent_level, options);
    lines.join("\n")
}

fn write_map(lines: &mut Vec<String>, map: &Map, level: usize, options: &Options) {
    for (key, value) in map {
        write_entry(lines, key, value, level, options);
    }
}

fn write_entry(lines: &mut Vec<String>, key: &str, value: &Value, level: usize, options: &Options) {
    let pad = " ".repeat(level * options.indent);
    match value {
        Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            lines.push(format!("{}{}: {}", pad, key, value));
        }
        Value::Object(obj) => {
            lines.push(format!("{}{}:", pad, key));
            write_map(lines, obj, level + 1, options);
        }
        Value::Table(table) if table.is_empty() => {
            lines.push(format!("{}{}: []", pad, key));
        }
        Value::Table(table) => {
            lines.push(format!("{}{}:", pad, key));
            let inner = " ".repeat((level + 1) * options.indent);
            lines.push(format!("{}{}", inner, table.header().join(", ")));
            for row in table.rows() {
                let cells: Vec<String> = row.iter().map(ToString::to_string).collect();
                lines.push(format!("{}{}", inner, cells.join(", ")));
            }
        }
    }
}
