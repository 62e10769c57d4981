//! # toon_codec
//!
//! A tolerant codec for the TOON (Token-Oriented Object Notation) format:
//! the compact, human-readable structured-data format that text-generating
//! models in the surrounding pipeline use to emit nested records and tabular
//! lists without full general-purpose markup.
//!
//! ## What is TOON?
//!
//! TOON expresses a document as indented `key: value` lines. A key with no
//! value opens a nested scope; if the first line inside that scope is a bare
//! comma-separated list it becomes the header schema of a record list and
//! each following line is one comma-separated record:
//!
//! ```text
//! meta:
//!   version: 1.0
//! items:
//!   name, value, active
//!   Item 1, 100, true
//!   Item 2, 200, false
//! ```
//!
//! ## Key Features
//!
//! - **Tolerant by design**: model output is never trusted to be
//!   well-formed; malformed lines are skipped and recorded as diagnostics,
//!   record width mismatches are padded or truncated, and extraction from
//!   prose never fails — it degrades to an empty document
//! - **Typed scalars**: tokens coerce to bool, integer, float or string
//!   with a fixed precedence
//! - **Faithful round trips**: the canonical serializer mirrors the parser,
//!   so `parse(serialize(doc))` reconstructs an equivalent document
//! - **Order preserving**: mappings keep insertion order via `IndexMap`
//! - **No unsafe code, no panics in the public API**
//!
//! ## Quick Start
//!
//! ```rust
//! use toon_codec::{extract_and_parse, serialize};
//!
//! let reply = "Here is the data:\n```toon\nstatus: ok\ncount: 3\n```";
//! let doc = extract_and_parse(reply);
//!
//! assert_eq!(doc.root().get("status").and_then(|v| v.as_str()), Some("ok"));
//! assert_eq!(doc.root().get("count").and_then(|v| v.as_i64()), Some(3));
//!
//! // Round-trip back to text for re-injection into a prompt.
//! assert_eq!(serialize(&doc, 0), "status: ok\ncount: 3");
//! ```
//!
//! ## Working with Record Lists
//!
//! ```rust
//! use toon_codec::parse;
//!
//! let doc = parse("items:\n  name, value\n  Item 1, 100\n  Item 2, 200");
//! let items = doc.root().get("items").and_then(|v| v.as_table()).unwrap();
//!
//! for record in items.records() {
//!     let name = record.get("name").and_then(|v| v.as_str());
//!     assert!(name.is_some());
//! }
//! ```
//!
//! ## Error Model
//!
//! Parsing and extraction are total functions: they always return a
//! [`Document`], with irregularities recorded as [`Diagnostic`]s on it.
//! [`parse_strict`] promotes the first diagnostic to an [`Error`] for
//! callers that want validation instead of tolerance.
//!
//! ## Concurrency
//!
//! All operations are pure, synchronous transformations over in-memory
//! strings and trees. No state is shared between calls, so concurrent use
//! from threads or async tasks needs no locking. Time and memory are linear
//! in input size; the parser's frame stack is bounded by the input's
//! maximum indentation depth.

pub mod coerce;
pub mod error;
pub mod extract;
pub mod macros;
pub mod map;
pub mod options;
pub mod parse;
pub mod ser;
pub mod value;

pub use coerce::coerce;
pub use error::{Diagnostic, Error, Result};
pub use extract::{extract_and_parse, extract_and_parse_with_options};
pub use map::Map;
pub use options::Options;
pub use parse::{parse, parse_strict};
pub use ser::{serialize, serialize_value, serialize_with_options};
pub use value::{Document, Number, Table, Value};

use std::io;

/// Serializes a document to a writer in canonical TOON form.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{parse, to_writer};
///
/// let doc = parse("key: value");
/// let mut buffer = Vec::new();
/// to_writer(&mut buffer, &doc).unwrap();
/// assert_eq!(buffer, b"key: value");
/// ```
///
/// # Errors
///
/// Returns an error if writing to the writer fails.
pub fn to_writer<W>(mut writer: W, doc: &Document) -> Result<()>
where
    W: io::Write,
{
    writer
        .write_all(serialize(doc, 0).as_bytes())
        .map_err(|e| Error::io(&e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serialize_round_trip() {
        let text = "key: value\nnumber: 123\nflag: true";
        let doc = parse(text);
        assert_eq!(serialize(&doc, 0), text);
        assert_eq!(parse(&serialize(&doc, 0)), doc);
    }

    #[test]
    fn test_to_writer() {
        let doc = parse("a: 1\nb: 2");
        let mut buffer = Vec::new();
        to_writer(&mut buffer, &doc).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), "a: 1\nb: 2");
    }

    #[test]
    fn test_value_serde_interop_with_json() {
        let doc = parse("items:\n  name, value\n  Item 1, 100");
        let json = serde_json::to_value(&doc).unwrap();
        assert_eq!(json["items"][0]["name"], "Item 1");
        assert_eq!(json["items"][0]["value"], 100);
    }

    #[test]
    fn test_value_deserialize_from_json() {
        let json = r#"{"meta": {"version": 1.5}, "rows": [{"id": 1}, {"id": 2}]}"#;
        let value: Value = serde_json::from_str(json).unwrap();
        let root = value.as_object().unwrap();
        assert_eq!(
            root.get("meta")
                .and_then(|v| v.as_object())
                .and_then(|m| m.get("version"))
                .and_then(|v| v.as_f64()),
            Some(1.5)
        );
        let rows = root.get("rows").and_then(|v| v.as_table()).unwrap();
        assert_eq!(rows.len(), 2);
    }
}
