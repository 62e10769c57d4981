//! Tolerant extraction of TOON from free-form model output.
//!
//! A model completion usually wraps its machine-readable payload in prose.
//! The extractor isolates the payload: it looks for the first fenced block
//! tagged with the format identifier, falls back to parsing the whole text,
//! and when neither yields anything returns an empty document rather than
//! failing. Callers apply their own fallback (a different decode, a retry
//! prompt) on an empty result.
//!
//! ## Usage
//!
//! ```rust
//! use toon_codec::extract_and_parse;
//!
//! let reply = "Here is the result:\n```toon\nkey: value\n```\nThanks.";
//! let doc = extract_and_parse(reply);
//! assert_eq!(doc.root().get("key").and_then(|v| v.as_str()), Some("value"));
//! ```

use crate::error::Diagnostic;
use crate::{parse, Document, Options};

/// Extracts and parses TOON from free-form text with the default options
/// (```` ```toon ```` fence). Total: never panics, never errors.
///
/// 1. The first block opened by a line that is exactly the tagged fence and
///    closed by a bare ```` ``` ```` line is parsed and returned. An
///    unclosed fence runs to end of input.
/// 2. With no tagged block, the whole input is parsed directly.
/// 3. If that yields no top-level entries, an empty document is returned
///    carrying an [`Diagnostic::ExtractionMiss`].
///
/// # Examples
///
/// ```rust
/// use toon_codec::extract_and_parse;
///
/// // Bare TOON with no fence still decodes.
/// let doc = extract_and_parse("key: value");
/// assert!(!doc.is_empty());
///
/// // Pure prose yields an empty document, not an error.
/// let doc = extract_and_parse("Sorry, I could not comply.");
/// assert!(doc.is_empty());
/// ```
#[must_use]
pub fn extract_and_parse(text: &str) -> Document {
    extract_and_parse_with_options(text, &Options::default())
}

/// Extracts and parses TOON using an explicit fence tag.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{extract_and_parse_with_options, Options};
///
/// let options = Options::new().with_fence_tag("data");
/// let doc = extract_and_parse_with_options("```data\nkey: 1\n```", &options);
/// assert_eq!(doc.root().get("key").and_then(|v| v.as_i64()), Some(1));
/// ```
#[must_use]
pub fn extract_and_parse_with_options(text: &str, options: &Options) -> Document {
    if let Some(body) = fenced_body(text, &options.fence_tag) {
        return parse(&body);
    }
    let doc = parse(text);
    if doc.is_empty() {
        let mut miss = Document::default();
        miss.record(Diagnostic::ExtractionMiss);
        return miss;
    }
    doc
}

/// Returns the body of the first fenced block tagged with `tag`, or `None`
/// if no opening fence exists. Trailing whitespace on fence lines is
/// tolerated; an unclosed block extends to end of input.
fn fenced_body(text: &str, tag: &str) -> Option<String> {
    let open = format!("```{}", tag);
    let mut body: Vec<&str> = Vec::new();
    let mut in_block = false;
    for line in text.lines() {
        let fence = line.trim_end();
        if !in_block {
            if fence == open {
                in_block = true;
            }
        } else if fence == "```" {
            return Some(body.join("\n"));
        } else {
            body.push(line);
        }
    }
    in_block.then(|| body.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fenced_block_wins_over_surrounding_prose() {
        let text = "Here is the result:\n```toon\nkey: value\n```\nThanks.";
        let doc = extract_and_parse(text);
        assert_eq!(doc.root().len(), 1);
        assert_eq!(doc.root().get("key").and_then(|v| v.as_str()), Some("value"));
    }

    #[test]
    fn test_first_tagged_block_is_used() {
        let text = "```toon\na: 1\n```\n```toon\nb: 2\n```";
        let doc = extract_and_parse(text);
        assert_eq!(doc.root().get("a").and_then(|v| v.as_i64()), Some(1));
        assert!(doc.root().get("b").is_none());
    }

    #[test]
    fn test_untagged_fence_is_ignored() {
        let text = "```\nnot: this\n```\nkey: direct";
        let doc = extract_and_parse(text);
        // No toon-tagged block, so the whole text is parsed instead.
        assert_eq!(doc.root().get("key").and_then(|v| v.as_str()), Some("direct"));
    }

    #[test]
    fn test_unclosed_fence_runs_to_end_of_input() {
        let doc = extract_and_parse("```toon\nkey: value\nmore: 1");
        assert_eq!(doc.root().len(), 2);
    }

    #[test]
    fn test_whole_text_fallback() {
        let doc = extract_and_parse("key: value\nnumber: 7");
        assert_eq!(doc.root().get("number").and_then(|v| v.as_i64()), Some(7));
    }

    #[test]
    fn test_empty_input_is_a_miss() {
        let doc = extract_and_parse("");
        assert!(doc.is_empty());
        assert_eq!(doc.diagnostics(), &[Diagnostic::ExtractionMiss]);
    }

    #[test]
    fn test_pure_prose_is_a_miss() {
        let doc = extract_and_parse("Sorry!\nNo structured data here\n");
        assert!(doc.is_empty());
        assert_eq!(doc.diagnostics(), &[Diagnostic::ExtractionMiss]);
    }

    #[test]
    fn test_fenced_table_block() {
        let text = "Result below.\n```toon\nitems:\n  name, value\n  A, 1\n```";
        let doc = extract_and_parse(text);
        let table = doc.root().get("items").and_then(|v| v.as_table()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_custom_fence_tag() {
        let options = Options::new().with_fence_tag("data");
        let doc = extract_and_parse_with_options("```data\nkey: 1\n```", &options);
        assert_eq!(doc.root().get("key").and_then(|v| v.as_i64()), Some(1));
    }
}
