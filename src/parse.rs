//! Indentation-driven structural parser.
//!
//! This module turns TOON text into a [`Document`] in a single line-by-line
//! pass. The parser is deliberately tolerant: the text it sees comes from a
//! model completion and is never trusted to be well-formed, so every content
//! irregularity is absorbed into a recovery policy and recorded as a
//! [`Diagnostic`] instead of failing the parse.
//!
//! ## How nesting works
//!
//! The parser keeps an explicit stack of frames, one per open scope. Each
//! frame owns the container being filled, remembers the key it was opened
//! under and the indentation of its opening line. A line whose indentation
//! is not strictly greater than the top frame's closes that frame — the
//! finished container moves into the parent under the remembered key — and
//! one dedenting line may close several frames at once.
//!
//! A `key:` line with no value opens a scope of unknown kind. The frame
//! starts out unresolved; the first line beneath it decides what it is. A
//! `key: value` line resolves it to a mapping, a bare comma-separated line
//! resolves it to a record list with that line as the header schema, and
//! nothing beneath it at all leaves an empty mapping. Because the frame
//! carries its own key, the swap from placeholder to record list is a plain
//! assignment; no identity search through the parent is ever needed.
//!
//! ## Usage
//!
//! ```rust
//! use toon_codec::parse;
//!
//! let doc = parse("items:\n  name, value\n  Item 1, 100");
//! let table = doc.root().get("items").and_then(|v| v.as_table()).unwrap();
//! assert_eq!(table.header(), ["name", "value"]);
//! assert_eq!(table.len(), 1);
//! ```

use crate::error::Diagnostic;
use crate::{coerce, Document, Error, Map, Result, Table, Value};

/// What an open frame holds.
///
/// A frame opened by an empty-value key starts `Unresolved`; the first line
/// inside the scope resolves it to `Object` or `Table`.
enum Scope {
    Unresolved,
    Object(Map),
    Table(Table),
}

/// Bookkeeping for one open nesting scope.
struct Frame {
    /// Key this scope was opened under in its parent container.
    key: String,
    /// Indentation of the opening `key:` line.
    indent: isize,
    scope: Scope,
}

struct Parser {
    root: Map,
    stack: Vec<Frame>,
    diagnostics: Vec<Diagnostic>,
}

impl Parser {
    fn new() -> Self {
        Parser {
            root: Map::new(),
            stack: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    /// Indentation of the innermost open scope; the root sits at -1 so any
    /// real line nests inside it.
    fn top_indent(&self) -> isize {
        self.stack.last().map_or(-1, |frame| frame.indent)
    }

    /// Closes the innermost scope, moving its finished container into the
    /// parent under the frame's key. A scope that never resolved decodes as
    /// an empty mapping.
    fn close_top(&mut self) {
        if let Some(frame) = self.stack.pop() {
            let value = match frame.scope {
                Scope::Unresolved => Value::Object(Map::new()),
                Scope::Object(map) => Value::Object(map),
                Scope::Table(table) => Value::Table(table),
            };
            self.insert(frame.key, value);
        }
    }

    /// Inserts an entry into the current container, resolving an unresolved
    /// scope to a mapping on first use.
    fn insert(&mut self, key: String, value: Value) {
        match self.stack.last_mut() {
            Some(frame) => match &mut frame.scope {
                Scope::Object(map) => {
                    map.insert(key, value);
                }
                Scope::Unresolved => {
                    let mut map = Map::new();
                    map.insert(key, value);
                    frame.scope = Scope::Object(map);
                }
                // Rows consume every line inside a resolved record list
                // before insertion is reachable.
                Scope::Table(_) => {}
            },
            None => {
                self.root.insert(key, value);
            }
        }
    }

    fn line(&mut self, line_no: usize, raw: &str) {
        let content = raw.trim();
        if content.is_empty() {
            return;
        }
        let indent = (raw.len() - raw.trim_start().len()) as isize;

        // One dedenting line may collapse several nesting levels.
        while indent <= self.top_indent() {
            self.close_top();
        }

        // A resolved record list claims every deeper line as a data row,
        // separator or not.
        if let Some(Frame {
            scope: Scope::Table(table),
            ..
        }) = self.stack.last_mut()
        {
            let fields: Vec<&str> = content.split(',').map(str::trim).collect();
            if fields.len() != table.header().len() {
                self.diagnostics.push(Diagnostic::RecordWidthMismatch {
                    line: line_no,
                    expected: table.header().len(),
                    found: fields.len(),
                });
            }
            table.push_row(fields.into_iter().map(coerce).collect());
            return;
        }

        if let Some((key, value)) = content.split_once(':') {
            let key = key.trim().to_string();
            let value = value.trim();
            if value.is_empty() {
                // Scope of unknown kind; the next line decides.
                self.stack.push(Frame {
                    key,
                    indent,
                    scope: Scope::Unresolved,
                });
            } else {
                self.insert(key, coerce(value));
            }
            return;
        }

        // No separator: only legal as the header row of a freshly opened,
        // still-unresolved scope.
        match self.stack.last_mut() {
            Some(frame) if matches!(frame.scope, Scope::Unresolved) => {
                let header = content.split(',').map(|h| h.trim().to_string()).collect();
                frame.scope = Scope::Table(Table::new(header));
            }
            _ => {
                self.diagnostics.push(Diagnostic::MalformedLine {
                    line: line_no,
                    content: content.to_string(),
                });
            }
        }
    }

    fn finish(mut self) -> Document {
        // End of input closes whatever is still open.
        while !self.stack.is_empty() {
            self.close_top();
        }
        let mut doc = Document::new(self.root);
        for diagnostic in self.diagnostics {
            doc.record(diagnostic);
        }
        doc
    }
}

/// Parses TOON text into a [`Document`].
///
/// Total over any `&str`: malformed content is skipped and recorded as a
/// diagnostic, never returned as an error. Blank lines are ignored entirely
/// and do not affect indentation bookkeeping.
///
/// # Examples
///
/// ```rust
/// use toon_codec::parse;
///
/// let doc = parse("key: value\nnumber: 123\nflag: true");
/// assert_eq!(doc.root().get("number").and_then(|v| v.as_i64()), Some(123));
/// assert_eq!(doc.root().get("flag").and_then(|v| v.as_bool()), Some(true));
/// ```
#[must_use]
pub fn parse(text: &str) -> Document {
    let mut parser = Parser::new();
    for (idx, raw) in text.lines().enumerate() {
        parser.line(idx + 1, raw);
    }
    parser.finish()
}

/// Parses TOON text, failing on the first recorded diagnostic.
///
/// For callers that layer strict validation on top of the tolerant core.
///
/// # Errors
///
/// Returns [`Error::Malformed`] wrapping the first diagnostic if the input
/// was not clean TOON.
///
/// # Examples
///
/// ```rust
/// use toon_codec::parse_strict;
///
/// assert!(parse_strict("key: value").is_ok());
/// assert!(parse_strict("stray, header, line").is_err());
/// ```
pub fn parse_strict(text: &str) -> Result<Document> {
    let doc = parse(text);
    match doc.diagnostics().first() {
        Some(diagnostic) => Err(Error::Malformed(diagnostic.clone())),
        None => Ok(doc),
    }
}
