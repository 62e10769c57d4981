//! Configuration options for the TOON codec.
//!
//! [`Options`] controls the two knobs the format exposes: the indent step
//! used by the canonical serializer and the fence tag the extractor looks
//! for. The defaults (2 spaces, `toon`) match what the pipeline's prompt
//! templates ask models to produce.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{serialize_with_options, Document, Map, Options, Value};
//!
//! let mut root = Map::new();
//! root.insert("key".to_string(), Value::from("value"));
//! let doc = Document::new(root);
//!
//! let options = Options::new().with_indent(4);
//! let text = serialize_with_options(&doc, 0, &options);
//! assert_eq!(text, "key: value");
//! ```

/// Configuration for serialization and extraction.
///
/// # Examples
///
/// ```rust
/// use toon_codec::Options;
///
/// // Defaults: 2-space indent, ```toon fence tag
/// let options = Options::new();
/// assert_eq!(options.indent, 2);
/// assert_eq!(options.fence_tag, "toon");
///
/// // Custom configuration
/// let options = Options::new().with_indent(4).with_fence_tag("data");
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Options {
    /// Number of spaces per nesting level.
    pub indent: usize,
    /// Identifier after the opening fence of an embedded block.
    pub fence_tag: String,
}

impl Default for Options {
    fn default() -> Self {
        Options {
            indent: 2,
            fence_tag: "toon".to_string(),
        }
    }
}

impl Options {
    /// Creates default options (2-space indent, `toon` fence tag).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the indentation step (number of spaces per level).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Options;
    ///
    /// let options = Options::new().with_indent(4);
    /// assert_eq!(options.indent, 4);
    /// ```
    #[must_use]
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Sets the fence tag the extractor searches for.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Options;
    ///
    /// let options = Options::new().with_fence_tag("data");
    /// assert_eq!(options.fence_tag, "data");
    /// ```
    #[must_use]
    pub fn with_fence_tag(mut self, tag: impl Into<String>) -> Self {
        self.fence_tag = tag.into();
        self
    }
}
