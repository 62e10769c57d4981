//! Dynamic value representation for TOON data.
//!
//! This module provides the [`Value`] enum which represents any node a parse
//! can produce, plus [`Document`], the root mapping returned by one parse
//! call together with the diagnostics recorded along the way.
//!
//! ## Core Types
//!
//! - [`Value`]: any TOON node (bool, number, string, mapping, record list)
//! - [`Number`]: an integer or float scalar
//! - [`Table`]: a record list with a fixed header schema
//! - [`Document`]: the root mapping of one parse, plus diagnostics
//!
//! ## Usage Patterns
//!
//! ### Creating Values
//!
//! ```rust
//! use toon_codec::Value;
//!
//! let boolean = Value::from(true);
//! let number = Value::from(42);
//! let text = Value::from("hello");
//!
//! // Using the toon! macro
//! use toon_codec::toon;
//! let obj = toon!({
//!     "name": "Alice",
//!     "age": 30
//! });
//! ```
//!
//! ### Extracting Values
//!
//! ```rust
//! use toon_codec::Value;
//!
//! let value = Value::from(42);
//! assert!(value.is_number());
//! assert_eq!(value.as_i64(), Some(42));
//! ```

use crate::error::Diagnostic;
use crate::Map;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A dynamically-typed representation of any TOON node.
///
/// Scalars (`Bool`, `Number`, `String`) are produced by the coercer;
/// `Object` and `Table` are produced by the structural parser. There is no
/// null node: a model that wants to express absence emits an empty string.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Number, Value};
///
/// let num = Value::Number(Number::Integer(42));
/// let text = Value::String("hello".to_string());
///
/// assert!(num.is_number());
/// assert!(text.is_string());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Bool(bool),
    Number(Number),
    String(String),
    Object(Map),
    Table(Table),
}

/// A numeric scalar, either an integer or a float.
///
/// The coercer keeps the two apart by lexical shape: a token with a decimal
/// point becomes a `Float`, one without becomes an `Integer`. The `Display`
/// impl is the canonical wire form, so a `Float` always renders with a
/// decimal point and survives re-parsing as a float.
///
/// # Examples
///
/// ```rust
/// use toon_codec::Number;
///
/// assert_eq!(Number::Integer(42).to_string(), "42");
/// assert_eq!(Number::Float(1.0).to_string(), "1.0");
/// assert_eq!(Number::Integer(42).as_i64(), Some(42));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl Number {
    /// Returns `true` if this is an integer value.
    #[inline]
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }

    /// Returns `true` if this is a floating-point value.
    #[inline]
    #[must_use]
    pub const fn is_float(&self) -> bool {
        matches!(self, Number::Float(_))
    }

    /// Converts this number to an `i64` if possible.
    ///
    /// Returns `Some` for integers and for floats with no fractional part
    /// that fit in i64 range.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::Number;
    ///
    /// assert_eq!(Number::Integer(42).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.0).as_i64(), Some(42));
    /// assert_eq!(Number::Float(42.5).as_i64(), None);
    /// ```
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Number::Integer(i) => Some(*i),
            Number::Float(f) => {
                if f.fract() == 0.0 && *f >= i64::MIN as f64 && *f <= i64::MAX as f64 {
                    Some(*f as i64)
                } else {
                    None
                }
            }
        }
    }

    /// Converts this number to an `f64`. Always succeeds.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(x) => {
                // Whole-number floats render as "1" by default; the wire
                // form needs the decimal point so the token coerces back
                // to a float.
                let mut s = format!("{}", x);
                if x.is_finite() && !s.contains('.') {
                    s.push_str(".0");
                }
                f.write_str(&s)
            }
        }
    }
}

/// A record list: an ordered sequence of rows sharing one header schema.
///
/// The header is captured once when the list opens and fixes the shape of
/// every record. Rows are stored padded or truncated to the header width,
/// with missing trailing fields held as empty strings, so a stored row
/// always has exactly `header().len()` cells.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{Table, Value};
///
/// let mut table = Table::new(vec!["name".to_string(), "value".to_string()]);
/// table.push_row(vec![Value::from("Item 1"), Value::from(100)]);
/// table.push_row(vec![Value::from("Item 2")]); // padded with ""
///
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.rows()[1][1], Value::from(""));
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Table {
    header: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    /// Creates an empty table with the given header schema.
    #[must_use]
    pub fn new(header: Vec<String>) -> Self {
        Table {
            header,
            rows: Vec::new(),
        }
    }

    /// Builds a table from record maps, taking the header schema from the
    /// first record's keys.
    ///
    /// Later records are projected onto that schema: fields absent from a
    /// record become empty strings, extra fields are dropped. An empty input
    /// yields an empty table with an empty header.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::{Map, Table, Value};
    ///
    /// let mut rec = Map::new();
    /// rec.insert("id".to_string(), Value::from(1));
    /// rec.insert("name".to_string(), Value::from("A"));
    ///
    /// let table = Table::from_records(vec![rec]);
    /// assert_eq!(table.header(), ["id", "name"]);
    /// assert_eq!(table.len(), 1);
    /// ```
    #[must_use]
    pub fn from_records(records: Vec<Map>) -> Self {
        let header: Vec<String> = records
            .first()
            .map(|rec| rec.keys().cloned().collect())
            .unwrap_or_default();
        let mut table = Table::new(header);
        for rec in records {
            let row = table
                .header
                .iter()
                .map(|field| rec.get(field).cloned().unwrap_or_else(empty_cell))
                .collect();
            table.rows.push(row);
        }
        table
    }

    /// Returns the header schema.
    #[must_use]
    pub fn header(&self) -> &[String] {
        &self.header
    }

    /// Returns the stored rows. Every row has exactly `header().len()` cells.
    #[must_use]
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Appends a row, padding with empty strings or truncating so it matches
    /// the header width.
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.truncate(self.header.len());
        while row.len() < self.header.len() {
            row.push(empty_cell());
        }
        self.rows.push(row);
    }

    /// Returns the number of records in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` if the table has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Iterates over the records as owned maps, header fields zipped against
    /// row cells in header order.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use toon_codec::{Table, Value};
    ///
    /// let mut table = Table::new(vec!["id".to_string()]);
    /// table.push_row(vec![Value::from(7)]);
    ///
    /// let records: Vec<_> = table.records().collect();
    /// assert_eq!(records[0].get("id"), Some(&Value::from(7)));
    /// ```
    pub fn records(&self) -> impl Iterator<Item = Map> + '_ {
        self.rows.iter().map(|row| {
            self.header
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect()
        })
    }
}

fn empty_cell() -> Value {
    Value::String(String::new())
}

/// The root mapping produced by one parse call, plus any diagnostics
/// recorded while parsing.
///
/// A document is constructed fresh per parse and holds no state across
/// calls. Equality compares the root tree only; diagnostics are advisory
/// and never affect comparison.
///
/// # Examples
///
/// ```rust
/// use toon_codec::parse;
///
/// let doc = parse("key: value");
/// assert_eq!(doc.root().get("key").and_then(|v| v.as_str()), Some("value"));
/// assert!(doc.diagnostics().is_empty());
/// ```
#[derive(Clone, Debug, Default)]
pub struct Document {
    root: Map,
    diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// Creates a document from a root mapping with no diagnostics.
    #[must_use]
    pub fn new(root: Map) -> Self {
        Document {
            root,
            diagnostics: Vec::new(),
        }
    }

    /// Returns the root mapping.
    #[must_use]
    pub fn root(&self) -> &Map {
        &self.root
    }

    /// Returns a mutable reference to the root mapping.
    #[must_use]
    pub fn root_mut(&mut self) -> &mut Map {
        &mut self.root
    }

    /// Consumes the document and returns the root mapping.
    #[must_use]
    pub fn into_root(self) -> Map {
        self.root
    }

    /// Returns the diagnostics recorded while this document was parsed.
    ///
    /// Empty for programmatically built documents and for clean parses.
    #[must_use]
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Returns `true` if the root mapping has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }

    pub(crate) fn record(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl From<Map> for Document {
    fn from(root: Map) -> Self {
        Document::new(root)
    }
}

impl Serialize for Document {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        Value::Object(self.root.clone()).serialize(serializer)
    }
}

impl Value {
    /// Returns `true` if the value is a boolean.
    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, Value::Bool(_))
    }

    /// Returns `true` if the value is a number.
    #[inline]
    #[must_use]
    pub const fn is_number(&self) -> bool {
        matches!(self, Value::Number(_))
    }

    /// Returns `true` if the value is a string.
    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, Value::String(_))
    }

    /// Returns `true` if the value is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_object(&self) -> bool {
        matches!(self, Value::Object(_))
    }

    /// Returns `true` if the value is a record list.
    #[inline]
    #[must_use]
    pub const fn is_table(&self) -> bool {
        matches!(self, Value::Table(_))
    }

    /// Returns `true` if the value is a scalar (bool, number or string).
    #[inline]
    #[must_use]
    pub const fn is_scalar(&self) -> bool {
        matches!(self, Value::Bool(_) | Value::Number(_) | Value::String(_))
    }

    /// If the value is a boolean, returns it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// If the value is a string, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// If the value is an integer or a whole-number float, returns it as
    /// `i64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(n) => n.as_i64(),
            _ => None,
        }
    }

    /// If the value is a number, returns it as `f64`. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(n.as_f64()),
            _ => None,
        }
    }

    /// If the value is a mapping, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_object(&self) -> Option<&Map> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// If the value is a record list, returns a reference to it. Otherwise returns `None`.
    #[inline]
    #[must_use]
    pub fn as_table(&self) -> Option<&Table> {
        match self {
            Value::Table(table) => Some(table),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{}", b),
            Value::Number(n) => write!(f, "{}", n),
            Value::String(s) => write!(f, "{}", s),
            Value::Object(obj) => write!(f, "{{{} entries}}", obj.len()),
            Value::Table(table) => {
                write!(f, "Table[{}]{{{}}}", table.len(), table.header().join(","))
            }
        }
    }
}

impl Serialize for Value {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Number(Number::Integer(i)) => serializer.serialize_i64(*i),
            Value::Number(Number::Float(f)) => serializer.serialize_f64(*f),
            Value::String(s) => serializer.serialize_str(s),
            Value::Object(obj) => {
                use serde::ser::SerializeMap;
                let mut map = serializer.serialize_map(Some(obj.len()))?;
                for (k, v) in obj.iter() {
                    map.serialize_entry(k, v)?;
                }
                map.end()
            }
            Value::Table(table) => {
                use serde::ser::SerializeSeq;
                let mut seq = serializer.serialize_seq(Some(table.len()))?;
                for record in table.records() {
                    seq.serialize_element(&Value::Object(record))?;
                }
                seq.end()
            }
        }
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{self, Visitor};

        struct ValueVisitor;

        impl<'de> Visitor<'de> for ValueVisitor {
            type Value = Value;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a TOON value (bool, number, string, map, or record sequence)")
            }

            fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
                Ok(Value::Bool(value))
            }

            fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Integer(value)))
            }

            fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
                if value <= i64::MAX as u64 {
                    Ok(Value::Number(Number::Integer(value as i64)))
                } else {
                    Ok(Value::Number(Number::Float(value as f64)))
                }
            }

            fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
                Ok(Value::Number(Number::Float(value)))
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
                Ok(Value::String(value.to_string()))
            }

            fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
                Ok(Value::String(value))
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: de::SeqAccess<'de>,
            {
                // Only record sequences exist in the data model; the format
                // has no list-of-scalars node.
                let mut records = Vec::new();
                while let Some(elem) = seq.next_element::<Value>()? {
                    match elem {
                        Value::Object(record) => records.push(record),
                        other => {
                            return Err(de::Error::custom(format!(
                                "TOON record lists hold objects only, found {}",
                                other
                            )))
                        }
                    }
                }
                Ok(Value::Table(Table::from_records(records)))
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: de::MapAccess<'de>,
            {
                let mut values = Map::new();
                while let Some((key, value)) = map.next_entry()? {
                    values.insert(key, value);
                }
                Ok(Value::Object(values))
            }
        }

        deserializer.deserialize_any(ValueVisitor)
    }
}

// TryFrom implementations for extracting scalars from Value
impl TryFrom<Value> for i64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => n.as_i64().ok_or_else(|| {
                crate::Error::custom(format!("cannot convert {} to i64", n))
            }),
            _ => Err(crate::Error::custom(format!(
                "expected integer, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Number(n) => Ok(n.as_f64()),
            _ => Err(crate::Error::custom(format!(
                "expected number, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::Bool(b) => Ok(b),
            _ => Err(crate::Error::custom(format!(
                "expected bool, found {}",
                value
            ))),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> crate::Result<Self> {
        match value {
            Value::String(s) => Ok(s),
            _ => Err(crate::Error::custom(format!(
                "expected string, found {}",
                value
            ))),
        }
    }
}

// From implementations for creating Value from primitives
impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<i8> for Value {
    fn from(value: i8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i16> for Value {
    fn from(value: i16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(Number::Integer(value))
    }
}

impl From<u8> for Value {
    fn from(value: u8) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u16> for Value {
    fn from(value: u16) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(Number::Integer(value as i64))
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(Number::Float(value as f64))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(Number::Float(value))
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}

impl From<Map> for Value {
    fn from(value: Map) -> Self {
        Value::Object(value)
    }
}

impl From<Table> for Value {
    fn from(value: Table) -> Self {
        Value::Table(value)
    }
}
