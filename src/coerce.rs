//! Scalar type coercion.
//!
//! Converts a raw text token into a typed scalar. The precedence is fixed:
//! boolean, integer, float, then string. Coercion is a total function; any
//! token that matches nothing earlier stays a string verbatim, so the
//! coercer never rejects input.
//!
//! ## Examples
//!
//! ```rust
//! use toon_codec::{coerce, Number, Value};
//!
//! assert_eq!(coerce("true"), Value::Bool(true));
//! assert_eq!(coerce("FALSE"), Value::Bool(false));
//! assert_eq!(coerce("1"), Value::Number(Number::Integer(1)));
//! assert_eq!(coerce("1.0"), Value::Number(Number::Float(1.0)));
//! assert_eq!(coerce("v1"), Value::String("v1".to_string()));
//! ```

use crate::{Number, Table, Value};

/// Coerces a trimmed token into a typed scalar.
///
/// Precedence, checked in order:
///
/// 1. case-insensitive `true`/`false` becomes a boolean;
/// 2. a token that parses as `i64` (and so contains no decimal point)
///    becomes an integer;
/// 3. a token containing `.` that parses as `f64` becomes a float;
/// 4. anything else stays a string.
///
/// The token `[]` is the canonical rendering of an empty record list and
/// maps back to an empty [`Table`], keeping `parse`/`serialize` mirrored.
///
/// # Examples
///
/// ```rust
/// use toon_codec::{coerce, Value};
///
/// assert_eq!(coerce("hello world"), Value::String("hello world".to_string()));
/// assert!(coerce("[]").is_table());
/// ```
#[must_use]
pub fn coerce(token: &str) -> Value {
    if token.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if token.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    if let Ok(i) = token.parse::<i64>() {
        return Value::Number(Number::Integer(i));
    }
    if token.contains('.') {
        if let Ok(f) = token.parse::<f64>() {
            return Value::Number(Number::Float(f));
        }
    }
    if token == "[]" {
        return Value::Table(Table::default());
    }
    Value::String(token.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_precedence_is_case_insensitive() {
        assert_eq!(coerce("true"), Value::Bool(true));
        assert_eq!(coerce("TRUE"), Value::Bool(true));
        assert_eq!(coerce("False"), Value::Bool(false));
        assert_eq!(coerce("FALSE"), Value::Bool(false));
    }

    #[test]
    fn test_integer_before_float() {
        assert_eq!(coerce("1"), Value::Number(Number::Integer(1)));
        assert_eq!(coerce("-42"), Value::Number(Number::Integer(-42)));
        assert_eq!(coerce("1.0"), Value::Number(Number::Float(1.0)));
        assert_eq!(coerce("-0.5"), Value::Number(Number::Float(-0.5)));
    }

    #[test]
    fn test_float_requires_decimal_point() {
        // "1e5" parses as f64 but carries no point, so it stays a string.
        assert_eq!(coerce("1e5"), Value::String("1e5".to_string()));
        assert_eq!(coerce("inf"), Value::String("inf".to_string()));
        assert_eq!(coerce("NaN"), Value::String("NaN".to_string()));
        assert_eq!(coerce("1.5e3"), Value::Number(Number::Float(1500.0)));
    }

    #[test]
    fn test_string_fallback_is_verbatim() {
        assert_eq!(coerce("v1"), Value::String("v1".to_string()));
        assert_eq!(coerce("truely"), Value::String("truely".to_string()));
        assert_eq!(coerce(""), Value::String(String::new()));
        assert_eq!(coerce("1.2.3"), Value::String("1.2.3".to_string()));
    }

    #[test]
    fn test_empty_brackets_become_empty_table() {
        let value = coerce("[]");
        let table = value.as_table().unwrap();
        assert!(table.is_empty());
        assert!(table.header().is_empty());
    }
}
