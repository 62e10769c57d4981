/// Builds a [`Value`](crate::Value) tree from a JSON-like literal.
///
/// Objects become mappings, arrays of object literals become record lists
/// (the header schema is taken from the first record), and scalars go
/// through the usual `From` conversions. Handy for building expected values
/// in tests and for assembling re-injection payloads programmatically.
///
/// # Examples
///
/// ```rust
/// use toon_codec::toon;
///
/// let value = toon!({
///     "meta": {
///         "version": 1.0
///     },
///     "items": [
///         { "name": "Item 1", "value": 100 },
///         { "name": "Item 2", "value": 200 }
///     ]
/// });
/// assert!(value.is_object());
/// ```
#[macro_export]
macro_rules! toon {
    // Booleans
    (true) => {
        $crate::Value::Bool(true)
    };

    (false) => {
        $crate::Value::Bool(false)
    };

    // Empty record list
    ([]) => {
        $crate::Value::Table($crate::Table::default())
    };

    // Record list: only object literals are admissible elements
    ([ $( { $($key:literal : $value:tt),* $(,)? } ),+ $(,)? ]) => {{
        let records = vec![$(
            {
                let mut record = $crate::Map::new();
                $(
                    record.insert($key.to_string(), $crate::toon!($value));
                )*
                record
            }
        ),+];
        $crate::Value::Table($crate::Table::from_records(records))
    }};

    // Empty mapping
    ({}) => {
        $crate::Value::Object($crate::Map::new())
    };

    // Non-empty mapping
    ({ $($key:literal : $value:tt),* $(,)? }) => {{
        let mut object = $crate::Map::new();
        $(
            object.insert($key.to_string(), $crate::toon!($value));
        )*
        $crate::Value::Object(object)
    }};

    // Scalar fallback via From impls
    ($other:expr) => {
        $crate::Value::from($other)
    };
}
