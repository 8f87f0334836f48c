//! JSON text conversion for plain data objects.
//!
//! Besides straight `to_json` / `from_json`, this module supports parsing
//! *with a prototype*: the parsed text is overlaid on an existing value, so
//! any key the text omits keeps the prototype's value.

use std::any::type_name;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

use kata_common::warning::warn_once;

/// Errors produced while converting between values and JSON text.
#[derive(Debug, Error)]
pub enum JsonError {
    /// The text is not well-formed JSON.
    #[error("malformed JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// A value has no JSON representation.
    #[error("value cannot be serialized as JSON: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The JSON is well-formed but does not fit the target type.
    #[error("JSON does not match the target type: {0}")]
    Shape(#[source] serde_json::Error),

    /// Prototype parsing needs the text to be a JSON object.
    #[error("expected a JSON object, found {found}")]
    NotAnObject {
        /// Kind of JSON value that was found instead.
        found: &'static str,
    },

    /// Prototype parsing needs the prototype to serialize to a JSON object.
    #[error("prototype must serialize to a JSON object, found {found}")]
    PrototypeNotAnObject {
        /// Kind of JSON value the prototype serialized to.
        found: &'static str,
    },
}

impl JsonError {
    fn from_parse(err: serde_json::Error) -> Self {
        if err.is_data() { Self::Shape(err) } else { Self::Syntax(err) }
    }
}

/// Layout of the text produced by [`to_json_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Single line, no insignificant whitespace.
    #[default]
    Compact,
    /// Two-space indented, one member per line.
    Pretty,
}

/// Serialize a value to compact JSON text.
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value cannot be represented as
/// JSON (for example a map with non-string keys).
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsonError> {
    to_json_with(value, JsonFormat::Compact)
}

/// Serialize a value to JSON text in the requested [`JsonFormat`].
///
/// # Errors
///
/// Returns [`JsonError::Serialize`] if the value cannot be represented as JSON.
pub fn to_json_with<T: Serialize + ?Sized>(value: &T, format: JsonFormat) -> Result<String, JsonError> {
    match format {
        JsonFormat::Compact => serde_json::to_string(value),
        JsonFormat::Pretty => serde_json::to_string_pretty(value),
    }
    .map_err(JsonError::Serialize)
}

/// Parse JSON text into a value of type `T`.
///
/// # Errors
///
/// Returns [`JsonError::Syntax`] for malformed text and [`JsonError::Shape`]
/// when the text is valid JSON of the wrong shape.
pub fn from_json<T: DeserializeOwned>(text: &str) -> Result<T, JsonError> {
    serde_json::from_str(text).map_err(JsonError::from_parse)
}

/// Parse a JSON object on top of `prototype`.
///
/// Keys present in `text` replace the prototype's values; keys the text
/// leaves out keep them. Every key in `text` is handed to `T`'s
/// `Deserialize` impl, including fields the prototype skipped when
/// serializing. Keys `T` does not declare are ignored, logged at debug
/// level, and reported once per type through [`warn_once`].
///
/// ```
/// use kata_objects::{Rectangle, from_json_with_prototype};
///
/// let base = Rectangle::new(2.0, 3.0);
/// let r = from_json_with_prototype(&base, r#"{"width": 5}"#).unwrap();
/// assert_eq!(r, Rectangle::new(5.0, 3.0));
/// ```
///
/// # Errors
///
/// - [`JsonError::Syntax`] if `text` is not valid JSON
/// - [`JsonError::NotAnObject`] if `text` is valid JSON but not an object
/// - [`JsonError::Serialize`] if the prototype cannot be serialized
/// - [`JsonError::PrototypeNotAnObject`] if the prototype is not a struct/map
/// - [`JsonError::Shape`] if a supplied value has the wrong type for its field
pub fn from_json_with_prototype<T>(prototype: &T, text: &str) -> Result<T, JsonError>
where
    T: Serialize + DeserializeOwned,
{
    let overrides = match serde_json::from_str::<Value>(text).map_err(JsonError::Syntax)? {
        Value::Object(fields) => fields,
        other => return Err(JsonError::NotAnObject { found: kind_of(&other) }),
    };

    let mut merged = match serde_json::to_value(prototype).map_err(JsonError::Serialize)? {
        Value::Object(fields) => fields,
        other => return Err(JsonError::PrototypeNotAnObject { found: kind_of(&other) }),
    };

    merged.extend(overrides);

    let mut ignored = Vec::new();
    let parsed = serde_ignored::deserialize(Value::Object(merged), |path| ignored.push(path.to_string()))
        .map_err(JsonError::Shape)?;

    if !ignored.is_empty() {
        tracing::debug!(keys = ?ignored, "ignored keys with no matching field");
        let _ = warn_once("json", &unknown_keys_warning::<T>());
    }
    Ok(parsed)
}

/// Warning text for keys `T` does not declare. Keyed on the type, not the
/// key text, so the deduplication set stays bounded.
#[must_use]
pub fn unknown_keys_warning<T: ?Sized>() -> String {
    format!("ignoring keys unknown to `{}`", type_name::<T>())
}

const fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
