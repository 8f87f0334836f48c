//! Plain data objects and JSON text conversion.
//!
//! # Scope
//!
//! This crate implements:
//! - **Rectangle** - width/height constructor with an area computation
//! - **JSON text** - serialize any [`serde::Serialize`] value to text, parse
//!   text back, and parse text on top of a *prototype* value whose fields
//!   supply defaults for keys the text leaves out

/// JSON text conversion helpers.
pub mod json;
/// Rectangle shape.
pub mod rectangle;

pub use json::{
    JsonError, JsonFormat, from_json, from_json_with_prototype, to_json, to_json_with,
    unknown_keys_warning,
};
pub use rectangle::Rectangle;
