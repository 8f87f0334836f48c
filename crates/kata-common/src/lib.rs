//! Common utilities shared by the kata crates.
//!
//! - **Warning System** - deduplicated warnings routed through `tracing`

pub mod warning;
