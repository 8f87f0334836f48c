use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle described only by its size.
///
/// Serializes as `{"width": .., "height": ..}`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rectangle {
    /// Horizontal extent.
    pub width: f64,
    /// Vertical extent.
    pub height: f64,
}

impl Rectangle {
    /// Create a rectangle with the given width and height.
    #[must_use]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width times height.
    #[must_use]
    pub const fn area(&self) -> f64 {
        self.width * self.height
    }
}
