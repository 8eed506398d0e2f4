//! Shared value types.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

// ============================================================================
// PathData
// ============================================================================

/// An extracted SVG path-data string.
///
/// Holds the verbatim contents of a `d` attribute in the vector-path
/// mini-language (`M0 0L10 10…`). The string is immutable once extracted and
/// shared: clones are cheap `Arc` bumps, and every lookup of the same
/// (icon, style) pair for the process lifetime observes the same allocation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PathData(Arc<str>);

impl PathData {
    /// View the path data as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check whether two values share the same underlying allocation.
    ///
    /// True for any two clones served from the same cache entry.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for PathData {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl From<String> for PathData {
    fn from(s: String) -> Self {
        PathData(s.into())
    }
}

impl From<&str> for PathData {
    fn from(s: &str) -> Self {
        PathData(s.into())
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ============================================================================
// Color
// ============================================================================

/// An RGBA fill color (0.0-1.0 components, non-premultiplied).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    /// Create a new color from RGBA components (0.0-1.0 range).
    #[inline]
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque color from RGB components.
    #[inline]
    pub const fn from_rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_rgb(r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0)
    }

    /// Return a new color with modified alpha.
    #[inline]
    pub const fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Convert to an array `[r, g, b, a]`.
    #[inline]
    pub const fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::new(0.0, 0.0, 0.0, 0.0);
    pub const BLACK: Self = Self::from_rgb(0.0, 0.0, 0.0);
    pub const WHITE: Self = Self::from_rgb(1.0, 1.0, 1.0);
    pub const RED: Self = Self::from_rgb(1.0, 0.0, 0.0);
    pub const GREEN: Self = Self::from_rgb(0.0, 1.0, 0.0);
    pub const BLUE: Self = Self::from_rgb(0.0, 0.0, 1.0);
    pub const GRAY: Self = Self::from_rgb(0.5, 0.5, 0.5);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_data_clones_share_allocation() {
        let data = PathData::from("M0 0L10 10");
        let clone = data.clone();
        assert_eq!(data, clone);
        assert!(data.ptr_eq(&clone));

        // Equal contents from a separate allocation are equal but not shared.
        let other = PathData::from("M0 0L10 10".to_string());
        assert_eq!(data, other);
        assert!(!data.ptr_eq(&other));
    }

    #[test]
    fn test_color_constants() {
        assert_eq!(Color::BLACK.to_array(), [0.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::RED.to_array(), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(Color::TRANSPARENT.a, 0.0);
        assert_eq!(Color::from_rgb8(255, 0, 0), Color::RED);
    }
}
