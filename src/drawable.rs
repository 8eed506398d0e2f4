//! Drawable icon composition.

use crate::geometry::Geometry;
use crate::types::Color;

/// An icon geometry composed with a fill color, ready for display.
///
/// Pure composition over a resolved [`Geometry`]: the expensive work
/// (resource extraction) sits behind the path data cache, so drawables are
/// rebuilt per request and never cached themselves. The same cached path
/// data can back any number of drawables with different fills.
#[derive(Debug, Clone)]
pub struct IconDrawable {
    geometry: Geometry,
    fill: Color,
}

impl IconDrawable {
    /// Compose a geometry with a fill color.
    pub fn new(geometry: Geometry, fill: Color) -> Self {
        Self { geometry, fill }
    }

    /// The vector shape to render.
    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    /// The fill color.
    pub fn fill(&self) -> Color {
        self.fill
    }

    /// Return the same geometry with a different fill.
    #[must_use]
    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::build_geometry;

    #[test]
    fn test_composition() {
        let geometry = build_geometry("M0 0L10 10Z").unwrap();
        let drawable = IconDrawable::new(geometry, Color::RED);
        assert_eq!(drawable.fill(), Color::RED);
        assert!(drawable.geometry().iter().next().is_some());

        let recolored = drawable.clone().with_fill(Color::BLUE);
        assert_eq!(recolored.fill(), Color::BLUE);
    }
}
