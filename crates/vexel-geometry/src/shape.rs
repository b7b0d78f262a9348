//! High-level shape primitives.
//!
//! Descriptors for the curved primitives the tessellator understands.

use glam::Vec2;

/// A shape descriptor consumed by the tessellator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Shape {
    /// A circle.
    Circle {
        /// Center point
        center: Vec2,
        /// Radius
        radius: f32,
    },
    /// An ellipse.
    Ellipse {
        /// Center point
        center: Vec2,
        /// Radii (x, y)
        radii: Vec2,
    },
}

impl Shape {
    /// Create a circle.
    pub fn circle(center: Vec2, radius: f32) -> Self {
        Self::Circle { center, radius }
    }

    /// Create an ellipse.
    pub fn ellipse(center: Vec2, radii: Vec2) -> Self {
        Self::Ellipse { center, radii }
    }

    /// Get the center point.
    pub fn center(&self) -> Vec2 {
        match *self {
            Shape::Circle { center, .. } | Shape::Ellipse { center, .. } => center,
        }
    }

    /// Get the half-extents along x and y.
    ///
    /// For a circle both components are the radius, which is also what the
    /// segment-count fallback uses when the radius is too small for the
    /// circle formula.
    pub fn radii(&self) -> Vec2 {
        match *self {
            Shape::Circle { radius, .. } => Vec2::splat(radius),
            Shape::Ellipse { radii, .. } => radii,
        }
    }

    /// Get the bounding box of this shape as `(min, max)`.
    pub fn bounds(&self) -> (Vec2, Vec2) {
        let center = self.center();
        let radii = self.radii();
        (center - radii, center + radii)
    }

    /// Copy of this shape with negative dimensions clamped to zero.
    pub(crate) fn clamped(&self) -> Shape {
        match *self {
            Shape::Circle { center, radius } => Shape::Circle {
                center,
                radius: radius.max(0.0),
            },
            Shape::Ellipse { center, radii } => Shape::Ellipse {
                center,
                radii: radii.max(Vec2::ZERO),
            },
        }
    }
}
