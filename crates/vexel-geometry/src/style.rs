//! Fill and stroke styling.
//!
//! A [`Style`] combines optional fill and stroke properties; disabled
//! sides are simply absent.

use vexel_core::Color;

/// Fill properties for a shape interior.
///
/// `alpha` is an opacity multiplier applied on top of the color's own
/// alpha channel; colors constructed from packed `0xRRGGBB` values carry
/// full alpha, so for those `alpha` is the effective opacity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FillStyle {
    pub color: Color,
    pub alpha: f32,
}

impl FillStyle {
    /// Create a fully opaque solid fill.
    pub fn solid(color: Color) -> Self {
        Self { color, alpha: 1.0 }
    }

    /// Create a fill from a packed `0xRRGGBB` color and an opacity.
    pub fn from_hex(hex: u32, alpha: f32) -> Self {
        Self {
            color: Color::from_hex(hex),
            alpha,
        }
    }

    /// Set the opacity.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// Premultiplied `[r·a, g·a, b·a, a]` vertex color for this fill.
    pub fn premultiplied(&self) -> [f32; 4] {
        self.color.premultiply(self.alpha)
    }
}

impl Default for FillStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK)
    }
}

/// Stroke properties for a shape outline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrokeStyle {
    /// Stroke width in logical pixels
    pub width: f32,
    pub color: Color,
    pub alpha: f32,
}

impl StrokeStyle {
    /// Create a fully opaque solid stroke.
    pub fn solid(color: Color, width: f32) -> Self {
        Self {
            width,
            color,
            alpha: 1.0,
        }
    }

    /// Create a stroke from a packed `0xRRGGBB` color, width, and opacity.
    pub fn from_hex(hex: u32, width: f32, alpha: f32) -> Self {
        Self {
            width,
            color: Color::from_hex(hex),
            alpha,
        }
    }

    /// Set the opacity.
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha.clamp(0.0, 1.0);
        self
    }

    /// A zero-width stroke draws nothing.
    pub fn is_visible(&self) -> bool {
        self.width > 0.0
    }

    /// Premultiplied `[r·a, g·a, b·a, a]` vertex color for this stroke.
    pub fn premultiplied(&self) -> [f32; 4] {
        self.color.premultiply(self.alpha)
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(Color::BLACK, 1.0)
    }
}

/// Complete style for shape tessellation.
///
/// Fill and stroke are independent; a style with neither still tessellates
/// to an empty (but valid) buffer.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Style {
    /// Optional fill properties
    pub fill: Option<FillStyle>,
    /// Optional stroke properties
    pub stroke: Option<StrokeStyle>,
}

impl Style {
    /// Create a new empty style (invisible).
    pub fn new() -> Self {
        Self {
            fill: None,
            stroke: None,
        }
    }

    /// Create a fill-only style with a solid color.
    pub fn fill_color(color: Color) -> Self {
        Self {
            fill: Some(FillStyle::solid(color)),
            stroke: None,
        }
    }

    /// Create a stroke-only style with a solid color.
    pub fn stroke_color(color: Color, width: f32) -> Self {
        Self {
            fill: None,
            stroke: Some(StrokeStyle::solid(color, width)),
        }
    }

    /// Set the fill.
    pub fn with_fill(mut self, fill: FillStyle) -> Self {
        self.fill = Some(fill);
        self
    }

    /// Set the stroke.
    pub fn with_stroke(mut self, stroke: StrokeStyle) -> Self {
        self.stroke = Some(stroke);
        self
    }

    /// Check if this style has a fill.
    pub fn has_fill(&self) -> bool {
        self.fill.is_some()
    }

    /// Check if this style has a visible stroke.
    pub fn has_stroke(&self) -> bool {
        self.stroke.as_ref().is_some_and(|s| s.is_visible())
    }

    /// Check if this style draws anything at all.
    pub fn is_visible(&self) -> bool {
        self.has_fill() || self.has_stroke()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_style() {
        let style = Style::new();
        assert!(!style.is_visible());
        assert!(!style.has_fill());
        assert!(!style.has_stroke());
    }

    #[test]
    fn test_fill_only() {
        let style = Style::fill_color(Color::RED);
        assert!(style.has_fill());
        assert!(!style.has_stroke());
    }

    #[test]
    fn test_zero_width_stroke_invisible() {
        let style = Style::stroke_color(Color::BLUE, 0.0);
        assert!(!style.has_stroke());
        assert!(!style.is_visible());
    }

    #[test]
    fn test_fill_premultiplied() {
        let fill = FillStyle::from_hex(0xFF0000, 0.5);
        assert_eq!(fill.premultiplied(), [0.5, 0.0, 0.0, 0.5]);
    }

    #[test]
    fn test_stroke_premultiplied() {
        let stroke = StrokeStyle::solid(Color::GREEN, 2.0).with_alpha(0.25);
        assert_eq!(stroke.premultiplied(), [0.0, 0.25, 0.0, 0.25]);
    }
}
