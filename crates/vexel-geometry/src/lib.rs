//! Vexel Geometry - 2D affine transforms and shape tessellation
//!
//! This crate provides:
//! - A six-scalar 2D affine transform ([`Matrix2D`]) with compose/decompose
//!   operations and a GPU-friendly flat-array layout
//! - Circle and ellipse shape descriptors ([`Shape`])
//! - A fill/stroke style system ([`Style`])
//! - Tessellation of shapes into flat vertex/index buffers ([`ShapeTessellator`])
//!   ready for a triangle-based rasterizer
//!
//! # Example
//!
//! ```
//! use vexel_geometry::*;
//! use glam::Vec2;
//! use vexel_core::Color;
//!
//! // Convert between coordinate spaces.
//! let mut view = Matrix2D::new();
//! view.translate(100.0, 50.0).scale(2.0, 2.0);
//! assert_eq!(view.apply(Vec2::new(10.0, 10.0)), Vec2::new(220.0, 120.0));
//!
//! // Tessellate a filled circle into a shared buffer.
//! let mut tessellator = ShapeTessellator::new();
//! let mut buffer = GeometryBuffer::new();
//! let style = Style::new().with_fill(FillStyle::solid(Color::RED));
//! tessellator.tessellate(&Shape::circle(Vec2::new(100.0, 100.0), 50.0), &style, &mut buffer);
//! assert!(!buffer.is_empty());
//! ```

// Core primitives
mod matrix;
mod shape;

// Styling
mod style;

// Tessellation
mod stroke;
mod tessellator;
mod vertex;

// Re-exports
pub use matrix::*;
pub use shape::*;

pub use style::*;

pub use stroke::*;
pub use tessellator::*;
pub use vertex::*;
