//! Polyline stroking.
//!
//! The shape tessellator only synthesizes outline point rings; turning a
//! point list into stroke triangles is delegated through the
//! [`PolylineTessellator`] trait so renderers can plug in their own join
//! and cap policy. [`SegmentStroker`] is the default implementation.

use glam::Vec2;

use crate::{GeometryBuffer, StrokeStyle, Vertex};

/// Converts a point list plus stroke style into triangle geometry.
///
/// Implementations append into `out`; indices must be offset by the vertex
/// count already present so the buffer can be shared across shapes. A
/// closed outline is represented by repeating the first point at the end
/// of `points`.
pub trait PolylineTessellator {
    fn tessellate_polyline(&mut self, points: &[Vec2], stroke: &StrokeStyle, out: &mut GeometryBuffer);
}

/// Minimal polyline stroker: one quad per segment, butt caps, no joins.
///
/// Adjacent quads meet without miters, which is visually fine for the
/// dense rings the shape tessellator produces.
#[derive(Debug, Default, Clone, Copy)]
pub struct SegmentStroker;

impl PolylineTessellator for SegmentStroker {
    fn tessellate_polyline(&mut self, points: &[Vec2], stroke: &StrokeStyle, out: &mut GeometryBuffer) {
        if points.len() < 2 || !stroke.is_visible() {
            return;
        }

        let color = stroke.premultiplied();
        let half = stroke.width * 0.5;

        for pair in points.windows(2) {
            let (start, end) = (pair[0], pair[1]);
            let dir = (end - start).normalize_or_zero();
            let normal = Vec2::new(-dir.y, dir.x) * half;

            let base = out.vertex_count() as u32;
            out.vertices.push(Vertex::new(start.x - normal.x, start.y - normal.y, color));
            out.vertices.push(Vertex::new(start.x + normal.x, start.y + normal.y, color));
            out.vertices.push(Vertex::new(end.x + normal.x, end.y + normal.y, color));
            out.vertices.push(Vertex::new(end.x - normal.x, end.y - normal.y, color));
            out.indices
                .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
        }
    }
}
