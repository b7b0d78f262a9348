//! Shape tessellation.
//!
//! Converts circle/ellipse descriptors plus styling into flat vertex and
//! index data for a triangle-based rasterizer. Fills are emitted directly
//! as a fan of (center, rim) vertex pairs; outlines are synthesized as a
//! closed point ring and handed to a [`PolylineTessellator`].

use glam::Vec2;

use crate::{
    FillStyle, GeometryBuffer, PolylineTessellator, SegmentStroker, Shape, StrokeStyle, Style,
    Vertex,
};

/// Number of edges used to approximate a shape's curve.
///
/// `floor(30·sqrt(radius))` for circles; when that evaluates to zero (tiny
/// or zero radius), and always for ellipses, `floor(15·sqrt(w + h))` is
/// used instead, with a circle's width and height both being its radius.
/// The count is never allowed below one so the angle step stays finite and
/// a degenerate shape still yields a valid fan with every rim point at the
/// center.
pub fn segment_count(shape: &Shape) -> u32 {
    let radii = shape.radii();
    let segments = match *shape {
        Shape::Circle { radius, .. } => {
            let circle = (30.0 * radius.sqrt()).floor();
            if circle > 0.0 {
                circle
            } else {
                (15.0 * (radii.x + radii.y).sqrt()).floor()
            }
        }
        Shape::Ellipse { .. } => (15.0 * (radii.x + radii.y).sqrt()).floor(),
    };
    (segments as u32).max(1)
}

/// Tessellator for converting shapes into triangle geometry.
///
/// Owns the [`PolylineTessellator`] used for outlines; defaults to
/// [`SegmentStroker`].
pub struct ShapeTessellator<S = SegmentStroker> {
    stroker: S,
}

impl ShapeTessellator<SegmentStroker> {
    /// Create a tessellator with the default stroker.
    pub fn new() -> Self {
        Self {
            stroker: SegmentStroker,
        }
    }
}

impl Default for ShapeTessellator<SegmentStroker> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: PolylineTessellator> ShapeTessellator<S> {
    /// Create a tessellator delegating outlines to `stroker`.
    pub fn with_stroker(stroker: S) -> Self {
        Self { stroker }
    }

    /// Append fill and/or stroke geometry for `shape` into `out`.
    ///
    /// Indices are offset by the buffer's current vertex count, so repeated
    /// calls against one buffer compose. Negative dimensions are a
    /// programmer error; they are clamped to zero in release builds.
    pub fn tessellate(&mut self, shape: &Shape, style: &Style, out: &mut GeometryBuffer) {
        let radii = shape.radii();
        debug_assert!(
            radii.x >= 0.0 && radii.y >= 0.0,
            "shape dimensions must be non-negative: {radii:?}"
        );
        let shape = if radii.x < 0.0 || radii.y < 0.0 {
            tracing::warn!(?shape, "clamping negative shape dimensions to zero");
            shape.clamped()
        } else {
            *shape
        };

        let segments = segment_count(&shape);
        let center = shape.center();
        let radii = shape.radii();

        if let Some(fill) = &style.fill {
            fill_fan(center, radii, segments, fill, out);
        }

        if let Some(stroke) = &style.stroke
            && stroke.is_visible()
        {
            self.stroke_ring(center, radii, segments, stroke, out);
        }
    }

    /// Synthesize the closed outline ring and delegate it to the stroker.
    ///
    /// The ring is a fresh, locally owned point list; the shape descriptor
    /// itself is never touched, so callers can rely on it being unchanged
    /// after the call.
    fn stroke_ring(
        &mut self,
        center: Vec2,
        radii: Vec2,
        segments: u32,
        stroke: &StrokeStyle,
        out: &mut GeometryBuffer,
    ) {
        let step = std::f32::consts::TAU / segments as f32;

        let mut ring = Vec::with_capacity(segments as usize + 1);
        for i in 0..=segments {
            let angle = step * i as f32;
            ring.push(center + Vec2::new(angle.sin() * radii.x, angle.cos() * radii.y));
        }

        self.stroker.tessellate_polyline(&ring, stroke, out);
    }
}

/// Emit the fill fan for one shape.
///
/// One center vertex and one rim vertex per iteration over
/// `0..=segments` (the final iteration revisits the start angle to close
/// the loop), with two auto-incrementing indices each, bracketed by a
/// pivot index before the loop and a closing index after it. Downstream
/// consumers depend on this exact cardinality: `2·(segments+1)` vertices
/// and `2·(segments+1) + 2` indices per fill.
fn fill_fan(center: Vec2, radii: Vec2, segments: u32, fill: &FillStyle, out: &mut GeometryBuffer) {
    let step = std::f32::consts::TAU / segments as f32;
    let color = fill.premultiplied();

    let mut vec_pos = out.vertex_count() as u32;
    out.indices.push(vec_pos);

    for i in 0..=segments {
        let angle = step * i as f32;

        out.vertices.push(Vertex::new(center.x, center.y, color));
        out.vertices.push(Vertex::new(
            center.x + angle.sin() * radii.x,
            center.y + angle.cos() * radii.y,
            color,
        ));

        out.indices.push(vec_pos);
        vec_pos += 1;
        out.indices.push(vec_pos);
        vec_pos += 1;
    }

    out.indices.push(vec_pos - 1);
}

#[cfg(test)]
mod tests {
    use super::*;
    use vexel_core::Color;

    fn filled(color: Color, alpha: f32) -> Style {
        Style::new().with_fill(FillStyle::solid(color).with_alpha(alpha))
    }

    #[test]
    fn test_segment_count_circle() {
        // floor(30 * sqrt(10)) = 94
        let shape = Shape::circle(Vec2::ZERO, 10.0);
        assert_eq!(segment_count(&shape), 94);
    }

    #[test]
    fn test_segment_count_ellipse() {
        // floor(15 * sqrt(8 + 10)) = 63
        let shape = Shape::ellipse(Vec2::ZERO, Vec2::new(8.0, 10.0));
        assert_eq!(segment_count(&shape), 63);
    }

    #[test]
    fn test_segment_count_tiny_circle_falls_back() {
        // floor(30 * sqrt(0.001)) = 0, so the ellipse formula kicks in:
        // floor(15 * sqrt(0.002)) = 0, clamped to 1
        let shape = Shape::circle(Vec2::ZERO, 0.001);
        assert_eq!(segment_count(&shape), 1);
    }

    #[test]
    fn test_fill_cardinality() {
        let shape = Shape::circle(Vec2::new(50.0, 50.0), 10.0);
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &filled(Color::RED, 1.0), &mut out);

        let segments = 94;
        assert_eq!(out.vertex_count(), 2 * (segments + 1));
        assert_eq!(out.index_count(), 2 * (segments + 1) + 2);
        // pivot at the start, closing index back near the start
        assert_eq!(out.indices[0], 0);
        assert_eq!(*out.indices.last().unwrap(), out.vertex_count() as u32 - 1);
    }

    #[test]
    fn test_fill_vertices_alternate_center_rim() {
        let center = Vec2::new(5.0, 7.0);
        let shape = Shape::circle(center, 4.0);
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &filled(Color::WHITE, 1.0), &mut out);

        for pair in out.vertices.chunks(2) {
            assert_eq!(pair[0].position, [5.0, 7.0]);
            let [x, y] = pair[1].position;
            let d = Vec2::new(x, y) - center;
            assert!((d.length() - 4.0).abs() < 1e-3);
        }
        // first rim point is at angle 0: (x + sin(0)*r, y + cos(0)*r)
        assert_eq!(out.vertices[1].position, [5.0, 11.0]);
    }

    #[test]
    fn test_fill_premultiplied_color() {
        let shape = Shape::circle(Vec2::ZERO, 2.0);
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &filled(Color::RED, 0.5), &mut out);

        for v in &out.vertices {
            assert_eq!(v.color, [0.5, 0.0, 0.0, 0.5]);
        }
    }

    #[test]
    fn test_degenerate_zero_radius() {
        let shape = Shape::circle(Vec2::new(3.0, 4.0), 0.0);
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &filled(Color::BLUE, 1.0), &mut out);

        assert!(!out.is_empty());
        for v in &out.vertices {
            assert_eq!(v.position, [3.0, 4.0]);
        }
        assert!(out.indices.iter().all(|&i| (i as usize) < out.vertex_count()));
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "non-negative")]
    fn test_negative_radius_asserts_in_debug() {
        let shape = Shape::circle(Vec2::ZERO, -5.0);
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &filled(Color::BLUE, 1.0), &mut out);
    }

    #[test]
    #[cfg(not(debug_assertions))]
    fn test_negative_radius_clamped_in_release() {
        let shape = Shape::circle(Vec2::ZERO, -5.0);
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &filled(Color::BLUE, 1.0), &mut out);

        for v in &out.vertices {
            assert!(v.position[0].is_finite() && v.position[1].is_finite());
            assert_eq!(v.position, [0.0, 0.0]);
        }
    }

    #[test]
    fn test_invisible_style_emits_nothing() {
        let shape = Shape::circle(Vec2::ZERO, 10.0);
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &Style::new(), &mut out);
        assert!(out.is_empty());

        // zero-width stroke counts as disabled
        let style = Style::stroke_color(Color::RED, 0.0);
        ShapeTessellator::new().tessellate(&shape, &style, &mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn test_stroke_only_delegates_ring() {
        let shape = Shape::circle(Vec2::ZERO, 10.0);
        let style = Style::stroke_color(Color::BLACK, 2.0);
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &style, &mut out);

        // SegmentStroker: one quad per ring segment
        let segments = 94;
        assert_eq!(out.vertex_count(), 4 * segments);
        assert_eq!(out.index_count(), 6 * segments);
    }

    #[test]
    fn test_stroke_ring_shape() {
        struct Recorder(Vec<Vec2>);
        impl PolylineTessellator for Recorder {
            fn tessellate_polyline(
                &mut self,
                points: &[Vec2],
                _stroke: &StrokeStyle,
                _out: &mut GeometryBuffer,
            ) {
                self.0 = points.to_vec();
            }
        }

        let center = Vec2::new(10.0, 20.0);
        let shape = Shape::circle(center, 10.0);
        let style = Style::stroke_color(Color::BLACK, 1.0);
        let mut tess = ShapeTessellator::with_stroker(Recorder(Vec::new()));
        let mut out = GeometryBuffer::new();
        tess.tessellate(&shape, &style, &mut out);

        let ring = &tess.stroker.0;
        assert_eq!(ring.len(), 94 + 1);
        // ring starts at the top of the circle and closes on itself
        assert_eq!(ring[0], Vec2::new(10.0, 30.0));
        assert!((ring[ring.len() - 1] - ring[0]).length() < 1e-3);
        // descriptor untouched by the call
        assert_eq!(shape, Shape::circle(center, 10.0));
    }

    #[test]
    fn test_shared_buffer_offsets() {
        let style = filled(Color::RED, 1.0);
        let mut out = GeometryBuffer::new();
        let mut tess = ShapeTessellator::new();

        tess.tessellate(&Shape::circle(Vec2::ZERO, 10.0), &style, &mut out);
        let first_vertices = out.vertex_count();
        let first_indices = out.index_count();

        tess.tessellate(&Shape::circle(Vec2::new(100.0, 0.0), 10.0), &style, &mut out);

        // the second shape's pivot index starts where the first left off
        assert_eq!(out.indices[first_indices], first_vertices as u32);
        assert!(
            out.indices[first_indices..]
                .iter()
                .all(|&i| (i as usize) >= first_vertices && (i as usize) < out.vertex_count())
        );
    }

    #[test]
    fn test_ellipse_fill() {
        let shape = Shape::ellipse(Vec2::ZERO, Vec2::new(8.0, 10.0));
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &filled(Color::GREEN, 1.0), &mut out);

        let segments = 63;
        assert_eq!(out.vertex_count(), 2 * (segments + 1));
        // rim points respect the per-axis radii
        let [x, y] = out.vertices[1].position;
        assert!((x - 0.0).abs() < 1e-4);
        assert!((y - 10.0).abs() < 1e-4);
    }

    #[test]
    fn test_fill_and_stroke_together() {
        let shape = Shape::circle(Vec2::ZERO, 10.0);
        let style = Style::fill_color(Color::RED).with_stroke(StrokeStyle::solid(Color::BLACK, 2.0));
        let mut out = GeometryBuffer::new();
        ShapeTessellator::new().tessellate(&shape, &style, &mut out);

        let segments = 94;
        let fill_vertices = 2 * (segments + 1);
        assert_eq!(out.vertex_count(), fill_vertices + 4 * segments);
        // stroke indices live past the fill block
        assert!(
            out.indices[2 * (segments + 1) + 2..]
                .iter()
                .all(|&i| (i as usize) >= fill_vertices)
        );
    }
}
