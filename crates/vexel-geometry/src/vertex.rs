//! Vertex format and the shared geometry output buffer.

use bytemuck::{Pod, Zeroable};

/// A single tessellated vertex: position plus premultiplied RGBA color.
///
/// `#[repr(C)]`, 24 bytes, castable straight into a GPU vertex buffer.
#[repr(C)]
#[derive(Copy, Clone, Debug, Pod, Zeroable)]
pub struct Vertex {
    /// Position in 2D space
    pub position: [f32; 2],
    /// Premultiplied color (r·a, g·a, b·a, a)
    pub color: [f32; 4],
}

impl Vertex {
    /// Create a new vertex.
    pub fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Caller-owned output buffer that tessellation passes append into.
///
/// Indices address whole vertices (vertex units, not float offsets), so
/// every emitter must offset the indices it pushes by the vertex count
/// already present. Multiple shapes can then share one buffer.
#[derive(Debug, Clone, Default)]
pub struct GeometryBuffer {
    /// Vertex data
    pub vertices: Vec<Vertex>,
    /// Index data referencing `vertices`
    pub indices: Vec<u32>,
}

impl GeometryBuffer {
    /// Create a new empty buffer.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            indices: Vec::new(),
        }
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty() || self.indices.is_empty()
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Get the number of indices.
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Clear all data.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.indices.clear();
    }

    /// Vertex data as bytes, for GPU upload.
    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    /// Index data as bytes, for GPU upload.
    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}
