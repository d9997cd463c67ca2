/// CPU-side vertex batch submitted in one draw call.

use bitflags::bitflags;
use bytemuck::{Pod, Zeroable};
use glam::Vec3;

bitflags! {
    /// Vertex attributes present in a VertexArray
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct VertexAttribs: u32 {
        const POSITION = 1 << 0;
        const NORMAL   = 1 << 1;
        const DIFFUSE  = 1 << 2;
        const UV0      = 1 << 3;
    }
}

/// Interleaved position + normal vertex (24 bytes).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PointVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
}

/// A growable vertex batch.
///
/// Billboards store their pixel size in `normal.z`.
#[derive(Debug, Clone)]
pub struct VertexArray {
    attribs: VertexAttribs,
    vertices: Vec<PointVertex>,
}

impl VertexArray {
    pub fn new(attribs: VertexAttribs) -> Self {
        Self {
            attribs,
            vertices: Vec::new(),
        }
    }

    pub fn with_capacity(attribs: VertexAttribs, capacity: usize) -> Self {
        Self {
            attribs,
            vertices: Vec::with_capacity(capacity),
        }
    }

    pub fn add(&mut self, position: Vec3, normal: Vec3) {
        self.vertices.push(PointVertex {
            position: position.to_array(),
            normal: normal.to_array(),
        });
    }

    pub fn attribs(&self) -> VertexAttribs {
        self.attribs
    }

    pub fn vertices(&self) -> &[PointVertex] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
    }

    /// Raw bytes for buffer upload.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }
}

#[cfg(test)]
#[path = "vertex_tests.rs"]
mod tests;
