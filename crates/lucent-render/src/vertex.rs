//! The 2D vertex format staged by the geometry arena.

use bytemuck::{Pod, Zeroable};
use static_assertions::const_assert_eq;

use crate::Color;

/// Index element type for all batched geometry.
pub type VertexIndex = u32;

/// Index format matching [`VertexIndex`].
pub const INDEX_FORMAT: wgpu::IndexFormat = wgpu::IndexFormat::Uint32;

/// A single 2D vertex: screen-space position, texture UV, RGBA color.
///
/// 32 bytes, `#[repr(C)]`, directly uploadable.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct Vertex2D {
    pub position: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

const_assert_eq!(std::mem::size_of::<Vertex2D>(), 32);

impl Vertex2D {
    pub fn new(position: [f32; 2], uv: [f32; 2], color: Color) -> Self {
        Self {
            position,
            uv,
            color: color.to_array(),
        }
    }

    /// Returns the wgpu vertex buffer layout for this format.
    pub fn layout() -> wgpu::VertexBufferLayout<'static> {
        const ATTRS: &[wgpu::VertexAttribute] = &wgpu::vertex_attr_array![
            // location 0: position (vec2)
            0 => Float32x2,
            // location 1: uv (vec2)
            1 => Float32x2,
            // location 2: color (vec4)
            2 => Float32x4,
        ];

        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex2D>() as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: ATTRS,
        }
    }

    /// Size of the vertex in bytes.
    pub const SIZE: u64 = std::mem::size_of::<Self>() as u64;
}
