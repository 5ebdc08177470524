//! The GPU execution context interface consumed at replay time.

use glam::Affine2;

use crate::{
    BlendMode, Color, PatternParams, RasterizerState, SamplerState, ScissorRect, ShaderId,
    ShaderStage, TextureId, Vertex2D, VertexIndex, Viewport,
};

/// How a geometry buffer write maps the destination region.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapMode {
    /// Write after the last-read point, preserving earlier contents that
    /// draws still in flight may be reading.
    Append,
    /// Invalidate the whole buffer and start over from offset zero.
    Discard,
}

/// A stateful graphics context, dependency-injected into the replay walk.
///
/// Implementations own the concrete GPU objects (buffers, pipelines,
/// samplers, textures) and resolve the ids carried by the command stream.
/// All methods are infallible at this interface: device-level failures
/// are the implementation's responsibility.
///
/// The trait is object-safe so engines and tests can swap real and mock
/// contexts behind `&mut dyn RenderBackend`.
pub trait RenderBackend {
    /// Bind the vertex/index buffers the geometry writes target.
    fn bind_geometry_buffers(&mut self);

    /// Copy vertices into the bound vertex buffer at an element offset.
    fn write_vertices(&mut self, mode: MapMode, offset: u32, vertices: &[Vertex2D]);

    /// Copy indices into the bound index buffer at an element offset.
    fn write_indices(&mut self, mode: MapMode, offset: u32, indices: &[VertexIndex]);

    fn set_color_mul(&mut self, color: Color);

    fn set_color_add(&mut self, color: Color);

    fn set_pattern_params(&mut self, params: PatternParams);

    fn set_blend_mode(&mut self, blend: BlendMode);

    fn set_rasterizer_state(&mut self, rasterizer: RasterizerState);

    fn set_sampler_state(&mut self, stage: ShaderStage, slot: usize, sampler: SamplerState);

    fn set_scissor_rect(&mut self, rect: ScissorRect);

    fn set_viewport(&mut self, viewport: Viewport);

    fn set_vertex_shader(&mut self, shader: ShaderId);

    fn set_pixel_shader(&mut self, shader: ShaderId);

    fn set_transform(&mut self, transform: Affine2);

    fn bind_texture(&mut self, stage: ShaderStage, slot: usize, texture: TextureId);

    /// Issue one indexed draw call.
    fn draw_indexed(
        &mut self,
        index_count: u32,
        start_index_location: u32,
        base_vertex_location: u32,
    );
}
