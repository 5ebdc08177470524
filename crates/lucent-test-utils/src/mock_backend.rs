//! Mock implementation of RenderBackend for testing.
//!
//! Records operations without actually interacting with a GPU.

use glam::Affine2;
use lucent_render::{
    BlendMode, Color, MapMode, PatternParams, RasterizerState, RenderBackend, SamplerState,
    ScissorRect, ShaderId, ShaderStage, TextureId, Vertex2D, VertexIndex, Viewport,
};

/// Records one backend operation for verification in tests.
#[derive(Debug, Clone, PartialEq)]
pub enum RenderCall {
    BindGeometryBuffers,
    WriteVertices {
        mode: MapMode,
        offset: u32,
        count: u32,
    },
    WriteIndices {
        mode: MapMode,
        offset: u32,
        count: u32,
    },
    SetColorMul(Color),
    SetColorAdd(Color),
    SetPatternParams(PatternParams),
    SetBlendMode(BlendMode),
    SetRasterizerState(RasterizerState),
    SetSamplerState {
        stage: ShaderStage,
        slot: usize,
        sampler: SamplerState,
    },
    SetScissorRect(ScissorRect),
    SetViewport(Viewport),
    SetVertexShader(ShaderId),
    SetPixelShader(ShaderId),
    SetTransform(Affine2),
    BindTexture {
        stage: ShaderStage,
        slot: usize,
        texture: TextureId,
    },
    DrawIndexed {
        index_count: u32,
        start_index_location: u32,
        base_vertex_location: u32,
    },
}

/// Mock implementation of RenderBackend for testing.
///
/// Every trait method appends a [`RenderCall`]; buffer writes also retain
/// a copy of the written data so tests can check what actually landed in
/// the "GPU" buffers at which offsets.
#[derive(Debug, Default)]
pub struct MockBackend {
    /// Recorded calls in invocation order.
    calls: Vec<RenderCall>,
    /// Shadow copy of the vertex buffer contents.
    vertex_buffer: Vec<Vertex2D>,
    /// Shadow copy of the index buffer contents.
    index_buffer: Vec<VertexIndex>,
}

impl MockBackend {
    /// Create a new mock backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded calls, in order.
    pub fn calls(&self) -> &[RenderCall] {
        &self.calls
    }

    /// Forget recorded calls (the shadow buffers are kept).
    pub fn clear_calls(&mut self) {
        self.calls.clear();
    }

    /// Number of draw calls recorded.
    pub fn count_draws(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, RenderCall::DrawIndexed { .. }))
            .count()
    }

    /// Number of state-setting calls recorded (everything except buffer
    /// binds, buffer writes, and draws).
    pub fn count_state_changes(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| {
                !matches!(
                    call,
                    RenderCall::BindGeometryBuffers
                        | RenderCall::WriteVertices { .. }
                        | RenderCall::WriteIndices { .. }
                        | RenderCall::DrawIndexed { .. }
                )
            })
            .count()
    }

    /// Number of buffer writes that used discard mapping.
    pub fn count_discards(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| {
                matches!(
                    call,
                    RenderCall::WriteVertices {
                        mode: MapMode::Discard,
                        ..
                    } | RenderCall::WriteIndices {
                        mode: MapMode::Discard,
                        ..
                    }
                )
            })
            .count()
    }

    /// The draw calls recorded, in order.
    pub fn draws(&self) -> Vec<(u32, u32, u32)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                RenderCall::DrawIndexed {
                    index_count,
                    start_index_location,
                    base_vertex_location,
                } => Some((*index_count, *start_index_location, *base_vertex_location)),
                _ => None,
            })
            .collect()
    }

    /// The shadow vertex buffer contents.
    pub fn vertex_buffer(&self) -> &[Vertex2D] {
        &self.vertex_buffer
    }

    /// The shadow index buffer contents.
    pub fn index_buffer(&self) -> &[VertexIndex] {
        &self.index_buffer
    }
}

fn write_shadow<T: Copy + Default>(buffer: &mut Vec<T>, mode: MapMode, offset: u32, data: &[T]) {
    if mode == MapMode::Discard {
        buffer.clear();
    }
    let end = offset as usize + data.len();
    if buffer.len() < end {
        buffer.resize(end, T::default());
    }
    buffer[offset as usize..end].copy_from_slice(data);
}

impl RenderBackend for MockBackend {
    fn bind_geometry_buffers(&mut self) {
        self.calls.push(RenderCall::BindGeometryBuffers);
    }

    fn write_vertices(&mut self, mode: MapMode, offset: u32, vertices: &[Vertex2D]) {
        self.calls.push(RenderCall::WriteVertices {
            mode,
            offset,
            count: vertices.len() as u32,
        });
        write_shadow(&mut self.vertex_buffer, mode, offset, vertices);
    }

    fn write_indices(&mut self, mode: MapMode, offset: u32, indices: &[VertexIndex]) {
        self.calls.push(RenderCall::WriteIndices {
            mode,
            offset,
            count: indices.len() as u32,
        });
        write_shadow(&mut self.index_buffer, mode, offset, indices);
    }

    fn set_color_mul(&mut self, color: Color) {
        self.calls.push(RenderCall::SetColorMul(color));
    }

    fn set_color_add(&mut self, color: Color) {
        self.calls.push(RenderCall::SetColorAdd(color));
    }

    fn set_pattern_params(&mut self, params: PatternParams) {
        self.calls.push(RenderCall::SetPatternParams(params));
    }

    fn set_blend_mode(&mut self, blend: BlendMode) {
        self.calls.push(RenderCall::SetBlendMode(blend));
    }

    fn set_rasterizer_state(&mut self, rasterizer: RasterizerState) {
        self.calls.push(RenderCall::SetRasterizerState(rasterizer));
    }

    fn set_sampler_state(&mut self, stage: ShaderStage, slot: usize, sampler: SamplerState) {
        self.calls.push(RenderCall::SetSamplerState {
            stage,
            slot,
            sampler,
        });
    }

    fn set_scissor_rect(&mut self, rect: ScissorRect) {
        self.calls.push(RenderCall::SetScissorRect(rect));
    }

    fn set_viewport(&mut self, viewport: Viewport) {
        self.calls.push(RenderCall::SetViewport(viewport));
    }

    fn set_vertex_shader(&mut self, shader: ShaderId) {
        self.calls.push(RenderCall::SetVertexShader(shader));
    }

    fn set_pixel_shader(&mut self, shader: ShaderId) {
        self.calls.push(RenderCall::SetPixelShader(shader));
    }

    fn set_transform(&mut self, transform: Affine2) {
        self.calls.push(RenderCall::SetTransform(transform));
    }

    fn bind_texture(&mut self, stage: ShaderStage, slot: usize, texture: TextureId) {
        self.calls.push(RenderCall::BindTexture {
            stage,
            slot,
            texture,
        });
    }

    fn draw_indexed(
        &mut self,
        index_count: u32,
        start_index_location: u32,
        base_vertex_location: u32,
    ) {
        self.calls.push(RenderCall::DrawIndexed {
            index_count,
            start_index_location,
            base_vertex_location,
        });
    }
}
