//! Linear replay of a recorded frame against a backend.

use lucent_core::profiling::profile_function;

use crate::{
    BatchInfo, CategoryKind, CommandKind, CommandRecorder, GeometryArena, RenderBackend,
};

/// Counters from one frame replay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReplayStats {
    /// GPU draw calls issued.
    pub draw_calls: u32,
    /// State-change commands applied.
    pub state_changes: u32,
    /// Batches committed to the GPU buffers.
    pub batches: u32,
    /// Total indices drawn.
    pub index_count: u32,
}

/// Walk the command stream once, in order, applying every command to the
/// backend.
///
/// Draws index into the batch most recently committed by an
/// `UpdateBuffers` command; the start location advances past each draw so
/// consecutive draws consume consecutive index ranges of their batch.
pub fn replay(
    recorder: &CommandRecorder,
    arena: &mut GeometryArena,
    backend: &mut dyn RenderBackend,
) -> ReplayStats {
    profile_function!();

    let mut stats = ReplayStats::default();
    let mut batch_info = BatchInfo::default();

    for command in recorder.commands() {
        match command.kind {
            CommandKind::SetBuffers => {
                arena.set_buffers(backend);
            }
            CommandKind::UpdateBuffers => {
                batch_info = arena.commit_buffers(command.index, backend);
                stats.batches += 1;
            }
            CommandKind::Draw => {
                let index_count = recorder.draw(command.index);
                backend.draw_indexed(
                    index_count,
                    batch_info.start_index_location,
                    batch_info.base_vertex_location,
                );
                batch_info.start_index_location += index_count;
                stats.draw_calls += 1;
                stats.index_count += index_count;
            }
            CommandKind::State(category) => {
                stats.state_changes += 1;
                let index = command.index;
                match category.kind() {
                    CategoryKind::ColorMul => {
                        backend.set_color_mul(recorder.get_color_mul(index));
                    }
                    CategoryKind::ColorAdd => {
                        backend.set_color_add(recorder.get_color_add(index));
                    }
                    CategoryKind::Pattern => {
                        backend.set_pattern_params(recorder.get_pattern_params(index));
                    }
                    CategoryKind::Blend => {
                        backend.set_blend_mode(recorder.get_blend_mode(index));
                    }
                    CategoryKind::Rasterizer => {
                        backend.set_rasterizer_state(recorder.get_rasterizer_state(index));
                    }
                    CategoryKind::Scissor => {
                        backend.set_scissor_rect(recorder.get_scissor_rect(index));
                    }
                    CategoryKind::Viewport => {
                        backend.set_viewport(recorder.get_viewport(index));
                    }
                    CategoryKind::VertexShader => {
                        backend.set_vertex_shader(recorder.get_vertex_shader(index));
                    }
                    CategoryKind::PixelShader => {
                        backend.set_pixel_shader(recorder.get_pixel_shader(index));
                    }
                    CategoryKind::Transform => {
                        backend.set_transform(recorder.get_transform(index));
                    }
                    CategoryKind::Sampler { stage, slot } => {
                        backend.set_sampler_state(
                            stage,
                            slot,
                            recorder.get_sampler_state(stage, slot, index),
                        );
                    }
                    CategoryKind::Texture { stage, slot } => {
                        backend.bind_texture(stage, slot, recorder.get_texture(stage, slot, index));
                    }
                }
            }
        }
    }

    tracing::trace!(
        draw_calls = stats.draw_calls,
        state_changes = stats.state_changes,
        batches = stats.batches,
        "frame replayed"
    );

    stats
}
