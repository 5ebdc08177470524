//! Record-then-replay integration tests against the mock backend.

use lucent_render::{
    BlendMode, Category, Color, CommandRecorder, GeometryArena, GeometryArenaDescriptor, MapMode,
    Vertex2D, VertexIndex, replay,
};
use lucent_test_utils::{MockBackend, RenderCall};

fn small_descriptor() -> GeometryArenaDescriptor {
    GeometryArenaDescriptor {
        initial_vertex_capacity: 8,
        initial_index_capacity: 8,
        max_vertex_capacity: 256,
        max_index_capacity: 256,
        vertex_buffer_capacity: 16,
        index_buffer_capacity: 24,
    }
}

/// Stage one quad and record its draw.
fn record_quad(arena: &mut GeometryArena, recorder: &mut CommandRecorder, x: f32) {
    let region = arena
        .request(4, 6, recorder)
        .expect("arena should have room");
    let base = region.index_offset;
    for (i, vertex) in region.vertices.iter_mut().enumerate() {
        *vertex = Vertex2D::new([x, i as f32], [0.0, 0.0], Color::WHITE);
    }
    region
        .indices
        .copy_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    recorder.push_draw(6);
}

#[test]
fn test_single_batch_frame_call_order() {
    let mut recorder = CommandRecorder::new();
    let mut arena = GeometryArena::new(small_descriptor());
    let mut backend = MockBackend::new();

    record_quad(&mut arena, &mut recorder, 0.0);
    recorder.push_blend_mode(BlendMode::Additive);
    record_quad(&mut arena, &mut recorder, 1.0);
    recorder.flush();

    let stats = replay(&recorder, &mut arena, &mut backend);

    let calls = backend.calls();
    assert_eq!(calls[0], RenderCall::BindGeometryBuffers);
    // The frame's first batch is committed before any draw reaches it
    assert_eq!(
        calls[1],
        RenderCall::WriteVertices {
            mode: MapMode::Append,
            offset: 0,
            count: 8,
        }
    );
    assert_eq!(
        calls[2],
        RenderCall::WriteIndices {
            mode: MapMode::Append,
            offset: 0,
            count: 12,
        }
    );

    // Every category is re-established, plus the one recorded change
    assert_eq!(backend.count_state_changes(), Category::COUNT + 1);
    assert_eq!(stats.state_changes as usize, Category::COUNT + 1);

    // Both draws walk forward through the batch's index range
    assert_eq!(backend.draws(), vec![(6, 0, 0), (6, 6, 0)]);
    assert_eq!(stats.draw_calls, 2);
    assert_eq!(stats.batches, 1);
    assert_eq!(stats.index_count, 12);

    // The blend change landed between the two draws
    let blend_pos = calls
        .iter()
        .position(|call| *call == RenderCall::SetBlendMode(BlendMode::Additive))
        .expect("blend change should be replayed");
    let first_draw = calls
        .iter()
        .position(|call| matches!(call, RenderCall::DrawIndexed { .. }))
        .unwrap();
    let last_draw = calls
        .iter()
        .rposition(|call| matches!(call, RenderCall::DrawIndexed { .. }))
        .unwrap();
    assert!(first_draw < blend_pos && blend_pos < last_draw);
}

#[test]
fn test_batch_overflow_rebinds_mid_stream() {
    let mut recorder = CommandRecorder::new();
    let mut arena = GeometryArena::new(small_descriptor());
    let mut backend = MockBackend::new();

    // Two requests fill batch 0 exactly (16 vertices / 24 indices); the
    // third seals it and opens batch 1.
    for step in 0..3 {
        let region = arena.request(8, 12, &mut recorder).unwrap();
        let base = region.index_offset;
        region.vertices.fill(Vertex2D::new(
            [step as f32, 0.0],
            [0.0, 0.0],
            Color::WHITE,
        ));
        for (i, index) in region.indices.iter_mut().enumerate() {
            *index = base + (i as VertexIndex) % 8;
        }
        recorder.push_draw(12);
    }
    recorder.flush();

    let stats = replay(&recorder, &mut arena, &mut backend);

    assert_eq!(stats.batches, 2);
    // Draws recorded into batch 0 coalesced and precede the rebind
    assert_eq!(backend.draws(), vec![(24, 0, 0), (12, 0, 0)]);

    // Batch 0 filled the GPU buffers; committing batch 1 wraps both
    // cursors and restarts with a discard.
    let writes: Vec<&RenderCall> = backend
        .calls()
        .iter()
        .filter(|call| matches!(call, RenderCall::WriteVertices { .. }))
        .collect();
    assert_eq!(
        writes,
        vec![
            &RenderCall::WriteVertices {
                mode: MapMode::Append,
                offset: 0,
                count: 16,
            },
            &RenderCall::WriteVertices {
                mode: MapMode::Discard,
                offset: 0,
                count: 8,
            },
        ]
    );
}

#[test]
fn test_ring_cursor_appends_across_frames_until_full() {
    let mut recorder = CommandRecorder::new();
    let mut arena = GeometryArena::new(small_descriptor());
    let mut backend = MockBackend::new();

    let mut vertex_offsets = Vec::new();
    for frame in 0..5 {
        recorder.reset();
        arena.reset();
        record_quad(&mut arena, &mut recorder, frame as f32);
        recorder.flush();
        replay(&recorder, &mut arena, &mut backend);
    }

    for call in backend.calls() {
        if let RenderCall::WriteVertices { mode, offset, .. } = call {
            vertex_offsets.push((*mode, *offset));
        }
    }

    // Four 4-vertex frames fill the 16-vertex buffer; the fifth wraps.
    assert_eq!(
        vertex_offsets,
        vec![
            (MapMode::Append, 0),
            (MapMode::Append, 4),
            (MapMode::Append, 8),
            (MapMode::Append, 12),
            (MapMode::Discard, 0),
        ]
    );
}

#[test]
fn test_carried_state_is_replayed_next_frame() {
    let mut recorder = CommandRecorder::new();
    let mut arena = GeometryArena::new(small_descriptor());
    let mut backend = MockBackend::new();

    recorder.push_blend_mode(BlendMode::Multiply);
    recorder.push_color_mul(Color::GREEN);
    record_quad(&mut arena, &mut recorder, 0.0);
    recorder.flush();
    replay(&recorder, &mut arena, &mut backend);

    // Next frame records nothing, but the frame prefix re-establishes
    // the carried-over values on the context.
    recorder.reset();
    arena.reset();
    recorder.flush();
    backend.clear_calls();
    replay(&recorder, &mut arena, &mut backend);

    let calls = backend.calls();
    assert!(calls.contains(&RenderCall::SetBlendMode(BlendMode::Multiply)));
    assert!(calls.contains(&RenderCall::SetColorMul(Color::GREEN)));
    assert_eq!(backend.count_draws(), 0);
}

#[test]
fn test_shadow_buffers_receive_staged_geometry() {
    let mut recorder = CommandRecorder::new();
    let mut arena = GeometryArena::new(small_descriptor());
    let mut backend = MockBackend::new();

    record_quad(&mut arena, &mut recorder, 7.0);
    recorder.flush();
    replay(&recorder, &mut arena, &mut backend);

    assert_eq!(backend.vertex_buffer().len(), 4);
    assert_eq!(backend.vertex_buffer()[0].position, [7.0, 0.0]);
    assert_eq!(backend.index_buffer(), &[0, 1, 2, 2, 1, 3]);
}
