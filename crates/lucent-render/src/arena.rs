//! CPU geometry staging and capacity-bounded GPU batches.
//!
//! The arena accumulates a frame's vertex/index data in growable CPU
//! arrays and carves it into batches no larger than the fixed GPU buffer
//! capacity. Sealing a batch notifies the command recorder so a rebind
//! command lands at the right point in the stream. At replay, each
//! batch's slice is transferred into the GPU buffers through a persistent
//! ring cursor that decides between append and discard mapping.

use lucent_core::profiling::profile_function;

use crate::{
    CommandRecorder, MapMode, RenderBackend, RingCursor, Vertex2D, VertexIndex,
};

/// Construction-time capacities for a [`GeometryArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeometryArenaDescriptor {
    /// Initial CPU staging capacity, in vertices.
    pub initial_vertex_capacity: u32,
    /// Initial CPU staging capacity, in indices.
    pub initial_index_capacity: u32,
    /// Hard ceiling for CPU staging growth, in vertices.
    pub max_vertex_capacity: u32,
    /// Hard ceiling for CPU staging growth, in indices.
    pub max_index_capacity: u32,
    /// GPU vertex buffer capacity; no batch ever exceeds it.
    pub vertex_buffer_capacity: u32,
    /// GPU index buffer capacity; no batch ever exceeds it.
    pub index_buffer_capacity: u32,
}

impl Default for GeometryArenaDescriptor {
    fn default() -> Self {
        Self {
            initial_vertex_capacity: 4096,
            initial_index_capacity: 4096 * 8,
            max_vertex_capacity: 65536 * 64,
            max_index_capacity: 65536 * 64,
            vertex_buffer_capacity: 65536,
            index_buffer_capacity: 65536 * 8,
        }
    }
}

/// Geometry written into one batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchRecord {
    pub vertex_count: u32,
    pub index_count: u32,
}

/// A writable slice pair returned by [`GeometryArena::request`].
///
/// `index_offset` is the caller's base vertex within the current batch:
/// indices written through this region are batch-local and must be offset
/// by it.
pub struct VertexBufferRegion<'a> {
    pub vertices: &'a mut [Vertex2D],
    pub indices: &'a mut [VertexIndex],
    pub index_offset: VertexIndex,
}

/// Where a committed batch landed in the GPU buffers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BatchInfo {
    pub index_count: u32,
    pub start_index_location: u32,
    pub base_vertex_location: u32,
}

/// Owner of CPU staging storage and the GPU buffer write cursors.
pub struct GeometryArena {
    vertices: Vec<Vertex2D>,
    indices: Vec<VertexIndex>,
    vertex_write_pos: u32,
    index_write_pos: u32,
    batches: Vec<BatchRecord>,
    vertex_cursor: RingCursor,
    index_cursor: RingCursor,
    descriptor: GeometryArenaDescriptor,
}

impl GeometryArena {
    pub fn new(descriptor: GeometryArenaDescriptor) -> Self {
        Self {
            vertices: vec![Vertex2D::default(); descriptor.initial_vertex_capacity as usize],
            indices: vec![0; descriptor.initial_index_capacity as usize],
            vertex_write_pos: 0,
            index_write_pos: 0,
            batches: vec![BatchRecord::default()],
            vertex_cursor: RingCursor::new(descriptor.vertex_buffer_capacity),
            index_cursor: RingCursor::new(descriptor.index_buffer_capacity),
            descriptor,
        }
    }

    /// Reserve writable space for one primitive.
    ///
    /// Grows the CPU staging arrays as needed (next power of two, up to
    /// the descriptor ceiling) and seals the current batch when the
    /// request would overflow the GPU buffer capacity, notifying
    /// `commands` so the rebind is ordered after the sealed batch's
    /// draws.
    ///
    /// Returns `None` when the request cannot be satisfied this frame;
    /// the caller drops the primitive, it is never fatal.
    pub fn request<'a>(
        &'a mut self,
        vertex_count: u32,
        index_count: u32,
        commands: &mut CommandRecorder,
    ) -> Option<VertexBufferRegion<'a>> {
        profile_function!();

        // A request no batch could ever hold cannot be split either.
        if self.descriptor.vertex_buffer_capacity < vertex_count
            || self.descriptor.index_buffer_capacity < index_count
        {
            tracing::warn!(
                vertex_count,
                index_count,
                "geometry request exceeds batch capacity, dropping primitive"
            );
            return None;
        }

        if !self.grow_vertices(self.vertex_write_pos + vertex_count)
            || !self.grow_indices(self.index_write_pos + index_count)
        {
            tracing::warn!(
                vertex_count,
                index_count,
                "geometry staging exhausted, dropping primitive"
            );
            return None;
        }

        // batches is never empty
        let last = self.batches.last().unwrap();
        if self.descriptor.vertex_buffer_capacity < last.vertex_count + vertex_count
            || self.descriptor.index_buffer_capacity < last.index_count + index_count
        {
            commands.push_update_buffers(self.batches.len() as u32);
            self.batches.push(BatchRecord::default());
        }

        let batch = self.batches.last_mut().unwrap();
        let index_offset = batch.vertex_count;
        batch.vertex_count += vertex_count;
        batch.index_count += index_count;

        let vertex_start = self.vertex_write_pos as usize;
        let index_start = self.index_write_pos as usize;
        self.vertex_write_pos += vertex_count;
        self.index_write_pos += index_count;

        Some(VertexBufferRegion {
            vertices: &mut self.vertices[vertex_start..vertex_start + vertex_count as usize],
            indices: &mut self.indices[index_start..index_start + index_count as usize],
            index_offset,
        })
    }

    fn grow_vertices(&mut self, required: u32) -> bool {
        if (self.vertices.len() as u32) < required {
            if self.descriptor.max_vertex_capacity < required {
                return false;
            }
            let new_len = required
                .next_power_of_two()
                .min(self.descriptor.max_vertex_capacity);
            self.vertices.resize(new_len as usize, Vertex2D::default());
        }
        true
    }

    fn grow_indices(&mut self, required: u32) -> bool {
        if (self.indices.len() as u32) < required {
            if self.descriptor.max_index_capacity < required {
                return false;
            }
            let new_len = required
                .next_power_of_two()
                .min(self.descriptor.max_index_capacity);
            self.indices.resize(new_len as usize, 0);
        }
        true
    }

    /// Bind the GPU vertex/index buffers. Done once per frame regardless
    /// of batch count.
    pub fn set_buffers(&self, backend: &mut dyn RenderBackend) {
        backend.bind_geometry_buffers();
    }

    /// Transfer one batch's staged geometry into the GPU buffers.
    ///
    /// Each stream reserves space on its persistent ring cursor; a
    /// reservation that no longer fits discards the whole buffer and
    /// restarts at zero, otherwise the write appends without touching
    /// regions earlier draws may still be reading.
    pub fn commit_buffers(&mut self, batch_index: u32, backend: &mut dyn RenderBackend) -> BatchInfo {
        profile_function!();
        debug_assert!((batch_index as usize) < self.batches.len());

        let mut vertex_read = 0u32;
        let mut index_read = 0u32;
        for batch in &self.batches[..batch_index as usize] {
            vertex_read += batch.vertex_count;
            index_read += batch.index_count;
        }
        let batch = self.batches[batch_index as usize];

        let mut info = BatchInfo::default();

        if batch.vertex_count != 0 {
            let reservation = self.vertex_cursor.reserve(batch.vertex_count);
            let mode = if reservation.needs_discard {
                MapMode::Discard
            } else {
                MapMode::Append
            };
            let start = vertex_read as usize;
            backend.write_vertices(
                mode,
                reservation.offset,
                &self.vertices[start..start + batch.vertex_count as usize],
            );
            info.base_vertex_location = reservation.offset;
        }

        if batch.index_count != 0 {
            let reservation = self.index_cursor.reserve(batch.index_count);
            let mode = if reservation.needs_discard {
                MapMode::Discard
            } else {
                MapMode::Append
            };
            let start = index_read as usize;
            backend.write_indices(
                mode,
                reservation.offset,
                &self.indices[start..start + batch.index_count as usize],
            );
            info.index_count = batch.index_count;
            info.start_index_location = reservation.offset;
        }

        info
    }

    /// Begin a new frame: forget batch records and CPU write positions.
    /// The GPU ring cursors persist until a wrap forces a discard.
    pub fn reset(&mut self) {
        self.batches.clear();
        self.batches.push(BatchRecord::default());
        self.vertex_write_pos = 0;
        self.index_write_pos = 0;
    }

    /// Batch records written so far this frame.
    pub fn batches(&self) -> &[BatchRecord] {
        &self.batches
    }

    /// Total vertices staged this frame.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_write_pos
    }

    /// Total indices staged this frame.
    pub fn index_count(&self) -> u32 {
        self.index_write_pos
    }

    pub fn descriptor(&self) -> &GeometryArenaDescriptor {
        &self.descriptor
    }
}

impl Default for GeometryArena {
    fn default() -> Self {
        Self::new(GeometryArenaDescriptor::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, Command, CommandKind};

    fn small_arena() -> GeometryArena {
        GeometryArena::new(GeometryArenaDescriptor {
            initial_vertex_capacity: 8,
            initial_index_capacity: 8,
            max_vertex_capacity: 64,
            max_index_capacity: 64,
            vertex_buffer_capacity: 16,
            index_buffer_capacity: 24,
        })
    }

    #[test]
    fn test_request_returns_batch_local_offsets() {
        let mut arena = small_arena();
        let mut recorder = CommandRecorder::new();

        let region = arena.request(4, 6, &mut recorder).unwrap();
        assert_eq!(region.vertices.len(), 4);
        assert_eq!(region.indices.len(), 6);
        assert_eq!(region.index_offset, 0);

        let region = arena.request(4, 6, &mut recorder).unwrap();
        assert_eq!(region.index_offset, 4);

        assert_eq!(arena.batches().len(), 1);
        assert_eq!(arena.batches()[0], BatchRecord {
            vertex_count: 8,
            index_count: 12,
        });
    }

    #[test]
    fn test_staging_grows_to_next_power_of_two() {
        let mut arena = small_arena();
        let mut recorder = CommandRecorder::new();

        for _ in 0..3 {
            arena.request(3, 3, &mut recorder).unwrap();
        }
        // 9 vertices staged; backing array doubled to 16
        assert_eq!(arena.vertex_count(), 9);
        assert_eq!(arena.vertices.len(), 16);
    }

    #[test]
    fn test_overflow_seals_batch_and_notifies_recorder() {
        let mut arena = small_arena();
        let mut recorder = CommandRecorder::new();
        let recorded_before = recorder.commands().len();

        arena.request(10, 12, &mut recorder).unwrap();
        // 10 + 10 > 16: the current batch is sealed and a rebind recorded
        let region = arena.request(10, 12, &mut recorder).unwrap();
        assert_eq!(region.index_offset, 0);

        assert_eq!(arena.batches().len(), 2);
        assert_eq!(arena.batches()[0].vertex_count, 10);
        assert_eq!(arena.batches()[1].vertex_count, 10);

        let recorded: Vec<Command> = recorder.commands()[recorded_before..].to_vec();
        assert_eq!(recorded, vec![Command::new(CommandKind::UpdateBuffers, 1)]);
    }

    #[test]
    fn test_batches_never_exceed_hardware_capacity() {
        let mut arena = small_arena();
        let mut recorder = CommandRecorder::new();

        for _ in 0..10 {
            arena.request(3, 5, &mut recorder).unwrap();
        }

        for batch in arena.batches() {
            assert!(batch.vertex_count <= arena.descriptor().vertex_buffer_capacity);
            assert!(batch.index_count <= arena.descriptor().index_buffer_capacity);
        }
        let total: u32 = arena.batches().iter().map(|batch| batch.vertex_count).sum();
        assert_eq!(total, 30);
    }

    #[test]
    fn test_staging_exhaustion_is_soft() {
        let mut arena = small_arena();
        let mut recorder = CommandRecorder::new();

        // max_vertex_capacity = 64 but each batch holds 16
        for _ in 0..8 {
            assert!(arena.request(8, 8, &mut recorder).is_some());
        }
        assert!(arena.request(8, 8, &mut recorder).is_none());

        // The failed request left no partial state behind
        assert_eq!(arena.vertex_count(), 64);
        let total: u32 = arena.batches().iter().map(|batch| batch.vertex_count).sum();
        assert_eq!(total, 64);
    }

    #[test]
    fn test_oversized_request_is_rejected() {
        let mut arena = small_arena();
        let mut recorder = CommandRecorder::new();

        assert!(arena.request(17, 6, &mut recorder).is_none());
        assert!(arena.request(4, 25, &mut recorder).is_none());
        assert_eq!(arena.batches().len(), 1);
        assert_eq!(arena.batches()[0], BatchRecord::default());
    }

    #[test]
    fn test_reset_clears_frame_state_only() {
        let mut arena = small_arena();
        let mut recorder = CommandRecorder::new();

        arena.request(4, 6, &mut recorder).unwrap();
        arena.reset();

        assert_eq!(arena.vertex_count(), 0);
        assert_eq!(arena.index_count(), 0);
        assert_eq!(arena.batches(), &[BatchRecord::default()]);
    }

    #[test]
    fn test_region_writes_land_in_staging() {
        let mut arena = small_arena();
        let mut recorder = CommandRecorder::new();

        let region = arena.request(3, 3, &mut recorder).unwrap();
        let color = Color::RED;
        region.vertices[0] = Vertex2D::new([1.0, 2.0], [0.0, 0.0], color);
        region.indices.copy_from_slice(&[0, 1, 2]);

        assert_eq!(arena.vertices[0].position, [1.0, 2.0]);
        assert_eq!(&arena.indices[..3], &[0, 1, 2]);
    }
}
