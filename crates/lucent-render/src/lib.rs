//! Draw-command batching and render-state deduplication.
//!
//! This crate sits between an immediate-mode 2D drawing API and a stateful
//! GPU execution context. Draw requests and state changes are recorded into
//! a [`CommandRecorder`], geometry is staged into capacity-bounded batches
//! by a [`GeometryArena`], and at frame end [`replay`] walks the command
//! stream once, applying it to a [`RenderBackend`].
//!
//! # Frame lifecycle
//!
//! ```ignore
//! use lucent_render::*;
//!
//! // Per frame:
//! recorder.reset();
//! arena.reset();
//!
//! // Scene construction: one request + draw per primitive
//! if let Some(region) = arena.request(4, 6, &mut recorder) {
//!     region.vertices.copy_from_slice(&quad_vertices);
//!     region.indices.copy_from_slice(&quad_indices(region.index_offset));
//!     recorder.push_draw(6);
//! }
//! recorder.push_blend_mode(BlendMode::Additive);
//! // ... more primitives ...
//!
//! // Frame end: close the last draw run, then replay in order
//! recorder.flush();
//! let stats = replay(&recorder, &mut arena, &mut backend);
//! ```
//!
//! State changes are deduplicated: a value equal to the current one is
//! dropped, a change reverted before the next draw never reaches the
//! stream, and consecutive draws under one state coalesce into a single
//! GPU draw call.

mod arena;
mod backend;
mod blend;
mod category;
mod color;
mod command;
mod handles;
mod pattern;
mod raster;
mod recorder;
mod replay;
mod ring;
mod sampler;
mod track;
mod vertex;
mod viewport;

pub use arena::{
    BatchInfo, BatchRecord, GeometryArena, GeometryArenaDescriptor, VertexBufferRegion,
};
pub use backend::{MapMode, RenderBackend};
pub use blend::BlendMode;
pub use category::{
    Category, CategoryKind, SAMPLER_SLOT_COUNT, ShaderStage, TEXTURE_SLOT_COUNT,
};
pub use color::Color;
pub use command::{Command, CommandKind};
pub use handles::{ShaderId, TextureId};
pub use pattern::PatternParams;
pub use raster::{CullMode, FillMode, RasterizerState};
pub use recorder::CommandRecorder;
pub use replay::{ReplayStats, replay};
pub use ring::{Reservation, RingCursor};
pub use sampler::{AddressMode, FilterMode, SamplerState};
pub use vertex::{INDEX_FORMAT, Vertex2D, VertexIndex};
pub use viewport::Viewport;

/// Scissor rectangles are integer pixel rects.
pub type ScissorRect = lucent_core::geometry::Rect<i32>;
