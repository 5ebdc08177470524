//! Minimal-command serialization of state changes and draws.
//!
//! The recorder accumulates one frame of drawing. Every state push is
//! compared against the live value and against the last committed value,
//! so the stream only ever contains state changes that are visible at
//! replay time; consecutive draws under one state coalesce into a single
//! draw command. The stream is replayed strictly in order.

use glam::Affine2;
use lucent_core::alloc::BitSet64;
use lucent_core::profiling::profile_function;

use crate::{
    BlendMode, Category, CategoryKind, Color, Command, CommandKind, PatternParams,
    RasterizerState, SAMPLER_SLOT_COUNT, SamplerState, ScissorRect, ShaderId, ShaderStage,
    TEXTURE_SLOT_COUNT, TextureId, Viewport,
    track::StateTrack,
};

/// Records one frame of typed draw and state-change commands.
///
/// All operations are total: inputs are plain values and nothing here can
/// fail. Correctness is carried by the stream invariants: no two
/// consecutive commands of one category with equal values, and every draw
/// lands before the state change that follows it.
pub struct CommandRecorder {
    commands: Vec<Command>,
    dirty: BitSet64,

    /// Index count of the draw run being coalesced.
    pending_draw: u32,
    /// Committed index counts, referenced by draw commands.
    draws: Vec<u32>,

    color_mul: StateTrack<Color>,
    color_add: StateTrack<Color>,
    pattern: StateTrack<PatternParams>,
    blend: StateTrack<BlendMode>,
    rasterizer: StateTrack<RasterizerState>,
    scissor: StateTrack<ScissorRect>,
    viewport: StateTrack<Viewport>,
    vertex_shader: StateTrack<ShaderId>,
    pixel_shader: StateTrack<ShaderId>,

    /// Tracked quantity is the combined product; the operands are only
    /// remembered for recomputation.
    transform: StateTrack<Affine2>,
    local_transform: Affine2,
    camera_transform: Affine2,

    vs_samplers: [StateTrack<SamplerState>; SAMPLER_SLOT_COUNT],
    ps_samplers: [StateTrack<SamplerState>; SAMPLER_SLOT_COUNT],
    vs_textures: [StateTrack<TextureId>; TEXTURE_SLOT_COUNT],
    ps_textures: [StateTrack<TextureId>; TEXTURE_SLOT_COUNT],
}

/// Applies the deduplication rule to one track and keeps the shared dirty
/// mask in sync.
fn push_state<T: Clone + PartialEq>(
    track: &mut StateTrack<T>,
    dirty: &mut BitSet64,
    category: Category,
    value: T,
) {
    let index = category.index() as u32;
    let was_dirty = dirty.contains(index);
    if track.update(value, was_dirty) {
        dirty.insert(index);
    } else {
        dirty.remove(index);
    }
}

impl CommandRecorder {
    pub fn new() -> Self {
        let mut recorder = Self {
            commands: Vec::new(),
            dirty: BitSet64::new(),
            pending_draw: 0,
            draws: Vec::new(),
            color_mul: StateTrack::new(Color::WHITE),
            color_add: StateTrack::new(Color::TRANSPARENT),
            pattern: StateTrack::new(PatternParams::default()),
            blend: StateTrack::new(BlendMode::default()),
            rasterizer: StateTrack::new(RasterizerState::default()),
            scissor: StateTrack::new(ScissorRect::new(0, 0, 0, 0)),
            viewport: StateTrack::new(Viewport::default()),
            vertex_shader: StateTrack::new(ShaderId::NULL),
            pixel_shader: StateTrack::new(ShaderId::NULL),
            transform: StateTrack::new(Affine2::IDENTITY),
            local_transform: Affine2::IDENTITY,
            camera_transform: Affine2::IDENTITY,
            vs_samplers: std::array::from_fn(|_| StateTrack::new(SamplerState::default())),
            ps_samplers: std::array::from_fn(|_| StateTrack::new(SamplerState::default())),
            vs_textures: std::array::from_fn(|_| StateTrack::new(TextureId::NULL)),
            ps_textures: std::array::from_fn(|_| StateTrack::new(TextureId::NULL)),
        };
        recorder.reset();
        recorder
    }

    /// Begin a new frame.
    ///
    /// Every committed-value buffer keeps only its last entry as the new
    /// index 0, the stream is cleared, and a prefix of commands
    /// re-establishing the carried-over state is emitted so the frame
    /// replays independently of whatever the context was left in.
    /// Live values are untouched: frame N+1 starts exactly where frame N
    /// ended.
    pub fn reset(&mut self) {
        profile_function!();

        self.color_mul.reset();
        self.color_add.reset();
        self.pattern.reset();
        self.blend.reset();
        self.rasterizer.reset();
        self.scissor.reset();
        self.viewport.reset();
        self.vertex_shader.reset();
        self.pixel_shader.reset();
        self.transform.reset();
        for track in &mut self.vs_samplers {
            track.reset();
        }
        for track in &mut self.ps_samplers {
            track.reset();
        }
        for track in &mut self.vs_textures {
            track.reset();
        }
        for track in &mut self.ps_textures {
            track.reset();
        }

        self.draws.clear();
        self.pending_draw = 0;
        self.dirty.clear();

        self.commands.clear();
        self.commands.push(Command::new(CommandKind::SetBuffers, 0));
        self.commands.push(Command::new(CommandKind::UpdateBuffers, 0));
        for index in 0..Category::COUNT as u32 {
            self.commands.push(Command::new(
                CommandKind::State(Category::from_index(index)),
                0,
            ));
        }
    }

    /// Record a draw of `index_count` indices under the current state.
    ///
    /// If any state changed since the last flush, the pending draw run is
    /// closed first: those draws belong to the old state.
    pub fn push_draw(&mut self, index_count: u32) {
        if !self.dirty.is_empty() {
            self.flush();
        }
        self.pending_draw += index_count;
    }

    /// Emit the pending draw run, then one command per dirty category in
    /// canonical (ascending id) order, and clear both.
    pub fn flush(&mut self) {
        profile_function!();

        if self.pending_draw != 0 {
            self.draws.push(self.pending_draw);
            self.commands.push(Command::new(
                CommandKind::Draw,
                (self.draws.len() - 1) as u32,
            ));
            self.pending_draw = 0;
        }

        let dirty = self.dirty;
        for index in dirty.iter() {
            let category = Category::from_index(index);
            let buffer_index = self.commit(category);
            self.commands
                .push(Command::new(CommandKind::State(category), buffer_index));
        }
        self.dirty.clear();
    }

    /// Force a flush and insert a buffer-rebind command for `batch_index`.
    ///
    /// Called by the geometry arena when it seals a batch mid-frame, so
    /// the rebind lands after every draw recorded into the sealed batch.
    pub fn push_update_buffers(&mut self, batch_index: u32) {
        self.flush();
        self.commands
            .push(Command::new(CommandKind::UpdateBuffers, batch_index));
    }

    pub fn push_color_mul(&mut self, color: Color) {
        push_state(&mut self.color_mul, &mut self.dirty, Category::COLOR_MUL, color);
    }

    pub fn push_color_add(&mut self, color: Color) {
        push_state(&mut self.color_add, &mut self.dirty, Category::COLOR_ADD, color);
    }

    pub fn push_pattern_params(&mut self, params: PatternParams) {
        push_state(&mut self.pattern, &mut self.dirty, Category::PATTERN, params);
    }

    pub fn push_blend_mode(&mut self, blend: BlendMode) {
        push_state(&mut self.blend, &mut self.dirty, Category::BLEND, blend);
    }

    pub fn push_rasterizer_state(&mut self, rasterizer: RasterizerState) {
        push_state(
            &mut self.rasterizer,
            &mut self.dirty,
            Category::RASTERIZER,
            rasterizer,
        );
    }

    pub fn push_scissor_rect(&mut self, rect: ScissorRect) {
        push_state(&mut self.scissor, &mut self.dirty, Category::SCISSOR, rect);
    }

    pub fn push_viewport(&mut self, viewport: Viewport) {
        push_state(&mut self.viewport, &mut self.dirty, Category::VIEWPORT, viewport);
    }

    pub fn push_vertex_shader(&mut self, shader: ShaderId) {
        push_state(
            &mut self.vertex_shader,
            &mut self.dirty,
            Category::VERTEX_SHADER,
            shader,
        );
    }

    pub fn push_pixel_shader(&mut self, shader: ShaderId) {
        push_state(
            &mut self.pixel_shader,
            &mut self.dirty,
            Category::PIXEL_SHADER,
            shader,
        );
    }

    pub fn push_sampler_state(&mut self, stage: ShaderStage, slot: usize, sampler: SamplerState) {
        let track = match stage {
            ShaderStage::Vertex => &mut self.vs_samplers[slot],
            ShaderStage::Pixel => &mut self.ps_samplers[slot],
        };
        push_state(track, &mut self.dirty, Category::sampler(stage, slot), sampler);
    }

    pub fn push_texture(&mut self, stage: ShaderStage, slot: usize, texture: TextureId) {
        let track = match stage {
            ShaderStage::Vertex => &mut self.vs_textures[slot],
            ShaderStage::Pixel => &mut self.ps_textures[slot],
        };
        push_state(track, &mut self.dirty, Category::texture(stage, slot), texture);
    }

    /// Set the local (model) transform.
    ///
    /// The tracked quantity is the combined local-then-camera product; a
    /// local change that leaves the product unchanged emits nothing.
    pub fn push_local_transform(&mut self, local: Affine2) {
        if self.local_transform == local {
            return;
        }
        self.local_transform = local;
        let combined = self.camera_transform * local;
        push_state(&mut self.transform, &mut self.dirty, Category::TRANSFORM, combined);
    }

    /// Set the camera (view) transform. See [`push_local_transform`].
    ///
    /// [`push_local_transform`]: Self::push_local_transform
    pub fn push_camera_transform(&mut self, camera: Affine2) {
        if self.camera_transform == camera {
            return;
        }
        self.camera_transform = camera;
        let combined = camera * self.local_transform;
        push_state(&mut self.transform, &mut self.dirty, Category::TRANSFORM, combined);
    }

    fn commit(&mut self, category: Category) -> u32 {
        match category.kind() {
            CategoryKind::ColorMul => self.color_mul.commit(),
            CategoryKind::ColorAdd => self.color_add.commit(),
            CategoryKind::Pattern => self.pattern.commit(),
            CategoryKind::Blend => self.blend.commit(),
            CategoryKind::Rasterizer => self.rasterizer.commit(),
            CategoryKind::Scissor => self.scissor.commit(),
            CategoryKind::Viewport => self.viewport.commit(),
            CategoryKind::VertexShader => self.vertex_shader.commit(),
            CategoryKind::PixelShader => self.pixel_shader.commit(),
            CategoryKind::Transform => self.transform.commit(),
            CategoryKind::Sampler { stage, slot } => match stage {
                ShaderStage::Vertex => self.vs_samplers[slot].commit(),
                ShaderStage::Pixel => self.ps_samplers[slot].commit(),
            },
            CategoryKind::Texture { stage, slot } => match stage {
                ShaderStage::Vertex => self.vs_textures[slot].commit(),
                ShaderStage::Pixel => self.ps_textures[slot].commit(),
            },
        }
    }

    /// The ordered command stream recorded so far.
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Index count of a committed draw command.
    pub fn draw(&self, index: u32) -> u32 {
        self.draws[index as usize]
    }

    /// Index count of the draw run still being coalesced.
    pub fn pending_draw_count(&self) -> u32 {
        self.pending_draw
    }

    pub fn current_color_mul(&self) -> Color {
        *self.color_mul.current()
    }

    pub fn get_color_mul(&self, index: u32) -> Color {
        *self.color_mul.get(index)
    }

    pub fn current_color_add(&self) -> Color {
        *self.color_add.current()
    }

    pub fn get_color_add(&self, index: u32) -> Color {
        *self.color_add.get(index)
    }

    pub fn current_pattern_params(&self) -> PatternParams {
        *self.pattern.current()
    }

    pub fn get_pattern_params(&self, index: u32) -> PatternParams {
        *self.pattern.get(index)
    }

    pub fn current_blend_mode(&self) -> BlendMode {
        *self.blend.current()
    }

    pub fn get_blend_mode(&self, index: u32) -> BlendMode {
        *self.blend.get(index)
    }

    pub fn current_rasterizer_state(&self) -> RasterizerState {
        *self.rasterizer.current()
    }

    pub fn get_rasterizer_state(&self, index: u32) -> RasterizerState {
        *self.rasterizer.get(index)
    }

    pub fn current_scissor_rect(&self) -> ScissorRect {
        *self.scissor.current()
    }

    pub fn get_scissor_rect(&self, index: u32) -> ScissorRect {
        *self.scissor.get(index)
    }

    pub fn current_viewport(&self) -> Viewport {
        *self.viewport.current()
    }

    pub fn get_viewport(&self, index: u32) -> Viewport {
        *self.viewport.get(index)
    }

    pub fn current_vertex_shader(&self) -> ShaderId {
        *self.vertex_shader.current()
    }

    pub fn get_vertex_shader(&self, index: u32) -> ShaderId {
        *self.vertex_shader.get(index)
    }

    pub fn current_pixel_shader(&self) -> ShaderId {
        *self.pixel_shader.current()
    }

    pub fn get_pixel_shader(&self, index: u32) -> ShaderId {
        *self.pixel_shader.get(index)
    }

    pub fn current_local_transform(&self) -> Affine2 {
        self.local_transform
    }

    pub fn current_camera_transform(&self) -> Affine2 {
        self.camera_transform
    }

    pub fn current_combined_transform(&self) -> Affine2 {
        *self.transform.current()
    }

    pub fn get_transform(&self, index: u32) -> Affine2 {
        *self.transform.get(index)
    }

    pub fn current_sampler_state(&self, stage: ShaderStage, slot: usize) -> SamplerState {
        match stage {
            ShaderStage::Vertex => *self.vs_samplers[slot].current(),
            ShaderStage::Pixel => *self.ps_samplers[slot].current(),
        }
    }

    pub fn get_sampler_state(&self, stage: ShaderStage, slot: usize, index: u32) -> SamplerState {
        match stage {
            ShaderStage::Vertex => *self.vs_samplers[slot].get(index),
            ShaderStage::Pixel => *self.ps_samplers[slot].get(index),
        }
    }

    pub fn current_texture(&self, stage: ShaderStage, slot: usize) -> TextureId {
        match stage {
            ShaderStage::Vertex => *self.vs_textures[slot].current(),
            ShaderStage::Pixel => *self.ps_textures[slot].current(),
        }
    }

    pub fn get_texture(&self, stage: ShaderStage, slot: usize, index: u32) -> TextureId {
        match stage {
            ShaderStage::Vertex => *self.vs_textures[slot].get(index),
            ShaderStage::Pixel => *self.ps_textures[slot].get(index),
        }
    }
}

impl Default for CommandRecorder {
    fn default() -> Self {
        Self::new()
    }
}
