//! Repeating-pattern fill parameters.

use bytemuck::{Pod, Zeroable};

use crate::Color;

/// Parameters for pattern-filled primitives, consumed by the pixel stage.
///
/// The struct is an opaque, equality-compared payload to the command
/// stream; `#[repr(C)]` + `Pod` so backends can copy it into a constant
/// buffer directly.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct PatternParams {
    /// Row-major 2x3 transform applied to pattern UV coordinates.
    pub uv_transform: [f32; 6],
    /// Secondary color drawn between pattern elements.
    pub background: Color,
}

impl PatternParams {
    /// Identity UV transform over a transparent background.
    pub const IDENTITY: PatternParams = PatternParams {
        uv_transform: [1.0, 0.0, 0.0, 0.0, 1.0, 0.0],
        background: Color::TRANSPARENT,
    };
}

impl Default for PatternParams {
    fn default() -> Self {
        Self::IDENTITY
    }
}
