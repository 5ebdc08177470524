/// A viewport rectangle in pixels, with normalized depth range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub min_depth: f32,
    pub max_depth: f32,
}

impl Viewport {
    /// A viewport covering the given pixel rect with full depth range.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
            min_depth: 0.0,
            max_depth: 1.0,
        }
    }

    /// A zero-sized viewport; backends treat it as "the whole target".
    pub const WHOLE_TARGET: Viewport = Viewport::new(0.0, 0.0, 0.0, 0.0);
}

impl Default for Viewport {
    fn default() -> Self {
        Self::WHOLE_TARGET
    }
}
