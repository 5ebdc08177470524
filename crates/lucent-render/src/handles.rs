//! Stable ids for backend-owned resources.
//!
//! The command stream never holds shader or texture objects, only ids the
//! backend resolves at replay time. Ids only need equality comparison.

/// Shader handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct ShaderId(pub u32);

impl ShaderId {
    /// Null handle; the backend's engine-default shader.
    pub const NULL: Self = Self(0);

    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}

/// Texture handle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(transparent)]
pub struct TextureId(pub u64);

impl TextureId {
    /// Null handle; an unbound slot.
    pub const NULL: Self = Self(0);

    #[inline]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[inline]
    pub const fn is_null(&self) -> bool {
        self.0 == 0
    }
}
