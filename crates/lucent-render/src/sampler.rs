//! Texture sampler state.
//!
//! [`SamplerState`] is the equality-compared value tracked per sampler
//! slot; real backends turn it into an API sampler object via
//! [`SamplerState::to_sampler_descriptor`].

/// Texture filtering mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FilterMode {
    /// Point sampling.
    Nearest,
    /// Bilinear interpolation.
    #[default]
    Linear,
}

impl FilterMode {
    pub fn to_wgpu(self) -> wgpu::FilterMode {
        match self {
            FilterMode::Nearest => wgpu::FilterMode::Nearest,
            FilterMode::Linear => wgpu::FilterMode::Linear,
        }
    }
}

/// Texture coordinate addressing outside `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AddressMode {
    /// Tile the texture.
    Repeat,
    /// Tile with mirroring.
    Mirror,
    /// Clamp to the edge texel.
    #[default]
    Clamp,
}

impl AddressMode {
    pub fn to_wgpu(self) -> wgpu::AddressMode {
        match self {
            AddressMode::Repeat => wgpu::AddressMode::Repeat,
            AddressMode::Mirror => wgpu::AddressMode::MirrorRepeat,
            AddressMode::Clamp => wgpu::AddressMode::ClampToEdge,
        }
    }
}

/// The sampler configuration tracked per shader-stage slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SamplerState {
    pub min_filter: FilterMode,
    pub mag_filter: FilterMode,
    pub mip_filter: FilterMode,
    pub address_u: AddressMode,
    pub address_v: AddressMode,
    /// Anisotropy clamp (1 = disabled).
    pub max_anisotropy: u16,
}

impl SamplerState {
    /// Linear filtering, clamped addressing. The slot default.
    pub const LINEAR_CLAMP: SamplerState = SamplerState {
        min_filter: FilterMode::Linear,
        mag_filter: FilterMode::Linear,
        mip_filter: FilterMode::Linear,
        address_u: AddressMode::Clamp,
        address_v: AddressMode::Clamp,
        max_anisotropy: 1,
    };

    /// Linear filtering, repeating addressing.
    pub const LINEAR_REPEAT: SamplerState = SamplerState {
        address_u: AddressMode::Repeat,
        address_v: AddressMode::Repeat,
        ..Self::LINEAR_CLAMP
    };

    /// Point sampling, repeating addressing.
    pub const NEAREST_REPEAT: SamplerState = SamplerState {
        min_filter: FilterMode::Nearest,
        mag_filter: FilterMode::Nearest,
        mip_filter: FilterMode::Nearest,
        address_u: AddressMode::Repeat,
        address_v: AddressMode::Repeat,
        max_anisotropy: 1,
    };

    /// Convert to a wgpu sampler descriptor.
    pub fn to_sampler_descriptor(self) -> wgpu::SamplerDescriptor<'static> {
        wgpu::SamplerDescriptor {
            label: None,
            address_mode_u: self.address_u.to_wgpu(),
            address_mode_v: self.address_v.to_wgpu(),
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: self.mag_filter.to_wgpu(),
            min_filter: self.min_filter.to_wgpu(),
            mipmap_filter: self.mip_filter.to_wgpu(),
            anisotropy_clamp: self.max_anisotropy,
            ..Default::default()
        }
    }
}

impl Default for SamplerState {
    fn default() -> Self {
        Self::LINEAR_CLAMP
    }
}
