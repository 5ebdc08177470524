//! Rasterizer state for triangle rendering.

/// Triangle fill mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillMode {
    /// Filled triangles.
    #[default]
    Solid,
    /// Edges only. Requires a backend with non-solid polygon mode support.
    Wireframe,
}

/// Face culling mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CullMode {
    /// No culling; both faces are rasterized.
    #[default]
    None,
    /// Cull front-facing triangles.
    Front,
    /// Cull back-facing triangles.
    Back,
}

/// Fixed-function rasterizer configuration tracked per draw run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RasterizerState {
    pub fill_mode: FillMode,
    pub cull_mode: CullMode,
    /// When set, draws are clipped against the current scissor rect.
    pub scissor_enabled: bool,
}

impl RasterizerState {
    /// Convert the fill mode to a wgpu polygon mode.
    pub fn to_polygon_mode(self) -> wgpu::PolygonMode {
        match self.fill_mode {
            FillMode::Solid => wgpu::PolygonMode::Fill,
            FillMode::Wireframe => wgpu::PolygonMode::Line,
        }
    }

    /// Convert the cull mode to a wgpu face selection.
    pub fn to_cull_mode(self) -> Option<wgpu::Face> {
        match self.cull_mode {
            CullMode::None => None,
            CullMode::Front => Some(wgpu::Face::Front),
            CullMode::Back => Some(wgpu::Face::Back),
        }
    }

    /// Convert to a wgpu primitive state for pipeline creation.
    pub fn to_primitive_state(self) -> wgpu::PrimitiveState {
        wgpu::PrimitiveState {
            topology: wgpu::PrimitiveTopology::TriangleList,
            cull_mode: self.to_cull_mode(),
            polygon_mode: self.to_polygon_mode(),
            ..Default::default()
        }
    }
}
