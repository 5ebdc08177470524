//! The dense id space of independently-tracked render state categories.
//!
//! Every render parameter the command stream deduplicates is one category.
//! Per-slot sampler and texture bindings are dense sub-ranges of the id
//! space (`base + slot`) rather than distinct fields, so slot-indexed
//! state shares one code path and the whole space fits a single
//! [`BitSet64`](lucent_core::alloc::BitSet64) dirty mask.

use static_assertions::const_assert;

/// Sampler slots available per shader stage.
pub const SAMPLER_SLOT_COUNT: usize = 8;

/// Texture slots available per shader stage.
pub const TEXTURE_SLOT_COUNT: usize = 8;

/// The shader stage a sampler or texture slot belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    Vertex,
    Pixel,
}

/// Identifier of one tracked state category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category(u8);

impl Category {
    pub const COLOR_MUL: Category = Category(0);
    pub const COLOR_ADD: Category = Category(1);
    pub const PATTERN: Category = Category(2);
    pub const BLEND: Category = Category(3);
    pub const RASTERIZER: Category = Category(4);
    pub const SCISSOR: Category = Category(5);
    pub const VIEWPORT: Category = Category(6);
    pub const VERTEX_SHADER: Category = Category(7);
    pub const PIXEL_SHADER: Category = Category(8);
    pub const TRANSFORM: Category = Category(9);

    const VS_SAMPLER_BASE: u8 = 10;
    const PS_SAMPLER_BASE: u8 = Self::VS_SAMPLER_BASE + SAMPLER_SLOT_COUNT as u8;
    const VS_TEXTURE_BASE: u8 = Self::PS_SAMPLER_BASE + SAMPLER_SLOT_COUNT as u8;
    const PS_TEXTURE_BASE: u8 = Self::VS_TEXTURE_BASE + TEXTURE_SLOT_COUNT as u8;

    /// Total number of categories.
    pub const COUNT: usize = Self::PS_TEXTURE_BASE as usize + TEXTURE_SLOT_COUNT;

    /// The sampler category for a stage/slot pair.
    #[inline]
    pub fn sampler(stage: ShaderStage, slot: usize) -> Category {
        debug_assert!(slot < SAMPLER_SLOT_COUNT);
        let base = match stage {
            ShaderStage::Vertex => Self::VS_SAMPLER_BASE,
            ShaderStage::Pixel => Self::PS_SAMPLER_BASE,
        };
        Category(base + slot as u8)
    }

    /// The texture category for a stage/slot pair.
    #[inline]
    pub fn texture(stage: ShaderStage, slot: usize) -> Category {
        debug_assert!(slot < TEXTURE_SLOT_COUNT);
        let base = match stage {
            ShaderStage::Vertex => Self::VS_TEXTURE_BASE,
            ShaderStage::Pixel => Self::PS_TEXTURE_BASE,
        };
        Category(base + slot as u8)
    }

    /// Rebuild a category from its dense index.
    #[inline]
    pub fn from_index(index: u32) -> Category {
        debug_assert!((index as usize) < Self::COUNT);
        Category(index as u8)
    }

    /// The dense index of this category.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Classify this category for typed dispatch.
    pub fn kind(self) -> CategoryKind {
        match self {
            Self::COLOR_MUL => CategoryKind::ColorMul,
            Self::COLOR_ADD => CategoryKind::ColorAdd,
            Self::PATTERN => CategoryKind::Pattern,
            Self::BLEND => CategoryKind::Blend,
            Self::RASTERIZER => CategoryKind::Rasterizer,
            Self::SCISSOR => CategoryKind::Scissor,
            Self::VIEWPORT => CategoryKind::Viewport,
            Self::VERTEX_SHADER => CategoryKind::VertexShader,
            Self::PIXEL_SHADER => CategoryKind::PixelShader,
            Self::TRANSFORM => CategoryKind::Transform,
            Category(id) if id < Self::VS_TEXTURE_BASE => {
                let (stage, base) = if id < Self::PS_SAMPLER_BASE {
                    (ShaderStage::Vertex, Self::VS_SAMPLER_BASE)
                } else {
                    (ShaderStage::Pixel, Self::PS_SAMPLER_BASE)
                };
                CategoryKind::Sampler {
                    stage,
                    slot: (id - base) as usize,
                }
            }
            Category(id) => {
                debug_assert!((id as usize) < Self::COUNT);
                let (stage, base) = if id < Self::PS_TEXTURE_BASE {
                    (ShaderStage::Vertex, Self::VS_TEXTURE_BASE)
                } else {
                    (ShaderStage::Pixel, Self::PS_TEXTURE_BASE)
                };
                CategoryKind::Texture {
                    stage,
                    slot: (id - base) as usize,
                }
            }
        }
    }
}

// The dirty mask is a single 64-bit set.
const_assert!(Category::COUNT <= 64);

/// A [`Category`] resolved into its typed meaning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    ColorMul,
    ColorAdd,
    Pattern,
    Blend,
    Rasterizer,
    Scissor,
    Viewport,
    VertexShader,
    PixelShader,
    Transform,
    Sampler { stage: ShaderStage, slot: usize },
    Texture { stage: ShaderStage, slot: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_count() {
        assert_eq!(
            Category::COUNT,
            10 + 2 * SAMPLER_SLOT_COUNT + 2 * TEXTURE_SLOT_COUNT
        );
    }

    #[test]
    fn test_slot_categories_are_dense_and_disjoint() {
        let mut seen = std::collections::HashSet::new();
        for id in 0..Category::COUNT as u32 {
            assert!(seen.insert(Category::from_index(id).index()));
        }
        for slot in 0..SAMPLER_SLOT_COUNT {
            for stage in [ShaderStage::Vertex, ShaderStage::Pixel] {
                let category = Category::sampler(stage, slot);
                assert_eq!(category.kind(), CategoryKind::Sampler { stage, slot });
            }
        }
        for slot in 0..TEXTURE_SLOT_COUNT {
            for stage in [ShaderStage::Vertex, ShaderStage::Pixel] {
                let category = Category::texture(stage, slot);
                assert_eq!(category.kind(), CategoryKind::Texture { stage, slot });
            }
        }
    }

    #[test]
    fn test_kind_round_trip_scalars() {
        assert_eq!(Category::BLEND.kind(), CategoryKind::Blend);
        assert_eq!(Category::TRANSFORM.kind(), CategoryKind::Transform);
        assert_eq!(
            Category::from_index(Category::SCISSOR.index() as u32),
            Category::SCISSOR
        );
    }
}
