/// Texture trait and descriptor.

use bitflags::bitflags;

/// Texture pixel formats used by the core's registry clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureFormat {
    /// 8-bit RGBA, unsigned normalized
    Rgba8Unorm,
    /// 16-bit float RG (BRDF look-up tables)
    Rg16Float,
    /// 16-bit float RGBA (HDR color targets)
    Rgba16Float,
    /// 32-bit float RGBA
    Rgba32Float,
    /// 32-bit float depth (shadow maps, depth targets)
    Depth32Float,
}

impl TextureFormat {
    /// Whether this is a depth format.
    pub fn is_depth(&self) -> bool {
        matches!(self, TextureFormat::Depth32Float)
    }
}

/// 2D texture or cube map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextureKind {
    Tex2d,
    Cube,
}

bitflags! {
    /// How a texture will be used. Backends translate these into
    /// API-specific usage/creation flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct TextureUsage: u32 {
        const SAMPLED          = 1 << 0;
        const COLOR_ATTACHMENT = 1 << 1;
        const DEPTH_ATTACHMENT = 1 << 2;
    }
}

/// Descriptor for creating a texture.
#[derive(Debug, Clone)]
pub struct TextureDesc {
    pub width: u32,
    pub height: u32,
    pub kind: TextureKind,
    pub format: TextureFormat,
    pub usage: TextureUsage,
    /// Array layers (shadow atlas slices; 6 per cube for point lights)
    pub array_layers: u32,
    pub mip_levels: u32,
}

/// Texture resource trait.
///
/// Implemented by backend-specific texture types. Destroyed when the
/// last reference is dropped.
pub trait Texture: Send + Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn kind(&self) -> TextureKind;
    fn format(&self) -> TextureFormat;
    fn array_layers(&self) -> u32;
    fn mip_levels(&self) -> u32;
}
