/// Framebuffer trait — groups render target attachments.
///
/// Created once and reused each frame; recreated only when its
/// attachments change (window resize invalidates the default targets).

use std::sync::Arc;
use super::texture::Texture;

/// Descriptor for creating a framebuffer.
pub struct FramebufferDesc {
    /// Color attachments, in attachment-index order
    pub color_attachments: Vec<Arc<dyn Texture>>,
    /// Optional depth attachment
    pub depth_attachment: Option<Arc<dyn Texture>>,
    pub width: u32,
    pub height: u32,
}

/// Framebuffer resource trait.
pub trait Framebuffer: Send + Sync {
    fn width(&self) -> u32;
    fn height(&self) -> u32;
    fn color_attachment_count(&self) -> usize;
    fn has_depth_attachment(&self) -> bool;
}
