/// GraphicsDevice trait — resource creation factory.

use std::sync::Arc;
use crate::error::Result;
use super::buffer::{Buffer, BufferDesc};
use super::framebuffer::{Framebuffer, FramebufferDesc};
use super::shader::{Program, Shader, ShaderDesc};
use super::texture::{Texture, TextureDesc};

/// Factory for GPU resources.
///
/// Implemented by backend-specific device types. All creation is
/// synchronous; failures surface as [`crate::error::Error::BackendError`]
/// or `InitializationFailed` and are never fatal to this core.
pub trait GraphicsDevice: Send + Sync {
    fn create_texture(&self, desc: TextureDesc) -> Result<Arc<dyn Texture>>;

    fn create_framebuffer(&self, desc: FramebufferDesc) -> Result<Arc<dyn Framebuffer>>;

    fn create_buffer(&self, desc: BufferDesc) -> Result<Arc<dyn Buffer>>;

    /// Compile a shader from its source path.
    fn compile_shader(&self, desc: ShaderDesc) -> Result<Arc<dyn Shader>>;

    /// Link a program from previously compiled shaders.
    fn link_program(&self, shaders: &[Arc<dyn Shader>]) -> Result<Arc<dyn Program>>;
}
