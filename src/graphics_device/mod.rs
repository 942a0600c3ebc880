//! Graphics device abstraction — the contract this core places on the
//! backend layer beneath it.
//!
//! All types are object-safe traits created through
//! `Arc<Mutex<dyn GraphicsDevice>>`; backends (Vulkan, GL, ...) provide
//! the concrete implementations. The device is expected to provide the
//! CPU/GPU synchronization that makes the scoped uniform map/unmap
//! windows safe (double buffering or fencing).

pub mod graphics_device;
pub mod texture;
pub mod buffer;
pub mod framebuffer;
pub mod shader;

pub use graphics_device::*;
pub use texture::*;
pub use buffer::*;
pub use framebuffer::*;
pub use shader::*;

// Mock graphics device for tests (no GPU required)
#[cfg(test)]
pub mod mock_graphics_device;
