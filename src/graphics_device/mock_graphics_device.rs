/// Mock graphics device for tests — no GPU required.
///
/// Buffers are backed by plain `Vec<u8>` stores, and the device counts
/// every creation so tests can assert cache behavior (e.g. a second
/// `load_program` call must not link again).

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use crate::error::Result;
use crate::engine_bail;
use super::buffer::{Buffer, BufferDesc, BufferUsage};
use super::framebuffer::{Framebuffer, FramebufferDesc};
use super::graphics_device::GraphicsDevice;
use super::shader::{Program, Shader, ShaderDesc, ShaderStage};
use super::texture::{Texture, TextureDesc, TextureFormat, TextureKind};

// ===== MOCK TEXTURE =====

pub struct MockTexture {
    pub desc: TextureDesc,
}

impl Texture for MockTexture {
    fn width(&self) -> u32 { self.desc.width }
    fn height(&self) -> u32 { self.desc.height }
    fn kind(&self) -> TextureKind { self.desc.kind }
    fn format(&self) -> TextureFormat { self.desc.format }
    fn array_layers(&self) -> u32 { self.desc.array_layers }
    fn mip_levels(&self) -> u32 { self.desc.mip_levels }
}

// ===== MOCK BUFFER =====

/// In-memory buffer enforcing the map/write/unmap discipline for
/// uniform buffers: writes while unmapped are rejected, as are writes
/// past the end of the store.
pub struct MockBuffer {
    usage: BufferUsage,
    store: Mutex<Vec<u8>>,
    mapped: AtomicBool,
}

impl MockBuffer {
    pub fn new(desc: &BufferDesc) -> Result<Self> {
        let mut store = vec![0u8; desc.size as usize];
        if let Some(data) = &desc.data {
            if data.len() as u64 > desc.size {
                engine_bail!("nebula::MockBuffer", InvalidResource,
                    "Initial data ({} bytes) exceeds buffer size ({})",
                    data.len(), desc.size);
            }
            store[..data.len()].copy_from_slice(data);
        }
        Ok(Self {
            usage: desc.usage,
            store: Mutex::new(store),
            mapped: AtomicBool::new(false),
        })
    }

    /// Whether a write window is currently open (test inspection).
    pub fn is_mapped(&self) -> bool {
        self.mapped.load(Ordering::SeqCst)
    }

    /// Snapshot of the backing store (test inspection).
    pub fn contents(&self) -> Vec<u8> {
        self.store.lock().unwrap().clone()
    }
}

impl Buffer for MockBuffer {
    fn size(&self) -> u64 {
        self.store.lock().unwrap().len() as u64
    }

    fn usage(&self) -> BufferUsage {
        self.usage
    }

    fn map_write(&self) -> Result<()> {
        if self.mapped.swap(true, Ordering::SeqCst) {
            engine_bail!("nebula::MockBuffer", InvalidResource,
                "Buffer is already mapped");
        }
        Ok(())
    }

    fn unmap(&self) {
        self.mapped.store(false, Ordering::SeqCst);
    }

    fn write(&self, offset: u64, data: &[u8]) -> Result<()> {
        if self.usage == BufferUsage::Uniform && !self.is_mapped() {
            engine_bail!("nebula::MockBuffer", InvalidResource,
                "Write to unmapped uniform buffer");
        }
        let mut store = self.store.lock().unwrap();
        let end = offset as usize + data.len();
        if end > store.len() {
            engine_bail!("nebula::MockBuffer", InvalidResource,
                "Write at offset {} with size {} exceeds buffer size {}",
                offset, data.len(), store.len());
        }
        store[offset as usize..end].copy_from_slice(data);
        Ok(())
    }
}

// ===== MOCK FRAMEBUFFER =====

pub struct MockFramebuffer {
    width: u32,
    height: u32,
    color_count: usize,
    has_depth: bool,
}

impl Framebuffer for MockFramebuffer {
    fn width(&self) -> u32 { self.width }
    fn height(&self) -> u32 { self.height }
    fn color_attachment_count(&self) -> usize { self.color_count }
    fn has_depth_attachment(&self) -> bool { self.has_depth }
}

// ===== MOCK SHADER / PROGRAM =====

pub struct MockShader {
    stage: ShaderStage,
    path: String,
}

impl Shader for MockShader {
    fn stage(&self) -> ShaderStage { self.stage }
    fn path(&self) -> &str { &self.path }
}

pub struct MockProgram {
    shader_count: usize,
}

impl Program for MockProgram {
    fn shader_count(&self) -> usize { self.shader_count }
}

// ===== MOCK DEVICE =====

/// Creation counters for cache-behavior assertions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MockCounters {
    pub textures_created: usize,
    pub framebuffers_created: usize,
    pub buffers_created: usize,
    pub shaders_compiled: usize,
    pub programs_linked: usize,
}

pub struct MockGraphicsDevice {
    counters: Mutex<MockCounters>,
}

impl MockGraphicsDevice {
    pub fn new() -> Self {
        Self {
            counters: Mutex::new(MockCounters::default()),
        }
    }

    pub fn counters(&self) -> MockCounters {
        *self.counters.lock().unwrap()
    }
}

impl GraphicsDevice for MockGraphicsDevice {
    fn create_texture(&self, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        self.counters.lock().unwrap().textures_created += 1;
        Ok(Arc::new(MockTexture { desc }))
    }

    fn create_framebuffer(&self, desc: FramebufferDesc) -> Result<Arc<dyn Framebuffer>> {
        self.counters.lock().unwrap().framebuffers_created += 1;
        Ok(Arc::new(MockFramebuffer {
            width: desc.width,
            height: desc.height,
            color_count: desc.color_attachments.len(),
            has_depth: desc.depth_attachment.is_some(),
        }))
    }

    fn create_buffer(&self, desc: BufferDesc) -> Result<Arc<dyn Buffer>> {
        self.counters.lock().unwrap().buffers_created += 1;
        Ok(Arc::new(MockBuffer::new(&desc)?))
    }

    fn compile_shader(&self, desc: ShaderDesc) -> Result<Arc<dyn Shader>> {
        self.counters.lock().unwrap().shaders_compiled += 1;
        Ok(Arc::new(MockShader {
            stage: desc.stage,
            path: desc.path,
        }))
    }

    fn link_program(&self, shaders: &[Arc<dyn Shader>]) -> Result<Arc<dyn Program>> {
        self.counters.lock().unwrap().programs_linked += 1;
        Ok(Arc::new(MockProgram {
            shader_count: shaders.len(),
        }))
    }
}

#[cfg(test)]
#[path = "mock_graphics_device_tests.rs"]
mod tests;
