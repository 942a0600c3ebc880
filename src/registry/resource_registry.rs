//! Central registry of named GPU resources.
//!
//! Owns the name -> resource maps (textures, framebuffers), the
//! path-keyed shader/program caches, and the fixed resources every
//! frame uses: the shared quad/cube vertex buffers and the three
//! per-frame uniform buffers.
//!
//! Contract: `create_*` rejects duplicate keys and leaves the stored
//! entry untouched; `destroy_*` is idempotent; lookups return `None`
//! for unknown keys without logging.

use std::mem;
use std::sync::{Arc, Mutex};
use rustc_hash::FxHashMap;
use crate::constants::{MAX_ENTITIES, MAX_VIEWS};
use crate::engine_bail;
use crate::error::Result;
use crate::graphics_device::{
    program_key, Buffer, BufferDesc, BufferUsage, Framebuffer, FramebufferDesc,
    GraphicsDevice, Program, Shader, ShaderDesc, ShaderStage, Texture, TextureDesc,
    TextureFormat, TextureKind, TextureUsage,
};
use crate::registry::UniformBuffer;
use crate::uniforms::{PerEntityUniforms, PerSceneUniforms, PerViewUniforms};
use crate::{engine_debug, engine_info};

const SOURCE: &str = "nebula::Registry";

// ===== FIXED GEOMETRY =====

// Fullscreen quad, triangle strip: position (x, y, z) + uv (u, v).
#[rustfmt::skip]
const QUAD_VERTICES: [f32; 20] = [
    -1.0, -1.0, 0.0,   0.0, 0.0,
     1.0, -1.0, 0.0,   1.0, 0.0,
    -1.0,  1.0, 0.0,   0.0, 1.0,
     1.0,  1.0, 0.0,   1.0, 1.0,
];

// Unit cube centered at the origin, 12 triangles, positions only.
#[rustfmt::skip]
const CUBE_VERTICES: [f32; 108] = [
    // -X
    -0.5, -0.5, -0.5,  -0.5, -0.5,  0.5,  -0.5,  0.5,  0.5,
    -0.5,  0.5,  0.5,  -0.5,  0.5, -0.5,  -0.5, -0.5, -0.5,
    // +X
     0.5, -0.5,  0.5,   0.5, -0.5, -0.5,   0.5,  0.5, -0.5,
     0.5,  0.5, -0.5,   0.5,  0.5,  0.5,   0.5, -0.5,  0.5,
    // -Y
    -0.5, -0.5, -0.5,   0.5, -0.5, -0.5,   0.5, -0.5,  0.5,
     0.5, -0.5,  0.5,  -0.5, -0.5,  0.5,  -0.5, -0.5, -0.5,
    // +Y
    -0.5,  0.5,  0.5,   0.5,  0.5,  0.5,   0.5,  0.5, -0.5,
     0.5,  0.5, -0.5,  -0.5,  0.5, -0.5,  -0.5,  0.5,  0.5,
    // -Z
     0.5, -0.5, -0.5,  -0.5, -0.5, -0.5,  -0.5,  0.5, -0.5,
    -0.5,  0.5, -0.5,   0.5,  0.5, -0.5,   0.5, -0.5, -0.5,
    // +Z
    -0.5, -0.5,  0.5,   0.5, -0.5,  0.5,   0.5,  0.5,  0.5,
     0.5,  0.5,  0.5,  -0.5,  0.5,  0.5,  -0.5, -0.5,  0.5,
];

// ===== REGISTRY =====

/// Registry of named GPU resources plus the fixed per-frame resources.
///
/// Field order is the reverse of creation order so drop-time teardown
/// mirrors initialization.
pub struct ResourceRegistry {
    textures: FxHashMap<String, Arc<dyn Texture>>,
    framebuffers: FxHashMap<String, Arc<dyn Framebuffer>>,
    shader_cache: FxHashMap<String, Arc<dyn Shader>>,
    program_cache: FxHashMap<String, Arc<dyn Program>>,
    per_scene_uniforms: UniformBuffer,
    per_entity_uniforms: UniformBuffer,
    per_view_uniforms: UniformBuffer,
    cube_vertex_buffer: Arc<dyn Buffer>,
    quad_vertex_buffer: Arc<dyn Buffer>,
    device: Arc<Mutex<dyn GraphicsDevice>>,
}

impl ResourceRegistry {
    /// Create the registry and its fixed resources (shared geometry and
    /// the three per-frame uniform buffers).
    pub fn new(device: Arc<Mutex<dyn GraphicsDevice>>) -> Result<Self> {
        let quad_vertex_buffer = {
            let data = bytemuck::cast_slice(&QUAD_VERTICES).to_vec();
            device.lock().unwrap().create_buffer(BufferDesc {
                size: data.len() as u64,
                usage: BufferUsage::Vertex,
                data: Some(data),
            })?
        };

        let cube_vertex_buffer = {
            let data = bytemuck::cast_slice(&CUBE_VERTICES).to_vec();
            device.lock().unwrap().create_buffer(BufferDesc {
                size: data.len() as u64,
                usage: BufferUsage::Vertex,
                data: Some(data),
            })?
        };

        let per_view_uniforms = UniformBuffer::new(
            &device,
            mem::size_of::<PerViewUniforms>() as u64,
            MAX_VIEWS as u64,
        )?;
        let per_entity_uniforms = UniformBuffer::new(
            &device,
            mem::size_of::<PerEntityUniforms>() as u64,
            MAX_ENTITIES as u64,
        )?;
        let per_scene_uniforms =
            UniformBuffer::new(&device, mem::size_of::<PerSceneUniforms>() as u64, 1)?;

        engine_info!(SOURCE, "Resource registry initialized");

        Ok(Self {
            textures: FxHashMap::default(),
            framebuffers: FxHashMap::default(),
            shader_cache: FxHashMap::default(),
            program_cache: FxHashMap::default(),
            per_scene_uniforms,
            per_entity_uniforms,
            per_view_uniforms,
            cube_vertex_buffer,
            quad_vertex_buffer,
            device,
        })
    }

    pub fn device(&self) -> &Arc<Mutex<dyn GraphicsDevice>> {
        &self.device
    }

    // ===== TEXTURES =====

    /// Create a texture under `name`. Rejects duplicate keys.
    pub fn create_texture(&mut self, name: &str, desc: TextureDesc) -> Result<Arc<dyn Texture>> {
        if self.textures.contains_key(name) {
            engine_bail!(SOURCE, DuplicateResource, "texture '{}' already exists", name);
        }

        let texture = self.device.lock().unwrap().create_texture(desc)?;
        self.textures.insert(name.to_string(), Arc::clone(&texture));
        engine_debug!(SOURCE, "Created texture '{}'", name);
        Ok(texture)
    }

    /// Convenience for single-layer 2D textures.
    pub fn create_texture_2d(
        &mut self,
        name: &str,
        width: u32,
        height: u32,
        format: TextureFormat,
        usage: TextureUsage,
    ) -> Result<Arc<dyn Texture>> {
        self.create_texture(
            name,
            TextureDesc {
                width,
                height,
                kind: TextureKind::Tex2d,
                format,
                usage,
                array_layers: 1,
                mip_levels: 1,
            },
        )
    }

    /// Convenience for cube maps (`size` x `size`, 6 faces).
    pub fn create_texture_cube(
        &mut self,
        name: &str,
        size: u32,
        format: TextureFormat,
        usage: TextureUsage,
    ) -> Result<Arc<dyn Texture>> {
        self.create_texture(
            name,
            TextureDesc {
                width: size,
                height: size,
                kind: TextureKind::Cube,
                format,
                usage,
                array_layers: 6,
                mip_levels: 1,
            },
        )
    }

    pub fn texture(&self, name: &str) -> Option<Arc<dyn Texture>> {
        self.textures.get(name).cloned()
    }

    /// Remove `name` from the registry. Idempotent; the resource is
    /// released when the last outside reference drops.
    pub fn destroy_texture(&mut self, name: &str) {
        if self.textures.remove(name).is_some() {
            engine_debug!(SOURCE, "Destroyed texture '{}'", name);
        }
    }

    pub fn texture_count(&self) -> usize {
        self.textures.len()
    }

    // ===== FRAMEBUFFERS =====

    /// Create a framebuffer under `name`. Rejects duplicate keys.
    pub fn create_framebuffer(
        &mut self,
        name: &str,
        desc: FramebufferDesc,
    ) -> Result<Arc<dyn Framebuffer>> {
        if self.framebuffers.contains_key(name) {
            engine_bail!(SOURCE, DuplicateResource, "framebuffer '{}' already exists", name);
        }

        let framebuffer = self.device.lock().unwrap().create_framebuffer(desc)?;
        self.framebuffers.insert(name.to_string(), Arc::clone(&framebuffer));
        engine_debug!(SOURCE, "Created framebuffer '{}'", name);
        Ok(framebuffer)
    }

    pub fn framebuffer(&self, name: &str) -> Option<Arc<dyn Framebuffer>> {
        self.framebuffers.get(name).cloned()
    }

    pub fn destroy_framebuffer(&mut self, name: &str) {
        if self.framebuffers.remove(name).is_some() {
            engine_debug!(SOURCE, "Destroyed framebuffer '{}'", name);
        }
    }

    pub fn framebuffer_count(&self) -> usize {
        self.framebuffers.len()
    }

    // ===== SHADERS AND PROGRAMS =====

    /// Get-or-compile a shader, keyed by its source path.
    pub fn load_shader(&mut self, stage: ShaderStage, path: &str) -> Result<Arc<dyn Shader>> {
        if let Some(shader) = self.shader_cache.get(path) {
            engine_info!(SOURCE, "Shader cache hit for '{}'", path);
            return Ok(Arc::clone(shader));
        }

        engine_info!(SOURCE, "Compiling shader '{}'", path);
        let shader = self.device.lock().unwrap().compile_shader(ShaderDesc {
            stage,
            path: path.to_string(),
        })?;
        self.shader_cache.insert(path.to_string(), Arc::clone(&shader));
        Ok(shader)
    }

    /// Get-or-link a program from stage/path pairs, keyed by the joined
    /// shader paths. Constituent shaders go through the shader cache.
    pub fn load_program(
        &mut self,
        stages: &[(ShaderStage, &str)],
    ) -> Result<Arc<dyn Program>> {
        if stages.is_empty() {
            engine_bail!(SOURCE, InvalidResource, "program needs at least one shader");
        }

        let mut shaders = Vec::with_capacity(stages.len());
        for (stage, path) in stages {
            shaders.push(self.load_shader(*stage, path)?);
        }

        let key = program_key(&shaders);
        if let Some(program) = self.program_cache.get(&key) {
            engine_info!(SOURCE, "Program cache hit for '{}'", key);
            return Ok(Arc::clone(program));
        }

        engine_info!(SOURCE, "Linking program '{}'", key);
        let program = self.device.lock().unwrap().link_program(&shaders)?;
        self.program_cache.insert(key, Arc::clone(&program));
        Ok(program)
    }

    pub fn shader_cache_size(&self) -> usize {
        self.shader_cache.len()
    }

    pub fn program_cache_size(&self) -> usize {
        self.program_cache.len()
    }

    // ===== DEFAULT RENDER TARGETS =====

    /// Create (or recreate, on window resize) the default color/depth
    /// targets and the framebuffer binding them. Existing entries under
    /// the well-known keys are destroyed first.
    pub fn initialize_render_targets(&mut self, width: u32, height: u32) -> Result<()> {
        use crate::constants::{FRAMEBUFFER_DEFAULT, RENDER_TARGET_COLOR, RENDER_TARGET_DEPTH};

        self.destroy_framebuffer(FRAMEBUFFER_DEFAULT);
        self.destroy_texture(RENDER_TARGET_COLOR);
        self.destroy_texture(RENDER_TARGET_DEPTH);

        let color = self.create_texture_2d(
            RENDER_TARGET_COLOR,
            width,
            height,
            TextureFormat::Rgba16Float,
            TextureUsage::SAMPLED | TextureUsage::COLOR_ATTACHMENT,
        )?;
        let depth = self.create_texture_2d(
            RENDER_TARGET_DEPTH,
            width,
            height,
            TextureFormat::Depth32Float,
            TextureUsage::SAMPLED | TextureUsage::DEPTH_ATTACHMENT,
        )?;
        self.create_framebuffer(
            FRAMEBUFFER_DEFAULT,
            FramebufferDesc {
                color_attachments: vec![color],
                depth_attachment: Some(depth),
                width,
                height,
            },
        )?;

        engine_info!(SOURCE, "Default render targets initialized at {}x{}", width, height);
        Ok(())
    }

    // ===== FIXED RESOURCES =====

    /// Shared fullscreen quad vertex buffer (position + uv, 4 vertices).
    pub fn quad_vertex_buffer(&self) -> &Arc<dyn Buffer> {
        &self.quad_vertex_buffer
    }

    /// Shared unit cube vertex buffer (positions, 36 vertices).
    pub fn cube_vertex_buffer(&self) -> &Arc<dyn Buffer> {
        &self.cube_vertex_buffer
    }

    /// Per-view uniform buffer (`MAX_VIEWS` records, indexed by the
    /// dense view id).
    pub fn per_view_uniforms(&self) -> &UniformBuffer {
        &self.per_view_uniforms
    }

    /// Per-entity uniform buffer (`MAX_ENTITIES` records).
    pub fn per_entity_uniforms(&self) -> &UniformBuffer {
        &self.per_entity_uniforms
    }

    /// Per-scene uniform buffer (one record of light arrays).
    pub fn per_scene_uniforms(&self) -> &UniformBuffer {
        &self.per_scene_uniforms
    }

    /// Release all named resources and caches. Fixed resources are
    /// released when the registry itself drops.
    pub fn shutdown(&mut self) {
        self.program_cache.clear();
        self.shader_cache.clear();
        self.framebuffers.clear();
        self.textures.clear();
        engine_info!(SOURCE, "Resource registry shut down");
    }
}

#[cfg(test)]
#[path = "resource_registry_tests.rs"]
mod tests;
