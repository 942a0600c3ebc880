/// Shader and program traits.
///
/// Shaders are identified by their source path — the registry uses the
/// path as the cache key, and the concatenation of constituent shader
/// paths as the program cache key.

use std::sync::Arc;

/// Shader pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
    Geometry,
    Compute,
}

/// Descriptor for compiling a shader.
#[derive(Debug, Clone)]
pub struct ShaderDesc {
    pub stage: ShaderStage,
    /// Source path; also the shader's cache identity
    pub path: String,
}

/// Compiled shader module trait.
pub trait Shader: Send + Sync {
    fn stage(&self) -> ShaderStage;
    /// The source path this shader was compiled from.
    fn path(&self) -> &str;
}

/// Linked shader program trait.
pub trait Program: Send + Sync {
    fn shader_count(&self) -> usize;
}

/// Program cache key: constituent shader paths joined in link order.
pub fn program_key(shaders: &[Arc<dyn Shader>]) -> String {
    let paths: Vec<&str> = shaders.iter().map(|s| s.path()).collect();
    paths.join(";")
}
