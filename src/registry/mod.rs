//! Named GPU-resource registry and fixed per-frame resources.
//!
//! One registry instance is owned by the [`crate::renderer::Renderer`]
//! and handed to render graphs during initialization; there is no
//! process-global resource state.

pub mod uniform_buffer;
pub mod resource_registry;

pub use uniform_buffer::{MappedBuffer, UniformBuffer};
pub use resource_registry::ResourceRegistry;
