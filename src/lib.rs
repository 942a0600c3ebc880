//! Nebula renderer core — per-frame orchestration for a real-time 3D
//! renderer.
//!
//! The core owns three jobs: the per-frame view queue with frustum
//! culling, synchronization of scene state into GPU uniform buffers,
//! and a named registry of GPU resources shared by render graphs. It
//! talks to the GPU only through the [`graphics_device`] traits;
//! backends and render graphs plug in from outside.

pub mod constants;
pub mod culling;
pub mod error;
pub mod graphics_device;
pub mod log;
pub mod registry;
pub mod render_graph;
pub mod renderer;
pub mod scene;
pub mod uniforms;
pub mod view;

pub use error::{Error, Result};
pub use registry::{MappedBuffer, ResourceRegistry, UniformBuffer};
pub use render_graph::RenderGraph;
pub use renderer::{Renderer, RendererSettings, ShadowMapQuality};
pub use scene::{Camera, DirectionalLight, Entity, PointLight, Scene, SpotLight, SubMeshBounds, Transform};
pub use view::{RenderTargetView, View};

// Math types are part of the public API surface.
pub use glam;
