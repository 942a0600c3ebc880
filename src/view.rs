//! View — one render pass descriptor.
//!
//! Constructed fresh each frame by the Renderer (default camera view
//! plus zero-or-more shadow views) and discarded at frame end by the
//! view-count reset. The dense `id` is assigned at queue time and is
//! stable only within the frame.

use std::sync::{Arc, Mutex};
use glam::{Mat4, Vec3, Vec4};
use crate::graphics_device::Texture;
use crate::render_graph::RenderGraph;
use crate::scene::Camera;

/// Destination slice of a render target: layer/mip/face plus the
/// target resource. `None` on a View means "default back buffer or
/// graph-managed target".
#[derive(Clone)]
pub struct RenderTargetView {
    /// Cube face (0 for 2D targets)
    pub face: u32,
    /// Array layer (atlas slice)
    pub layer: u32,
    pub mip: u32,
    pub target: Arc<dyn Texture>,
}

/// One render pass descriptor: camera matrices, culling flag,
/// destination target and the render graph to invoke.
#[derive(Clone)]
pub struct View {
    /// Dense index assigned at queue time (0..active_count-1)
    pub id: u32,
    /// Disabled views are queued but skipped at execution
    pub enabled: bool,
    /// Apply the frustum test; false marks every entity visible
    pub culling: bool,
    pub position: Vec3,
    pub direction: Vec3,
    pub view_matrix: Mat4,
    pub projection_matrix: Mat4,
    pub view_projection: Mat4,
    pub prev_view_projection: Mat4,
    pub inv_view: Mat4,
    pub inv_projection: Mat4,
    pub inv_view_projection: Mat4,
    /// (prev_jitter.xy, current_jitter.xy)
    pub jitter: Vec4,
    /// Off-screen destination for shadow passes
    pub dest_render_target_view: Option<RenderTargetView>,
    /// Executable render graph; an enabled view without one is a
    /// logged, non-fatal error at execution time
    pub graph: Option<Arc<Mutex<dyn RenderGraph>>>,
}

impl View {
    /// Synthesize the default camera view from the scene camera.
    pub fn from_camera(camera: &Camera, graph: Option<Arc<Mutex<dyn RenderGraph>>>) -> Self {
        Self {
            id: 0,
            enabled: true,
            culling: true,
            position: camera.position,
            direction: camera.forward,
            view_matrix: camera.view,
            projection_matrix: camera.projection,
            view_projection: camera.view_projection,
            prev_view_projection: camera.prev_view_projection,
            inv_view: camera.view.inverse(),
            inv_projection: camera.projection.inverse(),
            inv_view_projection: camera.view_projection.inverse(),
            jitter: Vec4::new(
                camera.prev_jitter.x,
                camera.prev_jitter.y,
                camera.current_jitter.x,
                camera.current_jitter.y,
            ),
            dest_render_target_view: None,
            graph,
        }
    }

    /// Shadow view skeleton: enabled, culling on, identity matrices.
    ///
    /// The shadow matrices are left as identity placeholders — the
    /// shadow graph (or a cascade-fitting step ahead of it) must
    /// populate them before the view's frustum test is meaningful.
    pub fn shadow_placeholder(
        position: Vec3,
        direction: Vec3,
        dest: RenderTargetView,
        graph: Option<Arc<Mutex<dyn RenderGraph>>>,
    ) -> Self {
        Self {
            id: 0,
            enabled: true,
            culling: true,
            position,
            direction,
            view_matrix: Mat4::IDENTITY,
            projection_matrix: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            prev_view_projection: Mat4::IDENTITY,
            inv_view: Mat4::IDENTITY,
            inv_projection: Mat4::IDENTITY,
            inv_view_projection: Mat4::IDENTITY,
            jitter: Vec4::ZERO,
            dest_render_target_view: Some(dest),
            graph,
        }
    }
}

#[cfg(test)]
#[path = "view_tests.rs"]
mod tests;
