//! Render graph collaborator trait.
//!
//! A render graph is an externally defined sequence of GPU passes
//! attached to a view. The Renderer only invokes it: the graph reads
//! the view's matrices, the bound uniform buffers and the entities'
//! visibility bits to issue the actual draws.

use crate::error::Result;
use crate::scene::Scene;
use crate::view::View;

pub trait RenderGraph: Send + Sync {
    /// Graph name for logging.
    fn name(&self) -> &str;

    /// One-time setup (shader/program loads, named target creation)
    /// against the registry. Called when the graph is attached to a
    /// Renderer. Failures are logged but do not unwind — dependent
    /// draws stay defective until corrected.
    fn initialize(&mut self, registry: &mut crate::registry::ResourceRegistry) -> Result<()>;

    /// Execute the graph for one view. Called once per enabled view per
    /// frame, in queue order.
    fn execute(&mut self, view: &View, scene: &Scene) -> Result<()>;

    /// The output surface changed size; rebuild size-dependent state.
    fn on_window_resized(&mut self, width: u32, height: u32) -> Result<()>;
}
