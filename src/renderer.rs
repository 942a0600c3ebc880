//! Renderer — per-frame orchestration core.
//!
//! Owns the view queue, the resource registry and the render-graph
//! hooks, and drives the fixed frame sequence: queue default views,
//! sync uniforms, cull, execute each view's graph, reset the queue.
//!
//! All per-frame failures are non-fatal: they are logged, the offending
//! view or record is skipped, and the frame continues with degraded
//! output.

use std::sync::{Arc, Mutex};
use crate::constants::{
    DIRECTIONAL_SHADOW_MAP_SIZES, MAX_DIRECTIONAL_LIGHTS, MAX_ENTITIES, MAX_POINT_LIGHTS,
    MAX_SHADOW_CASTING_DIRECTIONAL_LIGHTS, MAX_SHADOW_MAP_CASCADES, MAX_SHADOW_CASTING_POINT_LIGHTS,
    MAX_SHADOW_CASTING_SPOT_LIGHTS, MAX_SPOT_LIGHTS, MAX_VIEWS, POINT_SHADOW_MAP_SIZES,
    SHADOW_MAPS_DIRECTIONAL, SHADOW_MAPS_POINT, SHADOW_MAPS_SPOT, SPOT_SHADOW_MAP_SIZES,
};
use crate::culling::{cull_scene, Frustum};
use crate::error::Result;
use crate::graphics_device::{
    GraphicsDevice, TextureDesc, TextureFormat, TextureKind, TextureUsage,
};
use crate::registry::ResourceRegistry;
use crate::render_graph::RenderGraph;
use crate::scene::Scene;
use crate::uniforms::{
    DirectionalLightUniforms, PerEntityUniforms, PerSceneUniforms, PerViewUniforms,
    PointLightUniforms, SpotLightUniforms,
};
use crate::view::{RenderTargetView, View};
use crate::{engine_bail, engine_error, engine_info, engine_warn};

const SOURCE: &str = "nebula::Renderer";

// ===== SETTINGS =====

/// Shadow map resolution tier, indexing the size tables in
/// [`crate::constants`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowMapQuality {
    Low,
    Medium,
    High,
    Ultra,
}

impl ShadowMapQuality {
    pub fn index(self) -> usize {
        match self {
            ShadowMapQuality::Low => 0,
            ShadowMapQuality::Medium => 1,
            ShadowMapQuality::High => 2,
            ShadowMapQuality::Ultra => 3,
        }
    }
}

/// Startup-time renderer configuration.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    pub shadow_map_quality: ShadowMapQuality,
    /// Directional-light cascade count, clamped to
    /// [`MAX_SHADOW_MAP_CASCADES`].
    pub shadow_cascade_count: usize,
    /// Run the finer-grained sub-mesh sphere stage after the entity
    /// box test; with this off, sub-meshes inherit entity visibility.
    pub submesh_culling: bool,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            shadow_map_quality: ShadowMapQuality::Medium,
            shadow_cascade_count: MAX_SHADOW_MAP_CASCADES,
            submesh_culling: true,
        }
    }
}

// ===== RENDERER =====

pub struct Renderer {
    registry: Arc<Mutex<ResourceRegistry>>,
    scene_graph: Option<Arc<Mutex<dyn RenderGraph>>>,
    shadow_graph: Option<Arc<Mutex<dyn RenderGraph>>>,
    /// Views queued this frame, dense ids 0..len
    active_views: Vec<View>,
    /// Frustums parallel to `active_views`, derived at queue time
    active_frustums: Vec<Frustum>,
    /// One destination slice per directional atlas layer, in
    /// casting-light-major order, built once at startup
    directional_shadow_targets: Vec<RenderTargetView>,
    settings: RendererSettings,
}

impl Renderer {
    /// Create the renderer, its registry, the default render targets at
    /// `width` x `height` and the shadow map atlases.
    pub fn new(
        device: Arc<Mutex<dyn GraphicsDevice>>,
        settings: RendererSettings,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        let mut settings = settings;
        if settings.shadow_cascade_count == 0
            || settings.shadow_cascade_count > MAX_SHADOW_MAP_CASCADES
        {
            engine_warn!(
                SOURCE,
                "Shadow cascade count {} out of range, clamping to {}",
                settings.shadow_cascade_count,
                MAX_SHADOW_MAP_CASCADES
            );
            settings.shadow_cascade_count =
                settings.shadow_cascade_count.clamp(1, MAX_SHADOW_MAP_CASCADES);
        }

        let mut registry = ResourceRegistry::new(device)?;
        registry.initialize_render_targets(width, height)?;
        Self::create_shadow_atlases(&mut registry, &settings)?;

        let directional_atlas = registry
            .texture(SHADOW_MAPS_DIRECTIONAL)
            .ok_or_else(|| {
                crate::engine_err!(
                    SOURCE,
                    InitializationFailed,
                    "directional shadow atlas '{}' was not created",
                    SHADOW_MAPS_DIRECTIONAL
                )
            })?;
        let layer_count = settings.shadow_cascade_count * MAX_SHADOW_CASTING_DIRECTIONAL_LIGHTS;
        let directional_shadow_targets = (0..layer_count)
            .map(|layer| RenderTargetView {
                face: 0,
                layer: layer as u32,
                mip: 0,
                target: Arc::clone(&directional_atlas),
            })
            .collect();

        engine_info!(SOURCE, "Renderer initialized ({}x{})", width, height);

        Ok(Self {
            registry: Arc::new(Mutex::new(registry)),
            scene_graph: None,
            shadow_graph: None,
            active_views: Vec::with_capacity(MAX_VIEWS),
            active_frustums: Vec::with_capacity(MAX_VIEWS),
            directional_shadow_targets,
            settings,
        })
    }

    fn create_shadow_atlases(
        registry: &mut ResourceRegistry,
        settings: &RendererSettings,
    ) -> Result<()> {
        let quality = settings.shadow_map_quality.index();
        let usage = TextureUsage::SAMPLED | TextureUsage::DEPTH_ATTACHMENT;

        let directional_size = DIRECTIONAL_SHADOW_MAP_SIZES[quality];
        registry.create_texture(
            SHADOW_MAPS_DIRECTIONAL,
            TextureDesc {
                width: directional_size,
                height: directional_size,
                kind: TextureKind::Tex2d,
                format: TextureFormat::Depth32Float,
                usage,
                array_layers: (settings.shadow_cascade_count
                    * MAX_SHADOW_CASTING_DIRECTIONAL_LIGHTS) as u32,
                mip_levels: 1,
            },
        )?;

        let spot_size = SPOT_SHADOW_MAP_SIZES[quality];
        registry.create_texture(
            SHADOW_MAPS_SPOT,
            TextureDesc {
                width: spot_size,
                height: spot_size,
                kind: TextureKind::Tex2d,
                format: TextureFormat::Depth32Float,
                usage,
                array_layers: MAX_SHADOW_CASTING_SPOT_LIGHTS as u32,
                mip_levels: 1,
            },
        )?;

        let point_size = POINT_SHADOW_MAP_SIZES[quality];
        registry.create_texture(
            SHADOW_MAPS_POINT,
            TextureDesc {
                width: point_size,
                height: point_size,
                kind: TextureKind::Cube,
                format: TextureFormat::Depth32Float,
                usage,
                array_layers: (6 * MAX_SHADOW_CASTING_POINT_LIGHTS) as u32,
                mip_levels: 1,
            },
        )?;

        Ok(())
    }

    pub fn registry(&self) -> Arc<Mutex<ResourceRegistry>> {
        Arc::clone(&self.registry)
    }

    pub fn settings(&self) -> &RendererSettings {
        &self.settings
    }

    // ===== RENDER GRAPH HOOKS =====

    /// Install the scene render graph, running its `initialize` against
    /// the registry. An initialization failure is logged; the graph
    /// stays installed and may recover on a later resize or frame.
    pub fn set_scene_render_graph(&mut self, graph: Arc<Mutex<dyn RenderGraph>>) {
        {
            let mut registry = self.registry.lock().unwrap();
            let mut g = graph.lock().unwrap();
            engine_info!(SOURCE, "Installing scene render graph '{}'", g.name());
            if let Err(error) = g.initialize(&mut registry) {
                engine_error!(
                    SOURCE,
                    "Scene render graph '{}' failed to initialize: {}",
                    g.name(),
                    error
                );
            }
        }
        self.scene_graph = Some(graph);
    }

    /// Install the shadow render graph, running its `initialize` against
    /// the registry. An initialization failure is logged; the graph
    /// stays installed and may recover on a later resize or frame.
    pub fn set_shadow_render_graph(&mut self, graph: Arc<Mutex<dyn RenderGraph>>) {
        {
            let mut registry = self.registry.lock().unwrap();
            let mut g = graph.lock().unwrap();
            engine_info!(SOURCE, "Installing shadow render graph '{}'", g.name());
            if let Err(error) = g.initialize(&mut registry) {
                engine_error!(
                    SOURCE,
                    "Shadow render graph '{}' failed to initialize: {}",
                    g.name(),
                    error
                );
            }
        }
        self.shadow_graph = Some(graph);
    }

    // ===== VIEW QUEUE =====

    /// Queue a view for this frame, deriving its frustum and assigning
    /// its dense id. Rejects once [`MAX_VIEWS`] views are queued; the
    /// queue is unchanged on rejection.
    pub fn queue_view(&mut self, mut view: View) -> Result<u32> {
        if self.active_views.len() >= MAX_VIEWS {
            engine_bail!(
                SOURCE,
                CapacityExceeded,
                "view queue is full ({} views), view rejected",
                MAX_VIEWS
            );
        }

        let id = self.active_views.len() as u32;
        view.id = id;
        self.active_frustums.push(Frustum::from_view_projection(&view.view_projection));
        self.active_views.push(view);
        Ok(id)
    }

    pub fn active_view_count(&self) -> usize {
        self.active_views.len()
    }

    pub fn active_views(&self) -> &[View] {
        &self.active_views
    }

    /// Queue the default camera view (always id 0) followed by the
    /// shadow views contributed by shadow-casting lights. A full queue
    /// is logged by [`Self::queue_view`]; the frame proceeds with
    /// whatever views fit.
    pub fn queue_default_views(&mut self, scene: &Scene) {
        let camera_view = View::from_camera(scene.camera(), self.scene_graph.clone());
        if self.queue_view(camera_view).is_err() {
            return;
        }

        self.push_directional_light_views(scene);
        self.push_spot_light_views(scene);
        self.push_point_light_views(scene);
    }

    /// One shadow view per cascade per shadow-casting directional
    /// light, up to [`MAX_SHADOW_CASTING_DIRECTIONAL_LIGHTS`]. Lights
    /// beyond the cap keep `casts_shadow` but get no views.
    ///
    /// View matrices are identity placeholders; the shadow graph fits
    /// each cascade to the camera frustum before rendering.
    fn push_directional_light_views(&mut self, scene: &Scene) {
        let cascades = self.settings.shadow_cascade_count;
        let mut casting_index = 0usize;

        for light in scene.directional_lights() {
            if !light.casts_shadow {
                continue;
            }
            if casting_index == MAX_SHADOW_CASTING_DIRECTIONAL_LIGHTS {
                engine_warn!(
                    SOURCE,
                    "More than {} shadow-casting directional lights, extra lights get no shadows",
                    MAX_SHADOW_CASTING_DIRECTIONAL_LIGHTS
                );
                break;
            }

            for cascade in 0..cascades {
                let dest = self.directional_shadow_targets[casting_index * cascades + cascade]
                    .clone();
                let view = View::shadow_placeholder(
                    light.transform.position,
                    light.transform.forward(),
                    dest,
                    self.shadow_graph.clone(),
                );
                // Queue full: the rejection is already logged, views
                // that fit this frame still render.
                if self.queue_view(view).is_err() {
                    return;
                }
            }

            casting_index += 1;
        }
    }

    /// Spot-light shadow views are not synthesized yet; spot lights
    /// still reach the per-scene uniforms.
    fn push_spot_light_views(&mut self, _scene: &Scene) {}

    /// Point-light shadow views are not synthesized yet; point lights
    /// still reach the per-scene uniforms.
    fn push_point_light_views(&mut self, _scene: &Scene) {}

    // ===== FRAME =====

    /// Render one frame: queue default views, sync uniforms, cull,
    /// execute each view's graph. The view queue is reset afterwards
    /// even when a phase fails.
    pub fn render(&mut self, scene: &mut Scene) -> Result<()> {
        let result = self.render_frame(scene);
        self.clear_all_views();
        result
    }

    fn render_frame(&mut self, scene: &mut Scene) -> Result<()> {
        self.queue_default_views(scene);
        self.update_uniforms(scene)?;
        cull_scene(
            &self.active_views,
            &self.active_frustums,
            scene,
            self.settings.submesh_culling,
        );
        self.render_all_views(scene);
        Ok(())
    }

    /// Sync the per-view, per-entity and per-scene uniform buffers.
    /// Per-view records are written at each queued view's dense id.
    /// Overflowing entities and lights are truncated with a warning;
    /// everything within capacity still uploads.
    pub fn update_uniforms(&mut self, scene: &Scene) -> Result<()> {
        let registry = self.registry.lock().unwrap();

        // One per-view record per active view, indexed by view id.
        {
            let mapped = registry.per_view_uniforms().map_write()?;
            for view in &self.active_views {
                let record = PerViewUniforms::from_view(view);
                mapped.write_record(view.id as u64, bytemuck::bytes_of(&record))?;
            }
        }

        // Per-entity records, one per dense entity index.
        let entity_count = scene.entity_count();
        let uploaded = entity_count.min(MAX_ENTITIES);
        if entity_count > MAX_ENTITIES {
            engine_warn!(
                SOURCE,
                "{} entities exceed the uniform capacity of {}, truncating",
                entity_count,
                MAX_ENTITIES
            );
        }

        {
            let mapped = registry.per_entity_uniforms().map_write()?;
            for (index, entity) in scene.entities().iter().take(uploaded).enumerate() {
                let record = PerEntityUniforms::from_entity(entity);
                mapped.write_record(index as u64, bytemuck::bytes_of(&record))?;
            }
        }

        // Per-scene light arrays with live counts.
        let mut per_scene = PerSceneUniforms::default();

        let directional_count = scene.directional_light_count();
        if directional_count > MAX_DIRECTIONAL_LIGHTS {
            engine_warn!(
                SOURCE,
                "{} directional lights exceed the capacity of {}, truncating",
                directional_count,
                MAX_DIRECTIONAL_LIGHTS
            );
        }
        for (index, light) in scene
            .directional_lights()
            .iter()
            .take(MAX_DIRECTIONAL_LIGHTS)
            .enumerate()
        {
            per_scene.directional_lights[index] = DirectionalLightUniforms::from_light(light);
        }
        per_scene.directional_light_count =
            directional_count.min(MAX_DIRECTIONAL_LIGHTS) as u32;

        let spot_count = scene.spot_light_count();
        if spot_count > MAX_SPOT_LIGHTS {
            engine_warn!(
                SOURCE,
                "{} spot lights exceed the capacity of {}, truncating",
                spot_count,
                MAX_SPOT_LIGHTS
            );
        }
        for (index, light) in scene.spot_lights().iter().take(MAX_SPOT_LIGHTS).enumerate() {
            per_scene.spot_lights[index] = SpotLightUniforms::from_light(light);
        }
        per_scene.spot_light_count = spot_count.min(MAX_SPOT_LIGHTS) as u32;

        let point_count = scene.point_light_count();
        if point_count > MAX_POINT_LIGHTS {
            engine_warn!(
                SOURCE,
                "{} point lights exceed the capacity of {}, truncating",
                point_count,
                MAX_POINT_LIGHTS
            );
        }
        for (index, light) in scene.point_lights().iter().take(MAX_POINT_LIGHTS).enumerate() {
            per_scene.point_lights[index] = PointLightUniforms::from_light(light);
        }
        per_scene.point_light_count = point_count.min(MAX_POINT_LIGHTS) as u32;

        let mapped = registry.per_scene_uniforms().map_write()?;
        mapped.write_record(0, bytemuck::bytes_of(&per_scene))?;

        Ok(())
    }

    /// Execute each enabled view's render graph in queue order. A
    /// failing or missing graph is logged and the remaining views still
    /// render.
    pub fn render_all_views(&mut self, scene: &Scene) {
        for view in &self.active_views {
            if !view.enabled {
                continue;
            }

            let graph = match &view.graph {
                Some(graph) => graph,
                None => {
                    engine_error!(
                        SOURCE,
                        "View {} is enabled but has no render graph, skipping",
                        view.id
                    );
                    continue;
                }
            };

            if let Err(error) = graph.lock().unwrap().execute(view, scene) {
                engine_error!(SOURCE, "Render graph failed for view {}: {}", view.id, error);
            }
        }
    }

    /// Reset the view queue; ids restart at 0 next frame.
    pub fn clear_all_views(&mut self) {
        self.active_views.clear();
        self.active_frustums.clear();
    }

    // ===== LIFECYCLE =====

    /// Recreate the default render targets and notify the installed
    /// graphs.
    pub fn on_window_resized(&mut self, width: u32, height: u32) -> Result<()> {
        self.registry.lock().unwrap().initialize_render_targets(width, height)?;

        for graph in [&self.scene_graph, &self.shadow_graph].into_iter().flatten() {
            graph.lock().unwrap().on_window_resized(width, height)?;
        }

        engine_info!(SOURCE, "Window resized to {}x{}", width, height);
        Ok(())
    }

    /// Release all registry resources.
    pub fn shutdown(&mut self) {
        self.clear_all_views();
        self.scene_graph = None;
        self.shadow_graph = None;
        self.registry.lock().unwrap().shutdown();
        engine_info!(SOURCE, "Renderer shut down");
    }
}

#[cfg(test)]
#[path = "renderer_tests.rs"]
mod tests;
