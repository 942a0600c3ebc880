/// Scene — flat, pre-populated entity and light lists plus the active
/// camera.
///
/// Entity indices are dense and stable within a frame: entity i's
/// transform state lands in per-entity uniform record i, and the
/// render-graph layer addresses the buffer range by the same index.

use super::camera::Camera;
use super::entity::Entity;
use super::lights::{DirectionalLight, PointLight, SpotLight};

pub struct Scene {
    camera: Camera,
    entities: Vec<Entity>,
    directional_lights: Vec<DirectionalLight>,
    spot_lights: Vec<SpotLight>,
    point_lights: Vec<PointLight>,
}

impl Scene {
    pub fn new() -> Self {
        Self {
            camera: Camera::new(),
            entities: Vec::new(),
            directional_lights: Vec::new(),
            spot_lights: Vec::new(),
            point_lights: Vec::new(),
        }
    }

    // ===== CAMERA =====

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    // ===== ENTITIES =====

    /// Append an entity, returning its dense index.
    pub fn add_entity(&mut self, entity: Entity) -> usize {
        self.entities.push(entity);
        self.entities.len() - 1
    }

    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn entities_mut(&mut self) -> &mut [Entity] {
        &mut self.entities
    }

    pub fn entity(&self, index: usize) -> Option<&Entity> {
        self.entities.get(index)
    }

    // ===== LIGHTS =====

    pub fn add_directional_light(&mut self, light: DirectionalLight) -> usize {
        self.directional_lights.push(light);
        self.directional_lights.len() - 1
    }

    pub fn directional_lights(&self) -> &[DirectionalLight] {
        &self.directional_lights
    }

    pub fn directional_light_count(&self) -> usize {
        self.directional_lights.len()
    }

    pub fn add_spot_light(&mut self, light: SpotLight) -> usize {
        self.spot_lights.push(light);
        self.spot_lights.len() - 1
    }

    pub fn spot_lights(&self) -> &[SpotLight] {
        &self.spot_lights
    }

    pub fn spot_light_count(&self) -> usize {
        self.spot_lights.len()
    }

    pub fn add_point_light(&mut self, light: PointLight) -> usize {
        self.point_lights.push(light);
        self.point_lights.len() - 1
    }

    pub fn point_lights(&self) -> &[PointLight] {
        &self.point_lights
    }

    pub fn point_light_count(&self) -> usize {
        self.point_lights.len()
    }
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "scene_tests.rs"]
mod tests;
