//! GPU uniform block layouts.
//!
//! All structs are `repr(C)` and byte-compatible with their std140
//! shader counterparts: every field is 16-byte aligned (Mat4/Vec4, or
//! u32 quads) so the Rust layout and the GLSL layout agree exactly.
//! Uploaded verbatim through `bytemuck::bytes_of` — any field added
//! here must be mirrored in the shaders.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec4};
use crate::scene::{Camera, DirectionalLight, Entity, PointLight, SpotLight};
use crate::view::View;

// ===== PER ENTITY =====

/// Per-entity record: one per entity slot in the per-entity uniform
/// buffer, bound with a dynamic offset of `index * size_of::<Self>()`.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PerEntityUniforms {
    pub model: Mat4,
    /// Previous-frame model matrix, for motion vectors
    pub last_model: Mat4,
    /// World position (w unused)
    pub world_position: Vec4,
}

impl PerEntityUniforms {
    pub fn from_entity(entity: &Entity) -> Self {
        Self {
            model: entity.transform.model,
            last_model: entity.transform.prev_model,
            world_position: entity.transform.position.extend(1.0),
        }
    }
}

// ===== PER VIEW =====

/// Per-view record, one per active view slot, indexed by the view's
/// dense id.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PerViewUniforms {
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub last_view_projection: Mat4,
    pub inv_projection: Mat4,
    pub inv_view: Mat4,
    pub inv_view_projection: Mat4,
    /// Camera world position (w unused)
    pub view_position: Vec4,
}

impl PerViewUniforms {
    pub fn from_view(view: &View) -> Self {
        Self {
            view: view.view_matrix,
            projection: view.projection_matrix,
            view_projection: view.view_projection,
            last_view_projection: view.prev_view_projection,
            inv_projection: view.inv_projection,
            inv_view: view.inv_view,
            inv_view_projection: view.inv_view_projection,
            view_position: view.position.extend(1.0),
        }
    }

    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view: camera.view,
            projection: camera.projection,
            view_projection: camera.view_projection,
            last_view_projection: camera.prev_view_projection,
            inv_projection: camera.projection.inverse(),
            inv_view: camera.view.inverse(),
            inv_view_projection: camera.view_projection.inverse(),
            view_position: camera.position.extend(1.0),
        }
    }
}

// ===== LIGHTS =====

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct DirectionalLightUniforms {
    /// World direction (w unused)
    pub direction: Vec4,
    /// rgb = color, a = intensity
    pub color_intensity: Vec4,
    pub casts_shadow: u32,
    pub _padding: [u32; 3],
}

impl DirectionalLightUniforms {
    pub fn from_light(light: &DirectionalLight) -> Self {
        Self {
            direction: light.transform.forward().extend(0.0),
            color_intensity: light.color.extend(light.intensity),
            casts_shadow: light.casts_shadow as u32,
            _padding: [0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct SpotLightUniforms {
    /// xyz = world direction, w = range
    pub direction_range: Vec4,
    /// rgb = color, a = intensity
    pub color_intensity: Vec4,
    /// xyz = world position, w = cosine of the cone half-angle
    pub position_cone_angle: Vec4,
    pub casts_shadow: u32,
    pub _padding: [u32; 3],
}

impl SpotLightUniforms {
    pub fn from_light(light: &SpotLight) -> Self {
        Self {
            direction_range: light.transform.forward().extend(light.range),
            color_intensity: light.color.extend(light.intensity),
            position_cone_angle: light
                .transform
                .position
                .extend(light.cone_angle.cos()),
            casts_shadow: light.casts_shadow as u32,
            _padding: [0; 3],
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct PointLightUniforms {
    /// xyz = world position, w = range
    pub position_range: Vec4,
    /// rgb = color, a = intensity
    pub color_intensity: Vec4,
    pub casts_shadow: u32,
    pub _padding: [u32; 3],
}

impl PointLightUniforms {
    pub fn from_light(light: &PointLight) -> Self {
        Self {
            position_range: light.transform.position.extend(light.range),
            color_intensity: light.color.extend(light.intensity),
            casts_shadow: light.casts_shadow as u32,
            _padding: [0; 3],
        }
    }
}

// ===== PER SCENE =====

/// Per-scene block: fixed-capacity light arrays plus live counts.
/// Rewritten once per frame; slots past the counts are stale and must
/// not be read by shaders.
#[repr(C)]
#[derive(Clone, Copy, Pod, Zeroable)]
pub struct PerSceneUniforms {
    pub directional_lights:
        [DirectionalLightUniforms; crate::constants::MAX_DIRECTIONAL_LIGHTS],
    pub spot_lights: [SpotLightUniforms; crate::constants::MAX_SPOT_LIGHTS],
    pub point_lights: [PointLightUniforms; crate::constants::MAX_POINT_LIGHTS],
    pub directional_light_count: u32,
    pub spot_light_count: u32,
    pub point_light_count: u32,
    pub _padding: u32,
}

impl Default for PerSceneUniforms {
    fn default() -> Self {
        Zeroable::zeroed()
    }
}

#[cfg(test)]
#[path = "uniforms_tests.rs"]
mod tests;
