/// Light types consumed from the scene per frame.
///
/// A light with `casts_shadow` set contributes one or more shadow views
/// (directional: one per cascade) and occupies a slice of the matching
/// shadow atlas.

use glam::Vec3;
use super::entity::Transform;

#[derive(Debug, Clone)]
pub struct DirectionalLight {
    pub transform: Transform,
    pub color: Vec3,
    pub intensity: f32,
    pub casts_shadow: bool,
}

impl DirectionalLight {
    pub fn new(transform: Transform, color: Vec3, intensity: f32) -> Self {
        Self {
            transform,
            color,
            intensity,
            casts_shadow: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct SpotLight {
    pub transform: Transform,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
    /// Outer cone angle in radians
    pub cone_angle: f32,
    pub casts_shadow: bool,
}

#[derive(Debug, Clone)]
pub struct PointLight {
    pub transform: Transform,
    pub color: Vec3,
    pub intensity: f32,
    pub range: f32,
    pub casts_shadow: bool,
}
