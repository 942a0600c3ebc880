//! Unit tests for uniforms.rs
//!
//! Locks down the std140-compatible layouts (any size change must be
//! deliberate and mirrored in the shaders) and the scene-to-record
//! conversions.

use std::mem;
use glam::{Quat, Vec3, Vec4};
use super::*;
use crate::constants::{MAX_DIRECTIONAL_LIGHTS, MAX_POINT_LIGHTS, MAX_SPOT_LIGHTS};
use crate::scene::{DirectionalLight, Entity, PointLight, SpotLight, Transform};

// ============================================================================
// LAYOUT
// ============================================================================

#[test]
fn test_uniform_block_sizes() {
    assert_eq!(mem::size_of::<PerEntityUniforms>(), 144);
    assert_eq!(mem::size_of::<PerViewUniforms>(), 464);
    assert_eq!(mem::size_of::<DirectionalLightUniforms>(), 48);
    assert_eq!(mem::size_of::<SpotLightUniforms>(), 64);
    assert_eq!(mem::size_of::<PointLightUniforms>(), 48);
}

#[test]
fn test_per_scene_block_size() {
    let expected = MAX_DIRECTIONAL_LIGHTS * mem::size_of::<DirectionalLightUniforms>()
        + MAX_SPOT_LIGHTS * mem::size_of::<SpotLightUniforms>()
        + MAX_POINT_LIGHTS * mem::size_of::<PointLightUniforms>()
        + 4 * mem::size_of::<u32>();
    assert_eq!(mem::size_of::<PerSceneUniforms>(), expected);
    assert_eq!(mem::size_of::<PerSceneUniforms>(), 3984);
}

#[test]
fn test_blocks_are_pod() {
    // bytes_of is the upload path; a zeroed block must round-trip.
    let zeroed = PerSceneUniforms::default();
    let bytes = bytemuck::bytes_of(&zeroed);
    assert_eq!(bytes.len(), mem::size_of::<PerSceneUniforms>());
    assert!(bytes.iter().all(|&b| b == 0));
}

// ============================================================================
// CONVERSIONS
// ============================================================================

#[test]
fn test_per_entity_record_from_entity() {
    let mut entity = Entity::new(
        "moving",
        Transform::from_position(Vec3::new(1.0, 2.0, 3.0)),
        Vec3::splat(0.5),
    );
    let first_model = entity.transform.model;
    entity.transform.position = Vec3::new(4.0, 5.0, 6.0);
    entity.transform.update_model();

    let record = PerEntityUniforms::from_entity(&entity);
    assert_eq!(record.model, entity.transform.model);
    assert_eq!(record.last_model, first_model);
    assert_eq!(record.world_position, Vec4::new(4.0, 5.0, 6.0, 1.0));
}

#[test]
fn test_per_view_record_from_view() {
    let mut camera = crate::scene::Camera::new();
    let projection = glam::Mat4::perspective_rh(1.0, 1.0, 0.1, 100.0);
    camera.look_at(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, projection);

    let view = crate::view::View::from_camera(&camera, None);
    let record = PerViewUniforms::from_view(&view);

    assert_eq!(record.view, camera.view);
    assert_eq!(record.projection, camera.projection);
    assert_eq!(record.view_projection, camera.view_projection);
    assert_eq!(record.view_position, Vec4::new(0.0, 0.0, 5.0, 1.0));
}

#[test]
fn test_directional_light_record() {
    let mut light = DirectionalLight::new(
        Transform::new(
            Vec3::ZERO,
            Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2),
            Vec3::ONE,
        ),
        Vec3::new(1.0, 0.9, 0.8),
        3.0,
    );
    light.casts_shadow = true;

    let record = DirectionalLightUniforms::from_light(&light);
    // Rotated -90 degrees around x: forward points down.
    assert!((Vec3::new(record.direction.x, record.direction.y, record.direction.z)
        - Vec3::NEG_Y)
        .length()
        < 1e-6);
    assert_eq!(record.color_intensity, Vec4::new(1.0, 0.9, 0.8, 3.0));
    assert_eq!(record.casts_shadow, 1);
}

#[test]
fn test_spot_light_record() {
    let light = SpotLight {
        transform: Transform::from_position(Vec3::new(0.0, 5.0, 0.0)),
        color: Vec3::ONE,
        intensity: 10.0,
        range: 25.0,
        cone_angle: std::f32::consts::FRAC_PI_3,
        casts_shadow: false,
    };

    let record = SpotLightUniforms::from_light(&light);
    assert_eq!(record.direction_range.w, 25.0);
    assert_eq!(
        Vec3::new(
            record.position_cone_angle.x,
            record.position_cone_angle.y,
            record.position_cone_angle.z
        ),
        Vec3::new(0.0, 5.0, 0.0)
    );
    assert!((record.position_cone_angle.w - (std::f32::consts::FRAC_PI_3).cos()).abs() < 1e-6);
    assert_eq!(record.casts_shadow, 0);
}

#[test]
fn test_point_light_record() {
    let light = PointLight {
        transform: Transform::from_position(Vec3::new(1.0, 2.0, 3.0)),
        color: Vec3::new(0.2, 0.4, 0.6),
        intensity: 7.0,
        range: 12.0,
        casts_shadow: true,
    };

    let record = PointLightUniforms::from_light(&light);
    assert_eq!(record.position_range, Vec4::new(1.0, 2.0, 3.0, 12.0));
    assert_eq!(record.color_intensity, Vec4::new(0.2, 0.4, 0.6, 7.0));
    assert_eq!(record.casts_shadow, 1);
}
