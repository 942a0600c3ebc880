//! Unit tests for culler.rs
//!
//! Drives `cull_scene` with hand-built views and asserts the per-view
//! visibility bitsets, the bounding-volume refresh and the sub-mesh
//! stage.

use glam::{Mat4, Vec3};
use super::*;
use crate::scene::{Entity, Scene, SubMeshBounds, Transform};
use crate::view::View;

fn view_looking_at_origin(eye: Vec3) -> (View, Frustum) {
    let mut scene = Scene::new();
    let projection = Mat4::perspective_rh(
        std::f32::consts::FRAC_PI_4,
        16.0 / 9.0,
        0.1,
        100.0,
    );
    scene.camera_mut().look_at(eye, Vec3::ZERO, projection);

    let view = View::from_camera(scene.camera(), None);
    let frustum = Frustum::from_view_projection(&view.view_projection);
    (view, frustum)
}

fn unit_entity_at(position: Vec3) -> Entity {
    Entity::new("test-entity", Transform::from_position(position), Vec3::splat(0.5))
}

// ============================================================================
// ENTITY VISIBILITY
// ============================================================================

#[test]
fn test_entity_in_frustum_is_visible() {
    let (view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
    let mut scene = Scene::new();
    scene.add_entity(unit_entity_at(Vec3::ZERO));

    cull_scene(&[view], &[frustum], &mut scene, true);

    assert!(scene.entity(0).unwrap().is_visible(0));
}

#[test]
fn test_entity_behind_camera_is_invisible() {
    let (view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
    let mut scene = Scene::new();
    scene.add_entity(unit_entity_at(Vec3::new(0.0, 0.0, 50.0)));

    cull_scene(&[view], &[frustum], &mut scene, true);

    assert!(!scene.entity(0).unwrap().is_visible(0));
}

#[test]
fn test_visibility_is_rewritten_from_scratch() {
    let (view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
    let mut scene = Scene::new();
    scene.add_entity(unit_entity_at(Vec3::new(0.0, 0.0, 50.0)));

    // Stale bits from a previous frame must not survive the pass.
    scene.entities_mut()[0].set_visible(0);
    scene.entities_mut()[0].set_visible(7);

    cull_scene(&[view], &[frustum], &mut scene, true);

    let entity = scene.entity(0).unwrap();
    assert!(!entity.is_visible(0));
    assert!(!entity.is_visible(7));
}

#[test]
fn test_views_get_independent_bits() {
    let (front, front_frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
    let (side, side_frustum) = view_looking_at_origin(Vec3::new(5.0, 0.0, 0.0));

    let mut scene = Scene::new();
    // In front of both views.
    scene.add_entity(unit_entity_at(Vec3::ZERO));
    // Behind the side view, in front of the front view.
    scene.add_entity(unit_entity_at(Vec3::new(50.0, 0.0, 0.0)));

    cull_scene(
        &[front, side],
        &[front_frustum, side_frustum],
        &mut scene,
        true,
    );

    assert!(scene.entity(0).unwrap().is_visible(0));
    assert!(scene.entity(0).unwrap().is_visible(1));
    assert!(!scene.entity(1).unwrap().is_visible(0));
    assert!(!scene.entity(1).unwrap().is_visible(1));
}

// ============================================================================
// CULLING FLAGS
// ============================================================================

#[test]
fn test_culling_disabled_marks_everything_visible() {
    let (mut view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
    view.culling = false;

    let mut scene = Scene::new();
    // Far outside the frustum; visible anyway with culling off.
    let mut entity = unit_entity_at(Vec3::new(0.0, 0.0, 500.0));
    entity.set_submesh_bounds(vec![SubMeshBounds {
        min_extents: Vec3::splat(-0.5),
        max_extents: Vec3::splat(0.5),
    }]);
    scene.add_entity(entity);

    cull_scene(&[view], &[frustum], &mut scene, true);

    let entity = scene.entity(0).unwrap();
    assert!(entity.is_visible(0));
    assert!(entity.is_submesh_visible(0, 0));
}

#[test]
fn test_disabled_view_keeps_bits_cleared() {
    let (mut view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
    view.enabled = false;

    let mut scene = Scene::new();
    scene.add_entity(unit_entity_at(Vec3::ZERO));

    cull_scene(&[view], &[frustum], &mut scene, true);

    assert!(!scene.entity(0).unwrap().is_visible(0));
}

// ============================================================================
// BOUNDING VOLUME REFRESH
// ============================================================================

#[test]
fn test_obb_follows_the_transform() {
    let (view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));
    let mut scene = Scene::new();
    scene.add_entity(unit_entity_at(Vec3::ZERO));

    cull_scene(&[view.clone()], &[frustum], &mut scene, true);
    assert!(scene.entity(0).unwrap().is_visible(0));

    // Move the entity out of the frustum; the next pass must test the
    // refreshed volume, not the stale one.
    {
        let entity = &mut scene.entities_mut()[0];
        entity.transform.position = Vec3::new(0.0, 0.0, 500.0);
        entity.transform.update_model();
    }

    cull_scene(&[view], &[frustum], &mut scene, true);

    let entity = scene.entity(0).unwrap();
    assert!(!entity.is_visible(0));
    assert_eq!(entity.obb.position, Vec3::new(0.0, 0.0, 500.0));
}

// ============================================================================
// SUB-MESH STAGE
// ============================================================================

#[test]
fn test_submesh_spheres_are_tested_individually() {
    let (view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));

    let mut entity = Entity::new(
        "wide-entity",
        Transform::from_position(Vec3::ZERO),
        Vec3::new(200.0, 1.0, 1.0),
    );
    entity.set_submesh_bounds(vec![
        // At the entity origin, inside the frustum.
        SubMeshBounds {
            min_extents: Vec3::splat(-0.5),
            max_extents: Vec3::splat(0.5),
        },
        // 100 units to the side, outside it.
        SubMeshBounds {
            min_extents: Vec3::new(99.5, -0.5, -0.5),
            max_extents: Vec3::new(100.5, 0.5, 0.5),
        },
    ]);

    let mut scene = Scene::new();
    scene.add_entity(entity);

    cull_scene(&[view], &[frustum], &mut scene, true);

    let entity = scene.entity(0).unwrap();
    assert!(entity.is_visible(0), "the box straddles the frustum");
    assert!(entity.is_submesh_visible(0, 0));
    assert!(!entity.is_submesh_visible(1, 0));
}

#[test]
fn test_submesh_stage_disabled_inherits_entity_visibility() {
    let (view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));

    let mut entity = Entity::new(
        "wide-entity",
        Transform::from_position(Vec3::ZERO),
        Vec3::new(200.0, 1.0, 1.0),
    );
    entity.set_submesh_bounds(vec![
        SubMeshBounds {
            min_extents: Vec3::splat(-0.5),
            max_extents: Vec3::splat(0.5),
        },
        // Outside the frustum, but untested with the stage off.
        SubMeshBounds {
            min_extents: Vec3::new(99.5, -0.5, -0.5),
            max_extents: Vec3::new(100.5, 0.5, 0.5),
        },
    ]);

    let mut scene = Scene::new();
    scene.add_entity(entity);

    cull_scene(&[view], &[frustum], &mut scene, false);

    let entity = scene.entity(0).unwrap();
    assert!(entity.is_visible(0));
    assert!(entity.is_submesh_visible(0, 0));
    assert!(entity.is_submesh_visible(1, 0));
}

#[test]
fn test_submesh_bits_stay_cleared_when_entity_is_culled() {
    let (view, frustum) = view_looking_at_origin(Vec3::new(0.0, 0.0, 5.0));

    let mut entity = unit_entity_at(Vec3::new(0.0, 0.0, 500.0));
    entity.set_submesh_bounds(vec![SubMeshBounds {
        min_extents: Vec3::splat(-0.5),
        max_extents: Vec3::splat(0.5),
    }]);

    let mut scene = Scene::new();
    scene.add_entity(entity);

    cull_scene(&[view], &[frustum], &mut scene, true);

    let entity = scene.entity(0).unwrap();
    assert!(!entity.is_visible(0));
    assert!(!entity.is_submesh_visible(0, 0));
}
