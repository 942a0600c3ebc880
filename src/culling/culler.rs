//! Per-frame visibility pass.
//!
//! Tests every entity against every active view and rewrites the
//! per-view visibility bitsets from scratch. Bounding volumes are
//! refreshed from the current transforms first, so a moved entity is
//! culled against where it is, not where it was.

use glam::Mat3;
use crate::culling::Frustum;
use crate::scene::Scene;
use crate::view::View;

/// Run the visibility pass for one frame.
///
/// `views` and `frustums` are parallel slices: `frustums[i]` was
/// extracted from `views[i].view_projection` at queue time. Disabled
/// views are skipped and keep the cleared (invisible) bits. Views with
/// culling turned off mark every entity and sub-mesh visible without
/// testing.
///
/// The sub-mesh sphere stage only runs for entities whose box passed
/// the view's frustum; a rejected entity leaves all of its sub-mesh
/// bits cleared. With `submesh_culling` off, sub-meshes inherit their
/// entity's visibility untested.
pub fn cull_scene(
    views: &[View],
    frustums: &[Frustum],
    scene: &mut Scene,
    submesh_culling: bool,
) {
    debug_assert_eq!(views.len(), frustums.len());

    for entity in scene.entities_mut() {
        entity.clear_visibility();

        // Refresh world-space volumes from the current transform.
        entity.obb.position = entity.transform.position;
        entity.obb.orientation = Mat3::from_mat4(entity.transform.model);
        entity.obb.half_extents = entity.half_extents;

        for (sphere, bounds) in entity
            .submesh_spheres
            .iter_mut()
            .zip(entity.submesh_bounds.iter())
        {
            sphere.position = bounds.center() + entity.transform.position;
            sphere.radius = bounds.radius();
        }

        for (index, (view, frustum)) in views.iter().zip(frustums.iter()).enumerate() {
            let view_index = index as u32;

            if !view.enabled {
                continue;
            }

            if !view.culling {
                entity.set_visible(view_index);
                for submesh in 0..entity.submesh_count() {
                    entity.set_submesh_visible(submesh, view_index);
                }
                continue;
            }

            if !frustum.intersects_obb(&entity.obb) {
                continue;
            }

            entity.set_visible(view_index);

            if submesh_culling {
                for submesh in 0..entity.submesh_spheres.len() {
                    let sphere = entity.submesh_spheres[submesh];
                    if frustum.intersects_sphere(&sphere) {
                        entity.set_submesh_visible(submesh, view_index);
                    }
                }
            } else {
                for submesh in 0..entity.submesh_count() {
                    entity.set_submesh_visible(submesh, view_index);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "culler_tests.rs"]
mod tests;
