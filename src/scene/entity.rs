/// Entity — one renderable object in the flat scene list.
///
/// Carries the transform state the uniform sync reads, the bounding
/// volumes the culling engine tests, and the per-view visibility
/// bitsets the render-graph layer reads back. Visibility is
/// frame-transient: rewritten in full by every `cull_scene` pass.

use glam::{Mat3, Mat4, Quat, Vec3};
use crate::constants::MAX_VIEWS;
use crate::culling::{Obb, Sphere};

// ===== TRANSFORM =====

/// World transform with previous-frame state for motion vectors.
#[derive(Debug, Clone)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
    pub model: Mat4,
    pub prev_model: Mat4,
}

impl Transform {
    pub fn new(position: Vec3, rotation: Quat, scale: Vec3) -> Self {
        let model = Mat4::from_scale_rotation_translation(scale, rotation, position);
        Self {
            position,
            rotation,
            scale,
            model,
            prev_model: model,
        }
    }

    pub fn from_position(position: Vec3) -> Self {
        Self::new(position, Quat::IDENTITY, Vec3::ONE)
    }

    /// Direction the transform faces (-Z rotated into world space).
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }

    /// Rebuild the model matrix from position/rotation/scale, rolling
    /// the current matrix into `prev_model`.
    pub fn update_model(&mut self) {
        self.prev_model = self.model;
        self.model = Mat4::from_scale_rotation_translation(
            self.scale, self.rotation, self.position,
        );
    }
}

// ===== SUB-MESH BOUNDS =====

/// Local-space bounds of one sub-mesh, for the optional finer-grained
/// culling stage.
#[derive(Debug, Clone, Copy)]
pub struct SubMeshBounds {
    pub min_extents: Vec3,
    pub max_extents: Vec3,
}

impl SubMeshBounds {
    /// Local-space midpoint.
    pub fn center(&self) -> Vec3 {
        (self.min_extents + self.max_extents) / 2.0
    }

    /// Radius of the enclosing sphere.
    pub fn radius(&self) -> f32 {
        ((self.max_extents - self.min_extents) / 2.0).length()
    }
}

// ===== ENTITY =====

pub struct Entity {
    pub name: String,
    pub transform: Transform,
    /// Local half-extents of the entity's bounding box
    pub half_extents: Vec3,
    /// World-space oriented box, refreshed by the culler every frame
    pub obb: Obb,
    /// Sub-mesh bounds in local space (may be empty)
    pub submesh_bounds: Vec<SubMeshBounds>,
    /// World-space sub-mesh spheres, refreshed alongside the OBB
    pub submesh_spheres: Vec<Sphere>,
    /// One visibility bit per view slot (0..MAX_VIEWS)
    visibility: u64,
    /// Per-sub-mesh visibility bitsets, same indexing
    submesh_visibility: Vec<u64>,
}

impl Entity {
    pub fn new(name: &str, transform: Transform, half_extents: Vec3) -> Self {
        let obb = Obb::new(
            transform.position,
            Mat3::from_mat4(transform.model),
            half_extents,
        );
        Self {
            name: name.to_string(),
            transform,
            half_extents,
            obb,
            submesh_bounds: Vec::new(),
            submesh_spheres: Vec::new(),
            visibility: 0,
            submesh_visibility: Vec::new(),
        }
    }

    /// Attach sub-mesh bounds, enabling the sub-mesh culling stage for
    /// this entity.
    pub fn set_submesh_bounds(&mut self, bounds: Vec<SubMeshBounds>) {
        self.submesh_spheres = bounds
            .iter()
            .map(|b| Sphere {
                position: b.center() + self.transform.position,
                radius: b.radius(),
            })
            .collect();
        self.submesh_visibility = vec![0; bounds.len()];
        self.submesh_bounds = bounds;
    }

    pub fn submesh_count(&self) -> usize {
        self.submesh_bounds.len()
    }

    // ===== VISIBILITY BITSET =====

    pub fn set_visible(&mut self, view_index: u32) {
        debug_assert!((view_index as usize) < MAX_VIEWS);
        self.visibility |= 1u64 << view_index;
    }

    pub fn set_invisible(&mut self, view_index: u32) {
        debug_assert!((view_index as usize) < MAX_VIEWS);
        self.visibility &= !(1u64 << view_index);
    }

    pub fn is_visible(&self, view_index: u32) -> bool {
        (self.visibility >> view_index) & 1 == 1
    }

    pub fn set_submesh_visible(&mut self, submesh_index: usize, view_index: u32) {
        if let Some(bits) = self.submesh_visibility.get_mut(submesh_index) {
            *bits |= 1u64 << view_index;
        }
    }

    pub fn set_submesh_invisible(&mut self, submesh_index: usize, view_index: u32) {
        if let Some(bits) = self.submesh_visibility.get_mut(submesh_index) {
            *bits &= !(1u64 << view_index);
        }
    }

    pub fn is_submesh_visible(&self, submesh_index: usize, view_index: u32) -> bool {
        self.submesh_visibility
            .get(submesh_index)
            .map(|bits| (bits >> view_index) & 1 == 1)
            .unwrap_or(false)
    }

    /// Clear all visibility bits (entity and sub-mesh).
    pub fn clear_visibility(&mut self) {
        self.visibility = 0;
        for bits in &mut self.submesh_visibility {
            *bits = 0;
        }
    }
}
