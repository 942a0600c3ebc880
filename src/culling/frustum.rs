/// Frustum — six clipping planes for visibility culling.
///
/// Each plane is a Vec4 (A, B, C, D) where (A, B, C) is the
/// inward-pointing unit normal and D the signed distance: a point P is
/// inside when dot(normal, P) + D >= 0 for all six planes.
///
/// Recomputed once per view per frame from the view-projection matrix;
/// never mutated after construction.

use glam::{Mat3, Mat4, Vec3, Vec4};

/// Frustum plane indices
pub const PLANE_LEFT: usize = 0;
pub const PLANE_RIGHT: usize = 1;
pub const PLANE_BOTTOM: usize = 2;
pub const PLANE_TOP: usize = 3;
pub const PLANE_NEAR: usize = 4;
pub const PLANE_FAR: usize = 5;

/// Oriented bounding box: world-space center, rotation axes and
/// half-extents. Rebuilt per entity per frame from the current
/// transform, so transform changes never leave stale volumes behind.
#[derive(Debug, Clone, Copy)]
pub struct Obb {
    /// World-space center
    pub position: Vec3,
    /// Rotation (and scale) axes, columns of the upper 3x3 model matrix
    pub orientation: Mat3,
    /// Half-extents along the local axes
    pub half_extents: Vec3,
}

impl Obb {
    pub fn new(position: Vec3, orientation: Mat3, half_extents: Vec3) -> Self {
        Self { position, orientation, half_extents }
    }

    /// Axis-aligned box at `position` (identity orientation).
    pub fn axis_aligned(position: Vec3, half_extents: Vec3) -> Self {
        Self::new(position, Mat3::IDENTITY, half_extents)
    }
}

/// Bounding sphere, used for the optional sub-mesh culling stage.
#[derive(Debug, Clone, Copy)]
pub struct Sphere {
    pub position: Vec3,
    pub radius: f32,
}

/// Six frustum planes for culling: left, right, bottom, top, near, far.
///
/// Works with both perspective and orthographic projections.
#[derive(Debug, Clone, Copy)]
pub struct Frustum {
    pub planes: [Vec4; 6],
}

impl Frustum {
    /// Extract the planes from a combined view-projection matrix
    /// (Gribb & Hartmann). Each plane is normalized so (A, B, C) is a
    /// unit vector and plane distances are in world units.
    pub fn from_view_projection(vp: &Mat4) -> Self {
        let m = vp.to_cols_array_2d();

        let mut planes = [
            // Left:   row3 + row0
            Vec4::new(m[0][3] + m[0][0], m[1][3] + m[1][0], m[2][3] + m[2][0], m[3][3] + m[3][0]),
            // Right:  row3 - row0
            Vec4::new(m[0][3] - m[0][0], m[1][3] - m[1][0], m[2][3] - m[2][0], m[3][3] - m[3][0]),
            // Bottom: row3 + row1
            Vec4::new(m[0][3] + m[0][1], m[1][3] + m[1][1], m[2][3] + m[2][1], m[3][3] + m[3][1]),
            // Top:    row3 - row1
            Vec4::new(m[0][3] - m[0][1], m[1][3] - m[1][1], m[2][3] - m[2][1], m[3][3] - m[3][1]),
            // Near:   row3 + row2
            Vec4::new(m[0][3] + m[0][2], m[1][3] + m[1][2], m[2][3] + m[2][2], m[3][3] + m[3][2]),
            // Far:    row3 - row2
            Vec4::new(m[0][3] - m[0][2], m[1][3] - m[1][2], m[2][3] - m[2][2], m[3][3] - m[3][2]),
        ];

        for plane in &mut planes {
            let normal_len = Vec3::new(plane.x, plane.y, plane.z).length();
            if normal_len > 0.0 {
                *plane /= normal_len;
            }
        }

        Self { planes }
    }

    /// Test an oriented box against the frustum.
    ///
    /// Plane/OBB separating-axis check: for each plane, the box's
    /// half-extents are projected onto the plane normal through the
    /// orientation axes; the box is outside only if it lies entirely on
    /// the negative side of some plane. Boxes touching or straddling a
    /// plane count as visible — conservative, no false negatives.
    pub fn intersects_obb(&self, obb: &Obb) -> bool {
        for plane in &self.planes {
            let normal = Vec3::new(plane.x, plane.y, plane.z);

            // Projected radius of the box onto the plane normal
            let radius = obb.half_extents.x * normal.dot(obb.orientation.x_axis).abs()
                + obb.half_extents.y * normal.dot(obb.orientation.y_axis).abs()
                + obb.half_extents.z * normal.dot(obb.orientation.z_axis).abs();

            let distance = normal.dot(obb.position) + plane.w;

            if distance + radius < 0.0 {
                return false;
            }
        }

        true
    }

    /// Test a bounding sphere against the frustum. Touching counts as
    /// visible, same tie-break as the box test.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        for plane in &self.planes {
            let normal = Vec3::new(plane.x, plane.y, plane.z);
            let distance = normal.dot(sphere.position) + plane.w;

            if distance + sphere.radius < 0.0 {
                return false;
            }
        }

        true
    }
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;
