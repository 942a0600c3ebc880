/// Camera — passive data container for the scene's active viewpoint.
///
/// The caller (application shell) computes and sets position, forward
/// and the projection parameters; `update_matrices` rolls the
/// previous-frame state and recombines view-projection. The Renderer
/// only reads from it when synthesizing the default camera view.

use glam::{Mat4, Vec2, Vec3};

#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub forward: Vec3,
    pub view: Mat4,
    pub projection: Mat4,
    pub view_projection: Mat4,
    pub prev_view_projection: Mat4,
    /// Sub-pixel jitter applied this frame (temporal techniques)
    pub current_jitter: Vec2,
    /// Jitter applied the previous frame
    pub prev_jitter: Vec2,
}

impl Camera {
    /// Camera at the origin looking down -Z with identity matrices.
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            forward: Vec3::NEG_Z,
            view: Mat4::IDENTITY,
            projection: Mat4::IDENTITY,
            view_projection: Mat4::IDENTITY,
            prev_view_projection: Mat4::IDENTITY,
            current_jitter: Vec2::ZERO,
            prev_jitter: Vec2::ZERO,
        }
    }

    /// Install new view/projection matrices, rolling the current
    /// view-projection (and jitter) into the previous-frame slots.
    pub fn update_matrices(&mut self, view: Mat4, projection: Mat4) {
        self.prev_view_projection = self.view_projection;
        self.prev_jitter = self.current_jitter;
        self.view = view;
        self.projection = projection;
        self.view_projection = projection * view;
    }

    /// Convenience: rebuild the view matrix from position/forward and
    /// update all derived matrices.
    pub fn look_at(&mut self, position: Vec3, target: Vec3, projection: Mat4) {
        self.position = position;
        self.forward = (target - position).normalize_or_zero();
        let view = Mat4::look_at_rh(position, target, Vec3::Y);
        self.update_matrices(view, projection);
    }
}

impl Default for Camera {
    fn default() -> Self {
        Self::new()
    }
}
