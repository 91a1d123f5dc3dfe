//! Perspective camera with a debug-settable pose.

use engine_core::Transform;
use glam::{EulerRot, Mat4, Quat, Vec3};

/// Perspective camera. The vignette never moves it on its own; the pose is
/// written once per tick from the debug panel values.
#[derive(Debug, Clone)]
pub struct Camera {
    /// Camera transform (position and rotation).
    pub transform: Transform,
    /// Field of view in degrees.
    pub fov_degrees: f32,
    /// Near clipping plane.
    pub near: f32,
    /// Far clipping plane.
    pub far: f32,
    /// Aspect ratio (width / height).
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            transform: Transform::default(),
            fov_degrees: 70.0,
            near: 0.1,
            far: 1000.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl Camera {
    /// Update aspect ratio (call on window resize).
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        self.aspect = width as f32 / height.max(1) as f32;
    }

    /// Apply a pose from the debug panel: position plus XYZ euler angles in
    /// radians.
    pub fn set_pose(&mut self, position: Vec3, rotation: Vec3) {
        self.transform.position = position;
        self.transform.rotation =
            Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
    }

    /// Get the view matrix.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.transform.rotation, self.transform.position)
            .inverse()
    }

    /// Get the projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov_degrees.to_radians(), self.aspect, self.near, self.far)
    }

    /// Width and height of the visible frustum slice through `target`.
    ///
    /// Recomputed whenever the caller needs it, so camera or window changes
    /// are picked up on the next measurement. A target at the camera
    /// position measures zero; callers treat that as degenerate geometry.
    pub fn visible_size(&self, target: Vec3) -> (f32, f32) {
        let distance = self.transform.position.distance(target);
        let height = 2.0 * distance * (self.fov_degrees.to_radians() * 0.5).tan();
        (height * self.aspect, height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// fov 90 and aspect 1 at distance 10 must see a 20x20 slice.
    #[test]
    fn visible_size_matches_frustum_geometry() {
        let mut camera = Camera::default();
        camera.fov_degrees = 90.0;
        camera.aspect = 1.0;
        let (w, h) = camera.visible_size(Vec3::new(0.0, 0.0, -10.0));
        assert!((w - 20.0).abs() < 1e-4, "width was {w}");
        assert!((h - 20.0).abs() < 1e-4, "height was {h}");
    }

    #[test]
    fn visible_size_scales_with_aspect() {
        let mut camera = Camera::default();
        camera.fov_degrees = 90.0;
        camera.aspect = 2.0;
        let (w, h) = camera.visible_size(Vec3::new(0.0, 0.0, -10.0));
        assert!((w - 2.0 * h).abs() < 1e-4);
    }

    /// A probe at the camera position is degenerate and measures zero.
    #[test]
    fn visible_size_zero_at_camera() {
        let camera = Camera::default();
        let (w, h) = camera.visible_size(camera.transform.position);
        assert_eq!(w, 0.0);
        assert_eq!(h, 0.0);
    }

    #[test]
    fn set_pose_moves_the_view() {
        let mut camera = Camera::default();
        camera.set_pose(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO);
        // Looking down -Z from z=5: the origin sits 5 units ahead.
        let origin_in_view = camera.view_matrix() * glam::Vec4::new(0.0, 0.0, 0.0, 1.0);
        assert!((origin_in_view.z - (-5.0)).abs() < 1e-5);
    }
}
