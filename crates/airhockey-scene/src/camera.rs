//! Perspective camera with a dolly zoom along the view axis

use glam::{Mat4, Vec3};

use airhockey_core::Ray;

use crate::picking::screen_to_world_ray;

/// Fixed-lens camera looking down at the table. The pinch gesture
/// moves the view along its own axis through `dolly`; all other lens
/// parameters stay put after setup.
#[derive(Debug, Clone)]
pub struct Camera {
    pub position: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub fov: f32,
    pub aspect: f32,
    pub near: f32,
    pub far: f32,
    /// Offset along the view axis driven by the pinch gesture
    pub dolly: f32,
}

impl Camera {
    /// Camera at the default vantage point over the near table edge
    pub fn new(aspect: f32) -> Self {
        Self {
            position: Vec3::new(0.0, 1.2, 2.2),
            target: Vec3::ZERO,
            up: Vec3::Y,
            fov: 45.0_f32.to_radians(),
            aspect,
            near: 1.0,
            far: 10.0,
            dolly: 0.0,
        }
    }

    pub fn set_aspect(&mut self, aspect: f32) {
        self.aspect = aspect;
    }

    /// Dolly along the view axis; positive deltas pull the scene closer
    pub fn dolly_by(&mut self, delta: f32) {
        self.dolly += delta;
    }

    /// View matrix including the dolly offset
    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, self.up)
            * Mat4::from_translation(Vec3::new(0.0, 0.0, self.dolly))
    }

    pub fn projection(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection() * self.view()
    }

    /// Inverse view-projection for unprojecting touch points. Derived
    /// from current camera state on every call, so picking always sees
    /// the matrices of the frame being rendered.
    pub fn inverse_view_projection(&self) -> Mat4 {
        self.view_projection().inverse()
    }

    /// Ray through a touch point given in normalized device coordinates
    pub fn screen_to_ray(&self, ndc_x: f32, ndc_y: f32) -> Ray {
        screen_to_world_ray(ndc_x, ndc_y, &self.inverse_view_projection())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use airhockey_core::Plane;

    #[test]
    fn test_view_projection_not_identity() {
        let camera = Camera::new(16.0 / 9.0);
        assert_ne!(camera.view_projection(), Mat4::IDENTITY);
    }

    #[test]
    fn test_inverse_roundtrip() {
        let camera = Camera::new(0.5625);
        let product = camera.view_projection() * camera.inverse_view_projection();
        let identity = Mat4::IDENTITY.to_cols_array();
        for (a, b) in product.to_cols_array().iter().zip(identity.iter()) {
            assert!((a - b).abs() < 1e-4);
        }
    }

    #[test]
    fn test_dolly_changes_view() {
        let mut camera = Camera::new(1.0);
        let before = camera.view_projection();
        camera.dolly_by(0.5);
        assert_ne!(camera.view_projection(), before);
        camera.dolly_by(-0.5);
        let restored = camera.view_projection();
        for (a, b) in restored
            .to_cols_array()
            .iter()
            .zip(before.to_cols_array().iter())
        {
            assert!((a - b).abs() < 1e-5);
        }
    }

    #[test]
    fn test_center_ray_hits_table_center() {
        let camera = Camera::new(1.0);
        let hit = camera
            .screen_to_ray(0.0, 0.0)
            .intersect_plane(&Plane::table())
            .unwrap();
        assert!(hit.length() < 1e-3);
    }

    #[test]
    fn test_set_aspect() {
        let mut camera = Camera::new(1.0);
        camera.set_aspect(2.0);
        assert_eq!(camera.aspect, 2.0);
    }
}
