//! Touch picking: normalized device coordinates to world-space rays

use glam::{Mat4, Vec3, Vec4};

use airhockey_core::Ray;

/// Unproject a touch point into a world-space ray running from the
/// near plane to the far plane.
///
/// The inverse matrix must match the view-projection the frame was
/// rendered with; after a camera move a stale inverse yields rays that
/// miss what the user sees.
pub fn screen_to_world_ray(ndc_x: f32, ndc_y: f32, inverse_view_projection: &Mat4) -> Ray {
    let near = unproject(ndc_x, ndc_y, -1.0, inverse_view_projection);
    let far = unproject(ndc_x, ndc_y, 1.0, inverse_view_projection);
    Ray::new(near, far - near)
}

/// Multiply through the inverse matrix, then undo the perspective
/// divide: the w that comes out is the inverse of the one projection
/// would have produced.
fn unproject(ndc_x: f32, ndc_y: f32, ndc_z: f32, inverse_view_projection: &Mat4) -> Vec3 {
    let world = *inverse_view_projection * Vec4::new(ndc_x, ndc_y, ndc_z, 1.0);
    world.truncate() / world.w
}
