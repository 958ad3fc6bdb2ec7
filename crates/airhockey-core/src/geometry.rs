//! Geometry primitive value types and intersection math
//!
//! Points and displacement vectors are plain `glam::Vec3`; the types
//! here describe the shapes built from them. Shape descriptors are
//! consumed by the mesh builder, the intersection types by picking.

use glam::Vec3;

/// Infinite plane through `point` with the given normal
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub point: Vec3,
    pub normal: Vec3,
}

impl Plane {
    pub fn new(point: Vec3, normal: Vec3) -> Self {
        Self { point, normal }
    }

    /// The horizontal table surface at y = 0
    pub fn table() -> Self {
        Self::new(Vec3::ZERO, Vec3::Y)
    }
}

/// Bounding sphere used for pick tests
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub center: Vec3,
    pub radius: f32,
}

impl Sphere {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }
}

/// Ray used for touch picking; the direction is normalized on
/// construction so the sphere test's quadratic has unit leading
/// coefficient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
}

impl Ray {
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize(),
        }
    }

    /// Simplified quadratic sphere test.
    ///
    /// The ray is treated as a full line: an intersection behind the
    /// origin also counts as a hit. Pick rays start on the near plane
    /// facing into the scene, so nothing selectable sits behind them.
    pub fn intersects_sphere(&self, sphere: &Sphere) -> bool {
        let p = self.origin - sphere.center;
        let b = 2.0 * p.dot(self.direction);
        let c = p.dot(p) - sphere.radius * sphere.radius;
        b * b - 4.0 * c >= 0.0
    }

    /// Intersection point with a plane, or `None` when the ray runs
    /// parallel to it (|direction . normal| below 1e-6).
    pub fn intersect_plane(&self, plane: &Plane) -> Option<Vec3> {
        let denom = self.direction.dot(plane.normal);
        if denom.abs() < 1e-6 {
            return None;
        }
        let t = (plane.point - self.origin).dot(plane.normal) / denom;
        Some(self.origin + self.direction * t)
    }
}

/// Flat disk descriptor, rendered as a triangle fan
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec3,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Same disk shifted along the Y axis
    pub fn translate_y(&self, distance: f32) -> Self {
        Self::new(self.center + Vec3::Y * distance, self.radius)
    }
}

/// Upright cylinder descriptor; `center` is the midpoint of its axis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylinder {
    pub center: Vec3,
    pub radius: f32,
    pub height: f32,
}

impl Cylinder {
    pub fn new(center: Vec3, radius: f32, height: f32) -> Self {
        Self {
            center,
            radius,
            height,
        }
    }

    /// The disk closing the top of the cylinder
    pub fn top(&self) -> Circle {
        Circle::new(self.center + Vec3::Y * (self.height / 2.0), self.radius)
    }
}

/// Axis-aligned box descriptor; width spans X, height Y, thickness Z
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    pub center: Vec3,
    pub width: f32,
    pub height: f32,
    pub thickness: f32,
}

impl Cuboid {
    pub fn new(center: Vec3, width: f32, height: f32, thickness: f32) -> Self {
        Self {
            center,
            width,
            height,
            thickness,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ray_normalizes_direction() {
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -5.0));
        assert_eq!(ray.direction, Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_sphere_hit() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Vec3::ZERO, 1.0);
        assert!(ray.intersects_sphere(&sphere));
    }

    #[test]
    fn test_sphere_miss() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Vec3::new(5.0, 0.0, 0.0), 1.0);
        assert!(!ray.intersects_sphere(&sphere));
    }

    #[test]
    fn test_sphere_behind_origin_still_hits() {
        // The test treats the ray as a full line, so a sphere behind
        // the origin registers too.
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0);
        assert!(ray.intersects_sphere(&sphere));
    }

    #[test]
    fn test_sphere_grazing_tolerance() {
        // Sphere center exactly radius away from the line: hit.
        let ray = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::new(0.0, 0.0, -1.0));
        let sphere = Sphere::new(Vec3::new(0.5, 0.0, 0.0), 1.0);
        assert!(ray.intersects_sphere(&sphere));
    }

    #[test]
    fn test_discriminant_matches_line_distance() {
        // Independent check: the quadratic test must agree with the
        // point-to-line distance |p x d| <= r for normalized d.
        let ray = Ray::new(Vec3::new(0.3, 1.0, 2.0), Vec3::new(-0.2, -0.5, -1.0));
        for i in 0..5 {
            for j in 0..5 {
                for k in 0..5 {
                    let center =
                        Vec3::new(i as f32 * 0.4 - 1.0, j as f32 * 0.3 - 0.5, k as f32 * 0.5);
                    let sphere = Sphere::new(center, 0.35);
                    let p = ray.origin - center;
                    let expected = p.cross(ray.direction).length() <= sphere.radius;
                    assert_eq!(
                        ray.intersects_sphere(&sphere),
                        expected,
                        "disagreement at {center:?}"
                    );
                }
            }
        }
    }

    #[test]
    fn test_plane_intersection_straight_down() {
        let ray = Ray::new(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, -1.0, 0.0));
        let hit = ray.intersect_plane(&Plane::table()).unwrap();
        assert_eq!(hit, Vec3::ZERO);
    }

    #[test]
    fn test_plane_intersection_oblique() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 1.0), Vec3::new(0.0, -1.0, -1.0));
        let hit = ray.intersect_plane(&Plane::table()).unwrap();
        assert!((hit - Vec3::ZERO).length() < 1e-6);
    }

    #[test]
    fn test_plane_parallel_ray_is_none() {
        let ray = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::new(1.0, 0.0, 0.0));
        assert!(ray.intersect_plane(&Plane::table()).is_none());
    }

    #[test]
    fn test_circle_translate_y() {
        let circle = Circle::new(Vec3::new(1.0, 2.0, 3.0), 0.5).translate_y(-0.5);
        assert_eq!(circle.center, Vec3::new(1.0, 1.5, 3.0));
        assert_eq!(circle.radius, 0.5);
    }

    #[test]
    fn test_cylinder_top() {
        let top = Cylinder::new(Vec3::ZERO, 0.06, 0.02).top();
        assert_eq!(top.center, Vec3::new(0.0, 0.01, 0.0));
        assert_eq!(top.radius, 0.06);
    }
}
