//! Sphere primitive for ray tracing.

use crate::{
    hittable::{HitRecord, Hittable},
    Material,
};
use glint_math::{Interval, Ray, Vec3};
use std::sync::Arc;

/// A sphere primitive.
///
/// The material is shared, so many spheres can reference one material
/// instance. A negative radius is legal: the intersection geometry is
/// identical to the positive-radius sphere of the same magnitude, but
/// the outward normal `(p - center) / radius` flips sign, which turns
/// a nested negative-radius sphere into the inner wall of a hollow
/// glass shell.
pub struct Sphere {
    center: Vec3,
    radius: f64,
    material: Arc<dyn Material>,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(center: Vec3, radius: f64, material: Arc<dyn Material>) -> Self {
        Self {
            center,
            radius,
            material,
        }
    }
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, ray_t: Interval) -> Option<HitRecord<'_>> {
        let oc = ray.origin - self.center;
        let a = ray.direction.length_squared();
        let half_b = oc.dot(ray.direction);
        let c = oc.length_squared() - self.radius * self.radius;

        let discriminant = half_b * half_b - a * c;
        if discriminant <= 0.0 {
            return None;
        }
        let sqrtd = discriminant.sqrt();

        // Find the nearest root in the acceptable range, smaller first
        let mut root = (-half_b - sqrtd) / a;
        if !ray_t.surrounds(root) {
            root = (-half_b + sqrtd) / a;
            if !ray_t.surrounds(root) {
                return None;
            }
        }

        let outward_normal = (ray.at(root) - self.center) / self.radius;
        Some(HitRecord::new(
            ray,
            root,
            outward_normal,
            self.material.as_ref(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::material::Lambertian;
    use crate::Color;

    fn unit_half_sphere(radius: f64) -> Sphere {
        Sphere::new(
            Vec3::new(0.0, 0.0, -1.0),
            radius,
            Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5))),
        )
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_half_sphere(0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let interval = Interval::new(0.001, f64::INFINITY);

        let rec = sphere.hit(&ray, interval).expect("head-on ray should hit");
        assert!((rec.t - 0.5).abs() < 1e-9);
        assert!(interval.surrounds(rec.t));

        // Hit point matches ray.at(t) and the normal opposes the ray
        assert!((rec.p - ray.at(rec.t)).length() < 1e-12);
        assert!((rec.normal.length() - 1.0).abs() < 1e-9);
        assert!(rec.front_face);
        assert!(ray.direction.dot(rec.normal) < 0.0);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_half_sphere(0.5);

        // Ray pointing away from the sphere
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 1.0, 0.0));
        assert!(sphere
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .is_none());
    }

    #[test]
    fn test_sphere_hit_from_inside() {
        let sphere = unit_half_sphere(0.5);

        // Origin inside the sphere; the smaller root is behind t_min
        let ray = Ray::new(Vec3::new(0.0, 0.0, -1.0), Vec3::new(0.0, 0.0, -1.0));
        let rec = sphere
            .hit(&ray, Interval::new(0.001, f64::INFINITY))
            .expect("ray from the center should hit the far wall");

        assert!((rec.t - 0.5).abs() < 1e-9);
        assert!(!rec.front_face);
        assert!(ray.direction.dot(rec.normal) < 0.0);
    }

    #[test]
    fn test_negative_radius_same_geometry_inverted_normal() {
        let outer = unit_half_sphere(0.5);
        let inner = unit_half_sphere(-0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));
        let interval = Interval::new(0.001, f64::INFINITY);

        let rec_pos = outer.hit(&ray, interval).unwrap();
        let rec_neg = inner.hit(&ray, interval).unwrap();

        // Identical hit geometry, opposite outward normal. Since the
        // stored normal is re-oriented against the ray, the two
        // records differ only in the front_face flag.
        assert!((rec_pos.t - rec_neg.t).abs() < 1e-12);
        assert!((rec_pos.p - rec_neg.p).length() < 1e-12);
        assert_eq!(rec_pos.normal, rec_neg.normal);
        assert!(rec_pos.front_face);
        assert!(!rec_neg.front_face);
    }

    #[test]
    fn test_t_bounds_are_strict() {
        let sphere = unit_half_sphere(0.5);
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, 0.0, -1.0));

        // The near surface is at exactly t = 0.5; an interval ending
        // there must not report a hit on the near wall, so the far
        // wall at t = 1.5 is the next candidate and is also excluded.
        assert!(sphere.hit(&ray, Interval::new(0.001, 0.5)).is_none());
        let rec = sphere.hit(&ray, Interval::new(0.5, 2.0)).unwrap();
        assert!((rec.t - 1.5).abs() < 1e-9);
    }
}
