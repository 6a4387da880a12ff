//! Camera for ray generation.

use crate::sampling::random_in_unit_disk;
use glint_math::{Ray, Vec3};
use rand::RngCore;

/// Camera mapping normalized image-plane coordinates to world-space
/// rays, with a thin lens for depth of field.
///
/// The orthonormal basis and viewport rectangle are derived once at
/// construction; the camera is immutable for the whole render, so it
/// can be read from any number of workers.
pub struct Camera {
    /// Center of the lens
    origin: Vec3,
    /// Lower left corner of the focus-plane viewport
    lower_left_corner: Vec3,
    /// Horizontal edge of the viewport
    horizontal: Vec3,
    /// Vertical edge of the viewport
    vertical: Vec3,
    u: Vec3,
    v: Vec3,
    lens_radius: f64,
}

impl Camera {
    /// Build a camera.
    ///
    /// - `vfov`: vertical field of view in degrees
    /// - `aperture`: lens diameter; 0 disables depth of field
    /// - `focus_dist`: distance to the plane of perfect focus
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        look_from: Vec3,
        look_at: Vec3,
        vup: Vec3,
        vfov: f64,
        aspect_ratio: f64,
        aperture: f64,
        focus_dist: f64,
    ) -> Self {
        let theta = vfov.to_radians();
        let h = (theta / 2.0).tan();
        let viewport_height = 2.0 * h;
        let viewport_width = aspect_ratio * viewport_height;

        // Camera basis vectors
        let w = (look_from - look_at).normalize();
        let u = vup.cross(w).normalize();
        let v = w.cross(u);

        let origin = look_from;
        let horizontal = focus_dist * viewport_width * u;
        let vertical = focus_dist * viewport_height * v;
        let lower_left_corner = origin - horizontal / 2.0 - vertical / 2.0 - focus_dist * w;

        Self {
            origin,
            lower_left_corner,
            horizontal,
            vertical,
            u,
            v,
            lens_radius: aperture / 2.0,
        }
    }

    /// Generate a ray through normalized image coordinates (s, t),
    /// both in [0, 1], sampling the lens disk for depth of field.
    ///
    /// Points on the focus plane stay sharp because the viewport sits
    /// on it; everything else defocuses in proportion to the lens
    /// offset.
    pub fn get_ray(&self, s: f64, t: f64, rng: &mut dyn RngCore) -> Ray {
        let rd = self.lens_radius * random_in_unit_disk(rng);
        let offset = self.u * rd.x + self.v * rd.y;

        Ray::new(
            self.origin + offset,
            self.lower_left_corner + s * self.horizontal + t * self.vertical
                - self.origin
                - offset,
        )
    }
}
