//! Glint - CPU path tracing
//!
//! A Monte Carlo path tracer over sphere scenes: rays leave the
//! camera through a jittered pixel grid, bounce through the scene
//! according to per-material scattering, and terminate against the
//! sky gradient or the bounce budget.
//!
//! All randomness flows through an explicit `RngCore` handle, so a
//! seeded generator reproduces a render bit-for-bit.

mod camera;
mod hittable;
mod material;
mod ppm;
mod renderer;
mod sampling;
mod sphere;

pub use camera::Camera;
pub use hittable::{HitRecord, Hittable, HittableList};
pub use material::{Color, Dielectric, Lambertian, Material, Metal};
pub use ppm::write_ppm;
pub use renderer::{ray_color, render, render_pixel, ImageBuffer, RenderConfig};
pub use sampling::{
    gen_f64, gen_range, random_in_unit_disk, random_in_unit_sphere, random_unit_vector,
    random_vec, random_vec_range,
};
pub use sphere::Sphere;

/// Re-export math types from glint_math
pub use glint_math::{Interval, Ray, Vec3};
