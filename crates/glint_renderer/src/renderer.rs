//! Core path tracing loop.
//!
//! Implements Monte Carlo path tracing with:
//! - Iterative bounce-and-attenuate integration with a depth budget
//! - Anti-aliasing via jittered multi-sampling
//! - Sky gradient background

use crate::{sampling::gen_f64, Camera, Color, Hittable};
use glint_math::{Interval, Ray};
use log::debug;
use rand::RngCore;

/// Render configuration.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Samples per pixel for anti-aliasing
    pub samples_per_pixel: u32,
    /// Maximum ray bounce depth
    pub max_depth: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            samples_per_pixel: 100,
            max_depth: 50,
        }
    }
}

/// Compute the color seen along a ray.
///
/// The recursion of the textbook formulation is flattened into a loop
/// carrying a running attenuation product: each bounce multiplies the
/// product, a miss resolves it against the sky gradient, absorption
/// and depth exhaustion resolve to black.
pub fn ray_color(ray: &Ray, world: &dyn Hittable, max_depth: u32, rng: &mut dyn RngCore) -> Color {
    let mut ray = *ray;
    let mut attenuation = Color::ONE;

    for _ in 0..max_depth {
        // t_min of 0.001 avoids shadow acne from re-hitting the
        // surface the bounce started on
        match world.hit(&ray, Interval::new(0.001, f64::INFINITY)) {
            Some(rec) => match rec.material.scatter(&ray, &rec, rng) {
                Some((albedo, scattered)) => {
                    attenuation *= albedo;
                    ray = scattered;
                }
                // Absorbed
                None => return Color::ZERO,
            },
            // Escaped into the sky
            None => return attenuation * sky_gradient(&ray),
        }
    }

    // Bounce budget exhausted
    Color::ZERO
}

/// Background: vertical white-to-blue gradient over the normalized
/// ray direction's y component.
fn sky_gradient(ray: &Ray) -> Color {
    let unit_direction = ray.direction.normalize();
    let a = 0.5 * (unit_direction.y + 1.0);
    let white = Color::new(1.0, 1.0, 1.0);
    let blue = Color::new(0.5, 0.7, 1.0);
    (1.0 - a) * white + a * blue
}

/// Render a single pixel with multi-sampling.
///
/// `j` counts scanlines from the bottom of the image, matching the
/// camera's t axis; the returned color is the average of all samples.
#[allow(clippy::too_many_arguments)]
pub fn render_pixel(
    camera: &Camera,
    world: &dyn Hittable,
    i: u32,
    j: u32,
    width: u32,
    height: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> Color {
    let mut pixel_color = Color::ZERO;

    for _ in 0..config.samples_per_pixel {
        let s = (i as f64 + gen_f64(rng)) / (width - 1) as f64;
        let t = (j as f64 + gen_f64(rng)) / (height - 1) as f64;
        let ray = camera.get_ray(s, t, rng);
        pixel_color += ray_color(&ray, world, config.max_depth, rng);
    }

    pixel_color / config.samples_per_pixel as f64
}

/// Simple image buffer for storing render output.
///
/// Pixels are stored row-major with the top row first.
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; (width * height) as usize],
        }
    }

    /// Get the pixel at (x, y), y = 0 at the top.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[(y * self.width + x) as usize]
    }

    /// Set the pixel at (x, y), y = 0 at the top.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[(y * self.width + x) as usize] = color;
    }
}

/// Render the entire scene to an image buffer.
///
/// Scanlines run from the top of the image down, like the output
/// format. The scene and camera are only read, so callers that want
/// pixel-level parallelism can split the loop themselves with one RNG
/// per worker; this driver stays serial.
pub fn render(
    camera: &Camera,
    world: &dyn Hittable,
    width: u32,
    height: u32,
    config: &RenderConfig,
    rng: &mut dyn RngCore,
) -> ImageBuffer {
    let mut image = ImageBuffer::new(width, height);

    for j in (0..height).rev() {
        debug!("scanlines remaining: {}", j);
        for i in 0..width {
            let color = render_pixel(camera, world, i, j, width, height, config, rng);
            image.set(i, height - 1 - j, color);
        }
    }

    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{HittableList, Lambertian, Sphere, Vec3};
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::sync::Arc;

    fn ground_world() -> HittableList {
        let mut world = HittableList::new();
        world.add(Box::new(Sphere::new(
            Vec3::new(0.0, -100.5, -1.0),
            100.0,
            Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0))),
        )));
        world
    }

    #[test]
    fn test_sky_gradient_endpoints() {
        let up = Ray::new(Vec3::ZERO, Vec3::Y);
        let down = Ray::new(Vec3::ZERO, -Vec3::Y);

        assert_eq!(sky_gradient(&up), Color::new(0.5, 0.7, 1.0));
        assert_eq!(sky_gradient(&down), Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ray_color_depth_zero_is_black() {
        let world = ground_world();
        let mut rng = StdRng::seed_from_u64(1);

        // Even a ray guaranteed to hit contributes nothing at depth 0
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -1.0, -1.0));
        assert_eq!(ray_color(&ray, &world, 0, &mut rng), Color::ZERO);
    }

    #[test]
    fn test_ray_color_miss_lies_on_the_sky_gradient() {
        let world = HittableList::new();
        let mut rng = StdRng::seed_from_u64(2);

        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        assert_eq!(ray_color(&ray, &world, 50, &mut rng), Color::new(0.5, 0.7, 1.0));

        let ray = Ray::new(Vec3::ZERO, -Vec3::Y);
        assert_eq!(ray_color(&ray, &world, 50, &mut rng), Color::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_ground_scene_terminates_with_finite_color() {
        let world = ground_world();
        let mut rng = StdRng::seed_from_u64(3);

        // Straight at the ground sphere with the full depth budget
        let ray = Ray::new(Vec3::ZERO, Vec3::new(0.0, -0.5, -1.0));
        let color = ray_color(&ray, &world, 50, &mut rng);

        for c in [color.x, color.y, color.z] {
            assert!(c.is_finite());
            assert!(c >= 0.0);
        }
    }

    #[test]
    fn test_render_pixel_averages_samples() {
        // Empty world: every sample resolves to the sky, so the pixel
        // average also lies between white and sky blue
        let world = HittableList::new();
        let camera = Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            1.0,
            0.0,
            1.0,
        );
        let config = RenderConfig {
            samples_per_pixel: 16,
            max_depth: 5,
        };
        let mut rng = StdRng::seed_from_u64(4);

        let color = render_pixel(&camera, &world, 5, 5, 10, 10, &config, &mut rng);
        assert!(color.x >= 0.5 && color.x <= 1.0);
        assert!(color.z >= color.x); // blue channel dominates the sky
    }

    #[test]
    fn test_render_fills_the_buffer_top_first() {
        let world = HittableList::new();
        let camera = Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            1.0,
            0.0,
            1.0,
        );
        let config = RenderConfig {
            samples_per_pixel: 4,
            max_depth: 5,
        };
        let mut rng = StdRng::seed_from_u64(5);

        let image = render(&camera, &world, 4, 4, &config, &mut rng);
        assert_eq!(image.pixels.len(), 16);

        // Sky gradient: the top row looks up (bluer, smaller red
        // channel) and the bottom row looks down (whiter)
        assert!(image.get(0, 0).x < image.get(0, 3).x);
    }

    #[test]
    fn test_render_is_reproducible_for_a_fixed_seed() {
        let world = ground_world();
        let camera = Camera::new(
            Vec3::ZERO,
            Vec3::new(0.0, 0.0, -1.0),
            Vec3::Y,
            90.0,
            1.0,
            0.0,
            1.0,
        );
        let config = RenderConfig {
            samples_per_pixel: 1,
            max_depth: 50,
        };

        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let image_a = render(&camera, &world, 3, 2, &config, &mut rng_a);
        let image_b = render(&camera, &world, 3, 2, &config, &mut rng_b);

        assert_eq!(image_a.pixels, image_b.pixels);
    }
}
