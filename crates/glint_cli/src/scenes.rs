//! Built-in scenes.
//!
//! Scenes are constructed in code; the renderer takes them as plain
//! in-memory hittable lists.

use glint_renderer::{
    gen_f64, gen_range, random_vec, random_vec_range, Camera, Color, Dielectric, HittableList,
    Lambertian, Material, Metal, Sphere, Vec3,
};
use rand::RngCore;
use std::sync::Arc;

/// The randomized "cover" scene: a grey ground sphere, a 22x22
/// jittered grid of small spheres with a mixed material lottery, and
/// three large feature spheres.
pub fn cover_scene(rng: &mut dyn RngCore) -> HittableList {
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.5, 0.5, 0.5)));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -1000.0, 0.0),
        1000.0,
        ground,
    )));

    for a in -11..11 {
        for b in -11..11 {
            let choose_mat = gen_f64(rng);
            let center = Vec3::new(
                a as f64 + 0.9 * gen_f64(rng),
                0.2,
                b as f64 + 0.9 * gen_f64(rng),
            );

            // Keep clear of the metal feature sphere
            if (center - Vec3::new(4.0, 0.2, 0.0)).length() <= 0.9 {
                continue;
            }

            let material: Arc<dyn Material> = if choose_mat < 0.8 {
                // diffuse
                let albedo = random_vec(rng) * random_vec(rng);
                Arc::new(Lambertian::new(albedo))
            } else if choose_mat < 0.95 {
                // metal
                let albedo = random_vec_range(rng, 0.5, 1.0);
                let fuzz = gen_range(rng, 0.0, 0.5);
                Arc::new(Metal::new(albedo, fuzz))
            } else {
                // glass
                Arc::new(Dielectric::new(1.5))
            };
            world.add(Box::new(Sphere::new(center, 0.2, material)));
        }
    }

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 1.0, 0.0),
        1.0,
        Arc::new(Dielectric::new(1.5)),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-4.0, 1.0, 0.0),
        1.0,
        Arc::new(Lambertian::new(Color::new(0.4, 0.2, 0.1))),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(4.0, 1.0, 0.0),
        1.0,
        Arc::new(Metal::new(Color::new(0.7, 0.6, 0.5), 0.0)),
    )));

    world
}

/// Camera for the cover scene: a long lens from (13, 2, 3) with a
/// touch of depth of field.
pub fn cover_camera(aspect_ratio: f64) -> Camera {
    Camera::new(
        Vec3::new(13.0, 2.0, 3.0),
        Vec3::ZERO,
        Vec3::Y,
        20.0,
        aspect_ratio,
        0.1,
        10.0,
    )
}

/// Small fixed scene with a hollow glass sphere: the outer shell and
/// the inner negative-radius shell share one dielectric material.
pub fn demo_scene() -> HittableList {
    let mut world = HittableList::new();

    let ground: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.8, 0.8, 0.0)));
    let center: Arc<dyn Material> = Arc::new(Lambertian::new(Color::new(0.1, 0.2, 0.5)));
    let glass: Arc<dyn Material> = Arc::new(Dielectric::new(1.5));
    let metal: Arc<dyn Material> = Arc::new(Metal::new(Color::new(0.8, 0.6, 0.2), 0.0));

    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, -100.5, -1.0),
        100.0,
        ground,
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(0.0, 0.0, -1.0),
        0.5,
        center,
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        0.5,
        Arc::clone(&glass),
    )));
    world.add(Box::new(Sphere::new(
        Vec3::new(-1.0, 0.0, -1.0),
        -0.45,
        glass,
    )));
    world.add(Box::new(Sphere::new(Vec3::new(1.0, 0.0, -1.0), 0.5, metal)));

    world
}

/// Camera for the demo scene, pinhole (no depth of field).
pub fn demo_camera(aspect_ratio: f64) -> Camera {
    let look_from = Vec3::new(-2.0, 2.0, 1.0);
    let look_at = Vec3::new(0.0, 0.0, -1.0);
    let focus_dist = (look_from - look_at).length();

    Camera::new(look_from, look_at, Vec3::Y, 20.0, aspect_ratio, 0.0, focus_dist)
}
