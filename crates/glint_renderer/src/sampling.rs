//! Random sampling helpers.
//!
//! Every function takes an explicit `RngCore` handle; callers own the
//! generator and its seed, which keeps renders reproducible and lets
//! parallel callers hold one generator per worker.

use crate::Vec3;
use rand::{Rng, RngCore};
use std::f64::consts::TAU;

/// Uniform sample in [0, 1).
#[inline]
pub fn gen_f64(rng: &mut dyn RngCore) -> f64 {
    rng.gen()
}

/// Uniform sample in [min, max).
#[inline]
pub fn gen_range(rng: &mut dyn RngCore, min: f64, max: f64) -> f64 {
    rng.gen_range(min..max)
}

/// Vector with each component uniform in [0, 1).
pub fn random_vec(rng: &mut dyn RngCore) -> Vec3 {
    Vec3::new(gen_f64(rng), gen_f64(rng), gen_f64(rng))
}

/// Vector with each component uniform in [min, max).
pub fn random_vec_range(rng: &mut dyn RngCore, min: f64, max: f64) -> Vec3 {
    Vec3::new(
        gen_range(rng, min, max),
        gen_range(rng, min, max),
        gen_range(rng, min, max),
    )
}

/// Uniform point on the unit sphere surface.
///
/// Exact construction from a random azimuth and a random z; no
/// rejection loop.
pub fn random_unit_vector(rng: &mut dyn RngCore) -> Vec3 {
    let phi = gen_range(rng, 0.0, TAU);
    let z = gen_range(rng, -1.0, 1.0);
    let r = (1.0 - z * z).sqrt();
    Vec3::new(r * phi.cos(), r * phi.sin(), z)
}

/// Random point inside the unit sphere: a uniform scale in [0, 1)
/// applied to a surface sample.
pub fn random_in_unit_sphere(rng: &mut dyn RngCore) -> Vec3 {
    gen_f64(rng) * random_unit_vector(rng)
}

/// Random point inside the unit disk (z = 0), by rejection sampling.
pub fn random_in_unit_disk(rng: &mut dyn RngCore) -> Vec3 {
    loop {
        let p = Vec3::new(gen_range(rng, -1.0, 1.0), gen_range(rng, -1.0, 1.0), 0.0);
        if p.length_squared() < 1.0 {
            return p;
        }
    }
}
