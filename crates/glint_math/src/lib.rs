//! Math primitives for the glint path tracer.
//!
//! Positions, directions, and colors all share the double-precision
//! `Vec3` type; `Ray` and `Interval` are the two small types built on
//! top of it.

/// Double-precision 3-component vector from glam.
pub use glam::DVec3 as Vec3;

mod interval;
mod ray;

pub use interval::Interval;
pub use ray::Ray;
