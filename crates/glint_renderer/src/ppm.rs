//! ASCII PPM ("P3") serialization.

use crate::renderer::ImageBuffer;
use glint_math::Interval;
use std::io::{self, Write};

/// Quantize one linear channel to the PPM integer range.
///
/// Non-finite or negative values map to 0 (the one deterministic
/// behavior chosen for degenerate math upstream); otherwise gamma 2.0
/// via sqrt, clamp to [0, 0.999], scale by 256 and truncate.
fn to_channel(c: f64) -> i32 {
    let c = if c.is_finite() && c > 0.0 {
        c.sqrt()
    } else {
        0.0
    };
    let intensity = Interval::new(0.0, 0.999);
    (256.0 * intensity.clamp(c)) as i32
}

/// Write the image as ASCII PPM: `P3` header, dimensions, max channel
/// value 255, then one `R G B` line per pixel, top row first.
pub fn write_ppm(image: &ImageBuffer, out: &mut dyn Write) -> io::Result<()> {
    writeln!(out, "P3")?;
    writeln!(out, "{} {}", image.width, image.height)?;
    writeln!(out, "255")?;

    for pixel in &image.pixels {
        writeln!(
            out,
            "{} {} {}",
            to_channel(pixel.x),
            to_channel(pixel.y),
            to_channel(pixel.z)
        )?;
    }

    Ok(())
}
