//! Wireframe sampling and the shared thick-line primitive.
use glam::DVec3;

use crate::sampling::{RandomSource, ScaledSolid};

/// Per-axis jitter applied to line samples.
///
/// The amplitude is `thickness * scale` with the configured (nominal) scale, so line width
/// tracks the solid's nominal size rather than shrinking with contraction depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Jitter {
    amplitude: f64,
}

impl Jitter {
    pub const NONE: Jitter = Jitter { amplitude: 0.0 };

    pub fn new(thickness: f64, nominal_scale: f64) -> Self {
        if thickness > 0.0 {
            Self {
                amplitude: thickness * nominal_scale,
            }
        } else {
            Self::NONE
        }
    }

    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    pub fn is_none(&self) -> bool {
        self.amplitude == 0.0
    }

    /// Offset with each axis in `[-amplitude / 2, amplitude / 2)`. Draws nothing when disabled.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> DVec3 {
        if self.is_none() {
            return DVec3::ZERO;
        }
        let x = (rng.uniform_real() - 0.5) * self.amplitude;
        let y = (rng.uniform_real() - 0.5) * self.amplitude;
        let z = (rng.uniform_real() - 0.5) * self.amplitude;
        DVec3::new(x, y, z)
    }
}

/// Random point on the segment `start..end`, plus jitter.
///
/// Coincident endpoints simply return that point (plus jitter).
pub fn sample_segment<R: RandomSource + ?Sized>(
    start: DVec3,
    end: DVec3,
    jitter: Jitter,
    rng: &mut R,
) -> DVec3 {
    let t = rng.uniform_real();
    start.lerp(end, t) + jitter.sample(rng)
}

/// Random point on a random edge of a category-weighted face.
pub fn sample_edge<R: RandomSource + ?Sized>(
    solid: &ScaledSolid<'_>,
    jitter: Jitter,
    rng: &mut R,
) -> DVec3 {
    let face = solid.pick_face(rng);
    let k = face.len();
    let edge = rng.uniform_int(k);
    let start = solid.vertex(face[edge]);
    let end = solid.vertex(face[(edge + 1) % k]);
    sample_segment(start, end, jitter, rng)
}
