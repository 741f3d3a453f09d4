//! Point samplers over a contracted solid.
//!
//! This module defines the [`RandomSource`] seam and the primitives shared by the
//! samplers:
//! - [`contraction`]: bounded chaos-game contraction yielding a scale and an offset.
//! - [`face`]: category-weighted, fan-triangulated barycentric sampling of filled faces.
//! - [`edge`]: wireframe sampling along face edges with optional jitter.
//! - [`skeleton`]: internal spokes (vertex to center) and web (vertex to vertex) lines.
use glam::DVec3;
use rand::Rng;

use crate::solid::Solid;

pub mod contraction;
pub mod edge;
pub mod face;
pub mod skeleton;

pub use contraction::{contract, ContractionState};
pub use edge::{sample_edge, sample_segment, Jitter};
pub use face::{sample_face, sample_polygon, sample_triangle};
pub use skeleton::{sample_skeleton, SkeletonStyle};

/// Source of the two kinds of draws the samplers consume.
pub trait RandomSource {
    /// Uniform real in [0, 1).
    fn uniform_real(&mut self) -> f64;

    /// Uniform integer in [0, n). Returns 0 when `n == 0`.
    fn uniform_int(&mut self, n: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn uniform_real(&mut self) -> f64 {
        rand01(self)
    }

    #[inline]
    fn uniform_int(&mut self, n: usize) -> usize {
        let i = (rand01(self) * n as f64) as usize;
        i.min(n.saturating_sub(1))
    }
}

/// Generate a random float in the range [0, 1) from the top 53 bits of a `u64`.
#[inline]
pub(crate) fn rand01<R: Rng + ?Sized>(rng: &mut R) -> f64 {
    (rng.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
}

/// A solid viewed at the scale produced by contraction.
///
/// Vertices are scaled on access instead of copying the vertex list per call.
#[derive(Debug, Clone, Copy)]
pub struct ScaledSolid<'a> {
    solid: &'a Solid,
    scale: f64,
}

impl<'a> ScaledSolid<'a> {
    pub fn new(solid: &'a Solid, scale: f64) -> Self {
        Self { solid, scale }
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    #[inline]
    pub fn vertex(&self, index: usize) -> DVec3 {
        self.solid.vertices()[index] * self.scale
    }

    pub fn vertex_count(&self) -> usize {
        self.solid.vertex_count()
    }

    /// Draw a category by weight, then a face within it uniformly.
    pub fn pick_face<R: RandomSource + ?Sized>(&self, rng: &mut R) -> &'a [usize] {
        let category = self.solid.category_for(rng.uniform_real());
        category.face(rng.uniform_int(category.len()))
    }
}


#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use rand::rngs::StdRng;
    use rand::{SeedableRng, TryRng};

    use super::*;
    use crate::solid::catalog;
    use crate::solid::SolidType;

    struct FixedRng {
        value: u64,
    }

    impl TryRng for FixedRng {
        type Error = Infallible;

        fn try_next_u32(&mut self) -> Result<u32, Infallible> {
            Ok((self.value >> 32) as u32)
        }

        fn try_next_u64(&mut self) -> Result<u64, Infallible> {
            Ok(self.value)
        }

        fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Infallible> {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
            Ok(())
        }
    }

    #[test]
    fn uniform_real_stays_below_one() {
        let mut rng = FixedRng { value: u64::MAX };
        let x = rng.uniform_real();
        assert!(x < 1.0);
        assert!(x > 0.999_999);

        let mut rng = FixedRng { value: 0 };
        assert_eq!(rng.uniform_real(), 0.0);
    }

    #[test]
    fn uniform_int_covers_range_without_overflow() {
        let mut rng = FixedRng { value: u64::MAX };
        assert_eq!(rng.uniform_int(12), 11);
        assert_eq!(rng.uniform_int(0), 0);

        let mut rng = FixedRng { value: 0 };
        assert_eq!(rng.uniform_int(60), 0);
    }

    #[test]
    fn uniform_int_hits_every_bucket() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut seen = [0usize; 6];
        for _ in 0..6000 {
            seen[rng.uniform_int(6)] += 1;
        }
        assert!(seen.iter().all(|&n| n > 800), "{seen:?}");
    }

    #[test]
    fn works_through_dyn_rng() {
        let mut rng = StdRng::seed_from_u64(3);
        let dyn_rng: &mut dyn Rng = &mut rng;
        let x = dyn_rng.uniform_real();
        assert!((0.0..1.0).contains(&x));
    }

    #[test]
    fn scaled_vertices_follow_scale() {
        let solid = catalog::solid(SolidType::Cuboctahedron);
        let view = ScaledSolid::new(solid, 2.5);
        assert_eq!(view.vertex(0), DVec3::new(2.5, 2.5, 0.0));
        assert_eq!(view.vertex_count(), 12);
    }

    #[test]
    fn pick_face_uses_category_then_face_draw() {
        let solid = catalog::solid(SolidType::Cuboctahedron);
        let view = ScaledSolid::new(solid, 1.0);

        let mut rng = test_support::ScriptedSource::new(&[0.1], &[2]);
        assert_eq!(view.pick_face(&mut rng), &[0, 9, 2, 8]);

        let mut rng = test_support::ScriptedSource::new(&[0.9], &[7]);
        assert_eq!(view.pick_face(&mut rng), &[3, 7, 11]);
        assert!(rng.is_exhausted());
    }
}
