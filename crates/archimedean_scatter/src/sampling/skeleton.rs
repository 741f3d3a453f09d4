//! Internal line sampling: spokes from vertices to the solid's own center, or a web of
//! vertex-to-vertex chords.
use glam::DVec3;

use crate::sampling::edge::{sample_segment, Jitter};
use crate::sampling::{RandomSource, ScaledSolid};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkeletonStyle {
    /// Vertex to the local origin of the contracted copy.
    Spokes,
    /// Vertex to a second, distinct vertex.
    Web,
}

/// Random point on an internal line of `solid`.
///
/// For [`SkeletonStyle::Web`] a repeated second vertex is bumped to the next index
/// rather than redrawn.
pub fn sample_skeleton<R: RandomSource + ?Sized>(
    solid: &ScaledSolid<'_>,
    style: SkeletonStyle,
    jitter: Jitter,
    rng: &mut R,
) -> DVec3 {
    let count = solid.vertex_count();
    let a = rng.uniform_int(count);
    let end = match style {
        SkeletonStyle::Spokes => DVec3::ZERO,
        SkeletonStyle::Web => {
            let mut b = rng.uniform_int(count);
            if b == a {
                b = (b + 1) % count;
            }
            solid.vertex(b)
        }
    };
    sample_segment(solid.vertex(a), end, jitter, rng)
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::test_support::ScriptedSource;
    use crate::solid::{catalog, SolidType};

    #[test]
    fn spokes_run_to_local_origin() {
        let solid = catalog::solid(SolidType::Icosahedron);
        let view = ScaledSolid::new(solid, 2.0);
        let mut rng = ScriptedSource::new(&[1.0], &[4]);
        let p = sample_skeleton(&view, SkeletonStyle::Spokes, Jitter::NONE, &mut rng);
        assert!(p.length() < 1e-12);

        let mut rng = ScriptedSource::new(&[0.0], &[4]);
        let p = sample_skeleton(&view, SkeletonStyle::Spokes, Jitter::NONE, &mut rng);
        assert_eq!(p, view.vertex(4));
    }

    #[test]
    fn web_bumps_repeated_vertex_to_next_index() {
        let solid = catalog::solid(SolidType::Cuboctahedron);
        let view = ScaledSolid::new(solid, 1.0);

        let mut rng = ScriptedSource::new(&[1.0], &[5, 5]);
        let p = sample_skeleton(&view, SkeletonStyle::Web, Jitter::NONE, &mut rng);
        assert!(p.distance(view.vertex(6)) < 1e-12);

        // Wraps past the last vertex.
        let mut rng = ScriptedSource::new(&[1.0], &[11, 11]);
        let p = sample_skeleton(&view, SkeletonStyle::Web, Jitter::NONE, &mut rng);
        assert!(p.distance(view.vertex(0)) < 1e-12);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn web_never_produces_zero_length_chords() {
        let solid = catalog::solid(SolidType::TruncatedTetrahedron);
        let view = ScaledSolid::new(solid, 1.0);
        for a in 0..view.vertex_count() {
            let mut rng = ScriptedSource::new(&[0.5], &[a, a]);
            let p = sample_skeleton(&view, SkeletonStyle::Web, Jitter::NONE, &mut rng);
            let b = (a + 1) % view.vertex_count();
            let mid = (view.vertex(a) + view.vertex(b)) * 0.5;
            assert!(p.distance(mid) < 1e-12);
            assert!(view.vertex(a).distance(view.vertex(b)) > 0.0);
        }
    }

    #[test]
    fn jittered_spokes_stay_within_half_amplitude() {
        let solid = catalog::solid(SolidType::TruncatedOctahedron);
        let view = ScaledSolid::new(solid, 1.0);
        let jitter = Jitter::new(0.2, 1.0);
        let mut rng = StdRng::seed_from_u64(17);
        let limit = view.scale() * solid.max_vertex_norm() + 0.1 * 3f64.sqrt();
        for _ in 0..1000 {
            let p = sample_skeleton(&view, SkeletonStyle::Spokes, jitter, &mut rng);
            assert!(p.length() <= limit);
        }
    }
}
