//! Filled-face sampling.
//!
//! A face is picked by category weight, fanned into `k - 2` triangles from its first
//! vertex, and one triangle is chosen uniformly by count. The point inside it comes from
//! two uniforms folded back across the diagonal. Density is therefore uniform within each
//! fan triangle but not across a polygon whose fan triangles differ in area.
use glam::DVec3;

use crate::sampling::{RandomSource, ScaledSolid};

/// Random point on the filled surface of `solid`.
pub fn sample_face<R: RandomSource + ?Sized>(solid: &ScaledSolid<'_>, rng: &mut R) -> DVec3 {
    let face = solid.pick_face(rng);
    sample_polygon(solid, face, rng)
}

/// Random point on one face, given as vertex indices in boundary order.
pub fn sample_polygon<R: RandomSource + ?Sized>(
    solid: &ScaledSolid<'_>,
    face: &[usize],
    rng: &mut R,
) -> DVec3 {
    let tri = rng.uniform_int(face.len() - 2);
    let a = rng.uniform_real();
    let b = rng.uniform_real();
    sample_triangle(
        solid.vertex(face[0]),
        solid.vertex(face[tri + 1]),
        solid.vertex(face[tri + 2]),
        a,
        b,
    )
}

/// Barycentric point `p0 + a (p1 - p0) + b (p2 - p0)`, folding `(a, b)` back into the
/// triangle when `a + b > 1`.
#[inline]
pub fn sample_triangle(p0: DVec3, p1: DVec3, p2: DVec3, a: f64, b: f64) -> DVec3 {
    let (a, b) = if a + b > 1.0 {
        (1.0 - a, 1.0 - b)
    } else {
        (a, b)
    };
    p0 + (p1 - p0) * a + (p2 - p0) * b
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;
    use crate::sampling::test_support::ScriptedSource;
    use crate::solid::{catalog, SolidType};

    fn inside_triangle(p: DVec3, p0: DVec3, p1: DVec3, p2: DVec3) -> bool {
        let n = (p1 - p0).cross(p2 - p0);
        let area = n.length();
        let coplanar = (p - p0).dot(n).abs() / area < 1e-9;
        let w0 = (p1 - p).cross(p2 - p).dot(n) / (area * area);
        let w1 = (p2 - p).cross(p0 - p).dot(n) / (area * area);
        let w2 = 1.0 - w0 - w1;
        coplanar && [w0, w1, w2].iter().all(|w| *w >= -1e-9)
    }

    #[test]
    fn fold_keeps_points_inside() {
        let p0 = DVec3::ZERO;
        let p1 = DVec3::X;
        let p2 = DVec3::Y;
        assert_eq!(sample_triangle(p0, p1, p2, 0.25, 0.25), DVec3::new(0.25, 0.25, 0.0));
        assert_eq!(sample_triangle(p0, p1, p2, 0.75, 0.75), DVec3::new(0.25, 0.25, 0.0));
        assert_eq!(sample_triangle(p0, p1, p2, 1.0, 0.0), p1);
        assert_eq!(sample_triangle(p0, p1, p2, 0.0, 0.0), p0);
    }

    #[test]
    fn fan_triangle_is_picked_by_count() {
        let solid = catalog::solid(SolidType::TruncatedCube);
        let view = ScaledSolid::new(solid, 1.0);
        let octagon = solid.categories()[1].face(0);

        // Triangle 5 of the fan is (v0, v6, v7); a = b = 0 lands on v0, a = 1 on v6.
        let mut rng = ScriptedSource::new(&[1.0, 0.0], &[5]);
        let p = sample_polygon(&view, octagon, &mut rng);
        assert!(p.distance(view.vertex(octagon[6])) < 1e-12);
        assert!(rng.is_exhausted());
    }

    #[test]
    fn samples_lie_in_the_chosen_fan_triangle() {
        let mut rng = StdRng::seed_from_u64(11);
        for kind in SolidType::ALL {
            let solid = catalog::solid(kind);
            let view = ScaledSolid::new(solid, 0.75);
            for category in solid.categories() {
                for face in category.faces() {
                    for _ in 0..16 {
                        let p = sample_polygon(&view, face, &mut rng);
                        let hit = (0..face.len() - 2).any(|t| {
                            inside_triangle(
                                p,
                                view.vertex(face[0]),
                                view.vertex(face[t + 1]),
                                view.vertex(face[t + 2]),
                            )
                        });
                        assert!(hit, "{kind}: {p} outside {face:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn square_face_is_uniform_across_both_fan_triangles() {
        // Square 0 of the cuboctahedron lies in x = 1 as a diamond |y| + |z| <= 1.
        let solid = catalog::solid(SolidType::Cuboctahedron);
        let view = ScaledSolid::new(solid, 1.0);
        let square = solid.categories()[0].face(0);
        assert_eq!(square.len(), 4);

        const GRID: usize = 4;
        const SAMPLES: usize = 32_000;
        let mut counts = [0usize; GRID * GRID];
        let mut rng = StdRng::seed_from_u64(2025);

        for _ in 0..SAMPLES {
            let p = sample_polygon(&view, square, &mut rng);
            assert!((p.x - 1.0).abs() < 1e-12);
            let u = ((p.y + p.z + 1.0) * 0.5).clamp(0.0, 1.0 - 1e-12);
            let v = ((p.y - p.z + 1.0) * 0.5).clamp(0.0, 1.0 - 1e-12);
            let cell = (u * GRID as f64) as usize * GRID + (v * GRID as f64) as usize;
            counts[cell] += 1;
        }

        let expected = SAMPLES as f64 / (GRID * GRID) as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| (c as f64 - expected).powi(2) / expected)
            .sum();
        // 15 degrees of freedom; the 0.001 critical value is 37.7.
        assert!(chi2 < 45.0, "chi-square {chi2} for {counts:?}");
    }
}
