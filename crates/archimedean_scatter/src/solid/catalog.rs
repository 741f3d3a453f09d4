//! Shared, lazily built geometry for every [`SolidType`].
//!
//! Building a [`Solid`] is pure, so each one is constructed at most once per process and
//! handed out as a `&'static` reference. Nothing in the catalog is mutated after
//! construction, which makes it safe to share between threads.
use std::sync::OnceLock;

use glam::DVec3;
use tracing::debug;

use crate::solid::{faces, vertices, FaceCategory, Solid, SolidType};

static CATALOG: [OnceLock<Solid>; SolidType::COUNT] =
    [const { OnceLock::new() }; SolidType::COUNT];

/// Fresh unit-scale vertex list for `kind`.
pub fn vertices(kind: SolidType) -> Vec<DVec3> {
    vertices::generate(kind)
}

/// Fresh face catalog for `kind`.
pub fn face_categories(kind: SolidType) -> Vec<FaceCategory> {
    faces::categories(kind)
}

/// Cached geometry for `kind`, built on first use.
pub fn solid(kind: SolidType) -> &'static Solid {
    CATALOG[kind.index()].get_or_init(|| {
        let solid = Solid::build(kind);
        debug!(
            "Built {} geometry: {} vertices, {} faces in {} categories.",
            kind,
            solid.vertex_count(),
            solid.face_count(),
            solid.categories().len()
        );
        solid
    })
}

/// Build every solid up front, e.g. before handing the catalog to worker threads.
pub fn warm() {
    for kind in SolidType::ALL {
        solid(kind);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cached_solid_is_shared() {
        let a = solid(SolidType::TruncatedIcosahedron);
        let b = solid(SolidType::TruncatedIcosahedron);
        assert!(std::ptr::eq(a, b));
        assert_eq!(a.kind(), SolidType::TruncatedIcosahedron);
    }

    #[test]
    fn cached_solid_matches_fresh_builders() {
        for kind in SolidType::ALL {
            let cached = solid(kind);
            assert_eq!(cached.vertices(), vertices(kind).as_slice());
            assert_eq!(cached.categories(), face_categories(kind).as_slice());
        }
    }

    #[test]
    fn catalog_is_usable_from_many_threads() {
        let handles: Vec<_> = SolidType::ALL
            .into_iter()
            .map(|kind| std::thread::spawn(move || solid(kind).vertex_count()))
            .collect();
        for (kind, handle) in SolidType::ALL.into_iter().zip(handles) {
            assert_eq!(handle.join().unwrap(), kind.vertex_count());
        }
    }

    #[test]
    fn edge_counts_are_consistent() {
        let expected = [24, 36, 36, 48, 72, 18, 30, 120, 90, 60];
        for (kind, edges) in SolidType::ALL.into_iter().zip(expected) {
            assert_eq!(solid(kind).edge_count(), edges, "{kind}");
        }
    }

    #[test]
    fn category_thresholds_rise_to_one() {
        for kind in SolidType::ALL {
            let s = solid(kind);
            let thresholds = s.category_table().thresholds();
            assert_eq!(thresholds.len(), s.categories().len(), "{kind}");
            assert!(thresholds.windows(2).all(|w| w[0] < w[1]), "{kind}: {thresholds:?}");
            let last = thresholds.last().copied().unwrap_or_default();
            assert!((last - 1.0).abs() < 1e-12, "{kind}: {last}");
        }
    }

    #[test]
    fn max_norm_is_positive_for_every_solid() {
        warm();
        for kind in SolidType::ALL {
            let s = solid(kind);
            assert!(s.max_vertex_norm() > 1.0);
            assert!(s
                .vertices()
                .iter()
                .all(|v| v.length() <= s.max_vertex_norm()));
        }
    }
}
