//! Bounded chaos-game contraction.
//!
//! Each level halves the active scale and moves the offset toward a randomly chosen
//! vertex at that new scale. The step sizes form the series `1/2 + 1/4 + ...`, so the
//! offset stays strictly inside a ball of radius `scale * max_vertex_norm` at any depth.
use glam::DVec3;

use crate::sampling::RandomSource;

/// Scale and translation of one contracted copy of the solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContractionState {
    pub active_scale: f64,
    pub offset: DVec3,
}

impl ContractionState {
    /// The untouched solid at `scale`.
    pub fn identity(scale: f64) -> Self {
        Self {
            active_scale: scale,
            offset: DVec3::ZERO,
        }
    }
}

/// Run `depth` contraction steps over unit-scale `vertices`.
///
/// Draws exactly one vertex index per level; depth 0 draws nothing.
pub fn contract<R: RandomSource + ?Sized>(
    vertices: &[DVec3],
    scale: f64,
    depth: u32,
    rng: &mut R,
) -> ContractionState {
    let mut state = ContractionState::identity(scale);
    for _ in 0..depth {
        let v = rng.uniform_int(vertices.len());
        state.active_scale *= 0.5;
        state.offset += vertices[v] * state.active_scale;
    }
    state
}
