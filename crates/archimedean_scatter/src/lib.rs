#![forbid(unsafe_code)]
//! archimedean_scatter: Point sampling on Archimedean and Platonic solids.
//!
//! Modules:
//! - solid: vertex generators, weighted face catalogs, and the shared geometry cache
//! - sampling: chaos-game contraction plus face, edge, and internal-line samplers
//! - emit: per-call dispatch into a [`emit::PointSink`]
//! - config: sampling parameters and the by-name host parameter boundary
//!
//! For examples and docs, see README and docs.rs.
pub mod config;
pub mod emit;
pub mod error;
pub mod sampling;
pub mod solid;

/// Convenient re-exports for common types. Import with `use archimedean_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::config::{InternalMode, SampleConfiguration, PARAMETER_NAMES, VARIATION_NAME};
    pub use crate::emit::{emit, PointEmitter, PointSink, SampleKind};
    pub use crate::error::{Error, Result};
    pub use crate::sampling::{ContractionState, Jitter, RandomSource, SkeletonStyle};
    pub use crate::solid::catalog;
    pub use crate::solid::{FaceCategory, Solid, SolidType};
}
