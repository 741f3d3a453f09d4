//! Per-call point emission: contraction, sampler dispatch, and the weighted sink update.
use glam::DVec3;
use tracing::debug;

use crate::config::{InternalMode, SampleConfiguration};
use crate::error::Result;
use crate::sampling::{
    contract, sample_edge, sample_face, sample_skeleton, Jitter, RandomSource, ScaledSolid,
    SkeletonStyle,
};
use crate::solid::{catalog, Solid};

pub mod sink;

pub use sink::PointSink;

/// Which sampler produced a point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SampleKind {
    /// Filled face.
    Surface,
    /// Face edge.
    Wireframe,
    /// Internal line.
    Skeleton(SkeletonStyle),
}

impl SampleKind {
    /// Pick the sampler for one call.
    ///
    /// Only spokes/web with surface lines enabled consume a draw: a fair coin between the
    /// wireframe and the internal lines.
    pub fn choose<R: RandomSource + ?Sized>(
        mode: InternalMode,
        surface_lines: bool,
        rng: &mut R,
    ) -> Self {
        let style = match mode {
            InternalMode::Solid => return SampleKind::Surface,
            InternalMode::Spokes => SkeletonStyle::Spokes,
            InternalMode::Web => SkeletonStyle::Web,
        };
        if surface_lines && rng.uniform_real() < 0.5 {
            SampleKind::Wireframe
        } else {
            SampleKind::Skeleton(style)
        }
    }
}

/// Emit one point for `config` into `sink`, weighted by `amplitude`.
pub fn emit<R, S>(config: &SampleConfiguration, rng: &mut R, sink: &mut S, amplitude: f64)
where
    R: RandomSource + ?Sized,
    S: PointSink + ?Sized,
{
    PointEmitter::bind(*config).emit_weighted(rng, sink, amplitude);
}

/// A configuration bound to its cached solid, ready to emit many points.
#[derive(Debug, Clone, Copy)]
pub struct PointEmitter {
    config: SampleConfiguration,
    solid: &'static Solid,
    jitter: Jitter,
}

impl PointEmitter {
    pub fn try_new(config: SampleConfiguration) -> Result<Self> {
        config.validate()?;
        Ok(Self::new(config))
    }

    pub fn new(config: SampleConfiguration) -> Self {
        debug_assert!(config.scale.is_finite(), "scale must be finite");
        debug_assert!(config.thickness >= 0.0, "thickness must be >= 0");

        debug!(
            "Emitter for {} ({} mode, depth {}, surface lines {}).",
            config.solid, config.internal_mode, config.recursion_depth, config.surface_lines
        );
        Self::bind(config)
    }

    fn bind(config: SampleConfiguration) -> Self {
        Self {
            config,
            solid: catalog::solid(config.solid),
            jitter: Jitter::new(config.thickness, config.scale),
        }
    }

    pub fn config(&self) -> &SampleConfiguration {
        &self.config
    }

    pub fn solid(&self) -> &'static Solid {
        self.solid
    }

    /// Add one point, weighted by the configured amplitude, to `sink`.
    pub fn emit<R, S>(&self, rng: &mut R, sink: &mut S)
    where
        R: RandomSource + ?Sized,
        S: PointSink + ?Sized,
    {
        self.emit_weighted(rng, sink, self.config.amplitude);
    }

    pub fn emit_weighted<R, S>(&self, rng: &mut R, sink: &mut S, amplitude: f64)
    where
        R: RandomSource + ?Sized,
        S: PointSink + ?Sized,
    {
        let (_, point) = self.sample_with_kind(rng);
        sink.add_point(point * amplitude);
    }

    /// One unweighted point.
    pub fn sample<R: RandomSource + ?Sized>(&self, rng: &mut R) -> DVec3 {
        self.sample_with_kind(rng).1
    }

    /// One unweighted point and the sampler that produced it.
    pub fn sample_with_kind<R: RandomSource + ?Sized>(&self, rng: &mut R) -> (SampleKind, DVec3) {
        let config = &self.config;
        let state = contract(
            self.solid.vertices(),
            config.scale,
            config.recursion_depth,
            rng,
        );
        let view = ScaledSolid::new(self.solid, state.active_scale);

        let kind = SampleKind::choose(config.internal_mode, config.surface_lines, rng);
        let local = match kind {
            SampleKind::Surface => sample_face(&view, rng),
            SampleKind::Wireframe => sample_edge(&view, self.jitter, rng),
            SampleKind::Skeleton(style) => sample_skeleton(&view, style, self.jitter, rng),
        };
        (kind, local + state.offset)
    }

    pub fn sample_many<R: RandomSource + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<DVec3> {
        (0..count).map(|_| self.sample(rng)).collect()
    }
}
