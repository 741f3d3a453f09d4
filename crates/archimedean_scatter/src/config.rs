//! Sampling configuration and the host parameter boundary.
//!
//! [`SampleConfiguration`] is an immutable value: hosts derive a new one per change, either
//! through the typed `with_*` builders or by name through
//! [`SampleConfiguration::with_parameter`], which clamps out-of-range values the same way
//! the host UI does. The sampling core trusts whatever it receives.
use std::fmt;
use std::str::FromStr;

use tracing::warn;

use crate::error::{Error, Result};
use crate::solid::SolidType;

/// Name under which hosts register this sampler.
pub const VARIATION_NAME: &str = "archimedean";

pub const PARAM_SCALE: &str = "scale";
pub const PARAM_THICKNESS: &str = "thickness";
pub const PARAM_INTERNAL_MODE: &str = "internal_mode";
pub const PARAM_RECURSION_DEPTH: &str = "recursion_depth";
pub const PARAM_TYPE: &str = "type";
pub const PARAM_SURFACE_LINES: &str = "surface_lines";

/// Host parameter names, in host order.
pub const PARAMETER_NAMES: [&str; 6] = [
    PARAM_SCALE,
    PARAM_THICKNESS,
    PARAM_INTERNAL_MODE,
    PARAM_RECURSION_DEPTH,
    PARAM_TYPE,
    PARAM_SURFACE_LINES,
];

/// What the sampler draws when not filling faces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum InternalMode {
    /// Filled faces.
    #[default]
    Solid,
    /// Lines from each vertex to the solid's center.
    Spokes,
    /// Lines between pairs of vertices.
    Web,
}

impl InternalMode {
    pub const ALL: [InternalMode; 3] = [
        InternalMode::Solid,
        InternalMode::Spokes,
        InternalMode::Web,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_index_clamped(index: i64) -> Self {
        Self::ALL[index.clamp(0, 2) as usize]
    }

    pub fn name(self) -> &'static str {
        match self {
            InternalMode::Solid => "solid",
            InternalMode::Spokes => "spokes",
            InternalMode::Web => "web",
        }
    }
}

impl fmt::Display for InternalMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for InternalMode {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self> {
        Self::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| Error::UnknownMode(value.to_string()))
    }
}

impl FromStr for InternalMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|mode| mode.name() == wanted)
            .ok_or_else(|| Error::UnknownMode(s.to_owned()))
    }
}

/// Everything one `emit` call reads.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SampleConfiguration {
    /// Nominal size of the solid; also scales line jitter.
    pub scale: f64,
    /// Line jitter relative to `scale`; 0 draws hairlines.
    pub thickness: f64,
    pub internal_mode: InternalMode,
    /// Number of chaos-game contraction levels.
    pub recursion_depth: u32,
    pub solid: SolidType,
    /// Mix wireframe edges into spokes/web output.
    pub surface_lines: bool,
    /// Weight applied to every emitted point.
    pub amplitude: f64,
}

impl Default for SampleConfiguration {
    fn default() -> Self {
        Self {
            scale: 1.0,
            thickness: 0.05,
            internal_mode: InternalMode::Solid,
            recursion_depth: 0,
            solid: SolidType::Cuboctahedron,
            surface_lines: true,
            amplitude: 1.0,
        }
    }
}

impl SampleConfiguration {
    pub fn new(solid: SolidType) -> Self {
        Self {
            solid,
            ..Default::default()
        }
    }

    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the thickness, clamping negatives to 0.
    pub fn with_thickness(mut self, thickness: f64) -> Self {
        self.thickness = thickness.max(0.0);
        self
    }

    pub fn with_internal_mode(mut self, internal_mode: InternalMode) -> Self {
        self.internal_mode = internal_mode;
        self
    }

    pub fn with_recursion_depth(mut self, recursion_depth: u32) -> Self {
        self.recursion_depth = recursion_depth;
        self
    }

    pub fn with_solid(mut self, solid: SolidType) -> Self {
        self.solid = solid;
        self
    }

    pub fn with_surface_lines(mut self, surface_lines: bool) -> Self {
        self.surface_lines = surface_lines;
        self
    }

    pub fn with_amplitude(mut self, amplitude: f64) -> Self {
        self.amplitude = amplitude;
        self
    }

    /// Apply a host parameter update by name (case-insensitive).
    ///
    /// Integer parameters truncate toward zero, then clamp into range.
    pub fn with_parameter(self, name: &str, value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(Error::InvalidConfig(format!(
                "parameter '{name}' must be finite, got {value}"
            )));
        }

        let key = name.trim().to_ascii_lowercase();
        let updated = match key.as_str() {
            PARAM_SCALE => self.with_scale(value),
            PARAM_THICKNESS => self.with_thickness(clamped(name, value, 0.0, f64::INFINITY)),
            PARAM_INTERNAL_MODE => self.with_internal_mode(InternalMode::from_index_clamped(
                clamped(name, value.trunc(), 0.0, 2.0) as i64,
            )),
            PARAM_RECURSION_DEPTH => {
                let depth = clamped(name, value.trunc(), 0.0, u32::MAX as f64);
                self.with_recursion_depth(depth as u32)
            }
            PARAM_TYPE => self.with_solid(SolidType::from_index_clamped(
                clamped(name, value.trunc(), 0.0, (SolidType::COUNT - 1) as f64) as i64,
            )),
            PARAM_SURFACE_LINES => {
                self.with_surface_lines(clamped(name, value.trunc(), 0.0, 1.0) >= 1.0)
            }
            _ => {
                return Err(Error::UnknownParameter {
                    name: name.to_owned(),
                })
            }
        };
        Ok(updated)
    }

    pub fn parameter_names() -> &'static [&'static str] {
        &PARAMETER_NAMES
    }

    /// Current values of [`PARAMETER_NAMES`], in the same order.
    pub fn parameter_values(&self) -> [f64; 6] {
        [
            self.scale,
            self.thickness,
            self.internal_mode.index() as f64,
            self.recursion_depth as f64,
            self.solid.index() as f64,
            if self.surface_lines { 1.0 } else { 0.0 },
        ]
    }

    /// Check the invariants the sampler assumes without enforcing them.
    pub fn validate(&self) -> Result<()> {
        if !self.scale.is_finite() || self.scale <= 0.0 {
            return Err(Error::InvalidConfig("scale must be finite and > 0".into()));
        }
        if !self.thickness.is_finite() || self.thickness < 0.0 {
            return Err(Error::InvalidConfig(
                "thickness must be finite and >= 0".into(),
            ));
        }
        if !self.amplitude.is_finite() {
            return Err(Error::InvalidConfig("amplitude must be finite".into()));
        }
        Ok(())
    }
}

fn clamped(name: &str, value: f64, min: f64, max: f64) -> f64 {
    let out = value.clamp(min, max);
    if out != value {
        warn!(
            "Parameter '{}' value {} out of range [{}, {}]; clamped to {}.",
            name, value, min, max, out
        );
    }
    out
}
