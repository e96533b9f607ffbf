//! Generator configuration and validation.
//!
//! Out-of-range values are clamped, never rejected:
//! - `length`: each side ≥ 1
//! - `angle`: each side in `[1, 359]` degrees, then converted to radians
//! - `branchFactor`: ≥ 0
//!
//! Only values that cannot be clamped meaningfully fail: non-finite numbers
//! and a zero point budget.

use lsys_types::{Diagnostic, DiagnosticCode, Diagnostics, LsysError, Param, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_LENGTH: f64 = 30.0;
pub const DEFAULT_ANGLE: f64 = 15.0;
pub const DEFAULT_ITERATIONS: u32 = 2;
pub const DEFAULT_BRANCH_FACTOR: f64 = 1.0;
pub const DEFAULT_MAX_POINTS: u64 = 30_000;

pub const MIN_LENGTH: f64 = 1.0;
pub const MIN_ANGLE: f64 = 1.0;
pub const MAX_ANGLE: f64 = 359.0;

/// Raw, caller-supplied configuration. Every field is optional in JSON.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GeneratorConfig {
    /// Step length: a number or `[min, max]`.
    pub length: Param,
    /// Turn angle in degrees: a number or `[min, max]`.
    pub angle: Param,
    pub iterations: u32,
    pub branch_factor: f64,
    /// Upper bound on emitted points, root included.
    pub max_points: u64,
    /// Seed for range sampling. Without one every call draws a fresh seed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            length: Param::Fixed(DEFAULT_LENGTH),
            angle: Param::Fixed(DEFAULT_ANGLE),
            iterations: DEFAULT_ITERATIONS,
            branch_factor: DEFAULT_BRANCH_FACTOR,
            max_points: DEFAULT_MAX_POINTS,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Parse a JSON object such as `{"length": [10, 20], "angle": 25}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_length(mut self, length: impl Into<Param>) -> Self {
        self.length = length.into();
        self
    }

    pub fn with_angle(mut self, degrees: impl Into<Param>) -> Self {
        self.angle = degrees.into();
        self
    }

    pub fn with_iterations(mut self, iterations: u32) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_branch_factor(mut self, branch_factor: f64) -> Self {
        self.branch_factor = branch_factor;
        self
    }

    pub fn with_max_points(mut self, max_points: u64) -> Self {
        self.max_points = max_points;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clamp into legal ranges.
    ///
    /// Returns the validated settings plus one `W200` diagnostic per
    /// parameter that had to be clamped.
    pub fn validate(&self) -> Result<(Settings, Diagnostics)> {
        if self.max_points == 0 {
            return Err(LsysError::ZeroMaxPoints);
        }
        finite("length", self.length)?;
        finite("angle", self.angle)?;
        finite("branchFactor", Param::Fixed(self.branch_factor))?;

        let mut diagnostics = Diagnostics::empty();

        let length = self.length.clamp(MIN_LENGTH, f64::INFINITY);
        let angle = self.angle.clamp(MIN_ANGLE, MAX_ANGLE);
        let branch_factor = self.branch_factor.max(0.0);

        note_clamp(&mut diagnostics, "length", self.length, length);
        note_clamp(&mut diagnostics, "angle", self.angle, angle);
        note_clamp(
            &mut diagnostics,
            "branchFactor",
            Param::Fixed(self.branch_factor),
            Param::Fixed(branch_factor),
        );

        let settings = Settings {
            length,
            turn: angle.map(f64::to_radians),
            iterations: self.iterations,
            branch_factor,
            max_points: self.max_points,
            seed: self.seed,
        };
        Ok((settings, diagnostics))
    }
}

/// Validated configuration, angles in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    pub length: Param,
    /// Turn angle in radians.
    pub turn: Param,
    /// Requested iterations, before capping.
    pub iterations: u32,
    pub branch_factor: f64,
    pub max_points: u64,
    pub seed: Option<u64>,
}

fn finite(name: &'static str, param: Param) -> Result<()> {
    if param.is_finite() {
        return Ok(());
    }
    let value = if param.min().is_finite() {
        param.max()
    } else {
        param.min()
    };
    Err(LsysError::NonFiniteParameter { name, value })
}

fn note_clamp(diagnostics: &mut Diagnostics, name: &str, before: Param, after: Param) {
    if before.min() == after.min() && before.max() == after.max() {
        return;
    }
    tracing::warn!(%before, %after, "{name} clamped");
    diagnostics.push(Diagnostic::warning(
        DiagnosticCode::PARAMETER_CLAMPED,
        format!("{name} clamped from {before} to {after}"),
    ));
}
