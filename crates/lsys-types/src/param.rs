use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric parameter that is either a fixed value or a closed range.
///
/// Serialized as a bare number (`30`) or a two-element array (`[10, 20]`).
/// Ranges are sampled independently on every use by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Param {
    Fixed(f64),
    Range(f64, f64),
}

impl Param {
    /// Create a range parameter. Sides are stored as given.
    pub fn range(min: f64, max: f64) -> Self {
        Self::Range(min, max)
    }

    /// Returns `true` for range-valued parameters.
    pub fn is_range(&self) -> bool {
        matches!(self, Self::Range(..))
    }

    /// Lower side (the value itself for fixed parameters).
    pub fn min(&self) -> f64 {
        match *self {
            Self::Fixed(v) => v,
            Self::Range(a, b) => a.min(b),
        }
    }

    /// Upper side (the value itself for fixed parameters).
    pub fn max(&self) -> f64 {
        match *self {
            Self::Fixed(v) => v,
            Self::Range(a, b) => a.max(b),
        }
    }

    /// Returns `true` if every side is a finite number.
    pub fn is_finite(&self) -> bool {
        match *self {
            Self::Fixed(v) => v.is_finite(),
            Self::Range(a, b) => a.is_finite() && b.is_finite(),
        }
    }

    /// Apply `f` to each side independently.
    ///
    /// Range sides come out ordered (`min <= max`) regardless of input order.
    pub fn map(self, f: impl Fn(f64) -> f64) -> Self {
        match self {
            Self::Fixed(v) => Self::Fixed(f(v)),
            Self::Range(a, b) => {
                let (a, b) = (f(a), f(b));
                Self::Range(a.min(b), a.max(b))
            }
        }
    }

    /// Clamp each side into `[lo, hi]`.
    pub fn clamp(self, lo: f64, hi: f64) -> Self {
        self.map(|v| v.clamp(lo, hi))
    }
}

impl Default for Param {
    fn default() -> Self {
        Self::Fixed(0.0)
    }
}

impl From<f64> for Param {
    fn from(value: f64) -> Self {
        Self::Fixed(value)
    }
}

impl From<[f64; 2]> for Param {
    fn from([min, max]: [f64; 2]) -> Self {
        Self::Range(min, max)
    }
}

impl fmt::Display for Param {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Fixed(v) => write!(f, "{v}"),
            Self::Range(a, b) => write!(f, "[{a}, {b}]"),
        }
    }
}
