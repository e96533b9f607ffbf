use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Maximum number of diagnostics stored before further ones are only counted.
pub const MAX_DIAGNOSTICS: usize = 20;

/// Hard failures. Raised at configuration or rule-parsing time, never in the
/// middle of interpretation.
#[derive(Debug, Error)]
pub enum LsysError {
    /// The point budget must allow at least the root point.
    #[error("maxPoints must be greater than zero")]
    ZeroMaxPoints,

    /// The axiom alone needs more points than the budget allows.
    #[error("axiom alone yields {points} points, over the maxPoints budget of {max_points}")]
    AxiomOverBudget { points: u64, max_points: u64 },

    /// NaN or infinity where a number is required.
    #[error("parameter `{name}` must be finite, got {value}")]
    NonFiniteParameter { name: &'static str, value: f64 },

    /// A rule of the form `P=body` whose predecessor is not `X`.
    #[error("only `X` can be rewritten, rule predecessor was `{0}`")]
    UnsupportedPredecessor(String),

    /// A rule that cannot be split into predecessor and body.
    #[error("malformed rule `{0}`")]
    MalformedRule(String),

    /// A point graph whose indices or parent links are inconsistent.
    #[error("broken point graph at index {index}: {reason}")]
    BrokenGraph { index: usize, reason: String },

    /// Configuration JSON could not be parsed.
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Diagnostic severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Info,
}

/// Diagnostic category, determined by code range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticCategory {
    Symbols,
    Config,
}

/// Numeric diagnostic code (W100–W299).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DiagnosticCode(pub u16);

impl DiagnosticCode {
    // ── Symbol stream (W100–W199) ──
    pub const UNMATCHED_CLOSE: Self = Self(100);
    pub const UNCLOSED_BRANCH: Self = Self(101);

    // ── Configuration (W200–W299) ──
    pub const PARAMETER_CLAMPED: Self = Self(200);
    pub const ITERATIONS_CAPPED: Self = Self(201);

    /// Get the category for this code.
    pub fn category(self) -> DiagnosticCategory {
        match self.0 {
            200..=299 => DiagnosticCategory::Config,
            _ => DiagnosticCategory::Symbols,
        }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "W{}", self.0)
    }
}

impl fmt::Display for DiagnosticCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Symbols => write!(f, "symbols"),
            Self::Config => write!(f, "config"),
        }
    }
}

/// A soft condition absorbed by the pipeline but reported to the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub category: DiagnosticCategory,
    pub message: String,
    /// Byte offset into the expanded symbol string, when the condition is
    /// tied to a symbol.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<usize>,
}

impl Diagnostic {
    /// Create a warning.
    pub fn warning(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            code,
            severity: Severity::Warning,
            category: code.category(),
            message: message.into(),
            position: None,
        }
    }

    /// Create an informational diagnostic.
    pub fn info(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Info,
            ..Self::warning(code, message)
        }
    }

    /// Attach a symbol position.
    pub fn at(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.position {
            Some(pos) => write!(f, "{pos}: {} [{}] {}", self.code, self.category, self.message),
            None => write!(f, "{} [{}] {}", self.code, self.category, self.message),
        }
    }
}

/// Collected diagnostics for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Diagnostics {
    pub items: Vec<Diagnostic>,
    pub total: usize,
}

impl Diagnostics {
    /// Create an empty collection.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a diagnostic, respecting the [`MAX_DIAGNOSTICS`] limit.
    pub fn push(&mut self, diagnostic: Diagnostic) {
        if self.items.len() < MAX_DIAGNOSTICS {
            self.items.push(diagnostic);
        }
        self.total += 1;
    }

    /// Move every diagnostic of `other` into `self`, keeping its total.
    pub fn extend(&mut self, other: Diagnostics) {
        let dropped = other.total - other.items.len();
        for d in other.items {
            self.push(d);
        }
        self.total += dropped;
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Number of diagnostics carrying `code`, among the stored ones.
    pub fn count(&self, code: DiagnosticCode) -> usize {
        self.items.iter().filter(|d| d.code == code).count()
    }
}
