//! Shared types for lsys-points.
//!
//! This crate defines the parameter values, the point graph produced by the
//! turtle interpreter, diagnostics, and the error type used across all
//! pipeline stages.

mod error;
mod graph;
mod param;

pub use error::{
    Diagnostic, DiagnosticCategory, DiagnosticCode, Diagnostics, LsysError, Severity,
    MAX_DIAGNOSTICS,
};
pub use graph::{Point, PointGraph, VERTICAL};
pub use param::Param;

/// Result type used throughout lsys-points.
pub type Result<T> = std::result::Result<T, LsysError>;
