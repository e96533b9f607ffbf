//! lsys-points generator: orchestrates the full pipeline.
//!
//! ```text
//! GeneratorConfig → validate → IterationCapper → expand → Interpreter → to_positive → PointGraph
//! ```
//!
//! ```rust
//! use lsys_generator::{Generator, GeneratorConfig};
//!
//! let generator = Generator::new(GeneratorConfig::default().with_iterations(3))?;
//! let graph = generator.make_points("X", "F[-X][+X]")?;
//! assert_eq!(graph.len(), 16);
//! # Ok::<(), lsys_types::LsysError>(())
//! ```

pub mod config;
pub mod fingerprint;
pub mod generator;
pub mod preview;

pub use config::{GeneratorConfig, Settings};
pub use fingerprint::fingerprint;
pub use generator::{GenerationReport, Generator, IterationSummary};
pub use preview::render_ascii;
