//! lsys-points turtle interpreter.
//!
//! Walks an expanded symbol string once, emitting a point per movement
//! symbol into a [`lsys_types::PointGraph`], and shifts the result into
//! non-negative coordinates.

pub mod bounds;
pub mod interpreter;
pub mod normalize;
pub mod sampler;
pub mod state;

pub use bounds::Bounds;
pub use interpreter::{Interpretation, Interpreter, TurtleParams};
pub use normalize::to_positive;
pub use sampler::{entropy_rng, sample, seeded_rng};
pub use state::{Turtle, TurtleState};
