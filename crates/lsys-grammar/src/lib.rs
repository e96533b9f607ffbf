//! lsys-points grammar: rule parsing, `X` expansion and iteration capping.
//!
//! ```text
//! rule text → Rule → IterationCapper → expand() → symbol string
//! ```

pub mod capper;
pub mod expander;
pub mod rule;
pub mod symbol;

pub use capper::{
    predicted_points, predicted_symbols, CapDecision, Growth, IterationCapper, SYMBOLS_PER_POINT,
};
pub use expander::expand;
pub use rule::{normalize_symbols, Rule, SymbolCounts};
pub use symbol::Symbol;
