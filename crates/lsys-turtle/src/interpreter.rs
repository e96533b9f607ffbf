//! Turtle interpretation of an expanded symbol string.
//!
//! | Symbol | Effect |
//! |--------|--------|
//! | `F`, `X` | move `sample(length) × branch_factor^level`, emit a point |
//! | `+` | heading += `sample(turn)` (counter-clockwise) |
//! | `-` | heading −= `sample(turn)` (clockwise) |
//! | `[` | save the turtle, level + 1 |
//! | `]` | restore the last saved turtle |
//! | other | ignored |
//!
//! A `]` with nothing saved is skipped and reported as `W100`; branches
//! still open at the end are reported as `W101`.

use lsys_grammar::Symbol;
use lsys_types::{Diagnostic, DiagnosticCode, Diagnostics, Param, Point, PointGraph};
use rand::Rng;

use crate::bounds::Bounds;
use crate::sampler::sample;
use crate::state::TurtleState;

/// Validated numeric inputs for one interpretation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TurtleParams {
    /// Step length, before branch decay.
    pub length: Param,
    /// Turn angle in radians.
    pub turn: Param,
    /// Length multiplier applied once per branch level.
    pub branch_factor: f64,
}

impl TurtleParams {
    pub fn new(length: impl Into<Param>, turn: impl Into<Param>, branch_factor: f64) -> Self {
        Self {
            length: length.into(),
            turn: turn.into(),
            branch_factor,
        }
    }
}

/// Result of interpretation: the raw (un-normalized) graph and anything
/// worth reporting about the symbol stream.
#[derive(Debug, Clone)]
pub struct Interpretation {
    pub graph: PointGraph,
    pub diagnostics: Diagnostics,
}

/// Single-pass turtle interpreter.
///
/// State is created fresh by [`Interpreter::new`] and consumed by
/// [`Interpreter::run`]; nothing carries over between runs.
pub struct Interpreter<'a, R: Rng + ?Sized> {
    params: &'a TurtleParams,
    /// Source of range samples.
    rng: &'a mut R,
    state: TurtleState,
    bounds: Bounds,
    points: Vec<Point>,
    diagnostics: Diagnostics,
}

impl<'a, R: Rng + ?Sized> Interpreter<'a, R> {
    pub fn new(params: &'a TurtleParams, rng: &'a mut R) -> Self {
        Self {
            params,
            rng,
            state: TurtleState::new(),
            bounds: Bounds::new(),
            points: vec![Point::root()],
            diagnostics: Diagnostics::empty(),
        }
    }

    /// Interpret `symbols` left to right.
    pub fn run(mut self, symbols: &str) -> Interpretation {
        let moves = symbols
            .chars()
            .filter(|&c| Symbol::from_char(c).is_movement())
            .count();
        self.points.reserve_exact(moves);

        for (pos, c) in symbols.char_indices() {
            self.step(pos, Symbol::from_char(c));
        }

        let open = self.state.depth();
        if open > 0 {
            tracing::warn!(open, "branches left open at end of input");
            self.diagnostics.push(Diagnostic::warning(
                DiagnosticCode::UNCLOSED_BRANCH,
                format!("{open} `[` never closed"),
            ));
        }

        tracing::debug!(
            points = self.points.len(),
            width = self.bounds.width(),
            height = self.bounds.height(),
            "interpreted symbols"
        );

        Interpretation {
            graph: PointGraph {
                points: self.points,
                width: self.bounds.width(),
                height: self.bounds.height(),
                min_x: self.bounds.min_x,
                min_y: self.bounds.min_y,
            },
            diagnostics: self.diagnostics,
        }
    }

    fn step(&mut self, pos: usize, symbol: Symbol) {
        match symbol {
            Symbol::Forward | Symbol::Recurse => self.forward(),
            Symbol::TurnLeft => {
                let turn = sample(self.params.turn, &mut *self.rng);
                self.state.turn(turn);
            }
            Symbol::TurnRight => {
                let turn = sample(self.params.turn, &mut *self.rng);
                self.state.turn(-turn);
            }
            Symbol::Push => self.state.push(),
            Symbol::Pop => {
                if !self.state.pop() {
                    tracing::warn!(pos, "unmatched `]` ignored");
                    self.diagnostics.push(
                        Diagnostic::warning(DiagnosticCode::UNMATCHED_CLOSE, "unmatched `]` ignored")
                            .at(pos),
                    );
                }
            }
            Symbol::Other(_) => {}
        }
    }

    fn forward(&mut self) {
        let decay = self.params.branch_factor.powi(self.state.level() as i32);
        let distance = sample(self.params.length, &mut *self.rng) * decay;
        let point = self.state.advance(distance);
        self.bounds.include(point.x, point.y);
        self.points.push(point);
    }
}
