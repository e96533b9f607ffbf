//! Iteration capping against a point budget.
//!
//! With `nX` = number of `X` in the rule and `nF` = number of `F`, the count
//! of movement symbols grows geometrically with ratio `nX` per iteration.
//! The largest safe iteration count is first estimated with the closed form
//!
//! ```text
//! k_max = round( ln(1 + (nX−1)·nX·maxPoints / (nX·nF + nX²)) / ln(nX) )
//! ```
//!
//! and then lowered until the exact predicted point count fits the budget.
//!
//! The expanded string itself is bounded too: at most
//! [`SYMBOLS_PER_POINT`] symbols per budgeted point. Rules padded with
//! turns or brackets would otherwise grow the string without adding points.
//!
//! | `nX` | Growth | Limit |
//! |------|--------|-------|
//! | 0    | terminal, nothing left to rewrite after one pass | none |
//! | 1    | linear, `max(nF, 1)` points and `len(body) − 1` symbols per `X` per iteration | smaller of the two budgets |
//! | ≥ 2  | geometric | closed form, tightened against both budgets |

use crate::rule::SymbolCounts;

/// Expanded symbols allowed per budgeted point.
pub const SYMBOLS_PER_POINT: u64 = 16;

/// How the movement-symbol count evolves from one iteration to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Growth {
    Terminal,
    Linear,
    Geometric,
}

/// Outcome of capping a requested iteration count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CapDecision {
    pub requested: u32,
    /// Iterations actually performed: `min(requested, limit)`.
    pub effective: u32,
    /// Largest iteration count that fits the budget, if bounded.
    pub limit: Option<u32>,
    /// Raw closed-form estimate (geometric growth only).
    pub estimate: Option<u32>,
    pub growth: Growth,
}

impl CapDecision {
    pub fn was_capped(&self) -> bool {
        self.effective < self.requested
    }
}

/// Exact number of points (root included) after `iterations` passes.
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn predicted_points(axiom: SymbolCounts, rule: SymbolCounts, iterations: u32) -> u64 {
    let mut recurse = axiom.recurse;
    let mut forward = axiom.forward;

    for _ in 0..iterations {
        if recurse == 0 || recurse == u64::MAX {
            break;
        }
        if rule.recurse == 1 {
            // Linear: the remaining passes only add forward moves.
            let remaining = u64::from(iterations);
            forward = forward.saturating_add(recurse.saturating_mul(rule.forward).saturating_mul(remaining));
            break;
        }
        forward = forward.saturating_add(recurse.saturating_mul(rule.forward));
        recurse = recurse.saturating_mul(rule.recurse);
    }

    1u64.saturating_add(recurse).saturating_add(forward)
}

/// Exact length of the expanded string after `iterations` passes.
///
/// Saturates at `u64::MAX` instead of overflowing.
pub fn predicted_symbols(axiom: SymbolCounts, rule: SymbolCounts, iterations: u32) -> u64 {
    let growth = rule.symbols.saturating_sub(1);
    let mut recurse = axiom.recurse;
    let mut symbols = axiom.symbols;

    for _ in 0..iterations {
        if recurse == 0 || recurse == u64::MAX {
            break;
        }
        if rule.recurse == 1 {
            let remaining = u64::from(iterations);
            symbols = symbols.saturating_add(recurse.saturating_mul(growth).saturating_mul(remaining));
            break;
        }
        symbols = symbols.saturating_add(recurse.saturating_mul(growth));
        recurse = recurse.saturating_mul(rule.recurse);
    }

    symbols
}

/// Clamps iteration counts so the emitted points stay within `max_points`
/// and the expanded string within `max_points × SYMBOLS_PER_POINT`.
#[derive(Debug, Clone, Copy)]
pub struct IterationCapper {
    max_points: u64,
}

impl IterationCapper {
    pub fn new(max_points: u64) -> Self {
        Self { max_points }
    }

    pub fn max_points(&self) -> u64 {
        self.max_points
    }

    /// Longest expanded string the budget allows.
    pub fn max_symbols(&self) -> u64 {
        self.max_points.saturating_mul(SYMBOLS_PER_POINT)
    }

    /// Closed-form estimate. `None` when the rule does not grow
    /// geometrically (`nX < 2`), where the formula is undefined.
    pub fn closed_form(&self, rule: SymbolCounts) -> Option<u32> {
        if rule.recurse < 2 {
            return None;
        }
        let nx = rule.recurse as f64;
        let nf = rule.forward as f64;
        let m = self.max_points as f64;

        let ratio = 1.0 + (nx - 1.0) * nx * m / (nx * nf + nx * nx);
        let k = (ratio.ln() / nx.ln()).round();
        // `ratio >= 1` and `ln(nx) > 0`, so `k` is finite and non-negative.
        Some(k.min(f64::from(u32::MAX)) as u32)
    }

    /// Cap `requested` for the given axiom and rule symbol counts.
    pub fn cap(&self, axiom: SymbolCounts, rule: SymbolCounts, requested: u32) -> CapDecision {
        let (growth, estimate, limit) = if axiom.recurse == 0 || rule.recurse == 0 {
            (Growth::Terminal, None, None)
        } else if rule.recurse == 1 {
            (Growth::Linear, None, Some(self.linear_limit(axiom, rule)))
        } else {
            let estimate = self.closed_form(rule);
            let limit = estimate.map(|k| self.tighten(axiom, rule, k));
            (Growth::Geometric, estimate, limit)
        };

        let effective = limit.map_or(requested, |limit| requested.min(limit));
        let decision = CapDecision {
            requested,
            effective,
            limit,
            estimate,
            growth,
        };

        if decision.was_capped() {
            tracing::debug!(
                requested,
                effective,
                max_points = self.max_points,
                max_symbols = self.max_symbols(),
                ?growth,
                "iterations capped by point budget"
            );
        }
        decision
    }

    fn linear_limit(&self, axiom: SymbolCounts, rule: SymbolCounts) -> u32 {
        let point_step = axiom.recurse.saturating_mul(rule.forward.max(1));
        let by_points = self
            .max_points
            .saturating_sub(predicted_points(axiom, rule, 0))
            / point_step;

        let symbol_step = axiom.recurse.saturating_mul(rule.symbols.saturating_sub(1));
        let by_symbols = match symbol_step {
            0 => u64::MAX,
            step => self.max_symbols().saturating_sub(axiom.symbols) / step,
        };

        u32::try_from(by_points.min(by_symbols)).unwrap_or(u32::MAX)
    }

    fn tighten(&self, axiom: SymbolCounts, rule: SymbolCounts, estimate: u32) -> u32 {
        let mut k = estimate;
        while k > 0 && !self.fits(axiom, rule, k) {
            k -= 1;
        }
        k
    }

    fn fits(&self, axiom: SymbolCounts, rule: SymbolCounts, iterations: u32) -> bool {
        predicted_points(axiom, rule, iterations) <= self.max_points
            && predicted_symbols(axiom, rule, iterations) <= self.max_symbols()
    }
}
