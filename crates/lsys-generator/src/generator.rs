//! The [`Generator`]: one configuration, any number of point graphs.

use lsys_grammar::{
    expand, normalize_symbols, predicted_points, CapDecision, IterationCapper, Rule, SymbolCounts,
    SYMBOLS_PER_POINT,
};
use lsys_turtle::{entropy_rng, seeded_rng, to_positive, Interpreter, TurtleParams};
use lsys_types::{Diagnostic, DiagnosticCode, Diagnostics, LsysError, PointGraph, Result};
use rand::rngs::StdRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::config::{GeneratorConfig, Settings};

/// Iteration counts before and after capping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IterationSummary {
    pub requested: u32,
    pub effective: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}

impl From<CapDecision> for IterationSummary {
    fn from(d: CapDecision) -> Self {
        Self {
            requested: d.requested,
            effective: d.effective,
            limit: d.limit,
        }
    }
}

/// Everything one generation run produced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerationReport {
    /// Normalized graph.
    pub graph: PointGraph,
    pub iterations: IterationSummary,
    /// Length of the expanded symbol string.
    pub symbols: usize,
    /// Validation, capping and interpretation diagnostics, in that order.
    pub diagnostics: Diagnostics,
}

/// Turns an axiom and a rule into a point graph.
///
/// The configuration is validated once at construction and never changes;
/// every call builds its own turtle state and graph.
#[derive(Debug, Clone)]
pub struct Generator {
    settings: Settings,
    config_diagnostics: Diagnostics,
}

impl Generator {
    /// Validate `config` and build a generator.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        let (settings, config_diagnostics) = config.validate()?;
        Ok(Self {
            settings,
            config_diagnostics,
        })
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Diagnostics raised while validating the configuration.
    pub fn config_diagnostics(&self) -> &Diagnostics {
        &self.config_diagnostics
    }

    /// Normalized point graph for `axiom` rewritten by `rule`.
    pub fn make_points(&self, axiom: &str, rule: &str) -> Result<PointGraph> {
        Ok(self.generate(axiom, rule)?.graph)
    }

    /// Same as [`Generator::make_points`] with a caller-supplied random
    /// source for range sampling.
    pub fn make_points_with_rng<R: Rng + ?Sized>(
        &self,
        axiom: &str,
        rule: &str,
        rng: &mut R,
    ) -> Result<PointGraph> {
        Ok(self.generate_with_rng(axiom, rule, rng)?.graph)
    }

    /// Point graph before normalization; `min_x`/`min_y` may be negative.
    pub fn make_raw_points(&self, axiom: &str, rule: &str) -> Result<PointGraph> {
        let (symbols, _) = self.prepare(axiom, rule)?;
        let params = self.turtle_params();
        let mut rng = self.rng();
        Ok(Interpreter::new(&params, &mut rng).run(&symbols).graph)
    }

    /// The expanded symbol string after capping.
    pub fn expand(&self, axiom: &str, rule: &str) -> Result<String> {
        Ok(self.prepare(axiom, rule)?.0)
    }

    /// Run the full pipeline and report caps and diagnostics alongside the
    /// graph.
    pub fn generate(&self, axiom: &str, rule: &str) -> Result<GenerationReport> {
        let mut rng = self.rng();
        self.generate_with_rng(axiom, rule, &mut rng)
    }

    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        axiom: &str,
        rule: &str,
        rng: &mut R,
    ) -> Result<GenerationReport> {
        let (symbols, cap) = self.prepare(axiom, rule)?;
        let params = self.turtle_params();
        let interpretation = Interpreter::new(&params, rng).run(&symbols);

        let mut diagnostics = self.config_diagnostics.clone();
        if cap.was_capped() {
            diagnostics.push(Diagnostic::info(
                DiagnosticCode::ITERATIONS_CAPPED,
                format!(
                    "iterations reduced from {} to {} to stay within {} points and {} symbols",
                    cap.requested,
                    cap.effective,
                    self.settings.max_points,
                    self.settings.max_points.saturating_mul(SYMBOLS_PER_POINT)
                ),
            ));
        }
        diagnostics.extend(interpretation.diagnostics);

        let graph = to_positive(interpretation.graph);
        tracing::debug!(
            points = graph.len(),
            width = graph.width,
            height = graph.height,
            iterations = cap.effective,
            "generated point graph"
        );

        Ok(GenerationReport {
            graph,
            iterations: cap.into(),
            symbols: symbols.len(),
            diagnostics,
        })
    }

    fn prepare(&self, axiom: &str, rule: &str) -> Result<(String, CapDecision)> {
        let rule = Rule::parse(rule)?;
        let axiom_counts = SymbolCounts::of(&normalize_symbols(axiom));

        let base = predicted_points(axiom_counts, rule.counts(), 0);
        if base > self.settings.max_points {
            return Err(LsysError::AxiomOverBudget {
                points: base,
                max_points: self.settings.max_points,
            });
        }

        let cap = IterationCapper::new(self.settings.max_points).cap(
            axiom_counts,
            rule.counts(),
            self.settings.iterations,
        );
        Ok((expand(axiom, &rule, cap.effective), cap))
    }

    fn turtle_params(&self) -> TurtleParams {
        TurtleParams::new(
            self.settings.length,
            self.settings.turn,
            self.settings.branch_factor,
        )
    }

    fn rng(&self) -> StdRng {
        self.settings.seed.map_or_else(entropy_rng, seeded_rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lsys_types::Param;

    fn t_shape() -> Generator {
        Generator::new(
            GeneratorConfig::default()
                .with_length(10.0)
                .with_angle(90.0)
                .with_iterations(1),
        )
        .unwrap()
    }

    #[test]
    fn test_t_shape_normalized() {
        let g = t_shape().make_points("X", "F[-X][+X]").unwrap();
        let coords: Vec<(i64, i64)> = g.iter().map(|p| (p.x, p.y)).collect();
        // `-` turns clockwise, so point 2 lands right of the trunk.
        assert_eq!(coords, vec![(10, 0), (10, 10), (20, 10), (0, 10)]);
        assert_eq!((g.width, g.height), (20, 10));
    }

    #[test]
    fn test_t_shape_raw() {
        let g = t_shape().make_raw_points("X", "F[-X][+X]").unwrap();
        assert_eq!((g.min_x, g.min_y), (-10, 0));
        assert_eq!(g.points[3].x, -10);
    }

    #[test]
    fn test_expand() {
        let gen = Generator::new(GeneratorConfig::default()).unwrap();
        assert_eq!(
            gen.expand("X", "X=F[-X][+X]").unwrap(),
            "F[-F[-X][+X]][+F[-X][+X]]"
        );
    }

    #[test]
    fn test_rule_error_propagates() {
        let gen = Generator::new(GeneratorConfig::default()).unwrap();
        assert!(matches!(
            gen.make_points("X", "F=FF").unwrap_err(),
            LsysError::UnsupportedPredecessor(_)
        ));
    }

    #[test]
    fn test_cap_reported() {
        let gen = Generator::new(
            GeneratorConfig::default()
                .with_iterations(40)
                .with_max_points(100),
        )
        .unwrap();
        let report = gen.generate("X", "F[-X][+X]").unwrap();
        assert_eq!(report.iterations.requested, 40);
        assert_eq!(report.iterations.effective, 5);
        assert_eq!(report.graph.len(), 64);
        assert_eq!(report.diagnostics.count(DiagnosticCode::ITERATIONS_CAPPED), 1);
    }

    #[test]
    fn test_config_diagnostics_carried() {
        let gen = Generator::new(GeneratorConfig::default().with_angle(720.0)).unwrap();
        assert_eq!(gen.config_diagnostics().total, 1);
        let report = gen.generate("X", "F[-X][+X]").unwrap();
        assert_eq!(report.diagnostics.count(DiagnosticCode::PARAMETER_CLAMPED), 1);
    }

    #[test]
    fn test_seeded_config_is_reproducible() {
        let gen = Generator::new(
            GeneratorConfig::default()
                .with_length(Param::range(10.0, 20.0))
                .with_angle([5.0, 40.0])
                .with_iterations(4)
                .with_seed(2024),
        )
        .unwrap();
        let a = gen.make_points("X", "F[-X][+X]").unwrap();
        let b = gen.make_points("X", "F[-X][+X]").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_axiom_over_budget_rejected() {
        let gen = Generator::new(GeneratorConfig::default().with_max_points(1)).unwrap();
        assert!(matches!(
            gen.make_points("X", "F[-X][+X]").unwrap_err(),
            LsysError::AxiomOverBudget {
                points: 2,
                max_points: 1
            }
        ));
        // The root alone always fits.
        assert_eq!(gen.make_points("+-", "F[-X][+X]").unwrap().len(), 1);
    }
}
