//! Integration tests for the turtle interpreter.
//!
//! Expands real rules with `lsys-grammar`, interprets them, and checks the
//! resulting graph against a bracket-stack model of the symbol string.

use lsys_grammar::{expand, Rule, Symbol};
use lsys_turtle::{seeded_rng, to_positive, Interpretation, Interpreter, TurtleParams};
use lsys_types::{DiagnosticCode, Param, PointGraph};

// ══════════════════════════════════════════════════════════════════════════════
// Helpers
// ══════════════════════════════════════════════════════════════════════════════

const PRESETS: [&str; 4] = [
    "F[-X][+X]",
    "X[+X]X[-X]X",
    "XX-[-X+X+X]+[+X-X-X]",
    "X+X-X-X+X",
];

fn symbols(rule: &str, iterations: u32) -> String {
    let rule = Rule::parse(rule).unwrap();
    expand("X", &rule, iterations)
}

fn interpret(symbols: &str, params: TurtleParams, seed: u64) -> Interpretation {
    let mut rng = seeded_rng(seed);
    Interpreter::new(&params, &mut rng).run(symbols)
}

fn degrees(d: f64) -> f64 {
    d.to_radians()
}

/// Expected `(parent, level)` of every non-root point, derived from the
/// symbol string alone.
fn bracket_model(symbols: &str) -> Vec<(usize, u32)> {
    let mut current = 0usize;
    let mut stack = Vec::new();
    let mut next = 0usize;
    let mut out = Vec::new();

    for c in symbols.chars() {
        match Symbol::from_char(c) {
            Symbol::Forward | Symbol::Recurse => {
                next += 1;
                out.push((current, stack.len() as u32));
                current = next;
            }
            Symbol::Push => stack.push(current),
            Symbol::Pop => {
                if let Some(saved) = stack.pop() {
                    current = saved;
                }
            }
            _ => {}
        }
    }
    out
}

fn coords(graph: &PointGraph) -> Vec<(i64, i64)> {
    graph.iter().map(|p| (p.x, p.y)).collect()
}

// ══════════════════════════════════════════════════════════════════════════════
// Geometry
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn t_shape_raw_coordinates() {
    let params = TurtleParams::new(10.0, degrees(90.0), 1.0);
    let out = interpret(&symbols("F[-X][+X]", 1), params, 0);
    assert_eq!(coords(&out.graph), vec![(0, 0), (0, 10), (10, 10), (-10, 10)]);
    assert_eq!((out.graph.min_x, out.graph.min_y), (-10, 0));
    assert_eq!((out.graph.width, out.graph.height), (20, 10));
    assert!(out.diagnostics.is_empty());
}

#[test]
fn t_shape_after_normalization() {
    let params = TurtleParams::new(10.0, degrees(90.0), 1.0);
    let graph = to_positive(interpret(&symbols("F[-X][+X]", 1), params, 0).graph);
    assert_eq!(coords(&graph), vec![(10, 0), (10, 10), (20, 10), (0, 10)]);
    assert_eq!((graph.min_x, graph.min_y), (0, 0));
}

#[test]
fn straight_line_is_vertical() {
    let params = TurtleParams::new(7.0, degrees(30.0), 1.0);
    let out = interpret("FFFX", params, 0);
    assert_eq!(coords(&out.graph), vec![(0, 0), (0, 7), (0, 14), (0, 21), (0, 28)]);
    assert_eq!(out.graph.width, 0);
}

#[test]
fn branch_decay_shortens_deeper_levels() {
    let params = TurtleParams::new(16.0, degrees(90.0), 0.5);
    let out = interpret("F[F[F]]", params, 0);
    assert_eq!(coords(&out.graph), vec![(0, 0), (0, 16), (0, 24), (0, 28)]);
}

#[test]
fn ranged_length_stays_in_range() {
    let params = TurtleParams::new(Param::range(10.0, 20.0), degrees(25.0), 1.0);
    let out = interpret(&symbols("F[-X][+X]", 5), params, 99);
    for (parent, child) in out.graph.segments() {
        let dx = (child.x - parent.x) as f64;
        let dy = (child.y - parent.y) as f64;
        let d = dx.hypot(dy);
        // Each coordinate is rounded, so allow under one unit either way.
        assert!((9.0..=21.0).contains(&d), "segment length {d}");
    }
}

#[test]
fn ranged_angle_is_reproducible_per_seed() {
    let params = TurtleParams::new(30.0, Param::range(degrees(5.0), degrees(40.0)), 0.9);
    let text = symbols("XX-[-X+X+X]+[+X-X-X]", 3);
    let a = interpret(&text, params, 7).graph;
    let b = interpret(&text, params, 7).graph;
    assert_eq!(a, b);
}

#[test]
fn zero_branch_factor_collapses_branches() {
    let params = TurtleParams::new(10.0, degrees(45.0), 0.0);
    let out = interpret("F[-F][+F]", params, 0);
    assert_eq!(coords(&out.graph), vec![(0, 0), (0, 10), (0, 10), (0, 10)]);
}

// ══════════════════════════════════════════════════════════════════════════════
// Structure
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn presets_match_bracket_model() {
    let params = TurtleParams::new(Param::range(20.0, 40.0), Param::range(0.1, 0.6), 0.8);
    for rule in PRESETS {
        let text = symbols(rule, 3);
        let out = interpret(&text, params, 3);
        out.graph.check_integrity().unwrap();

        let model = bracket_model(&text);
        assert_eq!(out.graph.len(), model.len() + 1, "rule {rule}");
        for (point, &(parent, level)) in out.graph.points[1..].iter().zip(&model) {
            assert_eq!(point.parent, Some(parent), "rule {rule}, point {}", point.index);
            assert_eq!(point.level, level, "rule {rule}, point {}", point.index);
        }
        assert!(out.diagnostics.is_empty(), "rule {rule}");
    }
}

#[test]
fn branch_point_is_parent_after_close() {
    let params = TurtleParams::new(10.0, degrees(90.0), 1.0);
    let out = interpret("F[F][F]F", params, 0);
    let parents: Vec<_> = out.graph.iter().map(|p| p.parent).collect();
    assert_eq!(parents, vec![None, Some(0), Some(1), Some(1), Some(1)]);
    let levels: Vec<_> = out.graph.iter().map(|p| p.level).collect();
    assert_eq!(levels, vec![0, 0, 1, 1, 0]);
}

#[test]
fn ignored_symbols_emit_nothing() {
    let params = TurtleParams::new(10.0, degrees(90.0), 1.0);
    let out = interpret("AF?B F|", params, 0);
    assert_eq!(out.graph.len(), 3);
    assert!(out.diagnostics.is_empty());
}

#[test]
fn every_bounded_point_is_inside_bounds() {
    let params = TurtleParams::new(25.0, degrees(22.5), 0.9);
    for rule in PRESETS {
        let g = interpret(&symbols(rule, 3), params, 0).graph;
        let max_x = g.min_x + g.width;
        let max_y = g.min_y + g.height;
        assert!(g.iter().all(|p| (g.min_x..=max_x).contains(&p.x)));
        assert!(g.iter().all(|p| (g.min_y..=max_y).contains(&p.y)));

        let positive = to_positive(g);
        assert!(positive.iter().all(|p| p.x >= 0 && p.y >= 0));
    }
}

#[test]
fn max_level_tracks_nesting() {
    let params = TurtleParams::new(10.0, degrees(20.0), 1.0);
    let g = interpret(&symbols("F[-X][+X]", 4), params, 0).graph;
    assert_eq!(g.max_level(), 4);
}

// ══════════════════════════════════════════════════════════════════════════════
// Malformed brackets
// ══════════════════════════════════════════════════════════════════════════════

#[test]
fn unmatched_close_reports_position() {
    let params = TurtleParams::new(10.0, degrees(90.0), 1.0);
    let out = interpret("F]F", params, 0);
    assert_eq!(out.graph.len(), 3);
    assert_eq!(out.graph.points[2].parent, Some(1));
    assert_eq!(out.diagnostics.count(DiagnosticCode::UNMATCHED_CLOSE), 1);
    assert_eq!(out.diagnostics.items[0].position, Some(1));
}

#[test]
fn unclosed_branch_still_emits_points() {
    let params = TurtleParams::new(10.0, degrees(90.0), 1.0);
    let out = interpret("F[[F", params, 0);
    assert_eq!(out.graph.len(), 3);
    assert_eq!(out.graph.points[2].level, 2);
    assert_eq!(out.diagnostics.count(DiagnosticCode::UNCLOSED_BRANCH), 1);
    out.graph.check_integrity().unwrap();
}
