//! Literal `X` substitution.

use crate::rule::{normalize_symbols, Rule};

/// Rewrite `axiom` `iterations` times.
///
/// Each pass scans the previous pass's output exactly once and replaces
/// every `X` with the rule body; all other symbols are copied unchanged.
/// Stops early once a pass can no longer change the string.
///
/// A body with a single `X` needs no passes at all: after `k` of them every
/// axiom `X` reads `prefix^k X suffix^k`, which is built directly.
pub fn expand(axiom: &str, rule: &Rule, iterations: u32) -> String {
    let axiom = normalize_symbols(axiom);
    let expanded = match rule.body().split_once('X') {
        _ if rule.is_identity() => axiom,
        Some((prefix, suffix)) if !suffix.contains('X') => {
            expand_linear(axiom, prefix, suffix, iterations)
        }
        _ => expand_passes(axiom, rule.body(), iterations),
    };

    tracing::debug!(iterations, len = expanded.len(), "expanded axiom");
    expanded
}

fn expand_passes(axiom: String, body: &str, iterations: u32) -> String {
    let mut current = axiom;

    for pass in 0..iterations {
        let recurse = current.matches('X').count();
        if recurse == 0 {
            tracing::debug!(pass, "expansion reached a fixed point");
            break;
        }

        let mut next = String::with_capacity(current.len() - recurse + recurse * body.len());
        for c in current.chars() {
            if c == 'X' {
                next.push_str(body);
            } else {
                next.push(c);
            }
        }
        current = next;
    }
    current
}

fn expand_linear(axiom: String, prefix: &str, suffix: &str, iterations: u32) -> String {
    let recurse = axiom.matches('X').count();
    if recurse == 0 || iterations == 0 {
        return axiom;
    }

    let k = iterations as usize;
    let (prefix, suffix) = (prefix.repeat(k), suffix.repeat(k));
    let mut out = String::with_capacity(axiom.len() + recurse * (prefix.len() + suffix.len()));
    for c in axiom.chars() {
        if c == 'X' {
            out.push_str(&prefix);
            out.push('X');
            out.push_str(&suffix);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(text: &str) -> Rule {
        Rule::parse(text).unwrap()
    }

    #[test]
    fn test_zero_iterations_is_axiom() {
        assert_eq!(expand("X", &rule("F[-X][+X]"), 0), "X");
    }

    #[test]
    fn test_two_iterations() {
        assert_eq!(
            expand("X", &rule("F[-X][+X]"), 2),
            "F[-F[-X][+X]][+F[-X][+X]]"
        );
    }

    #[test]
    fn test_lower_case_axiom() {
        assert_eq!(expand("x", &rule("fx"), 2), "FFX");
    }

    #[test]
    fn test_non_recursive_rule_terminates() {
        assert_eq!(expand("X", &rule("F+F"), 1_000_000), "F+F");
    }

    #[test]
    fn test_identity_rule() {
        assert_eq!(expand("FX", &rule("X"), u32::MAX), "FX");
    }

    #[test]
    fn test_f_is_never_rewritten() {
        assert_eq!(expand("F", &rule("FF"), 5), "F");
    }

    #[test]
    fn test_linear_matches_repeated_passes() {
        let body = "F+[-F]X-F";
        for k in 0..6 {
            assert_eq!(
                expand("FX[X]", &rule(body), k),
                expand_passes("FX[X]".to_string(), body, k),
                "{k} iterations"
            );
        }
    }

    #[test]
    fn test_linear_many_iterations() {
        let text = expand("X", &rule("+X"), 10_000);
        assert_eq!(text.len(), 10_001);
        assert!(text.ends_with("+X"));
    }
}
