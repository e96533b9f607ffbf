//! Production rule parsing.
//!
//! Accepted forms (whitespace is ignored, case is folded to upper):
//! - `F[-X][+X]`: the body alone
//! - `X=F[-X][+X]`: predecessor and body
//!
//! Only `X` may appear as a predecessor.

use lsys_types::{LsysError, Result};

use crate::symbol::Symbol;

/// Strip whitespace and fold to upper case.
pub fn normalize_symbols(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_uppercase)
        .collect()
}

/// Counts of the two movement symbols in a string, plus its total length.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SymbolCounts {
    /// Number of `X` symbols.
    pub recurse: u64,
    /// Number of `F` symbols.
    pub forward: u64,
    /// Number of symbols of any kind, movements included.
    pub symbols: u64,
}

impl SymbolCounts {
    pub fn of(symbols: &str) -> Self {
        symbols
            .chars()
            .map(Symbol::from_char)
            .fold(Self::default(), |mut counts, s| {
                counts.symbols += 1;
                match s {
                    Symbol::Recurse => counts.recurse += 1,
                    Symbol::Forward => counts.forward += 1,
                    _ => {}
                }
                counts
            })
    }

    pub fn movements(&self) -> u64 {
        self.recurse + self.forward
    }
}

/// The single production applied to every `X`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    body: String,
}

impl Rule {
    /// Parse rule text.
    pub fn parse(text: &str) -> Result<Self> {
        let normalized = normalize_symbols(text);
        let mut parts = normalized.split('=');
        let (first, second, rest) = (parts.next(), parts.next(), parts.next());

        let body = match (first, second, rest) {
            (Some(body), None, _) => body,
            (Some("X"), Some(body), None) => body,
            (Some(""), Some(_), None) => return Err(LsysError::MalformedRule(text.to_string())),
            (Some(pred), Some(_), None) => {
                return Err(LsysError::UnsupportedPredecessor(pred.to_string()))
            }
            _ => return Err(LsysError::MalformedRule(text.to_string())),
        };

        Ok(Self {
            body: body.to_string(),
        })
    }

    /// The replacement text, normalized.
    pub fn body(&self) -> &str {
        &self.body
    }

    pub fn counts(&self) -> SymbolCounts {
        SymbolCounts::of(&self.body)
    }

    /// A rule that rewrites `X` to itself can never change the string.
    pub fn is_identity(&self) -> bool {
        self.body == "X"
    }
}
