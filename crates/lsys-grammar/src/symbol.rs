//! The turtle alphabet.

/// One symbol of an axiom, rule body or expanded string.
///
/// Symbols are case-insensitive; anything outside the alphabet maps to
/// [`Symbol::Other`] and is ignored by the interpreter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `F`: move forward. Never rewritten.
    Forward,
    /// `X`: move forward; rewritten by the rule on every iteration.
    Recurse,
    /// `+`: turn counter-clockwise.
    TurnLeft,
    /// `-`: turn clockwise.
    TurnRight,
    /// `[`: open a branch.
    Push,
    /// `]`: close a branch.
    Pop,
    Other(char),
}

impl Symbol {
    pub fn from_char(c: char) -> Self {
        match c {
            'F' | 'f' => Self::Forward,
            'X' | 'x' => Self::Recurse,
            '+' => Self::TurnLeft,
            '-' => Self::TurnRight,
            '[' => Self::Push,
            ']' => Self::Pop,
            other => Self::Other(other),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Self::Forward => 'F',
            Self::Recurse => 'X',
            Self::TurnLeft => '+',
            Self::TurnRight => '-',
            Self::Push => '[',
            Self::Pop => ']',
            Self::Other(c) => c,
        }
    }

    /// `F` and `X` both move the turtle and emit a point.
    pub fn is_movement(self) -> bool {
        matches!(self, Self::Forward | Self::Recurse)
    }
}

impl From<char> for Symbol {
    fn from(c: char) -> Self {
        Self::from_char(c)
    }
}
