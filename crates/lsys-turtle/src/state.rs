//! Turtle state with branch save/restore.

use lsys_types::{Point, VERTICAL};

/// The turtle's working point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Turtle {
    pub x: i64,
    pub y: i64,
    /// Heading in radians, counter-clockwise from +x.
    pub heading: f64,
    /// Current branch depth.
    pub level: u32,
    /// Index of the point the turtle currently occupies.
    pub index: usize,
}

impl Turtle {
    /// At the root: origin, heading up, trunk level.
    pub fn at_root() -> Self {
        Self {
            x: 0,
            y: 0,
            heading: VERTICAL,
            level: 0,
            index: 0,
        }
    }
}

/// Scan state: the working turtle plus saved snapshots.
///
/// `[` pushes the turtle as it stands and increments the level; `]` pops the
/// snapshot back, so the stack depth always equals `current.level`. The
/// point counter lives outside the snapshots and is never rewound.
#[derive(Debug, Clone)]
pub struct TurtleState {
    pub current: Turtle,
    stack: Vec<Turtle>,
    last_index: usize,
}

impl TurtleState {
    pub fn new() -> Self {
        Self {
            current: Turtle::at_root(),
            stack: Vec::new(),
            last_index: 0,
        }
    }

    pub fn level(&self) -> u32 {
        self.current.level
    }

    /// Number of open branches.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Open a branch.
    pub fn push(&mut self) {
        self.stack.push(self.current);
        self.current.level += 1;
    }

    /// Close a branch. Returns `false` (and changes nothing) when no branch
    /// is open.
    pub fn pop(&mut self) -> bool {
        match self.stack.pop() {
            Some(saved) => {
                self.current = saved;
                true
            }
            None => false,
        }
    }

    /// Rotate the heading by `radians` (positive is counter-clockwise).
    pub fn turn(&mut self, radians: f64) {
        self.current.heading += radians;
    }

    /// Move `distance` along the heading and return the new point.
    ///
    /// The parent is the point occupied before the move; the position is
    /// rounded to the nearest integer.
    pub fn advance(&mut self, distance: f64) -> Point {
        let parent = self.current.index;
        let Turtle { x, y, heading, .. } = self.current;

        self.last_index += 1;
        self.current.x = (x as f64 + distance * heading.cos()).round() as i64;
        self.current.y = (y as f64 + distance * heading.sin()).round() as i64;
        self.current.index = self.last_index;

        Point {
            x: self.current.x,
            y: self.current.y,
            angle: self.current.heading,
            level: self.current.level,
            index: self.current.index,
            parent: Some(parent),
        }
    }
}

impl Default for TurtleState {
    fn default() -> Self {
        Self::new()
    }
}
