//! Shift a point graph into non-negative coordinates.

use lsys_types::PointGraph;

/// Translate `graph` so no coordinate is negative.
///
/// An axis is shifted by `|min|` only when its recorded minimum is negative;
/// the recorded minimum then becomes 0. Width and height are untouched.
pub fn to_positive(mut graph: PointGraph) -> PointGraph {
    let dx = (-graph.min_x).max(0);
    let dy = (-graph.min_y).max(0);
    if dx == 0 && dy == 0 {
        return graph;
    }

    for p in &mut graph.points {
        p.x += dx;
        p.y += dy;
    }
    graph.min_x += dx;
    graph.min_y += dy;
    graph
}
