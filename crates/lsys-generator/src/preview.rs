//! Plain-text preview of a point graph.

use lsys_types::PointGraph;

/// Plot every point as `X` on a `cols × rows` character board, y pointing
/// up, scaled to fit, framed by a rule of `-` above and below.
///
/// Returns an empty string for a zero-sized board.
pub fn render_ascii(graph: &PointGraph, cols: usize, rows: usize) -> String {
    if cols == 0 || rows == 0 {
        return String::new();
    }

    let mut board = vec![vec![' '; cols]; rows];
    let (min_x, max_x) = extent(graph.iter().map(|p| p.x));
    let (min_y, max_y) = extent(graph.iter().map(|p| p.y));

    for p in graph {
        let col = scale(p.x - min_x, max_x - min_x, cols);
        let row = scale(p.y - min_y, max_y - min_y, rows);
        board[rows - 1 - row][col] = 'X';
    }

    let rule = "-".repeat(cols);
    let mut out = String::with_capacity((cols + 1) * (rows + 2));
    out.push_str(&rule);
    out.push('\n');
    for line in board {
        out.extend(line);
        out.push('\n');
    }
    out.push_str(&rule);
    out
}

fn extent(values: impl Iterator<Item = i64>) -> (i64, i64) {
    values.fold((0, 0), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Map `offset ∈ [0, span]` onto `[0, cells - 1]`.
fn scale(offset: i64, span: i64, cells: usize) -> usize {
    if span <= 0 {
        return 0;
    }
    let last = (cells - 1) as i128;
    let cell = i128::from(offset) * last / i128::from(span);
    cell.clamp(0, last) as usize
}
