//! Candidate winning lines for an N×N board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Which row, column, or diagonal a line runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum LineKind {
    /// Row `i`, counted from the top.
    #[display("row {}", _0)]
    Row(usize),
    /// Column `i`, counted from the left.
    #[display("column {}", _0)]
    Column(usize),
    /// Top-left to bottom-right.
    #[display("diagonal")]
    Diagonal,
    /// Top-right to bottom-left.
    #[display("anti-diagonal")]
    AntiDiagonal,
}

/// A line of `size` cell indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters)]
pub struct Line {
    /// Orientation of the line.
    kind: LineKind,
    /// Cell indices in the line, in board order.
    cells: Vec<usize>,
}

/// Builds every candidate line in evaluation order.
///
/// Rows top to bottom, then columns left to right, then the main diagonal,
/// then the anti-diagonal. Each line holds exactly `size` cells.
#[instrument]
pub fn candidate_lines(size: usize) -> Vec<Line> {
    let mut lines = Vec::with_capacity(2 * size + 2);

    for row in 0..size {
        lines.push(Line {
            kind: LineKind::Row(row),
            cells: (0..size).map(|col| row * size + col).collect(),
        });
    }

    for col in 0..size {
        lines.push(Line {
            kind: LineKind::Column(col),
            cells: (0..size).map(|row| row * size + col).collect(),
        });
    }

    lines.push(Line {
        kind: LineKind::Diagonal,
        cells: (0..size).map(|i| i * size + i).collect(),
    });
    lines.push(Line {
        kind: LineKind::AntiDiagonal,
        cells: (0..size).map(|i| i * size + (size - 1 - i)).collect(),
    });

    lines
}
