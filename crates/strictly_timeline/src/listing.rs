//! Move list entries for navigating history.
//!
//! A front end shows one row per recorded entry and lets the player jump
//! back to it. The rows carry display text in the form players expect:
//! 1-based columns and rows, "Go to game start" for the empty board.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// 0-based row and column of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct CellCoord {
    /// Row, counted from the top.
    pub row: usize,
    /// Column, counted from the left.
    pub col: usize,
}

impl CellCoord {
    /// Splits a row-major cell index for a board with `size` columns.
    pub fn from_index(cell: usize, size: usize) -> Self {
        Self {
            row: cell / size,
            col: cell % size,
        }
    }
}

impl std::fmt::Display for CellCoord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "(Col: {}, Row: {})", self.col + 1, self.row + 1)
    }
}

/// Order in which the move list is presented.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(ascii_case_insensitive)]
pub enum SortOrder {
    /// Game start first.
    #[default]
    Ascending,
    /// Latest move first.
    Descending,
}

impl SortOrder {
    /// Returns the opposite order.
    pub fn toggle(self) -> Self {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }
}

/// One row of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, derive_new::new)]
pub struct MoveListing {
    /// History step this row jumps to.
    step: usize,
    /// Where the move at this step was played; `None` for game start.
    coord: Option<CellCoord>,
    /// Whether this step is the one currently viewed.
    is_current: bool,
}

impl MoveListing {
    /// Button text for this row.
    pub fn label(&self) -> String {
        if self.step == 0 {
            "Go to game start".to_string()
        } else {
            format!("Go to move #{}", self.step)
        }
    }
}

impl std::fmt::Display for MoveListing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.coord {
            Some(coord) => write!(f, "{} {}", self.label(), coord),
            None => write!(f, "{}", self.label()),
        }
    }
}
