//! Core domain types for tic-tac-toe.

use super::error::InvalidArgument;
use super::listing::CellCoord;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Returns the player to move once `moves_played` marks are on the board.
    ///
    /// X moves on even counts, O on odd counts.
    pub fn to_move_after(moves_played: usize) -> Self {
        if moves_played % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }
}

/// Content of a single cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Cell claimed by a player.
    Occupied(Player),
}

impl Mark {
    /// Returns the owning player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(player) => Some(player),
        }
    }

    /// Symbol used when rendering a board.
    pub fn symbol(self) -> Option<char> {
        match self {
            Mark::Empty => None,
            Mark::Occupied(Player::X) => Some('X'),
            Mark::Occupied(Player::O) => Some('O'),
        }
    }
}

impl From<Player> for Mark {
    fn from(player: Player) -> Self {
        Mark::Occupied(player)
    }
}

/// N×N board snapshot.
///
/// Cells are stored in row-major order, `index = row * size + col`.
/// A board is never edited in place: [`Board::with_mark`] returns the
/// successor snapshot and leaves `self` untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: usize,
    cells: Vec<Mark>,
}

/// Unchecked wire form of [`Board`].
#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Mark>,
}

impl TryFrom<RawBoard> for Board {
    type Error = InvalidArgument;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        Board::from_marks(raw.size, raw.cells)
    }
}

impl Board {
    /// Creates an empty board with `size` rows and columns.
    ///
    /// # Panics
    ///
    /// Panics if `size * size` overflows; [`GameHistory::new`] bounds the
    /// size before calling this.
    ///
    /// [`GameHistory::new`]: crate::GameHistory::new
    #[instrument]
    pub fn empty(size: usize) -> Self {
        Self {
            size,
            cells: vec![Mark::Empty; size * size],
        }
    }

    /// Builds a board from explicit marks in row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] if `size` is zero or `marks` does not hold
    /// exactly `size * size` cells.
    #[instrument(skip(marks), fields(len = marks.len()))]
    pub fn from_marks(size: usize, marks: Vec<Mark>) -> Result<Self, InvalidArgument> {
        if size == 0 {
            return Err(InvalidArgument::new("Board size must be at least 1"));
        }
        let Some(expected) = size.checked_mul(size) else {
            return Err(InvalidArgument::new(format!("Board size {size} is too large")));
        };
        if marks.len() != expected {
            return Err(InvalidArgument::new(format!(
                "Expected {expected} marks for a {size}x{size} board, got {}",
                marks.len()
            )));
        }
        Ok(Self { size, cells: marks })
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Gets the mark at the given cell index.
    pub fn get(&self, cell: usize) -> Option<Mark> {
        self.cells.get(cell).copied()
    }

    /// Checks if a cell exists and holds no mark.
    pub fn is_vacant(&self, cell: usize) -> bool {
        matches!(self.get(cell), Some(Mark::Empty))
    }

    /// Returns all marks in row-major order.
    pub fn marks(&self) -> &[Mark] {
        &self.cells
    }

    /// Returns a copy of this board with `cell` set to `mark`.
    ///
    /// Returns `None` if `cell` is off the board.
    pub fn with_mark(&self, cell: usize, mark: Mark) -> Option<Self> {
        if cell >= self.cells.len() {
            return None;
        }
        let mut cells = self.cells.clone();
        cells[cell] = mark;
        Some(Self {
            size: self.size,
            cells,
        })
    }

    /// Converts a 0-based row and column to a cell index.
    pub fn index_of(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then_some(row * self.size + col)
    }

    /// Converts a cell index to its 0-based row and column.
    pub fn coord_of(&self, cell: usize) -> Option<CellCoord> {
        (cell < self.cells.len()).then(|| CellCoord::from_index(cell, self.size))
    }

    /// Cell indices that hold no mark, in ascending order.
    pub fn vacant_cells(&self) -> Vec<usize> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, mark)| **mark == Mark::Empty)
            .map(|(cell, _)| cell)
            .collect()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their index so a player can see what to type.
    pub fn display(&self) -> String {
        let width = self.cells.len().saturating_sub(1).to_string().len();
        let mut result = String::new();
        for row in 0..self.size {
            for col in 0..self.size {
                let cell = row * self.size + col;
                let symbol = match self.cells[cell].symbol() {
                    Some(symbol) => symbol.to_string(),
                    None => cell.to_string(),
                };
                result.push_str(&format!("{symbol:^width$}"));
                if col + 1 < self.size {
                    result.push('|');
                }
            }
            if row + 1 < self.size {
                result.push('\n');
                let rule = vec!["-".repeat(width); self.size].join("+");
                result.push_str(&rule);
                result.push('\n');
            }
        }
        result
    }
}
