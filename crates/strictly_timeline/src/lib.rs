//! Strictly Timeline - tic-tac-toe with a navigable move history.
//!
//! Two players alternate placing marks on an N×N board until one of them
//! owns a full row, column, or diagonal, or the board fills up. Every
//! position is kept, so a front end can jump back to any earlier step and
//! play on from there.
//!
//! # Architecture
//!
//! - **Types**: players, marks, and immutable board snapshots
//! - **Rules**: pure win and draw detection over a single board
//! - **History**: recorded snapshots plus the cursor being viewed
//! - **Contracts / Invariants**: move preconditions and history guarantees
//! - **View / Listing**: plain data for drawing the board and move list
//!
//! # Example
//!
//! ```
//! use strictly_timeline::{GameHistory, Player, Status};
//!
//! # fn main() -> Result<(), strictly_timeline::InvalidArgument> {
//! let mut history = GameHistory::new(3)?;
//! for cell in [0, 4, 1, 5, 2] {
//!     history.apply_move(cell);
//! }
//! assert_eq!(history.current_view().status(), Status::Won(Player::X));
//!
//! // Rewind and take a different branch.
//! history.jump_to(0)?;
//! history.apply_move(8);
//! assert_eq!(history.entries().len(), 2);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod error;
mod history;
mod invariants;
mod listing;
mod rules;
mod types;
mod view;

// Crate-level exports - Domain types
pub use types::{Board, Mark, Player};

// Crate-level exports - Moves
pub use action::{Move, MoveOutcome, Rejection};

// Crate-level exports - Rules
pub use rules::{Line, LineKind, WinDetector, WinResult, candidate_lines, check_winner, is_draw, is_full};

// Crate-level exports - History
pub use history::{DEFAULT_BOARD_SIZE, GameHistory, HistoryEntry, MAX_BOARD_SIZE};

// Crate-level exports - Views
pub use listing::{CellCoord, MoveListing, SortOrder};
pub use view::{Status, ViewSnapshot};

// Crate-level exports - Validation
pub use contracts::{CellIsVacant, CellOnBoard, Contract, LegalMove, MoveContract, PositionUndecided};
pub use invariants::{
    AlternatingMarkInvariant, CursorInBoundsInvariant, EmptyOriginInvariant, Invariant,
    InvariantSet, InvariantViolation, NoPlayPastWinInvariant, SingleCellDeltaInvariant,
    TimelineInvariants,
};

// Crate-level exports - Errors
pub use error::InvalidArgument;
