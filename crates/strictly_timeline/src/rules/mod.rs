//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot.
//! Rules are separated from history storage so the history can ask about
//! whichever snapshot is being viewed.

pub mod draw;
pub mod lines;
pub mod win;

pub use draw::{is_draw, is_full};
pub use lines::{Line, LineKind, candidate_lines};
pub use win::{WinDetector, WinResult, check_winner};
