//! Interactive play session.
//!
//! A session owns one [`GameHistory`] and the move-list sort order, and
//! turns text commands into engine calls.

use super::render::render;
use derive_more::{Display, Error};
use std::str::FromStr;
use strictly_timeline::{GameHistory, InvalidArgument, MoveOutcome, SortOrder};
use tracing::{debug, instrument};

/// A command typed by the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    /// Claim a cell by row-major index.
    Play(usize),
    /// Claim a cell by 1-based row and column, as shown in the move list.
    PlayAt {
        /// 1-based row.
        row: usize,
        /// 1-based column.
        col: usize,
    },
    /// View an earlier (or later) recorded step.
    Jump(usize),
    /// Flip the move list order.
    ToggleSort,
    /// Redraw the current view.
    Show,
    /// List the commands.
    Help,
    /// End the session.
    Quit,
}

/// Command text that could not be understood.
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Unrecognized command '{}': {}", input, reason)]
pub struct CommandError {
    /// The offending input.
    pub input: String,
    /// What was wrong with it.
    pub reason: String,
}

impl CommandError {
    fn new(input: &str, reason: impl Into<String>) -> Self {
        Self {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

fn parse_number(input: &str, word: Option<&str>) -> Result<usize, CommandError> {
    let word = word.ok_or_else(|| CommandError::new(input, "missing number"))?;
    word.parse()
        .map_err(|_| CommandError::new(input, format!("'{word}' is not a non-negative number")))
}

impl FromStr for SessionCommand {
    type Err = CommandError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let mut words = input.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::new(input, "empty command"));
        };

        let command = match verb.to_lowercase().as_str() {
            "play" | "p" => {
                let first = parse_number(input, words.next())?;
                match words.next() {
                    Some(col) => SessionCommand::PlayAt {
                        row: first,
                        col: parse_number(input, Some(col))?,
                    },
                    None => SessionCommand::Play(first),
                }
            }
            "jump" | "j" => SessionCommand::Jump(parse_number(input, words.next())?),
            "sort" => SessionCommand::ToggleSort,
            "show" => SessionCommand::Show,
            "help" | "?" => SessionCommand::Help,
            "quit" | "exit" | "q" => SessionCommand::Quit,
            other => return Err(CommandError::new(input, format!("unknown verb '{other}'"))),
        };

        if words.next().is_some() {
            return Err(CommandError::new(input, "too many arguments"));
        }
        Ok(command)
    }
}

/// What the driver loop should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Flow {
    /// Print this text and read the next command.
    Continue(String),
    /// Stop reading commands.
    Quit,
}

/// Help text listing the session commands.
pub const HELP: &str = "\
Commands:
  play <cell>        claim a cell by the number shown on the board
  play <row> <col>   claim a cell by 1-based row and column
  jump <step>        view a recorded step (0 is the game start)
  sort               toggle move list order
  show               redraw the board
  help               show this text
  quit               leave";

/// One game plus its presentation state.
#[derive(Debug, Clone)]
pub struct Session {
    history: GameHistory,
    order: SortOrder,
}

impl Session {
    /// Starts a session on an empty `size`×`size` board.
    #[instrument]
    pub fn new(size: usize, order: SortOrder) -> Result<Self, InvalidArgument> {
        Ok(Self {
            history: GameHistory::new(size)?,
            order,
        })
    }

    /// Wraps an existing history.
    pub fn from_history(history: GameHistory, order: SortOrder) -> Self {
        Self { history, order }
    }

    /// The game being played.
    pub fn history(&self) -> &GameHistory {
        &self.history
    }

    /// Current move list order.
    pub fn order(&self) -> SortOrder {
        self.order
    }

    /// Renders the current view.
    pub fn render(&self) -> String {
        render(&self.history, self.order)
    }

    /// Executes a command.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidArgument`] when a jump names a step that was never
    /// recorded. Ignored moves are reported in the returned text instead.
    #[instrument(skip(self))]
    pub fn handle(&mut self, command: SessionCommand) -> Result<Flow, InvalidArgument> {
        let text = match command {
            SessionCommand::Play(cell) => self.play(cell),
            SessionCommand::PlayAt { row, col } => {
                let cell = row
                    .checked_sub(1)
                    .zip(col.checked_sub(1))
                    .and_then(|(r, c)| self.history.current_entry().board().index_of(r, c));
                match cell {
                    Some(cell) => self.play(cell),
                    None => format!(
                        "Move ignored: (Col: {col}, Row: {row}) is off the board\n\n{}",
                        self.render()
                    ),
                }
            }
            SessionCommand::Jump(step) => {
                self.history.jump_to(step)?;
                self.render()
            }
            SessionCommand::ToggleSort => {
                self.order = self.order.toggle();
                debug!(order = %self.order, "Sort order toggled");
                self.render()
            }
            SessionCommand::Show => self.render(),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => return Ok(Flow::Quit),
        };
        Ok(Flow::Continue(text))
    }

    fn play(&mut self, cell: usize) -> String {
        match self.history.apply_move(cell) {
            MoveOutcome::Applied(_) => self.render(),
            MoveOutcome::Rejected(reason) => format!("Move ignored: {reason}\n\n{}", self.render()),
        }
    }
}
