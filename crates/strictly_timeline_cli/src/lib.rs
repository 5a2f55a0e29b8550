//! Terminal front end for the strictly_timeline engine.
//!
//! Renders the board, status line, and move list as text and drives a
//! [`strictly_timeline::GameHistory`] from typed commands.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod config;
mod render;
mod session;

pub use cli::{Cli, Command};
pub use config::{ConfigError, TimelineConfig};
pub use render::render;
pub use session::{CommandError, Flow, HELP, Session, SessionCommand};
