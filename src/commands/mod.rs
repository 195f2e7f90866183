//! Command implementations for promptforge.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod init;
mod questions;
mod render;
pub mod run;

pub use render::{load_answers, parse_answers, render_answers};

use crate::cli::Command;
use crate::error::Result;

/// Dispatch a command to its implementation.
///
/// This is the main entry point for command execution. Each command
/// is routed to its handler function.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run::cmd_run(args),
        Command::Questions(args) => questions::cmd_questions(args),
        Command::Render(args) => render::cmd_render(args),
        Command::Init(args) => init::cmd_init(args),
    }
}
