//! Implementation of the `promptforge run` command.
//!
//! Drives one [`FlowController`] from the terminal: a welcome screen, one
//! screen per question, then the finished prompt. The flow can be reset and
//! run again any number of times before quitting.

mod display;
mod input;
mod session;

#[cfg(test)]
mod tests;

pub use session::{Session, SessionSummary};

use crate::cli::RunArgs;
use crate::config::Config;
use crate::error::Result;
use crate::events::EventLog;
use crate::flow::FlowController;
use std::io;
use std::path::PathBuf;

/// Execute the `promptforge run` command.
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let questions = config.question_list()?;

    let export_path = if args.no_export {
        None
    } else {
        Some(
            args.output
                .unwrap_or_else(|| PathBuf::from(&config.export_file_name)),
        )
    };

    let mut session = Session::new(
        FlowController::new(questions),
        EventLog::new(config.event_log.clone()),
        export_path,
    );

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout().lock();
    let summary = session.run(&mut input, &mut out)?;

    if summary.completed > 0 {
        println!();
        println!(
            "Generated {} prompt(s), exported {}.",
            summary.completed,
            summary.exports.len()
        );
    }

    Ok(())
}
