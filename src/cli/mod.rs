//! CLI argument parsing for promptforge.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptforge: answer a few guided questions, get a structured prompt template.
///
/// The flow walks a fixed list of questions (objective, audience, tone,
/// format, length, context, examples, constraints) and synthesizes the
/// answers into a plain-text prompt document.
#[derive(Parser, Debug)]
#[command(name = "promptforge")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for promptforge.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the guided question flow interactively.
    ///
    /// Type `:back` to revisit the previous question, `:reset` to start over
    /// and `:quit` to leave. The finished prompt is exported as a .txt file.
    Run(RunArgs),

    /// List the configured questions.
    Questions(QuestionsArgs),

    /// Render a prompt from an answers file without prompting.
    ///
    /// The file is YAML or JSON mapping question ids to a string or a list
    /// of strings. Every answer is validated as if it had been typed in.
    Render(RenderArgs),

    /// Write a default promptforge.yaml.
    Init(InitArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Config file (default: ./promptforge.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Export path for the finished prompt (default: config `export_file_name`).
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Show the finished prompt without writing it to a file.
    #[arg(long, conflicts_with = "output")]
    pub no_export: bool,
}

/// Arguments for the `questions` command.
#[derive(Parser, Debug)]
pub struct QuestionsArgs {
    /// Config file (default: ./promptforge.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the `render` command.
#[derive(Parser, Debug)]
pub struct RenderArgs {
    /// Answers file (YAML or JSON).
    #[arg(short, long)]
    pub answers: PathBuf,

    /// Config file (default: ./promptforge.yaml if present).
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Write the prompt to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Where to write the config.
    #[arg(long, default_value = "promptforge.yaml")]
    pub path: PathBuf,

    /// Overwrite an existing file.
    #[arg(long)]
    pub force: bool,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
