//! Promptforge: a guided question flow that builds structured prompt templates.
//!
//! The engine is pure and synchronous. A [`flow::FlowController`] walks an
//! ordered [`question::QuestionList`], validates each answer, supports
//! backward navigation and reset, and on the last answer hands the complete
//! [`answer::AnswerSet`] to a [`synth::TemplateSynthesizer`]. Rendering to a
//! terminal, exporting files and event logging live in the CLI layer
//! (`commands`, `fs`, `events`).
//!
//! ```
//! use promptforge::flow::{AnswerOutcome, FlowController};
//! use promptforge::question::{QuestionList, default_questions};
//! use std::sync::Arc;
//!
//! let questions = Arc::new(QuestionList::new(default_questions())?);
//! let mut flow = FlowController::new(questions);
//! flow.start()?;
//! let outcome = flow.answer("Explain recursion")?;
//! assert_eq!(outcome, AnswerOutcome::Advanced { position: 1 });
//! # Ok::<(), promptforge::error::ForgeError>(())
//! ```

pub mod answer;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod events;
pub mod exit_codes;
pub mod flow;
pub mod fs;
pub mod question;
pub mod synth;
