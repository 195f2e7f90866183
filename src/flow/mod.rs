//! Guided question flow.
//!
//! A [`FlowController`] walks a fixed [`QuestionList`](crate::question::QuestionList)
//! from the first question to the last, accumulating typed answers. The flow
//! is strictly linear:
//!
//! ```text
//! Welcome --start--> InProgress(0) --answer--> InProgress(1) ... --answer--> Complete
//!    ^                    |  ^                      |                            |
//!    |                    |  +--------back----------+                            |
//!    +------reset---------+------------------------------------------------------+
//! ```
//!
//! Going back never truncates later answers; they stay in the answer set until
//! overwritten, so the completed answer set always holds the most recent
//! submission for each question.
//!
//! The controller performs no I/O. Each session owns its controller; nothing
//! is shared between sessions except the read-only question list.

mod controller;
mod state;


pub use controller::{AnswerOutcome, FlowController, ToggleOutcome};
pub use state::{FlowState, Phase, Progress};
