//! Flow lifecycle phase and the mutable flow state.

use crate::answer::{AnswerSet, Selection};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse lifecycle state of a flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Not started, or reset.
    #[default]
    Welcome,
    /// Answering questions.
    InProgress,
    /// Every question answered; a document has been generated.
    Complete,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Welcome => write!(f, "welcome"),
            Phase::InProgress => write!(f, "in-progress"),
            Phase::Complete => write!(f, "complete"),
        }
    }
}

/// The state owned by one flow session.
///
/// `position` is only meaningful in [`Phase::InProgress`]. `pending_selection`
/// holds uncommitted picks for the current multiple-choice question.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FlowState {
    pub phase: Phase,
    pub position: usize,
    pub answers: AnswerSet,
    pub pending_selection: Selection,
}

impl FlowState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard everything and return to [`Phase::Welcome`].
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Position of the current question, for progress displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    /// 1-based number of the current question.
    pub current: usize,
    pub total: usize,
    /// `current / total` as a rounded percentage.
    pub percent: u8,
}

impl Progress {
    pub(crate) fn new(position: usize, total: usize) -> Self {
        let current = position + 1;
        let percent = ((current * 100) as f64 / total as f64).round() as u8;
        Self {
            current,
            total,
            percent,
        }
    }
}

impl fmt::Display for Progress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} ({}%)", self.current, self.total, self.percent)
    }
}
