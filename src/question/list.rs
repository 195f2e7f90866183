//! The validated, fixed question list.

use super::Question;
use crate::error::{ForgeError, Result};
use std::collections::HashSet;
use std::ops::Deref;

/// An ordered, non-empty list of questions with unique ids.
///
/// Construction is the only place the list invariants are checked; after
/// that the list is read-only and can be shared between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionList {
    questions: Vec<Question>,
}

impl QuestionList {
    /// Build a question list, checking that:
    /// - the list is non-empty
    /// - every id is non-empty and unique
    /// - every choice question has at least one option, with no duplicates
    pub fn new(questions: Vec<Question>) -> Result<Self> {
        if questions.is_empty() {
            return Err(ForgeError::UserError(
                "question list validation failed: at least one question is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for question in &questions {
            if question.id.trim().is_empty() {
                return Err(ForgeError::UserError(
                    "question list validation failed: question ids must be non-empty".to_string(),
                ));
            }
            if !seen.insert(question.id.as_str()) {
                return Err(ForgeError::UserError(format!(
                    "question list validation failed: duplicate question id '{}'",
                    question.id
                )));
            }

            if question.kind.is_text() {
                continue;
            }
            let options = question.kind.options();
            if options.is_empty() {
                return Err(ForgeError::UserError(format!(
                    "question list validation failed: '{}' is a {} question with no options",
                    question.id,
                    question.kind.label()
                )));
            }
            let mut seen_options = HashSet::new();
            for option in options {
                if !seen_options.insert(option.as_str()) {
                    return Err(ForgeError::UserError(format!(
                        "question list validation failed: '{}' lists option '{}' more than once",
                        question.id, option
                    )));
                }
            }
        }

        Ok(Self { questions })
    }

    /// Find a question by id.
    pub fn by_id(&self, id: &str) -> Option<&Question> {
        self.questions.iter().find(|q| q.id == id)
    }

    /// Fail unless every id in `required` names a question in the list.
    pub fn ensure_covers(&self, required: &[&str]) -> Result<()> {
        let missing: Vec<&str> = required
            .iter()
            .copied()
            .filter(|id| self.by_id(id).is_none())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ForgeError::UserError(format!(
                "question list validation failed: missing required question(s): {}",
                missing.join(", ")
            )))
        }
    }
}

impl Deref for QuestionList {
    type Target = [Question];

    fn deref(&self) -> &Self::Target {
        &self.questions
    }
}
