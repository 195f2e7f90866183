//! Answer values and the answer set accumulated by a flow.
//!
//! An answer is either a single string or an ordered selection of strings.
//! Selections keep first-insertion order and collapse duplicates, so the
//! order a user picked options in is the order they are rendered in.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// An ordered set of selected options.
///
/// Order is insertion order, never sorted. Inserting a value that is already
/// present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct Selection(Vec<String>);

impl Selection {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Add a value if absent. Returns `true` if it was added.
    pub fn insert(&mut self, value: impl Into<String>) -> bool {
        let value = value.into();
        if self.contains(&value) {
            return false;
        }
        self.0.push(value);
        true
    }

    /// Add the value if absent, remove it if present.
    ///
    /// Returns `true` if the value is selected after the call.
    pub fn toggle(&mut self, value: &str) -> bool {
        if let Some(index) = self.0.iter().position(|v| v == value) {
            self.0.remove(index);
            false
        } else {
            self.0.push(value.to_string());
            true
        }
    }

    pub fn contains(&self, value: &str) -> bool {
        self.0.iter().any(|v| v == value)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Join the selected values in insertion order.
    pub fn join(&self, separator: &str) -> String {
        self.0.join(separator)
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        values.into_iter().collect()
    }
}

impl From<Selection> for Vec<String> {
    fn from(selection: Selection) -> Self {
        selection.0
    }
}

impl<S: Into<String>> FromIterator<S> for Selection {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selection = Selection::new();
        for value in iter {
            selection.insert(value);
        }
        selection
    }
}

/// A committed answer to one question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    /// Free text or a single chosen option.
    Text(String),
    /// Options chosen on a multiple-choice question.
    Selection(Selection),
}

impl AnswerValue {
    /// Render the value as text, joining selections with `separator`.
    pub fn joined(&self, separator: &str) -> String {
        match self {
            AnswerValue::Text(text) => text.clone(),
            AnswerValue::Selection(selection) => selection.join(separator),
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            AnswerValue::Text(text) => Some(text),
            AnswerValue::Selection(_) => None,
        }
    }

    pub fn as_selection(&self) -> Option<&Selection> {
        match self {
            AnswerValue::Text(_) => None,
            AnswerValue::Selection(selection) => Some(selection),
        }
    }

    /// True for blank text and empty selections.
    pub fn is_blank(&self) -> bool {
        match self {
            AnswerValue::Text(text) => text.trim().is_empty(),
            AnswerValue::Selection(selection) => selection.is_empty(),
        }
    }
}

impl From<&str> for AnswerValue {
    fn from(text: &str) -> Self {
        AnswerValue::Text(text.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(text: String) -> Self {
        AnswerValue::Text(text)
    }
}

impl From<Selection> for AnswerValue {
    fn from(selection: Selection) -> Self {
        AnswerValue::Selection(selection)
    }
}

impl fmt::Display for AnswerValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined(", "))
    }
}

/// Committed answers keyed by question id.
///
/// Ordered by key so iteration and serialization are deterministic.
pub type AnswerSet = BTreeMap<String, AnswerValue>;

/// Why an answer (or a toggle) was not accepted.
///
/// A rejection is a normal outcome, not an error: the flow state is left
/// untouched and the caller re-prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    /// Text was empty after trimming.
    EmptyText,
    /// A multiple-choice answer had no selected options.
    EmptySelection,
    /// A value is not one of the question's options.
    UnknownOption(String),
    /// A selection was given for a single-value question, or text for a multiple-choice one.
    WrongShape { expected: &'static str },
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rejection::EmptyText => write!(f, "an answer is required"),
            Rejection::EmptySelection => write!(f, "select at least one option"),
            Rejection::UnknownOption(option) => write!(f, "'{}' is not one of the options", option),
            Rejection::WrongShape { expected } => write!(f, "expected {}", expected),
        }
    }
}
