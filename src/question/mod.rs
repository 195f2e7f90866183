//! Questions asked by a flow.
//!
//! Each question carries a [`QuestionKind`], a closed sum type over the five
//! kinds of input a flow understands. Validation of a submitted answer is
//! attached to the kind, so adding a kind is an exhaustiveness error until
//! both rendering and validation handle it.

mod catalog;
mod list;

#[cfg(test)]
mod tests;

pub use catalog::default_questions;
pub use list::QuestionList;

use crate::answer::{AnswerValue, Rejection, Selection};
use serde::{Deserialize, Serialize};

/// A single question in the fixed question list.
///
/// Deserialization goes through `RawQuestion` so that an `options` list on a
/// text question is an error rather than silently dropped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawQuestion")]
pub struct Question {
    /// Unique, stable key. Answers are stored under this id.
    pub id: String,

    /// Text shown to the user.
    pub prompt: String,

    /// Input kind, including options for the choice kinds.
    #[serde(flatten)]
    pub kind: QuestionKind,

    /// Optional placeholder text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl Question {
    pub fn new(id: impl Into<String>, prompt: impl Into<String>, kind: QuestionKind) -> Self {
        Self {
            id: id.into(),
            prompt: prompt.into(),
            kind,
            hint: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Question as written in a config file, before kind and options are paired.
#[derive(Deserialize)]
struct RawQuestion {
    id: String,
    prompt: String,
    kind: KindName,
    #[serde(default)]
    options: Option<Vec<String>>,
    #[serde(default)]
    hint: Option<String>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(rename_all = "snake_case")]
enum KindName {
    SingleLineText,
    FreeText,
    SingleChoice,
    MultipleChoice,
    ExclusiveChoice,
}

impl TryFrom<RawQuestion> for Question {
    type Error = String;

    fn try_from(raw: RawQuestion) -> Result<Self, Self::Error> {
        let kind = match (raw.kind, raw.options) {
            (KindName::SingleLineText, None) => QuestionKind::SingleLineText,
            (KindName::FreeText, None) => QuestionKind::FreeText,
            (KindName::SingleLineText | KindName::FreeText, Some(_)) => {
                return Err(format!(
                    "question '{}': options are not allowed on a text question",
                    raw.id
                ));
            }
            (KindName::SingleChoice, options) => QuestionKind::SingleChoice {
                options: options.unwrap_or_default(),
            },
            (KindName::MultipleChoice, options) => QuestionKind::MultipleChoice {
                options: options.unwrap_or_default(),
            },
            (KindName::ExclusiveChoice, options) => QuestionKind::ExclusiveChoice {
                options: options.unwrap_or_default(),
            },
        };

        Ok(Self {
            id: raw.id,
            prompt: raw.prompt,
            kind,
            hint: raw.hint,
        })
    }
}

/// The kind of input a question expects.
///
/// Serialized with a `kind` tag in snake_case, e.g. `kind: multiple_choice`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum QuestionKind {
    /// One line of text.
    SingleLineText,
    /// Free-form, possibly multi-line text.
    FreeText,
    /// Pick exactly one option from a list.
    SingleChoice { options: Vec<String> },
    /// Pick one or more options; order of picking is kept.
    MultipleChoice { options: Vec<String> },
    /// Pick exactly one option from mutually exclusive alternatives.
    ExclusiveChoice { options: Vec<String> },
}

impl QuestionKind {
    /// Options for the choice kinds; empty for text kinds.
    pub fn options(&self) -> &[String] {
        match self {
            QuestionKind::SingleLineText | QuestionKind::FreeText => &[],
            QuestionKind::SingleChoice { options }
            | QuestionKind::MultipleChoice { options }
            | QuestionKind::ExclusiveChoice { options } => options,
        }
    }

    pub fn is_text(&self) -> bool {
        matches!(self, QuestionKind::SingleLineText | QuestionKind::FreeText)
    }

    pub fn is_multiple_choice(&self) -> bool {
        matches!(self, QuestionKind::MultipleChoice { .. })
    }

    /// Short human-readable label for the kind.
    pub fn label(&self) -> &'static str {
        match self {
            QuestionKind::SingleLineText => "single-line text",
            QuestionKind::FreeText => "free text",
            QuestionKind::SingleChoice { .. } => "single choice",
            QuestionKind::MultipleChoice { .. } => "multiple choice",
            QuestionKind::ExclusiveChoice { .. } => "exclusive choice",
        }
    }

    /// True if `option` is one of this kind's options.
    pub fn has_option(&self, option: &str) -> bool {
        self.options().iter().any(|o| o == option)
    }

    /// Check a submitted value and return the value to commit.
    ///
    /// Text is committed trimmed. A single-element selection is accepted for
    /// the single-value choice kinds, and plain text is accepted for
    /// multiple-choice as a one-option selection.
    pub fn validate(&self, value: AnswerValue) -> Result<AnswerValue, Rejection> {
        match self {
            QuestionKind::SingleLineText | QuestionKind::FreeText => {
                let text = value.as_text().ok_or(Rejection::WrongShape {
                    expected: "a text answer",
                })?;
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    return Err(Rejection::EmptyText);
                }
                Ok(AnswerValue::Text(trimmed.to_string()))
            }
            QuestionKind::SingleChoice { options } | QuestionKind::ExclusiveChoice { options } => {
                let choice = match &value {
                    AnswerValue::Text(text) => text.as_str(),
                    AnswerValue::Selection(selection) if selection.len() == 1 => {
                        selection.as_slice()[0].as_str()
                    }
                    AnswerValue::Selection(_) => {
                        return Err(Rejection::WrongShape {
                            expected: "exactly one option",
                        });
                    }
                };
                if !options.iter().any(|o| o == choice) {
                    return Err(Rejection::UnknownOption(choice.to_string()));
                }
                Ok(AnswerValue::Text(choice.to_string()))
            }
            QuestionKind::MultipleChoice { options } => {
                let selection = match value {
                    AnswerValue::Selection(selection) => selection,
                    AnswerValue::Text(text) => {
                        let mut selection = Selection::new();
                        if !text.is_empty() {
                            selection.insert(text);
                        }
                        selection
                    }
                };
                if selection.is_empty() {
                    return Err(Rejection::EmptySelection);
                }
                if let Some(unknown) = selection
                    .iter()
                    .find(|s| !options.iter().any(|o| o.as_str() == *s))
                {
                    return Err(Rejection::UnknownOption(unknown.to_string()));
                }
                Ok(AnswerValue::Selection(selection))
            }
        }
    }
}
