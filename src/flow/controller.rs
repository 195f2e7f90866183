//! The flow controller: forward/backward navigation over the question list.

use super::state::{FlowState, Phase, Progress};
use crate::answer::{AnswerSet, AnswerValue, Rejection, Selection};
use crate::error::{ForgeError, Result};
use crate::question::{Question, QuestionList};
use crate::synth::{GeneratedDocument, TemplateSynthesizer};
use std::sync::Arc;

/// Result of submitting an answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnswerOutcome {
    /// The answer was recorded and the flow moved to `position`.
    Advanced { position: usize },
    /// The last question was answered and the document was generated.
    Completed,
    /// The answer was not accepted; nothing was recorded.
    Rejected(Rejection),
}

/// Result of toggling an option on a multiple-choice question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    Selected,
    Deselected,
    /// The option is not one of the question's options.
    Rejected(Rejection),
}

/// Drives one flow session.
///
/// Each controller owns its own [`FlowState`]; the question list is shared
/// read-only, so independent sessions can be created from one list.
#[derive(Debug, Clone)]
pub struct FlowController {
    questions: Arc<QuestionList>,
    synthesizer: TemplateSynthesizer,
    state: FlowState,
    document: Option<GeneratedDocument>,
}

impl FlowController {
    /// Create a controller in the [`Phase::Welcome`] phase.
    pub fn new(questions: Arc<QuestionList>) -> Self {
        Self {
            questions,
            synthesizer: TemplateSynthesizer::new(),
            state: FlowState::new(),
            document: None,
        }
    }

    /// Begin a fresh flow at the first question.
    pub fn start(&mut self) -> Result<()> {
        self.require_phase(Phase::Welcome, "start the flow")?;

        self.state.phase = Phase::InProgress;
        self.state.position = 0;
        self.state.answers.clear();
        self.state.pending_selection.clear();
        self.document = None;
        Ok(())
    }

    /// The question at the current position.
    pub fn current_question(&self) -> Result<&Question> {
        if self.state.phase != Phase::InProgress {
            return Err(ForgeError::OutOfRange {
                phase: self.state.phase,
            });
        }
        self.questions
            .get(self.state.position)
            .ok_or(ForgeError::OutOfRange {
                phase: self.state.phase,
            })
    }

    /// Submit an answer for the current question.
    ///
    /// On acceptance the answer is stored (overwriting any earlier answer to
    /// the same question), the pending selection is cleared, and the flow
    /// either advances or completes. On rejection nothing changes.
    pub fn answer(&mut self, value: impl Into<AnswerValue>) -> Result<AnswerOutcome> {
        self.require_phase(Phase::InProgress, "answer")?;

        let question = self.current_question()?;
        let value = match question.kind.validate(value.into()) {
            Ok(value) => value,
            Err(rejection) => return Ok(AnswerOutcome::Rejected(rejection)),
        };
        let id = question.id.clone();

        self.state.answers.insert(id, value);
        self.state.pending_selection.clear();

        if self.state.position + 1 == self.questions.len() {
            self.state.phase = Phase::Complete;
            self.document = Some(
                self.synthesizer
                    .synthesize(&self.state.answers, &self.questions),
            );
            Ok(AnswerOutcome::Completed)
        } else {
            self.state.position += 1;
            Ok(AnswerOutcome::Advanced {
                position: self.state.position,
            })
        }
    }

    /// Submit the pending selection as the answer to the current question.
    pub fn commit_selection(&mut self) -> Result<AnswerOutcome> {
        let selection = self.state.pending_selection.clone();
        self.answer(selection)
    }

    /// Toggle an option in the pending selection of a multiple-choice question.
    pub fn toggle_option(&mut self, option: &str) -> Result<ToggleOutcome> {
        self.require_phase(Phase::InProgress, "toggle an option")?;

        let question = self.current_question()?;
        if !question.kind.is_multiple_choice() {
            return Err(ForgeError::InvalidTransition {
                operation: "toggle an option on a question that is not multiple choice",
                phase: self.state.phase,
            });
        }
        if !question.kind.has_option(option) {
            return Ok(ToggleOutcome::Rejected(Rejection::UnknownOption(
                option.to_string(),
            )));
        }

        if self.state.pending_selection.toggle(option) {
            Ok(ToggleOutcome::Selected)
        } else {
            Ok(ToggleOutcome::Deselected)
        }
    }

    /// Step back to the previous question.
    ///
    /// Answers are never truncated: the answer to the question being left
    /// stays in the answer set until it is answered again. If the question
    /// returned to is multiple choice and was answered, its committed
    /// selection is restored into the pending selection.
    pub fn back(&mut self) -> Result<()> {
        self.require_phase(Phase::InProgress, "go back")?;
        if self.state.position == 0 {
            return Err(ForgeError::InvalidTransition {
                operation: "go back from the first question",
                phase: self.state.phase,
            });
        }

        self.state.position -= 1;
        let question = &self.questions[self.state.position];

        let restored = if question.kind.is_multiple_choice() {
            self.state
                .answers
                .get(&question.id)
                .and_then(AnswerValue::as_selection)
                .cloned()
        } else {
            None
        };
        self.state.pending_selection = restored.unwrap_or_default();
        Ok(())
    }

    /// Return to [`Phase::Welcome`], discarding answers, pending selection and document.
    pub fn reset(&mut self) {
        self.state.clear();
        self.document = None;
    }

    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Current position, only while in progress.
    pub fn position(&self) -> Option<usize> {
        (self.state.phase == Phase::InProgress).then_some(self.state.position)
    }

    pub fn pending_selection(&self) -> &Selection {
        &self.state.pending_selection
    }

    pub fn answers(&self) -> &AnswerSet {
        &self.state.answers
    }

    pub fn state(&self) -> &FlowState {
        &self.state
    }

    pub fn questions(&self) -> &QuestionList {
        &self.questions
    }

    /// The generated document, only once the flow is complete.
    pub fn document(&self) -> Option<&GeneratedDocument> {
        match self.state.phase {
            Phase::Complete => self.document.as_ref(),
            _ => None,
        }
    }

    /// Progress through the list, only while in progress.
    pub fn progress(&self) -> Option<Progress> {
        self.position()
            .map(|position| Progress::new(position, self.questions.len()))
    }

    /// The answer last committed for the current question, if any.
    ///
    /// Lets a presentation layer pre-fill inputs after navigating back.
    pub fn previous_answer(&self) -> Option<&AnswerValue> {
        let question = self.current_question().ok()?;
        self.state.answers.get(&question.id)
    }

    fn require_phase(&self, expected: Phase, operation: &'static str) -> Result<()> {
        if self.state.phase == expected {
            Ok(())
        } else {
            Err(ForgeError::InvalidTransition {
                operation,
                phase: self.state.phase,
            })
        }
    }
}
