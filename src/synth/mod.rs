//! Template synthesis: a complete answer set in, one structured text document out.
//!
//! The document is assembled from an ordered table of sections. Each section
//! has an inclusion condition and a renderer, and sections are evaluated in
//! table order, so ordering and optionality can be tested section by section.
//!
//! Synthesis is pure and deterministic: the same answers always produce the
//! same bytes. No timestamps, randomness or locale-dependent formatting.

mod document;
pub mod fields;
mod sections;

#[cfg(test)]
mod tests;

pub use document::GeneratedDocument;
pub use sections::{ExamplesPolicy, SECTIONS, Section};

use crate::answer::AnswerSet;
use crate::question::Question;

/// Renders answer sets into prompt template documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateSynthesizer;

impl TemplateSynthesizer {
    pub fn new() -> Self {
        Self
    }

    /// Question ids this synthesizer reads unconditionally.
    ///
    /// A question list used with it must contain all of them.
    pub fn required_fields(&self) -> &'static [&'static str] {
        fields::REQUIRED
    }

    /// Render a complete answer set.
    ///
    /// `answers` must hold one entry per question in `questions`; calling this
    /// with an incomplete set is a programming error.
    pub fn synthesize(&self, answers: &AnswerSet, questions: &[Question]) -> GeneratedDocument {
        debug_assert!(
            questions.iter().all(|q| answers.contains_key(&q.id)),
            "synthesize called with an incomplete answer set"
        );

        let mut out = String::new();
        for section in SECTIONS {
            if (section.include)(answers) {
                (section.render)(answers, &mut out);
            }
        }
        GeneratedDocument::new(out)
    }
}
