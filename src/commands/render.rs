//! Implementation of the `promptforge render` command.
//!
//! Renders a prompt from an answers file without prompting. The answers are
//! replayed through a [`FlowController`] in question order, so a file is held
//! to exactly the rules an interactive session enforces.

use crate::answer::{AnswerSet, AnswerValue, Selection};
use crate::cli::RenderArgs;
use crate::config::Config;
use crate::error::{ForgeError, Result};
use crate::flow::{AnswerOutcome, FlowController};
use crate::fs::export_document;
use crate::question::QuestionList;
use crate::synth::GeneratedDocument;
use serde_yaml::Value;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// Execute the `promptforge render` command.
pub fn cmd_render(args: RenderArgs) -> Result<()> {
    let config = Config::resolve(args.config.as_deref())?;
    let questions = config.question_list()?;
    let answers = load_answers(&args.answers)?;

    let document = render_answers(questions, &answers)?;

    match args.output {
        Some(path) => {
            let report = export_document(&document, &path)?;
            println!("Saved to {} ({} bytes)", report.path.display(), report.bytes);
        }
        None => println!("{}", document),
    }

    Ok(())
}

/// Read an answer set from a YAML or JSON file.
///
/// Each key is a question id; each value is a string or a list of strings.
pub fn load_answers(path: &Path) -> Result<AnswerSet> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        ForgeError::IoError(format!(
            "failed to read answers file '{}': {}",
            path.display(),
            e
        ))
    })?;
    parse_answers(&content).map_err(|e| match e {
        ForgeError::UserError(msg) => {
            ForgeError::UserError(format!("{} ({})", msg, path.display()))
        }
        other => other,
    })
}

/// Parse an answer set. JSON is accepted since it is a subset of YAML.
///
/// Numbers and booleans are taken as their text, the way they would read if
/// typed into a session. An empty value is kept as empty text and rejected
/// later like any blank answer.
pub fn parse_answers(content: &str) -> Result<AnswerSet> {
    if content.trim().is_empty() {
        return Ok(AnswerSet::new());
    }
    let raw: BTreeMap<String, Value> = serde_yaml::from_str(content)
        .map_err(|e| ForgeError::UserError(format!("failed to parse answers: {}", e)))?;

    raw.into_iter()
        .map(|(id, value)| {
            let answer = answer_value(&id, value)?;
            Ok((id, answer))
        })
        .collect()
}

fn answer_value(id: &str, value: Value) -> Result<AnswerValue> {
    match value {
        Value::Sequence(items) => items
            .into_iter()
            .map(|item| {
                scalar_text(item).ok_or_else(|| {
                    ForgeError::UserError(format!(
                        "failed to parse answers: '{}' must list only plain values",
                        id
                    ))
                })
            })
            .collect::<Result<Selection>>()
            .map(AnswerValue::Selection),
        value => scalar_text(value).map(AnswerValue::Text).ok_or_else(|| {
            ForgeError::UserError(format!(
                "failed to parse answers: '{}' must be a string or a list of strings",
                id
            ))
        }),
    }
}

fn scalar_text(value: Value) -> Option<String> {
    match value {
        Value::Null => Some(String::new()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) => Some(s),
        Value::Sequence(_) | Value::Mapping(_) | Value::Tagged(_) => None,
    }
}

/// Replay `answers` through a fresh flow and return the generated document.
///
/// Every question must have an answer and every answer must be accepted.
/// Ids that match no question are rejected as well.
pub fn render_answers(questions: Arc<QuestionList>, answers: &AnswerSet) -> Result<GeneratedDocument> {
    let unknown: Vec<&str> = answers
        .keys()
        .map(String::as_str)
        .filter(|id| questions.by_id(id).is_none())
        .collect();
    if !unknown.is_empty() {
        return Err(ForgeError::ValidationError(format!(
            "unknown question id(s): {}",
            unknown.join(", ")
        )));
    }

    let mut flow = FlowController::new(questions);
    flow.start()?;

    loop {
        let id = flow.current_question()?.id.clone();
        let value = answers.get(&id).cloned().ok_or_else(|| {
            ForgeError::ValidationError(format!("missing answer for '{}'", id))
        })?;

        match flow.answer(value)? {
            AnswerOutcome::Advanced { .. } => {}
            AnswerOutcome::Completed => break,
            AnswerOutcome::Rejected(rejection) => {
                return Err(ForgeError::ValidationError(format!(
                    "answer for '{}' rejected: {}",
                    id, rejection
                )));
            }
        }
    }

    flow.document().cloned().ok_or_else(|| {
        ForgeError::ValidationError("flow completed without a document".to_string())
    })
}
