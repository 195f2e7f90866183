//! Screen text for the interactive session.
//!
//! Each function returns the full text of one screen so it can be asserted
//! on directly in tests.

use crate::answer::{AnswerValue, Rejection};
use crate::flow::FlowController;
use crate::fs::ExportReport;
use crate::question::QuestionKind;
use crate::synth::GeneratedDocument;

const RULE: &str =
    "================================================================================";

pub fn welcome_screen(total_questions: usize) -> String {
    format!(
        "{RULE}\n\
         Construtor de Prompts Complexos\n\
         {RULE}\n\
         \n\
         Answer {total_questions} questions and get a detailed, ready-to-use prompt.\n\
         \n\
         Commands: :back  :reset  :quit\n\
         \n\
         Press Enter to start.\n"
    )
}

/// The current question, its progress and how to answer it.
///
/// Renders nothing if the flow is not in progress.
pub fn question_screen(flow: &FlowController) -> String {
    let (Ok(question), Some(progress)) = (flow.current_question(), flow.progress()) else {
        return String::new();
    };
    let previous = flow.previous_answer();

    let mut out = String::new();
    out.push_str(&format!(
        "\nQuestion {} of {} ({}% complete)\n",
        progress.current, progress.total, progress.percent
    ));
    out.push_str(&format!("{}\n", question.prompt));
    if let Some(hint) = &question.hint {
        out.push_str(&format!("  {}\n", hint));
    }

    match &question.kind {
        QuestionKind::SingleLineText | QuestionKind::FreeText => {
            if let Some(AnswerValue::Text(text)) = previous {
                out.push_str(&format!(
                    "  Previous answer: {}\n  (press Enter to keep it)\n",
                    text
                ));
            }
            if matches!(question.kind, QuestionKind::FreeText) {
                out.push_str("  (finish with an empty line)\n");
            }
        }
        QuestionKind::SingleChoice { options } | QuestionKind::ExclusiveChoice { options } => {
            let chosen = previous.and_then(AnswerValue::as_text);
            for (i, option) in options.iter().enumerate() {
                let marker = if chosen == Some(option.as_str()) { "*" } else { " " };
                out.push_str(&format!("  {}{}) {}\n", marker, i + 1, option));
            }
            if chosen.is_some() {
                out.push_str("  Enter a number or the option text; Enter keeps the marked one.\n");
            } else {
                out.push_str("  Enter a number or the option text.\n");
            }
        }
        QuestionKind::MultipleChoice { options } => {
            let pending = flow.pending_selection();
            for (i, option) in options.iter().enumerate() {
                let marker = if pending.contains(option) { "[x]" } else { "[ ]" };
                out.push_str(&format!("  {} {}) {}\n", marker, i + 1, option));
            }
            if !pending.is_empty() {
                out.push_str(&format!("  Selected: {}\n", pending.join(", ")));
            }
            out.push_str("  Enter numbers to toggle (e.g. 1,3); empty line to continue.\n");
        }
    }

    out.push_str("> ");
    out
}

pub fn rejection_line(rejection: &Rejection) -> String {
    format!("  ! {}\n", rejection)
}

pub fn notice_line(message: &str) -> String {
    format!("  - {}\n", message)
}

/// The finished prompt, followed by where it was saved.
pub fn completion_screen(document: &GeneratedDocument, export: Option<&ExportReport>) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{RULE}\nSeu Prompt Está Pronto!\n{RULE}\n\n"));
    out.push_str(document.as_str());
    out.push_str(&format!("\n\n{RULE}\n"));
    if let Some(report) = export {
        out.push_str(&format!(
            "Saved to {} ({} bytes)\n",
            report.path.display(),
            report.bytes
        ));
    }
    out.push_str("Type :reset to create a new prompt or :quit to exit.\n");
    out
}
