//! Tests for the interactive session, driven with in-memory input.

use super::*;
use crate::answer::{AnswerValue, Selection};
use crate::events::{Event, EventAction};
use crate::flow::Phase;
use crate::question::{QuestionList, default_questions};
use std::io::Cursor;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

/// Keystrokes answering every default question, ending on the completion screen.
const FULL_FLOW: &str = "\n\
Explain recursion\n\
\n\
1\n\
2,4\n\
\n\
Texto corrido\n\
5\n\
Used in a CS101 course\n\
\n\
3\n\
No slang\n\
\n";

fn flow() -> FlowController {
    FlowController::new(Arc::new(QuestionList::new(default_questions()).unwrap()))
}

fn run_session(session: &mut Session, keys: &str) -> (SessionSummary, String) {
    run_session_bytes(session, keys.as_bytes())
}

fn run_session_bytes(session: &mut Session, keys: &[u8]) -> (SessionSummary, String) {
    let mut input = Cursor::new(keys.to_vec());
    let mut out = Vec::new();
    let summary = session.run(&mut input, &mut out).unwrap();
    (summary, String::from_utf8(out).unwrap())
}

fn read_events(path: &Path) -> Vec<Event> {
    std::fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

#[test]
fn full_session_exports_the_document() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("prompt-complexo.txt");
    let mut session = Session::new(flow(), EventLog::disabled(), Some(export.clone()));

    let (summary, output) = run_session(&mut session, &format!("{}:quit\n", FULL_FLOW));

    assert_eq!(summary.completed, 1);
    assert_eq!(summary.exports.len(), 1);
    assert_eq!(summary.exports[0].path, export);

    let document = session.flow().document().unwrap();
    assert_eq!(std::fs::read_to_string(&export).unwrap(), document.as_str());
    assert_eq!(summary.exports[0].bytes, document.len());

    assert!(output.contains("Seu Prompt Está Pronto!"));
    assert!(output.contains(document.as_str()));
    assert!(output.contains("Saved to"));
}

#[test]
fn full_session_collects_typed_answers() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (summary, output) = run_session(&mut session, FULL_FLOW);

    assert_eq!(summary.completed, 1);
    assert!(summary.exports.is_empty());
    assert!(!output.contains("Saved to"));

    let answers = session.flow().answers();
    assert_eq!(answers["objective"], AnswerValue::from("Explain recursion"));
    assert_eq!(answers["audience"], AnswerValue::from("Iniciantes"));
    assert_eq!(
        answers["tone"],
        AnswerValue::from(["Casual", "Amigável"].into_iter().collect::<Selection>())
    );
    assert_eq!(answers["format"], AnswerValue::from("Texto corrido"));
    assert_eq!(answers["length"], AnswerValue::from("Flexível"));
    assert_eq!(answers["examples"], AnswerValue::from("Não"));
    assert_eq!(session.flow().phase(), Phase::Complete);
}

#[test]
fn free_text_spans_lines_until_blank() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    run_session(&mut session, "\nfirst line\nsecond line\n\n:q\n");

    assert_eq!(
        session.flow().answers()["objective"],
        AnswerValue::from("first line\nsecond line")
    );
    assert_eq!(session.flow().position(), Some(1));
}

#[test]
fn invalid_choice_is_reported_and_question_repeats() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session(&mut session, "\ngoal\n\n9\n:q\n");

    assert!(output.contains("'9' is not one of the options"));
    assert_eq!(session.flow().position(), Some(1));
    assert!(!session.flow().answers().contains_key("audience"));
}

#[test]
fn empty_multiple_choice_commit_is_rejected() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session(&mut session, "\ngoal\n\n1\n\n:q\n");

    assert!(output.contains("select at least one option"));
    assert_eq!(session.flow().current_question().unwrap().id, "tone");
}

#[test]
fn toggling_twice_deselects() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session(&mut session, "\ngoal\n\n1\n1 2\n1\n\n:q\n");

    assert!(output.contains("Selected: Profissional, Casual"));
    assert_eq!(
        session.flow().answers()["tone"],
        AnswerValue::from(Selection::from(vec!["Casual".to_string()]))
    );
}

#[test]
fn toggle_out_of_range_number_is_a_notice() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session(&mut session, "\ngoal\n\n1\n42\n:q\n");

    assert!(output.contains("no option 42"));
    assert!(session.flow().pending_selection().is_empty());
}

#[test]
fn back_then_enter_keeps_previous_text() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session(&mut session, "\ngoal\n\n:back\n\n:q\n");

    assert!(output.contains("Previous answer: goal"));
    assert_eq!(
        session.flow().answers()["objective"],
        AnswerValue::from("goal")
    );
    assert_eq!(session.flow().position(), Some(1));
}

#[test]
fn back_on_first_question_is_a_notice() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session(&mut session, "\n:back\n:q\n");

    assert!(output.contains("already at the first question"));
    assert_eq!(session.flow().position(), Some(0));
}

#[test]
fn reset_after_completion_returns_to_welcome() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (summary, output) = run_session(&mut session, &format!("{}:reset\n:q\n", FULL_FLOW));

    assert_eq!(summary.completed, 1);
    assert_eq!(session.flow().phase(), Phase::Welcome);
    assert!(session.flow().answers().is_empty());
    assert_eq!(output.matches("Construtor de Prompts Complexos\n").count(), 2);
}

#[test]
fn two_prompts_in_one_session() {
    let temp_dir = TempDir::new().unwrap();
    let export = temp_dir.path().join("out.txt");
    let mut session = Session::new(flow(), EventLog::disabled(), Some(export));

    let keys = format!("{}:reset\n{}:q\n", FULL_FLOW, FULL_FLOW);
    let (summary, _) = run_session(&mut session, &keys);

    assert_eq!(summary.completed, 2);
    assert_eq!(summary.exports.len(), 2);
}

#[test]
fn end_of_input_mid_flow_stops_cleanly() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (summary, _) = run_session(&mut session, "\ngoal\n\n");

    assert_eq!(summary.completed, 0);
    assert_eq!(session.flow().phase(), Phase::InProgress);
}

#[test]
fn quit_on_welcome_never_starts() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (summary, output) = run_session(&mut session, ":q\n");

    assert_eq!(summary.completed, 0);
    assert_eq!(session.flow().phase(), Phase::Welcome);
    assert!(output.contains("Press Enter to start."));
}

#[test]
fn export_failure_is_reported_not_fatal() {
    let temp_dir = TempDir::new().unwrap();
    // A directory cannot be replaced by the exported file.
    let export = temp_dir.path().join("taken");
    std::fs::create_dir(&export).unwrap();
    let mut session = Session::new(flow(), EventLog::disabled(), Some(export));

    let (summary, output) = run_session(&mut session, FULL_FLOW);

    assert_eq!(summary.completed, 1);
    assert!(summary.exports.is_empty());
    assert!(output.contains("export failed"));
    assert!(output.contains("Seu Prompt Está Pronto!"));
}

#[test]
fn session_events_are_logged() {
    let temp_dir = TempDir::new().unwrap();
    let log = temp_dir.path().join("events.ndjson");
    let export = temp_dir.path().join("prompt.txt");
    let mut session = Session::new(flow(), EventLog::new(Some(log.clone())), Some(export));

    let after_objective = FULL_FLOW.split_once("Explain recursion\n\n").unwrap().1;
    run_session(
        &mut session,
        &format!("\ngoal\n\n9\n:back\n\n{}", after_objective),
    );

    let events = read_events(&log);
    let actions: Vec<EventAction> = events.iter().map(|e| e.action).collect();

    assert_eq!(actions.first(), Some(&EventAction::Start));
    assert!(actions.contains(&EventAction::Reject));
    assert!(actions.contains(&EventAction::Back));
    assert_eq!(
        &actions[actions.len() - 2..],
        &[EventAction::Complete, EventAction::Export]
    );

    let rejected = events
        .iter()
        .find(|e| e.action == EventAction::Reject)
        .unwrap();
    assert_eq!(rejected.question.as_deref(), Some("audience"));

    let answered: Vec<&str> = events
        .iter()
        .filter(|e| e.action == EventAction::Answer)
        .filter_map(|e| e.question.as_deref())
        .collect();
    assert_eq!(answered.first(), Some(&"objective"));
    assert_eq!(answered.last(), Some(&"constraints"));
}

#[test]
fn invalid_utf8_input_does_not_end_the_session() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (summary, _) = run_session_bytes(&mut session, b"\n\xff\xfe\n\n\xff\n:q\n");

    assert_eq!(summary.completed, 0);
    assert_eq!(
        session.flow().answers()["objective"],
        AnswerValue::from("\u{FFFD}\u{FFFD}")
    );
    // The stray byte is not an audience option, so the question repeats.
    assert_eq!(session.flow().current_question().unwrap().id, "audience");
}

#[test]
fn latin1_accents_are_replaced_not_fatal() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session_bytes(&mut session, b"\nAmig\xe1vel\n\n:q\n");

    assert_eq!(
        session.flow().answers()["objective"],
        AnswerValue::from("Amig\u{FFFD}vel")
    );
    assert!(output.contains("Question 2 of 8"));
}

#[test]
fn back_then_enter_keeps_previous_choice() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session(&mut session, "\ngoal\n\n1\n:back\n\n:q\n");

    assert!(output.contains("*1) Iniciantes"));
    assert!(!output.contains("is not one of the options"));
    assert_eq!(
        session.flow().answers()["audience"],
        AnswerValue::from("Iniciantes")
    );
    assert_eq!(session.flow().current_question().unwrap().id, "tone");
}

#[test]
fn empty_line_on_unanswered_choice_is_a_notice() {
    let mut session = Session::new(flow(), EventLog::disabled(), None);
    let (_, output) = run_session(&mut session, "\ngoal\n\n\n:q\n");

    assert!(output.contains("choose an option"));
    assert!(!output.contains("is not one of the options"));
    assert_eq!(session.flow().current_question().unwrap().id, "audience");
}
