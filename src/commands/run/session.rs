//! The interactive terminal session driving one flow.

use super::display;
use super::input::{Input, parse_line, parse_option_numbers, resolve_choice};
use crate::answer::Rejection;
use crate::error::{ForgeError, Result};
use crate::events::{Event, EventAction, EventLog};
use crate::flow::{AnswerOutcome, FlowController, Phase, ToggleOutcome};
use crate::fs::{ExportReport, export_document};
use crate::question::QuestionKind;
use serde_json::json;
use std::io::{BufRead, Write};
use std::path::PathBuf;

/// What a finished session did.
#[derive(Debug, Default)]
pub struct SessionSummary {
    /// Documents generated, one per completed flow.
    pub completed: usize,
    /// Successful exports, in order.
    pub exports: Vec<ExportReport>,
}

/// One user's terminal session over a flow.
pub struct Session {
    flow: FlowController,
    events: EventLog,
    export_path: Option<PathBuf>,
}

/// Whether the session loop should keep going.
enum Step {
    Continue,
    Stop,
}

impl Session {
    pub fn new(flow: FlowController, events: EventLog, export_path: Option<PathBuf>) -> Self {
        Self {
            flow,
            events,
            export_path,
        }
    }

    pub fn flow(&self) -> &FlowController {
        &self.flow
    }

    /// Run until the user quits or input ends.
    pub fn run<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<SessionSummary> {
        let mut summary = SessionSummary::default();

        loop {
            let step = match self.flow.phase() {
                Phase::Welcome => self.welcome(input, out)?,
                Phase::InProgress => self.ask(input, out, &mut summary)?,
                Phase::Complete => self.finished(input, out)?,
            };
            if let Step::Stop = step {
                break;
            }
        }

        out.flush().map_err(io_error)?;
        Ok(summary)
    }

    fn welcome<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Step> {
        emit(out, &display::welcome_screen(self.flow.questions().len()))?;

        match read_line(input)?.map(|line| parse_line(&line)) {
            None | Some(Input::Quit) => Ok(Step::Stop),
            Some(_) => {
                self.flow.start()?;
                self.events.record(
                    Event::new(EventAction::Start)
                        .with_details(json!({ "questions": self.flow.questions().len() })),
                );
                Ok(Step::Continue)
            }
        }
    }

    fn ask<R: BufRead, W: Write>(
        &mut self,
        input: &mut R,
        out: &mut W,
        summary: &mut SessionSummary,
    ) -> Result<Step> {
        emit(out, &display::question_screen(&self.flow))?;

        let Some(line) = read_line(input)? else {
            return Ok(Step::Stop);
        };
        let line = match parse_line(&line) {
            Input::Quit => return Ok(Step::Stop),
            Input::Back => {
                self.back(out)?;
                return Ok(Step::Continue);
            }
            Input::Reset => {
                self.reset();
                return Ok(Step::Continue);
            }
            Input::Line(line) => line,
        };

        let kind = self.flow.current_question()?.kind.clone();
        let outcome = match &kind {
            QuestionKind::SingleLineText => Some(self.answer_text(line)?),
            QuestionKind::FreeText => {
                let text = read_paragraph(line, input)?;
                Some(self.answer_text(text)?)
            }
            QuestionKind::SingleChoice { options } | QuestionKind::ExclusiveChoice { options } => {
                if line.trim().is_empty() {
                    match self.flow.previous_answer().cloned() {
                        Some(previous) => Some(self.flow.answer(previous)?),
                        None => {
                            emit(out, &display::notice_line("choose an option"))?;
                            None
                        }
                    }
                } else {
                    let choice = resolve_choice(&line, options).unwrap_or(line.trim());
                    Some(self.flow.answer(choice)?)
                }
            }
            QuestionKind::MultipleChoice { options } => {
                if line.trim().is_empty() {
                    Some(self.flow.commit_selection()?)
                } else {
                    self.toggle(&line, options, out)?;
                    None
                }
            }
        };

        if let Some(outcome) = outcome {
            self.after_answer(outcome, out, summary)?;
        }
        Ok(Step::Continue)
    }

    /// Submit text, keeping the previous answer when the line is blank.
    fn answer_text(&mut self, text: String) -> Result<AnswerOutcome> {
        if text.trim().is_empty()
            && let Some(previous) = self.flow.previous_answer().cloned()
        {
            return self.flow.answer(previous);
        }
        self.flow.answer(text)
    }

    fn toggle<W: Write>(&mut self, line: &str, options: &[String], out: &mut W) -> Result<()> {
        let picks: Vec<String> = match parse_option_numbers(line) {
            Some(numbers) => {
                let mut picks = Vec::with_capacity(numbers.len());
                for n in numbers {
                    match n.checked_sub(1).and_then(|i| options.get(i)) {
                        Some(option) => picks.push(option.clone()),
                        None => emit(out, &display::notice_line(&format!("no option {}", n)))?,
                    }
                }
                picks
            }
            None => vec![line.trim().to_string()],
        };

        for pick in picks {
            if let ToggleOutcome::Rejected(rejection) = self.flow.toggle_option(&pick)? {
                emit(out, &display::rejection_line(&rejection))?;
            }
        }
        Ok(())
    }

    fn after_answer<W: Write>(
        &mut self,
        outcome: AnswerOutcome,
        out: &mut W,
        summary: &mut SessionSummary,
    ) -> Result<()> {
        match outcome {
            AnswerOutcome::Rejected(rejection) => {
                self.record_rejection(&rejection);
                emit(out, &display::rejection_line(&rejection))
            }
            AnswerOutcome::Advanced { position } => {
                self.record_answer(position - 1);
                Ok(())
            }
            AnswerOutcome::Completed => {
                self.record_answer(self.flow.questions().len() - 1);
                summary.completed += 1;
                self.complete(out, summary)
            }
        }
    }

    fn complete<W: Write>(&mut self, out: &mut W, summary: &mut SessionSummary) -> Result<()> {
        let Some(document) = self.flow.document() else {
            return Ok(());
        };
        self.events.record(
            Event::new(EventAction::Complete).with_details(json!({ "bytes": document.len() })),
        );

        let report = match &self.export_path {
            Some(path) => match export_document(document, path) {
                Ok(report) => {
                    self.events.record(Event::new(EventAction::Export).with_details(json!({
                        "path": report.path.display().to_string(),
                        "bytes": report.bytes
                    })));
                    Some(report)
                }
                Err(e) => {
                    emit(out, &display::notice_line(&format!("export failed: {}", e)))?;
                    None
                }
            },
            None => None,
        };

        emit(out, &display::completion_screen(document, report.as_ref()))?;
        summary.exports.extend(report);
        Ok(())
    }

    fn finished<R: BufRead, W: Write>(&mut self, input: &mut R, out: &mut W) -> Result<Step> {
        emit(out, "> ")?;
        match read_line(input)?.map(|line| parse_line(&line)) {
            None | Some(Input::Quit) => Ok(Step::Stop),
            Some(Input::Reset) => {
                self.reset();
                Ok(Step::Continue)
            }
            Some(_) => {
                emit(out, &display::notice_line("type :reset or :quit"))?;
                Ok(Step::Continue)
            }
        }
    }

    fn back<W: Write>(&mut self, out: &mut W) -> Result<()> {
        match self.flow.back() {
            Ok(()) => {
                let question = self.flow.current_question()?.id.clone();
                self.events
                    .record(Event::new(EventAction::Back).with_question(question));
                Ok(())
            }
            Err(ForgeError::InvalidTransition { .. }) => emit(
                out,
                &display::notice_line("already at the first question"),
            ),
            Err(e) => Err(e),
        }
    }

    fn reset(&mut self) {
        self.flow.reset();
        self.events.record(Event::new(EventAction::Reset));
    }

    fn record_answer(&self, position: usize) {
        let question = &self.flow.questions()[position];
        let value = self.flow.answers().get(&question.id);
        self.events.record(
            Event::new(EventAction::Answer)
                .with_question(question.id.clone())
                .with_details(json!({ "position": position, "value": value })),
        );
    }

    fn record_rejection(&self, rejection: &Rejection) {
        let Ok(question) = self.flow.current_question() else {
            return;
        };
        self.events.record(
            Event::new(EventAction::Reject)
                .with_question(question.id.clone())
                .with_details(json!({ "reason": rejection.to_string() })),
        );
    }
}

/// Read one line without its terminator. `None` at end of input.
///
/// Bytes that are not UTF-8 (a Latin-1 terminal, say) become U+FFFD instead
/// of ending the session.
fn read_line<R: BufRead>(input: &mut R) -> Result<Option<String>> {
    let mut buf = Vec::new();
    let read = input.read_until(b'\n', &mut buf).map_err(io_error)?;
    if read == 0 {
        return Ok(None);
    }
    let line = String::from_utf8_lossy(&buf);
    Ok(Some(line.trim_end_matches(['\n', '\r']).to_string()))
}

/// Collect free text: `first` plus following lines up to an empty line or end of input.
fn read_paragraph<R: BufRead>(first: String, input: &mut R) -> Result<String> {
    if first.trim().is_empty() {
        return Ok(first);
    }
    let mut lines = vec![first];
    while let Some(line) = read_line(input)? {
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

fn emit<W: Write>(out: &mut W, text: &str) -> Result<()> {
    out.write_all(text.as_bytes()).map_err(io_error)
}

fn io_error(e: std::io::Error) -> ForgeError {
    ForgeError::IoError(format!("terminal I/O failed: {}", e))
}

