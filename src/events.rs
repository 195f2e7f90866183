//! Event logging subsystem for promptforge.
//!
//! Sessions can append an audit trail of what happened to an NDJSON file (one
//! JSON object per line). The log is opt-in via `event_log` in the config and
//! is written only by the CLI; the flow engine itself performs no I/O.
//!
//! # Event Format
//!
//! Each event is a JSON object with the following fields:
//! - `ts`: RFC3339 timestamp
//! - `action`: The action performed (start, answer, back, complete, etc.)
//! - `actor`: The owner string (e.g., `user@HOST`)
//! - `question`: Optional question id for question-specific events
//! - `details`: Freeform object with action-specific details
//!
//! # Usage
//!
//! ```no_run
//! use promptforge::events::{Event, EventAction, append_event};
//! use serde_json::json;
//! use std::path::Path;
//!
//! let event = Event::new(EventAction::Answer)
//!     .with_question("audience")
//!     .with_details(json!({"position": 1}));
//! append_event(Path::new("events.ndjson"), &event)?;
//! # Ok::<(), promptforge::error::ForgeError>(())
//! ```

use crate::error::{ForgeError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    /// Flow started (Welcome -> InProgress)
    Start,
    /// Answer accepted
    Answer,
    /// Answer rejected
    Reject,
    /// Stepped back one question
    Back,
    /// Flow reset to Welcome
    Reset,
    /// Last question answered and document generated
    Complete,
    /// Document written to a file
    Export,
}

impl std::fmt::Display for EventAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EventAction::Start => write!(f, "start"),
            EventAction::Answer => write!(f, "answer"),
            EventAction::Reject => write!(f, "reject"),
            EventAction::Back => write!(f, "back"),
            EventAction::Reset => write!(f, "reset"),
            EventAction::Complete => write!(f, "complete"),
            EventAction::Export => write!(f, "export"),
        }
    }
}

/// An event record for the audit log.
///
/// Events are serialized as single-line JSON objects and appended to
/// the configured NDJSON file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    /// RFC3339 timestamp when the event occurred.
    pub ts: DateTime<Utc>,

    /// The action that was performed.
    pub action: EventAction,

    /// The actor who performed the action (e.g., `user@HOST`).
    pub actor: String,

    /// Optional question id for question-specific events.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,

    /// Freeform details object with action-specific information.
    pub details: Value,
}

impl Event {
    /// Create a new event with the given action.
    ///
    /// The timestamp is set to the current time, and the actor is
    /// determined from the environment (USER@HOSTNAME).
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: get_actor_string(),
            question: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    /// Set the question id for this event.
    pub fn with_question(mut self, question_id: impl Into<String>) -> Self {
        self.question = Some(question_id.into());
        self
    }

    /// Set the details object for this event.
    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    /// Serialize the event to a single-line JSON string.
    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| ForgeError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

/// Get the actor string for event metadata.
fn get_actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to an NDJSON log file.
///
/// The file and its parent directory are created if they don't exist. Each
/// append results in one line with a trailing newline.
///
/// # Returns
///
/// * `Ok(())` - Event was successfully appended
/// * `Err(ForgeError::IoError)` - The file could not be opened or written
pub fn append_event(path: &Path, event: &Event) -> Result<()> {
    // Serialize the event to a single-line JSON string
    let json_line = event.to_ndjson_line()?;

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        fs::create_dir_all(parent).map_err(|e| {
            ForgeError::IoError(format!(
                "failed to create event log directory '{}': {}",
                parent.display(),
                e
            ))
        })?;
    }

    // Open the file in append mode, creating it if it doesn't exist
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| {
            ForgeError::IoError(format!(
                "failed to open event log '{}': {}",
                path.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        ForgeError::IoError(format!(
            "failed to write event to '{}': {}",
            path.display(),
            e
        ))
    })?;

    Ok(())
}

/// Best-effort event sink used by interactive sessions.
///
/// Write failures are reported on stderr and never interrupt the session.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    path: Option<PathBuf>,
}

impl EventLog {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// A log that drops every event.
    pub fn disabled() -> Self {
        Self { path: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.path.is_some()
    }

    pub fn record(&self, event: Event) {
        let Some(path) = &self.path else {
            return;
        };
        if let Err(e) = append_event(path, &event) {
            eprintln!("Warning: failed to log {} event: {}", event.action, e);
        }
    }
}
