//! Parsing of terminal input lines.

use regex::Regex;
use std::sync::LazyLock;

/// One or more 1-based option numbers separated by commas and/or spaces.
static OPTION_NUMBERS_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+(?:\s*,\s*|\s+)?(?:\d+(?:\s*,\s*|\s+)?)*$")
        .expect("Invalid option numbers regex")
});

/// What the user typed at a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Back,
    Reset,
    Quit,
    /// Anything that is not a session command.
    Line(String),
}

/// Classify a raw line (already stripped of its line terminator).
pub fn parse_line(line: &str) -> Input {
    match line.trim() {
        ":back" | ":b" => Input::Back,
        ":reset" | ":r" => Input::Reset,
        ":quit" | ":q" => Input::Quit,
        _ => Input::Line(line.to_string()),
    }
}

/// Parse a list of 1-based option numbers.
///
/// Returns `None` if the line is not purely numbers.
pub fn parse_option_numbers(line: &str) -> Option<Vec<usize>> {
    if !OPTION_NUMBERS_REGEX.is_match(line) {
        return None;
    }
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .map(|s| s.parse().ok())
        .collect()
}

/// Map a line to one of `options`: the exact option text, or else a 1-based number.
pub fn resolve_choice<'a>(line: &str, options: &'a [String]) -> Option<&'a str> {
    let line = line.trim();
    if let Some(option) = options.iter().find(|o| o.as_str() == line) {
        return Some(option.as_str());
    }
    let n: usize = line.parse().ok()?;
    n.checked_sub(1)
        .and_then(|i| options.get(i))
        .map(String::as_str)
}
