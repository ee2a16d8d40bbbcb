//! todo.txt line parser
//!
//! A line is read left to right as a whitespace-delimited token stream:
//!
//! ```text
//! [x] [(P)] [completion-date creation-date | creation-date] body...
//! ```
//!
//! The header is consumed by a small forward-only state machine
//! (`Start → AfterCompleted → AfterPriority → AfterDates → Body`); every
//! transition checks the remaining tokens before looking at them. The body
//! is then scanned for the first `due:` marker and for `+project` /
//! `@context` tags.

use super::due::ParseContext;
use super::error::ParseError;
use super::item::{TodoItem, content_hash};
use chrono::NaiveDate;
use regex::Regex;
use std::sync::LazyLock;

// yyyy-mm-dd, yyyy.mm.dd or yyyy/mm/dd; both separators must match
static DATE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?:[0-9]{4}-[0-9]{2}-[0-9]{2}|[0-9]{4}\.[0-9]{2}\.[0-9]{2}|[0-9]{4}/[0-9]{2}/[0-9]{2})$")
        .expect("valid date regex")
});

const DUE_PREFIX: &str = "due:";

/// Check whether a token has the lexical shape of a date
pub fn is_date_token(token: &str) -> bool {
    DATE_RE.is_match(token)
}

/// Parse a date token into a calendar date
///
/// # Returns
/// `None` when the token does not have the date shape or names a day that
/// does not exist (e.g. `2024-02-30`)
pub fn parse_date_token(token: &str) -> Option<NaiveDate> {
    if !is_date_token(token) {
        return None;
    }
    // the pattern only admits ASCII, so byte offsets are safe
    let year = token[0..4].parse::<i32>().ok()?;
    let month = token[5..7].parse::<u32>().ok()?;
    let day = token[8..10].parse::<u32>().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

fn priority_token(token: &str) -> Option<char> {
    let inner = token.strip_prefix('(')?.strip_suffix(')')?;
    let mut chars = inner.chars();
    let priority = chars.next()?;
    chars.next().is_none().then_some(priority)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    AfterCompleted,
    AfterPriority,
    AfterDates,
    Body,
}

#[derive(Debug, Default)]
struct Header {
    completed: bool,
    priority: Option<char>,
    completion_date: Option<NaiveDate>,
    creation_date: Option<NaiveDate>,
}

/// Run the header state machine
///
/// # Returns
/// The parsed header and the index of the first body token
fn parse_header(tokens: &[&str]) -> Result<(Header, usize), ParseError> {
    let mut header = Header::default();
    let mut pos = 0;
    let mut state = State::Start;

    while state != State::Body {
        state = match state {
            State::Start => {
                if tokens.get(pos) == Some(&"x") {
                    header.completed = true;
                    pos += 1;
                }
                State::AfterCompleted
            }
            State::AfterCompleted => {
                if let Some(priority) = tokens.get(pos).and_then(|t| priority_token(t)) {
                    header.priority = Some(priority);
                    pos += 1;
                }
                State::AfterPriority
            }
            State::AfterPriority => {
                let first = tokens.get(pos).and_then(|t| parse_date_token(t));
                let second = tokens.get(pos + 1).and_then(|t| parse_date_token(t));
                match (first, second) {
                    (Some(completion), Some(creation)) => {
                        header.completion_date = Some(completion);
                        header.creation_date = Some(creation);
                        pos += 2;
                    }
                    // A lone date is the creation date, even on a completed line
                    (Some(creation), None) => {
                        header.creation_date = Some(creation);
                        pos += 1;
                    }
                    _ => {}
                }
                State::AfterDates
            }
            State::AfterDates => {
                if pos >= tokens.len() {
                    return Err(ParseError::MissingBody);
                }
                State::Body
            }
            State::Body => State::Body,
        };
    }

    Ok((header, pos))
}

/// Parse a single todo.txt line
///
/// # Arguments
/// * `line` - Raw line text; kept untouched as `full_text`
/// * `note_id` - Note the line belongs to, if any
/// * `ctx` - Reference instant and thresholds for due-date classification
///
/// # Returns
/// The parsed item, or a `ParseError` when the line is blank or carries no
/// tokens beyond its header
///
/// # Example
/// ```
/// # use todotxt_mcp::todo::{DueStatus, DueThresholds, ParseContext, parse_line};
/// # use chrono::NaiveDate;
/// let now = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(10, 0, 0).unwrap();
/// let ctx = ParseContext::new(now, DueThresholds::default());
/// let item = parse_line("(A) Pay rent +bills due:2024-01-01", None, &ctx).unwrap();
/// assert_eq!(item.priority, Some('A'));
/// assert_eq!(item.due_status(), DueStatus::DueToday);
/// ```
pub fn parse_line(line: &str, note_id: Option<i64>, ctx: &ParseContext) -> Result<TodoItem, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.is_empty() {
        return Err(ParseError::Blank);
    }

    let (header, body_start) = parse_header(&tokens)?;
    let body = &tokens[body_start..];

    // Only the first due: marker is considered; it never reaches the
    // description, even when its suffix is not a real date.
    let due_index = body.iter().position(|t| t.starts_with(DUE_PREFIX));
    let due = due_index
        .and_then(|i| parse_date_token(&body[i][DUE_PREFIX.len()..]))
        .map(|date| ctx.classify(date));

    let mut project_tags = Vec::new();
    let mut context_tags = Vec::new();
    let mut words = Vec::with_capacity(body.len());
    for (i, token) in body.iter().enumerate() {
        if token.len() > 1 {
            if token.starts_with('+') {
                project_tags.push(token.to_string());
            } else if token.starts_with('@') {
                context_tags.push(token.to_string());
            }
        }
        if Some(i) != due_index {
            words.push(*token);
        }
    }

    Ok(TodoItem {
        source_note_id: note_id,
        completed: header.completed,
        priority: header.priority,
        creation_date: header.creation_date,
        completion_date: header.completion_date,
        due,
        project_tags,
        context_tags,
        description: words.join(" "),
        full_text: line.to_string(),
        content_hash: content_hash(line),
    })
}
