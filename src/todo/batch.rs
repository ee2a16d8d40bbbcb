use super::due::ParseContext;
use super::error::ParseError;
use super::item::TodoItem;
use super::parser::parse_line;
use super::sort::sort;
use tracing::{debug, warn};

/// Raw content of one note handed to the batch parser
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoteSource<'a> {
    pub id: Option<i64>,
    pub content: &'a str,
}

impl<'a> NoteSource<'a> {
    pub fn new(id: Option<i64>, content: &'a str) -> Self {
        Self { id, content }
    }
}

/// A line that could not be parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFailure {
    pub note_id: Option<i64>,
    /// 1-based line number within the note
    pub line_number: usize,
    pub line: String,
    pub error: ParseError,
}

/// Result of parsing one or more notes
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Batch {
    pub items: Vec<TodoItem>,
    pub failures: Vec<LineFailure>,
}

impl Batch {
    /// Append another batch, keeping input order
    pub fn merge(&mut self, other: Batch) {
        self.items.extend(other.items);
        self.failures.extend(other.failures);
    }

    /// Reorder the items for display
    pub fn sorted(mut self) -> Batch {
        self.items = sort(self.items);
        self
    }
}

/// Parse every non-blank line of a note
///
/// Lines that fail to parse are dropped from `items`, recorded in
/// `failures` and logged; they never stop the remaining lines.
///
/// # Arguments
/// * `content` - Multi-line note text
/// * `note_id` - Note the text belongs to, if any
/// * `ctx` - Shared reference instant and thresholds
pub fn parse_note(content: &str, note_id: Option<i64>, ctx: &ParseContext) -> Batch {
    let mut batch = Batch::default();
    for (index, line) in content.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_line(line, note_id, ctx) {
            Ok(item) => batch.items.push(item),
            Err(error) => {
                warn!(?note_id, line_number = index + 1, %error, "dropping unparseable todo line");
                batch.failures.push(LineFailure {
                    note_id,
                    line_number: index + 1,
                    line: line.to_string(),
                    error,
                });
            }
        }
    }
    batch
}

/// Parse several notes against one reference instant
///
/// Notes with empty content are skipped. Items keep note order and line
/// order; call [`Batch::sorted`] to get display order.
pub fn parse_notes(notes: &[NoteSource<'_>], ctx: &ParseContext) -> Batch {
    let mut batch = Batch::default();
    for note in notes.iter().filter(|n| !n.content.is_empty()) {
        batch.merge(parse_note(note.content, note.id, ctx));
    }
    debug!(
        notes = notes.len(),
        items = batch.items.len(),
        failures = batch.failures.len(),
        "parsed todo batch"
    );
    batch
}

/// Sorted items of a single note
pub fn todos_from_note(content: &str, note_id: Option<i64>, ctx: &ParseContext) -> Vec<TodoItem> {
    parse_note(content, note_id, ctx).sorted().items
}

/// Sorted items of several notes, merged
pub fn todos_from_notes(notes: &[NoteSource<'_>], ctx: &ParseContext) -> Vec<TodoItem> {
    parse_notes(notes, ctx).sorted().items
}
