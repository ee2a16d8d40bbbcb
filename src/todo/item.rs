use super::due::{Due, DueStatus};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hash of a line's text, used to find an item's line again
///
/// Multiplies by 31 over UTF-16 code units with 32-bit wraparound, so the
/// value is the same on every platform and across restarts.
pub fn content_hash(text: &str) -> i32 {
    text.encode_utf16()
        .fold(0i32, |hash, unit| hash.wrapping_mul(31).wrapping_add(i32::from(unit)))
}

/// A task parsed from one todo.txt line
///
/// Items are plain values: editing one means building a new item (see
/// [`TodoItem::with_completed`]) and serializing it back into its note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    /// Note the line came from, if any
    pub source_note_id: Option<i64>,
    pub completed: bool,
    /// Single-character priority from `(X)`
    pub priority: Option<char>,
    pub creation_date: Option<NaiveDate>,
    /// Only ever set together with `creation_date`
    pub completion_date: Option<NaiveDate>,
    pub due: Option<Due>,
    /// `+project` tokens in order of appearance
    pub project_tags: Vec<String>,
    /// `@context` tokens in order of appearance
    pub context_tags: Vec<String>,
    pub description: String,
    /// The raw line as found in the note
    pub full_text: String,
    pub content_hash: i32,
}

impl TodoItem {
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.due.map(|d| d.date)
    }

    /// Urgency bucket, `NotSet` when the item has no due date
    pub fn due_status(&self) -> DueStatus {
        self.due.map(|d| d.status).unwrap_or(DueStatus::NotSet)
    }

    pub fn seconds_to_due(&self) -> Option<i64> {
        self.due.map(|d| d.seconds_to_due)
    }

    pub fn has_project(&self, tag: &str) -> bool {
        self.project_tags.iter().any(|t| t == tag)
    }

    pub fn has_context(&self, tag: &str) -> bool {
        self.context_tags.iter().any(|t| t == tag)
    }

    /// Build the edited copy of this item with a new completion state
    ///
    /// # Arguments
    /// * `done` - Target completion state
    /// * `today` - Date recorded as the completion date
    ///
    /// # Returns
    /// A new item whose `full_text` and `content_hash` match its serialized
    /// form. A completion date is only recorded when the item has a
    /// creation date, since a lone completion date cannot be written back.
    pub fn with_completed(&self, done: bool, today: NaiveDate) -> TodoItem {
        let mut item = self.clone();
        item.completed = done;
        item.completion_date = if done && item.creation_date.is_some() {
            Some(today)
        } else {
            None
        };
        item.full_text = super::serialize::serialize(&item);
        item.content_hash = content_hash(&item.full_text);
        item
    }
}
