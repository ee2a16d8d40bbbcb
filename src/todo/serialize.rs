use super::item::TodoItem;
use std::fmt;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Write an item back as a canonical todo.txt line
///
/// The layout is
/// `[x ][(P) ][completion-date ][creation-date ]description [due:date]`.
/// The completion date is only written when a creation date is present,
/// since the parser reads a lone date as the creation date. Whitespace and
/// token order are normalized, so the result need not equal `full_text`.
pub fn serialize(item: &TodoItem) -> String {
    let mut line = String::new();
    if item.completed {
        line.push_str("x ");
    }
    if let Some(priority) = item.priority {
        line.push_str(&format!("({}) ", priority));
    }
    if let Some(creation) = item.creation_date {
        if let Some(completion) = item.completion_date {
            line.push_str(&format!("{} ", completion.format(DATE_FORMAT)));
        }
        line.push_str(&format!("{} ", creation.format(DATE_FORMAT)));
    }
    line.push_str(&item.description);
    line.push(' ');
    if let Some(due) = item.due_date() {
        line.push_str(&format!("due:{}", due.format(DATE_FORMAT)));
    }
    line
}

/// Serialize several items, one per line
pub fn serialize_all(items: &[TodoItem]) -> String {
    items.iter().map(serialize).collect::<Vec<_>>().join("\n")
}

impl fmt::Display for TodoItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&serialize(self))
    }
}
