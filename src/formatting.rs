//! Formatting helper functions for the todo.txt MCP server
//!
//! This module contains list filters and the text rendering of task items.

use crate::todo::{DueStatus, LineFailure, TodoItem};

/// Apply keyword filtering (case-insensitive search in the description)
///
/// # Arguments
/// * `items` - Mutable list of items to filter
/// * `keyword` - Keyword to search for (case-insensitive)
pub fn apply_keyword_filter(items: &mut Vec<TodoItem>, keyword: &str) {
    let keyword_lower = keyword.to_lowercase();
    items.retain(|item| item.description.to_lowercase().contains(&keyword_lower));
}

/// Apply project tag filtering
///
/// # Arguments
/// * `items` - Mutable list of items to filter
/// * `project` - Project tag, with or without the leading `+`
pub fn apply_project_filter(items: &mut Vec<TodoItem>, project: &str) {
    let tag = with_sigil(project, '+');
    items.retain(|item| item.has_project(&tag));
}

/// Apply context tag filtering
///
/// # Arguments
/// * `items` - Mutable list of items to filter
/// * `context` - Context tag, with or without the leading `@`
pub fn apply_context_filter(items: &mut Vec<TodoItem>, context: &str) {
    let tag = with_sigil(context, '@');
    items.retain(|item| item.has_context(&tag));
}

fn with_sigil(tag: &str, sigil: char) -> String {
    let tag = tag.trim();
    if tag.starts_with(sigil) {
        tag.to_string()
    } else {
        format!("{}{}", sigil, tag)
    }
}

/// Format items into a display string
///
/// # Arguments
/// * `items` - Items in display order
///
/// # Returns
/// One bullet per item with its due date, tags and the note/hash pair
/// needed to edit it
pub fn format_todos(items: &[TodoItem]) -> String {
    if items.is_empty() {
        return "No items found".to_string();
    }

    let mut result = format!("Found {} item(s):\n\n", items.len());
    for item in items {
        let mark = if item.completed { "x" } else { " " };
        result.push_str(&format!("- [{}] ", mark));
        if let Some(priority) = item.priority {
            result.push_str(&format!("({}) ", priority));
        }
        result.push_str(&format!("{}\n", item.description));

        if let Some(due) = item.due {
            result.push_str(&format!("  Due: {} ({})\n", due.date, due.status));
        }
        if let Some(date) = item.creation_date {
            result.push_str(&format!("  Created: {}\n", date));
        }
        if let Some(date) = item.completion_date {
            result.push_str(&format!("  Completed: {}\n", date));
        }
        if !item.project_tags.is_empty() {
            result.push_str(&format!("  Projects: {}\n", item.project_tags.join(", ")));
        }
        if !item.context_tags.is_empty() {
            result.push_str(&format!("  Contexts: {}\n", item.context_tags.join(", ")));
        }
        match item.source_note_id {
            Some(id) => result.push_str(&format!("  Note: {} (hash: {})\n", id, item.content_hash)),
            None => result.push_str(&format!("  Hash: {}\n", item.content_hash)),
        }
    }

    result
}

/// Format dropped lines for diagnostics
pub fn format_failures(failures: &[LineFailure]) -> String {
    let mut result = String::new();
    for failure in failures {
        let note = failure
            .note_id
            .map(|id| id.to_string())
            .unwrap_or_else(|| "-".to_string());
        result.push_str(&format!(
            "Skipped note {} line {}: {} ({:?})\n",
            note, failure.line_number, failure.error, failure.line
        ));
    }
    result
}

/// Count open items that need attention today or earlier
pub fn count_urgent(items: &[TodoItem]) -> usize {
    items
        .iter()
        .filter(|i| !i.completed && matches!(i.due_status(), DueStatus::Overdue | DueStatus::DueToday))
        .count()
}
