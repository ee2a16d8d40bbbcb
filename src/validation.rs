//! Validation helper functions for the todo.txt MCP server
//!
//! This module turns raw tool parameters into engine types and builds
//! client-facing error messages.

use crate::storage::Notes;
use crate::todo::TagKind;
use mcp_attr::Result as McpResult;

/// Parse and validate the tag kind parameter
///
/// # Arguments
/// * `kind` - "project" or "context"
///
/// # Returns
/// Result containing the parsed TagKind or an INVALID_PARAMS error
pub fn parse_tag_kind(kind: &str) -> McpResult<TagKind> {
    kind.trim().parse::<TagKind>().map_err(|message| {
        mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
    })
}

/// Format an error message for an unknown note with the list of known note IDs
///
/// # Arguments
/// * `note_id` - The note ID that was requested
/// * `notes` - Loaded notes
pub fn format_invalid_note_error(note_id: i64, notes: &Notes) -> String {
    if notes.notes.is_empty() {
        format!("Note {} does not exist. The notes file is empty.", note_id)
    } else {
        let ids: Vec<String> = notes.notes.iter().map(|n| n.id.to_string()).collect();
        format!(
            "Note {} does not exist.\nAvailable notes: {}",
            note_id,
            ids.join(", ")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::Note;

    #[test]
    fn test_parse_tag_kind() {
        assert_eq!(parse_tag_kind("project").unwrap(), TagKind::Project);
        assert_eq!(parse_tag_kind(" context ").unwrap(), TagKind::Context);
        assert!(parse_tag_kind("label").is_err());
    }

    #[test]
    fn test_format_invalid_note_error() {
        let empty = Notes::default();
        assert!(format_invalid_note_error(3, &empty).contains("empty"));

        let notes = Notes {
            notes: vec![
                Note {
                    id: 1,
                    title: String::new(),
                    content: String::new(),
                },
                Note {
                    id: 4,
                    title: String::new(),
                    content: String::new(),
                },
            ],
        };
        assert!(format_invalid_note_error(3, &notes).contains("Available notes: 1, 4"));
    }
}
