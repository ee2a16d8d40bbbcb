//! List handler for the todo.txt MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo;
use mcp_attr::Result as McpResult;
use tracing::debug;

impl TodoServerHandler {
    /// Handles list/filter operations - parses every note, sorts, filters and formats for display.
    pub async fn handle_list(
        &self,
        project: Option<String>,
        context: Option<String>,
        keyword: Option<String>,
    ) -> McpResult<String> {
        // One reference instant for the whole batch
        let ctx = self.parse_context();

        let notes = self.notes.lock().unwrap();
        let batch = todo::parse_notes(&notes.sources(), &ctx).sorted();
        drop(notes);

        let mut items = batch.items;
        debug!(items = items.len(), now = %ctx.now, "listing todos");

        // Apply filters in sequence
        if let Some(ref project_filter) = project {
            formatting::apply_project_filter(&mut items, project_filter);
        }

        if let Some(ref context_filter) = context {
            formatting::apply_context_filter(&mut items, context_filter);
        }

        if let Some(ref keyword_filter) = keyword {
            formatting::apply_keyword_filter(&mut items, keyword_filter);
        }

        let mut result = formatting::format_todos(&items);
        let urgent = formatting::count_urgent(&items);
        if urgent > 0 {
            result.push_str(&format!("\n{} item(s) overdue or due today\n", urgent));
        }
        if !batch.failures.is_empty() {
            result.push('\n');
            result.push_str(&formatting::format_failures(&batch.failures));
        }
        Ok(result)
    }
}
