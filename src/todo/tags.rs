use super::item::TodoItem;
use std::collections::HashSet;
use std::str::FromStr;

/// Which tag family to extract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    /// `+project` tags
    Project,
    /// `@context` tags
    Context,
}

impl TagKind {
    pub fn sigil(&self) -> &'static str {
        match self {
            TagKind::Project => "+",
            TagKind::Context => "@",
        }
    }

    fn tags<'a>(&self, item: &'a TodoItem) -> &'a [String] {
        match self {
            TagKind::Project => &item.project_tags,
            TagKind::Context => &item.context_tags,
        }
    }
}

impl FromStr for TagKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(TagKind::Project),
            "context" => Ok(TagKind::Context),
            _ => Err(format!(
                "Invalid tag kind '{}'. Valid options are: project, context",
                s
            )),
        }
    }
}

/// Collect the distinct tags of open items
///
/// # Arguments
/// * `items` - Items to scan; completed items are skipped
/// * `kind` - Project or context tags
///
/// # Returns
/// Tags in first-seen order, without duplicates and without the bare sigil
pub fn extract_tags(items: &[TodoItem], kind: TagKind) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut result = Vec::new();
    for item in items.iter().filter(|i| !i.completed) {
        for tag in kind.tags(item) {
            if tag != kind.sigil() && seen.insert(tag.as_str()) {
                result.push(tag.clone());
            }
        }
    }
    result
}
