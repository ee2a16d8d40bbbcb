use crate::todo::{NoteSource, content_hash};
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// A plain-text note as kept in the notes file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    pub id: i64,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
}

/// All notes, in file order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notes {
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Notes {
    pub fn find(&self, id: i64) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Borrow every note as batch-parser input
    pub fn sources(&self) -> Vec<NoteSource<'_>> {
        self.notes
            .iter()
            .map(|n| NoteSource::new(Some(n.id), &n.content))
            .collect()
    }

    /// Replace one line of a note
    ///
    /// # Arguments
    /// * `note_id` - Note to edit
    /// * `hash` - Content hash of the line to replace
    /// * `new_line` - Replacement text
    ///
    /// # Returns
    /// An error if the note does not exist or no line has the given hash.
    /// Only the first matching line is replaced.
    pub fn replace_line(&mut self, note_id: i64, hash: i32, new_line: &str) -> Result<()> {
        let note = match self.notes.iter_mut().find(|n| n.id == note_id) {
            Some(n) => n,
            None => bail!("Note {} does not exist", note_id),
        };

        // split on '\n' only so each line keeps its own '\r'
        let mut lines: Vec<String> = note.content.split('\n').map(str::to_string).collect();
        let position = match lines
            .iter()
            .position(|l| content_hash(l.strip_suffix('\r').unwrap_or(l.as_str())) == hash)
        {
            Some(p) => p,
            None => bail!("Note {} has no line with hash {}", note_id, hash),
        };
        let ending = if lines[position].ends_with('\r') { "\r" } else { "" };
        lines[position] = format!("{}{}", new_line, ending);

        note.content = lines.join("\n");
        Ok(())
    }
}

/// TOML file holding the notes
pub struct NoteStore {
    file_path: PathBuf,
}

impl NoteStore {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<Notes> {
        if !self.file_path.exists() {
            return Ok(Notes::default());
        }

        let content = fs::read_to_string(&self.file_path)
            .with_context(|| format!("Failed to read notes file {}", self.file_path.display()))?;
        let notes: Notes = toml::from_str(&content)
            .with_context(|| format!("Failed to parse notes file {}", self.file_path.display()))?;
        Ok(notes)
    }

    pub fn save(&self, notes: &Notes) -> Result<()> {
        let content = toml::to_string_pretty(notes)?;
        fs::write(&self.file_path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn sample() -> Notes {
        Notes {
            notes: vec![Note {
                id: 7,
                title: "Chores".to_string(),
                content: "Buy milk\n(A) Pay rent due:2024-01-01\n".to_string(),
            }],
        }
    }

    // ファイルが存在しない場合は空のノート一覧を返すことを確認
    #[test]
    fn test_load_missing_file() {
        let store = NoteStore::new("/nonexistent/notes.toml");
        assert!(store.load().unwrap().notes.is_empty());
    }

    // 保存と再読み込みのテスト
    #[test]
    fn test_save_and_load() {
        let temp_file = NamedTempFile::new().unwrap();
        let store = NoteStore::new(temp_file.path());
        store.save(&sample()).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded, sample());
    }

    // 行の置き換えテスト
    #[test]
    fn test_replace_line() {
        let mut notes = sample();
        let hash = content_hash("Buy milk");
        notes.replace_line(7, hash, "x Buy milk ").unwrap();
        assert_eq!(
            notes.find(7).unwrap().content,
            "x Buy milk \n(A) Pay rent due:2024-01-01\n"
        );
    }

    // CRLF改行のノートで他の行の改行が保持されることを確認
    #[test]
    fn test_replace_line_keeps_crlf() {
        let mut notes = Notes {
            notes: vec![Note {
                id: 1,
                title: String::new(),
                content: "Buy milk\r\nWalk dog\r\nCall mom\r\n".to_string(),
            }],
        };
        notes.replace_line(1, content_hash("Walk dog"), "x Walk dog ").unwrap();
        assert_eq!(
            notes.find(1).unwrap().content,
            "Buy milk\r\nx Walk dog \r\nCall mom\r\n"
        );
    }

    // 存在しないノート・行の置き換えエラーテスト
    #[test]
    fn test_replace_line_errors() {
        let mut notes = sample();
        assert!(notes.replace_line(99, content_hash("Buy milk"), "x").is_err());
        assert!(notes.replace_line(7, content_hash("Buy bread"), "x").is_err());
    }
}
