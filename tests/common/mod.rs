//! Common test utilities for integration tests
#![allow(dead_code)]

use chrono::{NaiveDate, NaiveDateTime};
use tempfile::NamedTempFile;
use todotxt_mcp::storage::{Note, NoteStore, Notes};
use todotxt_mcp::todo::{DueThresholds, ParseContext, TodoItem, parse_line};
use todotxt_mcp::{Config, TodoServerHandler};

/// Build a local date
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

/// Build a local wall-clock instant
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> NaiveDateTime {
    date(y, m, d).and_hms_opt(h, min, 0).unwrap()
}

/// Parse context with default thresholds at a fixed instant
pub fn ctx_at(now: NaiveDateTime) -> ParseContext {
    ParseContext::new(now, DueThresholds::default())
}

/// Parse a line that is expected to be valid
pub fn parse(line: &str, now: NaiveDateTime) -> TodoItem {
    parse_line(line, None, &ctx_at(now)).unwrap()
}

/// Parse several valid lines against one instant
pub fn parse_all(lines: &[&str], now: NaiveDateTime) -> Vec<TodoItem> {
    let ctx = ctx_at(now);
    lines
        .iter()
        .map(|l| parse_line(l, None, &ctx).unwrap())
        .collect()
}

/// Create a test handler backed by a temporary notes file
pub fn get_test_handler(notes: Vec<(i64, &str)>) -> (TodoServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let store = NoteStore::new(temp_file.path());
    store
        .save(&Notes {
            notes: notes
                .into_iter()
                .map(|(id, content)| Note {
                    id,
                    title: format!("Note {}", id),
                    content: content.to_string(),
                })
                .collect(),
        })
        .unwrap();

    let handler =
        TodoServerHandler::new(temp_file.path().to_str().unwrap(), Config::default()).unwrap();
    (handler, temp_file)
}

/// Extract the hash printed for the item whose bullet contains `needle`
/// Format: "- [ ] <description>\n ... Note: <id> (hash: <hash>)"
pub fn extract_hash_for(listing: &str, needle: &str) -> i32 {
    let start = listing.find(needle).expect("item not listed");
    let rest = &listing[start..];
    let hash_start = rest.find("hash: ").expect("hash not listed") + "hash: ".len();
    let hash_end = rest[hash_start..].find(')').unwrap() + hash_start;
    rest[hash_start..hash_end].parse().unwrap()
}
