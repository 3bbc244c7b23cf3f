//! Generation history.
//!
//! Each successful generation produces exactly one [`HistoryItem`]. Items are immutable once
//! recorded and the list is kept newest-first.

use chrono::{DateTime, Local};

/// Number of characters shown in a history preview.
pub const PREVIEW_CHARS: usize = 150;

/// Marker appended to truncated previews.
pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryItem {
    pub prompt: String,
    /// Style preset id
    pub style: String,
    pub content: String,
    pub timestamp: DateTime<Local>,
}

impl HistoryItem {
    pub fn new(prompt: String, style: String, content: String, timestamp: DateTime<Local>) -> Self {
        Self {
            prompt,
            style,
            content,
            timestamp,
        }
    }

    pub fn preview(&self, max_chars: usize) -> String {
        preview(&self.content, max_chars)
    }

    /// Local date and time, e.g. `2024-03-01 14:05:09`
    pub fn formatted_timestamp(&self) -> String {
        self.timestamp.format("%Y-%m-%d %H:%M:%S").to_string()
    }
}

/// Truncate `content` to `max_chars` characters, appending [`ELLIPSIS`] when anything was cut.
pub fn preview(content: &str, max_chars: usize) -> String {
    match content.char_indices().nth(max_chars) {
        Some((byte_index, _)) => format!("{}{}", &content[..byte_index], ELLIPSIS),
        None => content.to_string(),
    }
}

/// Newest-first list of past generations.
#[derive(Debug, Clone, Default)]
pub struct History {
    items: Vec<HistoryItem>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend an item so that index 0 is always the most recent generation.
    pub fn record(&mut self, item: HistoryItem) {
        self.items.insert(0, item);
    }

    pub fn latest(&self) -> Option<&HistoryItem> {
        self.items.first()
    }

    pub fn get(&self, index: usize) -> Option<&HistoryItem> {
        self.items.get(index)
    }

    pub fn items(&self) -> &[HistoryItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &HistoryItem> {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
