use chrono::{DateTime, Local};

/// One past selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mood: String,
    pub language: String,
    pub at: DateTime<Local>,
}

/// Append-only log of the session's past selections.
///
/// Growth is unbounded for the session's lifetime; the display only ever
/// reads the most recent few, so no eviction is done.
#[derive(Debug, Default)]
pub struct SessionStore {
    entries: Vec<HistoryEntry>,
}

impl SessionStore {
    pub fn new() -> Self {
        SessionStore::default()
    }

    /// Append one entry. Called exactly once per fully successful run.
    pub fn record(&mut self, mood: &str, language: &str) {
        self.entries.push(HistoryEntry {
            mood: mood.to_string(),
            language: language.to_string(),
            at: Local::now(),
        });
    }

    /// The last `n` entries, most recent first. Does not mutate the log.
    pub fn recent(&self, n: usize) -> Vec<&HistoryEntry> {
        self.entries.iter().rev().take(n).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
