//! In-process activity journal

use parking_lot::Mutex;
use sightline_core::JournalEntry;
use std::sync::Arc;

/// Append-only ordered journal of activity entries.
///
/// The full history is retained for the process lifetime; the bound lives
/// in the `recent` view, not the storage. Clones share the same underlying
/// list, so the pipeline and its caller see one journal.
#[derive(Clone, Default)]
pub struct ActivityJournal {
    entries: Arc<Mutex<Vec<JournalEntry>>>,
}

impl ActivityJournal {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one entry.
    pub fn append(&self, entry: JournalEntry) {
        self.entries.lock().push(entry);
    }

    /// The most recent `n` entries, oldest first.
    pub fn recent(&self, n: usize) -> Vec<JournalEntry> {
        let entries = self.entries.lock();
        let start = entries.len().saturating_sub(n);
        entries[start..].to_vec()
    }

    /// Render the most recent `n` entries, one line each, oldest first.
    pub fn render_recent(&self, n: usize) -> String {
        self.recent(n)
            .iter()
            .map(JournalEntry::render)
            .collect::<Vec<_>>()
            .join("\n")
    }

    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}
