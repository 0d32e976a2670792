//! Roll history types

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use super::RollResult;

/// Text shown in place of the history list while it is empty
pub const EMPTY_HISTORY_TEXT: &str = "No rolls yet. Select dice and roll!";

/// One completed roll, numbered in the order it settled
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub number: u32,
    pub results: Vec<RollResult>,
}

impl HistoryEntry {
    /// Dice notation for the roll, e.g. `1d20 + 1d6`
    pub fn notation(&self) -> String {
        self.results
            .iter()
            .map(|r| format!("1{}", r.kind))
            .collect::<Vec<_>>()
            .join(" + ")
    }

    /// One `d20: 17` style label per result
    pub fn result_labels(&self) -> Vec<String> {
        self.results.iter().map(|r| r.to_string()).collect()
    }
}

/// Newest-first list of completed rolls
#[derive(Clone, Debug, Default)]
pub struct RollHistory {
    entries: VecDeque<HistoryEntry>,
    roll_count: u32,
    revision: u64,
}

impl RollHistory {
    pub fn push(&mut self, results: Vec<RollResult>) -> &HistoryEntry {
        self.roll_count += 1;
        self.entries.push_front(HistoryEntry {
            number: self.roll_count,
            results,
        });
        self.revision += 1;
        &self.entries[0]
    }

    /// Drop every entry and restart numbering at #1
    pub fn clear(&mut self) {
        self.entries.clear();
        self.roll_count = 0;
        self.revision += 1;
    }

    /// Entries, newest first
    pub fn entries(&self) -> impl Iterator<Item = &HistoryEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&HistoryEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn next_number(&self) -> u32 {
        self.roll_count + 1
    }

    /// Bumped on every push or clear; lets views skip rebuilding when nothing changed
    pub fn revision(&self) -> u64 {
        self.revision
    }
}
