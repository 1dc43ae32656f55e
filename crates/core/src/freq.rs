//! Symbol frequency counting.
//!
//! First stage of the pipeline: tally how often each distinct symbol
//! occurs in the input text. The counter itself guarantees no ordering
//! beyond first-seen; callers pick the order they need (descending for
//! display, ascending inside the tree builder).

use std::collections::HashMap;

/// One (symbol, frequency) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrequencyEntry {
    /// The symbol (a single character)
    pub symbol: char,

    /// Number of occurrences, always >= 1
    pub frequency: u64,
}

/// Frequencies of every distinct symbol in an input, in first-seen order.
///
/// Symbols are unique; an empty input yields an empty table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    entries: Vec<FrequencyEntry>,
}

impl FrequencyTable {
    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[FrequencyEntry] {
        &self.entries
    }

    /// Total number of symbols counted (sum of all frequencies).
    pub fn total(&self) -> u64 {
        self.entries.iter().map(|e| e.frequency).sum()
    }

    /// Entries sorted descending by frequency, the order frequency
    /// tables are displayed in. Ties keep first-seen order.
    pub fn sorted_for_display(&self) -> Vec<FrequencyEntry> {
        let mut sorted = self.entries.clone();
        sorted.sort_by_key(|e| std::cmp::Reverse(e.frequency));
        sorted
    }
}

/// Count occurrences of each distinct symbol in `text`.
///
/// Returns one entry per distinct symbol, in first-seen order.
/// Empty input yields an empty table.
pub fn count_frequencies(text: &str) -> FrequencyTable {
    let mut index: HashMap<char, usize> = HashMap::new();
    let mut entries: Vec<FrequencyEntry> = Vec::new();

    for symbol in text.chars() {
        match index.get(&symbol) {
            Some(&i) => entries[i].frequency += 1,
            None => {
                index.insert(symbol, entries.len());
                entries.push(FrequencyEntry {
                    symbol,
                    frequency: 1,
                });
            }
        }
    }

    FrequencyTable { entries }
}
