// ============================================================
// AGGREGATE MAP
// ============================================================
// Insertion-ordered key -> running-sum accumulator

use std::collections::HashMap;

/// Accumulates per-key sums while preserving first-seen key order.
///
/// Ranking tie-breaks depend on insertion order, which a bare `HashMap`
/// cannot provide, so entries live in a `Vec` with a side index.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregateMap {
    entries: Vec<(String, f64)>,
    index: HashMap<String, usize>,
}

impl AggregateMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `amount` to the running sum for `key`, creating the entry at
    /// zero when the key is first seen.
    pub fn add(&mut self, key: &str, amount: f64) {
        match self.index.get(key) {
            Some(&slot) => self.entries[slot].1 += amount,
            None => {
                self.index.insert(key.to_string(), self.entries.len());
                self.entries.push((key.to_string(), amount));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in first-seen order.
    pub fn entries(&self) -> &[(String, f64)] {
        &self.entries
    }

    /// Consume into first-seen-ordered pairs.
    pub fn into_entries(self) -> Vec<(String, f64)> {
        self.entries
    }

    /// Maximum-value entry; ties go to the earliest-seen key.
    pub fn top_entry(&self) -> Option<(&str, f64)> {
        let mut best: Option<(&str, f64)> = None;
        for (key, value) in &self.entries {
            match best {
                Some((_, top)) if *value <= top => {}
                _ => best = Some((key.as_str(), *value)),
            }
        }
        best
    }
}
