// crates/engine/src/table.rs
use hashbrown::HashMap;

/// Mapping from a case-folded word to the number of times it was seen.
///
/// Counts only grow: there is no way to remove or decrement an entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyTable {
    counts: HashMap<String, u64>,
}

impl FrequencyTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more occurrence of `word`.
    pub fn increment(&mut self, word: &str) {
        self.add(word, 1);
    }

    /// Add `count` occurrences of `word`, creating the entry if needed.
    pub fn add(&mut self, word: &str, count: u64) {
        *self.counts.entry_ref(word).or_insert(0) += count;
    }

    /// Fold every entry of `other` into `self` and return the receiver.
    pub fn merge(&mut self, other: &FrequencyTable) -> &mut Self {
        for (word, count) in &other.counts {
            self.add(word, *count);
        }
        self
    }

    /// Count for `word`, or 0 when it was never seen.
    pub fn get(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts.
    pub fn total(&self) -> u64 {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.counts.iter().map(|(word, count)| (word.as_str(), *count))
    }
}

impl IntoIterator for FrequencyTable {
    type Item = (String, u64);
    type IntoIter = hashbrown::hash_map::IntoIter<String, u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.counts.into_iter()
    }
}

impl FromIterator<(String, u64)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u64)>>(iter: I) -> Self {
        let mut table = Self::new();
        for (word, count) in iter {
            table.add(&word, count);
        }
        table
    }
}
