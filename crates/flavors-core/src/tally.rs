//! Batch tally accumulation

use std::collections::HashMap;

use crate::pattern::flavor_pattern;

/// Word → occurrence count for a single ingest batch.
///
/// Accumulation is commutative: the order in which lines are observed does
/// not affect the final counts. The tally is transient — it is drained into
/// the ledger and discarded.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct BatchTally {
    counts: HashMap<String, u64>,
}

impl BatchTally {
    /// Create an empty tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Tally a whole batch of lines.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut tally = Self::new();
        for line in lines {
            tally.observe_line(line.as_ref());
        }
        tally
    }

    /// Count every non-overlapping match on `line`, left to right.
    pub fn observe_line(&mut self, line: &str) {
        for caps in flavor_pattern().captures_iter(line) {
            *self.counts.entry(caps[1].to_string()).or_insert(0) += 1;
        }
    }

    /// True when no word has been counted yet.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Number of distinct words counted.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Occurrence count for `word`, zero when never seen.
    pub fn count(&self, word: &str) -> u64 {
        self.counts.get(word).copied().unwrap_or(0)
    }

    /// Entries in ascending word order.
    ///
    /// The map itself has no iteration order; persistence consumes this so
    /// that row write order is deterministic.
    pub fn sorted_entries(&self) -> Vec<(String, u64)> {
        let mut entries: Vec<(String, u64)> = self
            .counts
            .iter()
            .map(|(word, count)| (word.clone(), *count))
            .collect();
        entries.sort_by(|a, b| a.0.cmp(&b.0));
        entries
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_input_yields_empty_tally() {
        let tally = BatchTally::from_lines(Vec::<String>::new());
        assert!(tally.is_empty());
        assert_eq!(tally.len(), 0);
    }

    #[test]
    fn test_lines_without_matches_yield_empty_tally() {
        let tally = BatchTally::from_lines(["no flavor here", "thinking...", "Thinking.."]);
        assert!(tally.is_empty());
    }

    #[test]
    fn test_counts_accumulate_across_lines() {
        let tally = BatchTally::from_lines([
            "Thinking... Moonwalking...",
            "Refactoring... Thinking...",
        ]);
        assert_eq!(tally.count("Thinking"), 2);
        assert_eq!(tally.count("Moonwalking"), 1);
        assert_eq!(tally.count("Refactoring"), 1);
        assert_eq!(tally.len(), 3);
    }

    #[test]
    fn test_repeats_on_one_line_count_independently() {
        let tally = BatchTally::from_lines(["Thinking... Thinking… Thinking..."]);
        assert_eq!(tally.count("Thinking"), 3);
    }

    #[test]
    fn test_sorted_entries_are_ascending_by_word() {
        let tally = BatchTally::from_lines(["Zipping... Alphabetizing... Mulling..."]);
        let entries = tally.sorted_entries();
        let words: Vec<&str> = entries.iter().map(|(word, _)| word.as_str()).collect();
        assert_eq!(words, vec!["Alphabetizing", "Mulling", "Zipping"]);
    }

    #[test]
    fn test_unseen_word_counts_zero() {
        let tally = BatchTally::from_lines(["Thinking..."]);
        assert_eq!(tally.count("Moonwalking"), 0);
    }

    fn line_strategy() -> impl Strategy<Value = String> {
        let token = prop::sample::select(vec![
            "Thinking...",
            "Thinking…",
            "thinking...",
            "Moonwalking...",
            "Refactoring..",
            "Percolating…",
            "plain words",
            "Xing...",
        ]);
        prop::collection::vec(token, 0..6).prop_map(|tokens| tokens.join(" "))
    }

    proptest! {
        #[test]
        fn tally_is_commutative_under_line_reordering(
            lines in prop::collection::vec(line_strategy(), 0..12)
        ) {
            let forward = BatchTally::from_lines(lines.iter());
            let reversed = BatchTally::from_lines(lines.iter().rev());
            prop_assert_eq!(forward, reversed);
        }
    }
}
