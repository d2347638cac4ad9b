//! Fixed-capacity command history with a browsing cursor.
//!
//! Entries live in a ring of `capacity` slots. Once the ring is full each new
//! line overwrites the logically oldest slot, so physical slot 0 is only the
//! oldest entry until the first wrap. Every boundary check below is derived
//! from `write_cursor` and `count` for that reason.

use tracing::debug;

/// Result of stepping the browse cursor towards newer entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Navigation<'a> {
    /// Not browsing; nothing to do.
    Nothing,
    /// Walked past the newest entry; the edit line should be emptied.
    Cleared,
    Entry(&'a str),
}

#[derive(Debug, Clone)]
pub struct HistoryStore {
    slots: Vec<String>,
    capacity: usize,
    count: usize,
    write_cursor: usize,
    browse_cursor: Option<usize>,
}

impl HistoryStore {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            slots: Vec::with_capacity(capacity),
            capacity,
            count: 0,
            write_cursor: 0,
            browse_cursor: None,
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn is_browsing(&self) -> bool {
        self.browse_cursor.is_some()
    }

    pub fn record(&mut self, line: &str) {
        if line.is_empty() || self.most_recent() == Some(line) {
            return;
        }

        if self.slots.len() < self.capacity {
            self.slots.push(line.to_owned());
        } else {
            self.slots[self.write_cursor] = line.to_owned();
        }
        self.write_cursor = (self.write_cursor + 1) % self.capacity;
        if self.count < self.capacity {
            self.count += 1;
        }
        self.browse_cursor = None;
    }

    pub fn most_recent(&self) -> Option<&str> {
        self.newest_slot().map(|slot| self.slots[slot].as_str())
    }

    /// Moves the browse cursor one entry back in time. Returns `None` when the
    /// history is empty or the cursor already sits on the oldest entry.
    pub fn navigate_previous(&mut self) -> Option<&str> {
        let newest = self.newest_slot()?;
        let oldest = self.oldest_slot();

        let slot = match self.browse_cursor {
            None => newest,
            Some(current) if current == oldest => return None,
            Some(current) => (current + self.capacity - 1) % self.capacity,
        };
        self.browse_cursor = Some(slot);
        debug!(slot, "history previous");
        Some(self.slots[slot].as_str())
    }

    pub fn navigate_next(&mut self) -> Navigation<'_> {
        let Some(current) = self.browse_cursor else {
            return Navigation::Nothing;
        };

        if Some(current) == self.newest_slot() {
            self.browse_cursor = None;
            debug!("history browsing ended");
            return Navigation::Cleared;
        }

        let slot = (current + 1) % self.capacity;
        self.browse_cursor = Some(slot);
        debug!(slot, "history next");
        Navigation::Entry(self.slots[slot].as_str())
    }

    pub fn reset_browse_cursor(&mut self) {
        self.browse_cursor = None;
    }

    /// Entries from oldest to newest.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        let oldest = self.oldest_slot();
        (0..self.count).map(move |offset| self.slots[(oldest + offset) % self.capacity].as_str())
    }

    fn oldest_slot(&self) -> usize {
        if self.count < self.capacity {
            0
        } else {
            self.write_cursor
        }
    }

    fn newest_slot(&self) -> Option<usize> {
        if self.count == 0 {
            None
        } else {
            Some((self.write_cursor + self.capacity - 1) % self.capacity)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_with(lines: &[&str]) -> HistoryStore {
        let mut history = HistoryStore::new(5);
        for line in lines {
            history.record(line);
        }
        history
    }

    fn contents(history: &HistoryStore) -> Vec<String> {
        history.iter().map(String::from).collect()
    }

    #[test]
    fn test_record_and_most_recent() {
        let history = store_with(&["ls", "pwd"]);
        assert_eq!(history.len(), 2);
        assert_eq!(history.most_recent(), Some("pwd"));
        assert_eq!(contents(&history), vec!["ls", "pwd"]);
    }

    #[test]
    fn test_empty_line_ignored() {
        let history = store_with(&["", "ls", ""]);
        assert_eq!(history.len(), 1);
        assert!(HistoryStore::new(5).most_recent().is_none());
    }

    #[test]
    fn test_adjacent_duplicates_dropped() {
        let mut history = store_with(&["ls", "ls"]);
        assert_eq!(history.len(), 1);

        history.record("pwd");
        history.record("ls");
        assert_eq!(contents(&history), vec!["ls", "pwd", "ls"]);
    }

    #[test]
    fn test_ring_keeps_last_entries_in_order() {
        let lines: Vec<String> = (0..23).map(|i| format!("cmd{}", i)).collect();
        let mut history = HistoryStore::new(5);
        for (i, line) in lines.iter().enumerate() {
            history.record(line);
            assert!(history.len() <= history.capacity());

            let start = (i + 1).saturating_sub(5);
            let expected: Vec<String> = lines[start..=i].to_vec();
            assert_eq!(contents(&history), expected);
        }
    }

    #[test]
    fn test_sixth_command_evicts_first() {
        let mut history = store_with(&["one", "two", "three", "four", "five", "six"]);

        let mut recalled = Vec::new();
        while let Some(entry) = history.navigate_previous() {
            recalled.push(entry.to_string());
        }
        recalled.reverse();

        assert_eq!(recalled, vec!["two", "three", "four", "five", "six"]);
    }

    #[test]
    fn test_previous_is_idempotent_at_oldest() {
        let mut history = store_with(&["a", "b"]);
        assert_eq!(history.navigate_previous(), Some("b"));
        assert_eq!(history.navigate_previous(), Some("a"));
        assert_eq!(history.navigate_previous(), None);
        assert_eq!(history.navigate_previous(), None);

        // Still parked on the oldest entry.
        assert_eq!(history.navigate_next(), Navigation::Entry("b"));
    }

    #[test]
    fn test_previous_on_empty_history() {
        let mut history = HistoryStore::new(5);
        assert_eq!(history.navigate_previous(), None);
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_next_without_browsing_is_noop() {
        let mut history = store_with(&["a", "b"]);
        assert_eq!(history.navigate_next(), Navigation::Nothing);
        assert_eq!(history.navigate_next(), Navigation::Nothing);
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_next_past_newest_clears() {
        let mut history = store_with(&["a", "b", "c"]);
        history.navigate_previous();
        history.navigate_previous();

        assert_eq!(history.navigate_next(), Navigation::Entry("c"));
        assert_eq!(history.navigate_next(), Navigation::Cleared);
        assert!(!history.is_browsing());
        assert_eq!(history.navigate_next(), Navigation::Nothing);
    }

    #[test]
    fn test_navigation_across_wrap() {
        // Seven records into five slots: the oldest entry sits in slot 2.
        let mut history = store_with(&["1", "2", "3", "4", "5", "6", "7"]);

        let mut seen = Vec::new();
        while let Some(entry) = history.navigate_previous() {
            seen.push(entry.to_string());
        }
        assert_eq!(seen, vec!["7", "6", "5", "4", "3"]);

        let mut forward = Vec::new();
        while let Navigation::Entry(entry) = history.navigate_next() {
            forward.push(entry.to_string());
        }
        assert_eq!(forward, vec!["4", "5", "6", "7"]);
        assert!(!history.is_browsing());
    }

    #[test]
    fn test_record_resets_browsing() {
        let mut history = store_with(&["a", "b"]);
        history.navigate_previous();
        assert!(history.is_browsing());

        history.record("c");
        assert!(!history.is_browsing());
        assert_eq!(history.navigate_previous(), Some("c"));
    }

    #[test]
    fn test_duplicate_record_keeps_browsing_state() {
        let mut history = store_with(&["a", "b"]);
        history.navigate_previous();
        history.record("b");
        assert!(history.is_browsing());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_reset_browse_cursor() {
        let mut history = store_with(&["a", "b"]);
        history.navigate_previous();
        history.navigate_previous();

        history.reset_browse_cursor();
        assert!(!history.is_browsing());
        assert_eq!(history.navigate_previous(), Some("b"));
    }
}
