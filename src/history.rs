//! Bounded history of generated passwords, newest first.

use std::collections::VecDeque;
use std::fmt;

use zeroize::Zeroizing;

use crate::pass::GeneratedPassword;
use crate::settings::{KEY_HISTORY, PreferenceStore, join_list, split_list};

#[derive(Clone, Default)]
pub struct History {
    limit: usize,
    entries: VecDeque<Zeroizing<String>>,
}

impl History {
    /// Empty history holding at most `limit` entries. A limit of zero keeps
    /// nothing.
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            entries: VecDeque::with_capacity(limit.min(64)),
        }
    }

    /// Load the persisted history, truncated to `limit`.
    pub fn load(store: &impl PreferenceStore, limit: usize) -> Self {
        let mut history = Self::new(limit);
        if let Some(raw) = store.get(KEY_HISTORY).map(Zeroizing::new) {
            history.entries = split_list(&raw)
                .into_iter()
                .filter(|entry| !entry.is_empty())
                .take(limit)
                .map(Zeroizing::new)
                .collect();
        }
        history
    }

    /// Write the history into `store`. The caller flushes.
    pub fn save(&self, store: &mut impl PreferenceStore) {
        let items: Vec<&str> = self.iter().collect();
        store.set(KEY_HISTORY, join_list(&items));
    }

    /// Record a password as the newest entry, evicting the oldest past the
    /// limit.
    pub fn push(&mut self, password: &GeneratedPassword) {
        if self.limit == 0 {
            return;
        }
        self.entries
            .push_front(Zeroizing::new(password.as_str().to_string()));
        self.entries.truncate(self.limit);
    }

    pub fn set_limit(&mut self, limit: usize) {
        self.limit = limit;
        self.entries.truncate(limit);
    }

    pub fn limit(&self) -> usize {
        self.limit
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries, newest first.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.as_str())
    }

    pub fn newest(&self) -> Option<&str> {
        self.entries.front().map(|entry| entry.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl fmt::Debug for History {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("History")
            .field("limit", &self.limit)
            .field("len", &self.entries.len())
            .finish()
    }
}
