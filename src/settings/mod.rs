//! Password generation settings.

mod file;
mod store;

pub use file::{FileStore, default_path, join_list, split_list};
pub use store::{MemoryStore, PreferenceStore, StoreError};

use std::str::FromStr;

use crate::pass::GenerationRequest;

pub(crate) const KEY_LENGTH: &str = "length";
pub(crate) const KEY_UPPER: &str = "upper";
pub(crate) const KEY_LOWER: &str = "lower";
pub(crate) const KEY_DIGITS: &str = "digits";
pub(crate) const KEY_SYMBOLS: &str = "symbols";
pub(crate) const KEY_SYMBOL_SET: &str = "symbol_set";
pub(crate) const KEY_HISTORY_LIMIT: &str = "history_limit";
pub(crate) const KEY_HISTORY: &str = "history";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub length: usize,
    pub include_upper: bool,
    pub include_lower: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
    /// Custom symbol alphabet, empty for the default set.
    pub symbol_set: String,
    pub history_limit: usize,
}

impl Settings {
    /// Length range offered by the interactive slider.
    pub const MIN_LENGTH: usize = 4;
    pub const MAX_LENGTH: usize = 64;

    /// Read settings from `store`. Missing or unparsable keys keep defaults.
    pub fn load(store: &impl PreferenceStore) -> Self {
        let mut settings = Settings::default();
        read(store, KEY_LENGTH, &mut settings.length);
        read(store, KEY_UPPER, &mut settings.include_upper);
        read(store, KEY_LOWER, &mut settings.include_lower);
        read(store, KEY_DIGITS, &mut settings.include_digits);
        read(store, KEY_SYMBOLS, &mut settings.include_symbols);
        read(store, KEY_HISTORY_LIMIT, &mut settings.history_limit);
        if let Some(set) = store.get(KEY_SYMBOL_SET) {
            settings.symbol_set = set;
        }
        settings
    }

    /// Write settings into `store`. The caller flushes.
    pub fn save(&self, store: &mut impl PreferenceStore) {
        store.set(KEY_LENGTH, self.length.to_string());
        store.set(KEY_UPPER, self.include_upper.to_string());
        store.set(KEY_LOWER, self.include_lower.to_string());
        store.set(KEY_DIGITS, self.include_digits.to_string());
        store.set(KEY_SYMBOLS, self.include_symbols.to_string());
        store.set(KEY_SYMBOL_SET, self.symbol_set.clone());
        store.set(KEY_HISTORY_LIMIT, self.history_limit.to_string());
    }

    pub fn request(&self) -> GenerationRequest {
        GenerationRequest {
            length: self.length,
            include_upper: self.include_upper,
            include_lower: self.include_lower,
            include_digits: self.include_digits,
            include_symbols: self.include_symbols,
            symbols: self.symbol_set.clone(),
        }
    }

    /// Clamp to the interactive length range.
    pub fn set_length_clamped(&mut self, length: usize) {
        self.length = length.clamp(Self::MIN_LENGTH, Self::MAX_LENGTH);
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            length: 12,
            include_upper: false,
            include_lower: true,
            include_digits: false,
            include_symbols: false,
            symbol_set: String::new(),
            history_limit: 10,
        }
    }
}

fn read<T: FromStr>(store: &impl PreferenceStore, key: &str, slot: &mut T) {
    if let Some(raw) = store.get(key) {
        match raw.trim().parse() {
            Ok(value) => *slot = value,
            Err(_) => log::warn!("ignoring invalid value for preference '{}'", key),
        }
    }
}
