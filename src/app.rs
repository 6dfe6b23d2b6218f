//! Interactive application state.
//!
//! Everything the interactive screen shows lives here and changes only
//! through the transitions below, so the screen is a pure rendering of `App`.

use std::time::{Duration, Instant};

use copypasta::ClipboardProvider;
use zeroize::Zeroize;

use crate::history::History;
use crate::pass::{self, GeneratedPassword, StrengthAssessment, charset, strength};
use crate::random::RandomSource;
use crate::settings::{KEY_HISTORY_LIMIT, PreferenceStore, Settings, StoreError};

/// How long the "copied" notice stays up.
pub const COPIED_TTL: Duration = Duration::from_secs(2);

pub const COPIED_TEXT: &str = "Password copied!";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Upper,
    Lower,
    Digits,
    Symbols,
}

impl CharClass {
    pub const ALL: [CharClass; 4] = [
        CharClass::Upper,
        CharClass::Lower,
        CharClass::Digits,
        CharClass::Symbols,
    ];

    pub fn label(self) -> &'static str {
        match self {
            CharClass::Upper => "Uppercase (A-Z)",
            CharClass::Lower => "Lowercase (a-z)",
            CharClass::Digits => "Digits (0-9)",
            CharClass::Symbols => "Symbols (!@#...)",
        }
    }
}

/// Transient message under the password.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Error(String),
    Info(String),
    Copied { expires_at: Instant },
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Notice::Error(msg) | Notice::Info(msg) => msg,
            Notice::Copied { .. } => COPIED_TEXT,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notice::Error(_))
    }
}

pub struct App<S: PreferenceStore> {
    store: S,
    settings: Settings,
    history: History,
    password: Option<GeneratedPassword>,
    notice: Option<Notice>,
}

impl<S: PreferenceStore> App<S> {
    /// Load settings and history from `store`.
    pub fn new(store: S) -> Self {
        let settings = Settings::load(&store);
        let history = History::load(&store, settings.history_limit);
        Self {
            store,
            settings,
            history,
            password: None,
            notice: None,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn password(&self) -> Option<&GeneratedPassword> {
        self.password.as_ref()
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    /// Copy is offered only while a password is shown.
    pub fn can_copy(&self) -> bool {
        self.password.is_some()
    }

    pub fn assessment(&self) -> StrengthAssessment {
        strength::assess_request(&self.settings.request())
    }

    pub fn entropy_bits(&self) -> f64 {
        let request = self.settings.request();
        charset::entropy_bits(request.length, charset::size(&request))
    }

    /// Generate from the current settings and record the result in history.
    pub fn generate<R: RandomSource>(&mut self, rng: &mut R) {
        self.notice = None;

        match pass::generate(&self.settings.request(), rng) {
            Ok(password) => {
                self.history.push(&password);
                self.persist_history();
                self.password = Some(password);
            }
            Err(e) => {
                self.password = None;
                self.notice = Some(Notice::Error(format!("Error: {}", e)));
            }
        }
    }

    /// Put the current password on the clipboard. Does nothing without one.
    pub fn copy<C: ClipboardProvider + ?Sized>(&mut self, clipboard: &mut C, now: Instant) {
        let Some(password) = &self.password else {
            return;
        };

        match clipboard.set_contents(password.as_str().to_string()) {
            Ok(()) => {
                if let Ok(mut retrieved) = clipboard.get_contents() {
                    retrieved.zeroize();
                }
                self.notice = Some(Notice::Copied {
                    expires_at: now + COPIED_TTL,
                });
            }
            Err(e) => {
                self.notice = Some(Notice::Error(format!("Clipboard error: {}", e)));
            }
        }
    }

    /// Expire the copied notice. Returns true when the notice changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if let Some(Notice::Copied { expires_at }) = self.notice
            && now >= expires_at
        {
            self.notice = None;
            return true;
        }
        false
    }

    /// When the current notice expires, if it does.
    pub fn notice_deadline(&self) -> Option<Instant> {
        match self.notice {
            Some(Notice::Copied { expires_at }) => Some(expires_at),
            _ => None,
        }
    }

    pub fn report(&mut self, msg: impl Into<String>) {
        self.notice = Some(Notice::Error(msg.into()));
    }

    pub fn inform(&mut self, msg: impl Into<String>) {
        self.notice = Some(Notice::Info(msg.into()));
    }

    pub fn is_enabled(&self, class: CharClass) -> bool {
        match class {
            CharClass::Upper => self.settings.include_upper,
            CharClass::Lower => self.settings.include_lower,
            CharClass::Digits => self.settings.include_digits,
            CharClass::Symbols => self.settings.include_symbols,
        }
    }

    pub fn toggle(&mut self, class: CharClass) {
        let flag = match class {
            CharClass::Upper => &mut self.settings.include_upper,
            CharClass::Lower => &mut self.settings.include_lower,
            CharClass::Digits => &mut self.settings.include_digits,
            CharClass::Symbols => &mut self.settings.include_symbols,
        };
        *flag = !*flag;
    }

    pub fn set_length(&mut self, length: usize) {
        self.settings.set_length_clamped(length);
    }

    /// Whitespace is dropped. Empty restores the default symbol set.
    pub fn set_symbol_set(&mut self, symbols: &str) {
        self.settings.symbol_set = symbols.chars().filter(|c| !c.is_whitespace()).collect();
    }

    pub fn set_history_limit(&mut self, limit: usize) {
        self.settings.history_limit = limit;
        self.history.set_limit(limit);
        self.store.set(KEY_HISTORY_LIMIT, limit.to_string());
        self.persist_history();
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
        self.persist_history();
    }

    /// Persist settings and history.
    pub fn save(&mut self) -> Result<(), StoreError> {
        self.settings.save(&mut self.store);
        self.history.save(&mut self.store);
        self.store.flush()
    }

    fn persist_history(&mut self) {
        self.history.save(&mut self.store);
        if let Err(e) = self.store.flush() {
            log::warn!("could not persist history: {}", e);
        }
    }
}
