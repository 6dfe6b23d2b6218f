//! Unit tests for the interactive application state.
//!
//! Drives `App` through its transitions with an in-memory store and a fake
//! clipboard, the way the menu loop does.

use std::error::Error;
use std::time::{Duration, Instant};

use copypasta::ClipboardProvider;
use passgen::app::{App, COPIED_TEXT, COPIED_TTL, CharClass, Notice};
use passgen::settings::MemoryStore;
use passgen::Csprng;

type ClipResult<T> = Result<T, Box<dyn Error + Send + Sync + 'static>>;

#[derive(Default)]
struct FakeClipboard {
    contents: Option<String>,
    broken: bool,
}

impl ClipboardProvider for FakeClipboard {
    fn get_contents(&mut self) -> ClipResult<String> {
        self.contents.clone().ok_or_else(|| "empty".into())
    }

    fn set_contents(&mut self, contents: String) -> ClipResult<()> {
        if self.broken {
            return Err("no display".into());
        }
        self.contents = Some(contents);
        Ok(())
    }
}

fn setup() -> App<MemoryStore> {
    App::new(MemoryStore::new())
}

// ─── Generate ───

#[test]
fn test_generate_shows_password_and_enables_copy() {
    let mut app = setup();
    assert!(!app.can_copy());

    app.generate(&mut Csprng::seeded(1));

    let password = app.password().expect("password after generate");
    assert_eq!(password.len(), 12);
    assert!(password.as_str().chars().all(|c| c.is_ascii_lowercase()));
    assert!(app.can_copy());
    assert!(app.notice().is_none());
}

#[test]
fn test_generate_failure_clears_password_and_disables_copy() {
    let mut app = setup();
    let mut rng = Csprng::seeded(2);
    app.generate(&mut rng);
    assert!(app.can_copy());

    app.toggle(CharClass::Lower);
    app.generate(&mut rng);

    assert!(app.password().is_none());
    assert!(!app.can_copy());
    assert_eq!(
        app.notice(),
        Some(&Notice::Error("Error: no character set selected".into()))
    );
}

#[test]
fn test_generate_clears_previous_notice() {
    let mut app = setup();
    app.report("stale");
    app.generate(&mut Csprng::seeded(3));
    assert!(app.notice().is_none());
}

#[test]
fn test_generate_records_history_newest_first() {
    let mut app = setup();
    let mut rng = Csprng::seeded(4);

    app.generate(&mut rng);
    let first = app.password().unwrap().as_str().to_string();
    app.generate(&mut rng);
    let second = app.password().unwrap().as_str().to_string();

    let entries: Vec<&str> = app.history().iter().collect();
    assert_eq!(entries, vec![second.as_str(), first.as_str()]);
}

#[test]
fn test_history_limit_evicts_oldest() {
    let mut app = setup();
    app.set_history_limit(2);
    let mut rng = Csprng::seeded(5);
    for _ in 0..5 {
        app.generate(&mut rng);
    }
    assert_eq!(app.history().len(), 2);
    assert_eq!(app.history().newest(), app.password().map(|p| p.as_str()));
}

// ─── Copy and the transient notice ───

#[test]
fn test_copy_without_password_is_noop() {
    let mut app = setup();
    let mut clipboard = FakeClipboard::default();

    app.copy(&mut clipboard, Instant::now());

    assert!(clipboard.contents.is_none());
    assert!(app.notice().is_none());
}

#[test]
fn test_copy_sets_clipboard_and_notice() {
    let mut app = setup();
    let mut clipboard = FakeClipboard::default();
    app.generate(&mut Csprng::seeded(6));

    let now = Instant::now();
    app.copy(&mut clipboard, now);

    assert_eq!(
        clipboard.contents.as_deref(),
        app.password().map(|p| p.as_str())
    );
    let notice = app.notice().unwrap();
    assert_eq!(notice.text(), COPIED_TEXT);
    assert_eq!(app.notice_deadline(), Some(now + COPIED_TTL));
}

#[test]
fn test_copied_notice_clears_after_two_seconds() {
    let mut app = setup();
    let mut clipboard = FakeClipboard::default();
    app.generate(&mut Csprng::seeded(7));

    let now = Instant::now();
    app.copy(&mut clipboard, now);

    assert!(!app.tick(now + Duration::from_millis(1999)));
    assert!(app.notice().is_some());

    assert!(app.tick(now + Duration::from_secs(2)));
    assert!(app.notice().is_none());
}

#[test]
fn test_newer_notice_is_not_cleared_by_old_deadline() {
    let mut app = setup();
    let mut clipboard = FakeClipboard::default();
    app.generate(&mut Csprng::seeded(8));

    let now = Instant::now();
    app.copy(&mut clipboard, now);
    app.report("something else");

    assert!(!app.tick(now + Duration::from_secs(10)));
    assert_eq!(app.notice().map(Notice::text), Some("something else"));
}

#[test]
fn test_second_copy_extends_deadline() {
    let mut app = setup();
    let mut clipboard = FakeClipboard::default();
    app.generate(&mut Csprng::seeded(9));

    let start = Instant::now();
    app.copy(&mut clipboard, start);
    app.copy(&mut clipboard, start + Duration::from_secs(1));

    assert!(!app.tick(start + Duration::from_secs(2)));
    assert!(app.tick(start + Duration::from_secs(3)));
}

#[test]
fn test_clipboard_failure_reports_error() {
    let mut app = setup();
    let mut clipboard = FakeClipboard {
        broken: true,
        ..FakeClipboard::default()
    };
    app.generate(&mut Csprng::seeded(10));

    app.copy(&mut clipboard, Instant::now());

    let notice = app.notice().unwrap();
    assert!(notice.is_error());
    assert_eq!(notice.text(), "Clipboard error: no display");
    assert_eq!(app.notice_deadline(), None);
}

// ─── Settings transitions ───

#[test]
fn test_length_is_clamped_to_slider_range() {
    let mut app = setup();
    app.set_length(2);
    assert_eq!(app.settings().length, 4);
    app.set_length(100);
    assert_eq!(app.settings().length, 64);
    app.set_length(20);
    assert_eq!(app.settings().length, 20);
}

#[test]
fn test_toggles_feed_the_assessment() {
    let mut app = setup();
    app.set_length(16);
    for class in [CharClass::Upper, CharClass::Digits, CharClass::Symbols] {
        app.toggle(class);
    }
    assert!(CharClass::ALL.iter().all(|c| app.is_enabled(*c)));
    assert_eq!(app.assessment().score, 6);
}

#[test]
fn test_blank_symbol_set_restores_default() {
    let mut app = setup();
    app.set_symbol_set("  ");
    assert!(app.settings().symbol_set.is_empty());
    app.set_symbol_set("#!");
    assert_eq!(app.settings().symbol_set, "#!");
}

#[test]
fn test_symbol_set_drops_inner_whitespace() {
    let mut app = setup();
    app.set_symbol_set(" a b\t#");
    assert_eq!(app.settings().symbol_set, "ab#");

    app.toggle(CharClass::Lower);
    app.toggle(CharClass::Symbols);
    app.generate(&mut Csprng::seeded(13));
    let password = app.password().unwrap();
    assert!(!password.as_str().contains(char::is_whitespace));
}

#[test]
fn test_save_persists_settings_to_store() {
    let mut app = setup();
    app.toggle(CharClass::Digits);
    app.set_length(30);
    app.set_symbol_set("@#");
    app.save().unwrap();

    let reloaded = App::new(app.store().clone());
    assert_eq!(reloaded.settings(), app.settings());
}

#[test]
fn test_unsaved_changes_are_not_persisted() {
    let mut app = setup();
    app.set_length(30);

    let reloaded = App::new(app.store().clone());
    assert_eq!(reloaded.settings().length, 12);
}

#[test]
fn test_history_is_persisted_without_save() {
    let mut app = setup();
    app.generate(&mut Csprng::seeded(12));

    let reloaded = App::new(app.store().clone());
    assert_eq!(reloaded.history().newest(), app.password().map(|p| p.as_str()));
}

#[test]
fn test_clear_history_empties_it() {
    let mut app = setup();
    app.generate(&mut Csprng::seeded(11));
    app.clear_history();
    assert!(app.history().is_empty());
}
