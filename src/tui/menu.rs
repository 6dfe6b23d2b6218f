use std::time::Instant;

use copypasta::ClipboardContext;
use crossterm::event::KeyCode;

use crate::app::{App, CharClass};
use crate::random::RandomSource;
use crate::settings::PreferenceStore;
use crate::terminal::{clear, print_error, reset_terminal};

use super::{
    get_editable_input, get_numeric_input, print_about, print_help, print_history,
    print_main_screen, read_key,
};

use LoopAction::*;
enum LoopAction {
    Break,
    Continue,
}

pub fn main_menu<S: PreferenceStore, R: RandomSource>(app: &mut App<S>, rng: &mut R) {
    reset_terminal();
    let mut clipboard: Option<ClipboardContext> = None;

    loop {
        app.tick(Instant::now());
        clear();
        print_main_screen(app);

        let timeout = app
            .notice_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()));

        let key = match read_key(timeout) {
            Ok(Some(key)) => key,
            Ok(None) => continue,
            Err(e) => {
                print_error(&format!("Terminal input failed: {}", e));
                break;
            }
        };

        if let Break = handle_key(key.code, app, rng, &mut clipboard) {
            break;
        }
    }

    clear();
    reset_terminal();
}

fn handle_key<S: PreferenceStore, R: RandomSource>(
    code: KeyCode,
    app: &mut App<S>,
    rng: &mut R,
    clipboard: &mut Option<ClipboardContext>,
) -> LoopAction {
    match code {
        KeyCode::Enter | KeyCode::Char('g') => app.generate(rng),
        KeyCode::Char('1') => {
            if let Some(len) = get_numeric_input("Enter new password length", app.settings().length)
            {
                app.set_length(len);
            }
        }
        KeyCode::Char(c @ '2'..='5') => {
            let index = c as usize - '2' as usize;
            app.toggle(CharClass::ALL[index]);
        }
        KeyCode::Char('6') => {
            let current = app.settings().symbol_set.clone();
            if let Some(symbols) =
                get_editable_input("Enter symbols without spaces (empty for default)", &current)
            {
                app.set_symbol_set(&symbols);
            }
        }
        KeyCode::Char('7') => {
            if let Some(limit) =
                get_numeric_input("Enter history limit", app.settings().history_limit)
            {
                app.set_history_limit(limit);
            }
        }
        KeyCode::Char('c') if app.can_copy() => copy(app, clipboard),
        KeyCode::Char('h') => {
            clear();
            print_history(app);
            wait_any_key();
        }
        KeyCode::Char('x') => {
            app.clear_history();
            app.inform("History cleared.");
        }
        KeyCode::Char('s') => match app.save() {
            Ok(()) => app.inform("Settings saved."),
            Err(e) => app.report(format!("Error saving settings: {}", e)),
        },
        KeyCode::Char('a') => {
            clear();
            print_about();
            wait_any_key();
        }
        KeyCode::Char('?') => {
            clear();
            print_help();
            wait_any_key();
        }
        KeyCode::Char('q') | KeyCode::Esc => return Break,
        _ => {}
    }
    Continue
}

fn copy<S: PreferenceStore>(app: &mut App<S>, clipboard: &mut Option<ClipboardContext>) {
    if clipboard.is_none() {
        match ClipboardContext::new() {
            Ok(ctx) => *clipboard = Some(ctx),
            Err(e) => {
                log::warn!("clipboard unavailable: {}", e);
                app.report(format!("Clipboard unavailable: {}", e));
                return;
            }
        }
    }

    if let Some(ctx) = clipboard.as_mut() {
        app.copy(ctx, Instant::now());
    }
}

fn wait_any_key() {
    let _ = read_key(None);
}
