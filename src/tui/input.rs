use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, read};

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Exit straight away on Ctrl+C. Raw mode swallows SIGINT, so do it by hand.
fn exit_on_ctrl_c(key: &KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        reset_terminal();
        println!();
        std::process::exit(130);
    }
}

/// Wait for one key press. With a timeout, `Ok(None)` means it elapsed first.
pub fn read_key(timeout: Option<Duration>) -> io::Result<Option<KeyEvent>> {
    let _guard = RawModeGuard::new()?;

    loop {
        if let Some(timeout) = timeout
            && !event::poll(timeout)?
        {
            return Ok(None);
        }

        match read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                exit_on_ctrl_c(&key);
                return Ok(Some(key));
            }
            // Resize and release events. Hand control back when the caller
            // has a deadline so it can recompute the timeout.
            _ if timeout.is_some() => return Ok(None),
            _ => {}
        }
    }
}

/// Numeric input. Only digits are accepted. `None` when cancelled, `Some(0)`
/// when left empty.
pub fn get_numeric_input(prompt: &str, initial_value: usize) -> Option<usize> {
    let initial = if initial_value > 0 {
        initial_value.to_string()
    } else {
        String::new()
    };

    let digits = edit_line(prompt, &initial, |c| c.is_ascii_digit())?;
    if digits.is_empty() {
        Some(0)
    } else {
        digits.parse().ok()
    }
}

/// Single-word input: whitespace is not accepted. `None` when cancelled
/// with Esc or Ctrl+Q.
pub fn get_editable_input(prompt: &str, initial_value: &str) -> Option<String> {
    edit_line(prompt, initial_value, |c| !c.is_control() && !c.is_whitespace())
}

fn edit_line(prompt: &str, initial: &str, accept: fn(char) -> bool) -> Option<String> {
    let mut input: Vec<char> = initial.chars().collect();
    let mut cursor = input.len(); // 0-based, in chars
    let mut drawn_len = input.len();
    let mut cancelled = false;

    // RawModeGuard ensures raw mode is disabled even if we panic or return early
    let guard = match RawModeGuard::new() {
        Ok(g) => g,
        Err(_) => return Some(initial.to_string()),
    };

    print!("{}: {}", prompt, initial);
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind == KeyEventKind::Press => key,
            Ok(_) => continue,
            Err(_) => break,
        };
        exit_on_ctrl_c(&key);

        match key.code {
            KeyCode::Char('q') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace if cursor > 0 => {
                cursor -= 1;
                input.remove(cursor);
            }
            KeyCode::Delete if cursor < input.len() => {
                input.remove(cursor);
            }
            KeyCode::Left if cursor > 0 => cursor -= 1,
            KeyCode::Right if cursor < input.len() => cursor += 1,
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if accept(c) => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r{}: {}", prompt, " ".repeat(drawn_len + 1));
        print!("\r{}: {}", prompt, text);
        print!("\x1b[{}G", prompt.chars().count() + 3 + cursor);
        flush();
        drawn_len = input.len();
    }

    // Disable raw mode before println
    drop(guard);
    println!();

    if cancelled {
        None
    } else {
        Some(input.into_iter().collect())
    }
}
