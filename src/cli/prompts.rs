//! Centralized warning and prompt messages for CLI output.

use std::io::{IsTerminal, Write};
use std::sync::atomic::{AtomicBool, Ordering};

use crate::pass::StrengthAssessment;

// ANSI color codes
const YELLOW: &str = "\x1b[33m";
const RED: &str = "\x1b[31m";
const RESET: &str = "\x1b[0m";

/// Suppresses warnings, notices and prompts.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::SeqCst);
}

pub fn quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

/// Skip interactive prompts when quiet or when stdin is not a terminal.
fn skip_prompt() -> bool {
    quiet() || !std::io::stdin().is_terminal()
}

/// Print a warning message to stderr (yellow) - suppressed in quiet mode
pub fn warn(msg: &str) {
    if !quiet() {
        eprintln!("{YELLOW}{msg}{RESET}");
    }
}

/// Print an error message to stderr (red) - NOT suppressed
pub fn error(msg: &str) {
    eprintln!("{RED}{msg}{RESET}");
}

/// Strength summary on stderr, so stdout carries passwords only.
pub fn strength(assessment: &StrengthAssessment, entropy_bits: f64) {
    if !quiet() {
        eprintln!(
            "Strength: {} ({}/6) \u{2022} Entropy: {:.1} bits",
            assessment.strength, assessment.score, entropy_bits
        );
    }
}

pub fn clipboard_copied() {
    if !quiet() {
        eprintln!("Password copied!");
    }
}

pub fn clipboard_error(err: &str) {
    eprintln!("Clipboard error: {err}");
}

/// Ask whether to print instead when the clipboard is unavailable. True to
/// fall back to the terminal. Falls back silently when prompts are skipped.
pub fn clipboard_fallback_prompt() -> bool {
    if skip_prompt() {
        return true;
    }

    eprint!("Clipboard unavailable. Print to terminal instead? [Y/n]: ");
    let _ = std::io::stderr().flush();

    let mut input = String::new();
    if std::io::stdin().read_line(&mut input).is_ok() {
        let input = input.trim().to_lowercase();
        if input.is_empty() || input == "y" || input == "yes" {
            return true;
        }
    } else {
        return true;
    }

    eprintln!("Aborted.");
    false
}

pub fn history_cleared() {
    if !quiet() {
        eprintln!("History cleared.");
    }
}

pub fn settings_saved() {
    if !quiet() {
        eprintln!("Settings saved.");
    }
}
