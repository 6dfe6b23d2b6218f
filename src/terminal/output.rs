//! Terminal output: ANSI styles and the boxed screen layout.

use std::io::{self, Write};

use crossterm::terminal::disable_raw_mode;

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[90m";
pub const RED: &str = "\x1b[38;5;9m";
pub const GREEN: &str = "\x1b[38;5;10m";
pub const YELLOW: &str = "\x1b[33m";

/// Outer width of every box, borders included.
pub const BOX_WIDTH: usize = 74;
const INNER: usize = BOX_WIDTH - 4;
const KEY_COLUMN: usize = 14;

pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and drop any active style.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("{RESET}");
    flush();
}

pub fn print_error(msg: &str) {
    println!("{RED}{msg}{RESET}");
}

/// Divider between sections of an open box.
pub fn print_rule() {
    println!("{}", border('├', "", '┤'));
}

/// `┌─ title ───┐`, or a plain top edge when `title` is empty.
pub fn box_top(title: &str) {
    println!("{}", border('┌', title, '┐'));
}

pub fn box_bottom() {
    println!("{}", border('└', "", '┘'));
}

/// One left-aligned row. Content wider than the box overflows the border.
pub fn box_line(content: &str) {
    println!("│ {} │", pad(content, 0));
}

pub fn box_line_center(content: &str) {
    let left = INNER.saturating_sub(console_width(content)) / 2;
    println!("│ {} │", pad(content, left));
}

/// Break `content` into rows of at most the inner width, by characters.
pub fn box_wrapped(content: &str) {
    let chars: Vec<char> = content.chars().collect();
    if chars.is_empty() {
        return box_line("");
    }
    for row in chars.chunks(INNER) {
        box_line(&row.iter().collect::<String>());
    }
}

/// Key binding row: `key` in a fixed column, `desc` word-wrapped beside it.
pub fn box_opt(key: &str, desc: &str) {
    let rows = wrap_words(desc, INNER - KEY_COLUMN);
    let blank = " ".repeat(KEY_COLUMN);
    for (i, row) in rows.iter().enumerate() {
        let lead = if i == 0 {
            format!("{:<KEY_COLUMN$}", key)
        } else {
            blank.clone()
        };
        box_line(&format!("{lead}{row}"));
    }
}

/// Visible width: ANSI escape sequences count as zero columns.
pub fn console_width(s: &str) -> usize {
    let mut width = 0;
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        if c == '\x1b' {
            chars.by_ref().find(|&c| c == 'm');
        } else {
            width += 1;
        }
    }
    width
}

fn border(left: char, title: &str, right: char) -> String {
    let head = if title.is_empty() {
        String::new()
    } else {
        format!("─ {title} ")
    };
    let fill = (BOX_WIDTH - 2).saturating_sub(console_width(&head));
    format!("{left}{head}{}{right}", "─".repeat(fill))
}

fn pad(content: &str, left: usize) -> String {
    let right = INNER.saturating_sub(left + console_width(content));
    format!("{}{content}{}", " ".repeat(left), " ".repeat(right))
}

fn wrap_words(text: &str, width: usize) -> Vec<String> {
    let mut rows = vec![String::new()];
    for word in text.split_whitespace() {
        let Some(row) = rows.last_mut() else { break };
        if row.is_empty() {
            row.push_str(word);
        } else if row.chars().count() + 1 + word.chars().count() <= width {
            row.push(' ');
            row.push_str(word);
        } else {
            rows.push(word.to_string());
        }
    }
    rows
}
