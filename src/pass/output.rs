//! Password output to a writer or the clipboard.

use std::io::{self, Write};

use copypasta::ClipboardProvider;
use zeroize::Zeroize;

use super::GeneratedPassword;

/// Write one password per line.
pub fn write_lines<W: Write>(out: &mut W, passwords: &[GeneratedPassword]) -> io::Result<()> {
    if passwords.is_empty() {
        return Ok(());
    }
    let mut buf = joined(passwords);
    buf.push('\n');
    let result = out.write_all(buf.as_bytes()).and_then(|()| out.flush());
    buf.zeroize();
    result
}

/// Put the passwords on the clipboard, newline separated.
pub fn to_clipboard<C: ClipboardProvider + ?Sized>(
    clipboard: &mut C,
    passwords: &[GeneratedPassword],
) -> Result<(), String> {
    clipboard
        .set_contents(joined(passwords))
        .map_err(|e| e.to_string())?;
    if let Ok(mut retrieved) = clipboard.get_contents() {
        retrieved.zeroize();
    }
    Ok(())
}

fn joined(passwords: &[GeneratedPassword]) -> String {
    let mut buf = String::with_capacity(passwords.iter().map(|p| p.as_str().len() + 1).sum());
    for (i, password) in passwords.iter().enumerate() {
        if i > 0 {
            buf.push('\n');
        }
        buf.push_str(password.as_str());
    }
    buf
}
