//! Raw mode RAII guard.

use crossterm::terminal::{disable_raw_mode, enable_raw_mode, is_raw_mode_enabled};
use std::io;

/// Raw mode for the guard's lifetime. If raw mode was already on when the
/// guard was made, it is left on.
pub struct RawModeGuard {
    owned: bool,
}

impl RawModeGuard {
    pub fn new() -> io::Result<Self> {
        if is_raw_mode_enabled()? {
            return Ok(Self { owned: false });
        }
        enable_raw_mode()?;
        Ok(Self { owned: true })
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if self.owned {
            let _ = disable_raw_mode();
        }
    }
}
