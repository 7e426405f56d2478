//! Raw mode RAII guard.

use std::io::{self, IsTerminal};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};

/// Raw mode for the lifetime of the guard; cooked mode is restored on drop.
pub struct RawModeGuard(());

impl RawModeGuard {
    /// Enter raw mode. Fails when stdin is not a terminal.
    pub fn enable() -> io::Result<Self> {
        if !io::stdin().is_terminal() {
            return Err(io::Error::other("stdin is not a terminal"));
        }
        enable_raw_mode()?;
        Ok(Self(()))
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
    }
}
