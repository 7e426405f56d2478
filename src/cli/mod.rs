//! Command-line commands: `generate` and `interactive`.

mod flags;
pub mod prompts;

use std::io::{self, Write};

use anyhow::Result;
use tracing::debug;
use zeroize::Zeroize;

use passwdgen::{Password, Settings, pass};

use crate::terminal::{Padding, render_panel};

pub use flags::{Cli, Command};

pub fn run(command: Command) -> Result<()> {
    match command {
        Command::Generate(flags) => {
            debug!(?flags, "generate");
            let passwords = pass::generate_batch(&flags.settings())?;
            if flags.quiet {
                print_plain(&passwords)
            } else {
                print_panels(&passwords, Padding::ROOMY, false);
                Ok(())
            }
        }
        Command::Interactive => {
            let settings: Settings = prompts::ask_settings()?;
            debug!(?settings, "interactive");
            let passwords = pass::generate_batch(&settings)?;
            print_panels(&passwords, Padding::ROOMY, false);
            Ok(())
        }
    }
}

/// One panel per password, titled `Password #n`.
pub fn print_panels(passwords: &[Password], padding: Padding, bold: bool) {
    for (i, pass) in passwords.iter().enumerate() {
        let mut panel = render_panel(
            &format!("Password #{}", i + 1),
            &[pass.as_str()],
            padding,
            bold,
        );
        print!("{panel}");
        panel.zeroize();
    }
}

fn print_plain(passwords: &[Password]) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    for pass in passwords {
        writeln!(out, "{}", pass.as_str())?;
    }
    out.flush()?;
    Ok(())
}
