//! Terminal output utilities.
//!
//! Panel drawing, the banner, and ANSI helpers.

use std::fmt::Write as _;
use std::io::{self, Write};

use crossterm::style::Stylize;
use crossterm::terminal::disable_raw_mode;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

// ============================================================================
// Terminal Control
// ============================================================================

/// Clear screen and move cursor to top-left.
pub fn clear() {
    print!("\x1b[2J\x1b[3J\x1b[H");
    flush();
}

/// Flush stdout.
pub fn flush() {
    let _ = io::stdout().flush();
}

/// Leave raw mode and reset colors.
pub fn reset_terminal() {
    let _ = disable_raw_mode();
    print!("\x1b[0m");
    flush();
}

// ============================================================================
// Banner
// ============================================================================

const BANNER: &str = r#" ___              __      _____   ___                       _
| _ \__ _ ______ \ \    / /   \ / __|___ _ _  ___ _ _ __ _| |_ ___ _ _
|  _/ _` (_-<_-<  \ \/\/ /| |) | (_ / -_) ' \/ -_) '_/ _` |  _/ _ \ '_|
|_| \__,_/__/__/   \_/\_/ |___/ \___\___|_||_\___|_| \__,_|\__\___/_|
"#;

pub fn print_banner() {
    for line in BANNER.lines() {
        println!("{}", line.magenta().bold());
    }
    println!();
}

// ============================================================================
// Panels (50 char width)
// ============================================================================

pub const PANEL_WIDTH: usize = 50;

/// Blank lines above/below and columns left/right of the panel body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub vertical: usize,
    pub horizontal: usize,
}

impl Padding {
    pub const ROOMY: Padding = Padding {
        vertical: 1,
        horizontal: 2,
    };
    pub const COMPACT: Padding = Padding {
        vertical: 0,
        horizontal: 1,
    };
}

/// Render a magenta panel:
///
/// ```text
/// ┌─ Title ────────────────────────────────────────┐
/// │  body                                          │
/// └────────────────────────────────────────────────┘
/// ```
///
/// Widths are display columns, so wide glyphs keep the border aligned. Body
/// lines longer than the inner width are wrapped by character.
pub fn render_panel(title: &str, body: &[&str], padding: Padding, bold: bool) -> String {
    let inner = PANEL_WIDTH - 2;
    let text_width = inner.saturating_sub(padding.horizontal * 2).max(1);
    let mut out = String::new();

    let fill = inner.saturating_sub(title.width() + 3);
    let _ = writeln!(
        out,
        "{}{}{}",
        "┌─ ".magenta(),
        title.magenta().bold(),
        format!(" {}┐", "─".repeat(fill)).magenta()
    );

    let blank = format!("{}{}{}", "│".magenta(), " ".repeat(inner), "│".magenta());
    for _ in 0..padding.vertical {
        let _ = writeln!(out, "{blank}");
    }

    for line in body {
        for chunk in wrap(line, text_width) {
            let right = inner.saturating_sub(padding.horizontal + chunk.width());
            let text = if bold {
                chunk.as_str().bold().to_string()
            } else {
                chunk.clone()
            };
            let _ = writeln!(
                out,
                "{}{}{}{}{}",
                "│".magenta(),
                " ".repeat(padding.horizontal),
                text,
                " ".repeat(right),
                "│".magenta()
            );
        }
    }

    for _ in 0..padding.vertical {
        let _ = writeln!(out, "{blank}");
    }

    let _ = writeln!(out, "{}", format!("└{}┘", "─".repeat(inner)).magenta());
    out
}

/// Split `line` into pieces no wider than `width` columns. A glyph wider
/// than `width` gets a piece of its own.
fn wrap(line: &str, width: usize) -> Vec<String> {
    let mut pieces = vec![String::new()];
    let mut used = 0;
    for c in line.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width && used > 0 {
            pieces.push(String::new());
            used = 0;
        }
        if let Some(piece) = pieces.last_mut() {
            piece.push(c);
        }
        used += w;
    }
    pieces
}
