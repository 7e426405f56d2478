use std::io::{self, BufRead};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers, read};
use crossterm::style::Stylize;

use crate::terminal::{RawModeGuard, flush, reset_terminal};

/// Outcome of a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Esc or Ctrl+Q.
    Cancel,
    /// stdin reached end of file.
    Closed,
}

/// Read one line with in-place editing (arrows, Home/End, Backspace/Delete,
/// Ctrl+U). Falls back to a plain stdin read when raw mode is unavailable.
pub fn read_line(prompt: &str) -> Input {
    let guard = match RawModeGuard::enable() {
        Ok(g) => g,
        Err(_) => return read_cooked(prompt),
    };

    let prompt_width = prompt.chars().count() + 2;
    let mut input: Vec<char> = Vec::new();
    let mut cursor = 0;
    let mut cancelled = false;

    print!("{}: ", prompt.magenta().bold());
    flush();

    loop {
        let key = match read() {
            Ok(Event::Key(key)) if key.kind != KeyEventKind::Release => key,
            Ok(_) => continue,
            Err(_) => break,
        };
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => {
                // process::exit skips destructors; leave raw mode first
                reset_terminal();
                println!();
                std::process::exit(130);
            }
            KeyCode::Char('q') if ctrl => {
                cancelled = true;
                break;
            }
            KeyCode::Esc => {
                cancelled = true;
                break;
            }
            KeyCode::Char('u') if ctrl => {
                input.clear();
                cursor = 0;
            }
            KeyCode::Enter => break,
            KeyCode::Backspace => {
                if cursor > 0 {
                    cursor -= 1;
                    input.remove(cursor);
                }
            }
            KeyCode::Delete => {
                if cursor < input.len() {
                    input.remove(cursor);
                }
            }
            KeyCode::Left => cursor = cursor.saturating_sub(1),
            KeyCode::Right => cursor = (cursor + 1).min(input.len()),
            KeyCode::Home => cursor = 0,
            KeyCode::End => cursor = input.len(),
            KeyCode::Char(c) if !ctrl => {
                input.insert(cursor, c);
                cursor += 1;
            }
            _ => {}
        }

        let text: String = input.iter().collect();
        print!("\r\x1b[2K{}: {}", prompt.magenta().bold(), text);
        print!("\x1b[{}G", prompt_width + cursor + 1);
        flush();
    }

    drop(guard);
    println!();

    if cancelled {
        Input::Cancel
    } else {
        Input::Line(input.into_iter().collect())
    }
}

fn read_cooked(prompt: &str) -> Input {
    print!("{}: ", prompt.magenta().bold());
    flush();

    let mut line = String::new();
    match io::stdin().lock().read_line(&mut line) {
        Ok(0) | Err(_) => Input::Closed,
        Ok(_) => Input::Line(line.trim_end_matches(&['\r', '\n'][..]).to_string()),
    }
}

/// Match an answer against the allowed choices. Empty picks `default`.
pub fn pick<'a>(answer: &str, choices: &[&'a str], default: &'a str) -> Option<&'a str> {
    let answer = answer.trim();
    if answer.is_empty() {
        return Some(default);
    }
    choices.iter().copied().find(|c| c.eq_ignore_ascii_case(answer))
}

/// Prompt until the answer is one of `choices`.
pub fn ask_choice(prompt: &str, choices: &[&str], default: &str, show_choices: bool) -> Input {
    let prompt = if show_choices {
        format!("{prompt} [{}] ({default})", choices.join("/"))
    } else {
        format!("{prompt} ({default})")
    };

    loop {
        match read_line(&prompt) {
            Input::Line(answer) => match pick(&answer, choices, default) {
                Some(choice) => return Input::Line(choice.to_string()),
                None => println!("{}", "Please select one of the available options".red()),
            },
            other => return other,
        }
    }
}
