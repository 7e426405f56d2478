//! Line prompts for the `interactive` command, and error output.

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use crossterm::style::Stylize;

use passwdgen::Settings;
use passwdgen::settings::{DEFAULT_LENGTH, MAX_COUNT, MAX_LENGTH, MIN_LENGTH};

/// Print an error message to stderr (red). Never suppressed.
pub fn error(msg: &str) {
    eprintln!("{}", msg.red().bold());
}

/// Ask the `interactive` questions on stdin/stdout.
pub fn ask_settings() -> Result<Settings> {
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    ask_settings_from(&mut stdin.lock(), &mut stdout)
}

/// Ask for length, count and the three toggles. Empty answers take the
/// default; unparseable answers are asked again.
pub fn ask_settings_from<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<Settings> {
    let pass_length = ask_number(input, out, "Password length", DEFAULT_LENGTH)?;
    if pass_length < MIN_LENGTH {
        bail!("Password length must be at least {MIN_LENGTH} characters");
    }
    if pass_length > MAX_LENGTH {
        bail!("Password length must be at most {MAX_LENGTH} characters");
    }

    let number_of_passwords = ask_number(input, out, "Number of passwords", 1)?;
    if !(1..=MAX_COUNT).contains(&number_of_passwords) {
        bail!("Number of passwords must be between 1 and {MAX_COUNT}");
    }

    let include_digits = confirm(input, out, "Include digits?", true)?;
    let include_punctuation = confirm(input, out, "Include punctuation?", true)?;
    let exclude_ambiguous = confirm(
        input,
        out,
        "Exclude ambiguous characters (l, 1, I, O, 0)?",
        false,
    )?;

    Ok(Settings {
        pass_length,
        number_of_passwords,
        include_digits,
        include_punctuation,
        exclude_ambiguous,
        explicit_chars: None,
    })
}

fn read_answer<R: BufRead, W: Write>(input: &mut R, out: &mut W, prompt: &str) -> Result<String> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("Failed to read answer")?;
    if read == 0 {
        bail!("Input closed before all questions were answered");
    }
    Ok(line.trim().to_string())
}

fn ask_number<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: usize,
) -> Result<usize> {
    let prompt = format!("{prompt} [{default}]");
    loop {
        let answer = read_answer(input, out, &prompt)?;
        if answer.is_empty() {
            return Ok(default);
        }
        match answer.parse() {
            Ok(n) => return Ok(n),
            Err(_) => writeln!(out, "Error: '{answer}' is not a valid number.")?,
        }
    }
}

fn confirm<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
    default: bool,
) -> Result<bool> {
    let prompt = format!("{prompt} {}", if default { "[Y/n]" } else { "[y/N]" });
    loop {
        let answer = read_answer(input, out, &prompt)?.to_lowercase();
        match answer.as_str() {
            "" => return Ok(default),
            "y" | "yes" => return Ok(true),
            "n" | "no" => return Ok(false),
            _ => writeln!(out, "Error: please answer y or n.")?,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answers(script: &str) -> (Result<Settings>, String) {
        let mut input = Cursor::new(script.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = ask_settings_from(&mut input, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn empty_answers_take_defaults() {
        let (settings, _) = answers("\n\n\n\n\n");
        assert_eq!(settings.unwrap(), Settings::default());
    }

    #[test]
    fn explicit_answers() {
        let (settings, _) = answers("24\n3\nn\nyes\nY\n");
        let settings = settings.unwrap();
        assert_eq!(settings.pass_length, 24);
        assert_eq!(settings.number_of_passwords, 3);
        assert!(!settings.include_digits);
        assert!(settings.include_punctuation);
        assert!(settings.exclude_ambiguous);
    }

    #[test]
    fn bad_answers_are_asked_again() {
        let (settings, out) = answers("abc\n20\n\nmaybe\nn\n\n\n");
        let settings = settings.unwrap();
        assert_eq!(settings.pass_length, 20);
        assert!(!settings.include_digits);
        assert!(out.contains("'abc' is not a valid number"));
        assert!(out.contains("please answer y or n"));
    }

    #[test]
    fn short_length_is_refused() {
        let (settings, _) = answers("3\n");
        let err = settings.unwrap_err().to_string();
        assert!(err.contains("at least 4"), "{err}");
    }

    #[test]
    fn long_length_is_refused() {
        for length in ["129", "18446744073709551615"] {
            let (settings, _) = answers(&format!("{length}\n"));
            let err = settings.unwrap_err().to_string();
            assert!(err.contains("at most 128"), "{err}");
        }
    }

    #[test]
    fn max_length_is_accepted() {
        let (settings, _) = answers("128\n\n\n\n\n");
        assert_eq!(settings.unwrap().pass_length, 128);
    }

    #[test]
    fn count_outside_range_is_refused() {
        for count in ["0", "11"] {
            let (settings, _) = answers(&format!("16\n{count}\n"));
            assert!(settings.is_err(), "count {count} accepted");
        }
    }

    #[test]
    fn closed_input_is_an_error() {
        let (settings, _) = answers("16\n");
        assert!(settings.is_err());
    }

    #[test]
    fn prompts_show_defaults() {
        let (_, out) = answers("\n\n\n\n\n");
        assert!(out.contains("Password length [16]: "));
        assert!(out.contains("Include digits? [Y/n]: "));
        assert!(out.contains("(l, 1, I, O, 0)? [y/N]: "));
    }
}
