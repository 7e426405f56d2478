use clap::{Args, Parser, Subcommand};

use passwdgen::Settings;

/// Secure password generator. Run without a command for the menu.
#[derive(Parser, Debug)]
#[command(name = "passwdgen", version, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate passwords from command-line options
    Generate(GenerateFlags),
    /// Answer prompts to configure and generate passwords
    Interactive,
}

#[derive(Args, Debug)]
pub struct GenerateFlags {
    /// Characters per password (4-128)
    #[arg(short, long, default_value_t = 16, value_parser = clap::value_parser!(u16).range(4..=128))]
    pub length: u16,

    /// How many passwords to generate (1-10)
    #[arg(short, long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(1..=10))]
    pub count: u8,

    /// Include digits [default]
    #[arg(long = "include-digits", overrides_with = "no_digits")]
    pub include_digits: bool,

    /// Leave digits out
    #[arg(long = "no-digits", overrides_with = "include_digits")]
    pub no_digits: bool,

    /// Include punctuation [default]
    #[arg(long = "include-punct", overrides_with = "no_punct")]
    pub include_punct: bool,

    /// Leave punctuation out
    #[arg(long = "no-punct", overrides_with = "include_punct")]
    pub no_punct: bool,

    /// Drop look-alike characters (l, 1, I, O, 0)
    #[arg(long = "exclude-ambiguous", overrides_with = "include_ambiguous")]
    pub exclude_ambiguous: bool,

    /// Keep look-alike characters [default]
    #[arg(long = "include-ambiguous", overrides_with = "exclude_ambiguous")]
    pub include_ambiguous: bool,

    /// Use exactly these characters instead of the built-in sets
    #[arg(long, value_name = "CHARS")]
    pub charset: Option<String>,

    /// Print bare passwords, one per line
    #[arg(short, long)]
    pub quiet: bool,
}

impl GenerateFlags {
    pub fn settings(&self) -> Settings {
        Settings {
            pass_length: self.length.into(),
            number_of_passwords: self.count.into(),
            include_digits: self.include_digits || !self.no_digits,
            include_punctuation: self.include_punct || !self.no_punct,
            exclude_ambiguous: self.exclude_ambiguous && !self.include_ambiguous,
            explicit_chars: self.charset.clone(),
        }
    }
}
