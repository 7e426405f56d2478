use crossterm::style::Stylize;

use crate::terminal::{Padding, print_banner, render_panel};

pub fn enter_prompt() -> &'static str {
    "Press Enter to return to the menu..."
}

pub fn print_main_menu() {
    print_banner();
    print!(
        "{}",
        render_panel(
            "Menu",
            &["1. Generate password", "0. Exit"],
            Padding::COMPACT,
            true
        )
    );
}

pub fn print_goodbye() {
    println!("{}", "Goodbye!".magenta().bold());
}
