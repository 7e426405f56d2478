use anyhow::Result;
use tracing::debug;
use zeroize::Zeroize;

use passwdgen::settings::MAX_COUNT;
use passwdgen::{Settings, pass};

use super::{Input, ask_choice, enter_prompt, print_goodbye, print_main_menu, read_line};
use crate::cli::print_panels;
use crate::terminal::{Padding, clear, render_panel};

enum Flow {
    Menu,
    /// stdin closed; leave the loop.
    Quit,
}

pub fn gen_main_menu() -> Result<()> {
    loop {
        clear();
        print_main_menu();

        match ask_choice("Choose an action", &["1", "0"], "1", true) {
            Input::Line(choice) if choice == "1" => {
                if let Flow::Quit = gen_password_menu()? {
                    break;
                }
            }
            Input::Cancel => continue,
            Input::Line(_) | Input::Closed => break,
        }
    }

    print_goodbye();
    Ok(())
}

fn gen_password_menu() -> Result<Flow> {
    let choice = match ask_choice(
        "Choose: 1 - one password, many - several passwords, 0 - back",
        &["1", "many", "0"],
        "1",
        false,
    ) {
        Input::Line(choice) => choice,
        Input::Cancel => return Ok(Flow::Menu),
        Input::Closed => return Ok(Flow::Quit),
    };

    match choice.as_str() {
        "1" => {
            let passwords = pass::generate_batch(&Settings::menu())?;
            for pass in &passwords {
                let mut panel =
                    render_panel("Generated password", &[pass.as_str()], Padding::ROOMY, false);
                print!("{panel}");
                panel.zeroize();
            }
        }
        "many" => {
            let counts: Vec<String> = (1..=MAX_COUNT).map(|n| n.to_string()).collect();
            let counts: Vec<&str> = counts.iter().map(String::as_str).collect();

            let count: usize = match ask_choice("How many passwords? (1-10)", &counts, "3", true) {
                Input::Line(n) => n.parse()?,
                Input::Cancel => return Ok(Flow::Menu),
                Input::Closed => return Ok(Flow::Quit),
            };
            debug!(count, "menu batch");

            let passwords = pass::generate_batch(&Settings::menu().with_count(count))?;
            print_panels(&passwords, Padding::COMPACT, true);
        }
        _ => return Ok(Flow::Menu),
    }

    println!();
    Ok(match read_line(enter_prompt()) {
        Input::Closed => Flow::Quit,
        _ => Flow::Menu,
    })
}
