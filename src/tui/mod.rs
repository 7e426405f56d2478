//! Interactive menu, shown when no command is given.

mod input;
mod menu;
mod text;

pub use input::*;
pub use menu::*;
pub use text::*;

use crate::exits;
use crate::terminal::reset_terminal;

/// Run the menu until the user exits.
pub fn run() -> anyhow::Result<()> {
    exits::claim_terminal();
    reset_terminal();
    gen_main_menu()
}
