//! Operator console: the numbered menu and line prompts.

pub mod menu;
pub mod prompt;

pub use menu::{render_menu, MenuOption};
pub use prompt::Console;
