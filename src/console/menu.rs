use std::str::FromStr;

use crate::error_handling::types::InvalidOption;

/// Entries of the main menu, numbered as shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuOption {
    Add,
    List,
    Search,
    Delete,
    Modify,
    Exit,
}

impl MenuOption {
    pub const ALL: [MenuOption; 6] = [
        MenuOption::Add,
        MenuOption::List,
        MenuOption::Search,
        MenuOption::Delete,
        MenuOption::Modify,
        MenuOption::Exit,
    ];

    pub fn number(self) -> u8 {
        match self {
            MenuOption::Add => 1,
            MenuOption::List => 2,
            MenuOption::Search => 3,
            MenuOption::Delete => 4,
            MenuOption::Modify => 5,
            MenuOption::Exit => 6,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            MenuOption::Add => "Add record",
            MenuOption::List => "List records",
            MenuOption::Search => "Search record",
            MenuOption::Delete => "Delete record",
            MenuOption::Modify => "Modify record",
            MenuOption::Exit => "Exit",
        }
    }
}

impl FromStr for MenuOption {
    type Err = InvalidOption;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(MenuOption::Add),
            "2" => Ok(MenuOption::List),
            "3" => Ok(MenuOption::Search),
            "4" => Ok(MenuOption::Delete),
            "5" => Ok(MenuOption::Modify),
            "6" => Ok(MenuOption::Exit),
            other => Err(InvalidOption(other.to_string())),
        }
    }
}

/// Full menu text, header included.
pub fn render_menu() -> String {
    let mut text = String::from("\n--- RECORD SYSTEM ---\n");
    for option in MenuOption::ALL {
        text.push_str(&format!("{}. {}\n", option.number(), option.label()));
    }
    text
}
