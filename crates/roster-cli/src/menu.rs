//! Main menu choices

use crate::{
    error::{CliError, CliResult},
    output::OutputStyle,
};

/// Title shown above the menu
pub const MENU_TITLE: &str = "  STUDENT MANAGEMENT SYSTEM";

/// Prompt for the menu selection
pub const CHOICE_PROMPT: &str = "Enter your choice: ";

/// One entry of the numbered menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    ViewAll,
    Edit,
    Delete,
    Exit,
}

impl MenuChoice {
    /// All choices in menu order
    pub const ALL: [MenuChoice; 5] = [
        MenuChoice::Add,
        MenuChoice::ViewAll,
        MenuChoice::Edit,
        MenuChoice::Delete,
        MenuChoice::Exit,
    ];

    /// Parse a menu selection
    ///
    /// Anything that is not an `i32` is a parse error; numbers outside
    /// 1..=5 are an invalid choice.
    pub fn parse(raw: &str) -> CliResult<Self> {
        let trimmed = raw.trim();
        let number: i32 = trimmed.parse().map_err(|_| CliError::Parse {
            field: "number",
            input: trimmed.to_string(),
        })?;

        match number {
            1 => Ok(MenuChoice::Add),
            2 => Ok(MenuChoice::ViewAll),
            3 => Ok(MenuChoice::Edit),
            4 => Ok(MenuChoice::Delete),
            5 => Ok(MenuChoice::Exit),
            _ => Err(CliError::InvalidChoice {
                input: trimmed.to_string(),
            }),
        }
    }

    pub fn number(&self) -> usize {
        match self {
            MenuChoice::Add => 1,
            MenuChoice::ViewAll => 2,
            MenuChoice::Edit => 3,
            MenuChoice::Delete => 4,
            MenuChoice::Exit => 5,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MenuChoice::Add => "Add Student Record",
            MenuChoice::ViewAll => "View All Records",
            MenuChoice::Edit => "Edit Student Record",
            MenuChoice::Delete => "Delete Student Record",
            MenuChoice::Exit => "Exit",
        }
    }
}

/// Render the full menu
pub fn render_menu(style: &OutputStyle) -> String {
    let mut lines = vec![String::new(), style.banner(MENU_TITLE)];
    lines.extend(
        MenuChoice::ALL
            .iter()
            .map(|choice| style.numbered_item(choice.number(), choice.label())),
    );
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_choices() {
        for choice in MenuChoice::ALL {
            let parsed = MenuChoice::parse(&choice.number().to_string()).unwrap();
            assert_eq!(parsed, choice);
        }
        assert_eq!(MenuChoice::parse(" 5 ").unwrap(), MenuChoice::Exit);
    }

    #[test]
    fn test_parse_out_of_range() {
        assert!(matches!(
            MenuChoice::parse("0"),
            Err(CliError::InvalidChoice { .. })
        ));
        assert!(matches!(
            MenuChoice::parse("6"),
            Err(CliError::InvalidChoice { .. })
        ));
        assert!(matches!(
            MenuChoice::parse("-1"),
            Err(CliError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_parse_non_numeric() {
        assert!(matches!(
            MenuChoice::parse("add"),
            Err(CliError::Parse { .. })
        ));
        assert!(matches!(MenuChoice::parse(""), Err(CliError::Parse { .. })));
    }

    #[test]
    fn test_parse_beyond_i32_is_non_numeric() {
        assert!(matches!(
            MenuChoice::parse("3000000000"),
            Err(CliError::Parse { field: "number", .. })
        ));
        assert!(matches!(
            MenuChoice::parse("2147483647"),
            Err(CliError::InvalidChoice { .. })
        ));
    }

    #[test]
    fn test_render_menu_lists_every_choice() {
        let menu = render_menu(&OutputStyle::plain());
        assert!(menu.contains("STUDENT MANAGEMENT SYSTEM"));
        assert!(menu.contains("1. Add Student Record"));
        assert!(menu.contains("2. View All Records"));
        assert!(menu.contains("3. Edit Student Record"));
        assert!(menu.contains("4. Delete Student Record"));
        assert!(menu.contains("5. Exit"));
    }
}
