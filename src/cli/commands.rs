/// Entries of the main menu, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuCommand {
    View,
    Add,
    Update,
    Delete,
    Summary,
    SetLimit,
    Export,
    Exit,
}

impl MenuCommand {
    pub const ALL: [MenuCommand; 8] = [
        MenuCommand::View,
        MenuCommand::Add,
        MenuCommand::Update,
        MenuCommand::Delete,
        MenuCommand::Summary,
        MenuCommand::SetLimit,
        MenuCommand::Export,
        MenuCommand::Exit,
    ];

    pub fn label(self) -> &'static str {
        match self {
            MenuCommand::View => "View all expenses",
            MenuCommand::Add => "Add new expense",
            MenuCommand::Update => "Update an expense",
            MenuCommand::Delete => "Delete an expense",
            MenuCommand::Summary => "Show expenses summary",
            MenuCommand::SetLimit => "Set monthly budget limit",
            MenuCommand::Export => "Export to .csv file",
            MenuCommand::Exit => "Exit",
        }
    }

    pub fn labels() -> Vec<String> {
        Self::ALL.iter().map(|cmd| cmd.label().to_string()).collect()
    }

    pub fn from_index(index: usize) -> Option<MenuCommand> {
        Self::ALL.get(index).copied()
    }
}

/// Whether the menu loop keeps going after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn menu_order_is_fixed() {
        assert_eq!(MenuCommand::from_index(0), Some(MenuCommand::View));
        assert_eq!(MenuCommand::from_index(7), Some(MenuCommand::Exit));
        assert_eq!(MenuCommand::from_index(8), None);
        assert_eq!(MenuCommand::labels().len(), 8);
    }
}
