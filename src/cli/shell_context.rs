use dialoguer::theme::ColorfulTheme;

use crate::ledger::Ledger;

/// How the shell sources its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Mutable state threaded through every command handler.
pub struct ShellContext {
    pub ledger: Ledger,
    pub mode: CliMode,
    pub theme: ColorfulTheme,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Self {
        Self {
            ledger: Ledger::new(),
            mode,
            theme: ColorfulTheme::default(),
            running: true,
        }
    }

    /// One-line banner shown above the interactive menu.
    pub fn banner(&self) -> String {
        let unread = self.ledger.unread_notifications();
        if unread == 0 {
            "Budget Tracker".to_string()
        } else {
            format!("Budget Tracker ({unread} unread)")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_reports_unread_notifications() {
        let mut context = ShellContext::new(CliMode::Script);
        assert_eq!(context.banner(), "Budget Tracker (1 unread)");

        context.ledger.mark_notifications_read();
        assert_eq!(context.banner(), "Budget Tracker");
    }
}
