use std::io::{self, Stdout, Write};

use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    style::{Attribute, SetAttribute},
    terminal::{self, ClearType},
    ExecutableCommand,
};

use crate::cli::commands::MenuAction;

const NAV_HINT: &str = "Use ↑/↓ to navigate · Enter to run · digits jump straight to an action";

#[derive(Clone, Copy)]
struct MenuEntry {
    action: MenuAction,
    label: &'static str,
}

#[derive(Debug)]
pub enum MenuError {
    Interrupted,
    EndOfInput,
    Io(io::Error),
}

impl From<io::Error> for MenuError {
    fn from(err: io::Error) -> Self {
        MenuError::Io(err)
    }
}

/// Interactive main menu rendered inside the shell loop.
pub struct MainMenu {
    entries: Vec<MenuEntry>,
    selected_index: usize,
}

impl MainMenu {
    pub fn new() -> Self {
        let entries = vec![
            MenuEntry {
                action: MenuAction::AddIncome,
                label: "Add income",
            },
            MenuEntry {
                action: MenuAction::AddExpense,
                label: "Add expense",
            },
            MenuEntry {
                action: MenuAction::ViewTransactions,
                label: "View transactions",
            },
            MenuEntry {
                action: MenuAction::SetBudgetLimits,
                label: "Set budget limits",
            },
            MenuEntry {
                action: MenuAction::ViewNotifications,
                label: "View notifications",
            },
            MenuEntry {
                action: MenuAction::Exit,
                label: "Exit",
            },
        ];
        Self {
            entries,
            selected_index: 0,
        }
    }

    /// Render the menu, capture keyboard navigation, and return the chosen
    /// action. Digits 1-6 select and run an entry directly.
    pub fn show(&mut self, banner: &str) -> Result<MenuAction, MenuError> {
        let mut stdout = io::stdout();
        terminal::enable_raw_mode()?;
        stdout.execute(cursor::Hide)?;

        let loop_result = loop {
            self.render(&mut stdout, banner)?;

            let event = event::read()?;
            let Event::Key(key) = event else { continue };
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                match key.code {
                    KeyCode::Char('c') | KeyCode::Char('C') => break Err(MenuError::Interrupted),
                    KeyCode::Char('d') | KeyCode::Char('D') => break Err(MenuError::EndOfInput),
                    _ => continue,
                }
            }

            match key.code {
                KeyCode::Up => self.move_selection(-1),
                KeyCode::Down => self.move_selection(1),
                KeyCode::Home => self.selected_index = 0,
                KeyCode::End => self.selected_index = self.entries.len().saturating_sub(1),
                KeyCode::Enter => break Ok(self.entries[self.selected_index].action),
                KeyCode::Char(ch) => {
                    if let Some(index) = digit_index(ch) {
                        if index < self.entries.len() {
                            self.selected_index = index;
                            break Ok(self.entries[index].action);
                        }
                    }
                }
                _ => continue,
            }
        };

        let clear_outcome = self.clear_screen(&mut stdout);
        stdout.execute(cursor::Show).ok();
        terminal::disable_raw_mode().ok();

        clear_outcome?;
        loop_result
    }

    fn move_selection(&mut self, delta: isize) {
        let len = self.entries.len() as isize;
        if len == 0 {
            return;
        }
        let next = (self.selected_index as isize + delta).rem_euclid(len);
        self.selected_index = next as usize;
    }

    fn render(&self, stdout: &mut Stdout, banner: &str) -> Result<(), io::Error> {
        self.clear_screen(stdout)?;
        writeln!(stdout, "{banner}")?;
        writeln!(stdout, "{NAV_HINT}")?;
        writeln!(stdout)?;

        for (index, entry) in self.entries.iter().enumerate() {
            if index == self.selected_index {
                stdout.execute(SetAttribute(Attribute::Reverse))?;
            } else {
                stdout.execute(SetAttribute(Attribute::Reset))?;
            }
            write!(stdout, "  {}. {}", index + 1, entry.label)?;
            stdout.execute(SetAttribute(Attribute::Reset))?;
            writeln!(stdout)?;
        }

        stdout.flush()?;
        Ok(())
    }

    fn clear_screen(&self, stdout: &mut Stdout) -> Result<(), io::Error> {
        stdout.execute(terminal::Clear(ClearType::All))?;
        stdout.execute(cursor::MoveTo(0, 0))?;
        Ok(())
    }
}

impl Default for MainMenu {
    fn default() -> Self {
        Self::new()
    }
}

fn digit_index(ch: char) -> Option<usize> {
    ch.to_digit(10)
        .and_then(|digit| (digit as usize).checked_sub(1))
}
