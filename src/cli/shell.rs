//! Shell loop: interactive menu mode and line-oriented script mode.

use std::io::{self, BufRead};

use crate::cli::commands::{self, LoopControl, MenuAction};
use crate::cli::menus::{MainMenu, MenuError};
use crate::cli::{io as cli_io, output, CliMode, CommandError, ShellContext};

/// Environment variable that switches the shell into script mode.
pub const SCRIPT_MODE_ENV: &str = "TRACKER_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CommandError> {
    let mode = if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };
    let mut context = ShellContext::new(mode);

    match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    }
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CommandError> {
    let mut menu = MainMenu::new();
    while context.running {
        let action = match menu.show(&context.banner()) {
            Ok(action) => action,
            Err(MenuError::Interrupted) => {
                if cli_io::confirm_action(&context.theme, "Exit the tracker?", true)? {
                    break;
                }
                continue;
            }
            Err(MenuError::EndOfInput) => break,
            Err(MenuError::Io(err)) => return Err(err.into()),
        };

        match commands::dispatch(context, action) {
            Ok(LoopControl::Continue) => cli_io::pause(&context.theme)?,
            Ok(LoopControl::Exit) => break,
            Err(CommandError::EndOfInput) => break,
            Err(err) => {
                output::error(err);
                cli_io::pause(&context.theme)?;
            }
        }
    }
    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CommandError> {
    while context.running {
        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let Some(action) = MenuAction::parse(trimmed) else {
            output::error("Invalid choice. Try again.");
            continue;
        };
        match commands::dispatch(context, action) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(CommandError::EndOfInput) => break,
            Err(err) => output::error(err),
        }
    }
    Ok(())
}
