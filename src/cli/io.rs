//! Prompt helpers shared by every command handler.
//!
//! Interactive mode renders dialoguer prompts; script mode reads one line
//! per prompt from stdin so tests and piped sessions can drive the shell.

use std::io::{self, BufRead};

use dialoguer::{theme::ColorfulTheme, Confirm, Input};

use crate::cli::output;
use crate::cli::{CliMode, CommandError};
use crate::domain::common::clip_text;

/// Prompt for a strictly positive amount, re-asking until the input parses.
pub fn prompt_amount(
    mode: CliMode,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<f64, CommandError> {
    read_number(mode, theme, prompt, false)
}

/// Prompt for a budget limit; zero is accepted and means "no limit".
pub fn prompt_limit(
    mode: CliMode,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<f64, CommandError> {
    read_number(mode, theme, prompt, true)
}

/// Prompt for free-form text, clipped to `max_chars` characters.
pub fn prompt_text(
    mode: CliMode,
    theme: &ColorfulTheme,
    prompt: &str,
    max_chars: usize,
) -> Result<String, CommandError> {
    let raw = match mode {
        CliMode::Script => next_script_line()?,
        CliMode::Interactive => Input::<String>::with_theme(theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?,
    };
    Ok(clip_text(raw.trim(), max_chars))
}

/// Prompt for a 1-based selection.
///
/// Any number is passed through untouched; range checking belongs to the
/// ledger so an out-of-range choice aborts instead of re-prompting.
pub fn prompt_selection(
    mode: CliMode,
    theme: &ColorfulTheme,
    prompt: &str,
) -> Result<usize, CommandError> {
    if mode == CliMode::Script {
        loop {
            let line = next_script_line()?;
            match line.trim().parse::<usize>() {
                Ok(value) => return Ok(value),
                Err(_) => output::error("Invalid input. Please enter a number."),
            }
        }
    }
    Input::<usize>::with_theme(theme)
        .with_prompt(prompt)
        .interact_text()
        .map_err(CommandError::from)
}

/// Prompt the user for confirmation with a yes/no question.
pub fn confirm_action(
    theme: &ColorfulTheme,
    prompt: &str,
    default: bool,
) -> Result<bool, CommandError> {
    Confirm::with_theme(theme)
        .with_prompt(prompt)
        .default(default)
        .interact()
        .map_err(CommandError::from)
}

/// Holds the screen until Enter so command output survives the menu redraw.
pub fn pause(theme: &ColorfulTheme) -> Result<(), CommandError> {
    Input::<String>::with_theme(theme)
        .with_prompt("Press Enter to return to the menu")
        .allow_empty(true)
        .interact_text()?;
    Ok(())
}

fn read_number(
    mode: CliMode,
    theme: &ColorfulTheme,
    prompt: &str,
    allow_zero: bool,
) -> Result<f64, CommandError> {
    if mode == CliMode::Script {
        loop {
            let line = next_script_line()?;
            match line.trim().parse::<f64>() {
                Ok(value) if accepts(value, allow_zero) => return Ok(value),
                _ => output::error("Invalid input. Please enter a number."),
            }
        }
    }
    Input::<f64>::with_theme(theme)
        .with_prompt(prompt)
        .validate_with(move |value: &f64| {
            if accepts(*value, allow_zero) {
                Ok(())
            } else if allow_zero {
                Err("enter a number of 0 or more")
            } else {
                Err("enter a number greater than 0")
            }
        })
        .interact_text()
        .map_err(CommandError::from)
}

fn accepts(value: f64, allow_zero: bool) -> bool {
    value.is_finite() && if allow_zero { value >= 0.0 } else { value > 0.0 }
}

fn next_script_line() -> Result<String, CommandError> {
    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(CommandError::EndOfInput);
    }
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
