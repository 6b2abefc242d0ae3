//! Handlers behind each main-menu action.

use chrono::Local;

use crate::cli::{io as cli_io, output, CommandError, ShellContext};
use crate::domain::common::Displayable;
use crate::domain::transaction::MAX_DESCRIPTION_LEN;

/// The six actions the tracker menu offers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    AddIncome,
    AddExpense,
    ViewTransactions,
    SetBudgetLimits,
    ViewNotifications,
    Exit,
}

impl MenuAction {
    /// Parses a script-mode line: the menu number or the action name.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "1" | "income" => Some(Self::AddIncome),
            "2" | "expense" => Some(Self::AddExpense),
            "3" | "transactions" => Some(Self::ViewTransactions),
            "4" | "budgets" | "limits" => Some(Self::SetBudgetLimits),
            "5" | "notifications" => Some(Self::ViewNotifications),
            "6" | "exit" | "quit" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Whether the shell loop keeps going after a dispatched action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Exit,
}

/// Runs the handler for `action`.
pub fn dispatch(
    context: &mut ShellContext,
    action: MenuAction,
) -> Result<LoopControl, CommandError> {
    match action {
        MenuAction::AddIncome => add_income(context)?,
        MenuAction::AddExpense => add_expense(context)?,
        MenuAction::ViewTransactions => view_transactions(context)?,
        MenuAction::SetBudgetLimits => set_budget_limits(context)?,
        MenuAction::ViewNotifications => view_notifications(context)?,
        MenuAction::Exit => {
            output::info("Exiting. Goodbye!");
            context.running = false;
            return Ok(LoopControl::Exit);
        }
    }
    Ok(LoopControl::Continue)
}

fn add_income(context: &mut ShellContext) -> Result<(), CommandError> {
    if context.ledger.transactions_full() {
        output::error("Transaction limit reached!");
        return Ok(());
    }
    let amount = cli_io::prompt_amount(context.mode, &context.theme, "Enter income amount")?;
    let description = cli_io::prompt_text(
        context.mode,
        &context.theme,
        "Enter income description",
        MAX_DESCRIPTION_LEN,
    )?;
    match context.ledger.record_income(amount, &description) {
        Ok(_) => output::success("Income added successfully."),
        Err(err) => output::error(err),
    }
    Ok(())
}

fn add_expense(context: &mut ShellContext) -> Result<(), CommandError> {
    if context.ledger.transactions_full() {
        output::error("Transaction limit reached!");
        return Ok(());
    }
    let amount = cli_io::prompt_amount(context.mode, &context.theme, "Enter expense amount")?;

    output::section("Select category");
    for (index, category) in context.ledger.categories().iter().enumerate() {
        println!("{}. {}", index + 1, category.display_label());
    }
    let selection = cli_io::prompt_selection(context.mode, &context.theme, "Category number")?;
    // Abort before the description prompt so an invalid choice consumes no
    // further input.
    let available = context.ledger.categories().len();
    if selection == 0 || selection > available {
        output::error("Invalid category. Expense not recorded.");
        return Ok(());
    }

    let description = cli_io::prompt_text(
        context.mode,
        &context.theme,
        "Enter expense description",
        MAX_DESCRIPTION_LEN,
    )?;
    match context.ledger.record_expense(amount, selection, &description) {
        Ok(outcome) => {
            if outcome.budget_exceeded {
                output::warning(format!(
                    "Warning: you exceeded the budget for {}!",
                    outcome.category
                ));
                context
                    .ledger
                    .push_notification(&format!("Budget exceeded for {}.", outcome.category));
            }
            output::success("Expense added successfully.");
        }
        Err(err) => output::error(err),
    }
    Ok(())
}

fn view_transactions(context: &ShellContext) -> Result<(), CommandError> {
    let transactions = context.ledger.transactions();
    if transactions.is_empty() {
        output::info("No transactions recorded.");
        return Ok(());
    }

    output::section("Transactions");
    println!(
        "{:<12} {:<20} {:>10} {:<8} {}",
        "Date", "Category", "Amount", "Type", "Description"
    );
    println!("{}", "-".repeat(72));
    for transaction in transactions {
        println!(
            "{:<12} {:<20} {:>10} {:<8} {}",
            transaction
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d"),
            transaction.category,
            format!("${:.2}", transaction.amount),
            transaction.kind,
            transaction.description
        );
    }
    println!("{}", "-".repeat(72));
    println!("Total income:   ${:.2}", context.ledger.total_income());
    println!("Total expenses: ${:.2}", context.ledger.total_expenses());
    println!("Net balance:    ${:.2}", context.ledger.balance());
    Ok(())
}

fn set_budget_limits(context: &mut ShellContext) -> Result<(), CommandError> {
    output::section("Set budget limits");
    let count = context.ledger.categories().len();
    for selection in 1..=count {
        let (name, current) = {
            let category = &context.ledger.categories()[selection - 1];
            (category.name.clone(), category.budget_limit)
        };
        output::info(format!("{name}: current limit ${current:.2}"));
        let new_limit = cli_io::prompt_limit(
            context.mode,
            &context.theme,
            "Enter new budget limit (0 for no limit)",
        )?;
        if let Err(err) = context.ledger.set_budget_limit(selection, new_limit) {
            output::error(err);
        }
    }
    output::success("Budget limits updated.");
    Ok(())
}

fn view_notifications(context: &mut ShellContext) -> Result<(), CommandError> {
    if context.ledger.notifications().is_empty() {
        output::info("No notifications available.");
        return Ok(());
    }

    let unread = context.ledger.unread_notifications();
    output::section(format!("Notifications ({unread} unread)"));
    for notification in context.ledger.notifications() {
        let marker = if notification.is_read { ' ' } else { '*' };
        println!(
            "{} {} {}",
            marker,
            notification
                .timestamp
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M"),
            notification.message
        );
    }
    context.ledger.mark_notifications_read();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::MenuAction;

    #[test]
    fn actions_parse_from_numbers_and_names() {
        assert_eq!(MenuAction::parse("1"), Some(MenuAction::AddIncome));
        assert_eq!(MenuAction::parse(" expense "), Some(MenuAction::AddExpense));
        assert_eq!(MenuAction::parse("EXIT"), Some(MenuAction::Exit));
        assert_eq!(MenuAction::parse("limits"), Some(MenuAction::SetBudgetLimits));
        assert_eq!(MenuAction::parse("7"), None);
        assert_eq!(MenuAction::parse(""), None);
    }
}
