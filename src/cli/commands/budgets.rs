use fintrack_core::BudgetService;

use crate::cli::{
    context::{parse_category, CliContext},
    output,
    table::{Table, TableColumn},
    BudgetCommand,
};
use crate::errors::Result;

pub fn handle(ctx: &CliContext, user: Option<&str>, action: BudgetCommand) -> Result<()> {
    match action {
        BudgetCommand::Set { category, limit } => {
            let category = parse_category(&category)?;
            let mut session = ctx.open_session(user)?;
            session.set_budget(category, limit)?;
            let currency = session.profile().currency.clone();
            output::success(format!(
                "Budget for {category} set to {}.",
                ctx.money(limit, &currency)
            ));
        }
        BudgetCommand::Remove { category } => {
            let category = parse_category(&category)?;
            let mut session = ctx.open_session(user)?;
            if session.remove_budget(category)? {
                output::success(format!("Budget for {category} removed."));
            } else {
                output::warning(format!("No budget set for {category}."));
            }
        }
        BudgetCommand::Show => show(ctx, user)?,
    }
    Ok(())
}

fn show(ctx: &CliContext, user: Option<&str>) -> Result<()> {
    let session = ctx.open_session(user)?;
    let progress = BudgetService::progress(session.transactions(), session.budgets(), ctx.today());
    if progress.is_empty() {
        output::info("No budgets set.");
        return Ok(());
    }
    let currency = &session.profile().currency;
    let mut table = Table::new(vec![
        TableColumn::left("Category"),
        TableColumn::right("Spent"),
        TableColumn::right("Limit"),
        TableColumn::right("Used"),
    ]);
    for row in &progress {
        let used = format!("{:.0}%", row.percent);
        table.push_row(vec![
            row.category.label().to_string(),
            ctx.money(row.spent, currency),
            ctx.money(row.limit, currency),
            if row.is_over() {
                format!("{used} over")
            } else {
                used
            },
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
