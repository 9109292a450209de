use fintrack_core::{BudgetService, GoalService, SummaryService};

use crate::cli::{
    context::CliContext,
    output,
    table::{Table, TableColumn},
};
use crate::errors::Result;

pub fn show(ctx: &CliContext, user: Option<&str>) -> Result<()> {
    let session = ctx.open_session(user)?;
    let today = ctx.today();
    let txns = session.transactions();
    let currency = &session.profile().currency;
    let money = |amount: f64| ctx.money(amount, currency);

    output::section(format!("{} ({today})", session.profile().name));
    let totals = SummaryService::totals(txns);
    output::info(format!("Balance   {}", money(totals.balance)));
    output::info(format!("Income    {}", money(totals.income)));
    output::info(format!("Expenses  {}", money(totals.expenses)));

    let trends = SummaryService::trends(txns, today);
    output::info(format!(
        "vs last month: income {:+.1}%, expenses {:+.1}%, balance {:+.1}%",
        trends.income, trends.expense, trends.balance
    ));
    if let Some(latest) = SummaryService::latest(txns) {
        output::info(format!(
            "Latest: {} {} on {}",
            latest.description,
            money(latest.amount),
            latest.date
        ));
    }

    let performance = SummaryService::default_performance(txns);
    if !performance.is_empty() {
        output::section("Monthly performance");
        let mut table = Table::new(vec![
            TableColumn::left("Month"),
            TableColumn::right("Income"),
            TableColumn::right("Expense"),
            TableColumn::right("Relative"),
        ]);
        for month in performance {
            table.push_row(vec![
                month.period.to_string(),
                money(month.income),
                money(month.expense),
                format!("{:.0}%", month.percentage),
            ]);
        }
        println!("{}", table.render());
    }

    let daily = SummaryService::default_daily_net(txns);
    if !daily.is_empty() {
        output::section("Recent days");
        let mut table = Table::new(vec![TableColumn::left("Date"), TableColumn::right("Net")]);
        for day in daily {
            table.push_row(vec![day.date.to_string(), money(day.net)]);
        }
        println!("{}", table.render());
    }

    let budgets = BudgetService::progress(txns, session.budgets(), today);
    if !budgets.is_empty() {
        output::section("Budgets");
        for row in budgets {
            let line = format!(
                "{:<14} {} / {} ({:.0}%)",
                row.category.label(),
                money(row.spent),
                money(row.limit),
                row.percent
            );
            if row.is_over() {
                output::warning(line);
            } else {
                output::info(line);
            }
        }
    }

    if !session.goals().is_empty() {
        let (saved, target) = GoalService::totals(session.goals());
        output::section("Saving goals");
        output::info(format!("{} saved of {}", money(saved), money(target)));
        let monthly_goal = session.profile().monthly_goal;
        if monthly_goal > 0.0 {
            output::info(format!("Monthly saving goal {}", money(monthly_goal)));
        }
    }
    Ok(())
}
