use fintrack_core::GoalService;
use fintrack_domain::Displayable;

use crate::cli::{
    context::CliContext,
    output,
    table::{Table, TableColumn},
    GoalCommand,
};
use crate::errors::Result;

pub fn handle(ctx: &CliContext, user: Option<&str>, action: GoalCommand) -> Result<()> {
    match action {
        GoalCommand::Add { name, target } => {
            let mut session = ctx.open_session(user)?;
            let id = session.add_goal(&name, target)?;
            output::success(format!("Goal `{name}` added ({id})."));
        }
        GoalCommand::Fund { id, amount } => {
            let mut session = ctx.open_session(user)?;
            session.update_goal_amount(&id, amount)?;
            output::success(format!("Goal {id} updated."));
        }
        GoalCommand::Remove { id } => {
            let mut session = ctx.open_session(user)?;
            let removed = session.remove_goal(&id)?;
            output::success(format!("Removed goal {}.", removed.display_label()));
        }
        GoalCommand::List => list(ctx, user)?,
    }
    Ok(())
}

fn list(ctx: &CliContext, user: Option<&str>) -> Result<()> {
    let session = ctx.open_session(user)?;
    if session.goals().is_empty() {
        output::info("No saving goals.");
        return Ok(());
    }
    let currency = &session.profile().currency;
    let mut table = Table::new(vec![
        TableColumn::left("Goal").max_width(28),
        TableColumn::right("Saved"),
        TableColumn::right("Target"),
        TableColumn::right("Progress"),
        TableColumn::left("Id"),
    ]);
    for goal in session.goals() {
        table.push_row(vec![
            goal.name.clone(),
            ctx.money(goal.current_amount, currency),
            ctx.money(goal.target_amount, currency),
            format!("{:.0}%", goal.progress_percent()),
            goal.id.clone(),
        ]);
    }
    println!("{}", table.render());

    let (saved, target) = GoalService::totals(session.goals());
    output::info(format!(
        "Total saved {} of {}",
        ctx.money(saved, currency),
        ctx.money(target, currency)
    ));
    Ok(())
}
