use fintrack_core::ScheduleStatus;
use fintrack_domain::{Displayable, ScheduleDraft};

use crate::cli::{
    context::{parse_category, parse_kind, CliContext},
    output,
    table::{Table, TableColumn},
    RecurringCommand,
};
use crate::errors::Result;

pub fn handle(ctx: &CliContext, user: Option<&str>, action: RecurringCommand) -> Result<()> {
    match action {
        RecurringCommand::Add {
            description,
            amount,
            kind,
            category,
            day,
        } => {
            let draft = ScheduleDraft {
                description,
                amount,
                kind: parse_kind(&kind)?,
                category: parse_category(&category)?,
                day_of_month: day,
            };
            let mut session = ctx.open_session(user)?;
            let (id, created) = session.add_recurring(draft)?;
            output::success(format!("Recurring item {id} added."));
            if created > 0 {
                output::info("It was already due this month and has been booked.");
            }
        }
        RecurringCommand::Remove { id } => {
            let mut session = ctx.open_session(user)?;
            let removed = session.remove_recurring(&id)?;
            output::success(format!(
                "Removed {}; booked transactions stay.",
                removed.display_label()
            ));
        }
        RecurringCommand::List => list(ctx, user)?,
    }
    Ok(())
}

fn status_label(status: ScheduleStatus) -> &'static str {
    match status {
        ScheduleStatus::Materialized => "booked",
        ScheduleStatus::Due => "due",
        ScheduleStatus::Upcoming => "upcoming",
        ScheduleStatus::Skipped => "skipped this month",
    }
}

fn list(ctx: &CliContext, user: Option<&str>) -> Result<()> {
    let session = ctx.open_session(user)?;
    let snapshots = session.schedule_snapshots();
    if snapshots.is_empty() {
        output::info("No salary or recurring items.");
        return Ok(());
    }
    let currency = &session.profile().currency;
    let mut table = Table::new(vec![
        TableColumn::left("Item").max_width(32),
        TableColumn::right("Amount"),
        TableColumn::right("Day"),
        TableColumn::left("Status"),
        TableColumn::left("Id"),
    ]);
    for snap in snapshots {
        table.push_row(vec![
            snap.marker,
            output::amount_cell(snap.kind, ctx.money(snap.amount, currency)),
            snap.day_of_month.to_string(),
            status_label(snap.status).to_string(),
            snap.schedule_id.unwrap_or_else(|| "salary".into()),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
