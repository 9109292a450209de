use fintrack_core::{format::DateFormatter, format::IsoDateFormatter, TransactionService};
use fintrack_domain::{Displayable, NewTransaction};

use crate::cli::{
    context::{parse_category, parse_date, parse_kind, CliContext},
    output,
    table::{Table, TableColumn},
    AddArgs,
};
use crate::errors::Result;

pub fn add(ctx: &CliContext, user: Option<&str>, args: AddArgs) -> Result<()> {
    let kind = parse_kind(&args.kind)?;
    let category = parse_category(&args.category)?;
    let date = match args.date.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => ctx.today(),
    };
    let mut session = ctx.open_session(user)?;
    let id = session.add_transaction(NewTransaction {
        amount: args.amount,
        kind,
        category,
        description: args.description,
        date,
    })?;
    output::success(format!("Recorded {kind} {id}."));
    Ok(())
}

pub fn delete(ctx: &CliContext, user: Option<&str>, id: &str) -> Result<()> {
    let mut session = ctx.open_session(user)?;
    let removed = session.delete_transaction(id)?;
    output::success(format!("Deleted {}.", removed.display_label()));
    Ok(())
}

pub fn list(
    ctx: &CliContext,
    user: Option<&str>,
    search: Option<&str>,
    limit: Option<usize>,
) -> Result<()> {
    let session = ctx.open_session(user)?;
    let currency = &session.profile().currency;
    let sorted = TransactionService::list_sorted(session.transactions(), search);
    if sorted.is_empty() {
        output::info("No transactions.");
        return Ok(());
    }

    let mut table = Table::new(vec![
        TableColumn::left("Date"),
        TableColumn::left("Category"),
        TableColumn::left("Description").max_width(32),
        TableColumn::right("Amount"),
        TableColumn::left("Id"),
    ]);
    for txn in sorted.into_iter().take(limit.unwrap_or(usize::MAX)) {
        let sign = if txn.is_income() { "+" } else { "-" };
        table.push_row(vec![
            IsoDateFormatter.format_date(txn.date),
            txn.category.label().to_string(),
            txn.description.clone(),
            output::amount_cell(
                txn.kind,
                format!("{sign}{}", ctx.money(txn.amount, currency)),
            ),
            txn.id.clone(),
        ]);
    }
    println!("{}", table.render());
    Ok(())
}
