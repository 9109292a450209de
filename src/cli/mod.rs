//! The `fintrack` command-line front end.
//!
//! Every command that touches a user opens a [`fintrack_core::UserSession`],
//! so recurring items are reconciled on each invocation.

pub mod commands;
pub mod context;
pub mod output;
pub mod table;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::{errors::Result, utils};
use context::CliContext;
use output::OutputPreferences;

#[derive(Parser, Debug)]
#[command(name = "fintrack", version, about = "Personal finance tracker")]
pub struct Cli {
    /// User to act as; defaults to the logged-in user.
    #[arg(long, short, global = true, env = "FINTRACK_USER")]
    pub user: Option<String>,

    /// Application home holding config.json and the data directory.
    #[arg(long, global = true, value_name = "DIR")]
    pub home: Option<PathBuf>,

    /// Disable colours.
    #[arg(long, global = true)]
    pub plain: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Materialize salary and recurring items that are due this month.
    Sync,
    /// Record a transaction.
    Add(AddArgs),
    /// Delete a transaction by id.
    Delete { id: String },
    /// List transactions, newest first.
    List {
        /// Case-insensitive match on category, description or amount.
        #[arg(long, short)]
        search: Option<String>,
        #[arg(long, short = 'n')]
        limit: Option<usize>,
    },
    /// Balances, trends, budgets and goals.
    Summary,
    /// Monthly per-category spending limits.
    Budget {
        #[command(subcommand)]
        action: BudgetCommand,
    },
    /// Saving goals.
    Goal {
        #[command(subcommand)]
        action: GoalCommand,
    },
    /// Monthly recurring items.
    Recurring {
        #[command(subcommand)]
        action: RecurringCommand,
    },
    /// Set the monthly salary; 0 disables it.
    Salary {
        amount: f64,
        /// Day of month the salary is credited.
        #[arg(long)]
        day: Option<u32>,
    },
    /// Create a user with an empty history.
    Register(RegisterArgs),
    /// Make `user` the default for later commands, creating it with sample data if new.
    Login { user: String },
    /// Forget the default user.
    Logout,
    /// Mask amounts in output.
    Privacy { state: Toggle },
    /// Delete every stored record of the user.
    DeleteAccount {
        /// Confirm the deletion.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Args, Debug)]
pub struct AddArgs {
    /// `income` or `expense`.
    pub kind: String,
    pub amount: f64,
    /// Category name, e.g. food, rent, transport.
    pub category: String,
    pub description: String,
    /// Booking date (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    pub date: Option<String>,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    pub user: String,
    #[arg(long)]
    pub salary: Option<f64>,
    #[arg(long)]
    pub salary_day: Option<u32>,
    /// Currency symbol; defaults to the configured one.
    #[arg(long)]
    pub currency: Option<String>,
    #[arg(long)]
    pub country: Option<String>,
    #[arg(long, default_value_t = 500.0)]
    pub monthly_goal: f64,
}

#[derive(Subcommand, Debug)]
pub enum BudgetCommand {
    Set { category: String, limit: f64 },
    Remove { category: String },
    Show,
}

#[derive(Subcommand, Debug)]
pub enum GoalCommand {
    Add { name: String, target: f64 },
    /// Set the saved amount of a goal.
    Fund { id: String, amount: f64 },
    Remove { id: String },
    List,
}

#[derive(Subcommand, Debug)]
pub enum RecurringCommand {
    Add {
        description: String,
        amount: f64,
        #[arg(long, default_value = "expense")]
        kind: String,
        #[arg(long, default_value = "utilities")]
        category: String,
        #[arg(long, default_value_t = 1)]
        day: u32,
    },
    Remove { id: String },
    List,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Toggle {
    On,
    Off,
}

/// Parses arguments, prepares the context and dispatches.
pub fn run(cli: Cli) -> Result<()> {
    output::set_preferences(OutputPreferences { plain: cli.plain });
    let home = utils::resolve_home(cli.home.clone());
    let ctx = CliContext::load(home, utils::clock_from_env()?)?;
    if !ctx.config().ui_color_enabled {
        output::set_preferences(OutputPreferences { plain: true });
    }
    let user = cli.user.as_deref();

    match cli.command {
        Command::Sync => commands::account::sync(&ctx, user),
        Command::Add(args) => commands::transactions::add(&ctx, user, args),
        Command::Delete { id } => commands::transactions::delete(&ctx, user, &id),
        Command::List { search, limit } => {
            commands::transactions::list(&ctx, user, search.as_deref(), limit)
        }
        Command::Summary => commands::summary::show(&ctx, user),
        Command::Budget { action } => commands::budgets::handle(&ctx, user, action),
        Command::Goal { action } => commands::goals::handle(&ctx, user, action),
        Command::Recurring { action } => commands::recurring::handle(&ctx, user, action),
        Command::Salary { amount, day } => commands::account::salary(&ctx, user, amount, day),
        Command::Register(args) => commands::account::register(&ctx, args),
        Command::Login { user } => commands::account::login(&ctx, &user),
        Command::Logout => commands::account::logout(&ctx),
        Command::Privacy { state } => commands::account::privacy(&ctx, state),
        Command::DeleteAccount { yes } => commands::account::delete_account(&ctx, user, yes),
    }
}
