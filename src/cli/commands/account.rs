use fintrack_core::{ProfileService, UserSession};
use fintrack_domain::UserProfile;
use tracing::info;

use crate::cli::{context::CliContext, output, RegisterArgs, Toggle};
use crate::errors::{FintrackError, Result};

pub fn sync(ctx: &CliContext, user: Option<&str>) -> Result<()> {
    let session = ctx.open_session(user)?;
    if session.open_report().created == 0 {
        output::info("Everything due this month is already booked.");
    }
    Ok(())
}

pub fn salary(ctx: &CliContext, user: Option<&str>, amount: f64, day: Option<u32>) -> Result<()> {
    let mut session = ctx.open_session(user)?;
    let created = session.set_salary(amount, day)?;
    match session.profile().salary() {
        Some(salary) => output::success(format!(
            "Salary of {} credited on day {}.",
            ctx.money(salary.amount, &session.profile().currency),
            salary.day_of_month
        )),
        None => output::success("Salary disabled."),
    }
    if created > 0 {
        output::info("This month's salary has been booked.");
    }
    Ok(())
}

pub fn register(ctx: &CliContext, args: RegisterArgs) -> Result<()> {
    let mut profile = UserProfile::new(args.user.trim());
    profile.currency = args.currency.unwrap_or_else(|| ctx.config().currency.clone());
    profile.language = ctx.config().language.code().to_string();
    if let Some(country) = args.country {
        profile.country = country;
    }
    profile.monthly_goal = args.monthly_goal;
    if let Some(amount) = args.salary {
        ProfileService::set_salary(&mut profile, amount, args.salary_day)?;
    }
    profile.tos_accepted = Some(true);

    let session = UserSession::register(ctx.storage(), ctx.clock(), &args.user, profile)?;
    remember(ctx, Some(session.user().to_string()))?;
    output::success(format!("Registered and logged in as `{}`.", session.user()));
    if session.open_report().created > 0 {
        output::info("This month's salary has been booked.");
    }
    Ok(())
}

pub fn login(ctx: &CliContext, user: &str) -> Result<()> {
    let session = ctx.open_session(Some(user))?;
    remember(ctx, Some(session.user().to_string()))?;
    output::success(format!("Logged in as `{}`.", session.user()));
    Ok(())
}

pub fn logout(ctx: &CliContext) -> Result<()> {
    remember(ctx, None)?;
    output::success("Logged out.");
    Ok(())
}

pub fn privacy(ctx: &CliContext, state: Toggle) -> Result<()> {
    let enabled = state == Toggle::On;
    ctx.config_manager()
        .update(|config| config.privacy_mode = enabled)?;
    output::success(if enabled {
        "Privacy mode on; amounts are masked."
    } else {
        "Privacy mode off."
    });
    Ok(())
}

pub fn delete_account(ctx: &CliContext, user: Option<&str>, confirmed: bool) -> Result<()> {
    if !confirmed {
        return Err(FintrackError::Input(
            "deleting an account cannot be undone; pass --yes to confirm".into(),
        ));
    }
    let session = ctx.open_session(user)?;
    let name = session.user().to_string();
    session.delete_account()?;
    if ctx.config().session.as_deref() == Some(name.as_str()) {
        remember(ctx, None)?;
    }
    output::success(format!("Deleted all data of `{name}`."));
    Ok(())
}

fn remember(ctx: &CliContext, user: Option<String>) -> Result<()> {
    info!(user = ?user, home = %ctx.home().display(), "updating active session");
    ctx.config_manager().update(|config| config.session = user)?;
    Ok(())
}
