use std::{env, path::PathBuf, sync::Arc, sync::Once};

use chrono::NaiveDate;
use fintrack_config::Config;
use fintrack_core::{Clock, FixedClock, SystemClock};

use crate::errors::{FintrackError, Result};

/// Overrides the application home directory.
pub const HOME_ENV: &str = "FINTRACK_HOME";
/// Pins the calendar date seen by every command (`YYYY-MM-DD`).
pub const TODAY_ENV: &str = "FINTRACK_TODAY";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("fintrack=info,fintrack_core=info"));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .try_init()
            .ok();
    });
}

/// `explicit`, then `$FINTRACK_HOME`, then `~/.fintrack`.
pub fn resolve_home(explicit: Option<PathBuf>) -> PathBuf {
    explicit
        .or_else(|| env::var_os(HOME_ENV).map(PathBuf::from))
        .unwrap_or_else(Config::default_home_dir)
}

/// The system clock unless `$FINTRACK_TODAY` pins a date.
pub fn clock_from_env() -> Result<Arc<dyn Clock>> {
    parse_pinned_clock(env::var(TODAY_ENV).ok().as_deref())
}

fn parse_pinned_clock(raw: Option<&str>) -> Result<Arc<dyn Clock>> {
    match raw.map(str::trim).filter(|raw| !raw.is_empty()) {
        Some(raw) => {
            let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
                FintrackError::Input(format!("{TODAY_ENV}=`{raw}` is not a YYYY-MM-DD date"))
            })?;
            Ok(Arc::new(FixedClock::new(date)))
        }
        None => Ok(Arc::new(SystemClock)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_home_wins() {
        let home = resolve_home(Some(PathBuf::from("/opt/ft")));
        assert_eq!(home, PathBuf::from("/opt/ft"));
    }

    #[test]
    fn pinned_date_is_parsed() {
        let clock = parse_pinned_clock(Some(" 2024-02-29 ")).expect("valid date");
        assert_eq!(clock.today(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn malformed_pinned_date_is_rejected() {
        let err = parse_pinned_clock(Some("29/02/2024")).err();
        assert!(matches!(err, Some(FintrackError::Input(msg)) if msg.contains("FINTRACK_TODAY")));
        assert!(parse_pinned_clock(None).is_ok());
    }
}
