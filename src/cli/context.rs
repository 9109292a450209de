use std::{
    path::{Path, PathBuf},
    sync::Arc,
};

use chrono::NaiveDate;
use fintrack_config::{Config, ConfigManager};
use fintrack_core::{
    format::{AmountFormatter, CurrencyFormatter},
    Clock, KeyValueStorage, UserSession,
};
use fintrack_domain::{Category, TransactionKind};
use fintrack_storage_json::JsonFileStorage;
use tracing::debug;

use crate::{
    cli::output,
    errors::{FintrackError, Result},
};

/// Everything a command needs: config, storage and the clock.
pub struct CliContext {
    home: PathBuf,
    config_manager: ConfigManager,
    config: Config,
    storage: Arc<JsonFileStorage>,
    clock: Arc<dyn Clock>,
}

impl CliContext {
    pub fn load(home: PathBuf, clock: Arc<dyn Clock>) -> Result<Self> {
        let config_manager = ConfigManager::with_base_dir(home.clone())?;
        let config = config_manager.load()?;
        let data_dir = config.resolve_data_dir(&home);
        let storage = Arc::new(JsonFileStorage::new(data_dir)?);
        debug!(home = %home.display(), data = %storage.root().display(), "loaded context");
        Ok(Self {
            home,
            config_manager,
            config,
            storage,
            clock,
        })
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn config_manager(&self) -> &ConfigManager {
        &self.config_manager
    }

    pub fn storage(&self) -> Arc<dyn KeyValueStorage> {
        self.storage.clone()
    }

    pub fn clock(&self) -> Arc<dyn Clock> {
        self.clock.clone()
    }

    pub fn today(&self) -> NaiveDate {
        self.clock.today()
    }

    /// `explicit`, else the logged-in user.
    pub fn resolve_user(&self, explicit: Option<&str>) -> Result<String> {
        explicit
            .map(str::to_string)
            .or_else(|| self.config.session.clone())
            .filter(|user| !user.trim().is_empty())
            .ok_or_else(|| {
                FintrackError::Input(
                    "no user selected; pass --user or run `fintrack login <name>`".into(),
                )
            })
    }

    /// Opens the session of the resolved user and reports what loading did.
    pub fn open_session(&self, explicit: Option<&str>) -> Result<UserSession> {
        let user = self.resolve_user(explicit)?;
        let session = UserSession::open(self.storage(), self.clock(), &user)?;
        let report = session.open_report();
        if report.seeded {
            output::info(format!("Created user `{}` with sample data.", session.user()));
        }
        if report.created > 0 {
            output::info(format!(
                "Added {} recurring transaction(s) for this month.",
                report.created
            ));
        }
        for warning in &report.warnings {
            output::warning(warning);
        }
        Ok(session)
    }

    pub fn formatter(&self) -> AmountFormatter {
        AmountFormatter::new(self.config.privacy_mode)
    }

    pub fn money(&self, amount: f64, currency: &str) -> String {
        self.formatter().format_amount(amount, currency)
    }
}

pub fn parse_kind(raw: &str) -> Result<TransactionKind> {
    raw.parse().map_err(FintrackError::Input)
}

pub fn parse_category(raw: &str) -> Result<Category> {
    raw.parse()
        .map_err(|err: fintrack_domain::UnknownCategory| FintrackError::Input(err.to_string()))
}

pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| FintrackError::Input(format!("`{raw}` is not a YYYY-MM-DD date")))
}
