use serde::{de::Deserializer, Deserialize, Serialize};
use std::{
    fmt,
    path::{Path, PathBuf},
};

const HOME_DIR_NAME: &str = ".fintrack";
const DATA_DIR_NAME: &str = "data";

/// Stores user-configurable CLI preferences and the active session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    #[serde(default)]
    pub language: Language,
    /// Masks every amount in command output.
    #[serde(default)]
    pub privacy_mode: bool,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
    /// Username used when a command does not name one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    /// Optional custom directory for user documents. Defaults to `<home>/data`.
    pub data_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            language: Language::default(),
            privacy_mode: false,
            ui_color_enabled: Self::default_ui_color_enabled(),
            session: None,
            data_dir: None,
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "€".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// The application home used when neither a flag nor the environment names one.
    pub fn default_home_dir() -> PathBuf {
        let base = dirs::home_dir()
            .or_else(dirs::data_dir)
            .unwrap_or_else(|| PathBuf::from("."));

        base.join(HOME_DIR_NAME)
    }

    pub fn resolve_data_dir(&self, home: &Path) -> PathBuf {
        if let Some(path) = &self.data_dir {
            return path.clone();
        }
        home.join(DATA_DIR_NAME)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "de")]
    German,
}

impl Language {
    fn from_value(value: Option<String>) -> Self {
        value
            .map(|v| Language::from_code(v.trim()))
            .unwrap_or_default()
    }

    /// Unknown codes fall back to English.
    pub fn from_code(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "de" | "deutsch" | "german" => Language::German,
            _ => Language::English,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            Language::English => "en",
            Language::German => "de",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl<'de> Deserialize<'de> for Language {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(Language::from_value(value))
    }
}
