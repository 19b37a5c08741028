use crate::error::ConfigError;
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_AI_TIMEOUT_SECS: u64 = 60;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiSettings {
    pub api_key: Option<String>,
    pub model: String,
    pub api_base: String,
    pub timeout: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub cjk_font: Option<PathBuf>,
    pub ai: AiSettings,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Resolves the config from any variable source; blank values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let data_dir = get("STRATKIT_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(|| home_dir(&get).join(".stratkit"));

        let timeout_secs = match get("STRATKIT_AI_TIMEOUT_SECS") {
            Some(raw) => match raw.parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => {
                    return Err(ConfigError::InvalidValue {
                        name: "STRATKIT_AI_TIMEOUT_SECS",
                        value: raw,
                    })
                }
            },
            None => DEFAULT_AI_TIMEOUT_SECS,
        };

        Ok(Self {
            data_dir,
            cjk_font: get("STRATKIT_CJK_FONT").map(PathBuf::from),
            ai: AiSettings {
                api_key: get("GEMINI_API_KEY").or_else(|| get("API_KEY")),
                model: get("STRATKIT_MODEL").unwrap_or_else(|| DEFAULT_MODEL.to_string()),
                api_base: get("STRATKIT_API_BASE")
                    .unwrap_or_else(|| DEFAULT_API_BASE.to_string()),
                timeout: Duration::from_secs(timeout_secs),
            },
        })
    }
}

fn home_dir(get: &impl Fn(&str) -> Option<String>) -> PathBuf {
    get("HOME")
        .or_else(|| get("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Result of the `.env` lookup. It runs before logging is set up so that a
/// `RUST_LOG` from the file takes effect; [`EnvFileStatus::log`] reports it once
/// the subscriber exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnvFileStatus {
    Loaded(PathBuf),
    Failed { path: PathBuf, error: String },
    NotFound(PathBuf),
    NoWorkingDir(String),
}

impl EnvFileStatus {
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => {
                tracing::info!(path = %path.display(), "loaded environment from .env")
            }
            Self::Failed { path, error } => {
                tracing::warn!(path = %path.display(), error = %error, "failed to load .env file")
            }
            Self::NotFound(cwd) => tracing::debug!(
                cwd = %cwd.display(),
                "no .env file found; using process environment only"
            ),
            Self::NoWorkingDir(error) => tracing::warn!(
                error = %error,
                "could not determine current directory for .env lookup"
            ),
        }
    }
}

/// Loads the nearest `.env`, searching the working directory and its ancestors.
pub fn load_env_file() -> EnvFileStatus {
    match std::env::current_dir() {
        Ok(cwd) => load_env_file_from(&cwd),
        Err(err) => EnvFileStatus::NoWorkingDir(err.to_string()),
    }
}

pub fn load_env_file_from(start: &Path) -> EnvFileStatus {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(".env");
        if candidate.exists() {
            return match dotenvy::from_path(&candidate) {
                Ok(()) => EnvFileStatus::Loaded(candidate),
                Err(err) => EnvFileStatus::Failed {
                    path: candidate,
                    error: err.to_string(),
                },
            };
        }
        if !current.pop() {
            return EnvFileStatus::NotFound(start.to_path_buf());
        }
    }
}
