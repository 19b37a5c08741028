use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize state: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl StorageError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value for {name}: {value:?}")]
    InvalidValue { name: &'static str, value: String },
}

#[derive(Debug, Error)]
pub enum AiError {
    #[error("no API key configured (set GEMINI_API_KEY)")]
    NotConfigured,
    #[error("tokio runtime unavailable: {0}")]
    Runtime(String),
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("model endpoint returned status {status}: {body}")]
    Status { status: u16, body: String },
    #[error("could not decode model response: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("model returned no text")]
    EmptyResponse,
}
