use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid TOML syntax in {path}: {source}")]
    InvalidToml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {field}: {value}")]
    InvalidValue { field: String, value: String },

    #[error("{label} must be between 0 and 23.")]
    HourOutOfRange { label: String, value: i64 },

    #[error("Unknown timezone identifier: {zone}")]
    UnknownTimezone { zone: String },

    #[error("Failed to get config directory")]
    NoConfigDirectory,

    #[error("Unknown config key: {key}")]
    UnknownConfigKey { key: String },

    #[error("Failed to serialize config: {0}")]
    SerializationError(#[from] toml::ser::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
