use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// The file could not be read, or its contents do not match the settings types.
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    /// A value parsed correctly but is outside its allowed range.
    #[error("Invalid configuration value for '{key}': {reason}")]
    Invalid { key: String, reason: String },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            reason: reason.into(),
        }
    }
}
