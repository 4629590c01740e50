use thiserror::Error;

#[derive(Debug, Error)]
pub enum SlimeError {
    #[error("Invalid setting '{name}': {reason}")]
    InvalidSetting { name: &'static str, reason: String },
    #[error("{0}")]
    Config(#[from] config::ConfigError),
    #[error("The simulation has no active run, reconfigure it with valid settings first")]
    NotInitialized,
}

impl SlimeError {
    pub(crate) fn invalid_setting(name: &'static str, reason: impl Into<String>) -> Self {
        SlimeError::InvalidSetting {
            name,
            reason: reason.into(),
        }
    }
}
