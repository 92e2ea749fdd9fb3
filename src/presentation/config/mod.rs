mod environment;
mod settings;
mod summary_settings;

pub use environment::Environment;
pub use settings::{ApiSettings, DatabaseSettings, LoggingSettings, ServerSettings, Settings};
pub use summary_settings::{SummarySettings, get_settings};

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("invalid environment: {0}")]
    InvalidEnvironment(String),
    #[error("configuration: {0}")]
    Config(#[from] config::ConfigError),
}
