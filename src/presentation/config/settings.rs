use config::{Config, File};
use serde::Deserialize;

use super::{Environment, SettingsError};

/// Room service settings.
///
/// Sources, lowest precedence first: built-in defaults, the optional
/// `appsettings.{environment}` file, then `APP__SECTION__KEY` variables.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub database: DatabaseSettings,
    pub logging: LoggingSettings,
    pub api: ApiSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DatabaseSettings {
    pub url: String,
    pub max_connections: u32,
    pub run_migrations: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    pub level: String,
    pub enable_json: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiSettings {
    pub version: String,
}

impl Settings {
    pub fn load() -> Result<Self, SettingsError> {
        dotenvy::dotenv().ok();

        let environment: Environment = std::env::var("APP_ENVIRONMENT")
            .unwrap_or_else(|_| "local".into())
            .try_into()
            .map_err(SettingsError::InvalidEnvironment)?;

        Self::load_from(
            environment,
            config::Environment::with_prefix("APP")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
    }

    pub fn load_from(
        environment: Environment,
        env_source: config::Environment,
    ) -> Result<Self, SettingsError> {
        let configuration = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8071)?
            .set_default("database.max_connections", 10)?
            .set_default("database.run_migrations", true)?
            .set_default("logging.level", "info")?
            .set_default("logging.enable_json", false)?
            .set_default("api.version", "v1.0")?
            .add_source(File::with_name(&environment.settings_file()).required(false))
            .add_source(env_source)
            .build()?;

        Ok(configuration.try_deserialize()?)
    }
}
