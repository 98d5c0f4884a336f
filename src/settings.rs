use std::fmt;
use std::path::Path;
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

const DB_ENV_KEYS: [&str; 6] = ["host", "user", "password", "name", "port", "ssl_mode"];

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Settings {
    pub port: u16,
    pub debug: bool,
    pub enable_swagger: bool,
    pub query_timeout_secs: u64,
    pub max_connections: u32,
    pub database: DatabaseSettings,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct DatabaseSettings {
    pub host: String,
    pub user: String,
    pub password: String,
    pub name: String,
    pub port: u16,
    #[serde(default = "default_ssl_mode")]
    pub ssl_mode: String,
}

fn default_ssl_mode() -> String {
    "disable".to_string()
}

impl fmt::Debug for DatabaseSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseSettings")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"***")
            .field("name", &self.name)
            .field("port", &self.port)
            .field("ssl_mode", &self.ssl_mode)
            .finish()
    }
}

impl Settings {
    /// Loads `.env` (if present) into the process environment, then reads settings.
    pub fn from_env() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Reads `settings.toml` (optional), `APP_*` variables and the `DB_*` connection variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_file(Path::new("settings.toml"))
    }

    /// Like [`Settings::load`], reading the optional settings file from `path`.
    /// Environment variables take precedence over the file.
    pub fn load_with_file(path: &Path) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .add_source(File::from(path).required(false))
            // Load from environment variables with APP_ prefix
            .add_source(Environment::with_prefix("APP"))
            .set_default("port", 3000)?
            .set_default("debug", false)?
            .set_default("enable_swagger", true)?
            .set_default("query_timeout_secs", 10)?
            .set_default("max_connections", 5)?;

        // DB_HOST, DB_USER, ... map onto the nested `database` table.
        for key in DB_ENV_KEYS {
            let value = std::env::var(format!("DB_{}", key.to_uppercase())).ok();
            builder = builder.set_override_option(format!("database.{key}"), value)?;
        }

        let settings: Self = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.query_timeout_secs == 0 {
            return Err(ConfigError::Message(
                "query_timeout_secs must be greater than 0".into(),
            ));
        }
        if self.max_connections == 0 {
            return Err(ConfigError::Message(
                "max_connections must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn query_timeout(&self) -> Duration {
        Duration::from_secs(self.query_timeout_secs)
    }
}
