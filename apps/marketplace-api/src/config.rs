use axum_helpers::CorsPolicy;
use core_config::{AppInfo, FromEnv, app_info, env_is_set, server::ServerConfig};

// Import MongoDB config from the database library
use database::mongodb::MongoConfig;

// Re-export Environment for use in other modules
pub use core_config::Environment;

/// Whether the database variables are present. Values are never kept.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DatabaseEnv {
    pub url_set: bool,
    pub name_set: bool,
}

impl DatabaseEnv {
    pub fn from_env() -> Self {
        Self {
            url_set: env_is_set("DATABASE_URL"),
            name_set: env_is_set("DATABASE_NAME"),
        }
    }
}

/// Application-specific configuration
/// Composes shared config components from the `config` library
#[derive(Clone, Debug)]
pub struct Config {
    pub app: AppInfo,
    /// `None` when no connection string or database name is set; the API
    /// then runs without a store.
    pub mongodb: Option<MongoConfig>,
    pub database_env: DatabaseEnv,
    pub server: ServerConfig,
    pub cors: CorsPolicy,
    pub environment: Environment,
}

impl Config {
    pub fn from_env() -> eyre::Result<Self> {
        let app = app_info!();
        let environment = Environment::from_env();
        let mongodb = MongoConfig::from_env_optional()?
            .map(|config| config.with_app_name(app.name));
        let server = ServerConfig::from_env()?; // HOST=0.0.0.0, PORT=8000 unless set
        let cors = CorsPolicy::from_env()?;

        Ok(Self {
            app,
            mongodb,
            database_env: DatabaseEnv::from_env(),
            server,
            cors,
            environment,
        })
    }
}
