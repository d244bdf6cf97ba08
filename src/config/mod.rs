mod settings;

use config::{Config, ConfigError, Environment, File};

pub use settings::{
    BrokerSettings, LoggingSettings, PartialSettings, ServerSettings, Settings, StoreSettings,
};

/// Prefix for environment overrides, e.g. `ORDERCAST__SERVER__PORT=9000`.
pub const ENV_PREFIX: &str = "ORDERCAST";

const DEFAULT_CONFIG_FILE: &str = "config/default";

/// Loads the configuration from `config/default.*` and environment variables.
/// Values missing from both are taken from `Settings::default()`.
pub fn load_config() -> Result<Settings, ConfigError> {
    load_config_from(DEFAULT_CONFIG_FILE)
}

/// Like [`load_config`] but reads the given file (extension optional). The
/// file does not have to exist.
pub fn load_config_from(path: &str) -> Result<Settings, ConfigError> {
    // A missing .env file is the normal case.
    let _ = dotenvy::dotenv();

    let builder = Config::builder()
        .add_source(File::with_name(path).required(false))
        .add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

    let config = builder.build()?;
    let partial: PartialSettings = config.try_deserialize()?;

    Ok(Settings::merge(partial))
}
