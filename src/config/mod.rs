mod manager;

pub use manager::{
    APP_ID_ENV, Config, ConfigFile, ConfigManager, Credentials, DEFAULT_ENDPOINT, DEFAULT_SALT,
    FyConfig, ResolveOptions, SECRET_ENV, resolve_config,
};
