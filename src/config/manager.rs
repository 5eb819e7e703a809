use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use crate::paths;
use crate::translation::Locale;

/// Default translation endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://api.fanyi.baidu.com/api/trans/vip/translate";

/// Default salt mixed into the request signature.
pub const DEFAULT_SALT: &str = "baidu";

/// Environment variable holding the application id.
pub const APP_ID_ENV: &str = "TRANSLATE_APPID";

/// Environment variable holding the shared secret.
pub const SECRET_ENV: &str = "TRANSLATE_SECRET";

/// Settings in the `[fy]` section of config.toml.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FyConfig {
    /// Translation API endpoint.
    pub endpoint: Option<String>,
    /// Salt used when signing requests.
    pub salt: Option<String>,
    /// Location of the translation cache file.
    pub cache_file: Option<PathBuf>,
    /// Request timeout in seconds. No timeout when unset.
    pub timeout_secs: Option<u64>,
    /// Application id (`TRANSLATE_APPID` takes precedence).
    pub app_id: Option<String>,
    /// Shared secret (`TRANSLATE_SECRET` takes precedence).
    pub secret: Option<String>,
}

/// The complete configuration file structure.
///
/// Corresponds to `~/.config/fy/config.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ConfigFile {
    #[serde(default)]
    pub fy: FyConfig,
}

/// Provider credentials taken from the environment.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    pub app_id: Option<String>,
    pub secret: Option<String>,
}

impl Credentials {
    /// Reads `TRANSLATE_APPID` and `TRANSLATE_SECRET`, ignoring empty values.
    pub fn from_env() -> Self {
        let read = |name: &str| std::env::var(name).ok().filter(|value| !value.is_empty());
        Self {
            app_id: read(APP_ID_ENV),
            secret: read(SECRET_ENV),
        }
    }
}

/// Options taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct ResolveOptions {
    /// Translate into English instead of Chinese.
    pub into_english: bool,
}

/// Configuration assembled once at startup and passed to the client and
/// translator.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_id: String,
    pub secret: String,
    pub salt: String,
    pub endpoint: String,
    pub cache_file: PathBuf,
    pub locale: Locale,
    pub timeout: Option<Duration>,
}

/// Resolves configuration from command-line options, environment
/// credentials and the config file.
///
/// Priority (highest to lowest): environment, config file, built-in defaults.
/// Missing credentials resolve to empty strings; the provider rejects the
/// resulting signature.
pub fn resolve_config(
    options: &ResolveOptions,
    credentials: &Credentials,
    config_file: &ConfigFile,
) -> Result<Config> {
    let file = &config_file.fy;

    let cache_file = match &file.cache_file {
        Some(path) => path.clone(),
        None => paths::default_cache_file()?,
    };

    Ok(Config {
        app_id: credentials
            .app_id
            .as_ref()
            .or(file.app_id.as_ref())
            .cloned()
            .unwrap_or_default(),
        secret: credentials
            .secret
            .as_ref()
            .or(file.secret.as_ref())
            .cloned()
            .unwrap_or_default(),
        salt: file
            .salt
            .clone()
            .unwrap_or_else(|| DEFAULT_SALT.to_string()),
        endpoint: file
            .endpoint
            .clone()
            .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
        cache_file,
        locale: Locale::from_english_flag(options.into_english),
        timeout: file.timeout_secs.map(Duration::from_secs),
    })
}

/// Manages loading the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is read from `$XDG_CONFIG_HOME/fy/config.toml`
    /// or `~/.config/fy/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    pub fn exists(&self) -> bool {
        self.config_path.exists()
    }

    pub fn load(&self) -> Result<ConfigFile> {
        let contents = fs::read_to_string(&self.config_path).with_context(|| {
            format!("Failed to read config file: {}", self.config_path.display())
        })?;

        let config_file: ConfigFile = toml::from_str(&contents).with_context(|| {
            format!(
                "Failed to parse config file: {}",
                self.config_path.display()
            )
        })?;

        Ok(config_file)
    }
}
