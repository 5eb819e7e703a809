#![allow(clippy::unwrap_used)]
//! Config priority contract tests.
//!
//! Priority order (highest to lowest):
//! 1. Environment credentials and the `-c` flag
//! 2. Config file settings
//! 3. Built-in defaults

use fy_cli::config::{
    ConfigFile, Credentials, DEFAULT_ENDPOINT, DEFAULT_SALT, FyConfig, ResolveOptions,
    resolve_config,
};
use fy_cli::translation::Locale;
use std::path::PathBuf;

fn make_config_with_credentials() -> ConfigFile {
    ConfigFile {
        fy: FyConfig {
            endpoint: None,
            salt: None,
            cache_file: Some(PathBuf::from("/var/tmp/fy/translate.json")),
            timeout_secs: None,
            app_id: Some("config_app".to_string()),
            secret: Some("config_secret".to_string()),
        },
    }
}

#[test]
fn test_env_app_id_overrides_config_app_id() {
    let credentials = Credentials {
        app_id: Some("env_app".to_string()),
        secret: None,
    };

    let resolved = resolve_config(
        &ResolveOptions::default(),
        &credentials,
        &make_config_with_credentials(),
    )
    .unwrap();

    assert_eq!(resolved.app_id, "env_app");
    // Secret not set in env falls back to the config file
    assert_eq!(resolved.secret, "config_secret");
}

#[test]
fn test_env_secret_overrides_config_secret() {
    let credentials = Credentials {
        app_id: None,
        secret: Some("env_secret".to_string()),
    };

    let resolved = resolve_config(
        &ResolveOptions::default(),
        &credentials,
        &make_config_with_credentials(),
    )
    .unwrap();

    assert_eq!(resolved.app_id, "config_app");
    assert_eq!(resolved.secret, "env_secret");
}

#[test]
fn test_builtin_defaults_when_config_is_silent() {
    let resolved = resolve_config(
        &ResolveOptions::default(),
        &Credentials::default(),
        &make_config_with_credentials(),
    )
    .unwrap();

    assert_eq!(resolved.endpoint, DEFAULT_ENDPOINT);
    assert_eq!(resolved.salt, DEFAULT_SALT);
    assert_eq!(
        resolved.cache_file,
        PathBuf::from("/var/tmp/fy/translate.json")
    );
}

#[test]
fn test_flag_selects_target_locale() {
    let config = make_config_with_credentials();

    let english = resolve_config(
        &ResolveOptions { into_english: true },
        &Credentials::default(),
        &config,
    )
    .unwrap();
    let chinese = resolve_config(
        &ResolveOptions { into_english: false },
        &Credentials::default(),
        &config,
    )
    .unwrap();

    assert_eq!(english.locale, Locale::English);
    assert_eq!(english.locale.code(), "en");
    assert_eq!(chinese.locale, Locale::Chinese);
    assert_eq!(chinese.locale.code(), "zh");
}
