use anyhow::Result;

use crate::cache::CacheStore;
use crate::config::{Config, ConfigManager, Credentials, ResolveOptions, resolve_config};
use crate::output;
use crate::translation::Translator;

pub struct TranslateOptions {
    /// Text to translate; `None` when no text arguments were given.
    pub content: Option<String>,
    pub into_english: bool,
}

/// Bootstraps the cache file, then translates the content and prints
/// `src: <input> / dst: <result>`. Without content prints a usage prompt.
///
/// Failures are reported on stderr and leave the result empty.
pub async fn run_translate(options: TranslateOptions) -> Result<()> {
    let config = load_config(&options)
        .inspect_err(output::report_error)
        .ok();

    if let Some(config) = &config
        && let Err(err) = CacheStore::new(&config.cache_file).ensure_exists()
    {
        output::report_error(&err);
    }

    let Some(content) = &options.content else {
        println!("Please provide the text to translate");
        return Ok(());
    };

    let result = match &config {
        Some(config) => translate(config, content).await,
        None => String::new(),
    };

    println!("src: {content} / dst: {result}");

    Ok(())
}

async fn translate(config: &Config, content: &str) -> String {
    match Translator::from_config(config) {
        Ok(translator) => translator.translate(content).await,
        Err(err) => {
            output::report_error(&err);
            String::new()
        }
    }
}

fn load_config(options: &TranslateOptions) -> Result<Config> {
    let manager = ConfigManager::new()?;

    let config_file = if manager.exists() {
        manager.load().unwrap_or_else(|err| {
            output::report_error(&err);
            Default::default()
        })
    } else {
        Default::default()
    };

    resolve_config(
        &ResolveOptions {
            into_english: options.into_english,
        },
        &Credentials::from_env(),
        &config_file,
    )
}
