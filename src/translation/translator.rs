use anyhow::Result;

use super::client::TranslationClient;
use super::locale::Locale;
use super::record::TranslationRecord;
use crate::cache::CacheStore;
use crate::config::Config;
use crate::output;
use crate::ui::Spinner;

/// A source of translations.
#[allow(async_fn_in_trait)]
pub trait Provider {
    async fn translate(&self, text: &str, locale: Locale) -> Result<TranslationRecord>;
}

impl Provider for TranslationClient {
    async fn translate(&self, text: &str, locale: Locale) -> Result<TranslationRecord> {
        Self::translate(self, text, locale).await
    }
}

/// Answers translation requests from the local cache, falling back to the
/// provider on a miss.
pub struct Translator<P> {
    provider: P,
    cache: CacheStore,
    locale: Locale,
}

impl Translator<TranslationClient> {
    pub fn from_config(config: &Config) -> Result<Self> {
        Ok(Self::new(
            TranslationClient::new(config)?,
            CacheStore::new(&config.cache_file),
            config.locale,
        ))
    }
}

impl<P: Provider> Translator<P> {
    pub const fn new(provider: P, cache: CacheStore, locale: Locale) -> Self {
        Self {
            provider,
            cache,
            locale,
        }
    }

    pub const fn cache(&self) -> &CacheStore {
        &self.cache
    }

    /// Translates `content` and returns the translated entries joined by `,`.
    ///
    /// Never fails: provider and cache errors are reported on stderr and
    /// the result degrades to an empty string. Whether an empty result is
    /// the right answer to a failed request is questionable, but callers
    /// rely on always getting some output.
    pub async fn translate(&self, content: &str) -> String {
        let record = match self.cache.lookup(content) {
            Some(cached) => cached,
            None => self.fetch(content).await,
        };

        record.display_text()
    }

    async fn fetch(&self, content: &str) -> TranslationRecord {
        let result = {
            let _spinner = Spinner::new("Translating...");
            self.provider.translate(content, self.locale).await
        };

        match result {
            Ok(record) => {
                // A record without entries can never satisfy a lookup.
                if !record.is_empty()
                    && let Err(err) = self.cache.append(record.clone())
                {
                    output::report_error(&err);
                }
                record
            }
            Err(err) => {
                output::report_error(&err);
                TranslationRecord::default()
            }
        }
    }
}
