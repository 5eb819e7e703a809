mod client;
mod error;
mod locale;
mod record;
mod sign;
mod translator;

pub use client::TranslationClient;
pub use error::ProviderError;
pub use locale::Locale;
pub use record::{TranslationEntry, TranslationRecord};
pub use sign::sign;
pub use translator::{Provider, Translator};
