//! Target locales supported by the translator.

/// Target language of a translation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Locale {
    /// Translate into Chinese.
    #[default]
    Chinese,
    /// Translate into English.
    English,
}

impl Locale {
    /// Selects the locale from the "into English" command-line flag.
    pub const fn from_english_flag(into_english: bool) -> Self {
        if into_english {
            Self::English
        } else {
            Self::Chinese
        }
    }

    /// Language code understood by the provider.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Chinese => "zh",
            Self::English => "en",
        }
    }
}
