//! Global output configuration and diagnostics.
//!
//! Translation output goes to stdout. Diagnostics always go to stderr and
//! never change the exit status.

use std::sync::OnceLock;

use crate::ui::Style;

/// Global output configuration.
static OUTPUT_CONFIG: OnceLock<OutputConfig> = OnceLock::new();

/// Output configuration settings.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    /// Disable colored output.
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            // https://no-color.org/
            no_color: std::env::var("NO_COLOR").is_ok(),
        }
    }
}

/// Initialize the global output configuration.
///
/// Subsequent calls are ignored.
pub fn init(config: OutputConfig) {
    let _ = OUTPUT_CONFIG.set(config);
}

/// Get the current output configuration.
pub fn config() -> &'static OutputConfig {
    OUTPUT_CONFIG.get_or_init(OutputConfig::default)
}

/// Check if colors are disabled.
pub fn is_no_color() -> bool {
    config().no_color
}

/// Print a warning message to stderr.
#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!($($arg)*);
    };
}

/// Report a non-fatal error on stderr, including its context chain.
pub fn report_error(err: &anyhow::Error) {
    warn!("{} {err:#}", Style::error("error:"));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_config_default_follows_no_color() {
        let config = OutputConfig::default();
        assert_eq!(config.no_color, std::env::var("NO_COLOR").is_ok());
    }
}
