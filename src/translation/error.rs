use serde::Deserialize;
use std::fmt;

/// Error body returned by the Baidu Fanyi API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderError {
    #[serde(rename = "error_code")]
    pub code: String,
    #[serde(rename = "error_msg", default)]
    pub message: String,
}

impl ProviderError {
    /// Explains an error code.
    ///
    /// Reference: <https://fanyi-api.baidu.com/doc/21>
    pub fn explanation(&self) -> &'static str {
        match self.code.as_str() {
            "52000" => "success",
            "52001" => "request timed out, try again",
            "52002" => "provider system error, try again",
            "52003" => "unauthorized user, check TRANSLATE_APPID and that the service is enabled",
            "54000" => "a required parameter is empty",
            "54001" => "wrong signature, check TRANSLATE_APPID and TRANSLATE_SECRET",
            "54003" => "access frequency limited, slow down",
            "54004" => "insufficient account balance",
            "54005" => "long queries are too frequent, retry after 3s",
            "58000" => "client IP is not allowed for this app id",
            "58001" => "target language direction is not supported",
            "58002" => "the service is currently closed",
            "90107" => "account certification has not passed",
            _ => "unknown error",
        }
    }
}

impl fmt::Display for ProviderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "provider error {} ({}): {}",
            self.code,
            self.message,
            self.explanation()
        )
    }
}

impl std::error::Error for ProviderError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn error(code: &str) -> ProviderError {
        ProviderError {
            code: code.to_string(),
            message: "Invalid Sign".to_string(),
        }
    }

    #[test]
    fn test_explanation_known_code() {
        assert!(error("54001").explanation().contains("signature"));
        assert!(error("58001").explanation().contains("not supported"));
    }

    #[test]
    fn test_explanation_unknown_code() {
        assert_eq!(error("99999").explanation(), "unknown error");
    }

    #[test]
    fn test_display_includes_code_and_message() {
        let text = error("54001").to_string();
        assert!(text.contains("54001"));
        assert!(text.contains("Invalid Sign"));
    }
}
