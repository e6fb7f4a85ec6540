/// Environment variable holding the generative-language API key.
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

/// Advisor connection settings. A missing key is a valid
/// configuration: the narrator then short-circuits to its
/// not-configured message without a network attempt.
#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        AdvisorConfig {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl AdvisorConfig {
    /// Read the key from the process environment. Blank values count
    /// as absent.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|k| !k.trim().is_empty());
        AdvisorConfig {
            api_key,
            ..Default::default()
        }
    }

    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Point at a different endpoint (tests use this for a local mock).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn is_configured(&self) -> bool {
        self.api_key.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_unconfigured() {
        let config = AdvisorConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.model, "gemini-3-flash-preview");
    }

    #[test]
    fn test_builder() {
        let config = AdvisorConfig::default()
            .with_api_key("secret")
            .with_base_url("http://localhost:1234");
        assert!(config.is_configured());
        assert_eq!(config.base_url, "http://localhost:1234");
    }
}
