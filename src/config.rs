use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Configuration for the extraction pipeline
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractorConfig {
    /// URL of the WebDriver instance used by the rendered strategies
    #[serde(default = "default_webdriver_url")]
    pub webdriver_url: String,

    /// Maximum number of URLs processed at once
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,

    /// Hard timeout for a single page navigation, in milliseconds
    #[serde(default = "default_navigation_timeout_ms")]
    pub navigation_timeout_ms: u64,

    /// Delay before reading each paginated page, in milliseconds
    #[serde(default = "default_settle_delay_ms")]
    pub settle_delay_ms: u64,

    /// Maximum number of pages visited by the paginated strategy
    #[serde(default = "default_max_pages")]
    pub max_pages: usize,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            webdriver_url: default_webdriver_url(),
            max_concurrency: default_max_concurrency(),
            navigation_timeout_ms: default_navigation_timeout_ms(),
            settle_delay_ms: default_settle_delay_ms(),
            max_pages: default_max_pages(),
        }
    }
}

impl ExtractorConfig {
    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        let config: Self = serde_json::from_str(&contents)?;
        Ok(config)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self, Box<dyn Error>> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }
}

/// Default value for webdriver_url
fn default_webdriver_url() -> String {
    "http://localhost:4444".to_string()
}

/// Default value for max_concurrency
fn default_max_concurrency() -> usize {
    8
}

/// Default navigation timeout (20 seconds)
fn default_navigation_timeout_ms() -> u64 {
    20_000
}

/// Default settle delay between paginated reads (1 second)
fn default_settle_delay_ms() -> u64 {
    1_000
}

/// Default page ceiling for the paginated strategy
fn default_max_pages() -> usize {
    10
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ExtractorConfig::default();
        assert_eq!(config.webdriver_url, "http://localhost:4444");
        assert_eq!(config.navigation_timeout_ms, 20_000);
        assert_eq!(config.settle_delay_ms, 1_000);
        assert_eq!(config.max_pages, 10);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config = ExtractorConfig::from_json(r#"{"max_concurrency": 2}"#).unwrap();
        assert_eq!(config.max_concurrency, 2);
        assert_eq!(config.max_pages, 10);
    }
}
