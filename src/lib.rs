// Re-export modules
pub mod batch;
pub mod config;
pub mod export;
pub mod extract;
pub mod request;
pub mod results;
pub mod strategies;

// Re-export commonly used types for convenience
pub use request::BatchRequest;
pub use results::PageContent;
pub use strategies::Strategy;

use config::ExtractorConfig;

/// Builder for running an extraction batch
///
/// Wraps a validated request with a strategy and configuration, then
/// runs every URL to completion and returns one record per input URL.
pub struct Batch {
    request: BatchRequest,
    strategy: Strategy,
    config: ExtractorConfig,
}

impl Batch {
    /// Create a new Batch from a validated request
    pub fn new(request: BatchRequest) -> Self {
        Self {
            request,
            strategy: Strategy::Static,
            config: ExtractorConfig::default(),
        }
    }

    /// Set the acquisition strategy
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Apply a configuration
    pub fn with_config(mut self, config: ExtractorConfig) -> Self {
        self.config = config;
        self
    }

    /// Load configuration from a JSON file
    pub fn with_config_file(
        mut self,
        path: impl AsRef<std::path::Path>,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        self.config = ExtractorConfig::from_file(path)?;
        Ok(self)
    }

    /// Override the WebDriver endpoint
    pub fn with_webdriver_url(mut self, url: &str) -> Self {
        self.config.webdriver_url = url.to_string();
        self
    }

    /// Override the maximum number of URLs processed at once
    pub fn with_max_concurrency(mut self, max_concurrency: usize) -> Self {
        self.config.max_concurrency = max_concurrency;
        self
    }

    /// Run the batch and collect results in input order
    ///
    /// Per-URL failures are converted into `error=true` records; this
    /// call itself does not fail.
    pub async fn run(self) -> Vec<PageContent> {
        let mut config = self.config;

        // Override the WebDriver URL with an environment variable if provided
        if let Ok(webdriver_url) = std::env::var("WEBDRIVER_URL") {
            if !webdriver_url.is_empty() {
                config.webdriver_url = webdriver_url;
            }
        }

        batch::run(
            &self.request.urls,
            self.request.query.as_deref(),
            self.strategy,
            &config,
        )
        .await
    }
}
