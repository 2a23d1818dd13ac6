use super::AcquireError;
use crate::config::ExtractorConfig;
use crate::extract;
use crate::results::PageContent;
use fantoccini::{Client, ClientBuilder};
use std::time::Duration;
use tokio::time::timeout;

/// Renders a URL in a browser and extracts content from the live DOM
///
/// A fresh WebDriver session is created for every call and torn down on
/// every exit path, so one URL's session never outlives its task.
pub async fn acquire(
    config: &ExtractorConfig,
    url: &str,
    query: Option<&str>,
) -> Result<PageContent, AcquireError> {
    let client = connect(config).await?;

    // Run the extraction to completion before teardown so the session
    // is released whether it succeeded or failed.
    let outcome = extract_page(&client, config, url, query).await;
    close(client, url).await;

    outcome
}

/// Navigates to the URL and extracts content from the rendered DOM
async fn extract_page(
    client: &Client,
    config: &ExtractorConfig,
    url: &str,
    query: Option<&str>,
) -> Result<PageContent, AcquireError> {
    navigate(client, config, url).await?;

    let html = client.source().await?;
    Ok(extract::extract_html(&html, url, query))
}

/// Opens a new WebDriver session
pub(crate) async fn connect(config: &ExtractorConfig) -> Result<Client, AcquireError> {
    ::log::debug!("Connecting to WebDriver at {}", config.webdriver_url);
    let client = ClientBuilder::native().connect(&config.webdriver_url).await?;
    Ok(client)
}

/// Navigates to a URL, bounded by the configured hard timeout
pub(crate) async fn navigate(
    client: &Client,
    config: &ExtractorConfig,
    url: &str,
) -> Result<(), AcquireError> {
    ::log::debug!("Navigating to {}", url);

    let deadline = Duration::from_millis(config.navigation_timeout_ms);
    match timeout(deadline, client.goto(url)).await {
        Ok(result) => Ok(result?),
        Err(_) => Err(AcquireError::NavigationTimeout(
            url.to_string(),
            config.navigation_timeout_ms,
        )),
    }
}

/// Closes a WebDriver session, logging rather than failing on error
///
/// Teardown runs after the extraction outcome is already decided, so a
/// close failure must not overwrite it.
pub(crate) async fn close(client: Client, url: &str) {
    if let Err(e) = client.close().await {
        ::log::warn!("Failed to close WebDriver session for {}: {}", url, e);
    }
}
