pub mod paginated;
pub mod rendered;
pub mod static_http;

use crate::config::ExtractorConfig;
use crate::results::PageContent;
use thiserror::Error;

/// How a page's document is acquired before extraction
///
/// Strategies share the extraction semantics and differ only in how the
/// document is obtained: a plain HTTP fetch, a browser-rendered DOM, or
/// a browser-rendered DOM walked through a paginated listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    /// Single HTTP GET, parse the raw response body
    Static,
    /// Render the page in a browser, extract once the DOM has loaded
    Rendered,
    /// Render the page and accumulate headings across "next page" clicks
    Paginated,
}

impl Strategy {
    /// Acquire one URL's document and extract its content
    ///
    /// Errors are per-URL; the batch orchestrator converts them into
    /// `error=true` records rather than propagating them.
    pub async fn acquire(
        self,
        config: &ExtractorConfig,
        url: &str,
        query: Option<&str>,
    ) -> Result<PageContent, AcquireError> {
        match self {
            Strategy::Static => static_http::acquire(url, query).await,
            Strategy::Rendered => rendered::acquire(config, url, query).await,
            Strategy::Paginated => paginated::acquire(config, url, query).await,
        }
    }
}

/// Failure while acquiring a page's document
#[derive(Debug, Error)]
pub enum AcquireError {
    #[error("request failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("webdriver session could not be established: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),

    #[error("browser command failed: {0}")]
    Browser(#[from] fantoccini::error::CmdError),

    #[error("navigation to {0} did not finish within {1} ms")]
    NavigationTimeout(String, u64),
}
