use super::AcquireError;
use crate::extract;
use crate::results::PageContent;

/// Fetches a URL over plain HTTP and extracts content from the raw body
///
/// One GET with client defaults (no custom headers, transport-default
/// timeouts), no retry. Pages that populate themselves client-side will
/// come back mostly empty here; use the rendered strategy for those.
pub async fn acquire(url: &str, query: Option<&str>) -> Result<PageContent, AcquireError> {
    ::log::debug!("Fetching {}", url);

    let response = reqwest::get(url).await?;
    let body = response.text().await?;

    ::log::debug!("Fetched {} ({} bytes)", url, body.len());

    Ok(extract::extract_html(&body, url, query))
}
