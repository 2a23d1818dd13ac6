use super::AcquireError;
use super::rendered::{close, connect, navigate};
use crate::config::ExtractorConfig;
use crate::extract;
use crate::results::PageContent;
use fantoccini::{Client, Locator};
use std::time::Duration;
use tokio::time::sleep;

/// Link that advances a paginated listing, excluding the disabled state
const NEXT_PAGE_SELECTOR: &str = r#"a[aria-label="Go to next page"]:not(.pointer-events-none)"#;

/// Paginated view of a rendered document
///
/// The pagination loop only needs two capabilities: read the page
/// currently shown and activate the next-page control. Keeping them
/// behind this seam lets the loop run against canned pages in tests.
trait PageSource {
    /// Serialized DOM of the page currently shown
    async fn current_html(&mut self) -> Result<String, AcquireError>;

    /// Activate the next-page control; false means there is none and
    /// the last page has been reached
    async fn advance(&mut self) -> Result<bool, AcquireError>;
}

/// Live WebDriver session as a page source
struct WebDriverPages<'a> {
    client: &'a Client,
}

impl PageSource for WebDriverPages<'_> {
    async fn current_html(&mut self) -> Result<String, AcquireError> {
        Ok(self.client.source().await?)
    }

    async fn advance(&mut self) -> Result<bool, AcquireError> {
        match self.client.find(Locator::Css(NEXT_PAGE_SELECTOR)).await {
            Ok(next) => {
                next.click().await?;
                Ok(true)
            }
            Err(e) if e.is_no_such_element() => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

/// Renders a paginated listing and accumulates headings across pages
///
/// Non-heading fields (title, meta, contact info, images, scripts,
/// schema markup, matches) are captured once from the first page.
/// Headings are re-read from every visited page, advancing through the
/// "next page" control up to the configured page ceiling.
pub async fn acquire(
    config: &ExtractorConfig,
    url: &str,
    query: Option<&str>,
) -> Result<PageContent, AcquireError> {
    let client = connect(config).await?;

    let outcome = extract_pages(&client, config, url, query).await;
    close(client, url).await;

    outcome
}

/// Navigates to the URL and walks its pagination sequence
async fn extract_pages(
    client: &Client,
    config: &ExtractorConfig,
    url: &str,
    query: Option<&str>,
) -> Result<PageContent, AcquireError> {
    navigate(client, config, url).await?;

    let mut pages = WebDriverPages { client };
    extract_paginated(&mut pages, config, url, query).await
}

/// Walks the pagination sequence and merges heading results
///
/// A failure at any step (snapshot, click) aborts the whole extraction
/// for this URL; a missing next-page control just means the last page
/// has been reached.
async fn extract_paginated<P: PageSource>(
    pages: &mut P,
    config: &ExtractorConfig,
    url: &str,
    query: Option<&str>,
) -> Result<PageContent, AcquireError> {
    // First-page snapshot supplies everything except headings, which
    // the loop below gathers page by page.
    let html = pages.current_html().await?;
    let mut page = extract::extract_html(&html, url, query);
    page.headings.clear();

    let settle = Duration::from_millis(config.settle_delay_ms);

    for index in 0..config.max_pages {
        // Let client-side rendering settle before reading the DOM
        sleep(settle).await;

        let html = pages.current_html().await?;
        page.headings.extend(extract::headings_from_html(&html));

        if index + 1 == config.max_pages {
            break;
        }

        if !pages.advance().await? {
            ::log::debug!("No next-page control on {} after page {}", url, index + 1);
            break;
        }
        ::log::debug!("Advanced {} to page {}", url, index + 2);
    }

    ::log::debug!("Collected {} headings from {}", page.headings.len(), url);

    Ok(page)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Canned page sequence; `endless` keeps offering a next page after
    /// the last one, re-serving it
    struct FakePages {
        pages: Vec<String>,
        index: usize,
        advances: usize,
        endless: bool,
    }

    impl FakePages {
        fn new(pages: &[&str]) -> Self {
            Self {
                pages: pages.iter().map(|s| s.to_string()).collect(),
                index: 0,
                advances: 0,
                endless: false,
            }
        }
    }

    impl PageSource for FakePages {
        async fn current_html(&mut self) -> Result<String, AcquireError> {
            Ok(self.pages[self.index].clone())
        }

        async fn advance(&mut self) -> Result<bool, AcquireError> {
            if self.index + 1 < self.pages.len() {
                self.index += 1;
                self.advances += 1;
                Ok(true)
            } else if self.endless {
                self.advances += 1;
                Ok(true)
            } else {
                Ok(false)
            }
        }
    }

    /// Page source whose next-page click always fails
    struct FailingAdvance;

    impl PageSource for FailingAdvance {
        async fn current_html(&mut self) -> Result<String, AcquireError> {
            Ok("<h1>only</h1>".to_string())
        }

        async fn advance(&mut self) -> Result<bool, AcquireError> {
            Err(AcquireError::NavigationTimeout(
                "https://list.test".to_string(),
                0,
            ))
        }
    }

    fn fast_config() -> ExtractorConfig {
        ExtractorConfig {
            settle_delay_ms: 0,
            ..ExtractorConfig::default()
        }
    }

    #[tokio::test]
    async fn test_page_ceiling_bounds_extraction() {
        // A listing that always offers a next page stops at the ceiling,
        // and the final permitted page is read without another advance
        let mut pages = FakePages::new(&["<h1>repeat</h1>"]);
        pages.endless = true;

        let page = extract_paginated(&mut pages, &fast_config(), "https://list.test", None)
            .await
            .unwrap();

        assert_eq!(page.headings.len(), 10);
        assert!(page.headings.iter().all(|h| h == "repeat"));
        assert_eq!(pages.advances, 9);
    }

    #[tokio::test]
    async fn test_missing_next_control_stops_early() {
        let mut pages = FakePages::new(&["<h1>one</h1>", "<h2>two</h2>", "<h3>three</h3>"]);

        let page = extract_paginated(&mut pages, &fast_config(), "https://list.test", None)
            .await
            .unwrap();

        // Exactly three pages read, headings in page-visitation order
        assert_eq!(page.headings, vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_non_heading_fields_from_first_page_only() {
        let first = r#"<html><head><title>First</title></head><body>
            <h1>a</h1><img src="/one.png"><a href="mailto:x@y.z">mail</a>
            <p>paging through results</p></body></html>"#;
        let second = r#"<html><head><title>Second</title></head><body>
            <h1>b</h1><img src="/two.png">
            <p>paging continued</p></body></html>"#;
        let mut pages = FakePages::new(&[first, second]);

        let page = extract_paginated(
            &mut pages,
            &fast_config(),
            "https://list.test",
            Some("paging"),
        )
        .await
        .unwrap();

        assert_eq!(page.title, "First");
        assert_eq!(page.images, vec!["/one.png"]);
        assert_eq!(page.contact_info.email, vec!["x@y.z"]);
        assert_eq!(page.matches.len(), 1);
        assert!(page.matches[0].text.starts_with("paging through"));
        assert_eq!(page.headings, vec!["a", "b"]);
    }

    #[tokio::test]
    async fn test_advance_failure_aborts_extraction() {
        let mut pages = FailingAdvance;

        let result =
            extract_paginated(&mut pages, &fast_config(), "https://list.test", None).await;

        assert!(result.is_err());
    }
}
