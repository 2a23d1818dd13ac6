use crate::config::ExtractorConfig;
use crate::results::PageContent;
use crate::strategies::Strategy;
use std::sync::Arc;
use tokio::sync::Semaphore;

/// Runs one strategy over a batch of URLs concurrently
///
/// Every URL gets its own task and its own acquisition resources; a
/// failure in one task becomes that URL's `error=true` record and never
/// affects its siblings. The output has exactly one record per input
/// URL, in input order, regardless of completion order.
///
/// In-flight tasks are bounded by `config.max_concurrency` so a large
/// batch does not open one browser session per URL all at once.
pub async fn run(
    urls: &[String],
    query: Option<&str>,
    strategy: Strategy,
    config: &ExtractorConfig,
) -> Vec<PageContent> {
    ::log::info!(
        "Processing batch of {} URLs with {:?} strategy",
        urls.len(),
        strategy
    );

    let config = Arc::new(config.clone());
    let query: Option<Arc<str>> = query.map(Arc::from);
    let semaphore = Arc::new(Semaphore::new(config.max_concurrency.max(1)));

    let mut handles = Vec::with_capacity(urls.len());
    for url in urls {
        let url = url.clone();
        let key = url.clone();
        let query = query.clone();
        let config = Arc::clone(&config);
        let semaphore = Arc::clone(&semaphore);

        let handle = tokio::spawn(async move {
            let _permit = semaphore.acquire().await.unwrap();

            match strategy.acquire(&config, &url, query.as_deref()).await {
                Ok(page) => page,
                Err(e) => {
                    ::log::error!("Failed to process {}: {}", url, e);
                    PageContent::failed(&url)
                }
            }
        });
        handles.push((key, handle));
    }

    // Awaiting handles in spawn order keeps the output aligned with the
    // input even though tasks finish in arbitrary order.
    let mut results = Vec::with_capacity(handles.len());
    for (url, handle) in handles {
        match handle.await {
            Ok(page) => results.push(page),
            Err(e) => {
                ::log::error!("Task for {} did not complete: {}", url, e);
                results.push(PageContent::failed(&url));
            }
        }
    }

    ::log::info!(
        "Batch complete: {} succeeded, {} failed",
        results.iter().filter(|r| !r.error).count(),
        results.iter().filter(|r| r.error).count()
    );

    results
}
