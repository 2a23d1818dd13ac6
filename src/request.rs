use serde::Deserialize;
use thiserror::Error;
use url::Url;

/// A batch request: the URLs to process plus an optional keyword query
///
/// Mirrors the JSON wire body `{"urls": [...], "query": "..."}`.
/// Validation happens before any per-URL processing; a bad request is
/// the only failure surfaced to the caller as a whole.
#[derive(Debug, Clone, Deserialize)]
pub struct BatchRequest {
    pub urls: Vec<String>,

    #[serde(default)]
    pub query: Option<String>,
}

/// Rejection of a batch request before processing starts
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("malformed request body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("at least one URL is required")]
    EmptyBatch,

    #[error("invalid URL {0:?}: must be an absolute http or https URL")]
    InvalidUrl(String),
}

impl BatchRequest {
    /// Builds a validated request from already-collected parts
    pub fn new(urls: Vec<String>, query: Option<String>) -> Result<Self, RequestError> {
        let request = Self { urls, query };
        request.validate()?;
        Ok(request)
    }

    /// Parses and validates a JSON request body
    ///
    /// A body whose `urls` is not a list fails deserialization and is
    /// reported as malformed.
    pub fn from_json(body: &str) -> Result<Self, RequestError> {
        let request: Self = serde_json::from_str(body)?;
        request.validate()?;
        Ok(request)
    }

    fn validate(&self) -> Result<(), RequestError> {
        if self.urls.is_empty() {
            return Err(RequestError::EmptyBatch);
        }

        for url in &self.urls {
            let parsed = Url::parse(url).map_err(|_| RequestError::InvalidUrl(url.clone()))?;
            if parsed.scheme() != "http" && parsed.scheme() != "https" {
                return Err(RequestError::InvalidUrl(url.clone()));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_request() {
        let request = BatchRequest::from_json(
            r#"{"urls": ["https://example.com", "http://other.test/page"], "query": "rust"}"#,
        )
        .unwrap();

        assert_eq!(request.urls.len(), 2);
        assert_eq!(request.query.as_deref(), Some("rust"));
    }

    #[test]
    fn test_non_list_urls_rejected() {
        let result = BatchRequest::from_json(r#"{"urls": "not-a-list"}"#);
        assert!(matches!(result, Err(RequestError::Malformed(_))));
    }

    #[test]
    fn test_empty_batch_rejected() {
        let result = BatchRequest::from_json(r#"{"urls": []}"#);
        assert!(matches!(result, Err(RequestError::EmptyBatch)));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let result = BatchRequest::new(vec!["ftp://example.com/file".to_string()], None);
        assert!(matches!(result, Err(RequestError::InvalidUrl(_))));
    }

    #[test]
    fn test_relative_url_rejected() {
        let result = BatchRequest::new(vec!["/just/a/path".to_string()], None);
        assert!(matches!(result, Err(RequestError::InvalidUrl(_))));
    }
}
