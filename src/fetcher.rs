//! Document fetching seam between the engine and the network.
//!
//! The engine never constructs sockets; it builds URLs and hands them
//! to a [`DocumentFetcher`]. The production implementation is
//! [`HttpFetcher`] over a shared [`reqwest::Client`]; tests inject
//! stubs serving canned pages.

use crate::config::SiteConfig;
use crate::error::{AcronymError, Result};
use crate::http;

/// A fetched page: HTTP status, final URL, and the raw HTML body.
///
/// `url` is the URL after redirects. The search endpoint redirects to a
/// canonical term URL, and pagination and topic refinement append path
/// segments to that redirected URL, so it must be surfaced to callers.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    /// HTTP status code of the final response.
    pub status: u16,
    /// Final URL after redirects.
    pub url: String,
    /// Raw response body.
    pub body: String,
}

impl FetchedPage {
    /// Whether the response carried a 2xx status.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// A pluggable page fetcher.
///
/// Implementors retrieve one URL and return the page, or a
/// transport-level error. A non-success HTTP status is **not** an error
/// at this layer: the remote search endpoint's failure modes are
/// interpreted by the caller (usually as "no matches"), so the page is
/// returned with its status intact.
///
/// All implementations must be `Send + Sync` so a client can be shared
/// across tasks.
pub trait DocumentFetcher: Send + Sync {
    /// Fetch one URL.
    ///
    /// # Errors
    ///
    /// Returns [`AcronymError::Fetch`] only for transport failures:
    /// unreachable host, timeout, or an unreadable response body.
    fn fetch(&self, url: &str) -> impl std::future::Future<Output = Result<FetchedPage>> + Send;
}

/// Production fetcher over a shared [`reqwest::Client`].
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    /// Build a fetcher from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`AcronymError::Fetch`] if the HTTP client cannot be
    /// constructed.
    pub fn new(config: &SiteConfig) -> Result<Self> {
        Ok(Self {
            client: http::build_client(config)?,
        })
    }
}

impl DocumentFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<FetchedPage> {
        tracing::trace!(url, "fetching page");

        let response = self
            .client
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await
            .map_err(|e| AcronymError::Fetch(format!("request to {url} failed: {e}")))?;

        let status = response.status().as_u16();
        let final_url = response.url().to_string();

        let body = response
            .text()
            .await
            .map_err(|e| AcronymError::Fetch(format!("reading response from {url} failed: {e}")))?;

        tracing::trace!(status, bytes = body.len(), "page received");

        Ok(FetchedPage {
            status,
            url: final_url,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A mock fetcher for testing trait bounds and async execution.
    struct MockFetcher {
        body: Option<String>,
    }

    impl DocumentFetcher for MockFetcher {
        async fn fetch(&self, url: &str) -> Result<FetchedPage> {
            match &self.body {
                Some(body) => Ok(FetchedPage {
                    status: 200,
                    url: url.to_string(),
                    body: body.clone(),
                }),
                None => Err(AcronymError::Fetch("mock transport failure".into())),
            }
        }
    }

    #[test]
    fn is_success_accepts_2xx_only() {
        let mut page = FetchedPage {
            status: 200,
            url: "https://acronyms.test/".into(),
            body: String::new(),
        };
        assert!(page.is_success());
        page.status = 299;
        assert!(page.is_success());
        page.status = 199;
        assert!(!page.is_success());
        page.status = 302;
        assert!(!page.is_success());
        page.status = 404;
        assert!(!page.is_success());
        page.status = 500;
        assert!(!page.is_success());
    }

    #[test]
    fn http_fetcher_builds_from_default_config() {
        let fetcher = HttpFetcher::new(&SiteConfig::default());
        assert!(fetcher.is_ok());
    }

    #[test]
    fn http_fetcher_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpFetcher>();
    }

    #[tokio::test]
    async fn mock_fetcher_returns_page() {
        let fetcher = MockFetcher {
            body: Some("<html></html>".into()),
        };
        let page = fetcher
            .fetch("https://acronyms.test/")
            .await
            .expect("should fetch");
        assert_eq!(page.status, 200);
        assert_eq!(page.url, "https://acronyms.test/");
        assert_eq!(page.body, "<html></html>");
    }

    #[tokio::test]
    async fn mock_fetcher_propagates_transport_errors() {
        let fetcher = MockFetcher { body: None };
        let result = fetcher.fetch("https://acronyms.test/").await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("mock transport failure"));
    }
}
