//! The client: category resolution, topic resolution, and the search
//! pipeline.
//!
//! One [`Client`] owns the site configuration, a [`DocumentFetcher`],
//! and the lazily resolved category directory — the only state shared
//! across calls (write-once, read-many). Every public operation issues
//! strictly sequential fetches; pagination within one search fetches
//! pages in increasing order and defers confidence normalization until
//! the whole batch is accumulated.

use tokio::sync::OnceCell;

use crate::categories::{self, CategoryDirectory};
use crate::config::SiteConfig;
use crate::confidence::assign_confidence;
use crate::error::{AcronymError, Result};
use crate::extract;
use crate::fetcher::{DocumentFetcher, HttpFetcher};
use crate::topics;
use crate::types::{Abbreviation, SearchQuery, Topic, TopicQuery};
use crate::urls;

/// Client for the site's search, topics, and random-term endpoints.
///
/// Generic over the fetcher so tests can inject canned pages; the
/// default is [`HttpFetcher`].
pub struct Client<F: DocumentFetcher = HttpFetcher> {
    config: SiteConfig,
    fetcher: F,
    directory: OnceCell<CategoryDirectory>,
}

impl Client<HttpFetcher> {
    /// Build a client over the shared HTTP fetcher.
    ///
    /// # Errors
    ///
    /// Returns [`AcronymError::Config`] for an invalid configuration and
    /// [`AcronymError::Fetch`] if the HTTP client cannot be constructed.
    pub fn new(config: SiteConfig) -> Result<Self> {
        config.validate()?;
        let fetcher = HttpFetcher::new(&config)?;
        Ok(Self {
            config,
            fetcher,
            directory: OnceCell::new(),
        })
    }
}

impl<F: DocumentFetcher> Client<F> {
    /// Build a client over a custom [`DocumentFetcher`].
    ///
    /// # Errors
    ///
    /// Returns [`AcronymError::Config`] for an invalid configuration.
    pub fn with_fetcher(config: SiteConfig, fetcher: F) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            fetcher,
            directory: OnceCell::new(),
        })
    }

    /// Ordered list of the site's category names.
    ///
    /// Fetched from the landing page on first use and cached for the
    /// life of the client; later calls return the cached list without a
    /// network round trip. An empty list means the landing page carried
    /// no recognizable category listing.
    ///
    /// # Errors
    ///
    /// Returns [`AcronymError::Fetch`] if the landing page cannot be
    /// retrieved. A failed resolution is not cached; the next call
    /// retries.
    pub async fn categories(&self) -> Result<Vec<String>> {
        Ok(self.directory().await?.names().map(str::to_string).collect())
    }

    /// Drop the cached category directory so the next call refetches it.
    pub fn invalidate_categories(&mut self) {
        self.directory = OnceCell::new();
    }

    /// Resolve the topics offered for a keyword and/or category.
    ///
    /// Topic name/path pairs are returned in the order the site lists
    /// them. An unrecognized category name resolves to no topics, the
    /// same soft-empty outcome as a page that offers none.
    ///
    /// # Errors
    ///
    /// Returns [`AcronymError::Fetch`] on transport failure and
    /// [`AcronymError::Parse`] if an embedded topic payload is present
    /// but malformed.
    pub async fn topics(&self, query: &TopicQuery) -> Result<Vec<Topic>> {
        match query {
            TopicQuery::None => Ok(Vec::new()),
            TopicQuery::ByCategory(category) => {
                let directory = self.directory().await?;
                let Some(path) = directory.path(category) else {
                    tracing::debug!(category = %category, "unknown category, no topics");
                    return Ok(Vec::new());
                };
                let category_path = (!is_any_category(category)).then_some(path);
                let url = urls::topics_url(&self.config.base_url, category_path)?;
                let page = self.fetcher.fetch(url.as_str()).await?;
                if !page.is_success() {
                    tracing::debug!(status = page.status, "topics page returned non-success");
                    return Ok(Vec::new());
                }
                topics::parse_popular_topics(&page.body)
            }
            TopicQuery::ByKeyword { keywords, category } => {
                let mut category_path = None;
                if let Some(category) = category {
                    let directory = self.directory().await?;
                    let Some(path) = directory.path(category) else {
                        tracing::debug!(category = %category, "unknown category, no topics");
                        return Ok(Vec::new());
                    };
                    if !is_any_category(category) {
                        category_path = Some(path);
                    }
                }
                let url =
                    urls::keyword_page_url(&self.config.base_url, category_path, keywords)?;
                let page = self.fetcher.fetch(url.as_str()).await?;
                if !page.is_success() {
                    tracing::debug!(status = page.status, "lookup page returned non-success");
                    return Ok(Vec::new());
                }
                topics::parse_cloud_topics(&page.body)
            }
        }
    }

    /// Search the site for candidate expansions.
    ///
    /// Returns at most `query.quantity` records in the site's own
    /// ranking order (then page order), each carrying a confidence
    /// normalized over the full accumulated batch. "Nothing matched"
    /// outcomes — an unrecognized category, a topic the site does not
    /// offer for this query, a non-success search response, zero
    /// extracted rows — return an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// Returns [`AcronymError::InvalidArgument`] for empty keywords or
    /// zero quantity, and [`AcronymError::Fetch`] if the initial fetch
    /// cannot complete. A transport failure during pagination stops the
    /// loop and the records gathered so far are returned.
    pub async fn search(&self, query: &SearchQuery) -> Result<Vec<Abbreviation>> {
        if query.keywords.trim().is_empty() {
            return Err(AcronymError::InvalidArgument(
                "keywords must be a non-empty string".into(),
            ));
        }
        if query.quantity == 0 {
            return Err(AcronymError::InvalidArgument(
                "quantity must be at least 1".into(),
            ));
        }

        // 1. Resolve the category filter to its positional index.
        let category_index = match &query.category {
            None => 0,
            Some(category) => match self.directory().await?.position(category) {
                Some(index) => index,
                None => {
                    tracing::debug!(category = %category, "unknown category, no matches");
                    return Ok(Vec::new());
                }
            },
        };

        // 2. Initial search fetch. The site decides whether the
        //    keywords name an abbreviation or a definition.
        let url = urls::search_url(&self.config.base_url, &query.keywords, category_index)?;
        let mut page = self.fetcher.fetch(url.as_str()).await?;
        if !page.is_success() {
            tracing::debug!(status = page.status, "search endpoint returned non-success");
            return Ok(Vec::new());
        }

        // 3. Optional topic refinement, against the topics embedded in
        //    the page just fetched.
        if let Some(topic_name) = &query.topic {
            let embedded = topics::parse_cloud_topics(&page.body)?;
            let Some(topic) = embedded.iter().find(|t| &t.name == topic_name) else {
                tracing::debug!(topic = %topic_name, "topic not offered for this query");
                return Ok(Vec::new());
            };
            let refined = urls::join_segments(&page.url, &topic.path)?;
            page = self.fetcher.fetch(refined.as_str()).await?;
            if !page.is_success() {
                tracing::debug!(status = page.status, "topic page returned non-success");
                return Ok(Vec::new());
            }
        }

        // 4. Extract the first page; it may already be the whole batch.
        let mut records = extract::extract_abbreviations(&page.body, true)?;

        // 5. Paginate until the quantity is met or pages run out, then
        //    re-normalize confidence across the accumulated batch.
        //    Page URLs build on the post-redirect URL of the page just
        //    extracted.
        if records.len() < query.quantity {
            if let Some(total_pages) = extract::parse_page_count(&page.body)? {
                let mut page_index: u32 = 2;
                while records.len() < query.quantity && page_index < total_pages {
                    let next_url = urls::join_segments(&page.url, &page_index.to_string())?;
                    match self.fetcher.fetch(next_url.as_str()).await {
                        Ok(next) => {
                            records.extend(extract::extract_abbreviations(&next.body, false)?);
                        }
                        Err(err) => {
                            tracing::warn!(
                                page = page_index,
                                error = %err,
                                "pagination fetch failed, keeping records gathered so far"
                            );
                            break;
                        }
                    }
                    page_index += 1;
                }
                assign_confidence(&mut records);
            }
        }

        // 6. Site ranking order, then page order.
        records.truncate(query.quantity);
        Ok(records)
    }

    /// Search for the single top record.
    ///
    /// `Ok(None)` is the explicit not-found signal, distinct from both
    /// an error and [`search`](Self::search)'s empty vector. The
    /// query's `quantity` is ignored; exactly one record is requested.
    ///
    /// # Errors
    ///
    /// Same as [`search`](Self::search).
    pub async fn search_one(&self, query: &SearchQuery) -> Result<Option<Abbreviation>> {
        let mut single = query.clone();
        single.quantity = 1;
        Ok(self.search(&single).await?.into_iter().next())
    }

    /// Fetch the random-term page and extract its records, confidence
    /// included. No pagination, no inputs.
    ///
    /// # Errors
    ///
    /// Returns [`AcronymError::Fetch`] on transport failure.
    pub async fn random(&self) -> Result<Vec<Abbreviation>> {
        let url = urls::random_url(&self.config.base_url)?;
        let page = self.fetcher.fetch(url.as_str()).await?;
        if !page.is_success() {
            tracing::debug!(status = page.status, "random endpoint returned non-success");
            return Ok(Vec::new());
        }
        extract::extract_abbreviations(&page.body, true)
    }

    async fn directory(&self) -> Result<&CategoryDirectory> {
        self.directory
            .get_or_try_init(|| async {
                let url = urls::root_url(&self.config.base_url)?;
                tracing::debug!("resolving category directory");
                let page = self.fetcher.fetch(url.as_str()).await?;
                Ok(CategoryDirectory::new(categories::parse_categories(
                    &page.body,
                )?))
            })
            .await
    }
}

/// The site's "any/unfiltered" sentinel is the category whose display
/// name contains "any".
fn is_any_category(name: &str) -> bool {
    name.to_lowercase().contains("any")
}
