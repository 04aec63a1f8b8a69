//! # allacronyms
//!
//! Unofficial client for allacronyms.com.
//!
//! This crate turns the site's rendered pages into structured records:
//! abbreviation, expansion, popularity rating, and a derived confidence
//! score. Callers supply free-text keywords (optionally narrowed by a
//! category or topic) and receive candidate expansions in the site's
//! own ranking order. The site decides for itself whether the keywords
//! name an abbreviation or a definition.
//!
//! ## Design
//!
//! - Scrapes the site's HTML with CSS selectors; no official API, no
//!   API keys
//! - Resolves the ordered category directory once per client and
//!   reuses it
//! - Paginates search results until the requested quantity is met or
//!   pages are exhausted, then normalizes confidence over the whole
//!   accumulated batch
//! - "Nothing matched" outcomes (unknown category, missing topic,
//!   non-success search response, zero rows) are empty results, not
//!   errors, so callers can tell a miss from a failed query
//! - Rotating browser User-Agents for reliability
//!
//! ## Example
//!
//! ```no_run
//! # async fn example() -> allacronyms::Result<()> {
//! use allacronyms::{Client, SearchQuery, SiteConfig};
//!
//! let client = Client::new(SiteConfig::default())?;
//! let results = client.search(&SearchQuery::new("nasa").quantity(5)).await?;
//! for record in &results {
//!     println!(
//!         "{}: {} (rating {}, confidence {:?})",
//!         record.abbreviation, record.definition, record.rating, record.confidence
//!     );
//! }
//! # Ok(())
//! # }
//! ```

pub mod categories;
pub mod client;
pub mod config;
pub mod confidence;
pub mod error;
pub mod extract;
pub mod fetcher;
pub mod http;
pub mod topics;
pub mod types;
mod urls;

pub use categories::CategoryDirectory;
pub use client::Client;
pub use config::SiteConfig;
pub use error::{AcronymError, Result};
pub use fetcher::{DocumentFetcher, FetchedPage, HttpFetcher};
pub use types::{Abbreviation, Category, SearchQuery, Topic, TopicQuery};

/// Search with a throwaway default-config client.
///
/// Convenience wrapper for one-off lookups; construct a [`Client`] and
/// reuse it when making several calls, so the category directory is
/// resolved only once.
///
/// # Errors
///
/// Same as [`Client::search`].
///
/// # Examples
///
/// ```no_run
/// # async fn example() -> allacronyms::Result<()> {
/// let results = allacronyms::search_default("tcp", 3).await?;
/// for record in &results {
///     println!("{}: {}", record.abbreviation, record.definition);
/// }
/// # Ok(())
/// # }
/// ```
pub async fn search_default(keywords: &str, quantity: usize) -> Result<Vec<Abbreviation>> {
    let client = Client::new(SiteConfig::default())?;
    client
        .search(&SearchQuery::new(keywords).quantity(quantity))
        .await
}
