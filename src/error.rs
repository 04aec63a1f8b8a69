//! Error types for the allacronyms crate.
//!
//! All errors use stable string messages suitable for display to users
//! and programmatic handling. "Nothing matched" outcomes are never
//! errors — they surface as empty collections (or `None` from
//! [`Client::search_one`](crate::Client::search_one)) so callers can
//! always tell a miss apart from a query that could not execute.

/// Errors that can occur while querying the site.
#[derive(Debug, thiserror::Error)]
pub enum AcronymError {
    /// A required argument was missing or malformed (empty keywords,
    /// zero quantity). Always surfaced, never swallowed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A transport-level fetch failure: the host could not be reached,
    /// the request timed out, or the response body could not be read.
    #[error("fetch error: {0}")]
    Fetch(String),

    /// Content that was needed for parsing turned out to be malformed.
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid client configuration.
    #[error("config error: {0}")]
    Config(String),
}

/// Convenience type alias for allacronyms results.
pub type Result<T> = std::result::Result<T, AcronymError>;
