//! Client configuration with sensible defaults.
//!
//! [`SiteConfig`] controls which site instance is queried and how
//! requests behave. The defaults point at the public site and are tuned
//! for reliable scraping of its rendered pages.

use url::Url;

use crate::error::{AcronymError, Result};

/// The public site this client was written against.
pub const DEFAULT_BASE_URL: &str = "https://www.allacronyms.com";

/// Configuration for an abbreviation-search client.
///
/// Use [`Default::default()`] for sensible defaults, or construct with
/// field overrides for custom behaviour (e.g. pointing at a mirror).
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// Root URL of the site. Every endpoint path is joined onto this.
    pub base_url: String,
    /// Per-request HTTP timeout in seconds.
    pub timeout_seconds: u64,
    /// Custom User-Agent string. If `None`, rotates through a built-in
    /// list of realistic browser User-Agents.
    pub user_agent: Option<String>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 8,
            user_agent: None,
        }
    }
}

impl SiteConfig {
    /// Validates this configuration, returning an error if any field is
    /// invalid.
    ///
    /// Checks:
    /// - `base_url` must parse as an absolute URL that can carry a path
    /// - `timeout_seconds` must be greater than 0
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| AcronymError::Config(format!("base_url is not a valid URL: {e}")))?;
        if url.cannot_be_a_base() {
            return Err(AcronymError::Config(
                "base_url cannot carry a path".into(),
            ));
        }
        if self.timeout_seconds == 0 {
            return Err(AcronymError::Config(
                "timeout_seconds must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}
