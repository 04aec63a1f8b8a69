//! The site's ordered directory of searchable categories.
//!
//! Category order is semantically meaningful: the search endpoint
//! addresses a category by its zero-based position in the landing-page
//! listing, with position 0 meaning "any/unfiltered".

use scraper::{Html, Selector};

use crate::error::{AcronymError, Result};
use crate::types::Category;

/// Parse the landing page's category links in document order.
///
/// A page with no matching nodes yields an empty list, not an error —
/// callers treat "category not found" and "directory empty" as the same
/// soft-empty outcome.
pub(crate) fn parse_categories(html: &str) -> Result<Vec<Category>> {
    let document = Html::parse_document(html);
    let link_sel = Selector::parse(r#"div[class*="category"] ul li a"#)
        .map_err(|e| AcronymError::Parse(format!("invalid category selector: {e:?}")))?;

    let mut categories = Vec::new();
    for link in document.select(&link_sel) {
        let name = link.text().collect::<String>().trim().to_string();
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        categories.push(Category {
            name,
            path: href.to_string(),
        });
    }
    tracing::debug!(count = categories.len(), "categories parsed");
    Ok(categories)
}

/// Ordered name → path directory of the site's categories.
///
/// Resolved once per client from the landing page and cached; see
/// [`Client::categories`](crate::Client::categories).
#[derive(Debug, Clone)]
pub struct CategoryDirectory {
    entries: Vec<Category>,
}

impl CategoryDirectory {
    pub(crate) fn new(entries: Vec<Category>) -> Self {
        Self { entries }
    }

    /// Category names in the site's display order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|c| c.name.as_str())
    }

    /// Zero-based position of a category — the `cat` index the search
    /// endpoint expects.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.entries.iter().position(|c| c.name == name)
    }

    /// URL path fragment for a category's own pages.
    pub fn path(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.path.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
