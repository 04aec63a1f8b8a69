//! Core types: abbreviation records, directory entries, and query inputs.

use serde::{Deserialize, Serialize};

/// A single candidate expansion extracted from a result page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Abbreviation {
    /// The short form, e.g. `NASA`.
    pub abbreviation: String,
    /// The expansion the site pairs with it.
    pub definition: String,
    /// Site-assigned popularity rating. May be negative or zero.
    pub rating: i64,
    /// Derived weight of this record relative to all records in its
    /// batch, proportional to the shifted rating. `None` until a batch
    /// normalization pass fills it in; never computed per record in
    /// isolation.
    pub confidence: Option<f64>,
}

/// A top-level subject-matter filter with an order-significant position
/// in the site's category directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, as listed on the landing page.
    pub name: String,
    /// URL path fragment for the category's own pages.
    pub path: String,
}

/// A site-defined disambiguating sub-filter under a keyword/category
/// search. Transient: scoped to one resolution call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Topic {
    /// Display name.
    pub name: String,
    /// URL path fragment appended to a search URL to narrow it.
    pub path: String,
}

/// Inputs for one search call.
///
/// Built with [`SearchQuery::new`] plus the builder-style setters.
/// `quantity` defaults to 1.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    /// Free-text keywords; the site decides whether they name an
    /// abbreviation or a definition. Must be non-empty.
    pub keywords: String,
    /// Optional category filter by display name.
    pub category: Option<String>,
    /// Optional topic filter by display name.
    pub topic: Option<String>,
    /// Maximum number of records to return. Must be at least 1.
    pub quantity: usize,
}

impl SearchQuery {
    /// A query for the given keywords with no filters and quantity 1.
    pub fn new(keywords: impl Into<String>) -> Self {
        Self {
            keywords: keywords.into(),
            category: None,
            topic: None,
            quantity: 1,
        }
    }

    /// Filter results to a category (by display name).
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Narrow results to a topic (by display name).
    pub fn topic(mut self, topic: impl Into<String>) -> Self {
        self.topic = Some(topic.into());
        self
    }

    /// How many records to return at most.
    pub fn quantity(mut self, quantity: usize) -> Self {
        self.quantity = quantity;
        self
    }
}

/// What to resolve topics for.
///
/// Topics can be listed for a category alone (from the site's dedicated
/// topics pages) or for a keyword lookup (from data embedded in the
/// result page). Modelling the dispatch as a tagged choice keeps it
/// exhaustive instead of branching on two nullable arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TopicQuery {
    /// Nothing to resolve; yields no topics.
    None,
    /// Popular topics for a category (by display name).
    ByCategory(String),
    /// Topics offered for a keyword lookup, optionally narrowed by a
    /// category (by display name).
    ByKeyword {
        /// Free-text keywords.
        keywords: String,
        /// Optional category filter.
        category: Option<String>,
    },
}

impl TopicQuery {
    /// Build a query from the optional-argument combination the
    /// original site API exposes: keywords take precedence, a category
    /// alone lists that category's topics, and neither yields
    /// [`TopicQuery::None`].
    pub fn from_parts(keywords: Option<String>, category: Option<String>) -> Self {
        match (keywords, category) {
            (Some(keywords), category) => Self::ByKeyword { keywords, category },
            (None, Some(category)) => Self::ByCategory(category),
            (None, None) => Self::None,
        }
    }
}
