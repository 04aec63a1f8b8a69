//! URL construction for the site's endpoints.
//!
//! Paths are joined segment by segment so keywords get percent-encoded
//! and category path fragments (which arrive with a leading slash) do
//! not produce doubled slashes.

use url::Url;

use crate::error::{AcronymError, Result};

/// The site root, used to resolve the category directory.
pub(crate) fn root_url(base: &str) -> Result<Url> {
    with_fragments(base, &[])
}

/// Search endpoint: `{base}/aa-searchme?f=h&q={keywords}&cat={index}`.
///
/// `category_index` is the zero-based position of the category in the
/// ordered directory; 0 means "any/unfiltered". The site decides for
/// itself whether the keywords name an abbreviation or a definition.
pub(crate) fn search_url(base: &str, keywords: &str, category_index: usize) -> Result<Url> {
    let mut url = with_fragments(base, &["aa-searchme"])?;
    url.query_pairs_mut()
        .append_pair("f", "h")
        .append_pair("q", keywords)
        .append_pair("cat", &category_index.to_string());
    Ok(url)
}

/// Topics listing: `{base}[/{category_path}]/aa-topics`.
pub(crate) fn topics_url(base: &str, category_path: Option<&str>) -> Result<Url> {
    match category_path {
        Some(path) => with_fragments(base, &[path, "aa-topics"]),
        None => with_fragments(base, &["aa-topics"]),
    }
}

/// Direct term lookup: `{base}[/{category_path}]/{keywords}`.
pub(crate) fn keyword_page_url(
    base: &str,
    category_path: Option<&str>,
    keywords: &str,
) -> Result<Url> {
    match category_path {
        Some(path) => with_fragments(base, &[path, keywords]),
        None => with_fragments(base, &[keywords]),
    }
}

/// Random-term endpoint: `{base}/aa-random-term?nocache=1`.
pub(crate) fn random_url(base: &str) -> Result<Url> {
    let mut url = with_fragments(base, &["aa-random-term"])?;
    url.query_pairs_mut().append_pair("nocache", "1");
    Ok(url)
}

/// Append a fragment to an already-fetched page URL — a topic path or a
/// page number onto the post-redirect search URL.
pub(crate) fn join_segments(base: &str, fragment: &str) -> Result<Url> {
    with_fragments(base, &[fragment])
}

fn with_fragments(base: &str, fragments: &[&str]) -> Result<Url> {
    let mut url =
        Url::parse(base).map_err(|e| AcronymError::Parse(format!("invalid URL {base:?}: {e}")))?;
    {
        let mut segments = url
            .path_segments_mut()
            .map_err(|()| AcronymError::Parse(format!("URL {base:?} cannot carry a path")))?;
        segments.pop_if_empty();
        for fragment in fragments {
            for part in fragment.split('/').filter(|part| !part.is_empty()) {
                segments.push(part);
            }
        }
    }
    Ok(url)
}
