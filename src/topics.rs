//! Topic extraction from topics pages and result pages.
//!
//! Topics come from two places. A dedicated topics page lists them as a
//! semantic "popular" section. A search-result page instead embeds them
//! as a script payload (`var cloudTopics = […];`) that feeds the site's
//! topic-cloud widget; the payload is a JSON array of objects whose
//! values are, in order, the topic name and its URL path fragment.

use scraper::{Html, Selector};

use crate::error::{AcronymError, Result};
use crate::types::Topic;

const CLOUD_TOPICS_MARKER: &str = "var cloudTopics = ";

/// Parse the "popular topics" section of a dedicated topics page.
///
/// Returns name/path pairs in document order; a page without the
/// section yields an empty list.
pub fn parse_popular_topics(html: &str) -> Result<Vec<Topic>> {
    let document = Html::parse_document(html);
    let link_sel = Selector::parse("div.popular ul li a")
        .map_err(|e| AcronymError::Parse(format!("invalid topics selector: {e:?}")))?;

    let mut topics = Vec::new();
    for link in document.select(&link_sel) {
        let name = link.text().collect::<String>().trim().to_string();
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if name.is_empty() {
            continue;
        }
        topics.push(Topic {
            name,
            path: href.to_string(),
        });
    }
    tracing::debug!(count = topics.len(), "popular topics parsed");
    Ok(topics)
}

/// Parse the topic payload embedded in a search-result page.
///
/// Scans the page's `div.nbx` script blocks for the payload marker.
/// A page without the block or the marker offers no topics and yields
/// an empty list.
///
/// # Errors
///
/// Returns [`AcronymError::Parse`] if the payload is present but
/// malformed — that content is needed for topic filtering.
pub fn parse_cloud_topics(html: &str) -> Result<Vec<Topic>> {
    let document = Html::parse_document(html);
    let script_sel = Selector::parse("div.nbx script")
        .map_err(|e| AcronymError::Parse(format!("invalid script selector: {e:?}")))?;

    for script in document.select(&script_sel) {
        let text = script.text().collect::<String>();
        let Some(start) = text.find(CLOUD_TOPICS_MARKER) else {
            continue;
        };
        let payload = &text[start + CLOUD_TOPICS_MARKER.len()..];
        let Some(end) = payload.find(';') else {
            return Err(AcronymError::Parse("unterminated topic payload".into()));
        };
        let payload = payload[..end].trim();

        let entries: Vec<serde_json::Map<String, serde_json::Value>> =
            serde_json::from_str(payload)
                .map_err(|e| AcronymError::Parse(format!("malformed topic payload: {e}")))?;

        let topics: Vec<Topic> = entries
            .iter()
            .filter_map(|entry| {
                let mut values = entry.values().filter_map(|v| v.as_str());
                let name = values.next()?;
                let path = values.next()?;
                Some(Topic {
                    name: name.to_string(),
                    path: path.to_string(),
                })
            })
            .collect();
        tracing::debug!(count = topics.len(), "cloud topics parsed");
        return Ok(topics);
    }
    Ok(Vec::new())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MOCK_TOPICS_HTML: &str = r#"<!DOCTYPE html>
<html>
<body>
<div class="popular">
  <ul>
    <li><a href="aerospace">Aerospace</a></li>
    <li><a href="computing">Computing</a></li>
  </ul>
</div>
<div class="other">
  <ul>
    <li><a href="nope">Not a topic</a></li>
  </ul>
</div>
</body>
</html>"#;

    #[test]
    fn popular_topics_parsed_in_order() {
        let topics = parse_popular_topics(MOCK_TOPICS_HTML).expect("should parse");
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].name, "Aerospace");
        assert_eq!(topics[0].path, "aerospace");
        assert_eq!(topics[1].name, "Computing");
    }

    #[test]
    fn page_without_popular_section_yields_empty() {
        let topics = parse_popular_topics("<html><body></body></html>").expect("should parse");
        assert!(topics.is_empty());
    }

    #[test]
    fn cloud_topics_parsed_from_script() {
        let html = r#"<div class="nbx"><script>
            var cloudWeights = [3, 1];
            var cloudTopics = [{"topic":"Technology","url":"technology"},{"topic":"Military","url":"military"}];
            render(cloudTopics);
        </script></div>"#;
        let topics = parse_cloud_topics(html).expect("should parse");
        assert_eq!(topics.len(), 2);
        assert_eq!(topics[0].name, "Technology");
        assert_eq!(topics[0].path, "technology");
        assert_eq!(topics[1].name, "Military");
        assert_eq!(topics[1].path, "military");
    }

    #[test]
    fn page_without_script_block_yields_empty() {
        let topics = parse_cloud_topics("<html><body></body></html>").expect("should parse");
        assert!(topics.is_empty());
    }

    #[test]
    fn script_without_marker_yields_empty() {
        let html = r#"<div class="nbx"><script>var somethingElse = 1;</script></div>"#;
        let topics = parse_cloud_topics(html).expect("should parse");
        assert!(topics.is_empty());
    }

    #[test]
    fn malformed_payload_is_a_parse_error() {
        let html = r#"<div class="nbx"><script>var cloudTopics = [{"topic": };</script></div>"#;
        let err = parse_cloud_topics(html).unwrap_err();
        assert!(err.to_string().contains("topic payload"));
    }

    #[test]
    fn unterminated_payload_is_a_parse_error() {
        let html = r#"<div class="nbx"><script>var cloudTopics = [{"topic":"T","url":"t"}]</script></div>"#;
        let err = parse_cloud_topics(html).unwrap_err();
        assert!(err.to_string().contains("unterminated"));
    }

    // ── Fixture-based parser tests ──────────────────────────────────────

    const FIXTURE_SEARCH_HTML: &str = include_str!("../test-data/search_page.html");

    #[test]
    fn fixture_cloud_topics_extracted() {
        let topics = parse_cloud_topics(FIXTURE_SEARCH_HTML).expect("should parse");
        let names: Vec<&str> = topics.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, ["Technology", "Military", "Aviation"]);
    }
}
