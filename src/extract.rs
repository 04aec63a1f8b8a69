//! Abbreviation extraction from result pages.
//!
//! A result page lists candidate expansions under `div.rows
//! .items_content`. Only the FIRST `ul` in that container is the actual
//! result list; the second holds "related" terms and is excluded. The
//! site renders the same logical record in two markup layouts, so rows
//! are parsed through a small fallback chain:
//!
//! - Layout A: a `div.pairAbb` link carries the short form and
//!   `div.pairDef` carries the definition text.
//! - Layout B: there is no `div.pairAbb`; the short form is a link
//!   embedded inside `div.pairDef` and the definition is the text
//!   around it.

use scraper::{ElementRef, Html, Selector};

use crate::confidence::assign_confidence;
use crate::error::{AcronymError, Result};
use crate::types::Abbreviation;

/// Extract the abbreviation records from one result page.
///
/// Zero rows is a valid outcome and returns an empty vector. Rows whose
/// rating is missing or non-numeric are skipped rather than failing the
/// whole page.
///
/// When `compute_confidence` is true the extracted batch is normalized
/// before returning. Callers accumulating several pages pass `false`
/// and normalize once over the accumulated set.
///
/// # Errors
///
/// Returns [`AcronymError::Parse`] if a selector fails to compile.
pub fn extract_abbreviations(html: &str, compute_confidence: bool) -> Result<Vec<Abbreviation>> {
    let document = Html::parse_document(html);

    let container_sel = sel("div.rows.items_content")?;
    let list_sel = sel("ul")?;
    let row_sel = sel("li")?;
    let rating_sel = sel("div.n")?;
    let short_form_sel = sel("div.pairAbb a")?;
    let definition_sel = sel("div.pairDef")?;
    let embedded_link_sel = sel("div.pairDef a")?;

    let mut records = Vec::new();

    let Some(container) = document.select(&container_sel).next() else {
        return Ok(records);
    };
    // First list only; the second is the "related" list.
    let Some(list) = container.select(&list_sel).next() else {
        return Ok(records);
    };

    for row in list.select(&row_sel) {
        let rating = match row.select(&rating_sel).next() {
            Some(el) => match el.text().collect::<String>().trim().parse::<i64>() {
                Ok(rating) => rating,
                Err(_) => continue,
            },
            None => continue,
        };

        let Some(definition_el) = row.select(&definition_sel).next() else {
            continue;
        };

        let abbreviation = match row.select(&short_form_sel).next() {
            Some(link) => link.text().collect::<String>().trim().to_string(),
            None => match row.select(&embedded_link_sel).next() {
                Some(link) => link.text().collect::<String>().trim().to_string(),
                None => continue,
            },
        };

        let Some(definition) = direct_text(&definition_el) else {
            continue;
        };

        records.push(Abbreviation {
            abbreviation,
            definition,
            rating,
            confidence: None,
        });
    }

    tracing::debug!(count = records.len(), "abbreviations extracted");

    if compute_confidence {
        assign_confidence(&mut records);
    }
    Ok(records)
}

/// Read the total page count from the pagination indicator.
///
/// The counter link's text has the form `current/total`; returns the
/// total, or `None` when the indicator is absent or unreadable (a page
/// without one simply has nothing more to fetch).
pub(crate) fn parse_page_count(html: &str) -> Result<Option<u32>> {
    let document = Html::parse_document(html);
    let counter_sel = sel(r#"div.aa-pagination a[class*="counter"]"#)?;

    let Some(counter) = document.select(&counter_sel).next() else {
        return Ok(None);
    };
    let text = counter.text().collect::<String>();
    Ok(text
        .trim()
        .split('/')
        .nth(1)
        .and_then(|total| total.trim().parse::<u32>().ok()))
}

fn sel(css: &str) -> Result<Selector> {
    Selector::parse(css)
        .map_err(|e| AcronymError::Parse(format!("invalid selector {css:?}: {e:?}")))
}

/// First non-empty direct text node of an element, trimmed. Text inside
/// nested elements (e.g. an embedded link) is not included.
fn direct_text(el: &ElementRef) -> Option<String> {
    el.children().find_map(|child| {
        let text = child.value().as_text()?;
        let trimmed = text.text.trim();
        (!trimmed.is_empty()).then(|| trimmed.to_string())
    })
}
