//! Archive link extraction from a version's download page.
//!
//! ### Table Selection
//! - Exactly one `table.docutils` must be present; anything else is an
//!   `AmbiguousTable` error carrying the page markup.
//!
//! ### Row Matching
//! - Rows are scanned in document order.
//! - A row's label is the text of its first cell, case-folded and trimmed.
//!   Rows without a first cell are skipped.
//! - The first row whose label contains the query wins; its first two
//!   `a[href]` elements are the archive and secondary-format links.

pub mod links;

pub use links::DocLinks;

use pydocs_core::{Error, Version};
use scraper::{ElementRef, Html, Selector};

/// Selector for the documentation table holding the download rows.
pub const DOC_TABLE_SELECTOR: &str = "table.docutils";

/// Row label searched for when no query is configured.
pub const DEFAULT_QUERY: &str = "html";

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("invalid selector")
}

/// Case-fold and trim a row label.
///
/// Folding is Unicode lowercasing, not full case folding: `ß` stays `ß`
/// rather than becoming `ss`. Download-page labels are ASCII, where the two
/// agree.
pub fn normalize_label(s: &str) -> String {
    s.to_lowercase().trim().to_string()
}

/// Locate the single documentation table in a parsed page.
pub fn find_doc_table<'a>(document: &'a Html, html: &str) -> Result<ElementRef<'a>, Error> {
    let tables: Vec<ElementRef<'a>> = document.select(&selector(DOC_TABLE_SELECTOR)).collect();

    match tables.as_slice() {
        [table] => Ok(*table),
        _ => Err(Error::AmbiguousTable { count: tables.len(), html: html.to_string() }),
    }
}

/// Find the raw `(archive, secondary)` hrefs of the first row matching `query`.
///
/// Hrefs are trimmed but otherwise returned as written in the page.
pub fn find_row_hrefs(html: &str, query: &str) -> Result<(String, String), Error> {
    let document = Html::parse_document(html);
    let table = find_doc_table(&document, html)?;

    let row_sel = selector("tr");
    let first_cell_sel = selector("td:first-child");
    let link_sel = selector("a[href]");

    for row in table.select(&row_sel) {
        let Some(first) = row.select(&first_cell_sel).next() else {
            continue;
        };

        let label = normalize_label(&first.text().collect::<String>());
        if !label.contains(query) {
            continue;
        }

        let hrefs: Vec<String> = row
            .select(&link_sel)
            .take(2)
            .filter_map(|a| a.value().attr("href"))
            .map(|h| h.trim().to_string())
            .collect();

        return match <[String; 2]>::try_from(hrefs) {
            Ok([archive, secondary]) => Ok((archive, secondary)),
            Err(found) => Err(Error::MissingLinks { row: row.html(), found: found.len() }),
        };
    }

    Err(Error::QueryNotFound { query: query.to_string(), table: table.html() })
}

/// Extract the download links for `version`, made absolute against `docs_base`.
pub fn extract_doc_links(html: &str, query: &str, docs_base: &str, version: &Version) -> Result<DocLinks, Error> {
    let (archive, secondary) = find_row_hrefs(html, query)?;
    tracing::debug!(%version, %archive, %secondary, "matched {query:?} row");
    Ok(DocLinks::resolve(&archive, &secondary, docs_base, version))
}
