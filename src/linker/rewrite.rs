//! Maintenance of the `links:` summary line.

use regex::Regex;

use super::extract::extract_links;
use crate::domain::WikiLink;

/// Outcome of refreshing a document's `links:` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LinksRefresh {
    /// The document contains no links at all; nothing to write.
    NoLinks,
    /// The `links:` line was rebuilt.
    Updated {
        /// The full document with the refreshed line.
        text: String,
        /// The links that make up the line, in first-seen order.
        links: Vec<WikiLink>,
    },
}

/// Rebuilds the `links:` summary line from the links found in the document.
///
/// The first line matching `^links:.*$` is cleared to a bare `links:` before
/// scanning so that the old summary cannot feed its own entries back into
/// the new one. A document without a `links:` line gets one prepended at the
/// very top, followed by a blank line, before the trimmed document.
///
/// Returns [`LinksRefresh::NoLinks`] when the document contains no links;
/// the caller leaves the document untouched in that case. The operation is
/// idempotent: refreshing its own output reproduces it.
pub fn refresh_links_line(text: &str) -> LinksRefresh {
    let line_re = Regex::new(r"(?m)^links:.*$").unwrap();

    // Clear (or create) the links line so the scan sees `links:` only.
    let (prepared, line_start) = match line_re.find(text) {
        Some(m) => {
            let mut cleared = String::with_capacity(text.len());
            cleared.push_str(&text[..m.start()]);
            cleared.push_str("links:");
            cleared.push_str(&text[m.end()..]);
            (cleared, m.start())
        }
        None => (format!("links:\n\n{}", text.trim()), 0),
    };

    let links = extract_links(&prepared);
    if links.is_empty() {
        return LinksRefresh::NoLinks;
    }

    let formatted = links
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    // The cleared line is exactly `links:` at `line_start`.
    let mut updated = String::with_capacity(prepared.len() + formatted.len());
    updated.push_str(&prepared[..line_start]);
    updated.push_str("links: ");
    updated.push_str(&formatted);
    updated.push_str(&prepared[line_start + "links:".len()..]);

    LinksRefresh::Updated {
        text: updated,
        links,
    }
}
