//! Document zone splitting: frontmatter vs. body.

use regex::Regex;

/// The two logical zones of a document.
///
/// `frontmatter` is the leading `---`-delimited block (empty string when the
/// document has none); `body` is everything after it. Concatenating the two
/// always reproduces the original document byte for byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentZones<'a> {
    pub frontmatter: &'a str,
    pub body: &'a str,
}

impl DocumentZones<'_> {
    /// Reassembles the document from its zones.
    pub fn splice(&self, body: &str) -> String {
        format!("{}{}", self.frontmatter, body)
    }
}

/// Splits a leading `---`-delimited frontmatter block off a document.
///
/// Detection is a single lazy dashed-block match at the top of the file,
/// matching the first `---`...`---` span only. Frontmatter is opaque to
/// every operation in this crate: it is never scanned and never mutated,
/// only spliced back in front of a transformed body.
pub fn split_frontmatter(text: &str) -> DocumentZones<'_> {
    let re = Regex::new(r"(?s)^---\s*.*?---").unwrap();
    match re.find(text) {
        Some(m) => DocumentZones {
            frontmatter: &text[..m.end()],
            body: &text[m.end()..],
        },
        None => DocumentZones {
            frontmatter: "",
            body: text,
        },
    }
}
