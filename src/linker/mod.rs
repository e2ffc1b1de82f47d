//! Link maintenance over markdown documents.
//!
//! Every operation in this module is a pure text transform: it takes a full
//! document as a string and returns either a new string or a description of
//! what it found. Reading documents, listing the vault, and writing results
//! back are the caller's concern, which keeps all of the algorithms here
//! testable without a vault on disk.

pub mod dedupe;
pub mod document;
pub mod extract;
pub mod rewrite;
pub mod scan;

pub use dedupe::collapse_duplicates;
pub use document::{DocumentZones, split_frontmatter};
pub use extract::{extract_links, linked_names};
pub use rewrite::{LinksRefresh, refresh_links_line};
pub use scan::{LinkedMention, UnknownAliasError, link_mention, scan_mentions};
