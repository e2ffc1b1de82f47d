//! Wiki-style link type: `[[target#section|alias]]`.

use std::fmt;

/// A parsed wiki-style link.
///
/// The serialized form is `[[target#section|alias]]` with `#section` and
/// `|alias` each omitted when absent. Two links are equal exactly when their
/// serialized forms are equal; captured text is kept verbatim (no trimming),
/// so `[[Foo]]` and `[[ Foo ]]` are distinct links.
///
/// # Examples
///
/// ```
/// use warren::domain::WikiLink;
///
/// let link = WikiLink::new("Alpha", None::<&str>, Some("A"));
/// assert_eq!(link.to_string(), "[[Alpha|A]]");
/// assert_eq!(link.dedupe_key(), "Alpha");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WikiLink {
    target: String,
    section: Option<String>,
    alias: Option<String>,
}

impl WikiLink {
    /// Creates a link from its raw parts.
    pub fn new(
        target: impl Into<String>,
        section: Option<impl Into<String>>,
        alias: Option<impl Into<String>>,
    ) -> Self {
        Self {
            target: target.into(),
            section: section.map(Into::into),
            alias: alias.map(Into::into),
        }
    }

    /// Returns the link target (note name).
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Returns the optional section anchor.
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref()
    }

    /// Returns the optional display alias.
    pub fn alias(&self) -> Option<&str> {
        self.alias.as_deref()
    }

    /// Returns the key used for duplicate collapsing.
    ///
    /// `target#section` when a section anchor is present, else the bare
    /// target. The alias never participates in the key: `[[Alpha]]` and
    /// `[[Alpha|A]]` share the key `Alpha`.
    pub fn dedupe_key(&self) -> String {
        match &self.section {
            Some(section) => format!("{}#{}", self.target, section),
            None => self.target.clone(),
        }
    }

    /// Returns the text a duplicate occurrence is demoted to:
    /// the alias if present, else the bare target.
    pub fn display_text(&self) -> &str {
        self.alias.as_deref().unwrap_or(&self.target)
    }
}

impl fmt::Display for WikiLink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[[{}", self.target)?;
        if let Some(section) = &self.section {
            write!(f, "#{}", section)?;
        }
        if let Some(alias) = &self.alias {
            write!(f, "|{}", alias)?;
        }
        write!(f, "]]")
    }
}
