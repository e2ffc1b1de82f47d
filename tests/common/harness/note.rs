//! Builder for test notes with sensible defaults.

/// Builder for creating vault note files.
///
/// Renders a markdown document with an optional frontmatter `aliases`
/// block, the way real vault notes declare them.
#[derive(Debug)]
pub struct TestNote {
    name: String,
    aliases: Vec<String>,
    body: String,
}

impl TestNote {
    /// Creates a new test note with the given base name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            body: String::new(),
        }
    }

    /// Adds a frontmatter alias.
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.aliases.push(alias.into());
        self
    }

    /// Sets the body content (builder method).
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    /// Returns the note's base name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the file name the note is written under.
    pub fn file_name(&self) -> String {
        format!("{}.md", self.name)
    }

    /// Renders the full document text.
    pub fn render(&self) -> String {
        if self.aliases.is_empty() {
            return self.body.clone();
        }

        let mut text = String::from("---\naliases:\n");
        for alias in &self.aliases {
            text.push_str(&format!("  - {}\n", alias));
        }
        text.push_str("---\n");
        text.push_str(&self.body);
        text
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_note_is_just_the_body() {
        let note = TestNote::new("Alpha").body("Hello.");
        assert_eq!(note.render(), "Hello.");
        assert_eq!(note.file_name(), "Alpha.md");
    }

    #[test]
    fn aliases_render_as_frontmatter() {
        let note = TestNote::new("Rust").alias("Rustlang").body("Body.");
        assert_eq!(note.render(), "---\naliases:\n  - Rustlang\n---\nBody.");
    }

    #[test]
    fn multiple_aliases_render_in_order() {
        let note = TestNote::new("Rust").alias("Rustlang").alias("RustLang");
        let text = note.render();
        assert!(text.contains("  - Rustlang\n  - RustLang\n"));
    }
}
