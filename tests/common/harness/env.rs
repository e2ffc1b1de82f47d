//! Isolated test vault with temp directory.

use super::{TestNote, WarrenCommand};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Isolated test vault backed by a temporary directory.
///
/// Creates a temp directory that is automatically cleaned up on drop.
/// Provides methods for adding notes and reading them back.
pub struct TestVault {
    /// The temporary directory (kept for lifetime management)
    _temp_dir: TempDir,
    /// Path to the vault directory
    vault_dir: PathBuf,
}

impl TestVault {
    /// Creates a new isolated test vault.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let vault_dir = temp_dir.path().to_path_buf();
        Self {
            _temp_dir: temp_dir,
            vault_dir,
        }
    }

    /// Returns the path to the vault directory.
    pub fn vault_dir(&self) -> &Path {
        &self.vault_dir
    }

    /// Adds a test note to the vault and returns its path.
    pub fn add_note(&self, note: &TestNote) -> PathBuf {
        let path = self.vault_dir.join(note.file_name());
        std::fs::write(&path, note.render()).expect("Failed to write test note");
        path
    }

    /// Writes a raw file into the vault and returns its path.
    pub fn write_file(&self, name: &str, content: &str) -> PathBuf {
        let path = self.vault_dir.join(name);
        std::fs::write(&path, content).expect("Failed to write file");
        path
    }

    /// Reads a note's full text back by base name.
    pub fn read_note(&self, name: &str) -> String {
        let path = self.vault_dir.join(format!("{name}.md"));
        std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {}", path.display(), e))
    }

    /// Creates a WarrenCommand configured for this vault.
    pub fn cmd(&self) -> WarrenCommand {
        WarrenCommand::new().dir(&self.vault_dir)
    }
}

impl Default for TestVault {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===========================================
    // Vault Foundation
    // ===========================================

    #[test]
    fn test_vault_creates_temp_directory() {
        let vault = TestVault::new();
        assert!(vault.vault_dir().exists(), "vault directory should exist");
        assert!(
            vault.vault_dir().is_dir(),
            "vault directory should be a directory"
        );
    }

    #[test]
    fn test_vault_cleanup_on_drop() {
        let path = {
            let vault = TestVault::new();
            vault.vault_dir().to_path_buf()
        };
        assert!(
            !path.exists(),
            "temp directory should be cleaned up on drop"
        );
    }

    #[test]
    fn test_vault_provides_command() {
        let vault = TestVault::new();
        let cmd = vault.cmd();
        let args = cmd.get_args();
        assert_eq!(args[0], "--dir");
        assert_eq!(args[1], vault.vault_dir().to_string_lossy());
    }

    // ===========================================
    // Note Addition
    // ===========================================

    #[test]
    fn test_vault_add_note_creates_file() {
        let vault = TestVault::new();
        let note = TestNote::new("Test Note").body("Body.");
        let path = vault.add_note(&note);

        assert!(path.exists(), "note file should be created");
        assert!(path.extension().is_some_and(|ext| ext == "md"));
    }

    #[test]
    fn test_vault_roundtrips_note_content() {
        let vault = TestVault::new();
        let note = TestNote::new("Rust").alias("Rustlang").body("Body.");
        vault.add_note(&note);

        assert_eq!(vault.read_note("Rust"), "---\naliases:\n  - Rustlang\n---\nBody.");
    }

    #[test]
    fn test_vault_add_multiple_notes() {
        let vault = TestVault::new();

        let path1 = vault.add_note(&TestNote::new("First"));
        let path2 = vault.add_note(&TestNote::new("Second"));

        assert!(path1.exists());
        assert!(path2.exists());
        assert_ne!(path1, path2);
    }
}
