use crate::*;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

/// Text the editor starts with when there is no draft yet.
pub const FALLBACK_SQL: &str = "show tables;";

/// Scratch file mirroring the editor text between sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
    path: PathBuf,
}

impl Draft {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the draft, or [`FALLBACK_SQL`] when the file does not exist yet.
    pub fn load(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no draft yet, using fallback");
                Ok(FALLBACK_SQL.to_string())
            }
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, text: &str) -> Result {
        fs::write(&self.path, text)?;
        trace!(path = %self.path.display(), bytes = text.len(), "draft saved");
        Ok(())
    }

    /// Mirror the editor text, called on every text change.
    pub fn save_buffer(&self, buffer: &Buffer) -> Result {
        self.save(&buffer.text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;

    #[test]
    fn missing_draft_uses_fallback() {
        let dir = scratch_dir();
        let draft = Draft::new(dir.path().join("missing.sql"));
        assert_eq!(draft.load().expect("load"), FALLBACK_SQL);
    }

    #[test]
    fn saved_buffer_round_trips() {
        common_init();
        let dir = scratch_dir();
        let draft = Draft::new(dir.path().join("prequel.sql"));
        let buffer = Buffer::from_text("select 1;\nselect 'a;b';");

        draft.save_buffer(&buffer).expect("save");
        let restored = Buffer::from_text(&draft.load().expect("load"));

        assert_eq!(restored.text(), buffer.text());
        assert_eq!(restored.statements(), buffer.statements());
    }

    #[test]
    fn unreadable_draft_is_an_error() {
        // A directory cannot be read as a file.
        let dir = scratch_dir();
        let draft = Draft::new(dir.path());
        assert!(matches!(draft.load(), Err(Error::Io(_))));
    }
}
