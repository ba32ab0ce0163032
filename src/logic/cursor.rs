use crate::*;

/// Cursor position as a character offset into the flattened editor text.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Default,
    derive_more::From,
    derive_more::Display,
)]
#[display("{offset}")]
pub struct Cursor {
    offset: usize,
}

impl Cursor {
    pub fn new(offset: usize) -> Self {
        Self { offset }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Find the statement the cursor is in.
    ///
    /// Statements are checked in order and the first one whose last character
    /// is at or after the cursor wins, so a cursor resting on a terminator or
    /// its trailing newline still belongs to that statement. A cursor past the
    /// end of every statement falls back to the last one, so the final
    /// statement stays runnable from the end of the buffer.
    ///
    /// Fails with [`Error::NoStatement`] only when `statements` is empty.
    pub fn resolve(&self, statements: &[Statement]) -> Result<Statement> {
        let found = statements
            .iter()
            .find(|s| self.offset < s.end())
            .or_else(|| {
                debug!(cursor = self.offset, "cursor past last statement, using last");
                statements.last()
            })
            .copied()
            .ok_or(Error::NoStatement)?;

        debug!(cursor = self.offset, statement = %found, "cursor in statement");
        Ok(found)
    }
}
