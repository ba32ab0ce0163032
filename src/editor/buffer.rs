use crate::*;
use itertools::Itertools as _;

pub type Line = Vec<Cell>;

/// Editor text as lines of cells plus the cursor.
///
/// Scanning works on the *flattened* form: every line followed by a `\n`,
/// including the last one. Cursor offsets and statement spans are character
/// offsets into that form.
///
/// Every text change or cursor move re-scans the whole buffer (`refresh`),
/// rewriting the highlight and active flags of every cell in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Buffer {
    lines: Vec<Line>,
    cursor: Cursor,
    statements: Vec<Statement>,
}

impl Buffer {
    /// Build a buffer from newline separated text. The cursor starts at 0.
    pub fn from_text(text: &str) -> Self {
        let mut buffer = Self::default();
        buffer.set_text(text);
        buffer
    }

    /// Replace the whole text ("text changed").
    pub fn set_text(&mut self, text: &str) {
        self.lines = text
            .split('\n')
            .map(|line| line.chars().map(Cell::new).collect())
            .collect();
        self.refresh();
    }

    /// Move the cursor ("cursor moved").
    pub fn set_cursor(&mut self, cursor: Cursor) {
        self.cursor = cursor;
        self.refresh();
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn lines(&self) -> &[Line] {
        &self.lines
    }

    /// Statements found by the last scan.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Length of the flattened text (every line plus its newline).
    pub fn len(&self) -> usize {
        self.lines.iter().map(|line| line.len() + 1).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Cursor for a `(line, column)` position. Positions past the end of a
    /// line or of the buffer are clamped to the nearest real position.
    pub fn cursor_at(&self, line: usize, column: usize) -> Cursor {
        let Some(last) = self.lines.len().checked_sub(1) else {
            return Cursor::new(0);
        };
        let line = line.min(last);
        let before: usize = self.lines[..line].iter().map(|l| l.len() + 1).sum();
        Cursor::new(before + column.min(self.lines[line].len()))
    }

    /// Cursor just after the last character of the last line.
    pub fn end_cursor(&self) -> Cursor {
        self.cursor_at(usize::MAX, usize::MAX)
    }

    /// The flattened character stream the scanner walks.
    pub fn flatten(&self) -> Vec<char> {
        self.lines
            .iter()
            .flat_map(|line| line.iter().map(|cell| cell.ch).chain(std::iter::once('\n')))
            .collect()
    }

    /// The source text, lines joined with `\n`.
    pub fn text(&self) -> String {
        self.lines
            .iter()
            .map(|line| line.iter().map(|cell| cell.ch).collect::<String>())
            .join("\n")
    }

    /// Re-scan the whole buffer and rewrite every cell's attributes.
    pub fn refresh(&mut self) -> &[Statement] {
        let Scan {
            statements,
            highlights,
        } = scan(&self.flatten());

        let active = self.cursor.resolve(&statements).ok();
        if active.is_none() {
            debug!("no statement to mark active");
        }

        let mut offset = 0;
        for line in &mut self.lines {
            for cell in line.iter_mut() {
                cell.fg = highlights.get(offset).copied().unwrap_or_default();
                cell.active = active.is_some_and(|s| s.contains(offset));
                offset += 1;
            }
            // synthetic newline
            offset += 1;
        }

        debug!(
            statements = statements.len(),
            active = ?active.map(|s| s.to_string()),
            "buffer refreshed"
        );
        self.statements = statements;
        &self.statements
    }

    /// The statement under the cursor, i.e. what an execute would run.
    pub fn active_statement(&self) -> Result<Statement> {
        self.cursor.resolve(&self.statements)
    }

    /// Text of the statement under the cursor, terminator and trailing
    /// newline included, exactly as it should be handed to the database.
    pub fn active_query(&self) -> Result<String> {
        let statement = self.active_statement()?;
        Ok(statement.text(&self.flatten()))
    }
}
