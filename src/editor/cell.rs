use crate::*;

/// One character position of the editor text with its display attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub ch: char,
    /// Foreground class, rewritten by every scan.
    pub fg: Highlight,
    /// Background flag for characters of the active statement.
    pub active: bool,
}

impl Cell {
    pub const fn new(ch: char) -> Self {
        Self {
            ch,
            fg: Highlight::Default,
            active: false,
        }
    }
}

impl From<char> for Cell {
    fn from(ch: char) -> Self {
        Cell::new(ch)
    }
}
