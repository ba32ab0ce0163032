//! Statement spans over the flattened editor text.
//!
//! A `Statement` is just a `start` offset and a `length` into the character
//! stream the scanner walked. A scan produces statements that are contiguous
//! and cover the whole stream: `statements[i].end() == statements[i + 1].start`.

/// A span of characters belonging to one statement, terminator included.
///
/// Offsets count characters (not bytes) of the flattened text, where every
/// source line is followed by a `\n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
#[display("{start}+{length}")]
pub struct Statement {
    pub start: usize,
    pub length: usize,
}

impl Statement {
    pub const fn new(start: usize, length: usize) -> Self {
        Self { start, length }
    }

    /// Exclusive end offset (`start + length`).
    pub const fn end(&self) -> usize {
        self.start + self.length
    }

    pub const fn len(&self) -> usize {
        self.length
    }

    pub const fn is_empty(&self) -> bool {
        self.length == 0
    }

    /// True if `offset` falls on one of this statement's characters,
    /// including its final terminator or newline.
    pub const fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end()
    }

    /// Collect the statement's characters out of the stream it was scanned from.
    ///
    /// Offsets past the end of `chars` are ignored rather than panicking.
    pub fn text(&self, chars: &[char]) -> String {
        chars
            .iter()
            .skip(self.start)
            .take(self.length)
            .collect()
    }
}
