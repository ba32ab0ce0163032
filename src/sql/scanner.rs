use crate::sql::{
    keyword::{WordClass, classify_lower},
    quote::QuoteTracker,
    statement::Statement,
};
use tracing::{debug, trace};

/// Characters that end a word.
pub const DELIMITERS: [char; 6] = [' ', '\n', '(', ')', ',', ';'];

/// Foreground classification of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, derive_more::Display)]
pub enum Highlight {
    #[default]
    #[display("default")]
    Default,
    #[display("keyword")]
    Keyword,
    #[display("type")]
    Type,
    #[display("literal")]
    Literal,
}

impl From<WordClass> for Highlight {
    fn from(class: WordClass) -> Self {
        match class {
            WordClass::Keyword => Highlight::Keyword,
            WordClass::Type => Highlight::Type,
        }
    }
}

/// Result of one scan pass: a highlight per character and the statement list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scan {
    pub statements: Vec<Statement>,
    pub highlights: Vec<Highlight>,
}

/// Single pass statement / highlight scanner.
///
/// Walks `chars` once with one character of lookahead and:
/// - tracks string literals (see [`QuoteTracker`]) so that `;` inside quotes
///   does not split a statement,
/// - colours literals, and retro-colours each completed word found in the
///   keyword table,
/// - splits the text at unquoted `;` into contiguous statements. A newline
///   directly after the terminator belongs to the statement it follows.
///
/// Guarantees:
/// - Total: any input (empty, unterminated quotes, only delimiters) scans.
/// - Covering: statements are contiguous and their lengths sum to `chars.len()`.
/// - Deterministic: all pass state is created fresh, so re-scanning unchanged
///   input yields an identical `Scan`.
///
/// Complexity: O(n) time, O(n) space.
pub fn scan(chars: &[char]) -> Scan {
    let mut state = ScanState::with_capacity(chars.len());
    for (offset, &cur) in chars.iter().enumerate() {
        let prev = offset.checked_sub(1).and_then(|i| chars.get(i)).copied();
        let next = chars.get(offset + 1).copied();
        state.step(offset, prev, cur, next);
    }
    state.finish()
}

/// Convenience wrapper scanning a string slice.
pub fn scan_str(text: &str) -> Scan {
    scan(&text.chars().collect::<Vec<_>>())
}

/// The word being accumulated, kept as the offsets of its characters so a
/// match can be coloured without walking backwards.
#[derive(Debug, Default)]
struct Word {
    offsets: Vec<usize>,
    lower: String,
}

impl Word {
    fn push(&mut self, offset: usize, ch: char) {
        self.offsets.push(offset);
        self.lower.extend(ch.to_lowercase());
    }

    fn clear(&mut self) {
        self.offsets.clear();
        self.lower.clear();
    }
}

#[derive(Debug, Default)]
struct ScanState {
    quotes: QuoteTracker,
    word: Word,
    statement_start: usize,
    statements: Vec<Statement>,
    highlights: Vec<Highlight>,
}

impl ScanState {
    fn with_capacity(len: usize) -> Self {
        Self {
            highlights: Vec::with_capacity(len),
            ..Self::default()
        }
    }

    fn step(&mut self, offset: usize, prev: Option<char>, cur: char, next: Option<char>) {
        let quote = self.quotes.advance(offset, cur, next);
        let at_end = next.is_none();

        self.highlights.push(if quote.in_literal() {
            Highlight::Literal
        } else {
            Highlight::Default
        });

        if DELIMITERS.contains(&cur) {
            self.flush_word();
        } else {
            self.word.push(offset, cur);
            // Deliberate: the final character joins the word before lookup,
            // so a keyword ending the stream (`scan_str("select")`) is
            // coloured. Flattened buffers always end in `\n` and never get here.
            if at_end {
                self.flush_word();
            }
        }

        if at_end || (!quote.in_literal() && cur == ';') {
            let mut statement = Statement::new(
                self.statement_start,
                offset + 1 - self.statement_start,
            );
            self.statement_start = offset + 1;

            if next == Some('\n') {
                statement.length += 1;
                self.statement_start += 1;
            }

            debug!(%statement, "statement boundary");
            self.statements.push(statement);
        }

        trace!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            show(prev),
            show(Some(cur)),
            show(next),
            quote.quote,
            self.statement_start,
            self.statements.len(),
            self.word.lower.replace('\n', "\\n"),
            if quote.escaped { "curEscaped" } else { "" },
            if quote.escapes_next { "nextEscaped" } else { "" },
        );
    }

    fn flush_word(&mut self) {
        if let Some(class) = classify_lower(&self.word.lower) {
            for &offset in &self.word.offsets {
                if let Some(h) = self.highlights.get_mut(offset) {
                    *h = class.into();
                }
            }
        }
        self.word.clear();
    }

    fn finish(self) -> Scan {
        Scan {
            statements: self.statements,
            highlights: self.highlights,
        }
    }
}

fn show(ch: Option<char>) -> String {
    match ch {
        None => "nil".to_string(),
        Some('\n') => "\\n".to_string(),
        Some(c) => c.to_string(),
    }
}
