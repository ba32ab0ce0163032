//! Quote / escape tracking for the statement scanner.
//!
//! The tracker is fed one character at a time together with a one character
//! lookahead. For every position it decides whether the *next* character is
//! escaped and whether the *current* character is a quote that opens or closes
//! a literal.
//!
//! Escapes:
//! - `\x` escapes `x` whenever a next character exists.
//! - Inside a literal, a doubled quote of the open kind (`''` or `""`) escapes
//!   its second half, unless the first half is the quote that opened the
//!   literal.
//! - Escapes never stack: an escaped character cannot escape the one after it,
//!   so `\\'` is an escaped backslash followed by a real quote.
//!
//! An unterminated literal is not an error; the tracker just stays open until
//! the end of the pass.

/// Which literal, if any, is currently open.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, derive_more::Display)]
pub enum Quote {
    #[default]
    #[display("nil")]
    None,
    #[display("'")]
    Single,
    #[display("\"")]
    Double,
}

impl Quote {
    /// The quote kind a character would open, `Quote::None` for anything else.
    pub const fn of(ch: char) -> Self {
        match ch {
            '\'' => Quote::Single,
            '"' => Quote::Double,
            _ => Quote::None,
        }
    }

    pub const fn as_char(self) -> Option<char> {
        match self {
            Quote::None => None,
            Quote::Single => Some('\''),
            Quote::Double => Some('"'),
        }
    }

    pub const fn is_open(self) -> bool {
        !matches!(self, Quote::None)
    }
}

/// Outcome of feeding one character to the tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step {
    /// Quote state while the current character is handled: already includes a
    /// literal opened by this character, not yet the closing of one.
    pub quote: Quote,
    /// The current character was consumed as an escape.
    pub escaped: bool,
    /// The next character will be consumed as an escape.
    pub escapes_next: bool,
    /// The current character is an unescaped quote, eligible to open or close.
    pub is_quote: bool,
}

impl Step {
    /// The current character belongs to a string literal.
    pub const fn in_literal(&self) -> bool {
        self.quote.is_open()
    }
}

/// Per-pass quote state. A fresh tracker must be used for every scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuoteTracker {
    quote: Quote,
    start: usize,
    escaped: bool,
}

impl QuoteTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn quote(&self) -> Quote {
        self.quote
    }

    /// Offset of the character that opened the current literal.
    pub const fn start(&self) -> Option<usize> {
        match self.quote {
            Quote::None => None,
            _ => Some(self.start),
        }
    }

    /// Feed the character at `offset`, with `next` as lookahead.
    pub fn advance(&mut self, offset: usize, cur: char, next: Option<char>) -> Step {
        let escaped = self.escaped;

        let slash_escape = next.is_some() && cur == '\\';
        let doubled_escape = self
            .quote
            .as_char()
            .is_some_and(|q| cur == q && next == Some(q) && self.start < offset);

        let escapes_next = !escaped && (slash_escape || doubled_escape);
        let is_quote = !escaped && !doubled_escape && Quote::of(cur).is_open();

        let mut opened = false;
        if is_quote && !self.quote.is_open() {
            self.quote = Quote::of(cur);
            self.start = offset;
            opened = true;
        }

        let step = Step {
            quote: self.quote,
            escaped,
            escapes_next,
            is_quote,
        };

        if is_quote && !opened && self.quote == Quote::of(cur) {
            self.quote = Quote::None;
        }

        self.escaped = escapes_next;
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Run the tracker over `input`, returning the literal flag per character.
    fn literal_mask(input: &str) -> String {
        let chars: Vec<char> = input.chars().collect();
        let mut tracker = QuoteTracker::new();
        chars
            .iter()
            .enumerate()
            .map(|(i, &c)| {
                if tracker.advance(i, c, chars.get(i + 1).copied()).in_literal() {
                    'L'
                } else {
                    '.'
                }
            })
            .collect()
    }

    #[test]
    fn plain_literal() {
        assert_eq!(literal_mask("a'bc'd"), ".LLLL.");
    }

    #[test]
    fn empty_literal_closes_on_second_quote() {
        assert_eq!(literal_mask("''x"), "LL.");
    }

    #[test]
    fn slash_escaped_quote_does_not_close() {
        assert_eq!(literal_mask(r"'a\'b'c"), "LLLLLL.");
    }

    #[test]
    fn doubled_quote_does_not_close() {
        assert_eq!(literal_mask("'a''b'c"), "LLLLLL.");
    }

    #[test]
    fn escapes_do_not_stack() {
        // `\\` consumes the second backslash, so the quote is real and opens.
        assert_eq!(literal_mask(r"\\'x"), "..LL");
    }

    #[test]
    fn other_quote_kind_is_content() {
        assert_eq!(literal_mask(r#"'a"b'c"d"#), "LLLLL.LL");
    }

    #[test]
    fn unterminated_literal_stays_open() {
        let input = "x 'abc; def";
        let chars: Vec<char> = input.chars().collect();
        let mut tracker = QuoteTracker::new();
        for (i, &c) in chars.iter().enumerate() {
            tracker.advance(i, c, chars.get(i + 1).copied());
        }
        assert_eq!(tracker.quote(), Quote::Single);
        assert_eq!(tracker.start(), Some(2));
    }

    #[test]
    fn trailing_backslash_escapes_nothing() {
        let mut tracker = QuoteTracker::new();
        let step = tracker.advance(0, '\\', None);
        assert!(!step.escapes_next);
    }

    #[test]
    fn slash_escape_is_reported_on_next_step() {
        let mut tracker = QuoteTracker::new();
        let first = tracker.advance(0, '\\', Some('\''));
        assert!(first.escapes_next);
        let second = tracker.advance(1, '\'', None);
        assert!(second.escaped);
        assert!(!second.is_quote);
        assert_eq!(tracker.quote(), Quote::None);
    }

    #[test]
    fn adjacent_literals_read_as_one() {
        // `'a''b'` is one literal containing an escaped quote, not two literals.
        assert_eq!(literal_mask("'a''b' c"), "LLLLLL..");
    }

    #[test]
    fn display_of_quote_state() {
        assert_eq!(Quote::None.to_string(), "nil");
        assert_eq!(Quote::Single.to_string(), "'");
        assert_eq!(Quote::Double.to_string(), "\"");
    }
}
