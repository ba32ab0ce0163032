//! Lexical scanning of the editor text.
//!
//! Everything needed to turn the raw editor text into highlight classes and a
//! statement list without a real SQL parser. The components are pragmatic:
//!
//! Modules:
//! - `keyword`   : Static word table (keyword vs. type name) and lookup.
//! - `quote`     : Quote / escape state machine fed one character at a time.
//! - `statement` : `Statement` span (start + length) into the flattened text.
//! - `scanner`   : Single pass O(n) scanner producing a `Scan`.
//!
//! Design Principles:
//! 1. Accept any text, including unterminated quotes (robust for live editing).
//! 2. Recompute everything on each pass; no state survives between scans.
//! 3. Only single and double quotes are understood. Comments and dialect
//!    specific literals are plain text.
//!
//! Example:
//! ```rust
//! use prequel::prelude::*;
//!
//! let scan = scan_str("select * from authors;\nselect * from books;");
//! assert_eq!(scan.statements, vec![Statement::new(0, 23), Statement::new(23, 20)]);
//! assert_eq!(scan.highlights[0], Highlight::Keyword);
//! ```
//!
//! NOTE: This is **not** a SQL parser; statement structure is never validated.

pub mod keyword;
pub mod quote;
pub mod scanner;
pub mod statement;

#[cfg(test)]
mod scanner_tests;

pub use keyword::{WordClass, classify, classify_lower};
pub use quote::{Quote, QuoteTracker, Step};
pub use scanner::{DELIMITERS, Highlight, Scan, scan, scan_str};
pub use statement::Statement;

/// Convenience prelude re-exporting the most commonly used items.
///
/// Import with:
/// `use prequel::prelude::*;`
pub mod prelude {
    pub use super::{Highlight, Scan, Statement, WordClass, classify, scan, scan_str};
}
