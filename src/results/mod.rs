//! Shaping query results for the results pane.
//!
//! The execution layer hands over column names and rows of already fetched
//! values; this module renders the values to strings and works out how wide
//! each column should be drawn.
crate::reexport!(value);
crate::reexport!(column);
crate::reexport!(result_set);

use crate::*;
