//! Statement-aware scanning for an interactive SQL editor.
//!
//! The editor pane holds one or more `;`-separated statements. On every text
//! change or cursor move the whole buffer is re-scanned: characters are
//! classified for highlighting, the text is split into contiguous statements
//! and the statement under the cursor is picked as the one to execute.
//!
//! ```rust
//! use prequel::*;
//!
//! let mut buffer = Buffer::from_text("select 1;\nselect 2;");
//! buffer.set_cursor(Cursor::new(12));
//! assert_eq!(buffer.active_query().unwrap(), "select 2;\n");
//! ```
reexport!(testing, test);
reexport!(error);
reexport!(config);
reexport!(sql);
reexport!(logic);
reexport!(editor);
reexport!(results);
reexport!(draft);
#[allow(unused_imports)]
pub(crate) use tracing::{debug, error, info, span, trace, warn};

#[macro_export]
macro_rules! reexport {
    ($module:ident) => {
        $crate::reexport!($module, false);
    };
    ($module:ident, test) => {
        $crate::reexport!($module, true);
    };
    ($module:ident, $is_test:literal) => {
        #[cfg_attr($is_test, cfg(test))]
        mod $module;
        #[cfg_attr($is_test, cfg(test))]
        #[allow(unused_imports)]
        #[allow(ambiguous_glob_reexports)]
        pub use $module::*;
    };
}
