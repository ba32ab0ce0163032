crate::reexport!(cell);
crate::reexport!(buffer);
