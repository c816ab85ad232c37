//! FILENAME: appender/src/lib.rs
//! PURPOSE: Library entry point for the table row append engine.
//! CONTEXT: The public surface is `append_row`/`append_row_with_backup` plus
//! the caller-boundary helpers (row validation, free-text date parsing,
//! backup). Transport layers live outside this crate and call in with an
//! already-validated row and an explicit document path.

pub mod append;
pub mod backup;
pub mod copy;
pub mod dates;
pub mod error;
pub mod formula;
pub mod values;

pub use append::{append_row, append_row_with_backup};
pub use backup::create_backup;
pub use dates::parse_flexible;
pub use error::AppendError;
pub use values::{validate_row, RowValue};
