//! FILENAME: appender/src/error.rs

use engine::table::TableRangeError;
use persistence::PersistenceError;
use thiserror::Error;

/// The single failure type surfaced across the append boundary.
/// Nothing in this crate panics its way past the caller.
#[derive(Error, Debug)]
pub enum AppendError {
    #[error("invalid row: {0}")]
    InvalidRow(String),

    #[error(transparent)]
    TableRange(#[from] TableRangeError),

    #[error(transparent)]
    Persistence(#[from] PersistenceError),
}
