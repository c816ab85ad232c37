//! FILENAME: appender/src/backup.rs
//! PURPOSE: Timestamped sibling copy of the document before modification.
//! CONTEXT: A best-effort courtesy copy. Callers log a failure and proceed
//! with the append; backup success or failure never alters the append.

use chrono::Local;
use std::io;
use std::path::{Path, PathBuf};

/// Copy `name.xlsx` to `name - Backup YYYY MM DD HH MM SS.xlsx` beside it.
/// Returns the path of the copy.
pub fn create_backup(path: &Path) -> io::Result<PathBuf> {
    if !path.exists() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("File not found: {}", path.display()),
        ));
    }

    let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or("backup");
    let timestamp = Local::now().format("%Y %m %d %H %M %S");
    let file_name = match path.extension().and_then(|s| s.to_str()) {
        Some(ext) => format!("{} - Backup {}.{}", stem, timestamp, ext),
        None => format!("{} - Backup {}", stem, timestamp),
    };

    let backup_path = path.with_file_name(file_name);
    std::fs::copy(path, &backup_path)?;
    Ok(backup_path)
}
