// PRDatabase — Export Module
//
// Pure text generators for the two downloadable exports: a SQL dump of the
// user's records and a Python/SQLite desktop viewer template.

mod engine;
mod sql;

use std::path::{Path, PathBuf};

pub use engine::{engine_export, engine_script, ENGINE_FILE_NAME};
pub use sql::{sql_dump, sql_export, sql_file_name, table_name};

/// A generated export, ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    pub file_name: String,
    pub contents: String,
}

impl ExportFile {
    /// Write the export into `dir` (created if missing) and return its path.
    pub fn write_to(&self, dir: &Path) -> std::io::Result<PathBuf> {
        std::fs::create_dir_all(dir)?;
        let path = dir.join(&self.file_name);
        std::fs::write(&path, self.contents.as_bytes())?;

        tracing::info!(path = %path.display(), bytes = self.contents.len(), "Export written");
        Ok(path)
    }
}
