// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Writes rendered exports to disk.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `content` to `path`, asking before overwriting unless `force`.
    pub fn write(
        path: &Path,
        content: &str,
        format: ExportFormat,
        rows: usize,
        force: bool,
    ) -> AppResult<()> {
        ensure_writable(path, force)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        info(format!(
            "Exporting to {}: {}",
            format.as_str().to_uppercase(),
            path.display()
        ));
        fs::write(path, content)?;

        notify_export_success(&format.as_str().to_uppercase(), rows, path);
        Ok(())
    }
}
