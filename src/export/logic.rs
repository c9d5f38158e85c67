use crate::errors::{AppError, AppResult};
use crate::export::fs_utils::{ensure_parent_dir, ensure_writable};
use crate::export::xlsx::export_xlsx;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::booking::BookingRecord;
use crate::ui::messages::{info, warning};
use crate::utils::path::resolve_against;
use std::fs;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Writes the session's booking log to disk.
pub struct ExportLogic;

impl ExportLogic {
    /// Default file name for a format, e.g. `bookings.csv`.
    pub fn default_file_name(format: &ExportFormat) -> String {
        format!("bookings.{}", format.as_str())
    }

    /// Resolve `file` (or the default name) against `export_dir`.
    pub fn target_path(export_dir: &Path, file: Option<&str>, format: &ExportFormat) -> PathBuf {
        let name = file
            .map(str::to_string)
            .unwrap_or_else(|| Self::default_file_name(format));
        resolve_against(export_dir, &name)
    }

    /// Write the booking log to `path`.
    ///
    /// Returns `Ok(None)` when there is nothing to export, otherwise the
    /// path actually written (which differs from `path` when an existing
    /// file could not be confirmed for overwrite). `input` answers the
    /// overwrite confirmation.
    pub fn export(
        bookings: &[BookingRecord],
        format: &ExportFormat,
        path: &Path,
        force: bool,
        input: &mut dyn BufRead,
    ) -> AppResult<Option<PathBuf>> {
        if bookings.is_empty() {
            warning("No bookings to export.");
            return Ok(None);
        }

        ensure_parent_dir(path)?;
        let target = ensure_writable(path, force, input)?;

        match format {
            ExportFormat::Csv => write_csv(bookings, &target)?,
            ExportFormat::Json => write_json(bookings, &target)?,
            ExportFormat::Xlsx => export_xlsx(bookings, &target)?,
        }

        Ok(Some(target))
    }
}

/// One row per booking; the header comes from the record's serde names.
fn write_csv(bookings: &[BookingRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting {} booking(s) to CSV: {}", bookings.len(), path.display()));

    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("cannot open {}: {e}", path.display())))?;
    for record in bookings {
        wtr.serialize(record)
            .map_err(|e| AppError::Export(format!("seat {}: {e}", record.seat_number)))?;
    }
    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}

fn write_json(bookings: &[BookingRecord], path: &Path) -> AppResult<()> {
    info(format!("Exporting {} booking(s) to JSON: {}", bookings.len(), path.display()));

    let body = serde_json::to_string_pretty(bookings)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;
    fs::write(path, body)?;

    notify_export_success("JSON", path);
    Ok(())
}
