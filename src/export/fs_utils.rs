use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::ui::prompt::confirm;
use std::io::BufRead;
use std::path::{Path, PathBuf};

/// Decide where an export may be written.
///
/// A missing file, or `force`, keeps `path`. An existing file is only
/// overwritten after a `[y/N]` confirmation read from `input`. When
/// `input` is already exhausted nobody can answer, so the export goes to
/// the first free `<stem>-N.<ext>` next to `path` instead.
pub(crate) fn ensure_writable(
    path: &Path,
    force: bool,
    input: &mut dyn BufRead,
) -> AppResult<PathBuf> {
    if !path.exists() || force {
        return Ok(path.to_path_buf());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    if input.fill_buf()?.is_empty() {
        let fallback = next_free_path(path);
        warning(format!(
            "No input left to confirm overwrite (use --force to replace it); writing '{}' instead.",
            fallback.display()
        ));
        return Ok(fallback);
    }

    if confirm(input, "Overwrite?")? {
        info("Existing file will be overwritten.");
        Ok(path.to_path_buf())
    } else {
        Err(AppError::Export(
            "Export cancelled: existing file not overwritten".into(),
        ))
    }
}

/// `bookings.csv` -> `bookings-1.csv`, `bookings-2.csv`, ...
fn next_free_path(path: &Path) -> PathBuf {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "bookings".to_string());
    let ext = path.extension().map(|e| e.to_string_lossy().into_owned());

    (1u32..)
        .map(|n| {
            let name = match &ext {
                Some(ext) => format!("{stem}-{n}.{ext}"),
                None => format!("{stem}-{n}"),
            };
            path.with_file_name(name)
        })
        .find(|candidate| !candidate.exists())
        .unwrap_or_else(|| path.to_path_buf())
}

/// Create the parent directory of `path` when missing.
pub(crate) fn ensure_parent_dir(path: &Path) -> AppResult<()> {
    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        std::fs::create_dir_all(dir)?;
    }
    Ok(())
}
