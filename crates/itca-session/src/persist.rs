//! Log persistence: writes a [`SessionLog`] to a timestamped JSON file.
//!
//! Filenames have second precision. Two saves within the same second and
//! directory produce the same name, and the later one overwrites the earlier.
//! The write is a single `fs::write`, not a temp-file rename.

use crate::error::SaveError;
use chrono::{DateTime, Local};
use itca_core::{config::SessionConfig, SessionLog};
use std::path::PathBuf;

/// `<prefix>-YYYYMMDD-HHMMSS.json` for the local time `at`.
pub fn log_filename(prefix: &str, at: &DateTime<Local>) -> String {
    format!("{prefix}-{}.json", at.format("%Y%m%d-%H%M%S"))
}

/// Serialize `log` with 2-space indentation and write it under
/// `session.output_dir`. Returns the path written.
pub fn save(
    log: &SessionLog,
    session: &SessionConfig,
    at: DateTime<Local>,
) -> Result<PathBuf, SaveError> {
    let json = log.to_pretty_json()?;
    let path = session
        .output_dir
        .join(log_filename(&session.filename_prefix, &at));

    std::fs::write(&path, json).map_err(|source| SaveError::Write {
        path: path.clone(),
        source,
    })?;

    tracing::info!(path = %path.display(), session_id = %log.session_id, "session log saved");
    Ok(path)
}
