//! Log viewer: loads any JSON file and pretty-prints it.
//!
//! No schema check is made against [`itca_core::SessionLog`]; any valid JSON
//! document is shown. Key order from the file is kept.

use crate::error::LoadError;
use std::io::{ErrorKind, Write};
use std::path::Path;

/// Read and parse `path` as JSON.
pub fn load(path: &Path) -> Result<serde_json::Value, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => LoadError::NotFound {
            path: path.to_path_buf(),
        },
        _ => LoadError::Other {
            path: path.to_path_buf(),
            source,
        },
    })?;

    serde_json::from_str(&text).map_err(|source| LoadError::Decode {
        path: path.to_path_buf(),
        source,
    })
}

/// Header, 2-space indented document, and a dashed footer as long as the
/// header.
pub fn render(path: &Path, value: &serde_json::Value) -> String {
    let header = format!("--- Contents of {} ---", path.display());
    let footer = "-".repeat(header.chars().count());
    format!("\n{header}\n{value:#}\n{footer}")
}

/// Load `path` and print either its contents or the reason it could not be
/// shown. Only console write failures are returned as errors.
pub fn view(path: &Path, out: &mut impl Write) -> std::io::Result<()> {
    match load(path) {
        Ok(value) => {
            let text = render(path, &value);
            tracing::debug!(path = %path.display(), "log displayed");
            writeln!(out, "{text}")
        }
        Err(err) => {
            tracing::warn!(path = %path.display(), error = %err, "log could not be displayed");
            writeln!(out, "{err}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn footer_matches_header_length() {
        let text = render(Path::new("a.json"), &serde_json::json!({"k": 1}));
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[1], "--- Contents of a.json ---");
        assert_eq!(lines.last().unwrap().len(), lines[1].len());
        assert!(lines.last().unwrap().chars().all(|c| c == '-'));
    }

    #[test]
    fn key_order_is_preserved() {
        let value: serde_json::Value = serde_json::from_str(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
        let text = render(Path::new("x"), &value);
        let z = text.find("\"z\"").unwrap();
        let a = text.find("\"a\"").unwrap();
        let m = text.find("\"m\"").unwrap();
        assert!(z < a && a < m);
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = load(Path::new("/no/such/itca-log.json")).unwrap_err();
        assert!(matches!(err, LoadError::NotFound { .. }));
        assert_eq!(err.to_string(), "Error: File not found at '/no/such/itca-log.json'");
    }

    #[test]
    fn directory_is_an_unexpected_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load(dir.path()).unwrap_err();
        assert!(matches!(err, LoadError::Other { .. }));
        assert!(err
            .to_string()
            .starts_with("An unexpected error occurred while loading "));
    }
}
