//! Static decision-space corpora and log file fixtures used across harnesses.

/// Inputs that name an IT term and a career term.
pub const IN_SCOPE: &[&str] = &[
    "advice on IT career progression",
    "my tech job",
    "Information Technology career",
    "JOB in TECH",
    "how do I progress in it",
    // substring quirks: "kit" and "submit" both contain "it"
    "a kit for my job",
    "submit my career plan",
];

/// Inputs missing at least one of the two term sets.
pub const OUT_OF_SCOPE: &[&str] = &[
    "help me cook dinner",
    "KIT",
    "technology trends",
    "career change",
    "",
    "   ",
];

/// A JSON document that is not a session log but is valid JSON.
pub const FOREIGN_JSON: &str = r#"{"zeta": [1, 2, 3], "alpha": {"nested": true}, "mid": null}"#;

/// Write `contents` to `name` inside `dir` and return the full path.
pub fn write_file(dir: &std::path::Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// All files in `dir` whose name matches the session log pattern.
pub fn session_log_files(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let mut files: Vec<_> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().path())
        .filter(|p| {
            p.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(is_session_log_name)
        })
        .collect();
    files.sort();
    files
}

/// `IT-career-advice-YYYYMMDD-HHMMSS.json`
pub fn is_session_log_name(name: &str) -> bool {
    let Some(stamp) = name
        .strip_prefix("IT-career-advice-")
        .and_then(|rest| rest.strip_suffix(".json"))
    else {
        return false;
    };
    let bytes = stamp.as_bytes();
    bytes.len() == 15
        && bytes[8] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 8 || b.is_ascii_digit())
}
