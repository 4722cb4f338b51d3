//! itca — IT Career Advisor
//!
//! A console questionnaire that gives basic IT career advice and keeps a JSON
//! log of every session. This crate is the thin top layer: it prints the
//! banner text and dispatches to one of the two modes so that integration
//! tests can drive both without spawning the binary.
//!
//! # Modes
//!
//! ```text
//! itca                      interactive session ──► IT-career-advice-*.json
//! itca --load-json <file>   log viewer
//! ```

use itca_core::config::Config;
use itca_session::{session, viewer, Console, SessionReport};
use std::io::{BufRead, Write};
use std::path::Path;

const BANNER_RULE: &str = "------------------------------------------------------------";

/// Welcome text shown before an interactive session.
pub fn banner(program: &str) -> String {
    format!(
        "--- Welcome to the Simple IT Career Progression Advisor ---\n\
         This program will ask questions to provide basic IT career advice.\n\
         {BANNER_RULE}\n\
         (Tip: You can also view a previously saved session log.)\n\
         (To do so, run this program again using the --load-json option, like this:\n   \
         {program} --load-json <filename.json> )\n\
         {BANNER_RULE}"
    )
}

/// Interactive Session Mode.
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    mut output: W,
    config: &Config,
    program: &str,
) -> anyhow::Result<SessionReport> {
    writeln!(output, "{}", banner(program))?;
    let mut console = Console::new(input, output);
    let report = session::run(&mut console, config)?;
    Ok(report)
}

/// Log Viewer Mode.
pub fn run_viewer<W: Write>(path: &Path, mut output: W) -> anyhow::Result<()> {
    writeln!(output, "--- Load JSON Mode ---")?;
    writeln!(output, "Attempting to load: '{}'", path.display())?;
    viewer::view(path, &mut output)?;
    Ok(())
}
