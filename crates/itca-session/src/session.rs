//! Interactive session: gate, questionnaire, advice, then persistence.
//!
//! The in-progress [`SessionLog`] is built once, after the gate or after the
//! questionnaire, and handed to [`publish`] which prints and saves it.

use crate::{console::Console, error::SessionError, persist, questionnaire};
use chrono::Local;
use itca_core::{advice, config::Config, gate, SessionLog, INITIAL_PROMPT};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use uuid::Uuid;

const RULE: &str = "--------------------------------------------------";

/// What a finished session produced.
#[derive(Debug)]
pub struct SessionReport {
    pub log: SessionLog,
    /// Where the log was written, or `None` if saving failed.
    pub saved_to: Option<PathBuf>,
}

/// Run one interactive session against `console`.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    config: &Config,
) -> Result<SessionReport, SessionError> {
    let input = console.prompt(&format!("{INITIAL_PROMPT}\n> "))?;
    let session_id = Uuid::new_v4();
    let timestamp = Local::now();

    let verdict = gate::classify(&input);
    tracing::debug!(
        %session_id,
        it_related = verdict.it_related,
        career_related = verdict.career_related,
        "decision space classified"
    );

    if !verdict.accepted() {
        console.say(format_args!("\n{RULE}"))?;
        console.say("This expert system is specifically designed to provide advice on")?;
        console.say("**IT career progression**.")?;
        console.say(format_args!(
            "Your input ('{input}') doesn't seem to match this focus."
        ))?;
        console.say("Exiting session.")?;
        console.say(RULE)?;

        let log = SessionLog::rejected(session_id, timestamp, input);
        let saved_to = publish(console, &log, config)?;
        return Ok(SessionReport { log, saved_to });
    }

    console.say("\nGreat! Let's explore some options for your IT career progression.")?;
    let (answers, interactions) = questionnaire::run(console)?;
    let advice = advice::generate(&answers);

    console.say("\n--- Advice ---")?;
    console.say(&advice)?;

    let log = SessionLog::completed(session_id, timestamp, input, interactions, advice);
    let saved_to = publish(console, &log, config)?;
    Ok(SessionReport { log, saved_to })
}

/// Echo the log (when configured) and save it. Save failures are reported on
/// the console and yield `None`.
pub fn publish<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
    log: &SessionLog,
    config: &Config,
) -> Result<Option<PathBuf>, SessionError> {
    let kind = if log.is_partial() { "partial " } else { "" };

    if config.console.echo_log {
        console.say("\n--- Interaction Log (JSON) ---")?;
        match log.to_pretty_json() {
            Ok(json) => console.say(json)?,
            Err(err) => console.say(format_args!("Error rendering {kind}log: {err}"))?,
        }
    }

    match persist::save(log, &config.session, Local::now()) {
        Ok(path) => {
            let label = if log.is_partial() {
                "Partial interaction log"
            } else {
                "Interaction log"
            };
            console.say(format_args!("\n{label} saved to: {}", path.display()))?;
            Ok(Some(path))
        }
        Err(err) => {
            tracing::warn!(session_id = %log.session_id, error = %err, "session log not saved");
            console.say(format_args!("\nError saving {kind}log to file: {err}"))?;
            Ok(None)
        }
    }
}
