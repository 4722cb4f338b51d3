//! Questionnaire runner: asks each [`Choice`] question until it gets a
//! valid answer.

use crate::{console::Console, error::SessionError};
use itca_core::{Answers, Choice, Experience, Goal, Interaction, Learning};
use std::io::{BufRead, Write};

/// Ask one question, re-prompting on invalid input with no retry limit.
pub fn ask<C, R, W>(console: &mut Console<R, W>) -> Result<C, SessionError>
where
    C: Choice,
    R: BufRead,
    W: Write,
{
    console.say(format_args!("\n{}", C::PROMPT))?;
    for option in C::ALL {
        console.say(format_args!("  {}: {}", option.key(), option.label()))?;
    }

    loop {
        let line = console.prompt("Your choice: ")?;
        match C::from_key(&line) {
            Some(choice) => {
                tracing::debug!(step = C::STEP, key = choice.key(), "answer accepted");
                return Ok(choice);
            }
            None => {
                tracing::debug!(step = C::STEP, input = %line, "answer rejected");
                console.say(format_args!(
                    "Invalid choice. Please enter one of {}",
                    key_list(&C::keys())
                ))?;
            }
        }
    }
}

/// Ask all three questions in order, returning the typed answers and one
/// interaction record per question.
pub fn run<R: BufRead, W: Write>(
    console: &mut Console<R, W>,
) -> Result<(Answers, Vec<Interaction>), SessionError> {
    let experience: Experience = ask(console)?;
    let goal: Goal = ask(console)?;
    let learning: Learning = ask(console)?;

    let interactions = vec![
        experience.interaction(),
        goal.interaction(),
        learning.interaction(),
    ];
    Ok((
        Answers {
            experience,
            goal,
            learning,
        },
        interactions,
    ))
}

/// `['A', 'B', 'C']`
fn key_list(keys: &[&str]) -> String {
    let quoted: Vec<String> = keys.iter().map(|k| format!("'{k}'")).collect();
    format!("[{}]", quoted.join(", "))
}
