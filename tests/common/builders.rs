//! Test builders: scripted console input and ready-made configs.
//!
//! These are designed for readability in test assertions, not for production
//! use. They panic on invalid input rather than returning `Result`.

use itca_core::config::{Config, SessionConfig};
use itca_core::{Answers, Choice};

/// Builds the stdin text for one interactive session.
///
/// # Example
///
/// ```rust
/// let stdin = ScriptBuilder::new("my tech job")
///     .answer("x")   // rejected, re-prompted
///     .answer("a")
///     .answer("d")
///     .answer("a")
///     .build();
/// ```
pub struct ScriptBuilder {
    lines: Vec<String>,
}

impl ScriptBuilder {
    pub fn new(decision_space: impl Into<String>) -> Self {
        Self {
            lines: vec![decision_space.into()],
        }
    }

    /// Append one raw answer line (valid or not).
    pub fn answer(mut self, line: impl Into<String>) -> Self {
        self.lines.push(line.into());
        self
    }

    /// Append the keys for a full set of typed answers.
    pub fn answers(self, answers: &Answers) -> Self {
        self.answer(answers.experience.key())
            .answer(answers.goal.key())
            .answer(answers.learning.key())
    }

    pub fn build(self) -> String {
        let mut text = self.lines.join("\n");
        text.push('\n');
        text
    }
}

/// Defaults with session logs written to `dir`.
pub fn config_in(dir: &std::path::Path) -> Config {
    Config {
        session: SessionConfig {
            output_dir: dir.to_path_buf(),
            ..SessionConfig::default()
        },
        ..Config::defaults()
    }
}

/// Every combination of the three answers.
pub fn all_answers() -> Vec<Answers> {
    use itca_core::{Experience, Goal, Learning};

    let mut out = Vec::new();
    for &experience in Experience::ALL {
        for &goal in Goal::ALL {
            for &learning in Learning::ALL {
                out.push(Answers {
                    experience,
                    goal,
                    learning,
                });
            }
        }
    }
    out
}
