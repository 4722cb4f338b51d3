//! Core types for itca-core: IT Career Advisor.
//!
//! This module defines the persisted [`SessionLog`], the per-question
//! [`Interaction`] record, and the [`Outcome`] of a session.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The literal prompt shown when asking for the decision space.
pub const INITIAL_PROMPT: &str =
    "What is your decision space input? (e.g., 'advice on IT career progression')";

/// The one record written per run of the interactive session.
///
/// There are exactly two ways to build one: [`SessionLog::rejected`] for an
/// out-of-scope decision space and [`SessionLog::completed`] after the
/// questionnaire. A rejected log carries no interactions and no advice; a
/// completed log always carries both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionLog {
    /// Fresh v4 id per run.
    pub session_id: Uuid,
    /// Local time at which the decision-space input was captured.
    pub timestamp: DateTime<Local>,
    /// The prompt text exactly as it was shown.
    pub initial_prompt: String,
    /// Raw decision-space text entered by the user.
    pub user_decision_space_input: String,
    pub outcome: Outcome,
    /// Answered questions in step order.
    pub interactions: Vec<Interaction>,
    /// Advice text, `null` when the session ended at the gate.
    pub final_advice: Option<String>,
}

impl SessionLog {
    /// Log for a session whose decision space failed the gate.
    pub fn rejected(
        session_id: Uuid,
        timestamp: DateTime<Local>,
        input: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            timestamp,
            initial_prompt: INITIAL_PROMPT.to_string(),
            user_decision_space_input: input.into(),
            outcome: Outcome::OutOfScope,
            interactions: Vec::new(),
            final_advice: None,
        }
    }

    /// Log for a session that answered every question and received advice.
    pub fn completed(
        session_id: Uuid,
        timestamp: DateTime<Local>,
        input: impl Into<String>,
        interactions: Vec<Interaction>,
        advice: impl Into<String>,
    ) -> Self {
        Self {
            session_id,
            timestamp,
            initial_prompt: INITIAL_PROMPT.to_string(),
            user_decision_space_input: input.into(),
            outcome: Outcome::AdviceProvided,
            interactions,
            final_advice: Some(advice.into()),
        }
    }

    /// `true` when the session ended at the decision-space gate.
    pub fn is_partial(&self) -> bool {
        self.outcome == Outcome::OutOfScope
    }

    /// Indented (2-space) JSON text, as printed and saved.
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

const OUT_OF_SCOPE: &str =
    "User input did not match the expected decision space (IT Career Progression).";
const ADVICE_PROVIDED: &str = "Provided career advice.";

/// How a session ended. Serialized as the human-readable description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum Outcome {
    OutOfScope,
    AdviceProvided,
}

impl Outcome {
    pub fn as_str(self) -> &'static str {
        match self {
            Outcome::OutOfScope => OUT_OF_SCOPE,
            Outcome::AdviceProvided => ADVICE_PROVIDED,
        }
    }
}

impl From<Outcome> for &'static str {
    fn from(outcome: Outcome) -> Self {
        outcome.as_str()
    }
}

impl TryFrom<String> for Outcome {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.as_str() {
            OUT_OF_SCOPE => Ok(Outcome::OutOfScope),
            ADVICE_PROVIDED => Ok(Outcome::AdviceProvided),
            other => Err(format!("unknown outcome: {other:?}")),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One answered question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    /// 1-based position in the questionnaire.
    pub step: u32,
    pub question: String,
    /// Option letter → description, in display order.
    pub options: serde_json::Map<String, serde_json::Value>,
    pub user_answer_key: String,
    pub user_answer_value: String,
}
