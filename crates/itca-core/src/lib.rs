//! itca-core — IT Career Advisor core library.
//!
//! This crate holds everything that does not touch the console or the
//! filesystem: the session log types, the decision-space gate, the question
//! catalogue, and the advice rules. Configuration loading lives here too so
//! every layer shares one `Config`.
//!
//! # Flow
//!
//! ```text
//! decision space ──► gate ──► questions ──► advice
//!                      │                      │
//!                      └──────► SessionLog ◄──┘
//! ```

pub mod advice;
pub mod config;
pub mod gate;
pub mod questions;
pub mod types;

pub use questions::{Answers, Choice, Experience, Goal, Learning};
pub use types::{Interaction, Outcome, SessionLog, INITIAL_PROMPT};
