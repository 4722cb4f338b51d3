//! itca-session: the console side of itca.
//!
//! Drives an interactive session over a [`Console`], writes the resulting
//! [`itca_core::SessionLog`] to disk, and loads saved logs back for viewing.

pub mod console;
pub mod error;
pub mod persist;
pub mod questionnaire;
pub mod session;
pub mod viewer;

pub use console::Console;
pub use error::{LoadError, SaveError, SessionError};
pub use session::SessionReport;
