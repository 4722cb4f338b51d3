//! Line-oriented console over any `BufRead` / `Write` pair.
//!
//! The binary wires this to locked stdin/stdout; tests drive it with byte
//! slices and a `Vec<u8>`.

use crate::error::SessionError;
use std::io::{BufRead, Write};

pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Print `prompt` without a newline and read one line of input.
    ///
    /// The line terminator is stripped; any other whitespace is kept. End of
    /// input is reported as [`SessionError::InputClosed`].
    pub fn prompt(&mut self, prompt: &str) -> Result<String, SessionError> {
        write!(self.output, "{prompt}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(SessionError::InputClosed);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(line)
    }

    /// Print `text` followed by a newline.
    pub fn say(&mut self, text: impl std::fmt::Display) -> Result<(), SessionError> {
        writeln!(self.output, "{text}")?;
        Ok(())
    }

    pub fn into_inner(self) -> (R, W) {
        (self.input, self.output)
    }
}
