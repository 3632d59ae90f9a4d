use std::fmt::Display;
use std::io::{BufRead, Write};

use crate::error_handling::types::ConsoleError;

/// Line-oriented operator console over any reader/writer pair.
///
/// The binary wires it to stdin/stdout; tests use in-memory buffers.
pub struct Console<R: BufRead, W: Write> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Prints `label` without a newline and reads one line of input.
    ///
    /// Only the line terminator is removed; an exhausted input yields
    /// `ConsoleError::EndOfInput`.
    pub fn prompt(&mut self, label: &str) -> Result<String, ConsoleError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(ConsoleError::EndOfInput);
        }
        if line.ends_with('\n') {
            line.pop();
            if line.ends_with('\r') {
                line.pop();
            }
        }
        Ok(line)
    }

    pub fn say<T: Display>(&mut self, text: T) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text)?;
        Ok(())
    }

    pub fn into_output(self) -> W {
        self.output
    }
}
