//! Terminal-backed prompter

use super::Prompter;
use crate::error::{Result, VideoToolsError};
use std::io::{self, BufRead, Write};

/// Prompter reading answers from a line source and writing to a sink
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl Console<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Create a console over arbitrary reader and writer
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consume the console and return the writer
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Prompter for Console<R, W> {
    fn prompt(&mut self, message: &str) -> Result<String> {
        writeln!(self.output, "{}", message).map_err(VideoToolsError::Prompt)?;
        self.output.flush().map_err(VideoToolsError::Prompt)?;

        let mut line = String::new();
        self.input.read_line(&mut line).map_err(VideoToolsError::Prompt)?;

        Ok(line.trim().to_string())
    }

    fn say(&mut self, message: &str) {
        // Best effort
        let _ = writeln!(self.output, "{}", message);
    }
}
