//! Interactive prompt capability
//!
//! All user interaction goes through the [`Prompter`] trait so that the setup
//! wizard and the ingest overwrite prompts can be driven by a script in tests.

mod console;
mod scripted;

pub use console::Console;
pub use scripted::ScriptedPrompter;

use crate::error::Result;

/// Line-based conversation with the user
pub trait Prompter {
    /// Show `message` and read one line of input.
    ///
    /// The answer is returned with surrounding whitespace removed. End of
    /// input reads as an empty line.
    fn prompt(&mut self, message: &str) -> Result<String>;

    /// Show a line of narration.
    fn say(&mut self, message: &str);
}

/// True when a yes/no answer reads as yes
pub fn is_yes(answer: &str) -> bool {
    answer.to_lowercase().contains('y')
}

/// True when a yes/no answer reads as no
pub fn is_no(answer: &str) -> bool {
    answer.to_lowercase().contains('n')
}
