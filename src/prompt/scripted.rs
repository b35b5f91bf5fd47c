//! Scripted prompter for tests and unattended runs.
//!
//! Answers are handed out in order; once the script runs dry every further
//! prompt reads as an empty line, the same as end of input on a terminal.

use super::Prompter;
use crate::error::Result;
use std::collections::VecDeque;

/// A [`Prompter`] that replays canned answers and records the conversation
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    transcript: Vec<String>,
}

impl ScriptedPrompter {
    /// Create a prompter that will answer with `answers` in order
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            transcript: Vec::new(),
        }
    }

    /// Messages that were asked as prompts, in order
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Every prompt and narration line, in order
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Answers that were never consumed
    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    /// True if any recorded line contains `needle`
    pub fn said(&self, needle: &str) -> bool {
        self.transcript.iter().any(|line| line.contains(needle))
    }
}

impl Prompter for ScriptedPrompter {
    fn prompt(&mut self, message: &str) -> Result<String> {
        self.prompts.push(message.to_string());
        self.transcript.push(message.to_string());
        Ok(self
            .answers
            .pop_front()
            .map(|a| a.trim().to_string())
            .unwrap_or_default())
    }

    fn say(&mut self, message: &str) {
        self.transcript.push(message.to_string());
    }
}
