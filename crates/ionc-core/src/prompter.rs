//! Interactive prompt handling.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use anyhow::Result;

use crate::cmdutil::CancelError;

/// Trait for interactive terminal prompts.
pub trait Prompter: Send + Sync + std::fmt::Debug {
    /// Present a list of options and return the selected index.
    ///
    /// Returns [`CancelError`] if the user dismisses the prompt.
    fn select(&self, prompt: &str, default: Option<usize>, options: &[String]) -> Result<usize>;
}

/// Dialoguer-based prompter implementation.
#[derive(Debug, Default)]
pub struct DialoguerPrompter;

impl DialoguerPrompter {
    /// Create a new prompter.
    pub fn new() -> Self {
        Self
    }
}

impl Prompter for DialoguerPrompter {
    fn select(&self, prompt: &str, default: Option<usize>, options: &[String]) -> Result<usize> {
        let sel = dialoguer::Select::new()
            .with_prompt(prompt)
            .items(options)
            .default(default.unwrap_or(0));
        match sel.interact_opt() {
            Ok(Some(index)) => Ok(index),
            Ok(None) => Err(CancelError.into()),
            Err(dialoguer::Error::IO(e)) if e.kind() == std::io::ErrorKind::Interrupted => {
                Err(CancelError.into())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Stub prompter for testing that returns pre-configured answers.
#[derive(Debug, Default)]
pub struct StubPrompter {
    /// Pre-configured select answers (index).
    pub select_answers: Mutex<Vec<usize>>,
    /// When set, every select is cancelled.
    pub cancel: AtomicBool,
    /// Prompts shown so far, with their options.
    pub asked: Mutex<Vec<(String, Vec<String>)>>,
}

impl StubPrompter {
    /// Make subsequent prompts behave as if the user dismissed them.
    pub fn cancel_all(&self) {
        self.cancel.store(true, Ordering::SeqCst);
    }

    /// Prompts shown so far.
    pub fn asked(&self) -> Vec<(String, Vec<String>)> {
        self.asked
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .clone()
    }
}

impl Prompter for StubPrompter {
    fn select(&self, prompt: &str, default: Option<usize>, options: &[String]) -> Result<usize> {
        self.asked
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .push((prompt.to_string(), options.to_vec()));

        if self.cancel.load(Ordering::SeqCst) {
            return Err(CancelError.into());
        }

        let mut answers = self
            .select_answers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        if answers.is_empty() {
            Ok(default.unwrap_or(0))
        } else {
            Ok(answers.remove(0))
        }
    }
}
