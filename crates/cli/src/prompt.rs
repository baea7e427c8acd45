//! Interactive secret prompt
//!
//! Secret values are read with a hidden-input password prompt; they are
//! never echoed or logged.

use dialoguer::Password;
use toolcase_core::{Error, Result, SecretPrompt};

/// Prompt backed by dialoguer's hidden password input
pub struct InteractivePrompt;

impl SecretPrompt for InteractivePrompt {
    fn ask(&self, prompt: &str) -> Result<String> {
        Password::new()
            .with_prompt(prompt)
            .allow_empty_password(false)
            .interact()
            .map_err(|e| Error::PromptCancelled(e.to_string()))
    }
}
