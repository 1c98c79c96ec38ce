//! asking the user for a playlist name through an external dialog

use std::process::{Command, Stdio};

use crate::actions::error::ActionError;

pub trait NamePrompt {
    /// `Ok(None)` when the user cancelled
    fn ask(&self) -> Result<Option<String>, ActionError>;
}

/// runs a dialog program (zenity, kdialog, rofi -dmenu, ...) and reads its answer
pub struct CommandPrompt {
    argv: Vec<String>,
}

impl CommandPrompt {
    pub fn new(argv: Vec<String>) -> Self {
        Self { argv }
    }
}

impl NamePrompt for CommandPrompt {
    fn ask(&self) -> Result<Option<String>, ActionError> {
        let (program, args) = self
            .argv
            .split_first()
            .ok_or_else(|| ActionError::config("settings.prompt_command is empty"))?;

        tracing::debug!("prompting with {}", program);
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .stderr(Stdio::inherit())
            .output()
            .map_err(|e| ActionError::general(format!("failed to run '{}': {}", program, e)))?;

        if !output.status.success() {
            tracing::debug!("prompt exited with {}", output.status);
            return Ok(None);
        }

        Ok(first_line(&String::from_utf8_lossy(&output.stdout)))
    }
}

fn first_line(text: &str) -> Option<String> {
    text.lines()
        .next()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
}

/// fixed answer for tests
#[cfg(test)]
pub struct FixedPrompt(pub Option<String>);

#[cfg(test)]
impl NamePrompt for FixedPrompt {
    fn ask(&self) -> Result<Option<String>, ActionError> {
        Ok(self.0.clone())
    }
}
