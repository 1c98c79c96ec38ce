//! action error types

use crate::cli::exit_codes;
use crate::daemon::DaemonError;

/// error returned by action execution
#[derive(Debug, Clone)]
pub struct ActionError {
    /// process exit code
    pub code: i32,
    pub message: String,
}

impl ActionError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn connection_failed(message: impl Into<String>) -> Self {
        Self::new(exit_codes::CONNECTION_FAILED, message)
    }

    pub fn daemon(message: impl Into<String>) -> Self {
        Self::new(exit_codes::DAEMON_ERROR, message)
    }

    pub fn invalid_args(message: impl Into<String>) -> Self {
        Self::new(exit_codes::INVALID_ARGS, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(exit_codes::CONFIG_ERROR, message)
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self::new(exit_codes::ERROR, message)
    }

    pub fn is_connection_failure(&self) -> bool {
        self.code == exit_codes::CONNECTION_FAILED
    }
}

impl std::fmt::Display for ActionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ActionError {}

impl From<DaemonError> for ActionError {
    fn from(e: DaemonError) -> Self {
        if e.is_connection_error() {
            ActionError::connection_failed(format!("Connection failed: {}", e))
        } else {
            ActionError::daemon(e.to_string())
        }
    }
}

impl From<anyhow::Error> for ActionError {
    fn from(e: anyhow::Error) -> Self {
        ActionError::general(format!("{:#}", e))
    }
}
