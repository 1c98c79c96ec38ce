//! daemon client error types

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DaemonError {
    /// could not reach the daemon socket
    #[error("{path}: {source}")]
    Connect {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("ipc i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// malformed message or value on the wire
    #[error("protocol error: {0}")]
    Protocol(String),

    /// the daemon answered with an error reply
    #[error("{0}")]
    Server(String),

    #[error("unexpected value type: expected {expected}, got {found}")]
    UnexpectedType {
        expected: &'static str,
        found: &'static str,
    },

    #[error("invalid ipc path '{0}'")]
    InvalidPath(String),
}

impl DaemonError {
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol(message.into())
    }

    pub fn is_connection_error(&self) -> bool {
        matches!(self, Self::Connect { .. } | Self::InvalidPath(_))
    }
}

pub type Result<T> = std::result::Result<T, DaemonError>;
