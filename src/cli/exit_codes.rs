//! exit codes for xmms2-obmenu
//!
//! these follow Unix conventions where 0 = success and non-zero = error.
//! Openbox ignores them, but scripts and keybindings calling the actions
//! directly can tell failure types apart

#![allow(dead_code)]

/// command completed successfully
pub const SUCCESS: i32 = 0;

/// general or unknown error
pub const ERROR: i32 = 1;

/// could not reach the xmms2 daemon
pub const CONNECTION_FAILED: i32 = 2;

/// daemon answered with an error or an unexpected reply
pub const DAEMON_ERROR: i32 = 3;

/// invalid command-line arguments
pub const INVALID_ARGS: i32 = 4;

/// configuration file error
pub const CONFIG_ERROR: i32 = 5;
