// library crate for xmms2-obmenu
// exposes modules needed by auxiliary binaries (e.g., generate-man) and integration tests

pub mod actions;
pub mod cli;
pub mod config;
pub mod daemon;
pub mod menu;
