//! menu output on stdout
//!
//! stdout belongs to Openbox: it only ever receives a complete pipe menu
//! document. diagnostics go through tracing to stderr

use std::io::Write;

use anyhow::{Context, Result};

use crate::actions::ActionError;
use crate::menu::{MenuDocument, Program};

/// write a rendered menu to stdout in one go
pub fn print_menu(document: &MenuDocument, program: &Program) -> Result<()> {
    let xml = document.render(program);
    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(xml.as_bytes())
        .and_then(|_| stdout.flush())
        .context("Failed to write menu to stdout")
}

/// single-label menu describing an error
///
/// connection failures already carry their `Connection failed:` prefix
pub fn error_menu(err: &ActionError) -> MenuDocument {
    if err.is_connection_failure() {
        MenuDocument::message(err.message.as_str())
    } else {
        MenuDocument::message(format!("Error: {}", err.message))
    }
}
