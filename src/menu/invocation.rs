//! command lines that re-run this program from a menu action

use std::path::Path;

/// executable embedded in every action and pipe submenu
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program(String);

impl Program {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// path of the running executable, falling back to the bare binary name
    pub fn current() -> Self {
        match std::env::current_exe() {
            Ok(path) => Self::from_path(&path),
            Err(e) => {
                tracing::debug!("current_exe unavailable ({}), using binary name", e);
                Self::new(env!("CARGO_PKG_NAME"))
            }
        }
    }

    pub fn from_path(path: &Path) -> Self {
        Self(path.to_string_lossy().into_owned())
    }

    /// full shell command line for an invocation
    pub fn command_line(&self, invocation: &Invocation) -> String {
        format!("{} {}", shell_words::quote(&self.0), invocation.to_args())
    }
}

/// one action flag plus the parameters it needs
///
/// parameters render before the action flag, in insertion order:
/// `--artist=X --album=Y --indexTracks`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    command: &'static str,
    params: Vec<(&'static str, String)>,
}

impl Invocation {
    pub fn new(command: &'static str) -> Self {
        Self {
            command,
            params: Vec::new(),
        }
    }

    pub fn param(mut self, key: &'static str, value: impl ToString) -> Self {
        self.params.push((key, value.to_string()));
        self
    }

    /// argument words before shell quoting
    #[cfg(test)]
    pub fn words(&self) -> Vec<String> {
        let mut words: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("--{}={}", key, value))
            .collect();
        words.push(format!("--{}", self.command));
        words
    }

    /// shell-quoted argument string, safe for `g_shell_parse_argv`
    ///
    /// only the values are quoted so the flag names stay readable in menu ids
    pub fn to_args(&self) -> String {
        let mut args: Vec<String> = self
            .params
            .iter()
            .map(|(key, value)| format!("--{}={}", key, shell_words::quote(value)))
            .collect();
        args.push(format!("--{}", self.command));
        args.join(" ")
    }
}
