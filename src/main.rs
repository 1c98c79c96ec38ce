mod actions;
mod cli;
mod config;
mod daemon;
mod menu;

use anyhow::Result;
use clap::Parser;
use cli::{exit_codes, Cli};
use tracing_subscriber::EnvFilter;

const LOG_ENV_VAR: &str = "XMMS2_OBMENU_LOG";

fn main() -> Result<()> {
    // handle broken pipe gracefully (e.g., when Openbox closes the menu early)
    reset_sigpipe();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => exit_for_usage(e),
    };
    init_logging(cli.verbose);

    cli::run(cli)
}

/// reset SIGPIPE to default behavior (terminate process) instead of panicking
/// this is the standard Unix behavior for CLI tools
fn reset_sigpipe() {
    #[cfg(unix)]
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

/// print clap's message and exit; --help and --version succeed, usage errors
/// exit with INVALID_ARGS
fn exit_for_usage(e: clap::Error) -> ! {
    let code = if e.use_stderr() {
        exit_codes::INVALID_ARGS
    } else {
        exit_codes::SUCCESS
    };
    if let Err(io) = e.print() {
        eprintln!("Error: {}", io);
    }
    std::process::exit(code);
}

/// logs go to stderr; stdout is reserved for the menu
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
