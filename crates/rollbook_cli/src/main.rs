//! Rollbook command-line driver.
//!
//! # Responsibility
//! - Parse process arguments and optional logging configuration.
//! - Feed line commands from stdin or a script file into one session.

mod command;
mod driver;

use clap::Parser;
use driver::{OutputFormat, Session};
use log::{error, info};
use rollbook_core::{default_log_level, init_logging, InMemoryStudentRepository, StudentService};
use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;
use std::process::ExitCode;

/// Rollbook: in-memory student records manager.
#[derive(Parser)]
#[command(name = "rollbook", version, about)]
struct Cli {
    /// Log level (trace|debug|info|warn|error). Defaults by build mode.
    #[arg(long, env = "ROLLBOOK_LOG_LEVEL")]
    log_level: Option<String>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, env = "ROLLBOOK_LOG_DIR")]
    log_dir: Option<String>,

    /// Read commands from this file instead of stdin.
    #[arg(long)]
    script: Option<PathBuf>,

    /// Print student records as JSON lines.
    #[arg(long)]
    json: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, log_dir) {
            eprintln!("rollbook: {err}");
            return ExitCode::FAILURE;
        }
    }

    let format = if cli.json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };
    let service = StudentService::new(InMemoryStudentRepository::new());
    let stdout = io::stdout();
    let mut session = Session::new(service, stdout.lock(), format);

    info!(
        "event=session_start module=cli status=ok version={} source={}",
        rollbook_core::core_version(),
        if cli.script.is_some() { "script" } else { "stdin" }
    );

    let result = match cli.script.as_ref() {
        Some(path) => File::open(path).and_then(|file| session.run(BufReader::new(file))),
        None => session.run(io::stdin().lock()),
    };

    match result {
        Ok(()) => {
            info!("event=session_end module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=session_end module=cli status=error kind={:?}", err.kind());
            eprintln!("rollbook: {err}");
            ExitCode::FAILURE
        }
    }
}
