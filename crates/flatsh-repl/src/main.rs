//! flatsh CLI entry point.
//!
//! Usage:
//!   flatsh                     # Interactive REPL
//!   flatsh -c <command>        # Execute command against ephemeral state and exit

use std::env;
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use flatsh_kernel::MemoryStore;
use flatsh_repl::Repl;

fn main() -> ExitCode {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<ExitCode> {
    let args: Vec<String> = env::args().collect();

    match args.get(1).map(|s| s.as_str()) {
        None => {
            flatsh_repl::run()?;
            Ok(ExitCode::SUCCESS)
        }

        Some("--help" | "-h") => {
            print_help();
            Ok(ExitCode::SUCCESS)
        }

        Some("--version" | "-V") => {
            println!("flatsh {}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }

        Some("-c") => {
            let cmd = args.get(2).context("-c requires a command argument")?;
            run_command(cmd)
        }

        Some(unknown) => {
            eprintln!("Unknown option: {unknown}");
            eprintln!("Run 'flatsh --help' for usage.");
            Ok(ExitCode::FAILURE)
        }
    }
}

fn print_help() {
    println!(
        r#"flatsh v{}

Usage:
  flatsh                       Interactive REPL
  flatsh -c <command>          Execute command against ephemeral state and exit

Options:
  -c <command>                 Execute command string and exit
  -h, --help                   Show this help
  -V, --version                Show version

Examples:
  flatsh                       # Start interactive REPL
  flatsh -c 'echo hello'       # Run a command
"#,
        env!("CARGO_PKG_VERSION")
    );
}

/// Execute a command string against a fresh in-memory filesystem and exit.
fn run_command(cmd: &str) -> Result<ExitCode> {
    let mut repl = Repl::with_store(Arc::new(MemoryStore::new()))?;
    match repl.process_line(cmd)? {
        Some(output) => println!("{output}"),
        None => {}
    }
    Ok(ExitCode::SUCCESS)
}
