use std::io;
use std::process::{self, ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use todo_cli::{
    app::{input::TerminalPrompt, Action, App, RetCode},
    error::TodoError,
    persistence::{self, Store},
    Cli,
};

fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() { RetCode::Arg } else { RetCode::Ok };
            err.print()?;
            return Ok(code.into());
        }
    };

    ctrlc::set_handler(|| process::exit(RetCode::Interrupt as i32))
        .context("installing interrupt handler")?;

    let store = match cli.data_file.clone() {
        Some(path) => Store::new(path),
        None => Store::new(persistence::default_path()?),
    };
    debug!(path = %store.path().display(), "using todo file");

    let action = Action::from_cli(&cli);
    let result = App::open(store.clone())
        .and_then(|mut app| app.run(action, &mut TerminalPrompt, &mut io::stdout().lock()));

    let code = match result {
        Ok(()) => RetCode::Ok,
        Err(err @ TodoError::OutOfRange(_)) => {
            eprintln!("ERROR: {err}");
            RetCode::Arg
        }
        Err(TodoError::Cancelled) => RetCode::Interrupt,
        Err(err) => {
            return Err(err).with_context(|| format!("todo file {}", store.path().display()));
        }
    };
    Ok(code.into())
}
