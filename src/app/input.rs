use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::task::Task;

/// Source of replacement text for a reworded entry.
pub trait Prompt {
    fn reword(&mut self, original: &Task) -> Result<String>;
}

/// Asks on the terminal. Falls back to reading one line from stdin when
/// stdin is not a tty, so the tool can be scripted.
#[derive(Debug, Default)]
pub struct TerminalPrompt;

impl Prompt for TerminalPrompt {
    fn reword(&mut self, original: &Task) -> Result<String> {
        println!("\nOriginal: {}", original.text());

        if io::stdin().is_terminal() {
            Input::<String>::new()
                .with_prompt("Reword")
                .allow_empty(true)
                .interact_text()
                .map_err(prompt_error)
        } else {
            read_line(io::stdin().lock())
        }
    }
}

fn prompt_error(err: dialoguer::Error) -> TodoError {
    match err {
        dialoguer::Error::IO(err) if err.kind() == io::ErrorKind::Interrupted => {
            debug!("reword prompt interrupted");
            TodoError::Cancelled
        }
        dialoguer::Error::IO(err) => TodoError::Io(err),
    }
}

/// EOF before a newline-terminated answer counts as a cancel.
fn read_line<R: BufRead>(mut reader: R) -> Result<String> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        debug!("stdin closed before an answer was given");
        return Err(TodoError::Cancelled);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(line)
}
