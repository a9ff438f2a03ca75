pub mod input;
pub mod ui;

use std::io::Write;
use std::process::ExitCode;

use tracing::warn;

use crate::error::Result;
use crate::persistence::Store;
use crate::todolist::TodoList;
use crate::Cli;
use input::Prompt;

/// Process exit statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum RetCode {
    Ok = 0,
    /// Bad arguments or an index out of range.
    Arg = 1,
    /// The user interrupted a prompt.
    Interrupt = 2,
    /// Reserved; nothing raises it yet.
    Warn = 3,
}

impl From<RetCode> for ExitCode {
    fn from(code: RetCode) -> Self {
        ExitCode::from(code as u8)
    }
}

/// The single mutation applied per invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(String),
    Delete(i64),
    Reword(i64),
    Show,
}

impl Action {
    /// Add wins over delete, delete over reword. Anything lower than the
    /// chosen flag is dropped with a warning in the log only.
    pub fn from_cli(cli: &Cli) -> Self {
        let given = [cli.add.is_some(), cli.delete.is_some(), cli.reword.is_some()]
            .into_iter()
            .filter(|&g| g)
            .count();

        let action = if let Some(text) = &cli.add {
            Action::Add(text.clone())
        } else if let Some(index) = cli.delete {
            Action::Delete(index)
        } else if let Some(index) = cli.reword {
            Action::Reword(index)
        } else {
            Action::Show
        };

        if given > 1 {
            warn!(?action, "several actions requested; only the first applies");
        }
        action
    }
}

/// One invocation's state: the loaded list and where it came from.
pub struct App {
    pub list: TodoList,
    store: Store,
    pub dirty: bool,
}

impl App {
    pub fn open(store: Store) -> Result<Self> {
        let list = store.load()?;
        Ok(Self {
            list,
            store,
            dirty: false,
        })
    }

    /// Applies `action`, saves if it changed anything, then draws the list.
    /// A failed action leaves both the file and `out` untouched beyond any
    /// prompt text.
    pub fn run<P, W>(&mut self, action: Action, prompt: &mut P, out: &mut W) -> Result<()>
    where
        P: Prompt + ?Sized,
        W: Write,
    {
        match action {
            Action::Add(text) => {
                self.list.add(&text);
                self.dirty = true;
            }
            Action::Delete(index) => {
                let removed = self.list.delete(index)?;
                writeln!(out, "\nRemoved: {}", removed.text())?;
                self.dirty = true;
            }
            Action::Reword(index) => {
                self.list.reword(index, prompt)?;
                self.dirty = true;
            }
            Action::Show => {}
        }

        if self.dirty {
            self.store.save(&self.list)?;
            self.dirty = false;
        }

        ui::draw(out, &self.list)?;
        Ok(())
    }
}
