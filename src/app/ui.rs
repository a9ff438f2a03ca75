use std::io::{self, Write};

use crate::todolist::TodoList;

pub const EMPTY_MESSAGE: &str = "The todo list is empty. Add items with the '-a' argument.";

/// Prints uncategorized entries first, then one block per category in order
/// of first appearance. Every entry keeps its 1-based position in the full
/// list as its number.
pub fn draw<W: Write>(out: &mut W, list: &TodoList) -> io::Result<()> {
    if list.is_empty() {
        writeln!(out, "{EMPTY_MESSAGE}")?;
        return Ok(());
    }

    let numbered = || list.items.iter().enumerate().map(|(i, t)| (i + 1, t));

    let mut first = true;
    for (n, task) in numbered().filter(|(_, t)| t.category().is_none()) {
        if first {
            writeln!(out)?;
            first = false;
        }
        writeln!(out, "{n:>3} - {}", task.description())?;
    }

    for cat in list.categories() {
        writeln!(out, "\n{cat}:\n")?;
        for (n, task) in numbered().filter(|(_, t)| t.category() == Some(cat)) {
            writeln!(out, "{n:>3} - {}", task.description())?;
        }
    }

    Ok(())
}
