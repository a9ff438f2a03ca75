use serde::{Deserialize, Serialize};
use tracing::info;

use crate::app::input::Prompt;
use crate::error::{Result, TodoError};
use crate::task::Task;

/// Ordered todo entries. Position is the only identity an entry has, and
/// every index taken here is 1-based, as shown to the user.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TodoList {
    pub items: Vec<Task>,
}

impl TodoList {
    pub fn add(&mut self, text: &str) {
        self.items.push(Task::new(text));
        info!(index = self.items.len(), "added item");
    }

    /// Removes and returns the entry at `index`.
    pub fn delete(&mut self, index: i64) -> Result<Task> {
        let offset = self.offset(index)?;
        let task = self.items.remove(offset);
        info!(index, "deleted item");
        Ok(task)
    }

    /// Asks `prompt` for replacement text and overwrites the entry at `index`
    /// in place. Returns the previous entry. The list is untouched when the
    /// index is invalid or the prompt fails.
    pub fn reword<P: Prompt + ?Sized>(&mut self, index: i64, prompt: &mut P) -> Result<Task> {
        let offset = self.offset(index)?;
        let text = prompt.reword(&self.items[offset])?;
        let old = self.items[offset].clone();
        self.items[offset].set_text(text);
        info!(index, "reworded item");
        Ok(old)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut found: Vec<&str> = Vec::new();
        for cat in self.items.iter().filter_map(Task::category) {
            if !found.contains(&cat) {
                found.push(cat);
            }
        }
        found
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn offset(&self, index: i64) -> Result<usize> {
        usize::try_from(index)
            .ok()
            .filter(|&i| (1..=self.items.len()).contains(&i))
            .map(|i| i - 1)
            .ok_or(TodoError::OutOfRange(index))
    }
}

impl<S: AsRef<str>> FromIterator<S> for TodoList {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|s| Task::new(s.as_ref())).collect(),
        }
    }
}
