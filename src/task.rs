use serde::{Deserialize, Serialize};

/// A single free-text todo entry.
///
/// Text before the first colon, if any, names the entry's category:
/// `"work: email team"` belongs to `work`, `"buy milk"` to none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Task {
    text: String,
}

impl Task {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// Category label with surrounding whitespace removed.
    pub fn category(&self) -> Option<&str> {
        self.split().map(|(category, _)| category)
    }

    /// What gets printed for this entry: the text after the category prefix,
    /// or the whole text when uncategorized. Always trimmed.
    pub fn description(&self) -> &str {
        match self.split() {
            Some((_, rest)) => rest,
            None => self.text.trim(),
        }
    }

    fn split(&self) -> Option<(&str, &str)> {
        self.text
            .trim()
            .split_once(':')
            .map(|(category, rest)| (category.trim(), rest.trim()))
    }
}
