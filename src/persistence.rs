use std::{
    fs,
    path::{Path, PathBuf},
};

use directories::BaseDirs;
use tracing::debug;

use crate::error::{Result, TodoError};
use crate::todolist::TodoList;

const FILE_NAME: &str = ".todo_list";

/// `~/.todo_list`
pub fn default_path() -> Result<PathBuf> {
    let dirs = BaseDirs::new().ok_or(TodoError::NoHomeDir)?;
    Ok(dirs.home_dir().join(FILE_NAME))
}

/// The on-disk copy of a [`TodoList`], stored as a JSON array of strings.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// A missing or blank file is an empty list.
    pub fn load(&self) -> Result<TodoList> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "no todo file yet");
            return Ok(TodoList::default());
        }
        let bytes = fs::read(&self.path)?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            debug!(path = %self.path.display(), "todo file is empty");
            return Ok(TodoList::default());
        }
        let list = serde_json::from_slice::<TodoList>(&bytes)?;
        debug!(path = %self.path.display(), items = list.len(), "loaded");
        Ok(list)
    }

    /// Replaces the file wholesale via a sibling temp file and a rename.
    pub fn save(&self, list: &TodoList) -> Result<()> {
        let bytes = serde_json::to_vec_pretty(list)?;
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        let tmp = self.tmp_path();
        fs::write(&tmp, &bytes)?;
        fs::rename(&tmp, &self.path)?;
        debug!(path = %self.path.display(), items = list.len(), "saved");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| FILE_NAME.into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
