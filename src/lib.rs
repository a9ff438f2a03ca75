pub mod app;
pub mod error;
pub mod persistence;
pub mod task;
pub mod todolist;

use clap::Parser;
use std::path::PathBuf;

/// CLI shared between main and tests
#[derive(Parser, Debug)]
#[command(name = "todo", version, about = "Simple todo list")]
pub struct Cli {
    /// Add a todo item
    #[arg(short = 'a', value_name = "\"todo item\"")]
    pub add: Option<String>,

    /// Delete the todo item at index #
    #[arg(short = 'd', value_name = "#", allow_negative_numbers = true)]
    pub delete: Option<i64>,

    /// Reword the todo item at index #
    #[arg(short = 'r', value_name = "#", allow_negative_numbers = true)]
    pub reword: Option<i64>,

    /// Optional override for the data file (default: ~/.todo_list)
    #[arg(long)]
    pub data_file: Option<PathBuf>,
}
