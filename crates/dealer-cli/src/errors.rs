use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Could not find dealer project root.\nExpected to find 'dealer.yml' or 'library/' directory.\nHint: create a dealer.yml next to your item library.")]
    ProjectRootNotFound,

    #[error("Failed to load configuration file: {path}\n{source}")]
    ConfigLoad {
        path: PathBuf,
        source: anyhow::Error,
    },

    #[error("Category '{name}' not found.\nAvailable categories: {}", available.join(", "))]
    UnknownCategory {
        name: String,
        available: Vec<String>,
    },

    #[error("No items found in library paths:\n  {}\n\nHint: put files with a configured extension inside the category directories", searched.join("\n  "))]
    EmptyLibrary { searched: Vec<String> },
}
