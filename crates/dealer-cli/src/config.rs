use crate::errors::CliError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub name: String,
    pub version: u32,
    #[serde(default = "default_library_paths")]
    pub library_paths: Vec<String>,
    #[serde(default = "default_history_capacity")]
    pub history_capacity: usize,
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
    /// Display-name -> directory map. When absent, every immediate
    /// subdirectory of a library path is a category.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<String, String>>,
}

fn default_library_paths() -> Vec<String> {
    vec!["library".to_string()]
}

fn default_history_capacity() -> usize {
    dealer_core::DEFAULT_HISTORY_CAPACITY
}

fn default_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
}

impl Config {
    pub fn load(project_dir: &Path) -> Result<Self> {
        let config_path = project_dir.join("dealer.yml");
        let content =
            std::fs::read_to_string(&config_path).map_err(|e| CliError::ConfigLoad {
                path: config_path.clone(),
                source: e.into(),
            })?;

        serde_yaml::from_str(&content).map_err(|e| {
            CliError::ConfigLoad {
                path: config_path,
                source: e.into(),
            }
            .into()
        })
    }

    /// True when `ext` (without the dot) is one of the configured
    /// extensions, compared case-insensitively.
    pub fn matches_extension(&self, ext: &str) -> bool {
        self.extensions.iter().any(|e| e.eq_ignore_ascii_case(ext))
    }
}

pub fn find_project_root(start_dir: &Path) -> Result<PathBuf> {
    let mut current = start_dir.to_path_buf();

    // Walk up max 5 levels
    for _ in 0..5 {
        if current.join("dealer.yml").exists() {
            return Ok(current);
        }

        if current.join("library").is_dir() {
            return Ok(current);
        }

        if let Some(parent) = current.parent() {
            current = parent.to_path_buf();
        } else {
            break;
        }
    }

    Err(CliError::ProjectRootNotFound.into())
}
