//! Filesystem discovery of the categorized item library.

use crate::config::Config;
use crate::errors::CliError;
use anyhow::Result;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// The materialized candidate pools: category name -> sorted item paths.
///
/// Items are sorted so the candidate lists the dealer sees are stable
/// across runs, which keeps seeded deals reproducible.
#[derive(Debug, Clone)]
pub struct Library {
    categories: BTreeMap<String, Vec<PathBuf>>,
}

impl Library {
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    pub fn items(&self, category: &str) -> Option<&[PathBuf]> {
        self.categories.get(category).map(Vec::as_slice)
    }

    /// Every item across all categories, for the "any category" deal.
    pub fn all_items(&self) -> Vec<PathBuf> {
        self.categories.values().flatten().cloned().collect()
    }

    /// The category owning `item`, for captioning merged-pool deals.
    pub fn category_of(&self, item: &Path) -> Option<&str> {
        self.categories
            .iter()
            .find(|(_, items)| items.iter().any(|i| i == item))
            .map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn counts(&self) -> impl Iterator<Item = (&str, usize)> {
        self.categories
            .iter()
            .map(|(name, items)| (name.as_str(), items.len()))
    }
}

pub struct LibraryScanner {
    project_root: PathBuf,
    config: Config,
}

impl LibraryScanner {
    pub fn new(project_root: PathBuf, config: Config) -> Self {
        Self {
            project_root,
            config,
        }
    }

    /// Scan the configured library paths and build the category pools.
    ///
    /// Missing category directories are skipped rather than reported; a
    /// library with no items at all is an error.
    pub fn scan(&self) -> Result<Library> {
        let mut categories: BTreeMap<String, Vec<PathBuf>> = BTreeMap::new();
        let mut searched = Vec::new();

        for library_path in &self.config.library_paths {
            let base = self.project_root.join(library_path);
            searched.push(base.display().to_string());

            for (name, dir) in self.category_dirs(&base) {
                let items = self.collect_items(&dir);
                if !items.is_empty() {
                    categories.entry(name).or_default().extend(items);
                }
            }
        }

        if categories.is_empty() {
            return Err(CliError::EmptyLibrary { searched }.into());
        }

        for items in categories.values_mut() {
            items.sort();
        }

        Ok(Library { categories })
    }

    /// Resolve (category name, directory) pairs under one library path.
    fn category_dirs(&self, base: &Path) -> Vec<(String, PathBuf)> {
        match &self.config.categories {
            Some(mapping) => mapping
                .iter()
                .map(|(name, dir)| (name.clone(), base.join(dir)))
                .filter(|(_, dir)| dir.is_dir())
                .collect(),
            None => {
                // Every immediate subdirectory is a category.
                let mut dirs: Vec<(String, PathBuf)> = std::fs::read_dir(base)
                    .into_iter()
                    .flatten()
                    .filter_map(|entry| entry.ok())
                    .filter(|entry| entry.path().is_dir())
                    .filter_map(|entry| {
                        let name = entry.file_name().to_str()?.to_string();
                        Some((name, entry.path()))
                    })
                    .collect();
                dirs.sort();
                dirs
            }
        }
    }

    fn collect_items(&self, dir: &Path) -> Vec<PathBuf> {
        WalkDir::new(dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| {
                entry
                    .path()
                    .extension()
                    .and_then(|s| s.to_str())
                    .is_some_and(|ext| self.config.matches_extension(ext))
            })
            .map(|entry| entry.into_path())
            .collect()
    }
}
