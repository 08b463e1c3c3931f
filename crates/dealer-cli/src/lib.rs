pub mod config;
pub mod errors;
pub mod library;

pub use config::{find_project_root, Config};
pub use errors::CliError;
pub use library::{Library, LibraryScanner};
