//! Use case metadata read from the filesystem.

mod directory;

pub use directory::{DirectoryMetadataSource, README_FILE};
