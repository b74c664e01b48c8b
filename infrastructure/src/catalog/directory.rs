//! README-backed metadata source
//!
//! Layout scanned under the root directory:
//!
//! ```text
//! <root>/
//!   financial_use_cases/
//!     use_case_01_fraud_detection/README.md
//!   research_use_cases/
//!     use_case_01_literature_review/README.md
//! ```

use crew_application::ports::metadata_source::UseCaseMetadataSource;
use crew_domain::{UseCaseCategory, UseCaseId, UseCaseMetadata};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

pub const README_FILE: &str = "README.md";

/// Reads `README.md` from every `use_case_*` directory of a category.
#[derive(Debug, Clone)]
pub struct DirectoryMetadataSource {
    root: PathBuf,
}

impl DirectoryMetadataSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn read_entry(&self, dir: &Path, category: UseCaseCategory) -> Option<UseCaseMetadata> {
        let name = dir.file_name()?.to_str()?;
        let readme = dir.join(README_FILE);
        if !readme.is_file() {
            debug!("{} has no {}, keeping built-in metadata", name, README_FILE);
            return None;
        }

        match fs::read_to_string(&readme) {
            Ok(content) => Some(UseCaseMetadata::from_readme(name, category, &content)),
            Err(e) => {
                warn!("Error loading use case {}: {}", name, e);
                None
            }
        }
    }
}

impl UseCaseMetadataSource for DirectoryMetadataSource {
    fn load(&self, category: UseCaseCategory) -> Vec<UseCaseMetadata> {
        let base = self.root.join(category.dir_name());
        let entries = match fs::read_dir(&base) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Skipping {}: {}", base.display(), e);
                return Vec::new();
            }
        };

        let mut found: Vec<UseCaseMetadata> = entries
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| path.is_dir())
            .filter(|path| {
                path.file_name()
                    .and_then(|n| n.to_str())
                    .is_some_and(UseCaseId::is_use_case_name)
            })
            .filter_map(|path| self.read_entry(&path, category))
            .collect();

        found.sort_by(|a, b| a.id.cmp(&b.id));
        found
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crew_domain::use_case::metadata::NO_DESCRIPTION;

    fn write_readme(root: &Path, category: &str, id: &str, content: &str) {
        let dir = root.join(category).join(id);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(README_FILE), content).unwrap();
    }

    #[test]
    fn test_reads_title_and_description() {
        let root = tempfile::tempdir().unwrap();
        write_readme(
            root.path(),
            "financial_use_cases",
            "use_case_01_fraud_detection",
            "# Fraud Radar\n\nSpots suspicious transactions.\n\n## Setup\nRun it.\n",
        );

        let source = DirectoryMetadataSource::new(root.path());
        let found = source.load(UseCaseCategory::Financial);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id.as_str(), "use_case_01_fraud_detection");
        assert_eq!(found[0].title, "Fraud Radar");
        assert_eq!(found[0].description, "Spots suspicious transactions. Run it.");
        assert_eq!(found[0].category, UseCaseCategory::Financial);
    }

    #[test]
    fn test_ignores_non_use_case_entries_and_sorts() {
        let root = tempfile::tempdir().unwrap();
        write_readme(root.path(), "research_use_cases", "use_case_02_b", "# B");
        write_readme(root.path(), "research_use_cases", "use_case_01_a", "# A");
        write_readme(root.path(), "research_use_cases", "shared_helpers", "# Helpers");
        fs::write(
            root.path().join("research_use_cases").join("use_case_03_file.md"),
            "# not a dir",
        )
        .unwrap();

        let found = DirectoryMetadataSource::new(root.path()).load(UseCaseCategory::Research);

        let ids: Vec<&str> = found.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["use_case_01_a", "use_case_02_b"]);
        assert_eq!(found[0].description, NO_DESCRIPTION);
    }

    #[test]
    fn test_directory_without_readme_skipped() {
        let root = tempfile::tempdir().unwrap();
        fs::create_dir_all(root.path().join("financial_use_cases/use_case_05_bank_chatbot")).unwrap();

        let found = DirectoryMetadataSource::new(root.path()).load(UseCaseCategory::Financial);
        assert!(found.is_empty());
    }

    #[test]
    fn test_unreadable_readme_skipped() {
        let root = tempfile::tempdir().unwrap();
        write_readme(root.path(), "financial_use_cases", "use_case_01_ok", "# Ok");
        let bad = root.path().join("financial_use_cases/use_case_02_bad");
        fs::create_dir_all(&bad).unwrap();
        fs::write(bad.join(README_FILE), [0xff, 0xfe, 0x00, 0xc3]).unwrap();

        let found = DirectoryMetadataSource::new(root.path()).load(UseCaseCategory::Financial);

        assert_eq!(found.len(), 1);
        assert_eq!(found[0].title, "Ok");
    }

    #[test]
    fn test_missing_category_directory() {
        let root = tempfile::tempdir().unwrap();
        let source = DirectoryMetadataSource::new(root.path().join("nowhere"));
        assert!(source.load(UseCaseCategory::Research).is_empty());
    }
}
