//! Use case metadata source port
//!
//! Supplies display metadata (title, description) that overrides the
//! built-in defaults, typically read from README files on disk.

use crew_domain::{UseCaseCategory, UseCaseMetadata};

/// Source of use case metadata for one category.
pub trait UseCaseMetadataSource: Send + Sync {
    /// Metadata for every use case found in `category`.
    ///
    /// Unreadable entries are skipped; this never fails as a whole.
    fn load(&self, category: UseCaseCategory) -> Vec<UseCaseMetadata>;
}

/// Source that knows nothing; built-in metadata is used as is.
pub struct NoMetadataSource;

impl UseCaseMetadataSource for NoMetadataSource {
    fn load(&self, _category: UseCaseCategory) -> Vec<UseCaseMetadata> {
        Vec::new()
    }
}
