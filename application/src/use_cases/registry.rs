//! Use case registry
//!
//! Holds every runnable use case together with the metadata the hub shows
//! for it. Built-in metadata can be overridden by a
//! [`UseCaseMetadataSource`] (README files on disk).

use crate::ports::metadata_source::UseCaseMetadataSource;
use crew_domain::{UseCase, UseCaseCategory, UseCaseMetadata, builtin_use_cases};
use std::sync::Arc;
use tracing::debug;

struct Entry {
    metadata: UseCaseMetadata,
    use_case: Arc<dyn UseCase>,
}

/// Catalog of runnable use cases, ordered by category then id.
pub struct UseCaseRegistry {
    entries: Vec<Entry>,
}

impl UseCaseRegistry {
    pub fn new(use_cases: impl IntoIterator<Item = Arc<dyn UseCase>>) -> Self {
        let mut entries: Vec<Entry> = use_cases
            .into_iter()
            .map(|use_case| Entry {
                metadata: use_case.metadata(),
                use_case,
            })
            .collect();
        entries.sort_by(|a, b| {
            (a.metadata.category, &a.metadata.id).cmp(&(b.metadata.category, &b.metadata.id))
        });
        Self { entries }
    }

    /// Registry of every built-in use case
    pub fn builtin() -> Self {
        Self::new(builtin_use_cases())
    }

    /// Replace titles and descriptions with those found by `source`.
    ///
    /// Metadata for ids without an implementation is ignored.
    pub fn with_metadata_source(mut self, source: &dyn UseCaseMetadataSource) -> Self {
        for category in UseCaseCategory::ALL {
            for found in source.load(category) {
                match self
                    .entries
                    .iter_mut()
                    .find(|e| e.metadata.id == found.id && e.metadata.category == category)
                {
                    Some(entry) => {
                        debug!("Metadata override for {}", found.id);
                        entry.metadata.title = found.title;
                        entry.metadata.description = found.description;
                    }
                    None => debug!("No implementation for {} ({}), ignoring", found.id, category),
                }
            }
        }
        self
    }

    /// Metadata of every use case in `category`, sorted by id
    pub fn list(&self, category: UseCaseCategory) -> Vec<&UseCaseMetadata> {
        self.all().filter(|m| m.category == category).collect()
    }

    pub fn all(&self) -> impl Iterator<Item = &UseCaseMetadata> {
        self.entries.iter().map(|e| &e.metadata)
    }

    pub fn get(&self, id: &str) -> Option<Arc<dyn UseCase>> {
        self.entry(id).map(|e| Arc::clone(&e.use_case))
    }

    pub fn metadata(&self, id: &str) -> Option<&UseCaseMetadata> {
        self.entry(id).map(|e| &e.metadata)
    }

    /// Look up by id or by 1-based position in [`all`](Self::all).
    pub fn resolve(&self, key: &str) -> Option<&UseCaseMetadata> {
        let key = key.trim();
        if let Ok(n) = key.parse::<usize>() {
            return n.checked_sub(1).and_then(|i| self.entries.get(i)).map(|e| &e.metadata);
        }
        self.metadata(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn entry(&self, id: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.metadata.id.as_str() == id)
    }
}
