//! Display metadata for use cases

use super::category::UseCaseCategory;
use crate::core::string::{title_from_id, truncate_with_ellipsis};
use serde::{Deserialize, Serialize};

/// Description shown when no README text is available.
pub const NO_DESCRIPTION: &str = "No description available";

/// Maximum characters of README text kept as description.
pub const MAX_DESCRIPTION_CHARS: usize = 200;

/// Directory prefix that marks a use case folder.
pub const USE_CASE_PREFIX: &str = "use_case_";

/// Identifier of a use case (`use_case_NN_slug`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UseCaseId(String);

impl UseCaseId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether a directory name follows the use case naming convention
    pub fn is_use_case_name(name: &str) -> bool {
        name.starts_with(USE_CASE_PREFIX)
    }
}

impl std::fmt::Display for UseCaseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UseCaseId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// What the hub shows for a use case
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseCaseMetadata {
    pub id: UseCaseId,
    pub title: String,
    pub description: String,
    pub category: UseCaseCategory,
}

impl UseCaseMetadata {
    pub fn new(
        id: impl Into<UseCaseId>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: UseCaseCategory,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: truncate_with_ellipsis(&description.into(), MAX_DESCRIPTION_CHARS),
            category,
        }
    }

    /// Metadata derived from the id alone
    pub fn fallback(id: impl Into<UseCaseId>, category: UseCaseCategory) -> Self {
        let id = id.into();
        let title = title_from_id(id.as_str());
        Self::new(id, title, NO_DESCRIPTION, category)
    }

    /// Metadata read from README markdown.
    ///
    /// Title is the first `# ` heading (falls back to the id); description is
    /// every non-empty, non-heading line joined with spaces.
    pub fn from_readme(id: impl Into<UseCaseId>, category: UseCaseCategory, content: &str) -> Self {
        let id = id.into();
        let content = content.trim();

        // Only the `# ` marker is stripped; the rest of the heading is kept verbatim.
        let title = content
            .split('\n')
            .find_map(|line| line.strip_prefix("# "))
            .map(str::to_string)
            .unwrap_or_else(|| title_from_id(id.as_str()));

        let desc_lines: Vec<&str> = content
            .split('\n')
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .collect();
        let description = if desc_lines.is_empty() {
            NO_DESCRIPTION.to_string()
        } else {
            desc_lines.join(" ")
        };

        Self::new(id, title, description, category)
    }
}

impl From<String> for UseCaseId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
