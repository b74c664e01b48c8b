//! Use case catalog settings (`[catalog]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Where README metadata is read from.
///
/// The directory holds `financial_use_cases/` and `research_use_cases/`.
/// When unset, built-in titles and descriptions are shown.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCatalogConfig {
    pub directory: Option<PathBuf>,
}
