//! Use case categories

use serde::{Deserialize, Serialize};

/// Family a use case belongs to; also the directory holding its README.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UseCaseCategory {
    Financial,
    Research,
}

impl UseCaseCategory {
    pub const ALL: [UseCaseCategory; 2] = [UseCaseCategory::Financial, UseCaseCategory::Research];

    /// Directory name scanned for this category's use cases
    pub fn dir_name(&self) -> &'static str {
        match self {
            UseCaseCategory::Financial => "financial_use_cases",
            UseCaseCategory::Research => "research_use_cases",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            UseCaseCategory::Financial => "Financial Use Cases",
            UseCaseCategory::Research => "Research Use Cases",
        }
    }
}

impl std::fmt::Display for UseCaseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UseCaseCategory::Financial => write!(f, "financial"),
            UseCaseCategory::Research => write!(f, "research"),
        }
    }
}

impl std::str::FromStr for UseCaseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "financial" | "finance" | "financial_use_cases" => Ok(UseCaseCategory::Financial),
            "research" | "research_use_cases" => Ok(UseCaseCategory::Research),
            other => Err(format!("unknown category: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dir_names() {
        assert_eq!(UseCaseCategory::Financial.dir_name(), "financial_use_cases");
        assert_eq!(UseCaseCategory::Research.dir_name(), "research_use_cases");
    }

    #[test]
    fn test_parse_category() {
        assert_eq!("Financial".parse(), Ok(UseCaseCategory::Financial));
        assert_eq!("research_use_cases".parse(), Ok(UseCaseCategory::Research));
        assert!("cooking".parse::<UseCaseCategory>().is_err());
    }
}
