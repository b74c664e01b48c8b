//! Console output formatter for run records, listings and demos

use colored::Colorize;
use crew_application::UseCaseRegistry;
use crew_domain::{
    Model, OutputFormat, RunRecord, ShowcaseReport, UseCaseCategory, UseCaseMetadata,
};

/// Formats hub output for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render a run record in the requested format
    pub fn format_record(record: &RunRecord, format: OutputFormat) -> String {
        match format {
            OutputFormat::Result => Self::format_result(record),
            OutputFormat::Full => Self::format_full(record),
            OutputFormat::Json => Self::format_json(record),
        }
    }

    /// The answer alone, or the error message
    pub fn format_result(record: &RunRecord) -> String {
        match record {
            RunRecord::Succeeded { result, .. } => {
                format!("{}\n\n{}\n", "=== Result ===".cyan().bold(), result.trim_end())
            }
            RunRecord::Failed { error, .. } => {
                format!("{}\n{}\n", "Error running use case".red().bold(), error)
            }
        }
    }

    /// The answer with the captured transcript, or the error with its traceback
    pub fn format_full(record: &RunRecord) -> String {
        let mut output = Self::format_result(record);
        match record {
            RunRecord::Succeeded { output: raw, .. } => {
                output.push_str(&Self::section_header("Raw Output"));
                if raw.trim().is_empty() {
                    output.push_str("No output captured\n");
                } else {
                    output.push_str(raw.trim_end());
                    output.push('\n');
                }
            }
            RunRecord::Failed { traceback, .. } => {
                output.push_str(&Self::section_header("Error Details"));
                if traceback.trim().is_empty() {
                    output.push_str("No traceback available\n");
                } else {
                    output.push_str(traceback.trim_end());
                    output.push('\n');
                }
            }
        }
        output
    }

    /// Format as JSON
    pub fn format_json(record: &RunRecord) -> String {
        serde_json::to_string_pretty(record).unwrap_or_else(|_| "{}".to_string())
    }

    /// Numbered listing grouped by category.
    ///
    /// Numbers are positions in the whole registry, so `/use 12` and
    /// `run 12` work the same with or without a category filter.
    pub fn format_listing(registry: &UseCaseRegistry, category: Option<UseCaseCategory>) -> String {
        let mut output = String::new();

        for cat in UseCaseCategory::ALL {
            if category.is_some_and(|c| c != cat) {
                continue;
            }
            output.push_str(&format!("{}\n", cat.display_name().cyan().bold()));

            for (index, meta) in registry.all().enumerate() {
                if meta.category != cat {
                    continue;
                }
                output.push_str(&format!(
                    "{:>3}. {} {}\n",
                    index + 1,
                    meta.title.bold(),
                    format!("({})", meta.id).dimmed()
                ));
                output.push_str(&format!("     {}\n", meta.description));
            }
            output.push('\n');
        }

        output
    }

    /// Listing as a JSON array of metadata
    pub fn format_listing_json(
        registry: &UseCaseRegistry,
        category: Option<UseCaseCategory>,
    ) -> String {
        let items: Vec<&UseCaseMetadata> = registry
            .all()
            .filter(|m| category.is_none_or(|c| m.category == c))
            .collect();
        serde_json::to_string_pretty(&items).unwrap_or_else(|_| "[]".to_string())
    }

    /// Title, id, category and description of one use case
    pub fn format_use_case_info(meta: &UseCaseMetadata) -> String {
        format!(
            "{}\n{} {}\n{} {}\n\n{}\n",
            meta.title.cyan().bold(),
            "Id:".bold(),
            meta.id,
            "Category:".bold(),
            meta.category.display_name(),
            meta.description
        )
    }

    pub fn format_showcase(report: &ShowcaseReport) -> String {
        let mut output = Self::section_header(report.title);
        for line in &report.lines {
            output.push_str(line);
            output.push('\n');
        }
        output
    }

    pub fn format_models(models: &[Model], current: &Model) -> String {
        if models.is_empty() {
            return "No models installed. Pull one with `ollama pull <model>`.\n".to_string();
        }

        let mut output = format!("{}\n", "Installed models:".bold());
        for model in models {
            if model.matches(current.as_str()) {
                output.push_str(&format!("  * {} {}\n", model.as_str().green(), "(selected)".dimmed()));
            } else {
                output.push_str(&format!("    {}\n", model));
            }
        }
        output
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
