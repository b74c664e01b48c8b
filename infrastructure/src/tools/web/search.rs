//! `web_search` tool: DuckDuckGo Instant Answer API.
//!
//! The API needs no key and returns abstracts, definitions and related
//! topics rather than a full result listing. Output is markdown with one
//! section per populated field.

use super::http;
use crew_domain::{ToolCall, ToolDefinition, ToolError, ToolResult};
use std::time::Instant;

pub const WEB_SEARCH: &str = "web_search";

const DDG_API_URL: &str = "https://api.duckduckgo.com/";

/// Related topics kept in the output.
const MAX_RELATED_TOPICS: usize = 10;

pub fn web_search_definition() -> ToolDefinition {
    ToolDefinition::new(
        WEB_SEARCH,
        "Search the web using DuckDuckGo. Returns instant answers, abstracts, and related topics.",
    )
}

pub async fn execute_web_search(client: &reqwest::Client, call: &ToolCall) -> ToolResult {
    execute_web_search_at(client, DDG_API_URL, call).await
}

pub(crate) async fn execute_web_search_at(
    client: &reqwest::Client,
    endpoint: &str,
    call: &ToolCall,
) -> ToolResult {
    let started = Instant::now();
    match search(client, endpoint, call).await {
        Ok(text) => ToolResult::success(WEB_SEARCH, text)
            .with_duration(started.elapsed().as_millis() as u64),
        Err(e) => ToolResult::failure(WEB_SEARCH, e),
    }
}

async fn search(
    client: &reqwest::Client,
    endpoint: &str,
    call: &ToolCall,
) -> Result<String, ToolError> {
    let query = call.require_query().map_err(ToolError::invalid_argument)?;
    let params = [
        ("q", query),
        ("format", "json"),
        ("no_html", "1"),
        ("skip_disambig", "1"),
    ];
    let body: serde_json::Value = http::get_json(client, endpoint, &params, "DuckDuckGo").await?;
    Ok(format_search_results(query, &body))
}

/// Render the API response as markdown.
fn format_search_results(query: &str, data: &serde_json::Value) -> String {
    let mut sections: Vec<String> = vec![format!("## Search Results for: {}", query)];

    if let Some(abstract_text) = data["AbstractText"].as_str()
        && !abstract_text.is_empty()
    {
        let source = data["AbstractSource"].as_str().unwrap_or("Unknown");
        let url = data["AbstractURL"].as_str().unwrap_or("");
        sections.push(format!(
            "### Summary ({})\n{}\nSource: {}",
            source, abstract_text, url
        ));
    }

    if let Some(answer) = data["Answer"].as_str()
        && !answer.is_empty()
    {
        sections.push(format!("### Instant Answer\n{}", answer));
    }

    if let Some(definition) = data["Definition"].as_str()
        && !definition.is_empty()
    {
        let source = data["DefinitionSource"].as_str().unwrap_or("Unknown");
        sections.push(format!("### Definition ({})\n{}", source, definition));
    }

    if let Some(topics) = data["RelatedTopics"].as_array() {
        // Grouped topics carry a `Topics` array instead of `Text`; flatten one level.
        let topic_texts: Vec<String> = topics
            .iter()
            .flat_map(|t| match t["Topics"].as_array() {
                Some(nested) => nested.iter().collect::<Vec<_>>(),
                None => vec![t],
            })
            .filter_map(|t| {
                let text = t["Text"].as_str().filter(|s| !s.is_empty())?;
                let url = t["FirstURL"].as_str().unwrap_or("");
                Some(format!("- {} ({})", text, url))
            })
            .take(MAX_RELATED_TOPICS)
            .collect();

        if !topic_texts.is_empty() {
            sections.push(format!("### Related Topics\n{}", topic_texts.join("\n")));
        }
    }

    if sections.len() == 1 {
        sections.push("No instant answer available.".to_string());
    }

    sections.join("\n\n")
}
