//! `wikipedia` tool: MediaWiki full-text search.
//!
//! Returns the top matching articles with their search snippet. Snippets
//! arrive as HTML (`<span class="searchmatch">`), so `scraper` reduces them
//! to plain text.

use super::http;
use crew_domain::{ToolCall, ToolDefinition, ToolError, ToolResult};
use scraper::Html;
use serde::Deserialize;
use std::time::Instant;

pub const WIKIPEDIA: &str = "wikipedia";

const WIKIPEDIA_API_URL: &str = "https://en.wikipedia.org/w/api.php";

const ARTICLE_BASE_URL: &str = "https://en.wikipedia.org/wiki/";

/// Articles returned per query.
const MAX_RESULTS: usize = 3;

#[derive(Debug, Deserialize)]
struct SearchResponse {
    query: Option<SearchQuery>,
}

#[derive(Debug, Deserialize)]
struct SearchQuery {
    #[serde(default)]
    search: Vec<SearchHit>,
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    title: String,
    #[serde(default)]
    snippet: String,
}

pub fn wikipedia_definition() -> ToolDefinition {
    ToolDefinition::new(
        WIKIPEDIA,
        "Look up encyclopedia articles on Wikipedia. Returns the top matching articles with a short excerpt.",
    )
}

pub async fn execute_wikipedia(client: &reqwest::Client, call: &ToolCall) -> ToolResult {
    execute_wikipedia_at(client, WIKIPEDIA_API_URL, call).await
}

pub(crate) async fn execute_wikipedia_at(
    client: &reqwest::Client,
    endpoint: &str,
    call: &ToolCall,
) -> ToolResult {
    let started = Instant::now();
    match lookup(client, endpoint, call).await {
        Ok(text) => ToolResult::success(WIKIPEDIA, text)
            .with_duration(started.elapsed().as_millis() as u64),
        Err(e) => ToolResult::failure(WIKIPEDIA, e),
    }
}

async fn lookup(
    client: &reqwest::Client,
    endpoint: &str,
    call: &ToolCall,
) -> Result<String, ToolError> {
    let query = call.require_query().map_err(ToolError::invalid_argument)?;
    let limit = MAX_RESULTS.to_string();
    let params = [
        ("action", "query"),
        ("list", "search"),
        ("srsearch", query),
        ("srlimit", limit.as_str()),
        ("format", "json"),
    ];
    let body: SearchResponse = http::get_json(client, endpoint, &params, "Wikipedia").await?;
    let hits = body.query.map(|q| q.search).unwrap_or_default();
    Ok(format_hits(query, &hits))
}

fn format_hits(query: &str, hits: &[SearchHit]) -> String {
    let mut sections = vec![format!("## Wikipedia results for: {}", query)];

    for hit in hits.iter().take(MAX_RESULTS) {
        sections.push(format!(
            "### {}\n{}\n{}{}",
            hit.title,
            snippet_text(&hit.snippet),
            ARTICLE_BASE_URL,
            hit.title.replace(' ', "_")
        ));
    }

    if sections.len() == 1 {
        sections.push("No matching articles.".to_string());
    }

    sections.join("\n\n")
}

/// Strip markup from a search snippet and collapse whitespace.
fn snippet_text(snippet: &str) -> String {
    let fragment = Html::parse_fragment(snippet);
    let text: String = fragment.root_element().text().collect();
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
