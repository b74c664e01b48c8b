//! Request plumbing shared by the web tools

use crew_domain::ToolError;
use serde::de::DeserializeOwned;

/// GET `endpoint?params` and decode the body as JSON.
///
/// The body is read as text before decoding: DuckDuckGo labels its JSON
/// `application/x-javascript`.
pub(super) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    endpoint: &str,
    params: &[(&str, &str)],
    source: &str,
) -> Result<T, ToolError> {
    let response = client
        .get(endpoint)
        .query(params)
        .send()
        .await
        .map_err(|e| {
            if e.is_timeout() {
                ToolError::timeout(source)
            } else {
                ToolError::execution_failed(format!("{} request failed: {}", source, e))
            }
        })?;

    let status = response.status();
    if !status.is_success() {
        return Err(ToolError::execution_failed(format!(
            "{} returned HTTP {}",
            source, status
        )));
    }

    let text = response
        .text()
        .await
        .map_err(|e| ToolError::execution_failed(format!("cannot read {} response: {}", source, e)))?;
    serde_json::from_str(&text)
        .map_err(|e| ToolError::execution_failed(format!("cannot parse {} response: {}", source, e)))
}
