//! **Web Tools**: `web_search` and `wikipedia`
//!
//! Gated behind the `web-tools` Cargo feature. Both tools take the agent's
//! query and return markdown an agent can cite.
//!
//! | Tool | Source | Key Dependency |
//! |------|--------|----------------|
//! | `web_search` | DuckDuckGo Instant Answer API | `reqwest` |
//! | `wikipedia` | MediaWiki search API | `reqwest` + `scraper` |

mod http;
mod search;
mod wikipedia;

pub use search::{WEB_SEARCH, execute_web_search, web_search_definition};
pub use wikipedia::{WIKIPEDIA, execute_wikipedia, wikipedia_definition};
