//! Auxiliary research tools agents consult before answering.
//!
//! The executor is always available; the tools themselves need the
//! `web-tools` feature (on by default in the binary).

mod executor;

#[cfg(feature = "web-tools")]
pub mod web;

pub use executor::LocalToolExecutor;

use crew_domain::tool::entities::ToolSpec;

/// Every tool compiled into this build.
pub fn default_tool_spec() -> ToolSpec {
    #[allow(unused_mut)]
    let mut spec = ToolSpec::new();
    #[cfg(feature = "web-tools")]
    {
        spec = spec
            .register(web::web_search_definition())
            .register(web::wikipedia_definition());
    }
    spec
}
