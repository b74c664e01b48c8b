//! Prompt templates for crew execution

mod template;

pub use template::CrewPromptTemplate;
