//! Prompt templates for crew execution

use crate::crew::agent::AgentRole;
use crate::crew::output::TaskOutput;
use crate::crew::task::TaskSpec;

/// Templates for the prompts sent while a crew runs
pub struct CrewPromptTemplate;

impl CrewPromptTemplate {
    /// System prompt that puts the model in the agent's persona
    pub fn agent_system(agent: &AgentRole) -> String {
        format!(
            r#"You are {role}. {backstory}

Your personal goal is: {goal}

Stay in character. Answer with your own analysis; do not describe what you would do, do it."#,
            role = agent.role,
            backstory = agent.backstory,
            goal = agent.goal,
        )
    }

    /// User prompt for a single task.
    ///
    /// `context` holds the outputs of the task's dependencies in declaration
    /// order; `references` is material gathered by the agent's tools.
    pub fn task_prompt(task: &TaskSpec, context: &[&TaskOutput], references: Option<&str>) -> String {
        let mut prompt = format!("Current task: {}\n", task.description);

        if !context.is_empty() {
            prompt.push_str("\nThis is the context you are working with, produced by your crew:\n");
            for output in context {
                prompt.push_str(&format!(
                    "\n--- {} ({}) ---\n{}\n",
                    output.agent_role, output.task_id, output.raw
                ));
            }
        }

        if let Some(refs) = references
            && !refs.trim().is_empty()
        {
            prompt.push_str("\nReference material gathered for this task:\n\n");
            prompt.push_str(refs);
            prompt.push('\n');
        }

        prompt.push_str(&format!(
            "\nThis is the expected criteria for your final answer: {}\n\
             You MUST return the actual complete content as the final answer, not a summary.",
            task.expected_output
        ));

        prompt
    }
}
