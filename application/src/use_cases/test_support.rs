//! In-memory gateway and tool executor shared by use case tests.

use crate::ports::llm_gateway::{GatewayError, LlmGateway, LlmSession};
use crate::ports::tool_executor::ToolExecutorPort;
use async_trait::async_trait;
use crew_domain::{Model, ToolCall, ToolDefinition, ToolError, ToolResult, ToolSpec};
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;

type Script = Arc<Mutex<VecDeque<Result<String, GatewayError>>>>;

/// Gateway whose sessions pop replies from one shared script, in order.
pub(crate) struct ScriptedGateway {
    script: Script,
    pub system_prompts: Arc<Mutex<Vec<String>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

impl ScriptedGateway {
    pub fn new(replies: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            script: Arc::new(Mutex::new(VecDeque::from(replies))),
            system_prompts: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            delay: None,
        }
    }

    pub fn replying(replies: &[&str]) -> Self {
        Self::new(replies.iter().map(|r| Ok(r.to_string())).collect())
    }

    /// Every send sleeps this long before answering.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn system_prompts(&self) -> Vec<String> {
        self.system_prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for ScriptedGateway {
    async fn open_session(
        &self,
        model: &Model,
        persona: Option<&str>,
    ) -> Result<Box<dyn LlmSession>, GatewayError> {
        if let Some(persona) = persona {
            self.system_prompts.lock().unwrap().push(persona.to_string());
        }
        Ok(Box::new(ScriptedSession {
            model: model.clone(),
            script: Arc::clone(&self.script),
            prompts: Arc::clone(&self.prompts),
            delay: self.delay,
        }))
    }

    async fn available_models(&self) -> Result<Vec<Model>, GatewayError> {
        Ok(vec![Model::default()])
    }
}

struct ScriptedSession {
    model: Model,
    script: Script,
    prompts: Arc<Mutex<Vec<String>>>,
    delay: Option<Duration>,
}

#[async_trait]
impl LlmSession for ScriptedSession {
    fn model(&self) -> &Model {
        &self.model
    }

    async fn send(&self, content: &str) -> Result<String, GatewayError> {
        self.prompts.lock().unwrap().push(content.to_string());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(GatewayError::InvalidResponse("script exhausted".to_string())))
    }
}

/// Tool executor answering from a fixed table; unlisted tools fail.
pub(crate) struct MockToolExecutor {
    spec: ToolSpec,
    outputs: HashMap<String, Result<String, String>>,
    pub calls: Mutex<Vec<ToolCall>>,
    delay: Option<Duration>,
}

impl MockToolExecutor {
    pub fn new() -> Self {
        Self {
            spec: ToolSpec::new(),
            outputs: HashMap::new(),
            calls: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_output(mut self, name: &str, output: &str) -> Self {
        self.spec = self
            .spec
            .register(ToolDefinition::new(name, format!("{name} tool")));
        self.outputs.insert(name.to_string(), Ok(output.to_string()));
        self
    }

    pub fn with_failure(mut self, name: &str, message: &str) -> Self {
        self.spec = self
            .spec
            .register(ToolDefinition::new(name, format!("{name} tool")));
        self.outputs.insert(name.to_string(), Err(message.to_string()));
        self
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl ToolExecutorPort for MockToolExecutor {
    fn tool_spec(&self) -> &ToolSpec {
        &self.spec
    }

    async fn execute(&self, call: &ToolCall) -> ToolResult {
        self.calls.lock().unwrap().push(call.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        match self.outputs.get(&call.tool_name) {
            Some(Ok(output)) => ToolResult::success(&call.tool_name, output.as_str()),
            Some(Err(message)) => ToolResult::failure(
                &call.tool_name,
                ToolError::execution_failed(message.as_str()),
            ),
            None => ToolResult::failure(&call.tool_name, ToolError::not_found(&call.tool_name)),
        }
    }
}
