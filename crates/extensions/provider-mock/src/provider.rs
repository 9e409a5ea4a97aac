//! Mock provider implementation.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use serde_json::json;

use troupe_protocols::error::ProviderError;
use troupe_protocols::hooks::{HookEmitter, LLM_REQUEST_RAW, LLM_RESPONSE_RAW};
use troupe_protocols::provider::{
    CompletionRequest, CompletionResponse, LLMProvider, ModelDefinition, ProviderCapabilities,
};
use troupe_protocols::types::{
    ContentPart, Message, MessageContent, MessageRole, StopReason, ToolCall, Usage,
};

pub(crate) const PROVIDER_ID: &str = "mock";

const TOOL_CALL_ID: &str = "mock_tool_1";
const TOOL_NAME: &str = "read";
const TOOL_ACK: &str = "I'll read that file for you.";

/// Canned replies used when the configuration supplies none.
pub(crate) fn default_responses() -> Vec<String> {
    vec![
        "I'll help you with that task.".to_string(),
        "Task completed successfully.".to_string(),
        "Here's the result of your request.".to_string(),
    ]
}

/// Mock LLM provider cycling through canned responses.
///
/// Each call increments an instance-scoped counter; the counter modulo the
/// number of canned replies selects the reply. When the latest message
/// mentions "read", the provider fabricates a tool call instead so that
/// downstream tool handling can be exercised.
pub struct MockProvider {
    responses: Vec<String>,
    call_count: AtomicU64,
    hooks: Option<Arc<dyn HookEmitter>>,
    debug: bool,
    raw_debug: bool,
    models: Vec<ModelDefinition>,
    capabilities: ProviderCapabilities,
}

impl MockProvider {
    /// Create a mock provider. An empty `responses` list falls back to the
    /// built-in defaults so selection always has something to cycle through.
    pub fn new(
        responses: Vec<String>,
        hooks: Option<Arc<dyn HookEmitter>>,
        debug: bool,
        raw_debug: bool,
    ) -> Self {
        let responses = if responses.is_empty() {
            default_responses()
        } else {
            responses
        };

        Self {
            responses,
            call_count: AtomicU64::new(0),
            hooks,
            debug,
            raw_debug,
            models: vec![ModelDefinition::new("mock-model", "Mock Model")],
            capabilities: ProviderCapabilities {
                streaming: false,
                tool_calling: true,
                vision: false,
                json_mode: false,
            },
        }
    }

    /// Number of completions served so far.
    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Tool calls carried by a response, empty when none were produced.
    pub fn parse_tool_calls(&self, response: &CompletionResponse) -> Vec<ToolCall> {
        response.tool_calls().to_vec()
    }

    /// Emit a raw diagnostic event when both debug flags are set and a sink
    /// is present. Sink failures surface to the caller unmodified.
    async fn emit_raw(&self, event: &str, payload: serde_json::Value) -> Result<(), ProviderError> {
        if !(self.debug && self.raw_debug) {
            return Ok(());
        }
        if let Some(hooks) = &self.hooks {
            hooks.emit(event, payload).await?;
        }
        Ok(())
    }

    fn assistant_message(text: &str, tool_calls: Vec<ToolCall>) -> Message {
        Message {
            role: MessageRole::Assistant,
            content: MessageContent::Parts(vec![ContentPart::Text {
                text: text.to_string(),
            }]),
            tool_calls,
            tool_call_id: None,
        }
    }
}

/// Text the trigger check runs against: the latest message's plain string,
/// or the text of its first text part. Empty when the history is empty or
/// the content carries no text.
fn last_text(messages: &[Message]) -> &str {
    messages
        .last()
        .and_then(|m| m.content.first_text())
        .unwrap_or("")
}

#[async_trait]
impl LLMProvider for MockProvider {
    fn id(&self) -> &str {
        PROVIDER_ID
    }

    fn models(&self) -> &[ModelDefinition] {
        &self.models
    }

    fn capabilities(&self) -> &ProviderCapabilities {
        &self.capabilities
    }

    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, ProviderError> {
        let call_count = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;

        self.emit_raw(
            LLM_REQUEST_RAW,
            json!({
                "lvl": "DEBUG",
                "provider": PROVIDER_ID,
                "message_count": request.messages.len(),
                "call_count": call_count,
            }),
        )
        .await?;

        let triggered = last_text(&request.messages)
            .to_lowercase()
            .contains(TOOL_NAME);

        let response = if triggered {
            let tool_call = ToolCall {
                id: TOOL_CALL_ID.to_string(),
                name: TOOL_NAME.to_string(),
                arguments: json!({"path": "test.txt"}),
            };
            CompletionResponse {
                id: format!("mock_completion_{call_count}"),
                model: request.model.clone(),
                message: Self::assistant_message(TOOL_ACK, vec![tool_call]),
                stop_reason: StopReason::ToolUse,
                usage: Usage::new(10, 5),
            }
        } else {
            let index = (call_count % self.responses.len() as u64) as usize;
            CompletionResponse {
                id: format!("mock_completion_{call_count}"),
                model: request.model.clone(),
                message: Self::assistant_message(&self.responses[index], Vec::new()),
                stop_reason: StopReason::EndTurn,
                usage: Usage::new(10, 20),
            }
        };

        self.emit_raw(
            LLM_RESPONSE_RAW,
            json!({
                "lvl": "DEBUG",
                "provider": PROVIDER_ID,
                "has_tool_calls": !response.tool_calls().is_empty(),
                "tool_count": response.tool_calls().len(),
            }),
        )
        .await?;

        Ok(response)
    }
}

#[cfg(test)]
#[path = "provider_tests.rs"]
mod tests;
