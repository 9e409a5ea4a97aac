//! Completion response types.

use serde::{Deserialize, Serialize};

use crate::types::{Message, StopReason, ToolCall, Usage};

/// Response from a completion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    /// Unique ID for this completion.
    pub id: String,

    /// Model used.
    pub model: String,

    /// The assistant's response message.
    pub message: Message,

    /// Reason for stopping.
    pub stop_reason: StopReason,

    /// Token usage.
    pub usage: Usage,
}

impl CompletionResponse {
    /// Tool calls the model decided to make, empty when none.
    pub fn tool_calls(&self) -> &[ToolCall] {
        &self.message.tool_calls
    }
}

#[cfg(test)]
#[path = "response_tests.rs"]
mod tests;
