//! Model definition types.

use serde::{Deserialize, Serialize};

/// Definition of an LLM model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelDefinition {
    /// Model identifier.
    pub id: String,

    /// Human-readable name.
    pub name: String,

    /// Maximum context length in tokens.
    pub context_length: u32,

    /// Maximum output tokens.
    pub max_output_tokens: u32,

    /// Whether the model supports tool/function calling.
    #[serde(default)]
    pub supports_tools: bool,
}

impl ModelDefinition {
    /// Create a new model definition.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            context_length: 128_000,
            max_output_tokens: 4096,
            supports_tools: true,
        }
    }

    /// Set context length.
    pub fn with_context_length(mut self, length: u32) -> Self {
        self.context_length = length;
        self
    }
}

/// Provider capabilities.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderCapabilities {
    /// Supports streaming completions.
    pub streaming: bool,

    /// Supports tool/function calling.
    pub tool_calling: bool,

    /// Supports vision/image inputs.
    pub vision: bool,

    /// Supports JSON mode output.
    pub json_mode: bool,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
