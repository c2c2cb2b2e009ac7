//! Chat completion wire types and response interpretation.
//!
//! Everything here is pure: the request body is built from typed values and
//! the raw response body is turned into a [`CompletionOutcome`] without any
//! network access.

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

use crate::plugin::Plugin;
use crate::prompt::Message;

/// Model used when none is given on the command line.
pub const DEFAULT_MODEL: &str = "gpt-4o-2024-08-06";

/// Default OpenAI API root.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Name given to the JSON schema in the `response_format`.
pub const SCHEMA_NAME: &str = "PluginResponse";

/// JSON schema the model reply must conform to.
///
/// Strict structured outputs require every property to be listed in
/// `required` and `additionalProperties: false` on every object.
pub fn plugin_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "name": { "type": "string" },
            "description": { "type": "string" },
            "files": {
                "type": "array",
                "items": {
                    "type": "object",
                    "properties": {
                        "path": { "type": "string" },
                        "content": { "type": "string" }
                    },
                    "required": ["path", "content"],
                    "additionalProperties": false
                }
            }
        },
        "required": ["name", "description", "files"],
        "additionalProperties": false
    })
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JsonSchemaFormat {
    pub name: String,
    pub strict: bool,
    pub schema: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonSchema { json_schema: JsonSchemaFormat },
}

impl ResponseFormat {
    /// Structured output constrained to the [`Plugin`] shape.
    pub fn plugin() -> Self {
        ResponseFormat::JsonSchema {
            json_schema: JsonSchemaFormat {
                name: SCHEMA_NAME.to_string(),
                strict: true,
                schema: plugin_schema(),
            },
        }
    }
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompletionRequest {
    pub model: String,
    pub messages: Vec<Message>,
    pub response_format: ResponseFormat,
}

impl CompletionRequest {
    pub fn new(model: impl Into<String>, messages: Vec<Message>) -> Self {
        Self {
            model: model.into(),
            messages,
            response_format: ResponseFormat::plugin(),
        }
    }
}

/// Subset of the chat completion response we read.
#[derive(Debug, Clone, Deserialize)]
pub struct CompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: AssistantMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssistantMessage {
    pub content: Option<String>,
    pub refusal: Option<String>,
}

/// Result of a single completion exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionOutcome {
    /// The model produced a schema-conforming plugin.
    Success(Plugin),
    /// The model declined. `raw` holds the full response body for display.
    Refusal { message: String, raw: String },
    /// Network, HTTP, or decoding failure.
    TransportError(String),
}

/// Interpret a raw chat completion body.
///
/// A non-empty `refusal` on the first choice wins over any content. An empty
/// refusal string is treated as absent.
pub fn interpret_response(body: &str) -> CompletionOutcome {
    let response: CompletionResponse = match serde_json::from_str(body) {
        Ok(response) => response,
        Err(e) => {
            return CompletionOutcome::TransportError(format!(
                "Failed to decode completion response: {e}"
            ))
        }
    };

    let Some(choice) = response.choices.into_iter().next() else {
        return CompletionOutcome::TransportError(
            "Completion response contained no choices".to_string(),
        );
    };

    if let Some(refusal) = choice.message.refusal.filter(|r| !r.is_empty()) {
        return CompletionOutcome::Refusal {
            message: refusal,
            raw: pretty_body(body),
        };
    }

    let Some(content) = choice.message.content else {
        return CompletionOutcome::TransportError(
            "Completion message has no content".to_string(),
        );
    };

    match serde_json::from_str::<Plugin>(&content) {
        Ok(plugin) => CompletionOutcome::Success(plugin),
        Err(e) => CompletionOutcome::TransportError(format!(
            "Completion content does not match the plugin schema: {e}"
        )),
    }
}

/// Re-indent a JSON body for display, falling back to the input as-is.
fn pretty_body(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .and_then(|value| serde_json::to_string_pretty(&value))
        .unwrap_or_else(|_| body.to_string())
}

/// Join a base URL and the chat completions path.
pub fn completions_url(base_url: &str) -> String {
    format!("{}/chat/completions", base_url.trim_end_matches('/'))
}
