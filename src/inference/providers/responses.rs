//! Request body for the Responses API, shared by both providers.
//!
//! This module uses OpenAI Responses API terminology:
//! - "input" (array of messages)
//! - "role" (system / user)
//! - "text.format" (structured output constraint)

use serde::Serialize;

use crate::inference::{CompletionRequest, OutputSchema};

/// Role in an input message (OpenAI terminology)
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "lowercase")]
pub(super) enum Role {
    System,
    User,
}

/// A single message in the input array
#[derive(Serialize, Debug, Clone)]
pub(super) struct InputMessage {
    pub role: Role,
    pub content: String,
}

/// Configuration for reasoning tokens
#[derive(Serialize, Debug)]
pub(super) struct Reasoning {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub effort: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
}

/// `text.format` with a JSON schema
#[derive(Serialize, Debug)]
pub(super) struct TextConfig {
    pub format: TextFormat,
}

#[derive(Serialize, Debug)]
pub(super) struct TextFormat {
    #[serde(rename = "type")]
    pub format_type: &'static str, // always "json_schema"
    pub name: String,
    pub schema: serde_json::Value,
    pub strict: bool,
}

/// The request body for the Responses API
#[derive(Serialize, Debug)]
pub(super) struct ResponsesRequest {
    pub model: String,
    pub input: Vec<InputMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stream: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reasoning: Option<Reasoning>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_output_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<TextConfig>,
}

fn text_config(schema: &OutputSchema) -> TextConfig {
    TextConfig {
        format: TextFormat {
            format_type: "json_schema",
            name: schema.name.clone(),
            schema: schema.schema.clone(),
            strict: false,
        },
    }
}

/// Translate a domain request into the streaming wire format.
pub(super) fn build_request(
    request: &CompletionRequest<'_>,
    reasoning: Option<Reasoning>,
) -> ResponsesRequest {
    ResponsesRequest {
        model: request.model.to_string(),
        input: vec![
            InputMessage {
                role: Role::System,
                content: request.system_prompt.to_string(),
            },
            InputMessage {
                role: Role::User,
                content: request.user_prompt.to_string(),
            },
        ],
        stream: Some(true),
        reasoning,
        max_output_tokens: request.max_output_tokens,
        text: request.output_schema.map(text_config),
    }
}
