//! Utilities for querying the Anthropic API via the messages endpoint.
//!
//! For specific details on request/response schemas, see the [Anthropic Messages API docs](https://docs.anthropic.com/en/api/messages).

use std::{env, str::FromStr};

use chrono::NaiveDate;
use reqwest::header;
use serde::{Deserialize, Serialize};

use crate::cli::{Model, DEFAULT_MODEL};
use crate::config::MODEL_ENV;
use crate::errors::LtbError;

/// Bound on generated output length, in tokens
pub const MAX_TOKENS: u32 = 4096;

const API_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// A `v1/messages` `messages` item
#[derive(Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

/// A `v1/messages` request body
#[derive(Serialize, Deserialize)]
pub struct MessagesRequest {
    pub model: String,
    pub max_tokens: u32,
    pub messages: Vec<ChatMessage>,
}

/// A `v1/messages` response content block
#[derive(Deserialize)]
pub struct ContentBlock {
    pub text: Option<String>,
}

/// A `v1/messages` response body
#[derive(Deserialize)]
pub struct MessagesResponse {
    pub content: Vec<ContentBlock>,
}

/// Build the fixed instruction that turns a session letter into a blog post.
///
/// The letter content is embedded verbatim and the requested frontmatter
/// date is the run date. The required output shape (frontmatter with title,
/// date, tags, excerpt, then a markdown body) is requested here but never
/// validated locally.
pub fn build_instruction(memory_content: &str, date: NaiveDate) -> String {
    format!(
        "You are a technical blog writer. Convert this development session memory into an engaging, public-ready blog post.

INPUT (Session Memory):
{memory_content}

REQUIREMENTS:
1. Transform technical decisions into narrative insights
2. Keep the \"Pain Log\" as \"Lessons Learned\" or \"Challenges\"
3. Make it readable for a general developer audience
4. Add markdown frontmatter with: title, date, tags, excerpt
5. Use proper markdown formatting with headers, code blocks, lists
6. Maintain technical accuracy but improve readability

OUTPUT FORMAT:
---
title: \"[Engaging Title]\"
date: {date}
tags: [relevant, tags, here]
excerpt: \"Brief summary of the post\"
---

[Blog post content in markdown]

Generate the blog post now:"
    )
}

/// Anything that can turn an instruction into generated text.
///
/// The generate pipeline depends only on this trait. [`AnthropicClient`] is
/// the production implementation; tests substitute a canned one.
pub trait BlogGenerator {
    fn generate(&self, instruction: &str) -> Result<String, LtbError>;
}

/// A blocking client for the Anthropic messages endpoint.
pub struct AnthropicClient {
    headers: header::HeaderMap,
    model: String,
}

impl AnthropicClient {
    /// Create a client. The model comes from the CLI arg, the `LTB_MODEL`
    /// env var, or the default, in that order.
    pub fn new(api_key: &str, model: Option<Model>) -> Result<Self, LtbError> {
        let mut headers = header::HeaderMap::new();
        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );
        let key_value =
            header::HeaderValue::from_str(api_key).map_err(|_| LtbError::InvalidApiKey)?;
        headers.insert("x-api-key", key_value);
        headers.insert(
            "anthropic-version",
            header::HeaderValue::from_static(API_VERSION),
        );

        let default_model = env::var(MODEL_ENV).unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let model = model.map(|m| m.to_string()).unwrap_or(default_model);

        // Validate the model is supported
        if Model::from_str(&model).is_err() {
            return Err(LtbError::UnsupportedModel {
                model,
                supported: Model::all_models().join(", "),
            });
        }

        Ok(AnthropicClient { headers, model })
    }
}

impl BlogGenerator for AnthropicClient {
    /// Submit the instruction and return the first text block of the reply
    /// unmodified. Service failures (auth, quota, network) surface as errors
    /// with no retry or backoff.
    fn generate(&self, instruction: &str) -> Result<String, LtbError> {
        let client = reqwest::blocking::Client::new();

        let user_msg = ChatMessage {
            role: "user".to_string(),
            content: instruction.to_string(),
        };
        let req_body = MessagesRequest {
            model: self.model.clone(),
            max_tokens: MAX_TOKENS,
            messages: vec![user_msg],
        };

        let response = client
            .post(API_URL)
            .headers(self.headers.clone())
            .json(&req_body)
            .send()?
            .error_for_status()?;

        let body = response.text()?;
        let parsed: MessagesResponse = serde_json::from_str(&body)?;
        parsed
            .content
            .iter()
            .find_map(|block| block.text.clone())
            .ok_or(LtbError::EmptyResponse)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_instruction_embeds_letter_and_date() {
        let date = NaiveDate::from_ymd_opt(2024, 6, 16).unwrap();
        let instruction = build_instruction("Shipped the parser today.", date);

        assert!(instruction.starts_with("You are a technical blog writer."));
        assert!(instruction.contains("Shipped the parser today."));
        assert!(instruction.contains("date: 2024-06-16"));
        assert!(instruction.contains("title, date, tags, excerpt"));
    }

    #[test]
    fn test_model_parsing() {
        assert!(matches!(
            Model::from_str("claude-sonnet-4-20250514"),
            Ok(Model::Sonnet4)
        ));
        assert!(matches!(Model::from_str("OPUS"), Ok(Model::Opus4)));
        assert!(Model::from_str("gpt-4o").is_err());
        assert_eq!(DEFAULT_MODEL.to_string(), "claude-sonnet-4-20250514");
    }

    #[test]
    fn test_invalid_api_key_rejected_before_any_request() {
        let res = AnthropicClient::new("bad\nkey", None);
        assert!(matches!(res, Err(LtbError::InvalidApiKey)));
    }

    #[test]
    fn test_model_resolution_order() {
        // CLI arg beats the env var
        env::set_var(MODEL_ENV, "claude-3-5-haiku-20241022");
        let client = AnthropicClient::new("sk-ant-test", Some(Model::Opus4)).unwrap();
        assert_eq!(client.model, "claude-opus-4-20250514");

        // env var beats the default
        let client = AnthropicClient::new("sk-ant-test", None).unwrap();
        assert_eq!(client.model, "claude-3-5-haiku-20241022");

        // unsupported env var value is an error
        env::set_var(MODEL_ENV, "gpt-4o");
        let res = AnthropicClient::new("sk-ant-test", None);
        assert!(matches!(res, Err(LtbError::UnsupportedModel { .. })));

        // default applies when nothing is set
        env::remove_var(MODEL_ENV);
        let client = AnthropicClient::new("sk-ant-test", None).unwrap();
        assert_eq!(client.model, DEFAULT_MODEL.to_string());
    }
}
