//! Tool-call request parsing
//!
//! Validates caller input before it reaches the engine. The engine
//! assumes non-empty text and an `agent` audience; this module enforces
//! both.

use crate::error::RequestError;
use checklist_core::{Audience, ChecklistRequest};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The only tool served
pub const TOOL_NAME: &str = "generate_checklist";

/// Tool-call envelope: `{ "tool": ..., "input": { ... } }`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolCall {
    /// Tool name
    pub tool: String,
    /// Raw tool input, parsed once the tool is known
    #[serde(default)]
    pub input: Value,
}

impl ToolCall {
    /// Create call for the checklist tool
    #[must_use]
    pub fn generate(input: &ToolInput) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            input: serde_json::to_value(input).unwrap_or(Value::Null),
        }
    }

    /// Resolve the tool and parse its input
    ///
    /// # Errors
    ///
    /// [`RequestError::UnknownTool`] for any tool other than
    /// [`TOOL_NAME`], otherwise any error of [`ToolInput::into_request`].
    pub fn into_request(self) -> Result<ChecklistRequest, RequestError> {
        if self.tool != TOOL_NAME {
            return Err(RequestError::UnknownTool(self.tool));
        }
        let input: ToolInput = serde_json::from_value(self.input)?;
        input.into_request()
    }
}

/// `generate_checklist` input fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolInput {
    /// Source text
    pub text: String,
    /// Optional context, echoed verbatim
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
    /// Requested step bound; clamped by the engine, never rejected
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<i64>,
    /// Audience; only `agent` is accepted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub audience: Option<String>,
}

impl ToolInput {
    /// Create input for text
    #[inline]
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// With context
    #[inline]
    #[must_use]
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }

    /// With requested step bound
    #[inline]
    #[must_use]
    pub fn with_max_steps(mut self, max_steps: i64) -> Self {
        self.max_steps = Some(max_steps);
        self
    }

    /// With audience
    #[inline]
    #[must_use]
    pub fn with_audience(mut self, audience: impl Into<String>) -> Self {
        self.audience = Some(audience.into());
        self
    }

    /// Validate into an engine request
    ///
    /// # Errors
    ///
    /// [`RequestError::EmptyText`] when the text is blank and
    /// [`RequestError::InvalidAudience`] for any audience but `agent`.
    pub fn into_request(self) -> Result<ChecklistRequest, RequestError> {
        if self.text.trim().is_empty() {
            return Err(RequestError::EmptyText);
        }

        let audience = match self.audience.as_deref() {
            None => Audience::Agent,
            Some(value) if value == Audience::Agent.as_str() => Audience::Agent,
            Some(other) => return Err(RequestError::InvalidAudience(other.to_string())),
        };

        Ok(ChecklistRequest {
            text: self.text,
            context: self.context,
            max_steps: self.max_steps,
            audience,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn call(value: Value) -> Result<ChecklistRequest, RequestError> {
        serde_json::from_value::<ToolCall>(value)?.into_request()
    }

    #[test]
    fn minimal_call() {
        let request = call(json!({ "tool": "generate_checklist", "input": { "text": "Log errors" } })).unwrap();
        assert_eq!(request.text, "Log errors");
        assert_eq!(request.audience, Audience::Agent);
        assert_eq!(request.max_steps, None);
        assert_eq!(request.context, None);
    }

    #[test]
    fn full_call() {
        let request = call(json!({
            "tool": "generate_checklist",
            "input": { "text": "Log errors", "context": "ops", "max_steps": 40, "audience": "agent" }
        }))
        .unwrap();
        assert_eq!(request.context.as_deref(), Some("ops"));
        assert_eq!(request.max_steps, Some(40));
    }

    #[test]
    fn unknown_tool_is_checked_before_input() {
        let err = call(json!({ "tool": "summarize", "input": 5 })).unwrap_err();
        assert!(matches!(err, RequestError::UnknownTool(name) if name == "summarize"));
    }

    #[test]
    fn blank_text_is_rejected() {
        let err = ToolInput::new(" \n\t ").into_request().unwrap_err();
        assert!(matches!(err, RequestError::EmptyText));
    }

    #[test]
    fn other_audience_is_rejected() {
        let err = ToolInput::new("Log errors")
            .with_audience("human")
            .into_request()
            .unwrap_err();
        assert!(matches!(err, RequestError::InvalidAudience(a) if a == "human"));
    }

    #[test]
    fn shape_errors_are_malformed() {
        for value in [
            json!({ "tool": "generate_checklist", "input": { "text": "x", "extra": 1 } }),
            json!({ "tool": "generate_checklist", "input": { "text": "x", "max_steps": "five" } }),
            json!({ "tool": "generate_checklist", "input": { "max_steps": 5 } }),
            json!({ "tool": "generate_checklist" }),
            json!({ "tool": "generate_checklist", "input": {}, "id": 1 }),
        ] {
            assert!(matches!(call(value), Err(RequestError::Malformed(_))));
        }
    }

    #[test]
    fn tool_call_builder() {
        let input = ToolInput::new("Log errors").with_max_steps(4).with_context("ops");
        let request = ToolCall::generate(&input).into_request().unwrap();
        assert_eq!(request.max_steps, Some(4));
        assert_eq!(request.context.as_deref(), Some("ops"));
    }
}
