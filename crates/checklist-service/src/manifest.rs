//! Tool manifest and health report
//!
//! Publishes the JSON schemas of the `generate_checklist` tool so callers
//! can validate requests and responses without reading this crate.

use crate::request::TOOL_NAME;
use checklist_core::{DEFAULT_MAX_STEPS, LEXICON_VERSION, MAX_STEPS, MIN_STEPS};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

const TOOL_DESCRIPTION: &str = "Convert free-form instructional text into a bounded, ordered \
checklist of verifiable steps for an automated agent.";

/// JSON schema of the tool input
#[must_use]
pub fn input_schema() -> Value {
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "required": ["text"],
        "properties": {
            "text": {
                "type": "string",
                "description": "Source text; must not be blank"
            },
            "context": {
                "type": "string",
                "description": "Echoed verbatim in the output"
            },
            "audience": {
                "type": "string",
                "enum": ["agent"],
                "default": "agent"
            },
            "max_steps": {
                "type": "integer",
                "minimum": MIN_STEPS,
                "maximum": MAX_STEPS,
                "default": DEFAULT_MAX_STEPS,
                "description": "Out-of-range values are clamped"
            }
        }
    })
}

/// JSON schema of the tool output
#[must_use]
pub fn output_schema() -> Value {
    let non_empty = json!({ "type": "string", "minLength": 1 });
    json!({
        "$schema": "http://json-schema.org/draft-07/schema#",
        "type": "object",
        "additionalProperties": false,
        "required": ["type", "audience", "context", "steps", "human_summary"],
        "properties": {
            "type": { "const": "checklist" },
            "audience": { "const": "agent" },
            "context": { "type": ["string", "null"] },
            "steps": {
                "type": "array",
                "minItems": MIN_STEPS,
                "maxItems": MAX_STEPS,
                "items": {
                    "type": "object",
                    "additionalProperties": false,
                    "required": ["id", "title", "action", "verify", "artifacts"],
                    "properties": {
                        "id": { "type": "string", "pattern": "^[1-9][0-9]*$" },
                        "title": non_empty,
                        "action": non_empty,
                        "verify": non_empty,
                        "artifacts": { "type": "array", "items": { "type": "string" } }
                    }
                }
            },
            "human_summary": non_empty
        }
    })
}

/// Tool manifest: every served tool with its schemas
#[must_use]
pub fn manifest() -> Value {
    json!({
        "tools": [{
            "name": TOOL_NAME,
            "description": TOOL_DESCRIPTION,
            "input_schema": input_schema(),
            "output_schema": output_schema()
        }],
        "lexicon_version": LEXICON_VERSION
    })
}

/// Liveness report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Health {
    /// Always `ok` when the process can answer
    pub status: String,
    /// Service crate version
    pub version: String,
    /// Lexicon tables version
    pub lexicon_version: String,
}

/// Current health report
#[must_use]
pub fn health() -> Health {
    Health {
        status: "ok".to_string(),
        version: crate::VERSION.to_string(),
        lexicon_version: LEXICON_VERSION.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_single_tool() {
        let manifest = manifest();
        let tools = manifest["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 1);
        assert_eq!(tools[0]["name"], "generate_checklist");
        assert_eq!(manifest["lexicon_version"], LEXICON_VERSION);
    }

    #[test]
    fn input_schema_bounds() {
        let schema = input_schema();
        assert_eq!(schema["properties"]["max_steps"]["minimum"], 3);
        assert_eq!(schema["properties"]["max_steps"]["maximum"], 12);
        assert_eq!(schema["properties"]["max_steps"]["default"], 8);
        assert_eq!(schema["properties"]["audience"]["enum"], json!(["agent"]));
        assert_eq!(schema["additionalProperties"], false);
    }

    #[test]
    fn output_schema_requires_every_key() {
        let schema = output_schema();
        assert_eq!(
            schema["required"],
            json!(["type", "audience", "context", "steps", "human_summary"])
        );
        assert_eq!(
            schema["properties"]["steps"]["items"]["required"],
            json!(["id", "title", "action", "verify", "artifacts"])
        );
    }

    #[test]
    fn health_is_ok() {
        let health = health();
        assert_eq!(health.status, "ok");
        assert_eq!(health.lexicon_version, "1.1.0");
        assert!(!health.version.is_empty());
    }
}
