//! Request dispatch
//!
//! Wraps a [`ChecklistEngine`] and turns tool calls into checklists or
//! error responses. [`ChecklistService::handle_line`] is the JSON-lines
//! transport entry point: one request object in, one response object out.

use crate::error::{ErrorResponse, RequestError};
use crate::request::{ToolCall, ToolInput};
use checklist_core::{Checklist, ChecklistEngine, ChecklistRequest};
use serde_json::Value;

/// Checklist tool service
#[derive(Debug, Clone, Default)]
pub struct ChecklistService {
    engine: ChecklistEngine,
}

impl ChecklistService {
    /// Create service with the default engine
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create service around a configured engine
    #[inline]
    #[must_use]
    pub fn with_engine(engine: ChecklistEngine) -> Self {
        Self { engine }
    }

    /// Underlying engine
    #[inline]
    #[must_use]
    pub fn engine(&self) -> &ChecklistEngine {
        &self.engine
    }

    /// Handle a parsed tool call
    ///
    /// # Errors
    ///
    /// Caller input errors and engine defects, see [`RequestError`].
    pub fn handle_call(&self, call: ToolCall) -> Result<Checklist, RequestError> {
        let request = call.into_request().map_err(log_rejection)?;
        self.run(&request)
    }

    /// Handle tool input directly, skipping the envelope
    ///
    /// # Errors
    ///
    /// Caller input errors and engine defects, see [`RequestError`].
    pub fn handle_input(&self, input: ToolInput) -> Result<Checklist, RequestError> {
        let request = input.into_request().map_err(log_rejection)?;
        self.run(&request)
    }

    /// Handle a raw JSON tool-call envelope
    ///
    /// # Errors
    ///
    /// [`RequestError::Malformed`] if `raw` is not a valid envelope, then
    /// as [`ChecklistService::handle_call`].
    pub fn handle_json(&self, raw: &str) -> Result<Checklist, RequestError> {
        let call: ToolCall = serde_json::from_str(raw)
            .map_err(RequestError::from)
            .map_err(log_rejection)?;
        self.handle_call(call)
    }

    /// Handle one transport line, always producing a response value
    #[must_use]
    pub fn handle_line(&self, line: &str) -> Value {
        let result = self.handle_json(line);
        respond(result)
    }

    fn run(&self, request: &ChecklistRequest) -> Result<Checklist, RequestError> {
        self.engine.generate(request).map_err(RequestError::from)
    }
}

/// Serialize a handling result into a response value
#[must_use]
pub fn respond(result: Result<Checklist, RequestError>) -> Value {
    let serialized = match result {
        Ok(checklist) => serde_json::to_value(&checklist).map_err(RequestError::from),
        Err(err) => Err(err),
    };

    match serialized {
        Ok(value) => value,
        Err(err) => {
            let response = ErrorResponse::from(&err);
            serde_json::to_value(&response).unwrap_or(Value::Null)
        }
    }
}

fn log_rejection(err: RequestError) -> RequestError {
    tracing::error!("Rejected request: {}", err);
    err
}
