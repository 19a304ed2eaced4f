//! Checklist Service
//!
//! The request-handling boundary in front of the Checklist Synthesis
//! Engine.
//!
//! # Core Operations
//!
//! - **Parse**: decode `{ "tool", "input" }` envelopes and validate caller input
//! - **Dispatch**: run the engine and map failures to status-coded responses
//! - **Describe**: publish the tool manifest and a health report
//!
//! # Architecture
//!
//! ```text
//! JSON line → ToolCall → ToolInput → ChecklistRequest → ChecklistEngine → Checklist
//!                 ↓            ↓                                ↓
//!             RequestError ────┴────────────────────────→ ErrorResponse
//! ```
//!
//! # Example
//!
//! ```rust
//! use checklist_service::{ChecklistService, ToolCall, ToolInput};
//!
//! let service = ChecklistService::new();
//! let call = ToolCall::generate(&ToolInput::new("Validate all inputs and log errors."));
//! let checklist = service.handle_call(call).expect("valid request");
//! assert!(checklist.steps.len() >= 3);
//! ```

#![warn(missing_docs)]
#![warn(unreachable_pub)]

// Core modules
pub mod error;
pub mod manifest;
pub mod request;
pub mod service;

// Re-exports for convenience
pub use error::{ErrorBody, ErrorResponse, RequestError};
pub use manifest::{health, input_schema, manifest, output_schema, Health};
pub use request::{ToolCall, ToolInput, TOOL_NAME};
pub use service::{respond, ChecklistService};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude module for common imports
pub mod prelude {
    //! Common imports for working with the checklist service
    pub use crate::{ChecklistService, ErrorResponse, RequestError, ToolCall, ToolInput};
}
