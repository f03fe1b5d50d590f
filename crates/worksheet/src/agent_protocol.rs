//! Agent text protocol types for the `--agent` headless mode.
//!
//! Defines the JSON command/response envelope that scripts and test
//! harnesses use to drive the worksheet over newline-delimited JSON on
//! stdin/stdout. The I/O loop lives in `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::session::WorksheetSnapshot;
use crate::summary::Summary;
use crate::worksheet_actions::{ActionResult, WorksheetAction};

// ---------------------------------------------------------------------------
// Commands (stdin → worksheet)
// ---------------------------------------------------------------------------

/// A single command sent over stdin. The `cmd` field is the discriminator.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum AgentCommand {
    /// Request the current worksheet snapshot.
    #[serde(rename = "observe")]
    Observe,

    /// Execute a single worksheet action.
    #[serde(rename = "act")]
    Act { action: WorksheetAction },

    /// Execute multiple actions in sequence.
    #[serde(rename = "batch_act")]
    BatchAct { actions: Vec<WorksheetAction> },

    /// Confirm and return the summary (table and chart data).
    #[serde(rename = "summary")]
    Summary,

    /// End the session.
    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (worksheet → stdout)
// ---------------------------------------------------------------------------

/// Every response includes the protocol version and a tagged payload.
#[derive(Debug, Serialize)]
pub struct AgentResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "observation")]
    Observation { observation: WorksheetSnapshot },

    #[serde(rename = "action_result")]
    ActionResult { result: ActionResult },

    #[serde(rename = "batch_result")]
    BatchResult { results: Vec<ActionResult> },

    #[serde(rename = "summary")]
    Summary { summary: Box<Summary> },

    /// The command could not be parsed or the summary could not be built.
    #[serde(rename = "error")]
    Error { message: String },

    #[serde(rename = "goodbye")]
    Goodbye,
}

/// Current protocol version. Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> AgentResponse {
    AgentResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}
