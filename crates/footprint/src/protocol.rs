//! Text protocol for the `carbon_survey` binary.
//!
//! Newline-delimited JSON on stdin/stdout. The types live here so they can be
//! unit-tested without the binary; the I/O loop is in
//! `crates/app/src/agent_mode.rs`.

use serde::{Deserialize, Serialize};

use crate::engine::FootprintResult;
use crate::factors::FactorTable;

// ---------------------------------------------------------------------------
// Commands (stdin)
// ---------------------------------------------------------------------------

/// One line of stdin. `cmd` is the discriminator.
#[derive(Debug, Deserialize)]
#[serde(tag = "cmd")]
pub enum SurveyCommand {
    /// Score a survey. `answers` is kept as raw JSON so a wrongly shaped
    /// body becomes an `error` response instead of a parse failure.
    #[serde(rename = "calculate")]
    Calculate {
        #[serde(default)]
        answers: serde_json::Value,
    },

    /// Dump the factor table the engine is using.
    #[serde(rename = "factors")]
    Factors,

    /// Score a survey and persist it under `user_id`.
    #[serde(rename = "save")]
    Save {
        #[serde(default)]
        user_id: String,
        #[serde(default)]
        answers: serde_json::Value,
    },

    /// List a user's saved results, oldest first.
    #[serde(rename = "history")]
    History { user_id: String },

    #[serde(rename = "quit")]
    Quit,
}

// ---------------------------------------------------------------------------
// Responses (stdout)
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub struct SurveyResponse {
    pub protocol_version: u32,
    #[serde(flatten)]
    pub payload: ResponsePayload,
}

/// A saved calculation as reported by `history`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub record_id: String,
    /// Unix seconds.
    pub created_at: u64,
    pub answers: serde_json::Value,
    pub footprint: FootprintResult,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type")]
pub enum ResponsePayload {
    #[serde(rename = "ready")]
    Ready,

    #[serde(rename = "footprint")]
    Footprint {
        success: bool,
        footprint: FootprintResult,
    },

    #[serde(rename = "factors")]
    Factors { table: Box<FactorTable> },

    #[serde(rename = "saved")]
    Saved {
        record_id: String,
        footprint: FootprintResult,
    },

    #[serde(rename = "history")]
    History { records: Vec<HistoryEntry> },

    #[serde(rename = "error")]
    Error { message: String },

    #[serde(rename = "goodbye")]
    Goodbye,
}

/// Bump when the command/response schema changes.
pub const PROTOCOL_VERSION: u32 = 1;

pub fn make_response(payload: ResponsePayload) -> SurveyResponse {
    SurveyResponse {
        protocol_version: PROTOCOL_VERSION,
        payload,
    }
}
