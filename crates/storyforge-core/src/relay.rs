//! Wire contract of the prompt relay and normalization of vendor output.
//!
//! The relay accepts one [`AssistRequest`], makes exactly one upstream call,
//! and reshapes the raw text payload per operation mode. The HTTP leg lives
//! in the server crate; everything here is pure.

use crate::error::{Result, StoryforgeError};
use crate::suggestion::{AnalysisResult, Suggestion};
use crate::types::OperationMode;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// AssistRequest
// ---------------------------------------------------------------------------

/// Request body of `POST /api/assist`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssistRequest {
    pub user_story: String,
    #[serde(default)]
    pub llm_model: String,
    pub operation_mode: OperationMode,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suggestions: Vec<Suggestion>,
}

// ---------------------------------------------------------------------------
// Typed response payloads
// ---------------------------------------------------------------------------

/// Response of the two free-text modes.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewStory {
    pub new_story: String,
}

/// Response of `create_story_from_scratch`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedStory {
    pub title: String,
    pub description: String,
}

// ---------------------------------------------------------------------------
// Output normalization
// ---------------------------------------------------------------------------

static FENCE_RE: OnceLock<Regex> = OnceLock::new();

fn fence_re() -> &'static Regex {
    FENCE_RE.get_or_init(|| {
        Regex::new(r"(?s)^\s*```(?:json)?\s*\n?(.*?)\n?\s*```\s*$").unwrap()
    })
}

/// Strip a surrounding markdown code fence, if any. Vendors occasionally
/// wrap JSON-mode output in ```json fences despite the mime-type request.
pub fn strip_code_fences(raw: &str) -> &str {
    match fence_re().captures(raw) {
        Some(caps) => caps.get(1).map(|m| m.as_str()).unwrap_or(raw),
        None => raw.trim(),
    }
}

/// Reshape the raw upstream text into the relay's response body for `mode`.
///
/// JSON modes parse the payload into the typed shape first, so an upstream
/// contract violation becomes [`StoryforgeError::MalformedUpstream`] instead
/// of an opaque failure. Free-text modes wrap the text as `{ "newStory" }`.
pub fn normalize_output(mode: OperationMode, raw: &str) -> Result<Value> {
    match mode {
        OperationMode::Analyze => {
            let cleaned = strip_code_fences(raw);
            let result: AnalysisResult = serde_json::from_str(cleaned).map_err(|e| {
                StoryforgeError::MalformedUpstream(format!("analyze output is not valid JSON: {e}"))
            })?;
            if result.quality_score > 100 {
                return Err(StoryforgeError::MalformedUpstream(format!(
                    "qualityScore {} is out of range 0-100",
                    result.quality_score
                )));
            }
            Ok(serde_json::to_value(result)?)
        }
        OperationMode::ApplySuggestions | OperationMode::ReviewAndImprove => {
            Ok(json!({ "newStory": raw.trim() }))
        }
        OperationMode::CreateStoryFromScratch => {
            let cleaned = strip_code_fences(raw);
            let generated: GeneratedStory = serde_json::from_str(cleaned).map_err(|e| {
                StoryforgeError::MalformedUpstream(format!(
                    "create_story_from_scratch output is not valid JSON: {e}"
                ))
            })?;
            Ok(serde_json::to_value(generated)?)
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
