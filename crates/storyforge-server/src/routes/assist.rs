use axum::extract::State;
use axum::Json;
use std::str::FromStr;
use storyforge_core::error::StoryforgeError;
use storyforge_core::relay::AssistRequest;
use storyforge_core::suggestion::Suggestion;
use storyforge_core::types::OperationMode;

use crate::error::AppError;
use crate::state::AppState;

/// POST /api/assist — relay one prompt to the configured LLM vendor.
///
/// The body is decoded by hand so each contract violation gets its precise
/// error kind (and status) instead of a generic deserialization failure.
pub async fn assist(
    State(app): State<AppState>,
    Json(body): Json<serde_json::Value>,
) -> Result<Json<serde_json::Value>, AppError> {
    let request = parse_request(&body)?;
    let result = crate::relay::relay(&app.http, &app.credentials, &app.bases, &request).await?;
    Ok(Json(result))
}

fn parse_request(body: &serde_json::Value) -> Result<AssistRequest, AppError> {
    let user_story = body
        .get("userStory")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    if user_story.trim().is_empty() {
        return Err(StoryforgeError::EmptyStory.into());
    }

    let mode_raw = body
        .get("operationMode")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default();
    let operation_mode = OperationMode::from_str(mode_raw)
        .map_err(|_| StoryforgeError::InvalidMode(mode_raw.to_string()))?;

    let llm_model = body
        .get("llmModel")
        .and_then(serde_json::Value::as_str)
        .unwrap_or_default()
        .to_string();

    let suggestions: Vec<Suggestion> = match body.get("suggestions") {
        Some(v) => serde_json::from_value(v.clone())
            .map_err(|e| StoryforgeError::InvalidSuggestions(e.to_string()))?,
        None => Vec::new(),
    };

    Ok(AssistRequest {
        user_story: user_story.to_string(),
        llm_model,
        operation_mode,
        suggestions,
    })
}
