use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use storyforge_core::story::Story;
use storyforge_core::suggestion::Suggestion;
use storyforge_core::types::StoryStatus;

use crate::error::AppError;
use crate::state::AppState;

fn story_json(s: &Story) -> serde_json::Value {
    serde_json::json!({
        "id": s.id,
        "title": s.title,
        "text": s.text,
        "status": s.status,
        "story_points": s.story_points,
        "acceptance_criteria": s.acceptance_criteria,
        "created_at": s.created_at,
        "updated_at": s.updated_at,
    })
}

/// GET /api/stories — list all stories, oldest first.
pub async fn list_stories(
    State(app): State<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let stories = Story::list(&root)?;
        let list: Vec<serde_json::Value> = stories.iter().map(story_json).collect();
        Ok::<_, storyforge_core::StoryforgeError>(serde_json::json!(list))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// GET /api/stories/:id — full story detail.
pub async fn get_story(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let story = Story::load(&root, &id)?;
        Ok::<_, storyforge_core::StoryforgeError>(story_json(&story))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

#[derive(serde::Deserialize)]
pub struct CreateStoryBody {
    /// Omit to get a generated UUID id.
    #[serde(default)]
    pub id: Option<String>,
    pub title: String,
    #[serde(default)]
    pub text: String,
}

/// POST /api/stories — create a new story record.
pub async fn create_story(
    State(app): State<AppState>,
    Json(body): Json<CreateStoryBody>,
) -> Result<(StatusCode, Json<serde_json::Value>), AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let story = match body.id {
            Some(id) => Story::create(&root, id, body.title, body.text)?,
            None => Story::create_generated(&root, body.title, body.text)?,
        };
        Ok::<_, storyforge_core::StoryforgeError>(story_json(&story))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok((StatusCode::CREATED, Json(result)))
}

#[derive(serde::Deserialize)]
pub struct UpdateStoryBody {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub status: Option<StoryStatus>,
    #[serde(default)]
    pub story_points: Option<u32>,
    #[serde(default)]
    pub acceptance_criteria: Option<Vec<Suggestion>>,
}

/// PUT /api/stories/:id — partial update; absent fields are left alone.
pub async fn update_story(
    State(app): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateStoryBody>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let result = tokio::task::spawn_blocking(move || {
        let mut story = Story::load(&root, &id)?;
        if let Some(title) = body.title {
            story.title = title;
        }
        if let Some(text) = body.text {
            story.text = text;
        }
        if let Some(status) = body.status {
            story.status = status;
        }
        if let Some(points) = body.story_points {
            story.set_story_points(points);
        }
        if let Some(criteria) = body.acceptance_criteria {
            story.set_acceptance_criteria(criteria);
        }
        story.touch();
        story.save(&root)?;
        Ok::<_, storyforge_core::StoryforgeError>(story_json(&story))
    })
    .await
    .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(result))
}

/// DELETE /api/stories/:id — remove a story record.
pub async fn delete_story(
    State(app): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    let root = app.root.clone();
    let id_for_task = id.clone();
    tokio::task::spawn_blocking(move || Story::delete(&root, &id_for_task))
        .await
        .map_err(|e| AppError(anyhow::anyhow!("task join error: {e}")))??;

    Ok(Json(serde_json::json!({ "deleted": id })))
}
