use crate::error::{Result, StoryforgeError};
use crate::paths;
use crate::suggestion::Suggestion;
use crate::types::StoryStatus;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

// ---------------------------------------------------------------------------
// Story
// ---------------------------------------------------------------------------

/// A persisted user story record. One YAML file per story under
/// `.storyforge/stories/`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    pub title: String,
    pub text: String,
    pub status: StoryStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_points: Option<u32>,
    #[serde(default)]
    pub acceptance_criteria: Vec<Suggestion>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Story {
    pub fn new(id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            text: text.into(),
            status: StoryStatus::Draft,
            story_points: None,
            acceptance_criteria: Vec::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Generate a fresh record with a v4 UUID id.
    pub fn generate(title: impl Into<String>, text: impl Into<String>) -> Self {
        Self::new(uuid::Uuid::new_v4().to_string(), title, text)
    }

    // -----------------------------------------------------------------------
    // Persistence
    // -----------------------------------------------------------------------

    pub fn create(root: &Path, id: impl Into<String>, title: impl Into<String>, text: impl Into<String>) -> Result<Self> {
        let id = id.into();
        paths::validate_id(&id)?;

        let file = paths::story_file(root, &id);
        if file.exists() {
            return Err(StoryforgeError::StoryExists(id));
        }

        let story = Self::new(id, title, text);
        story.save(root)?;
        Ok(story)
    }

    /// Create and persist a record with a generated UUID id, for callers
    /// that do not pick their own.
    pub fn create_generated(
        root: &Path,
        title: impl Into<String>,
        text: impl Into<String>,
    ) -> Result<Self> {
        let story = Self::generate(title, text);
        story.save(root)?;
        Ok(story)
    }

    pub fn load(root: &Path, id: &str) -> Result<Self> {
        paths::validate_id(id)?;
        let file = paths::story_file(root, id);
        if !file.exists() {
            return Err(StoryforgeError::StoryNotFound(id.to_string()));
        }
        let data = std::fs::read_to_string(&file)?;
        let story: Story = serde_yaml::from_str(&data)?;
        Ok(story)
    }

    pub fn save(&self, root: &Path) -> Result<()> {
        let file = paths::story_file(root, &self.id);
        let data = serde_yaml::to_string(self)?;
        crate::io::atomic_write(&file, data.as_bytes())
    }

    pub fn delete(root: &Path, id: &str) -> Result<()> {
        paths::validate_id(id)?;
        let file = paths::story_file(root, id);
        if !file.exists() {
            return Err(StoryforgeError::StoryNotFound(id.to_string()));
        }
        std::fs::remove_file(&file)?;
        Ok(())
    }

    pub fn list(root: &Path) -> Result<Vec<Self>> {
        let dir = paths::stories_dir(root);
        if !dir.exists() {
            return Ok(Vec::new());
        }

        let mut stories = Vec::new();
        for entry in std::fs::read_dir(&dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("yaml") {
                continue;
            }
            let data = std::fs::read_to_string(&path)?;
            let story: Story = serde_yaml::from_str(&data)?;
            stories.push(story);
        }
        stories.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(stories)
    }

    // -----------------------------------------------------------------------
    // Mutation helpers
    // -----------------------------------------------------------------------

    /// Merge an accepted assist result: new text, and a new title when the
    /// operation generated one.
    pub fn accept_changes(&mut self, text: impl Into<String>, title: Option<String>) {
        self.text = text.into();
        if let Some(t) = title {
            self.title = t;
        }
        self.touch();
    }

    /// Restore text after a declined comparison. `None` means no meaningful
    /// original existed (create-from-scratch), so the field is cleared.
    pub fn decline_changes(&mut self, original: Option<String>) {
        self.text = original.unwrap_or_default();
        self.touch();
    }

    pub fn set_acceptance_criteria(&mut self, criteria: Vec<Suggestion>) {
        self.acceptance_criteria = criteria;
        self.touch();
    }

    pub fn set_story_points(&mut self, points: u32) {
        self.story_points = Some(points);
        self.touch();
    }

    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
