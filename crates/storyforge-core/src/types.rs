use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// OperationMode
// ---------------------------------------------------------------------------

/// Wire-level operation requested from the prompt relay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OperationMode {
    Analyze,
    ApplySuggestions,
    ReviewAndImprove,
    CreateStoryFromScratch,
}

impl OperationMode {
    pub fn all() -> &'static [OperationMode] {
        &[
            OperationMode::Analyze,
            OperationMode::ApplySuggestions,
            OperationMode::ReviewAndImprove,
            OperationMode::CreateStoryFromScratch,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OperationMode::Analyze => "analyze",
            OperationMode::ApplySuggestions => "apply_suggestions",
            OperationMode::ReviewAndImprove => "review_and_improve",
            OperationMode::CreateStoryFromScratch => "create_story_from_scratch",
        }
    }

    /// Whether the vendor should be asked for JSON-formatted output.
    /// Free-text modes are wrapped as `{ "newStory": … }` by the relay.
    pub fn wants_json(self) -> bool {
        matches!(
            self,
            OperationMode::Analyze | OperationMode::CreateStoryFromScratch
        )
    }
}

impl fmt::Display for OperationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for OperationMode {
    type Err = crate::error::StoryforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analyze" => Ok(OperationMode::Analyze),
            "apply_suggestions" => Ok(OperationMode::ApplySuggestions),
            "review_and_improve" => Ok(OperationMode::ReviewAndImprove),
            "create_story_from_scratch" => Ok(OperationMode::CreateStoryFromScratch),
            _ => Err(crate::error::StoryforgeError::InvalidMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// PanelMode
// ---------------------------------------------------------------------------

/// Operating mode of the assist panel. `apply_suggestions` is not a panel
/// mode: it is a follow-up relay call issued from a staged analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PanelMode {
    Analyze,
    ReviewAndImprove,
    CreateFromScratch,
}

impl PanelMode {
    pub fn all() -> &'static [PanelMode] {
        &[
            PanelMode::Analyze,
            PanelMode::ReviewAndImprove,
            PanelMode::CreateFromScratch,
        ]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PanelMode::Analyze => "analyze",
            PanelMode::ReviewAndImprove => "review_and_improve",
            PanelMode::CreateFromScratch => "create_from_scratch",
        }
    }

    /// The relay operation issued when this mode executes.
    pub fn operation(self) -> OperationMode {
        match self {
            PanelMode::Analyze => OperationMode::Analyze,
            PanelMode::ReviewAndImprove => OperationMode::ReviewAndImprove,
            PanelMode::CreateFromScratch => OperationMode::CreateStoryFromScratch,
        }
    }
}

impl fmt::Display for PanelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PanelMode {
    type Err = crate::error::StoryforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "analyze" => Ok(PanelMode::Analyze),
            "review_and_improve" => Ok(PanelMode::ReviewAndImprove),
            "create_from_scratch" => Ok(PanelMode::CreateFromScratch),
            _ => Err(crate::error::StoryforgeError::InvalidMode(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// QualityLevel
// ---------------------------------------------------------------------------

/// Coarse categorical rating of a story's clarity and completeness.
/// Wire strings match the upstream contract, including the embedded space.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityLevel {
    Poor,
    #[serde(rename = "Needs Improvements")]
    NeedsImprovements,
    Good,
    Excellent,
}

impl QualityLevel {
    pub fn all() -> &'static [QualityLevel] {
        &[
            QualityLevel::Poor,
            QualityLevel::NeedsImprovements,
            QualityLevel::Good,
            QualityLevel::Excellent,
        ]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            QualityLevel::Poor => "Poor",
            QualityLevel::NeedsImprovements => "Needs Improvements",
            QualityLevel::Good => "Good",
            QualityLevel::Excellent => "Excellent",
        }
    }
}

impl fmt::Display for QualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for QualityLevel {
    type Err = crate::error::StoryforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Poor" => Ok(QualityLevel::Poor),
            "Needs Improvements" => Ok(QualityLevel::NeedsImprovements),
            "Good" => Ok(QualityLevel::Good),
            "Excellent" => Ok(QualityLevel::Excellent),
            _ => Err(crate::error::StoryforgeError::InvalidLevel(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// StoryStatus
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoryStatus {
    Draft,
    Ready,
    InProgress,
    Done,
}

impl StoryStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            StoryStatus::Draft => "draft",
            StoryStatus::Ready => "ready",
            StoryStatus::InProgress => "in_progress",
            StoryStatus::Done => "done",
        }
    }
}

impl fmt::Display for StoryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for StoryStatus {
    type Err = crate::error::StoryforgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "draft" => Ok(StoryStatus::Draft),
            "ready" => Ok(StoryStatus::Ready),
            "in_progress" => Ok(StoryStatus::InProgress),
            "done" => Ok(StoryStatus::Done),
            _ => Err(crate::error::StoryforgeError::InvalidStatus(s.to_string())),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
