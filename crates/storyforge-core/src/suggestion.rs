use crate::types::QualityLevel;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// SuggestionKind
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Improvement,
    Acceptance,
}

// ---------------------------------------------------------------------------
// Suggestion
// ---------------------------------------------------------------------------

/// A single AI-proposed improvement or acceptance criterion. Tick state is
/// mutable client-side; everything else is produced by the relay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub text: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    pub ticked: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<SuggestionKind>,
}

impl Suggestion {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            example: None,
            ticked: true,
            kind: None,
        }
    }
}

/// Keep only the ticked suggestions, in their original order.
pub fn ticked(suggestions: &[Suggestion]) -> Vec<Suggestion> {
    suggestions.iter().filter(|s| s.ticked).cloned().collect()
}

// ---------------------------------------------------------------------------
// SimilarStoryRef
// ---------------------------------------------------------------------------

/// Display-only reference to a historical story surfaced by analysis.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimilarStoryRef {
    pub id: String,
    pub title: String,
    pub status: String,
    pub feature_id: String,
    pub feature_name: String,
    pub matching_percentage: u8,
}

/// Rank similar stories descending by matching percentage. Percentages, not
/// identity, drive the order, so a stable sort is not required.
pub fn rank_similar(stories: &mut [SimilarStoryRef]) {
    stories.sort_unstable_by(|a, b| b.matching_percentage.cmp(&a.matching_percentage));
}

// ---------------------------------------------------------------------------
// AnalysisResult
// ---------------------------------------------------------------------------

/// The full analysis payload returned by the relay in `analyze` mode.
/// Field names are camelCase on the wire to match the upstream contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub quality_score: u8,
    pub quality_level: QualityLevel,
    pub recommended_story_points: u32,
    pub improvement_suggestions: Vec<Suggestion>,
    pub suggested_acceptance_criteria: Vec<Suggestion>,
    #[serde(default)]
    pub similar_historical_stories: Vec<SimilarStoryRef>,
}

impl AnalysisResult {
    /// Ticked improvement suggestions and ticked acceptance criteria
    /// combined, in that order. This is the payload for `apply_suggestions`.
    pub fn ticked_suggestions(&self) -> Vec<Suggestion> {
        let mut out = ticked(&self.improvement_suggestions);
        out.extend(ticked(&self.suggested_acceptance_criteria));
        out
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
