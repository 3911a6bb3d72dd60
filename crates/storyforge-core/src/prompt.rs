use crate::error::{Result, StoryforgeError};
use crate::suggestion::Suggestion;
use crate::types::OperationMode;

// ---------------------------------------------------------------------------
// Prompt building
// ---------------------------------------------------------------------------

const ANALYZE_SHAPE: &str = r#"{
  "qualityScore": number (0-100),
  "qualityLevel": string (one of "Poor", "Needs Improvements", "Good", "Excellent"),
  "recommendedStoryPoints": number,
  "improvementSuggestions": [{ "id": string, "text": string, "example": string, "ticked": boolean }],
  "suggestedAcceptanceCriteria": [{ "id": string, "text": string, "example": string, "ticked": boolean }],
  "similarHistoricalStories": [{ "id": string, "title": string, "status": string, "featureId": string, "featureName": string, "matchingPercentage": number }]
}"#;

/// Build the prompt sent upstream for the given operation.
///
/// `apply_suggestions` requires at least one suggestion; the other modes
/// ignore the list.
pub fn build(mode: OperationMode, user_story: &str, suggestions: &[Suggestion]) -> Result<String> {
    match mode {
        OperationMode::Analyze => Ok(analyze(user_story)),
        OperationMode::ApplySuggestions => {
            if suggestions.is_empty() {
                return Err(StoryforgeError::NoSuggestionsTicked);
            }
            apply_suggestions(user_story, suggestions)
        }
        OperationMode::ReviewAndImprove => Ok(review_and_improve(user_story)),
        OperationMode::CreateStoryFromScratch => Ok(create_from_scratch(user_story)),
    }
}

fn analyze(user_story: &str) -> String {
    format!(
        "Analyze the following user story for quality, provide improvement suggestions, \
         suggest acceptance criteria, and find similar historical stories. \
         Return the output as a JSON object with the following structure:\n{ANALYZE_SHAPE}\n\n\
         User Story: \"{user_story}\"\n\n\
         Ensure all 'id' fields are unique strings. For 'ticked', default to true for \
         suggestions/criteria that are generally good practices or directly applicable, \
         and false for more advanced or optional ones. For 'similarHistoricalStories', \
         generate 3 plausible stories with varying matching percentages."
    )
}

fn apply_suggestions(user_story: &str, suggestions: &[Suggestion]) -> Result<String> {
    let serialized = serde_json::to_string(suggestions)?;
    Ok(format!(
        "Given the original user story and a list of suggestions, rewrite the user story \
         to incorporate the suggestions. Return only the new user story text as a string.\n\
         Original User Story: \"{user_story}\"\n\
         Suggestions: {serialized}"
    ))
}

fn review_and_improve(user_story: &str) -> String {
    format!(
        "Review the following user story and improve its wording: fix grammar, tighten \
         phrasing, and clarify the role/goal/benefit structure. Do not change the scope \
         or add new requirements. Return only the improved user story text as a string.\n\
         User Story: \"{user_story}\""
    )
}

fn create_from_scratch(notes: &str) -> String {
    format!(
        "Create a complete user story from the following rough notes. Return the output \
         as a JSON object with the structure {{ \"title\": string, \"description\": string }}. \
         The description must be formatted text embedding a 'Details' section, a 'Scope' \
         section, and an 'Acceptance Criteria' checklist.\n\n\
         Notes: \"{notes}\""
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
