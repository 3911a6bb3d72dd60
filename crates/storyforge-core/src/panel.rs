//! Assist-panel state machine.
//!
//! The panel mediates between one external "current story text + acceptance
//! criteria" owner and the prompt relay, staging AI output for explicit
//! review before the owner's state is touched. It is sans-IO: callers feed
//! it events (`begin_*` / `complete_*` / `fail_operation` / `accept` /
//! `decline` / `toggle_suggestion`) and apply the [`PanelEffect`]s it emits.
//!
//! Per mode, independently: Idle → Loading → Result-Ready (analyze) or
//! Comparison → Idle. Results are retained per mode, so switching the
//! displayed mode never discards another mode's staged comparison, and a
//! late completion lands in the slot of the mode it was issued under.

use crate::error::{Result, StoryforgeError};
use crate::relay::AssistRequest;
use crate::suggestion::{AnalysisResult, Suggestion, SuggestionKind};
use crate::types::{OperationMode, PanelMode, QualityLevel};

// ---------------------------------------------------------------------------
// ModeResult
// ---------------------------------------------------------------------------

/// Staged output for one panel mode.
#[derive(Debug, Clone, Default)]
pub struct ModeResult {
    /// Story text captured when the operation was executed. Restored on
    /// decline; `None` only before any operation ran in this mode.
    pub original_for_comparison: Option<String>,
    pub generated_title: Option<String>,
    pub generated_description: Option<String>,
    pub improved_text: Option<String>,
}

impl ModeResult {
    fn clear(&mut self) {
        *self = ModeResult::default();
    }

    /// The generated text a comparison would merge on accept.
    pub fn generated_text(&self) -> Option<&str> {
        self.improved_text
            .as_deref()
            .or(self.generated_description.as_deref())
    }

    /// A comparison is shown iff both the original and a generated text are
    /// staged.
    pub fn has_comparison(&self) -> bool {
        self.original_for_comparison.is_some() && self.generated_text().is_some()
    }

    /// Render the generated side of the comparison. Create-from-scratch
    /// results show the title as a heading above the description.
    pub fn generated_display(&self) -> Option<String> {
        if let Some(text) = &self.improved_text {
            return Some(text.clone());
        }
        match (&self.generated_title, &self.generated_description) {
            (Some(title), Some(description)) => Some(format!("## {title}\n\n{description}")),
            (None, Some(description)) => Some(description.clone()),
            _ => None,
        }
    }
}

// ---------------------------------------------------------------------------
// PanelEffect
// ---------------------------------------------------------------------------

/// Outbound instructions to the embedding view. The panel never mutates
/// external story state directly.
#[derive(Debug, Clone, PartialEq)]
pub enum PanelEffect {
    /// Replace the story's acceptance-criteria list (text is the current
    /// story text, unchanged by this effect).
    StoryUpdate {
        text: String,
        criteria: Vec<Suggestion>,
    },
    StoryPointsUpdate {
        points: u32,
    },
    /// Merge the generated text (and title, when present) into the story.
    AcceptChanges {
        text: String,
        title: Option<String>,
    },
    /// Restore the story text to the captured original, or clear it when no
    /// meaningful original existed.
    DeclineChanges {
        original: Option<String>,
    },
    /// Surface a failure to the user. State is left unchanged.
    Notify {
        message: String,
    },
}

// ---------------------------------------------------------------------------
// AssistPanel
// ---------------------------------------------------------------------------

pub struct AssistPanel {
    story_text: String,
    llm_model: String,
    /// Current analysis, at most one at a time. Cleared whenever the story
    /// text changes (explicit invalidation, not a text heuristic).
    analysis: Option<AnalysisResult>,
    loading: [bool; 3],
    results: [ModeResult; 3],
}

impl AssistPanel {
    pub fn new(story_text: impl Into<String>, llm_model: impl Into<String>) -> Self {
        Self {
            story_text: story_text.into(),
            llm_model: llm_model.into(),
            analysis: None,
            loading: [false; 3],
            results: Default::default(),
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    pub fn story_text(&self) -> &str {
        &self.story_text
    }

    pub fn analysis(&self) -> Option<&AnalysisResult> {
        self.analysis.as_ref()
    }

    pub fn is_loading(&self, mode: PanelMode) -> bool {
        self.loading[mode.index()]
    }

    pub fn mode_result(&self, mode: PanelMode) -> &ModeResult {
        &self.results[mode.index()]
    }

    /// An "Apply Suggestions" action is offered only while an analysis is
    /// staged and the story is not already rated Excellent.
    pub fn can_apply_suggestions(&self) -> bool {
        self.analysis
            .as_ref()
            .is_some_and(|a| a.quality_level != QualityLevel::Excellent)
    }

    // -----------------------------------------------------------------------
    // External story state
    // -----------------------------------------------------------------------

    /// Sync the story text from the owning view. Any staged analysis is
    /// invalidated: it described the old text.
    pub fn set_story_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text != self.story_text {
            self.story_text = text;
            self.analysis = None;
        }
    }

    pub fn set_llm_model(&mut self, model: impl Into<String>) {
        self.llm_model = model.into();
    }

    // -----------------------------------------------------------------------
    // Operations
    // -----------------------------------------------------------------------

    /// Start an operation in `mode`. Validates the story text, snapshots the
    /// pre-operation value for decline, clears the mode's previous result,
    /// and returns the relay request to send. Re-entry while this mode is
    /// already Loading is rejected.
    pub fn begin_operation(&mut self, mode: PanelMode) -> Result<AssistRequest> {
        if self.is_loading(mode) {
            return Err(StoryforgeError::OperationInFlight(mode.to_string()));
        }
        if self.story_text.trim().is_empty() {
            return Err(StoryforgeError::EmptyStory);
        }

        let slot = &mut self.results[mode.index()];
        slot.clear();
        if mode != PanelMode::Analyze {
            slot.original_for_comparison = Some(self.story_text.clone());
        }
        self.loading[mode.index()] = true;

        Ok(AssistRequest {
            user_story: self.story_text.clone(),
            llm_model: self.llm_model.clone(),
            operation_mode: mode.operation(),
            suggestions: Vec::new(),
        })
    }

    /// Stage a completed analysis. Emits the criteria push and the
    /// recommended story points for the owning view.
    pub fn complete_analyze(&mut self, result: AnalysisResult) -> Result<Vec<PanelEffect>> {
        self.finish(PanelMode::Analyze)?;

        let effects = vec![
            PanelEffect::StoryUpdate {
                text: self.story_text.clone(),
                criteria: result.suggested_acceptance_criteria.clone(),
            },
            PanelEffect::StoryPointsUpdate {
                points: result.recommended_story_points,
            },
        ];
        self.analysis = Some(result);
        Ok(effects)
    }

    /// Issue the follow-up `apply_suggestions` call from a staged analysis,
    /// carrying the ticked improvement suggestions and ticked acceptance
    /// criteria combined.
    pub fn begin_apply_suggestions(&mut self) -> Result<AssistRequest> {
        if self.is_loading(PanelMode::Analyze) {
            return Err(StoryforgeError::OperationInFlight(
                PanelMode::Analyze.to_string(),
            ));
        }
        let analysis = self.analysis.as_ref().ok_or(StoryforgeError::NoAnalysisStaged)?;
        let suggestions = analysis.ticked_suggestions();
        if suggestions.is_empty() {
            return Err(StoryforgeError::NoSuggestionsTicked);
        }

        let slot = &mut self.results[PanelMode::Analyze.index()];
        slot.clear();
        slot.original_for_comparison = Some(self.story_text.clone());
        self.loading[PanelMode::Analyze.index()] = true;

        Ok(AssistRequest {
            user_story: self.story_text.clone(),
            llm_model: self.llm_model.clone(),
            operation_mode: OperationMode::ApplySuggestions,
            suggestions,
        })
    }

    /// Stage a rewritten story (apply-suggestions or review-and-improve)
    /// for comparison. The analysis that produced an applied rewrite is
    /// spent: re-analysis targets the new text.
    pub fn complete_rewrite(&mut self, mode: PanelMode, new_story: impl Into<String>) -> Result<()> {
        self.finish(mode)?;
        self.results[mode.index()].improved_text = Some(new_story.into());
        if mode == PanelMode::Analyze {
            self.analysis = None;
        }
        Ok(())
    }

    /// Stage a generated title + description (create-from-scratch) for
    /// comparison against the notes the user started from.
    pub fn complete_create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        self.finish(PanelMode::CreateFromScratch)?;
        let slot = &mut self.results[PanelMode::CreateFromScratch.index()];
        slot.generated_title = Some(title.into());
        slot.generated_description = Some(description.into());
        Ok(())
    }

    /// Record a relay failure: clears Loading, discards the half-prepared
    /// slot so nothing is partially staged, and surfaces a notification.
    pub fn fail_operation(&mut self, mode: PanelMode, message: impl Into<String>) -> Result<PanelEffect> {
        self.finish(mode)?;
        self.results[mode.index()].clear();
        Ok(PanelEffect::Notify {
            message: message.into(),
        })
    }

    /// Accept the staged comparison: the generated text (and title, if any)
    /// is merged into the external story, and the mode returns to Idle.
    pub fn accept(&mut self, mode: PanelMode) -> Result<PanelEffect> {
        let slot = &self.results[mode.index()];
        if !slot.has_comparison() {
            return Err(StoryforgeError::NoResultStaged(mode.to_string()));
        }
        let text = slot
            .generated_text()
            .map(str::to_string)
            .unwrap_or_default();
        let title = slot.generated_title.clone();

        self.story_text = text.clone();
        self.analysis = None;
        self.results[mode.index()].clear();

        Ok(PanelEffect::AcceptChanges { text, title })
    }

    /// Decline the staged comparison: the external story is restored to the
    /// pre-operation snapshot (or cleared if none existed), and the mode
    /// returns to Idle.
    pub fn decline(&mut self, mode: PanelMode) -> Result<PanelEffect> {
        let slot = &self.results[mode.index()];
        if !slot.has_comparison() {
            return Err(StoryforgeError::NoResultStaged(mode.to_string()));
        }
        let original = slot.original_for_comparison.clone();

        self.story_text = original.clone().unwrap_or_default();
        self.results[mode.index()].clear();

        Ok(PanelEffect::DeclineChanges { original })
    }

    /// Flip a suggestion's tick state. Acceptance-criteria toggles propagate
    /// the updated list to the owning view; improvement toggles are internal.
    pub fn toggle_suggestion(
        &mut self,
        kind: SuggestionKind,
        id: &str,
    ) -> Result<Option<PanelEffect>> {
        let analysis = self.analysis.as_mut().ok_or(StoryforgeError::NoAnalysisStaged)?;
        let list = match kind {
            SuggestionKind::Improvement => &mut analysis.improvement_suggestions,
            SuggestionKind::Acceptance => &mut analysis.suggested_acceptance_criteria,
        };
        let suggestion = list
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| StoryforgeError::SuggestionNotFound(id.to_string()))?;
        suggestion.ticked = !suggestion.ticked;

        match kind {
            SuggestionKind::Improvement => Ok(None),
            SuggestionKind::Acceptance => Ok(Some(PanelEffect::StoryUpdate {
                text: self.story_text.clone(),
                criteria: analysis.suggested_acceptance_criteria.clone(),
            })),
        }
    }

    // -----------------------------------------------------------------------
    // Internal
    // -----------------------------------------------------------------------

    fn finish(&mut self, mode: PanelMode) -> Result<()> {
        if !self.is_loading(mode) {
            return Err(StoryforgeError::NoOperationInFlight(mode.to_string()));
        }
        self.loading[mode.index()] = false;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::suggestion::SimilarStoryRef;

    fn suggestion(id: &str, is_ticked: bool) -> Suggestion {
        Suggestion {
            id: id.to_string(),
            text: format!("suggestion {id}"),
            example: None,
            ticked: is_ticked,
            kind: None,
        }
    }

    fn analysis(level: QualityLevel) -> AnalysisResult {
        AnalysisResult {
            quality_score: 40,
            quality_level: level,
            recommended_story_points: 5,
            improvement_suggestions: vec![suggestion("i1", true), suggestion("i2", true)],
            suggested_acceptance_criteria: vec![suggestion("c1", true), suggestion("c2", false)],
            similar_historical_stories: vec![SimilarStoryRef {
                id: "us-9".into(),
                title: "Login".into(),
                status: "done".into(),
                feature_id: "f-1".into(),
                feature_name: "Auth".into(),
                matching_percentage: 70,
            }],
        }
    }

    #[test]
    fn begin_rejects_empty_story() {
        let mut panel = AssistPanel::new("   \n", "gpt-4o");
        let err = panel.begin_operation(PanelMode::Analyze).unwrap_err();
        assert!(matches!(err, StoryforgeError::EmptyStory));
        assert!(!panel.is_loading(PanelMode::Analyze));
    }

    #[test]
    fn begin_rejects_reentry_while_loading() {
        let mut panel = AssistPanel::new("As a user I want to log in", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        let err = panel.begin_operation(PanelMode::Analyze).unwrap_err();
        assert!(matches!(err, StoryforgeError::OperationInFlight(_)));
    }

    #[test]
    fn loading_is_independent_per_mode() {
        let mut panel = AssistPanel::new("As a user I want to log in", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        // A different mode can still execute.
        panel.begin_operation(PanelMode::ReviewAndImprove).unwrap();
        assert!(panel.is_loading(PanelMode::Analyze));
        assert!(panel.is_loading(PanelMode::ReviewAndImprove));
        assert!(!panel.is_loading(PanelMode::CreateFromScratch));
    }

    #[test]
    fn begin_builds_relay_request_for_mode() {
        let mut panel = AssistPanel::new("rough notes about login", "gemini-2.5-flash");
        let req = panel.begin_operation(PanelMode::CreateFromScratch).unwrap();
        assert_eq!(req.operation_mode, OperationMode::CreateStoryFromScratch);
        assert_eq!(req.user_story, "rough notes about login");
        assert_eq!(req.llm_model, "gemini-2.5-flash");
        assert!(req.suggestions.is_empty());
    }

    // Scenario: analyze with a "Needs Improvements" result offers Apply
    // Suggestions; toggling one suggestion off sends exactly the remaining
    // ticked ones.
    #[test]
    fn analyze_then_apply_sends_ticked_suggestions() {
        let mut panel = AssistPanel::new("As a user I want to log in", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        let effects = panel
            .complete_analyze(analysis(QualityLevel::NeedsImprovements))
            .unwrap();

        assert!(panel.can_apply_suggestions());
        assert!(matches!(effects[0], PanelEffect::StoryUpdate { .. }));
        assert_eq!(
            effects[1],
            PanelEffect::StoryPointsUpdate { points: 5 }
        );

        // Untick one improvement suggestion.
        panel
            .toggle_suggestion(SuggestionKind::Improvement, "i2")
            .unwrap();

        let req = panel.begin_apply_suggestions().unwrap();
        assert_eq!(req.operation_mode, OperationMode::ApplySuggestions);
        let ids: Vec<_> = req.suggestions.iter().map(|s| s.id.as_str()).collect();
        // i2 was unticked, c2 arrived unticked; ticked criteria are included.
        assert_eq!(ids, vec!["i1", "c1"]);
    }

    #[test]
    fn excellent_analysis_offers_no_apply() {
        let mut panel = AssistPanel::new("As a user I want to log in", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        panel.complete_analyze(analysis(QualityLevel::Excellent)).unwrap();
        assert!(!panel.can_apply_suggestions());
    }

    #[test]
    fn apply_with_nothing_ticked_is_rejected() {
        let mut panel = AssistPanel::new("story", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        let mut result = analysis(QualityLevel::Poor);
        for s in result
            .improvement_suggestions
            .iter_mut()
            .chain(result.suggested_acceptance_criteria.iter_mut())
        {
            s.ticked = false;
        }
        panel.complete_analyze(result).unwrap();
        let err = panel.begin_apply_suggestions().unwrap_err();
        assert!(matches!(err, StoryforgeError::NoSuggestionsTicked));
    }

    #[test]
    fn apply_then_accept_merges_generated_text() {
        let mut panel = AssistPanel::new("original story", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        panel
            .complete_analyze(analysis(QualityLevel::NeedsImprovements))
            .unwrap();
        panel.begin_apply_suggestions().unwrap();
        panel
            .complete_rewrite(PanelMode::Analyze, "improved story")
            .unwrap();

        let slot = panel.mode_result(PanelMode::Analyze);
        assert!(slot.has_comparison());
        assert_eq!(slot.original_for_comparison.as_deref(), Some("original story"));

        let effect = panel.accept(PanelMode::Analyze).unwrap();
        assert_eq!(
            effect,
            PanelEffect::AcceptChanges {
                text: "improved story".into(),
                title: None,
            }
        );
        assert_eq!(panel.story_text(), "improved story");
        // Back to Idle: nothing staged, analysis spent.
        assert!(!panel.mode_result(PanelMode::Analyze).has_comparison());
        assert!(panel.analysis().is_none());
    }

    // Scenario: review_and_improve stages the rewritten text; Accept sets
    // the external text to exactly that string.
    #[test]
    fn review_and_improve_round_trip() {
        let mut panel = AssistPanel::new("As a user I want to log in", "gpt-4o");
        panel.begin_operation(PanelMode::ReviewAndImprove).unwrap();
        panel
            .complete_rewrite(PanelMode::ReviewAndImprove, "As a user, I want to log in.")
            .unwrap();

        let effect = panel.accept(PanelMode::ReviewAndImprove).unwrap();
        assert_eq!(
            effect,
            PanelEffect::AcceptChanges {
                text: "As a user, I want to log in.".into(),
                title: None,
            }
        );
        assert_eq!(panel.story_text(), "As a user, I want to log in.");
    }

    #[test]
    fn decline_restores_pre_operation_text() {
        let mut panel = AssistPanel::new("the original", "gpt-4o");
        panel.begin_operation(PanelMode::ReviewAndImprove).unwrap();
        panel
            .complete_rewrite(PanelMode::ReviewAndImprove, "a rewrite")
            .unwrap();

        let effect = panel.decline(PanelMode::ReviewAndImprove).unwrap();
        assert_eq!(
            effect,
            PanelEffect::DeclineChanges {
                original: Some("the original".into()),
            }
        );
        assert_eq!(panel.story_text(), "the original");
        assert!(!panel.mode_result(PanelMode::ReviewAndImprove).has_comparison());
    }

    // Scenario: create_story_from_scratch shows notes vs `## title` +
    // description.
    #[test]
    fn create_from_scratch_comparison_columns() {
        let mut panel = AssistPanel::new("rough login notes", "gpt-4o");
        panel.begin_operation(PanelMode::CreateFromScratch).unwrap();
        panel
            .complete_create("Login", "Details: … Acceptance Criteria: …")
            .unwrap();

        let slot = panel.mode_result(PanelMode::CreateFromScratch);
        assert_eq!(slot.original_for_comparison.as_deref(), Some("rough login notes"));
        assert_eq!(
            slot.generated_display().unwrap(),
            "## Login\n\nDetails: … Acceptance Criteria: …"
        );

        let effect = panel.accept(PanelMode::CreateFromScratch).unwrap();
        assert_eq!(
            effect,
            PanelEffect::AcceptChanges {
                text: "Details: … Acceptance Criteria: …".into(),
                title: Some("Login".into()),
            }
        );
    }

    #[test]
    fn results_are_retained_per_mode() {
        let mut panel = AssistPanel::new("story text", "gpt-4o");
        panel.begin_operation(PanelMode::ReviewAndImprove).unwrap();
        panel
            .complete_rewrite(PanelMode::ReviewAndImprove, "polished")
            .unwrap();

        // Running create-from-scratch must not disturb the staged rewrite.
        panel.begin_operation(PanelMode::CreateFromScratch).unwrap();
        panel.complete_create("T", "D").unwrap();

        assert!(panel.mode_result(PanelMode::ReviewAndImprove).has_comparison());
        assert!(panel.mode_result(PanelMode::CreateFromScratch).has_comparison());
    }

    #[test]
    fn fail_operation_clears_loading_and_stages_nothing() {
        let mut panel = AssistPanel::new("story text", "gpt-4o");
        panel.begin_operation(PanelMode::ReviewAndImprove).unwrap();
        let effect = panel
            .fail_operation(PanelMode::ReviewAndImprove, "LLM API error (500): boom")
            .unwrap();
        assert!(matches!(effect, PanelEffect::Notify { .. }));
        assert!(!panel.is_loading(PanelMode::ReviewAndImprove));
        assert!(!panel.mode_result(PanelMode::ReviewAndImprove).has_comparison());
        // Idle again: a fresh operation is allowed.
        panel.begin_operation(PanelMode::ReviewAndImprove).unwrap();
    }

    #[test]
    fn completion_without_operation_is_rejected() {
        let mut panel = AssistPanel::new("story text", "gpt-4o");
        let err = panel
            .complete_rewrite(PanelMode::ReviewAndImprove, "text")
            .unwrap_err();
        assert!(matches!(err, StoryforgeError::NoOperationInFlight(_)));
    }

    #[test]
    fn accept_without_comparison_is_rejected() {
        let mut panel = AssistPanel::new("story text", "gpt-4o");
        let err = panel.accept(PanelMode::Analyze).unwrap_err();
        assert!(matches!(err, StoryforgeError::NoResultStaged(_)));
    }

    #[test]
    fn text_change_invalidates_staged_analysis() {
        let mut panel = AssistPanel::new("story text", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        panel.complete_analyze(analysis(QualityLevel::Good)).unwrap();
        assert!(panel.analysis().is_some());

        panel.set_story_text("story text, edited");
        assert!(panel.analysis().is_none());

        // Setting the identical text is not a change.
        panel.begin_operation(PanelMode::Analyze).unwrap();
        panel.complete_analyze(analysis(QualityLevel::Good)).unwrap();
        panel.set_story_text("story text, edited");
        assert!(panel.analysis().is_some());
    }

    #[test]
    fn acceptance_toggle_emits_updated_criteria() {
        let mut panel = AssistPanel::new("story text", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        panel
            .complete_analyze(analysis(QualityLevel::NeedsImprovements))
            .unwrap();

        let effect = panel
            .toggle_suggestion(SuggestionKind::Acceptance, "c2")
            .unwrap()
            .expect("acceptance toggle propagates");
        match effect {
            PanelEffect::StoryUpdate { text, criteria } => {
                assert_eq!(text, "story text");
                let c2 = criteria.iter().find(|s| s.id == "c2").unwrap();
                assert!(c2.ticked, "c2 arrived unticked and was flipped on");
            }
            other => panic!("unexpected effect: {other:?}"),
        }

        // Improvement toggles stay internal.
        let none = panel
            .toggle_suggestion(SuggestionKind::Improvement, "i1")
            .unwrap();
        assert!(none.is_none());
    }

    #[test]
    fn toggle_unknown_id_is_rejected() {
        let mut panel = AssistPanel::new("story text", "gpt-4o");
        panel.begin_operation(PanelMode::Analyze).unwrap();
        panel
            .complete_analyze(analysis(QualityLevel::NeedsImprovements))
            .unwrap();
        let err = panel
            .toggle_suggestion(SuggestionKind::Improvement, "nope")
            .unwrap_err();
        assert!(matches!(err, StoryforgeError::SuggestionNotFound(_)));
    }

    #[test]
    fn late_completion_lands_in_its_own_mode() {
        let mut panel = AssistPanel::new("story text", "gpt-4o");
        panel.begin_operation(PanelMode::ReviewAndImprove).unwrap();
        // The user switches away and runs analyze; the earlier request then
        // completes. Its result must land in the review slot.
        panel.begin_operation(PanelMode::Analyze).unwrap();
        panel
            .complete_rewrite(PanelMode::ReviewAndImprove, "late arrival")
            .unwrap();

        assert!(panel.mode_result(PanelMode::ReviewAndImprove).has_comparison());
        assert!(panel.is_loading(PanelMode::Analyze));
    }
}
