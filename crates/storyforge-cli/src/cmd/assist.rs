use crate::output::print_json;
use anyhow::{anyhow, Result};
use clap::Subcommand;
use std::path::Path;
use storyforge_core::panel::{AssistPanel, PanelEffect};
use storyforge_core::relay::AssistRequest;
use storyforge_core::types::PanelMode;
use storyforge_core::story::Story;
use storyforge_core::suggestion::AnalysisResult;

// ---------------------------------------------------------------------------
// Subcommand definition
// ---------------------------------------------------------------------------

#[derive(Subcommand, Debug)]
pub enum AssistSubcommand {
    /// Analyze a story's quality and store the suggested criteria and points
    Analyze {
        id: String,
        #[arg(long)]
        model: Option<String>,
        /// Relay server base URL
        #[arg(long, default_value = "http://localhost:2718")]
        server: String,
    },
    /// Rewrite a story's wording without changing its scope
    Improve {
        id: String,
        /// Write the improved text back without showing the comparison
        #[arg(long)]
        accept: bool,
        #[arg(long)]
        model: Option<String>,
        #[arg(long, default_value = "http://localhost:2718")]
        server: String,
    },
    /// Analyze, then rewrite the story applying the ticked suggestions
    Apply {
        id: String,
        /// Write the rewritten text back without showing the comparison
        #[arg(long)]
        accept: bool,
        #[arg(long)]
        model: Option<String>,
        #[arg(long, default_value = "http://localhost:2718")]
        server: String,
    },
    /// Generate a complete story from rough notes
    Create {
        notes: String,
        /// Save the generated story under this id
        #[arg(long)]
        id: Option<String>,
        #[arg(long)]
        model: Option<String>,
        #[arg(long, default_value = "http://localhost:2718")]
        server: String,
    },
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcommand: AssistSubcommand, json: bool) -> Result<()> {
    match subcommand {
        AssistSubcommand::Analyze { id, model, server } => {
            run_analyze(root, &id, model.as_deref(), &server, json)
        }
        AssistSubcommand::Improve {
            id,
            accept,
            model,
            server,
        } => run_improve(root, &id, accept, model.as_deref(), &server),
        AssistSubcommand::Apply {
            id,
            accept,
            model,
            server,
        } => run_apply(root, &id, accept, model.as_deref(), &server),
        AssistSubcommand::Create {
            notes,
            id,
            model,
            server,
        } => run_create(root, &notes, id.as_deref(), model.as_deref(), &server, json),
    }
}

// ---------------------------------------------------------------------------
// analyze
// ---------------------------------------------------------------------------

fn run_analyze(root: &Path, id: &str, model: Option<&str>, server: &str, json: bool) -> Result<()> {
    let mut story = Story::load(root, id)?;
    let mut panel = AssistPanel::new(story.text.clone(), model.unwrap_or_default());

    let request = panel.begin_operation(PanelMode::Analyze)?;
    let reply = post_assist(server, &request)?;
    let result: AnalysisResult = serde_json::from_value(reply.clone())?;

    let effects = panel.complete_analyze(result.clone())?;
    apply_effects(&mut story, effects);
    story.save(root)?;

    if json {
        return print_json(&reply);
    }

    println!(
        "Quality: {}/100 ({})  —  recommended points: {}",
        result.quality_score, result.quality_level, result.recommended_story_points
    );
    if !result.improvement_suggestions.is_empty() {
        println!("\nSuggestions:");
        for s in &result.improvement_suggestions {
            let mark = if s.ticked { "x" } else { " " };
            println!("  [{mark}] {}", s.text);
        }
    }
    if !result.suggested_acceptance_criteria.is_empty() {
        println!("\nAcceptance criteria (saved to story):");
        for c in &result.suggested_acceptance_criteria {
            let mark = if c.ticked { "x" } else { " " };
            println!("  [{mark}] {}", c.text);
        }
    }
    if !result.similar_historical_stories.is_empty() {
        println!("\nSimilar stories:");
        for s in &result.similar_historical_stories {
            println!("  {}% {} ({})", s.matching_percentage, s.title, s.status);
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// improve
// ---------------------------------------------------------------------------

fn run_improve(root: &Path, id: &str, accept: bool, model: Option<&str>, server: &str) -> Result<()> {
    let mut story = Story::load(root, id)?;
    let mut panel = AssistPanel::new(story.text.clone(), model.unwrap_or_default());

    let request = panel.begin_operation(PanelMode::ReviewAndImprove)?;
    let reply = post_assist(server, &request)?;
    let new_story = new_story_text(&reply)?;
    panel.complete_rewrite(PanelMode::ReviewAndImprove, new_story)?;

    finish_comparison(root, &mut story, &mut panel, PanelMode::ReviewAndImprove, accept)
}

// ---------------------------------------------------------------------------
// apply (analyze + apply_suggestions)
// ---------------------------------------------------------------------------

fn run_apply(root: &Path, id: &str, accept: bool, model: Option<&str>, server: &str) -> Result<()> {
    let mut story = Story::load(root, id)?;
    let mut panel = AssistPanel::new(story.text.clone(), model.unwrap_or_default());

    let request = panel.begin_operation(PanelMode::Analyze)?;
    let reply = post_assist(server, &request)?;
    let result: AnalysisResult = serde_json::from_value(reply)?;
    let effects = panel.complete_analyze(result)?;
    apply_effects(&mut story, effects);

    if !panel.can_apply_suggestions() {
        story.save(root)?;
        println!("Story is already rated Excellent; nothing to apply.");
        return Ok(());
    }

    let request = panel.begin_apply_suggestions()?;
    let reply = post_assist(server, &request)?;
    let new_story = new_story_text(&reply)?;
    panel.complete_rewrite(PanelMode::Analyze, new_story)?;

    finish_comparison(root, &mut story, &mut panel, PanelMode::Analyze, accept)
}

// ---------------------------------------------------------------------------
// create
// ---------------------------------------------------------------------------

fn run_create(
    root: &Path,
    notes: &str,
    id: Option<&str>,
    model: Option<&str>,
    server: &str,
    json: bool,
) -> Result<()> {
    let mut panel = AssistPanel::new(notes, model.unwrap_or_default());

    let request = panel.begin_operation(PanelMode::CreateFromScratch)?;
    let reply = post_assist(server, &request)?;
    let title = reply["title"]
        .as_str()
        .ok_or_else(|| anyhow!("relay reply is missing 'title'"))?
        .to_string();
    let description = reply["description"]
        .as_str()
        .ok_or_else(|| anyhow!("relay reply is missing 'description'"))?
        .to_string();
    panel.complete_create(title.clone(), description.clone())?;

    match id {
        Some(id) => {
            panel.accept(PanelMode::CreateFromScratch)?;
            let story = Story::create(root, id, title, description)?;
            if json {
                return print_json(&story);
            }
            println!("Created story '{}' — {}", story.id, story.title);
        }
        None => {
            let display = panel
                .mode_result(PanelMode::CreateFromScratch)
                .generated_display()
                .unwrap_or_default();
            println!("{display}");
            println!("\n(not saved; pass --id <id> to save)");
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Send one relay request and return the normalized JSON reply. Server-side
/// errors carry an `error` field; surface it as the failure message.
fn post_assist(server: &str, request: &AssistRequest) -> Result<serde_json::Value> {
    let url = format!("{}/api/assist", server.trim_end_matches('/'));
    match ureq::post(&url).send_json(serde_json::to_value(request)?) {
        Ok(response) => Ok(response.into_json()?),
        Err(ureq::Error::Status(code, response)) => {
            let body: serde_json::Value = response
                .into_json()
                .unwrap_or(serde_json::Value::Null);
            let message = body["error"].as_str().unwrap_or("unknown error").to_string();
            Err(anyhow!("assist failed ({code}): {message}"))
        }
        Err(e) => Err(anyhow!("could not reach {url}: {e}\nIs `storyforge serve` running?")),
    }
}

fn new_story_text(reply: &serde_json::Value) -> Result<String> {
    reply["newStory"]
        .as_str()
        .map(str::to_string)
        .ok_or_else(|| anyhow!("relay reply is missing 'newStory'"))
}

fn apply_effects(story: &mut Story, effects: Vec<PanelEffect>) {
    for effect in effects {
        match effect {
            PanelEffect::StoryUpdate { criteria, .. } => story.set_acceptance_criteria(criteria),
            PanelEffect::StoryPointsUpdate { points } => story.set_story_points(points),
            PanelEffect::AcceptChanges { text, title } => story.accept_changes(text, title),
            PanelEffect::DeclineChanges { original } => story.decline_changes(original),
            PanelEffect::Notify { message } => eprintln!("{message}"),
        }
    }
}

/// Show the staged comparison, or write it straight back with `--accept`.
fn finish_comparison(
    root: &Path,
    story: &mut Story,
    panel: &mut AssistPanel,
    mode: PanelMode,
    accept: bool,
) -> Result<()> {
    if accept {
        let effect = panel.accept(mode)?;
        apply_effects(story, vec![effect]);
        story.save(root)?;
        println!("Updated story '{}':\n\n{}", story.id, story.text);
        return Ok(());
    }

    let slot = panel.mode_result(mode);
    println!("--- current ---------------------------------------------------");
    println!("{}", slot.original_for_comparison.as_deref().unwrap_or(""));
    println!("--- suggested -------------------------------------------------");
    println!("{}", slot.generated_display().unwrap_or_default());
    println!("----------------------------------------------------------------");
    println!("(story unchanged; rerun with --accept to apply)");
    // The analyze side effects (criteria, points) are still worth keeping.
    story.save(root)?;
    Ok(())
}
