use crate::output::{print_json, story_table};
use anyhow::Result;
use clap::Subcommand;
use std::path::Path;
use std::str::FromStr;
use storyforge_core::story::Story;
use storyforge_core::types::StoryStatus;

// ---------------------------------------------------------------------------
// Subcommand definition
// ---------------------------------------------------------------------------

#[derive(Subcommand, Debug)]
pub enum StorySubcommand {
    /// List all stories
    List,
    /// Show a story in full
    Show { id: String },
    /// Create a new story
    Create {
        id: String,
        title: String,
        /// Story text (defaults to empty; fill it in later or via assist)
        #[arg(long, default_value = "")]
        text: String,
    },
    /// Update fields on a story
    Update {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        text: Option<String>,
        /// One of: draft, ready, in_progress, done
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        points: Option<u32>,
    },
    /// Delete a story
    Delete { id: String },
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcommand: StorySubcommand, json: bool) -> Result<()> {
    match subcommand {
        StorySubcommand::List => run_list(root, json),
        StorySubcommand::Show { id } => run_show(root, &id, json),
        StorySubcommand::Create { id, title, text } => run_create(root, &id, &title, &text, json),
        StorySubcommand::Update {
            id,
            title,
            text,
            status,
            points,
        } => run_update(root, &id, title, text, status.as_deref(), points, json),
        StorySubcommand::Delete { id } => run_delete(root, &id),
    }
}

fn run_list(root: &Path, json: bool) -> Result<()> {
    let stories = Story::list(root)?;

    if json {
        return print_json(&stories);
    }

    if stories.is_empty() {
        println!("No stories. Create one with `storyforge story create <id> <title>`.");
        return Ok(());
    }

    print!("{}", story_table(&stories));
    Ok(())
}

fn run_show(root: &Path, id: &str, json: bool) -> Result<()> {
    let story = Story::load(root, id)?;

    if json {
        return print_json(&story);
    }

    println!("{} — {} [{}]", story.id, story.title, story.status);
    if let Some(points) = story.story_points {
        println!("points: {points}");
    }
    println!("\n{}", story.text);
    if !story.acceptance_criteria.is_empty() {
        println!("\nAcceptance criteria:");
        for c in &story.acceptance_criteria {
            let mark = if c.ticked { "x" } else { " " };
            println!("  [{mark}] {}", c.text);
        }
    }
    Ok(())
}

fn run_create(root: &Path, id: &str, title: &str, text: &str, json: bool) -> Result<()> {
    let story = Story::create(root, id, title, text)?;
    if json {
        return print_json(&story);
    }
    println!("Created story '{}'", story.id);
    Ok(())
}

fn run_update(
    root: &Path,
    id: &str,
    title: Option<String>,
    text: Option<String>,
    status: Option<&str>,
    points: Option<u32>,
    json: bool,
) -> Result<()> {
    let mut story = Story::load(root, id)?;
    if let Some(t) = title {
        story.title = t;
    }
    if let Some(t) = text {
        story.text = t;
    }
    if let Some(s) = status {
        story.status = StoryStatus::from_str(s)?;
    }
    if let Some(p) = points {
        story.set_story_points(p);
    }
    story.touch();
    story.save(root)?;

    if json {
        return print_json(&story);
    }
    println!("Updated story '{}'", story.id);
    Ok(())
}

fn run_delete(root: &Path, id: &str) -> Result<()> {
    Story::delete(root, id)?;
    println!("Deleted story '{id}'");
    Ok(())
}
