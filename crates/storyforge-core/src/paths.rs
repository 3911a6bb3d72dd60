use crate::error::{Result, StoryforgeError};
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

// ---------------------------------------------------------------------------
// Directory constants
// ---------------------------------------------------------------------------

pub const STORYFORGE_DIR: &str = ".storyforge";
pub const STORIES_DIR: &str = ".storyforge/stories";

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

pub fn storyforge_dir(root: &Path) -> PathBuf {
    root.join(STORYFORGE_DIR)
}

pub fn stories_dir(root: &Path) -> PathBuf {
    root.join(STORIES_DIR)
}

pub fn story_file(root: &Path, id: &str) -> PathBuf {
    stories_dir(root).join(format!("{id}.yaml"))
}

// ---------------------------------------------------------------------------
// Id validation
// ---------------------------------------------------------------------------

static ID_RE: OnceLock<Regex> = OnceLock::new();

fn id_re() -> &'static Regex {
    ID_RE.get_or_init(|| Regex::new(r"^[a-z0-9][a-z0-9\-]*[a-z0-9]$|^[a-z0-9]$").unwrap())
}

/// Story ids double as filenames, so they are restricted to the same
/// lowercase-alphanumeric-with-hyphens shape as generated UUIDs.
pub fn validate_id(id: &str) -> Result<()> {
    if id.is_empty() || id.len() > 64 || !id_re().is_match(id) {
        return Err(StoryforgeError::InvalidId(id.to_string()));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_ids() {
        for id in ["us-login", "a", "6f9619ff-8b86-d011-b42d-00c04fc964ff", "x1"] {
            validate_id(id).unwrap_or_else(|_| panic!("expected valid: {id}"));
        }
    }

    #[test]
    fn invalid_ids() {
        for id in [
            "",
            "-starts-with-dash",
            "ends-with-dash-",
            "has spaces",
            "UPPER",
            "a_b",
            "../escape",
        ] {
            assert!(validate_id(id).is_err(), "expected invalid: {id}");
        }
    }

    #[test]
    fn path_helpers() {
        let root = Path::new("/tmp/proj");
        assert_eq!(
            stories_dir(root),
            PathBuf::from("/tmp/proj/.storyforge/stories")
        );
        assert_eq!(
            story_file(root, "us-login"),
            PathBuf::from("/tmp/proj/.storyforge/stories/us-login.yaml")
        );
    }
}
