use anyhow::Context;
use std::path::Path;
use storyforge_core::{io, paths};

pub fn run(root: &Path) -> anyhow::Result<()> {
    println!("Initializing storyforge in: {}", root.display());

    for dir in [paths::STORYFORGE_DIR, paths::STORIES_DIR] {
        let p = root.join(dir);
        if p.exists() {
            println!("  exists:  {dir}");
        } else {
            io::ensure_dir(&p).with_context(|| format!("failed to create {}", p.display()))?;
            println!("  created: {dir}");
        }
    }

    println!("Done. Add stories with `storyforge story create`.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn init_creates_stories_dir() {
        let dir = TempDir::new().unwrap();
        run(dir.path()).unwrap();
        assert!(dir.path().join(".storyforge/stories").is_dir());
    }

    #[test]
    fn init_is_idempotent() {
        let dir = TempDir::new().unwrap();
        run(dir.path()).unwrap();
        run(dir.path()).unwrap();
        assert!(dir.path().join(".storyforge/stories").is_dir());
    }
}
