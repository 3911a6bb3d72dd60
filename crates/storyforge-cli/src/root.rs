use std::path::{Path, PathBuf};

/// Resolve the project root.
///
/// An explicit `--root` / `STORYFORGE_ROOT` value wins. Otherwise the
/// nearest ancestor of the current directory containing `.storyforge/` is
/// used, falling back to the nearest ancestor containing `.git/`, then to
/// the current directory itself.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    match explicit {
        Some(p) => p.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
            resolve_from(&cwd)
        }
    }
}

fn resolve_from(start: &Path) -> PathBuf {
    let mut git_root = None;
    for dir in start.ancestors() {
        if dir.join(".storyforge").is_dir() {
            return dir.to_path_buf();
        }
        if git_root.is_none() && dir.join(".git").is_dir() {
            git_root = Some(dir.to_path_buf());
        }
    }
    git_root.unwrap_or_else(|| start.to_path_buf())
}
