//! Directory scanning: which subdirectories are categories, and which
//! markdown files belong to each.

use anyhow::{Context, Result};
use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Walks the immediate subdirectories of `root` and returns name-sorted
/// `(category, files)` pairs.
///
/// A subdirectory qualifies as a category when it is not in `excluded_dirs`,
/// its name does not start with `_`, and it directly contains at least one
/// `*.md` file. Files within a category are name-sorted. Subdirectories with
/// no markdown files are omitted entirely.
///
/// Listing errors propagate; this is the one place where a filesystem failure
/// terminates the run.
pub fn scan_root(root: &Path, excluded_dirs: &BTreeSet<String>) -> Result<Vec<(String, Vec<PathBuf>)>> {
    let mut categories = Vec::new();

    for dir in list_sorted(root)? {
        let name = match dir.file_name().and_then(|n| n.to_str()) {
            Some(n) => n.to_string(),
            None => continue,
        };
        if !dir.is_dir() || excluded_dirs.contains(&name) || name.starts_with('_') {
            continue;
        }

        let files: Vec<PathBuf> = list_sorted(&dir)?
            .into_iter()
            .filter(|p| p.is_file() && p.extension().is_some_and(|ext| ext == "md"))
            .collect();

        if !files.is_empty() {
            categories.push((name, files));
        }
    }

    Ok(categories)
}

/// Immediate children of `dir`, sorted by path name.
fn list_sorted(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut children = Vec::new();
    let read_dir = fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))?;
    for child in read_dir {
        let child = child.with_context(|| format!("listing {}", dir.display()))?;
        children.push(child.path());
    }
    children.sort();
    Ok(children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use std::fs;
    use tempfile::tempdir;

    fn touch(root: &Path, rel: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "stub").unwrap();
    }

    #[test]
    fn collects_only_qualifying_directories() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        touch(root, "dev-tools/cli-helper.md");
        touch(root, "scripts/update.md");
        touch(root, "_drafts/wip.md");
        touch(root, ".git/config.md");
        touch(root, "notes/readme.txt");
        fs::create_dir(root.join("empty")).unwrap();
        touch(root, "top-level.md");

        let cats = scan_root(root, &Config::default_excluded_dirs()).unwrap();
        let names: Vec<&str> = cats.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["dev-tools"]);
    }

    #[test]
    fn categories_and_files_are_name_sorted() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        touch(root, "writing/z-last.md");
        touch(root, "writing/a-first.md");
        touch(root, "automation/deploy.md");

        let cats = scan_root(root, &Config::default_excluded_dirs()).unwrap();
        let names: Vec<&str> = cats.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, vec!["automation", "writing"]);

        let writing = &cats[1].1;
        assert_eq!(writing[0].file_name().unwrap(), "a-first.md");
        assert_eq!(writing[1].file_name().unwrap(), "z-last.md");
    }

    #[test]
    fn nested_markdown_is_not_collected() {
        let tmp = tempdir().unwrap();
        let root = tmp.path();
        touch(root, "guides/intro.md");
        touch(root, "guides/deep/nested.md");

        let cats = scan_root(root, &Config::default_excluded_dirs()).unwrap();
        assert_eq!(cats.len(), 1);
        assert_eq!(cats[0].1.len(), 1);
    }

    #[test]
    fn missing_root_propagates_error() {
        let tmp = tempdir().unwrap();
        let gone = tmp.path().join("does-not-exist");
        let err = scan_root(&gone, &Config::default_excluded_dirs()).unwrap_err();
        assert!(err.to_string().contains("listing"));
    }
}
