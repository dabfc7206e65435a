//! The core `IndexBuilder` struct, providing the primary API for generating
//! the listing page.

use crate::config::Config;
use crate::entry::{Category, Entry};
use crate::extract::{extract_date, extract_title};
use crate::render::render_index;
use crate::scan::scan_root;
use anyhow::{Context, Result, bail};
use std::fs;
use std::path::PathBuf;

/// The central struct for one generation pass.
///
/// An instance of `IndexBuilder` holds the configuration and turns the
/// current state of the directory tree into the generated document.
#[derive(Debug)]
pub struct IndexBuilder {
    pub config: Config,
}

/// Summary of a completed generation pass, backing the console output.
#[derive(Debug)]
pub struct IndexReport {
    pub output_path: PathBuf,
    /// Category names in the order they appear in the document.
    pub categories: Vec<String>,
    pub total: usize,
}

impl IndexBuilder {
    /// Creates a builder for `root`, loading configuration from
    /// `{root}/mdindex.toml` when present.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let config = Config::load(root)?;
        Ok(Self::with_config(config))
    }

    /// Creates a builder with a specific `Config`.
    pub fn with_config(config: Config) -> Self {
        Self { config }
    }

    /// Scans the root and extracts metadata for every qualifying file.
    ///
    /// Categories come back name-sorted. Per-file metadata problems never
    /// surface here; they resolve through the extraction fallback chain.
    pub fn collect(&self) -> Result<Vec<Category>> {
        let scanned = scan_root(&self.config.root, &self.config.excluded_dirs)?;

        let mut categories = Vec::with_capacity(scanned.len());
        for (name, files) in scanned {
            let entries = files
                .iter()
                .map(|path| {
                    let file_name = path.file_name().unwrap_or_default().to_string_lossy();
                    Entry {
                        title: extract_title(path, self.config.title_policy),
                        // Forward slashes regardless of platform; these are
                        // markdown link targets, not filesystem paths.
                        relative_path: format!("{name}/{file_name}"),
                        date: extract_date(path),
                    }
                })
                .collect();
            categories.push(Category { name, entries });
        }
        Ok(categories)
    }

    /// Renders the document for the given categories without touching disk.
    pub fn render(&self, categories: &[Category]) -> String {
        render_index(categories, self.config.output_header)
    }

    /// Runs one full pass: scan, extract, render, then overwrite the output
    /// file. The document is assembled completely in memory before the single
    /// write, so a failed run never leaves a truncated page behind.
    pub fn build(&self) -> Result<IndexReport> {
        if self.config.output_is_scannable() {
            bail!(
                "output path '{}' is inside a scanned subdirectory; \
                 the generated page would become an input on the next run",
                self.config.output_path.display()
            );
        }

        let categories = self.collect()?;
        let document = self.render(&categories);

        let output_path = self.config.output_file();
        fs::write(&output_path, document)
            .with_context(|| format!("writing {}", output_path.display()))?;

        Ok(IndexReport {
            output_path,
            total: categories.iter().map(|c| c.entries.len()).sum(),
            categories: categories.into_iter().map(|c| c.name).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::tests::mk_config;
    use crate::config::{OutputHeader, TitlePolicy};
    use std::fs;
    use std::path::Path;
    use tempfile::tempdir;

    fn mk_builder() -> (IndexBuilder, tempfile::TempDir) {
        let tmp = tempdir().unwrap();
        let cfg = mk_config(tmp.path().to_path_buf());
        (IndexBuilder::with_config(cfg), tmp)
    }

    fn write_file(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    #[test]
    fn full_pass_over_one_category() {
        let (builder, tmp) = mk_builder();
        write_file(
            tmp.path(),
            "dev-tools/cli-helper.md",
            "---\ntitle: \"CLI Helper\"\n---\n# Ignored\nBody mentions 2025-03-10 here.",
        );

        let report = builder.build().unwrap();
        assert_eq!(report.categories, vec!["dev-tools"]);
        assert_eq!(report.total, 1);
        assert_eq!(report.output_path, tmp.path().join("README.md"));

        let doc = fs::read_to_string(&report.output_path).unwrap();
        assert!(doc.contains("## Dev Tools"));
        assert!(doc.contains("- [CLI Helper](dev-tools/cli-helper.md) - 2025-03-10"));
        assert!(doc.contains("_1 project so far._"));
    }

    #[test]
    fn generated_output_is_not_rescanned() {
        let (builder, tmp) = mk_builder();
        write_file(tmp.path(), "notes/a.md", "# A\n2025-01-01");

        builder.build().unwrap();
        let report = builder.build().unwrap();
        // README.md sits in the root, not in any category directory.
        assert_eq!(report.categories, vec!["notes"]);
        assert_eq!(report.total, 1);
    }

    #[test]
    fn rerun_without_changes_is_byte_identical() {
        let (builder, tmp) = mk_builder();
        write_file(tmp.path(), "automation/deploy.md", "# Deploy\n2024-12-01");
        write_file(tmp.path(), "writing/voice.md", "# Voice\n2025-06-15");

        builder.build().unwrap();
        let first = fs::read(tmp.path().join("README.md")).unwrap();
        builder.build().unwrap();
        let second = fs::read(tmp.path().join("README.md")).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn prior_output_is_fully_overwritten() {
        let (builder, tmp) = mk_builder();
        let long_filler = "stale ".repeat(2000);
        fs::write(tmp.path().join("README.md"), &long_filler).unwrap();

        builder.build().unwrap();
        let doc = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert!(!doc.contains("stale"));
        assert!(doc.starts_with("# Workbench"));
    }

    #[test]
    fn plain_policy_is_respected_end_to_end() {
        let tmp = tempdir().unwrap();
        let mut cfg = mk_config(tmp.path().to_path_buf());
        cfg.title_policy = TitlePolicy::Plain;
        let builder = IndexBuilder::with_config(cfg);
        write_file(
            tmp.path(),
            "guides/setup.md",
            "---\ntitle: \"Front Matter\"\n---\n# Setup Guide\n2025-02-02",
        );

        builder.build().unwrap();
        let doc = fs::read_to_string(tmp.path().join("README.md")).unwrap();
        assert!(doc.contains("- [Setup Guide](guides/setup.md) - 2025-02-02"));
        assert!(!doc.contains("Front Matter"));
    }

    #[test]
    fn fixed_block_output_targets_static_site() {
        let tmp = tempdir().unwrap();
        let mut cfg = mk_config(tmp.path().to_path_buf());
        cfg.output_header = OutputHeader::FixedBlock;
        cfg.output_path = PathBuf::from("index.md");
        let builder = IndexBuilder::with_config(cfg);
        write_file(tmp.path(), "notes/a.md", "# A\n2025-01-01");

        let report = builder.build().unwrap();
        assert_eq!(report.output_path, tmp.path().join("index.md"));
        let doc = fs::read_to_string(&report.output_path).unwrap();
        assert!(doc.starts_with("---\nlayout: default\ntitle: Workbench\n---\n"));
    }

    #[test]
    fn build_rejects_output_inside_scanned_directory() {
        let tmp = tempdir().unwrap();
        let mut cfg = mk_config(tmp.path().to_path_buf());
        cfg.output_path = PathBuf::from("notes/README.md");
        let builder = IndexBuilder::with_config(cfg);
        write_file(tmp.path(), "notes/a.md", "# A");

        let err = builder.build().unwrap_err();
        assert!(err.to_string().contains("scanned subdirectory"));
    }

    #[test]
    fn missing_root_fails_the_run() {
        let tmp = tempdir().unwrap();
        let cfg = mk_config(tmp.path().join("gone"));
        let builder = IndexBuilder::with_config(cfg);
        assert!(builder.build().is_err());
    }
}
