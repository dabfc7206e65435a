use anyhow::{Context, Result};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::{fs, path::Component};
use strum_macros::{AsRefStr, EnumString};

/// How a title is derived from a markdown file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum TitlePolicy {
    /// First `# ` heading only.
    Plain,
    /// `title:` field of a leading front-matter block, then first `# ` heading.
    StructuredHeader,
}

/// Whether the generated document starts with a front-matter block of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr)]
#[strum(serialize_all = "kebab-case")]
pub enum OutputHeader {
    None,
    /// Fixed `layout`/`title` block for static-site consumption.
    FixedBlock,
}

/// Directory names never treated as categories, regardless of content.
pub const DEFAULT_EXCLUDED_DIRS: [&str; 5] =
    [".git", ".github", "_site", "scripts", "__pycache__"];

const CONFIG_FILE_NAME: &str = "mdindex.toml";

#[derive(Debug, Clone)]
pub struct Config {
    /// Absolute or cwd-relative directory whose subdirectories are scanned.
    pub root: PathBuf,
    /// Where the generated document is written, relative to `root`.
    pub output_path: PathBuf,
    pub title_policy: TitlePolicy,
    pub output_header: OutputHeader,
    pub excluded_dirs: BTreeSet<String>,
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    output: Option<PathBuf>,
    title_policy: Option<String>,
    output_header: Option<String>,
    /// Replaces the default exclusion set when present.
    exclude: Option<Vec<String>>,
}

impl Config {
    /// Public entrypoint: load config for `root` from `{root}/mdindex.toml`
    /// if it exists, apply defaults for everything unset.
    ///
    /// An unreadable config file falls back to defaults; a readable file with
    /// invalid TOML or an unrecognized policy value is an error.
    pub fn load(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        let file_config = Self::read_file_config(&root)?;

        let title_policy = match file_config.title_policy.as_deref() {
            Some(s) => Self::parse_policy(s)?,
            None => TitlePolicy::StructuredHeader,
        };
        let output_header = match file_config.output_header.as_deref() {
            Some(s) => Self::parse_header(s)?,
            None => OutputHeader::None,
        };
        let output_path = file_config
            .output
            .unwrap_or_else(|| PathBuf::from("README.md"));
        let excluded_dirs = match file_config.exclude {
            Some(names) => names.into_iter().collect(),
            None => Self::default_excluded_dirs(),
        };

        Ok(Self {
            root,
            output_path,
            title_policy,
            output_header,
            excluded_dirs,
        })
    }

    /// Absolute-in-effect location of the generated document.
    ///
    /// The scanner only descends into subdirectories, so as long as the output
    /// path has no directory component it can never be re-scanned as content.
    pub fn output_file(&self) -> PathBuf {
        self.root.join(&self.output_path)
    }

    /// True when `output_path` points inside a scanned subdirectory, which
    /// would make the generated document an input on the next run.
    pub fn output_is_scannable(&self) -> bool {
        let mut components = self.output_path.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(dir)), Some(_)) => {
                let name = dir.to_string_lossy();
                !self.excluded_dirs.contains(name.as_ref()) && !name.starts_with('_')
            }
            _ => false,
        }
    }

    pub fn default_excluded_dirs() -> BTreeSet<String> {
        DEFAULT_EXCLUDED_DIRS.iter().map(|s| s.to_string()).collect()
    }

    fn parse_policy(s: &str) -> Result<TitlePolicy> {
        TitlePolicy::from_str(s)
            .with_context(|| format!("unrecognized title_policy '{s}' (expected 'plain' or 'structured-header')"))
    }

    fn parse_header(s: &str) -> Result<OutputHeader> {
        OutputHeader::from_str(s)
            .with_context(|| format!("unrecognized output_header '{s}' (expected 'none' or 'fixed-block')"))
    }

    /// Read `{root}/mdindex.toml` and parse it. A missing or unreadable file
    /// yields the empty `FileConfig`.
    fn read_file_config(root: &Path) -> Result<FileConfig> {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Ok(FileConfig::default());
        }
        match fs::read_to_string(&path) {
            Ok(s) => Self::parse_file(&s).with_context(|| format!("parsing {}", path.display())),
            Err(_) => Ok(FileConfig::default()),
        }
    }

    /// Parse a TOML string into `FileConfig`.
    fn parse_file(s: &str) -> Result<FileConfig> {
        Ok(toml::from_str::<FileConfig>(s)?)
    }
}
