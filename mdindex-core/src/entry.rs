/// One markdown file's extracted metadata, as it appears in the index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub title: String,
    /// Path relative to the scanned root, always with forward slashes
    /// (e.g. `dev-tools/cli-helper.md`), usable as a markdown link target.
    pub relative_path: String,
    /// `YYYY-MM-DD`-shaped string. Taken verbatim from the file when found,
    /// so it is not guaranteed to be a valid calendar date.
    pub date: String,
}

/// A top-level grouping in the index, one per qualifying subdirectory.
#[derive(Debug, Clone)]
pub struct Category {
    /// The subdirectory name, as found on disk.
    pub name: String,
    pub entries: Vec<Entry>,
}
