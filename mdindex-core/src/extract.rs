//! Per-file metadata extraction: a display title and a `YYYY-MM-DD` date.
//!
//! Every step here is best-effort. A step that fails to read or to match
//! simply yields `None` and the caller advances to the next fallback; no
//! file is ever dropped from the index because its metadata was unreadable.

use crate::config::TitlePolicy;
use chrono::{DateTime, Local};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// ISO-date-shaped substring. Matched verbatim, never calendar-validated.
static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").unwrap());

/// Only this many leading bytes are searched for an embedded date.
const DATE_SCAN_BYTES: u64 = 500;

const FRONT_MATTER_DELIMITER: &str = "---";

/// Derives the display title for `path` through an ordered fallback chain:
/// front-matter `title:` field (structured-header policy only), first `# `
/// heading, then the filename itself.
pub fn extract_title(path: &Path, policy: TitlePolicy) -> String {
    if policy == TitlePolicy::StructuredHeader {
        if let Some(title) = front_matter_title(path) {
            return title;
        }
    }
    if let Some(title) = heading_title(path) {
        return title;
    }
    filename_title(path)
}

/// Derives the entry date for `path`: the first ISO-shaped substring in the
/// file's first 500 bytes, else the file's mtime, else today.
pub fn extract_date(path: &Path) -> String {
    embedded_date(path)
        .or_else(|| modified_date(path))
        .unwrap_or_else(|| Local::now().format("%Y-%m-%d").to_string())
}

/// `title:` value from a leading front-matter block, surrounding quotes
/// stripped. `None` when the file has no such block, the block has no
/// `title:` field, or the file cannot be read.
fn front_matter_title(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    let mut lines = content.lines();
    if lines.next()?.trim_end() != FRONT_MATTER_DELIMITER {
        return None;
    }
    for line in lines {
        if line.trim_end() == FRONT_MATTER_DELIMITER {
            return None;
        }
        if let Some(value) = line.trim().strip_prefix("title:") {
            let value = value.trim().trim_matches(|c| c == '"' || c == '\'');
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

/// Text after the first line starting with `# `, trimmed.
fn heading_title(path: &Path) -> Option<String> {
    let content = fs::read_to_string(path).ok()?;
    content
        .lines()
        .find_map(|line| line.strip_prefix("# "))
        .map(|rest| rest.trim().to_string())
        .filter(|t| !t.is_empty())
}

/// Last-resort title: the file stem with hyphens as spaces, title-cased.
fn filename_title(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    title_case(&stem.replace('-', " "))
}

/// Capitalizes each whitespace-separated word: first letter upper, rest lower.
pub fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => {
                    first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
                }
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// First ISO-shaped date within the leading 500 bytes, verbatim.
fn embedded_date(path: &Path) -> Option<String> {
    let mut head = Vec::new();
    File::open(path)
        .ok()?
        .take(DATE_SCAN_BYTES)
        .read_to_end(&mut head)
        .ok()?;
    // A cut mid-codepoint only mangles the final character; the date
    // pattern is pure ASCII and unaffected.
    let head = String::from_utf8_lossy(&head);
    DATE_RE.find(&head).map(|m| m.as_str().to_string())
}

/// The file's last-modified timestamp as `YYYY-MM-DD`.
fn modified_date(path: &Path) -> Option<String> {
    let mtime = fs::metadata(path).ok()?.modified().ok()?;
    Some(DateTime::<Local>::from(mtime).format("%Y-%m-%d").to_string())
}
