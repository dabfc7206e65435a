//! Document assembly: categories in, full listing page out.
//!
//! The emitted shape is fixed:
//!   optional front-matter block (static-site mode)
//!   # Workbench            preamble + intro + separator
//!   _{N} project(s) so far._
//!   ## {Category}          one section per category, A→Z
//!   - [{title}]({path}) - {date}   entries, newest date first
//!   ---                    fixed About/License footer

use crate::config::OutputHeader;
use crate::entry::{Category, Entry};
use crate::extract::title_case;

const PAGE_TITLE: &str = "Workbench";

const INTRO: &str =
    "Tools, scripts, and workflow improvements I'm building - published as I go.";

const ABOUT: &str = "This is where I document the tools and systems I build to improve how I work. \
Not polished blog posts—practical write-ups on things I've actually built and use.";

const ATTRIBUTION: &str =
    "Inspired by [Simon Willison's TIL](https://til.simonwillison.net/).";

const LICENSE: &str = "This work is licensed under a [Creative Commons Attribution 4.0 \
International License](https://creativecommons.org/licenses/by/4.0/).";

/// Renders the complete index document. Pure: no filesystem access.
///
/// Categories are emitted in alphabetical name order and entries within a
/// category by date string descending. The date comparison is plain string
/// ordering, not calendar-aware; since both extraction paths produce
/// ISO-shaped values this sorts newest-first in practice, and the string
/// comparison is kept as documented behavior.
pub fn render_index(categories: &[Category], output_header: OutputHeader) -> String {
    let mut lines: Vec<String> = Vec::new();

    if output_header == OutputHeader::FixedBlock {
        lines.push("---".into());
        lines.push("layout: default".into());
        lines.push(format!("title: {PAGE_TITLE}"));
        lines.push("---".into());
        lines.push(String::new());
    }

    lines.push(format!("# {PAGE_TITLE}"));
    lines.push(String::new());
    lines.push(INTRO.into());
    lines.push(String::new());
    lines.push("---".into());
    lines.push(String::new());

    let total: usize = categories.iter().map(|c| c.entries.len()).sum();
    lines.push(count_line(total));
    lines.push(String::new());

    let mut sorted: Vec<&Category> = categories.iter().collect();
    sorted.sort_by(|a, b| a.name.cmp(&b.name));

    for category in sorted {
        lines.push(format!("## {}", display_name(&category.name)));
        lines.push(String::new());
        for entry in newest_first(&category.entries) {
            lines.push(format!(
                "- [{}]({}) - {}",
                entry.title, entry.relative_path, entry.date
            ));
        }
        lines.push(String::new());
    }

    lines.push("---".into());
    lines.push(String::new());
    lines.push("## About".into());
    lines.push(String::new());
    lines.push(ABOUT.into());
    lines.push(String::new());
    lines.push(ATTRIBUTION.into());
    lines.push(String::new());
    lines.push("## License".into());
    lines.push(String::new());
    lines.push(LICENSE.into());

    lines.join("\n")
}

/// `_{N} project{s} so far._`; the plural suffix is dropped only at N = 1.
fn count_line(total: usize) -> String {
    let suffix = if total == 1 { "" } else { "s" };
    format!("_{total} project{suffix} so far._")
}

/// Category heading text: hyphens become spaces, each word capitalized.
pub fn display_name(name: &str) -> String {
    title_case(&name.replace('-', " "))
}

/// Entries by date string descending; ties keep their scan order.
fn newest_first(entries: &[Entry]) -> Vec<&Entry> {
    let mut sorted: Vec<&Entry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date));
    sorted
}
