//! Plain-text fallback used when no model summary is available

use crate::core::string::truncate_chars;
use regex::Regex;
use std::sync::LazyLock;

static HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#{1,6}\s").unwrap());
static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\([^)]+\)").unwrap());
static NEWLINES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\n+").unwrap());

/// Strip markdown from release notes and cut them to `max_chars` characters.
///
/// Heading markers, bold/italic asterisks and code fences are removed, links
/// keep only their text, and line breaks collapse into single spaces.
///
/// # Examples
///
/// ```
/// use herald_domain::summary::fallback::fallback_summary;
///
/// let notes = "## New\n- **Fast** [docs](https://example.com)";
/// assert_eq!(fallback_summary(notes, 280), "New - Fast docs");
/// ```
pub fn fallback_summary(release_notes: &str, max_chars: usize) -> String {
    let cleaned = HEADING.replace_all(release_notes, "");
    let cleaned = cleaned.replace("**", "").replace('*', "").replace("```", "");
    let cleaned = LINK.replace_all(&cleaned, "$1");
    let cleaned = NEWLINES.replace_all(&cleaned, " ");

    truncate_chars(cleaned.trim(), max_chars)
}
