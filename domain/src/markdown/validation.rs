//! Markdown syntax checks.
//!
//! Catches the mistakes that break rendering on GitHub release pages:
//! unbalanced code fences, unbalanced bold markers and links without a target.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static LINK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\[([^\]]+)\]\(([^)]*)\)").unwrap());

/// Result of validating one markdown document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MarkdownReport {
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl MarkdownReport {
    pub fn is_clean(&self) -> bool {
        self.errors.is_empty() && self.warnings.is_empty()
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

/// Validate a markdown document
pub fn validate_markdown(content: &str) -> MarkdownReport {
    let mut report = MarkdownReport::default();

    if content.matches("```").count() % 2 != 0 {
        report
            .errors
            .push("Unclosed code block detected (odd number of ``` markers)".to_string());
    }

    for caps in LINK.captures_iter(content) {
        if caps[2].trim().is_empty() {
            report.errors.push(format!("Empty URL in link: {}", &caps[0]));
        }
    }

    if content.matches("**").count() % 2 != 0 {
        report
            .errors
            .push("Unclosed bold marker (uneven ** count)".to_string());
    }

    report
}
