//! Reading notes, descriptions and threads from files or arguments

use anyhow::{Context, Result};
use herald_domain::Thread;
use std::fs;
use std::path::Path;

pub fn read_text(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

/// Arguments joined with spaces, `None` when blank
pub fn joined(args: &[String]) -> Option<String> {
    let text = args.join(" ");
    (!text.trim().is_empty()).then_some(text)
}

/// Thread from a `---`-separated document
pub fn read_thread(path: &Path) -> Result<Thread> {
    let document = read_text(path)?;
    Thread::parse(&document).with_context(|| format!("No posts found in {}", path.display()))
}
