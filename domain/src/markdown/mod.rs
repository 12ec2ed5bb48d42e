//! Lightweight markdown checks for release-note files.

pub mod validation;
