//! Use cases (application services)
//!
//! - [`summarize_release`] — AI summary of release notes with fallback
//! - [`announce_release`] — post a release to every configured channel
//! - [`post_thread`] — post a reply chain

pub mod announce_release;
pub mod post_thread;
pub mod summarize_release;
