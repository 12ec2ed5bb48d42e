//! Releases and what gets posted about them.

pub mod announcement;
pub mod entities;
pub mod thread;
