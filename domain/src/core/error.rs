//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Release title cannot be empty")]
    EmptyTitle,

    #[error("Release URL cannot be empty")]
    EmptyUrl,

    #[error("Post text cannot be empty")]
    EmptyPost,

    #[error("Thread has no posts")]
    EmptyThread,
}
