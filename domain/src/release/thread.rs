//! Multi-post threads

use super::announcement::POST_MAX_CHARS;
use crate::core::error::DomainError;
use crate::core::string::char_len;

/// Line that separates posts in a thread document
pub const POST_SEPARATOR: &str = "---";

/// An ordered, non-empty list of posts (Value Object)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    posts: Vec<String>,
}

impl Thread {
    /// Build a thread from posts, dropping blank ones
    pub fn try_new<I, S>(posts: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let posts: Vec<String> = posts
            .into_iter()
            .map(|p| p.into().trim().to_string())
            .filter(|p| !p.is_empty())
            .collect();
        if posts.is_empty() {
            return Err(DomainError::EmptyThread);
        }
        Ok(Self { posts })
    }

    /// Parse a document whose posts are separated by lines containing only `---`.
    ///
    /// ```
    /// use herald_domain::release::thread::Thread;
    ///
    /// let thread = Thread::parse("first\n---\nsecond\n---\n").unwrap();
    /// assert_eq!(thread.posts(), ["first", "second"]);
    /// ```
    pub fn parse(document: &str) -> Result<Self, DomainError> {
        let mut posts = Vec::new();
        let mut current = String::new();

        for line in document.lines() {
            if line == POST_SEPARATOR {
                posts.push(std::mem::take(&mut current));
            } else {
                current.push_str(line);
                current.push('\n');
            }
        }
        posts.push(current);

        Self::try_new(posts)
    }

    pub fn posts(&self) -> &[String] {
        &self.posts
    }

    pub fn len(&self) -> usize {
        self.posts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.posts.is_empty()
    }

    /// `(index, length)` of every post longer than the post limit
    pub fn oversized(&self) -> Vec<(usize, usize)> {
        self.posts
            .iter()
            .enumerate()
            .map(|(i, p)| (i, char_len(p)))
            .filter(|(_, len)| *len > POST_MAX_CHARS)
            .collect()
    }
}
