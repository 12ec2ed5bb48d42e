//! X (Twitter) adapter
//!
//! Posts through the v2 `POST /2/tweets` endpoint with OAuth 1.0a
//! user-context signing.

mod client;
mod credentials;
pub mod oauth;

pub use client::{TWEETS_URL, XClient, status_url};
pub use credentials::XCredentials;
pub use oauth::OAuthSigner;
