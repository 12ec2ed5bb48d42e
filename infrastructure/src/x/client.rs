//! Publisher implementation over the X v2 API

use super::credentials::XCredentials;
use super::oauth::OAuthSigner;
use async_trait::async_trait;
use herald_application::{PublishError, Publisher};
use herald_domain::{Announcement, Channel, PublishReceipt};
use reqwest::header::AUTHORIZATION;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

pub const TWEETS_URL: &str = "https://api.x.com/2/tweets";

/// Public link to a post
pub fn status_url(id: &str) -> String {
    format!("https://x.com/i/status/{}", id)
}

#[derive(Debug, Serialize)]
struct CreateTweet<'a> {
    text: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    reply: Option<Reply<'a>>,
}

#[derive(Debug, Serialize)]
struct Reply<'a> {
    in_reply_to_tweet_id: &'a str,
}

#[derive(Debug, Deserialize)]
struct CreateTweetResponse {
    data: TweetData,
}

#[derive(Debug, Deserialize)]
struct TweetData {
    id: String,
}

/// Publisher that posts to X on behalf of the credential owner
pub struct XClient {
    client: reqwest::Client,
    signer: OAuthSigner,
    endpoint: String,
}

impl XClient {
    pub fn new(client: reqwest::Client, credentials: XCredentials) -> Self {
        Self {
            client,
            signer: OAuthSigner::new(credentials),
            endpoint: TWEETS_URL.to_string(),
        }
    }

    /// Post one text, optionally as a reply
    pub async fn tweet(
        &self,
        text: &str,
        in_reply_to: Option<&str>,
    ) -> Result<PublishReceipt, PublishError> {
        let body = CreateTweet {
            text,
            reply: in_reply_to.map(|id| Reply {
                in_reply_to_tweet_id: id,
            }),
        };
        debug!("POST {} ({} characters)", self.endpoint, text.chars().count());

        let response = self
            .client
            .post(&self.endpoint)
            .header(AUTHORIZATION, self.signer.authorization("POST", &self.endpoint))
            .json(&body)
            .send()
            .await
            .map_err(|e| PublishError::Network(e.without_url().to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| PublishError::Network(e.without_url().to_string()))?;

        if !status.is_success() {
            return Err(PublishError::from_status(status.as_u16(), text));
        }

        let id = parse_tweet_id(&text)?;
        Ok(PublishReceipt::new(Channel::X, id.clone()).with_url(status_url(&id)))
    }
}

fn parse_tweet_id(body: &str) -> Result<String, PublishError> {
    serde_json::from_str::<CreateTweetResponse>(body)
        .map(|r| r.data.id)
        .map_err(|e| PublishError::InvalidResponse(e.to_string()))
}

#[async_trait]
impl Publisher for XClient {
    fn channel(&self) -> Channel {
        Channel::X
    }

    async fn publish(&self, announcement: &Announcement) -> Result<PublishReceipt, PublishError> {
        self.tweet(&announcement.post_text(), None).await
    }

    async fn publish_thread(&self, posts: &[String]) -> Result<Vec<PublishReceipt>, PublishError> {
        let mut receipts: Vec<PublishReceipt> = Vec::with_capacity(posts.len());
        for (index, post) in posts.iter().enumerate() {
            let previous = receipts.last().map(|r| r.id.as_str());
            let receipt = self.tweet(post, previous).await?;
            info!("Posted {}/{}: {}", index + 1, posts.len(), receipt.id);
            receipts.push(receipt);
        }
        Ok(receipts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_tweet_body() {
        let body = CreateTweet {
            text: "hello",
            reply: None,
        };
        assert_eq!(serde_json::to_value(&body).unwrap(), json!({"text": "hello"}));
    }

    #[test]
    fn test_reply_body() {
        let body = CreateTweet {
            text: "second",
            reply: Some(Reply {
                in_reply_to_tweet_id: "1445880548472328192",
            }),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"text": "second", "reply": {"in_reply_to_tweet_id": "1445880548472328192"}})
        );
    }

    #[test]
    fn test_parse_tweet_id() {
        let body = r#"{"data": {"id": "1445880548472328192", "text": "hello", "edit_history_tweet_ids": ["1445880548472328192"]}}"#;
        assert_eq!(parse_tweet_id(body).unwrap(), "1445880548472328192");
        assert!(matches!(
            parse_tweet_id(r#"{"errors": []}"#),
            Err(PublishError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_status_url() {
        assert_eq!(status_url("42"), "https://x.com/i/status/42");
    }
}
