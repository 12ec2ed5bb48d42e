//! Post Thread use case

use crate::ports::publisher::{PublishError, Publisher};
use herald_domain::{PublishReceipt, Thread};
use std::sync::Arc;
use tracing::{info, warn};

/// Use case for posting a thread as a reply chain
pub struct PostThreadUseCase {
    publisher: Arc<dyn Publisher>,
}

impl PostThreadUseCase {
    pub fn new(publisher: Arc<dyn Publisher>) -> Self {
        Self { publisher }
    }

    /// Post every post of `thread`, returning receipts in thread order.
    ///
    /// Oversized posts are logged but still sent; the platform has the final
    /// word on length.
    pub async fn execute(&self, thread: &Thread) -> Result<Vec<PublishReceipt>, PublishError> {
        for (index, len) in thread.oversized() {
            warn!("Post {} is {} characters long", index + 1, len);
        }

        info!(
            "Posting a {}-post thread to {}",
            thread.len(),
            self.publisher.channel()
        );
        self.publisher.publish_thread(thread.posts()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use herald_domain::{Announcement, Channel};
    use std::sync::Mutex;

    struct ChainPublisher {
        posted: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl Publisher for ChainPublisher {
        fn channel(&self) -> Channel {
            Channel::X
        }

        async fn publish(
            &self,
            announcement: &Announcement,
        ) -> Result<PublishReceipt, PublishError> {
            self.posted.lock().unwrap().push(announcement.post_text());
            Ok(PublishReceipt::new(Channel::X, "1"))
        }

        async fn publish_thread(
            &self,
            posts: &[String],
        ) -> Result<Vec<PublishReceipt>, PublishError> {
            let mut receipts = Vec::new();
            for (i, post) in posts.iter().enumerate() {
                self.posted.lock().unwrap().push(post.clone());
                receipts.push(PublishReceipt::new(Channel::X, (i + 1).to_string()));
            }
            Ok(receipts)
        }
    }

    struct WebhookOnly;

    #[async_trait]
    impl Publisher for WebhookOnly {
        fn channel(&self) -> Channel {
            Channel::Discord
        }

        async fn publish(
            &self,
            _announcement: &Announcement,
        ) -> Result<PublishReceipt, PublishError> {
            Ok(PublishReceipt::new(Channel::Discord, "1"))
        }
    }

    #[tokio::test]
    async fn test_posts_in_order() {
        let publisher = Arc::new(ChainPublisher {
            posted: Mutex::new(Vec::new()),
        });
        let use_case = PostThreadUseCase::new(publisher.clone());
        let thread = Thread::parse("one\n---\ntwo\n---\nthree").unwrap();

        let receipts = use_case.execute(&thread).await.unwrap();

        assert_eq!(receipts.len(), 3);
        assert_eq!(receipts[2].id, "3");
        assert_eq!(*publisher.posted.lock().unwrap(), vec!["one", "two", "three"]);
    }

    #[tokio::test]
    async fn test_channel_without_threads() {
        let use_case = PostThreadUseCase::new(Arc::new(WebhookOnly));
        let thread = Thread::parse("one").unwrap();

        let err = use_case.execute(&thread).await.unwrap_err();
        assert_eq!(err, PublishError::ThreadsUnsupported(Channel::Discord));
    }
}
