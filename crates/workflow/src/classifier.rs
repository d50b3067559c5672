use async_trait::async_trait;
use chrono::Utc;
use domain::{Comment, OutcomeState, Post};
use storage::Db;
use tracing::warn;

use crate::config::CommentSettings;

// 契约是全函数：任何一次调用都恰好返回三态之一，
// 预期内的校验/持久化失败不允许以 Err 形式外溢
#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(
        &self,
        post: &Post,
        comment: &Comment,
        settings: &CommentSettings,
    ) -> OutcomeState;
}

pub struct CommentClassifier {
    db: Db,
}

impl CommentClassifier {
    pub fn new(db: Db) -> Self {
        Self { db }
    }
}

#[async_trait]
impl Classifier for CommentClassifier {
    async fn classify(
        &self,
        post: &Post,
        comment: &Comment,
        settings: &CommentSettings,
    ) -> OutcomeState {
        if !settings.active {
            return OutcomeState::Error;
        }

        if let Err(err) = comment.validate() {
            warn!("Comment rejected for post {}: {}", post.id, err);
            return OutcomeState::Error;
        }

        let approved = !settings.moderation;
        let stored = self
            .db
            .insert_comment(post.id, comment, approved, Utc::now().naive_utc())
            .await;

        match stored {
            Ok(_) if approved => OutcomeState::Success,
            Ok(_) => OutcomeState::Moderation,
            Err(err) => {
                warn!("Comment persistence failed for post {}: {:?}", post.id, err);
                OutcomeState::Error
            }
        }
    }
}
