use std::collections::HashMap;
use std::sync::Arc;

use adapter::{
    post_tag, translate, CacheInvalidator, FlashMessage, FlashMessenger, NotificationHub,
    RoutingKey,
};
use chrono::Utc;
use domain::{descriptor, Comment, CommentEvent, OutcomeState, Post};
use tracing::{info, warn};

use crate::classifier::Classifier;
use crate::config::CommentSettings;

pub struct SubmissionWorkflow {
    classifier: Arc<dyn Classifier>,
    flash: FlashMessenger,
    notifications: NotificationHub,
    cache: Arc<dyn CacheInvalidator>,
}

impl SubmissionWorkflow {
    pub fn new(
        classifier: Arc<dyn Classifier>,
        flash: FlashMessenger,
        notifications: NotificationHub,
        cache: Arc<dyn CacheInvalidator>,
    ) -> Self {
        Self {
            classifier,
            flash,
            notifications,
            cache,
        }
    }

    // 消息必发；时间戳、事件广播、缓存剔除只在非错误态按此顺序触发
    pub async fn handle_submission(
        &self,
        fields: &HashMap<String, String>,
        post: &Post,
        settings: &CommentSettings,
        routing: &RoutingKey,
    ) -> OutcomeState {
        let mut comment = Comment::from_form(fields);

        let state = self.classifier.classify(post, &comment, settings).await;

        let message = descriptor(state);
        self.flash.enqueue(
            routing,
            FlashMessage {
                title: translate(message.title_key).to_string(),
                text: translate(message.text_key).to_string(),
                severity: message.severity,
            },
        );

        if state != OutcomeState::Error {
            comment.created_at = Some(Utc::now().naive_utc());
            comment.approved = state == OutcomeState::Success;

            self.notifications.publish(CommentEvent::CommentAdded {
                comment,
                post: post.clone(),
            });

            let tag = post_tag(post.id);
            if let Err(err) = self.cache.flush_by_tag(&tag).await {
                // 剔除失败不改变已定的结果态
                warn!("Cache flush for tag {} failed: {:?}", tag, err);
            }

            info!("Comment accepted on post {} ({})", post.id, state);
        }

        state
    }
}
