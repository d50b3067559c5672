use crate::models::{Comment, Post};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CommentEvent {
    CommentAdded { comment: Comment, post: Post },
}

impl CommentEvent {
    pub fn name(&self) -> &'static str {
        match self {
            CommentEvent::CommentAdded { .. } => "comment.added",
        }
    }

    // 监听方按「事件名 + 不透明负载」消费
    pub fn payload(&self) -> serde_json::Value {
        match self {
            CommentEvent::CommentAdded { comment, post } => {
                serde_json::json!({ "comment": comment, "post": post })
            }
        }
    }
}
