use crate::outcome::OutcomeState;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Info,
    Ok,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageDescriptor {
    pub title_key: &'static str,
    pub text_key: &'static str,
    pub severity: Severity,
}

static ERROR_MESSAGE: MessageDescriptor = MessageDescriptor {
    title_key: "message.addComment.error.title",
    text_key: "message.addComment.error.text",
    severity: Severity::Error,
};

static MODERATION_MESSAGE: MessageDescriptor = MessageDescriptor {
    title_key: "message.addComment.moderation.title",
    text_key: "message.addComment.moderation.text",
    severity: Severity::Info,
};

static SUCCESS_MESSAGE: MessageDescriptor = MessageDescriptor {
    title_key: "message.addComment.success.title",
    text_key: "message.addComment.success.text",
    severity: Severity::Ok,
};

// 状态 -> 描述符为全映射，表本身进程级只读
pub fn descriptor(state: OutcomeState) -> &'static MessageDescriptor {
    match state {
        OutcomeState::Error => &ERROR_MESSAGE,
        OutcomeState::Moderation => &MODERATION_MESSAGE,
        OutcomeState::Success => &SUCCESS_MESSAGE,
    }
}
