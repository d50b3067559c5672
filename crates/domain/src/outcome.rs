use serde::{Deserialize, Serialize};
use std::fmt;

// 封闭枚举：每次提交恰好产生一个状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomeState {
    Error,
    Moderation,
    Success,
}

impl OutcomeState {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutcomeState::Error => "error",
            OutcomeState::Moderation => "moderation",
            OutcomeState::Success => "success",
        }
    }
}

impl fmt::Display for OutcomeState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
