use domain::Severity;
use serde::Serialize;
use std::collections::{HashMap, VecDeque};
use std::fmt;
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutingKey(String);

impl RoutingKey {
    // 固定 flash 命名空间前缀 + 宿主侧的扩展/插件标识
    pub fn for_plugin(extension: &str, plugin: &str) -> Self {
        Self(format!(
            "flashmessages.tx_{}_{}",
            extension.to_lowercase(),
            plugin.to_lowercase()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RoutingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlashMessage {
    pub title: String,
    pub text: String,
    pub severity: Severity,
}

// 按路由键排队的待显示消息；宿主在渲染下一个响应时取走
#[derive(Clone, Default)]
pub struct FlashMessenger {
    queues: Arc<Mutex<HashMap<String, VecDeque<FlashMessage>>>>,
}

impl FlashMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enqueue(&self, key: &RoutingKey, message: FlashMessage) {
        let mut queues = self.queues.lock().unwrap();
        queues
            .entry(key.as_str().to_string())
            .or_default()
            .push_back(message);
    }

    pub fn drain(&self, key: &RoutingKey) -> Vec<FlashMessage> {
        let mut queues = self.queues.lock().unwrap();
        queues
            .remove(key.as_str())
            .map(|queue| queue.into_iter().collect())
            .unwrap_or_default()
    }

    pub fn pending(&self, key: &RoutingKey) -> usize {
        let queues = self.queues.lock().unwrap();
        queues.get(key.as_str()).map_or(0, |queue| queue.len())
    }
}
