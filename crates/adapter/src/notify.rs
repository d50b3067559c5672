use domain::CommentEvent;
use tokio::sync::broadcast;

// 广播通道即发即忘：订阅者落后或退出都与发布方无关
#[derive(Clone)]
pub struct NotificationHub {
    tx: broadcast::Sender<CommentEvent>,
}

impl NotificationHub {
    pub fn new(capacity: usize) -> Self {
        let (tx, _rx) = broadcast::channel(capacity);
        Self { tx }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<CommentEvent> {
        self.tx.subscribe()
    }

    pub fn publish(&self, event: CommentEvent) {
        let _ = self.tx.send(event);
    }

    pub fn listener_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use domain::{Comment, Post};

    fn sample_event() -> CommentEvent {
        CommentEvent::CommentAdded {
            comment: Comment {
                name: "Ann".into(),
                email: "a@x.com".into(),
                url: String::new(),
                body: "Hi".into(),
                created_at: None,
                approved: true,
            },
            post: Post {
                id: 1,
                title: "Post".into(),
                slug: "post".into(),
            },
        }
    }

    #[tokio::test]
    async fn publish_without_listeners_does_not_fail() {
        let hub = NotificationHub::new(16);
        hub.publish(sample_event());
    }

    #[tokio::test]
    async fn dropped_listener_does_not_affect_others() {
        let hub = NotificationHub::new(16);
        let mut alive = hub.subscribe();
        let dead = hub.subscribe();
        drop(dead);

        hub.publish(sample_event());

        let received = alive.recv().await.expect("listener should receive event");
        assert_eq!(received.name(), "comment.added");
    }
}
