use anyhow::Result;
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::{Arc, Mutex};
use tracing::info;

// 与宿主缓存层的标签约定：写入缓存时与剔除时必须一致
pub fn post_tag(post_id: i64) -> String {
    format!("post_{}", post_id)
}

#[async_trait]
pub trait CacheInvalidator: Send + Sync {
    async fn flush_by_tag(&self, tag: &str) -> Result<()>;
}

#[derive(Default)]
struct CacheInner {
    entries: HashMap<String, String>,
    tags: HashMap<String, HashSet<String>>,
}

// 进程内标签缓存：渲染产物按标签登记，按标签整组剔除
#[derive(Clone, Default)]
pub struct TagCache {
    inner: Arc<Mutex<CacheInner>>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn put(&self, key: &str, content: &str, tags: &[String]) {
        let mut inner = self.inner.lock().unwrap();
        inner.entries.insert(key.to_string(), content.to_string());
        for tag in tags {
            inner
                .tags
                .entry(tag.clone())
                .or_default()
                .insert(key.to_string());
        }
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.inner.lock().unwrap().entries.get(key).cloned()
    }
}

#[async_trait]
impl CacheInvalidator for TagCache {
    async fn flush_by_tag(&self, tag: &str) -> Result<()> {
        let mut inner = self.inner.lock().unwrap();
        if let Some(keys) = inner.tags.remove(tag) {
            for key in &keys {
                inner.entries.remove(key);
            }
            info!("Flushed {} cache entries for tag {}", keys.len(), tag);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_format_is_stable() {
        assert_eq!(post_tag(42), "post_42");
    }

    #[tokio::test]
    async fn flush_evicts_only_entries_under_the_tag() {
        let cache = TagCache::new();
        cache.put("page:post:1", "<html>1</html>", &[post_tag(1)]);
        cache.put("page:post:2", "<html>2</html>", &[post_tag(2)]);
        cache.put("page:index", "<html>idx</html>", &[post_tag(1), post_tag(2)]);

        cache.flush_by_tag(&post_tag(1)).await.unwrap();

        assert!(cache.get("page:post:1").is_none());
        assert!(cache.get("page:index").is_none());
        assert_eq!(cache.get("page:post:2").as_deref(), Some("<html>2</html>"));

        // 再次剔除同一标签应当是无害的
        cache.flush_by_tag(&post_tag(1)).await.unwrap();
    }
}
