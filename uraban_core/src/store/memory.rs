use std::sync::{Arc, Mutex, MutexGuard};

use chrono::{DateTime, Utc};

use super::{BoardStore, StoreError};
use crate::expiry;
use crate::models::{Post, Thread};

/// In-memory stand-in for the remote table service. Backs the test suites
/// and offline runs; it mirrors the remote contract, including the
/// idempotent expiry sweep.
#[derive(Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Mutex<Inner>>,
}

#[derive(Default)]
struct Inner {
    threads: Vec<Thread>,
    posts: Vec<Post>,
    next_thread_id: i64,
    next_post_id: i64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a thread with an explicit creation time. The remote store
    /// always assigns its own timestamps; this exists so expiry behavior is
    /// testable deterministically.
    pub fn seed_thread(&self, title: &str, created_at: DateTime<Utc>) -> Thread {
        let mut inner = self.lock();
        inner.next_thread_id += 1;
        let thread = Thread {
            id: inner.next_thread_id,
            title: title.to_string(),
            created_at,
        };
        inner.threads.push(thread.clone());
        thread
    }

    /// Seeds a post with an explicit creation time.
    pub fn seed_post(
        &self,
        thread_id: i64,
        name: &str,
        content: &str,
        created_at: DateTime<Utc>,
    ) -> Post {
        let mut inner = self.lock();
        inner.next_post_id += 1;
        let post = Post {
            id: inner.next_post_id,
            thread_id,
            name: name.to_string(),
            content: content.to_string(),
            created_at,
        };
        inner.posts.push(post.clone());
        post
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl BoardStore for MemoryStore {
    fn list_threads(&self) -> Result<Vec<Thread>, StoreError> {
        Ok(self.lock().threads.clone())
    }

    fn create_thread(&self, title: &str) -> Result<Thread, StoreError> {
        if title.trim().is_empty() {
            return Err(StoreError::Rejected("thread title may not be empty".into()));
        }
        Ok(self.seed_thread(title, Utc::now()))
    }

    fn get_thread(&self, id: i64) -> Result<Option<Thread>, StoreError> {
        Ok(self.lock().threads.iter().find(|t| t.id == id).cloned())
    }

    fn list_posts(&self, thread_id: i64) -> Result<Vec<Post>, StoreError> {
        Ok(self
            .lock()
            .posts
            .iter()
            .filter(|p| p.thread_id == thread_id)
            .cloned()
            .collect())
    }

    fn create_post(&self, thread_id: i64, name: &str, content: &str) -> Result<Post, StoreError> {
        if content.trim().is_empty() {
            return Err(StoreError::Rejected("post body may not be empty".into()));
        }
        let mut inner = self.lock();
        if inner.threads.iter().all(|t| t.id != thread_id) {
            return Err(StoreError::Rejected("thread not found".into()));
        }
        inner.next_post_id += 1;
        let post = Post {
            id: inner.next_post_id,
            thread_id,
            name: name.to_string(),
            content: content.to_string(),
            created_at: Utc::now(),
        };
        inner.posts.push(post.clone());
        Ok(post)
    }

    fn delete_expired_threads(&self) -> Result<(), StoreError> {
        let now = Utc::now();
        let mut inner = self.lock();
        let expired: Vec<i64> = inner
            .threads
            .iter()
            .filter(|thread| {
                let latest = inner
                    .posts
                    .iter()
                    .filter(|p| p.thread_id == thread.id)
                    .map(|p| p.created_at)
                    .max();
                expiry::is_expired(thread, latest, now)
            })
            .map(|t| t.id)
            .collect();
        inner.threads.retain(|t| !expired.contains(&t.id));
        inner.posts.retain(|p| !expired.contains(&p.thread_id));
        Ok(())
    }
}
