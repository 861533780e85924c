use std::sync::Arc;

use log::warn;

use crate::models::{Post, Thread, ThreadView};
use crate::normalize::{normalize, poster_name};
use crate::store::{BoardStore, StoreError};

/// Facade the client talks to. Wraps the store with the board's rules:
/// expiry sweep before listing, normalization and the name fallback before
/// writes, deterministic ordering of everything it returns.
#[derive(Clone)]
pub struct BoardService {
    store: Arc<dyn BoardStore>,
}

impl BoardService {
    pub fn new(store: impl BoardStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Newest-first thread listing. Triggers the expiry sweep first; a
    /// failed sweep is logged and the listing proceeds with whatever
    /// threads currently exist.
    pub fn list_threads(&self) -> Result<Vec<Thread>, StoreError> {
        if let Err(err) = self.store.delete_expired_threads() {
            warn!("expiry sweep failed, listing anyway: {err}");
        }
        let mut threads = self.store.list_threads()?;
        threads.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));
        Ok(threads)
    }

    pub fn create_thread(&self, title: &str) -> Result<Thread, StoreError> {
        let title = title.trim();
        if title.is_empty() {
            return Err(StoreError::Rejected("thread title may not be empty".into()));
        }
        self.store.create_thread(title)
    }

    /// The thread plus its posts in display order. `None` when the thread
    /// does not exist, or was swept between listing and opening.
    pub fn get_thread(&self, id: i64) -> Result<Option<ThreadView>, StoreError> {
        let Some(thread) = self.store.get_thread(id)? else {
            return Ok(None);
        };
        let posts = self.list_posts(id)?;
        Ok(Some(ThreadView { thread, posts }))
    }

    /// Posts ordered by creation time, ties broken by id so every client
    /// derives the same display indexes from the same data.
    pub fn list_posts(&self, thread_id: i64) -> Result<Vec<Post>, StoreError> {
        let mut posts = self.store.list_posts(thread_id)?;
        posts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(posts)
    }

    /// Normalizes the body and applies the anonymous-name fallback before
    /// appending. A body that normalizes to nothing never reaches the store.
    pub fn create_post(&self, thread_id: i64, name: &str, content: &str) -> Result<Post, StoreError> {
        let content = normalize(content);
        if content.is_empty() {
            return Err(StoreError::Rejected("post body may not be empty".into()));
        }
        let name = poster_name(name);
        self.store.create_post(thread_id, &name, &content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::ANONYMOUS_NAME;
    use crate::store::MemoryStore;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn setup_service() -> BoardService {
        BoardService::new(MemoryStore::new())
    }

    #[test]
    fn create_thread_rejects_blank_titles() {
        let service = setup_service();
        assert!(service.create_thread("   ").is_err());
        assert!(service.list_threads().unwrap().is_empty());
    }

    #[test]
    fn create_post_normalizes_body_and_names_the_anonymous() {
        let service = setup_service();
        let thread = service.create_thread("Test").expect("create thread");
        let post = service
            .create_post(thread.id, "  ", "hello\n\n\n\nworld")
            .expect("create post");
        assert_eq!(post.content, "hello\n\nworld");
        assert_eq!(post.name, ANONYMOUS_NAME);
    }

    #[test]
    fn empty_bodies_never_reach_the_store() {
        let service = setup_service();
        let thread = service.create_thread("Test").expect("create thread");
        assert!(service.create_post(thread.id, "a", " \n\n\n ").is_err());
        assert!(service.list_posts(thread.id).unwrap().is_empty());
    }

    #[test]
    fn listing_sweeps_expired_threads_first() {
        let store = MemoryStore::new();
        store.seed_thread("stale", Utc::now() - Duration::hours(13));
        let fresh = store.seed_thread("fresh", Utc::now());
        let service = BoardService::new(store);

        let threads = service.list_threads().expect("list threads");
        let ids: Vec<i64> = threads.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![fresh.id]);
    }

    #[test]
    fn posts_come_back_in_creation_order() {
        let store = MemoryStore::new();
        let base = Utc::now();
        let thread = store.seed_thread("ordering", base);
        // Insert out of order on purpose; the service re-sorts.
        store.seed_post(thread.id, "a", "third", base + Duration::seconds(30));
        store.seed_post(thread.id, "b", "first", base + Duration::seconds(10));
        store.seed_post(thread.id, "c", "second", base + Duration::seconds(20));
        let service = BoardService::new(store);

        let posts = service.list_posts(thread.id).expect("list posts");
        let bodies: Vec<&str> = posts.iter().map(|p| p.content.as_str()).collect();
        assert_eq!(bodies, vec!["first", "second", "third"]);
    }

    #[test]
    fn missing_threads_are_a_first_class_none() {
        let service = setup_service();
        assert!(service.get_thread(404).expect("fetch").is_none());
    }
}
