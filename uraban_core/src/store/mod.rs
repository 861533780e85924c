mod memory;
mod rest;

pub use memory::MemoryStore;
pub use rest::RestStore;

use thiserror::Error;

use crate::models::{Post, Thread};

/// Failures surfaced by the backing table service.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store refused the request (validation on its side).
    #[error("{0}")]
    Rejected(String),
    /// Connectivity or backend failure.
    #[error("store request failed: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Request/response surface of the board's backing store. The client owns no
/// durable state; every read rebuilds its snapshot from these calls.
/// Implementations must be shareable across worker threads.
pub trait BoardStore: Send + Sync {
    fn list_threads(&self) -> Result<Vec<Thread>, StoreError>;

    fn create_thread(&self, title: &str) -> Result<Thread, StoreError>;

    /// Not-found is a first-class `None`, not an error.
    fn get_thread(&self, id: i64) -> Result<Option<Thread>, StoreError>;

    fn list_posts(&self, thread_id: i64) -> Result<Vec<Post>, StoreError>;

    fn create_post(&self, thread_id: i64, name: &str, content: &str) -> Result<Post, StoreError>;

    /// Bulk-deletes threads idle past the expiry window. Idempotent: several
    /// clients may trigger it concurrently and a sweep over an already-clean
    /// store is a no-op.
    fn delete_expired_threads(&self) -> Result<(), StoreError>;
}
