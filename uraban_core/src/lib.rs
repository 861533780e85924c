pub mod anchor;
pub mod expiry;
pub mod models;
pub mod normalize;
pub mod service;
pub mod store;

pub use models::{Post, Thread, ThreadView};
pub use service::BoardService;
pub use store::{BoardStore, MemoryStore, RestStore, StoreError};
