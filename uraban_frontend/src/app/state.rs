use std::time::Instant;

use uraban_core::{Post, Thread};

/// Which screen the client is on. All view state lives here; the snapshot a
/// thread view holds is discarded and rebuilt wholesale on every fetch.
pub enum ViewState {
    Listing,
    Thread(ThreadState),
}

/// Form state for the create-thread box on the listing.
#[derive(Default)]
pub struct CreateThreadState {
    pub title: String,
    pub submitting: bool,
    pub error: Option<String>,
}

/// Lifecycle of a thread view. `Loading` holds until both the thread record
/// and its posts have arrived; a missing thread wins over any post-fetch
/// outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThreadPhase {
    Loading,
    Ready,
    NotFound,
}

/// Where the post list should scroll on the next frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollRequest {
    #[default]
    None,
    Bottom,
    /// 1-based display index of the post to bring into view.
    Post(usize),
}

/// Transient emphasis on a jumped-to reference target.
pub struct Highlight {
    pub index: usize,
    pub since: Instant,
}

pub struct ThreadState {
    pub thread_id: i64,
    pub title: String,
    pub phase: ThreadPhase,
    pub thread: Option<Thread>,
    pub posts: Vec<Post>,
    pub error: Option<String>,
    pub refreshing: bool,
    pub last_refresh: Option<Instant>,
    pub compose: ComposeState,
    pub scroll: ScrollRequest,
    pub highlight: Option<Highlight>,
}

impl ThreadState {
    pub fn loading(thread_id: i64, title: String) -> Self {
        Self {
            thread_id,
            title,
            phase: ThreadPhase::Loading,
            thread: None,
            posts: Vec::new(),
            error: None,
            refreshing: false,
            last_refresh: None,
            compose: ComposeState::default(),
            scroll: ScrollRequest::None,
            highlight: None,
        }
    }
}

/// Compose form. The author name survives submissions so consecutive posts
/// keep it; the body clears on success only, leaving failed submissions
/// editable for retry.
#[derive(Default)]
pub struct ComposeState {
    pub name: String,
    pub content: String,
    pub sending: bool,
    pub error: Option<String>,
}
