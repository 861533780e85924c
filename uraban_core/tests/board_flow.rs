use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use uraban_core::anchor::{self, Segment};
use uraban_core::normalize::ANONYMOUS_NAME;
use uraban_core::store::BoardStore;
use uraban_core::{BoardService, MemoryStore};

#[test]
fn compose_fetch_and_display_roundtrip() {
    let service = BoardService::new(MemoryStore::new());
    let thread = service.create_thread("Test").expect("create thread");

    let listed = service.list_threads().expect("list threads");
    assert_eq!(listed.first().map(|t| t.id), Some(thread.id));

    service
        .create_post(thread.id, "", "hello\n\n\n\nworld")
        .expect("create post");

    let view = service
        .get_thread(thread.id)
        .expect("fetch thread")
        .expect("thread exists");
    assert_eq!(view.posts.len(), 1);
    assert_eq!(view.posts[0].content, "hello\n\nworld");
    assert_eq!(view.posts[0].name, ANONYMOUS_NAME);
}

#[test]
fn newest_thread_lists_first() {
    let store = MemoryStore::new();
    let base = Utc::now();
    let older = store.seed_thread("older", base - Duration::minutes(5));
    let newer = store.seed_thread("newer", base);
    let service = BoardService::new(store);

    let ids: Vec<i64> = service
        .list_threads()
        .expect("list threads")
        .iter()
        .map(|t| t.id)
        .collect();
    assert_eq!(ids, vec![newer.id, older.id]);
}

#[test]
fn references_resolve_by_position_not_id() {
    let store = MemoryStore::new();
    let base = Utc::now();
    let thread = store.seed_thread("refs", base);
    // Creation times deliberately disagree with insertion order, so display
    // order differs from id order.
    store.seed_post(thread.id, "a", "late", base - Duration::seconds(10));
    store.seed_post(thread.id, "b", "early", base - Duration::seconds(50));
    let middle = store.seed_post(thread.id, "c", "middle", base - Duration::seconds(30));
    let service = BoardService::new(store);

    let reply = service
        .create_post(thread.id, "d", ">>2 thanks")
        .expect("create reply");

    let view = service
        .get_thread(thread.id)
        .expect("fetch thread")
        .expect("thread exists");
    assert_eq!(view.posts.len(), 4);
    assert_eq!(view.posts[3].id, reply.id);

    let segments = anchor::parse(&view.posts[3].content);
    assert_eq!(segments[0], Segment::Reference(2));
    let target = anchor::resolve(2, &view.posts).expect("reference resolves");
    assert_eq!(target.id, middle.id);
}

#[test]
fn sweep_is_idempotent_across_clients() {
    let store = MemoryStore::new();
    store.seed_thread("stale", Utc::now() - Duration::hours(13));

    // Two clients race to clean up; the loser's pass must not error.
    store.delete_expired_threads().expect("first sweep");
    store.delete_expired_threads().expect("second sweep");

    assert!(store.list_threads().expect("list").is_empty());
}
