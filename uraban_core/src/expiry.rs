use chrono::{DateTime, Duration, Utc};

use crate::models::Thread;

/// Threads with no activity for this many hours become eligible for the
/// cleanup sweep.
pub const IDLE_HOURS: i64 = 12;

/// A thread's last activity is the creation time of its newest post, or its
/// own creation time when it has none.
pub fn last_activity(thread: &Thread, latest_post: Option<DateTime<Utc>>) -> DateTime<Utc> {
    latest_post.unwrap_or(thread.created_at)
}

/// True once the idle window has strictly elapsed. Exactly twelve hours of
/// silence keeps the thread alive.
pub fn is_expired(thread: &Thread, latest_post: Option<DateTime<Utc>>, now: DateTime<Utc>) -> bool {
    now - last_activity(thread, latest_post) > Duration::hours(IDLE_HOURS)
}
