use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub thread_id: i64,
    pub name: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A thread together with its posts in display order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ThreadView {
    pub thread: Thread,
    pub posts: Vec<Post>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewThread {
    pub title: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub name: String,
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    // The store is an external service; the JSON field names and timestamp
    // format are its contract, not ours to drift.
    #[test]
    fn post_wire_shape_is_stable() {
        let post = Post {
            id: 3,
            thread_id: 7,
            name: "Anonymous".into(),
            content: "hello".into(),
            created_at: Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap(),
        };
        let value = serde_json::to_value(&post).expect("serialize");
        assert_eq!(value["thread_id"], 7);
        assert_eq!(value["created_at"], "2024-01-02T03:04:05Z");
    }

    #[test]
    fn rows_parse_from_store_json() {
        let thread: Thread = serde_json::from_str(
            r#"{"id": 1, "title": "Test", "created_at": "2024-01-02T03:04:05Z"}"#,
        )
        .expect("deserialize");
        assert_eq!(thread.title, "Test");
        assert_eq!(thread.created_at.timestamp(), 1_704_164_645);
    }
}
