use lazy_static::lazy_static;
use regex::Regex;

use crate::models::Post;

lazy_static! {
    static ref REFERENCE: Regex = Regex::new(r">>(\d+)").expect("reference pattern");
}

/// One piece of a post body: literal text, or a `>>N` reply reference
/// carrying the target display index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Reference(usize),
}

/// Splits a post body into text and reference segments. Only `>>` followed
/// by a contiguous digit run counts as a reference; a bare `>>` or `>>abc`
/// stays literal text. Empty text segments are dropped.
pub fn parse(content: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for capture in REFERENCE.captures_iter(content) {
        let matched = capture.get(0).expect("whole match");
        let Ok(target) = capture[1].parse::<usize>() else {
            // Digit run too large to be an index; leave it in the text.
            continue;
        };
        if matched.start() > cursor {
            segments.push(Segment::Text(content[cursor..matched.start()].to_string()));
        }
        segments.push(Segment::Reference(target));
        cursor = matched.end();
    }
    if cursor < content.len() {
        segments.push(Segment::Text(content[cursor..].to_string()));
    }
    segments
}

/// Resolves a reference against the currently loaded posts. Display indexes
/// are 1-based positions in the snapshot, so anything outside
/// `1..=posts.len()` resolves to `None` rather than erroring.
pub fn resolve(target: usize, posts: &[Post]) -> Option<&Post> {
    if target == 0 {
        return None;
    }
    posts.get(target - 1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, Utc};
    use pretty_assertions::assert_eq;

    fn post(id: i64, offset_secs: i64) -> Post {
        Post {
            id,
            thread_id: 1,
            name: "Anonymous".into(),
            content: String::new(),
            created_at: Utc::now() + Duration::seconds(offset_secs),
        }
    }

    #[test]
    fn splits_text_around_references() {
        assert_eq!(
            parse("hi >>2 there"),
            vec![
                Segment::Text("hi ".into()),
                Segment::Reference(2),
                Segment::Text(" there".into()),
            ]
        );
    }

    #[test]
    fn bare_arrows_stay_literal() {
        assert_eq!(parse(">>abc"), vec![Segment::Text(">>abc".into())]);
        assert_eq!(parse("trailing >>"), vec![Segment::Text("trailing >>".into())]);
    }

    #[test]
    fn adjacent_references_both_parse() {
        assert_eq!(
            parse(">>3>>4"),
            vec![Segment::Reference(3), Segment::Reference(4)]
        );
    }

    #[test]
    fn empty_body_yields_no_segments() {
        assert_eq!(parse(""), Vec::<Segment>::new());
    }

    #[test]
    fn resolution_is_positional_not_id_based() {
        let posts = vec![post(10, 0), post(7, 1), post(42, 2)];
        assert_eq!(resolve(2, &posts).map(|p| p.id), Some(7));
    }

    #[test]
    fn out_of_range_targets_resolve_to_none() {
        let posts = vec![post(1, 0)];
        assert!(resolve(0, &posts).is_none());
        assert!(resolve(2, &posts).is_none());
        assert!(resolve(usize::MAX, &posts).is_none());
    }
}
