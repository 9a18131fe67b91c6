use chrono::Utc;

pub use uuid::{uuid, Uuid};
pub type Time = chrono::DateTime<Utc>;

pub const KEY_COMMENTS: &str = "talkloop-comments";
pub const KEY_PINNED: &str = "talkloop-pinned";

mod comment;
pub use comment::{Comment, CommentId, Reply};

mod error;
pub use error::Error;

mod order;
pub use order::SortOrder;

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(ms: i64) -> Time {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    #[test]
    fn parses_legacy_stored_feed() {
        // Shape written by earlier versions of the widget: timestamp ids, numeric
        // createdAt, and replies without a `replies` field
        let stored = r#"[
            {
                "id": "1697000000000",
                "user": "User",
                "text": "hello",
                "likes": 3,
                "createdAt": 1697000000000,
                "replies": [
                    { "id": "1697000000500", "user": "User", "text": "hi back", "likes": 0, "createdAt": 1697000000500 }
                ]
            },
            { "id": "1697000001000", "user": "User", "text": "second", "likes": 0, "createdAt": 1697000001000 }
        ]"#;
        let comments: Vec<Comment> = serde_json::from_str(stored).unwrap();
        assert_eq!(comments.len(), 2);
        assert_eq!(comments[0].id, CommentId::from("1697000000000"));
        assert_eq!(comments[0].date, at(1697000000000));
        assert_eq!(comments[0].likes, 3);
        assert_eq!(comments[0].replies.len(), 1);
        assert_eq!(comments[0].replies[0].text, "hi back");
        assert!(comments[1].replies.is_empty());
    }

    #[test]
    fn writes_camel_case_and_millis() {
        let c = Comment {
            id: CommentId::from("abc"),
            user: String::from("User"),
            text: String::from("hello"),
            likes: 2,
            date: at(1234),
            replies: Vec::new(),
        };
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": "abc",
                "user": "User",
                "text": "hello",
                "likes": 2,
                "createdAt": 1234,
                "replies": [],
            })
        );
    }

    #[test]
    fn sort_order_names() {
        assert_eq!(SortOrder::default(), SortOrder::Recent);
        assert_eq!(
            serde_json::to_string(&SortOrder::Liked).unwrap(),
            r#""liked""#
        );
        assert_eq!("recent".parse::<SortOrder>().unwrap(), SortOrder::Recent);
        assert_eq!("liked".parse::<SortOrder>().unwrap(), SortOrder::Liked);
        assert!("popular".parse::<SortOrder>().is_err());
    }

    #[test]
    fn generated_ids_differ() {
        let a = CommentId::generate();
        let b = CommentId::generate();
        assert_ne!(a, b);
    }
}
