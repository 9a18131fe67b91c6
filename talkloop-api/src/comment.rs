use std::fmt;

use uuid::Uuid;

use crate::Time;

/// Identifier shared by top-level comments and replies
///
/// Older stored feeds used millisecond timestamps as ids, so this stays an
/// opaque string rather than a parsed uuid.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd, serde::Deserialize, serde::Serialize)]
#[serde(transparent)]
pub struct CommentId(pub String);

impl CommentId {
    pub fn generate() -> CommentId {
        CommentId(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CommentId {
    fn from(s: &str) -> CommentId {
        CommentId(String::from(s))
    }
}

impl From<String> for CommentId {
    fn from(s: String) -> CommentId {
        CommentId(s)
    }
}

impl fmt::Display for CommentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub user: String,
    pub text: String,
    pub likes: u64,

    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub date: Time,

    /// Replies in insertion order
    #[serde(default)]
    pub replies: Vec<Reply>,
}

/// A reply to a top-level comment
///
/// Replies cannot be replied to, hence no `replies` field.
#[derive(Clone, Debug, Eq, PartialEq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Reply {
    pub id: CommentId,
    pub user: String,
    pub text: String,
    pub likes: u64,

    #[serde(rename = "createdAt", with = "chrono::serde::ts_milliseconds")]
    pub date: Time,
}

impl From<Reply> for Comment {
    fn from(r: Reply) -> Comment {
        Comment {
            id: r.id,
            user: r.user,
            text: r.text,
            likes: r.likes,
            date: r.date,
            replies: Vec::new(),
        }
    }
}
