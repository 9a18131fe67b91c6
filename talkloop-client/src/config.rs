use std::time::Duration;

use crate::{
    api::{KEY_COMMENTS, KEY_PINNED},
    Deleted,
};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Config {
    /// Local storage key holding the JSON-encoded comment list
    pub comments_key: String,

    /// Local storage key holding the raw pinned id, absent when nothing is pinned
    pub pinned_key: String,

    pub toast_lifetime: Duration,
    pub celebration_lifetime: Duration,

    /// Name new comments and replies are posted under
    pub author: String,

    pub comment_deleted_message: String,
    pub reply_deleted_message: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            comments_key: String::from(KEY_COMMENTS),
            pinned_key: String::from(KEY_PINNED),
            toast_lifetime: Duration::from_secs(5),
            celebration_lifetime: Duration::from_millis(1200),
            author: String::from("User"),
            comment_deleted_message: String::from("Comment deleted. Undo?"),
            reply_deleted_message: String::from("Reply deleted. Undo?"),
        }
    }
}

impl Config {
    pub fn deleted_message(&self, d: &Deleted) -> &str {
        match d.is_reply() {
            true => &self.reply_deleted_message,
            false => &self.comment_deleted_message,
        }
    }
}
