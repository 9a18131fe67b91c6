use std::collections::HashMap;

use anyhow::Context;

use crate::{
    api::{Comment, CommentId, Error},
    Config, Feed,
};

/// Flat key-value persistence for the feed
///
/// Writes always replace the whole stored value.
pub trait FeedStorage {
    fn load_comments(&self) -> anyhow::Result<Option<Vec<Comment>>>;
    fn save_comments(&mut self, comments: &[Comment]) -> anyhow::Result<()>;
    fn load_pin(&self) -> anyhow::Result<Option<CommentId>>;

    /// Removes the stored pin when given `None`
    fn save_pin(&mut self, pin: Option<&CommentId>) -> anyhow::Result<()>;
}

/// Loads the feed, or an empty unpinned one if nothing was saved yet
pub fn load_feed<S: FeedStorage + ?Sized>(storage: &S) -> anyhow::Result<Feed> {
    let comments = storage
        .load_comments()
        .context("loading comments")?
        .unwrap_or_default();
    let pinned = storage.load_pin().context("loading pinned comment")?;
    tracing::debug!(
        num_comments = comments.len(),
        pinned = ?pinned,
        "loaded feed from storage"
    );
    Ok(Feed::new(comments, pinned))
}

/// Writes whichever of the comments and the pin differ between `before` and `after`
pub fn save_feed<S: FeedStorage + ?Sized>(
    storage: &mut S,
    before: &Feed,
    after: &Feed,
) -> anyhow::Result<()> {
    if before.comments() != after.comments() {
        let comments = after.comments().iter().cloned().collect::<Vec<_>>();
        storage
            .save_comments(&comments)
            .context("saving comments")?;
        tracing::trace!(num_comments = after.len(), "comments saved");
    }
    if before.pinned_id() != after.pinned_id() {
        storage
            .save_pin(after.pinned_id())
            .context("saving pinned comment")?;
        tracing::trace!(pinned = ?after.pinned_id(), "pin saved");
    }
    Ok(())
}

pub(crate) fn parse_comments(key: &str, raw: &str) -> Result<Vec<Comment>, Error> {
    serde_json::from_str(raw).map_err(|e| Error::MalformedStoredState {
        key: String::from(key),
        message: e.to_string(),
    })
}

/// Storage kept in a plain map, with values encoded exactly as in local storage
#[derive(Clone, Debug)]
pub struct MemoryStorage {
    comments_key: String,
    pinned_key: String,
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new(config: &Config) -> MemoryStorage {
        MemoryStorage {
            comments_key: config.comments_key.clone(),
            pinned_key: config.pinned_key.clone(),
            values: HashMap::new(),
        }
    }

    pub fn get_raw(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(|v| v as &str)
    }

    pub fn set_raw(&mut self, key: &str, value: impl Into<String>) {
        self.values.insert(String::from(key), value.into());
    }
}

impl Default for MemoryStorage {
    fn default() -> MemoryStorage {
        MemoryStorage::new(&Config::default())
    }
}

impl FeedStorage for MemoryStorage {
    fn load_comments(&self) -> anyhow::Result<Option<Vec<Comment>>> {
        match self.values.get(&self.comments_key) {
            None => Ok(None),
            Some(raw) => Ok(Some(parse_comments(&self.comments_key, raw)?)),
        }
    }

    fn save_comments(&mut self, comments: &[Comment]) -> anyhow::Result<()> {
        let raw = serde_json::to_string(comments).context("serializing comments")?;
        self.values.insert(self.comments_key.clone(), raw);
        Ok(())
    }

    fn load_pin(&self) -> anyhow::Result<Option<CommentId>> {
        Ok(self
            .values
            .get(&self.pinned_key)
            .map(|raw| CommentId(raw.clone())))
    }

    fn save_pin(&mut self, pin: Option<&CommentId>) -> anyhow::Result<()> {
        match pin {
            Some(id) => {
                self.values
                    .insert(self.pinned_key.clone(), String::from(id.as_str()));
            }
            None => {
                self.values.remove(&self.pinned_key);
            }
        }
        Ok(())
    }
}
