use std::rc::Rc;

use crate::{
    api::{CommentId, Error, Time},
    Celebrations, Config, Feed, ToastId, Toasts,
};

/// The feed as a running widget sees it, along with its toasts and celebration
///
/// Timers are up to the caller. `delete` and `like` report the notice they put
/// on screen, which should be expired after `Config::toast_lifetime` or
/// `Config::celebration_lifetime` respectively.
#[derive(Clone, Debug)]
pub struct Session {
    config: Config,
    feed: Rc<Feed>,
    toasts: Toasts,
    celebrations: Celebrations,
}

impl Session {
    pub fn new(config: Config, feed: Feed) -> Session {
        Session {
            config,
            feed: Rc::new(feed),
            toasts: Toasts::default(),
            celebrations: Celebrations::default(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Shared handle on the current feed
    ///
    /// Any change to the feed replaces the handle, so comparing two of them
    /// with `Rc::ptr_eq` tells whether there is anything to save.
    pub fn feed(&self) -> &Rc<Feed> {
        &self.feed
    }

    pub fn toasts(&self) -> &Toasts {
        &self.toasts
    }

    pub fn celebration(&self) -> Option<&CommentId> {
        self.celebrations.active()
    }

    fn feed_mut(&mut self) -> &mut Feed {
        Rc::make_mut(&mut self.feed)
    }

    pub fn post(&mut self, text: &str, now: Time) -> Result<CommentId, Error> {
        let author = self.config.author.clone();
        self.feed_mut().add_comment(&author, text, now)
    }

    pub fn reply(
        &mut self,
        parent: &CommentId,
        text: &str,
        now: Time,
    ) -> Result<Option<CommentId>, Error> {
        if self.feed.find_comment(parent).is_none() {
            tracing::debug!(%parent, "reply to comment not in feed");
            return Ok(None);
        }
        let author = self.config.author.clone();
        self.feed_mut().add_reply(parent, &author, text, now)
    }

    pub fn edit(&mut self, id: &CommentId, text: &str) -> Result<bool, Error> {
        if !self.feed.contains(id) {
            return Ok(false);
        }
        self.feed_mut().edit(id, text)
    }

    pub fn toggle_pin(&mut self, id: &CommentId) {
        self.feed_mut().toggle_pin(id)
    }

    /// Deletes and shows an undo toast, returns the toast if anything was deleted
    pub fn delete(&mut self, id: &CommentId) -> Option<ToastId> {
        if !self.feed.contains(id) {
            tracing::debug!(%id, "delete of comment not in feed");
            return None;
        }
        let deleted = self.feed_mut().delete(id)?;
        let message = String::from(self.config.deleted_message(&deleted));
        Some(self.toasts.push(message, Some(deleted)))
    }

    /// Likes, returns true if this started the celebration for `id`
    pub fn like(&mut self, id: &CommentId) -> bool {
        if !self.feed.contains(id) {
            tracing::debug!(%id, "like of comment not in feed");
            return false;
        }
        self.feed_mut().like(id) && self.celebrations.on_like(id)
    }

    /// Restores what the toast deleted, returns whether the feed changed
    pub fn undo(&mut self, toast: ToastId) -> bool {
        match self.toasts.take_undo(toast) {
            Some(deleted) => self.feed_mut().restore(deleted),
            None => {
                tracing::debug!(?toast, "undo of toast no longer shown");
                false
            }
        }
    }

    pub fn expire_toast(&mut self, toast: ToastId) -> bool {
        self.toasts.expire(toast)
    }

    pub fn expire_celebration(&mut self, id: &CommentId) -> bool {
        self.celebrations.expire(id)
    }
}
