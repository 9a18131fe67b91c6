use std::collections::HashSet;

use crate::api::CommentId;

/// Tracks the one-time celebration shown on the first like of a comment
///
/// Only lives for the session, nothing here is persisted.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Celebrations {
    liked_once: HashSet<CommentId>,
    active: Option<CommentId>,
}

impl Celebrations {
    /// Records a like, returns true if this is the first one for `id`
    ///
    /// The first like makes `id` the active celebration, replacing any other.
    pub fn on_like(&mut self, id: &CommentId) -> bool {
        if !self.liked_once.insert(id.clone()) {
            return false;
        }
        self.active = Some(id.clone());
        true
    }

    /// Clears the celebration if `id` is still the active one
    pub fn expire(&mut self, id: &CommentId) -> bool {
        if self.active.as_ref() != Some(id) {
            return false;
        }
        self.active = None;
        true
    }

    pub fn active(&self) -> Option<&CommentId> {
        self.active.as_ref()
    }

    pub fn is_active(&self, id: &CommentId) -> bool {
        self.active.as_ref() == Some(id)
    }

    pub fn was_liked(&self, id: &CommentId) -> bool {
        self.liked_once.contains(id)
    }
}
