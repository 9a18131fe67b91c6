use crate::api::{Comment, CommentId, Error, Reply, Time};

/// An entity removed from the feed, kept around so that it can be restored
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Deleted {
    Comment(Comment),
    Reply { parent: CommentId, reply: Reply },
}

impl Deleted {
    pub fn id(&self) -> &CommentId {
        match self {
            Deleted::Comment(c) => &c.id,
            Deleted::Reply { reply, .. } => &reply.id,
        }
    }

    pub fn is_reply(&self) -> bool {
        matches!(self, Deleted::Reply { .. })
    }

    /// The shape this entity takes when restored: always a top-level comment
    pub fn into_comment(self) -> Comment {
        match self {
            Deleted::Comment(c) => c,
            Deleted::Reply { reply, .. } => Comment::from(reply),
        }
    }
}

enum EntryMut<'a> {
    Comment(&'a mut Comment),
    Reply(&'a mut Reply),
}

impl EntryMut<'_> {
    fn text(&mut self) -> &mut String {
        match self {
            EntryMut::Comment(c) => &mut c.text,
            EntryMut::Reply(r) => &mut r.text,
        }
    }

    fn likes(&mut self) -> &mut u64 {
        match self {
            EntryMut::Comment(c) => &mut c.likes,
            EntryMut::Reply(r) => &mut r.likes,
        }
    }
}

fn clean_text(text: &str) -> Result<String, Error> {
    let text = text.trim();
    if text.is_empty() {
        return Err(Error::EmptyText);
    }
    Ok(String::from(text))
}

/// The comment collection along with the pin selection
///
/// Top-level comments are kept newest-insertion first. Cloning is cheap, so the
/// UI keeps it behind an `Rc` and mutates through `Rc::make_mut`, which leaves
/// already-rendered snapshots untouched.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Feed {
    comments: im::Vector<Comment>,
    pinned: Option<CommentId>,
}

impl Feed {
    pub fn new<I>(comments: I, pinned: Option<CommentId>) -> Feed
    where
        I: IntoIterator<Item = Comment>,
    {
        Feed {
            comments: comments.into_iter().collect(),
            pinned,
        }
    }

    pub fn comments(&self) -> &im::Vector<Comment> {
        &self.comments
    }

    pub fn len(&self) -> usize {
        self.comments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.comments.is_empty()
    }

    pub fn pinned_id(&self) -> Option<&CommentId> {
        self.pinned.as_ref()
    }

    /// The pinned comment, if the pin still resolves to a top-level comment
    pub fn pinned(&self) -> Option<&Comment> {
        let id = self.pinned.as_ref()?;
        self.find_comment(id)
    }

    pub fn is_pinned(&self, id: &CommentId) -> bool {
        self.pinned.as_ref() == Some(id)
    }

    pub fn find_comment(&self, id: &CommentId) -> Option<&Comment> {
        self.comments.iter().find(|c| c.id == *id)
    }

    /// Returns the reply along with its parent comment
    pub fn find_reply(&self, id: &CommentId) -> Option<(&Comment, &Reply)> {
        self.comments
            .iter()
            .find_map(|c| c.replies.iter().find(|r| r.id == *id).map(|r| (c, r)))
    }

    pub fn contains(&self, id: &CommentId) -> bool {
        self.locate(id).is_some()
    }

    /// Top-level index, then index in the replies if it is a reply
    fn locate(&self, id: &CommentId) -> Option<(usize, Option<usize>)> {
        if let Some(i) = self.comments.iter().position(|c| c.id == *id) {
            return Some((i, None));
        }
        self.comments.iter().enumerate().find_map(|(i, c)| {
            c.replies
                .iter()
                .position(|r| r.id == *id)
                .map(|r| (i, Some(r)))
        })
    }

    fn entry_mut(&mut self, id: &CommentId) -> Option<EntryMut<'_>> {
        let (idx, reply_idx) = self.locate(id)?;
        let comment = self.comments.get_mut(idx)?;
        match reply_idx {
            None => Some(EntryMut::Comment(comment)),
            Some(r) => comment.replies.get_mut(r).map(EntryMut::Reply),
        }
    }

    fn fresh_id(&self) -> CommentId {
        loop {
            let id = CommentId::generate();
            if !self.contains(&id) {
                return id;
            }
        }
    }

    pub fn add_comment(&mut self, user: &str, text: &str, date: Time) -> Result<CommentId, Error> {
        let text = clean_text(text)?;
        let id = self.fresh_id();
        self.comments.push_front(Comment {
            id: id.clone(),
            user: String::from(user),
            text,
            likes: 0,
            date,
            replies: Vec::new(),
        });
        Ok(id)
    }

    /// Appends a reply to a top-level comment
    ///
    /// Returns `Ok(None)` if `parent` is not a top-level comment.
    pub fn add_reply(
        &mut self,
        parent: &CommentId,
        user: &str,
        text: &str,
        date: Time,
    ) -> Result<Option<CommentId>, Error> {
        let text = clean_text(text)?;
        let idx = match self.comments.iter().position(|c| c.id == *parent) {
            Some(idx) => idx,
            None => {
                tracing::debug!(%parent, "reply to comment not in feed");
                return Ok(None);
            }
        };
        let id = self.fresh_id();
        if let Some(c) = self.comments.get_mut(idx) {
            c.replies.push(Reply {
                id: id.clone(),
                user: String::from(user),
                text,
                likes: 0,
                date,
            });
        }
        Ok(Some(id))
    }

    /// Replaces the text of a comment or reply, returns whether one matched
    pub fn edit(&mut self, id: &CommentId, text: &str) -> Result<bool, Error> {
        let text = clean_text(text)?;
        match self.entry_mut(id) {
            Some(mut e) => {
                *e.text() = text;
                Ok(true)
            }
            None => {
                tracing::debug!(%id, "edit of comment not in feed");
                Ok(false)
            }
        }
    }

    /// Adds one like to a comment or reply, returns whether one matched
    pub fn like(&mut self, id: &CommentId) -> bool {
        match self.entry_mut(id) {
            Some(mut e) => {
                let likes = e.likes();
                *likes = likes.saturating_add(1);
                true
            }
            None => {
                tracing::debug!(%id, "like of comment not in feed");
                false
            }
        }
    }

    /// Removes a comment or reply and hands it back unchanged
    ///
    /// The pin is left as is: a pin on a deleted comment simply stops resolving.
    pub fn delete(&mut self, id: &CommentId) -> Option<Deleted> {
        let (idx, reply_idx) = match self.locate(id) {
            Some(l) => l,
            None => {
                tracing::debug!(%id, "delete of comment not in feed");
                return None;
            }
        };
        match reply_idx {
            None => Some(Deleted::Comment(self.comments.remove(idx))),
            Some(r) => {
                let parent = self.comments.get_mut(idx)?;
                let reply = parent.replies.remove(r);
                Some(Deleted::Reply {
                    parent: parent.id.clone(),
                    reply,
                })
            }
        }
    }

    /// Puts a deleted entity back at the front of the top-level list
    ///
    /// Replies come back as top-level comments, their parent is not restored.
    /// Returns false without changing anything if the id is already in the feed.
    pub fn restore(&mut self, deleted: Deleted) -> bool {
        if self.contains(deleted.id()) {
            tracing::warn!(id = %deleted.id(), "not restoring comment whose id is already in feed");
            return false;
        }
        self.comments.push_front(deleted.into_comment());
        true
    }

    /// Pins `id`, or unpins it if it already was the pinned comment
    pub fn toggle_pin(&mut self, id: &CommentId) {
        self.pinned = match self.pinned.take() {
            Some(p) if p == *id => None,
            _ => Some(id.clone()),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn at(ms: i64) -> Time {
        Utc.timestamp_millis_opt(ms).unwrap()
    }

    fn texts(feed: &Feed) -> Vec<&str> {
        feed.comments().iter().map(|c| &c.text as &str).collect()
    }

    #[test]
    fn add_comment_prepends() {
        let mut feed = Feed::default();
        let a = feed.add_comment("User", "first", at(1)).unwrap();
        let b = feed.add_comment("User", "second", at(2)).unwrap();
        assert_ne!(a, b);
        assert_eq!(feed.len(), 2);
        assert_eq!(texts(&feed), vec!["second", "first"]);
        let c = feed.find_comment(&b).unwrap();
        assert_eq!(c.likes, 0);
        assert_eq!(c.user, "User");
        assert!(c.replies.is_empty());
    }

    #[test]
    fn empty_text_is_rejected() {
        let mut feed = Feed::default();
        assert_eq!(feed.add_comment("User", "   ", at(1)), Err(Error::EmptyText));
        assert!(feed.is_empty());
        let id = feed.add_comment("User", "  padded \n", at(1)).unwrap();
        assert_eq!(feed.find_comment(&id).unwrap().text, "padded");
        assert_eq!(feed.add_reply(&id, "User", "", at(2)), Err(Error::EmptyText));
        assert_eq!(feed.edit(&id, "\t"), Err(Error::EmptyText));
        assert_eq!(feed.find_comment(&id).unwrap().text, "padded");
    }

    #[test]
    fn replies_append_in_order() {
        let mut feed = Feed::default();
        let parent = feed.add_comment("User", "parent", at(1)).unwrap();
        let r1 = feed.add_reply(&parent, "User", "one", at(2)).unwrap().unwrap();
        let r2 = feed.add_reply(&parent, "User", "two", at(3)).unwrap().unwrap();
        assert_eq!(feed.len(), 1);
        let replies = &feed.find_comment(&parent).unwrap().replies;
        assert_eq!(replies.iter().map(|r| r.id.clone()).collect::<Vec<_>>(), vec![r1.clone(), r2]);
        let (p, r) = feed.find_reply(&r1).unwrap();
        assert_eq!(p.id, parent);
        assert_eq!(r.text, "one");
    }

    #[test]
    fn reply_to_reply_or_unknown_is_noop() {
        let mut feed = Feed::default();
        let parent = feed.add_comment("User", "parent", at(1)).unwrap();
        let reply = feed.add_reply(&parent, "User", "r", at(2)).unwrap().unwrap();
        let before = feed.clone();
        assert_eq!(feed.add_reply(&reply, "User", "nested", at(3)), Ok(None));
        assert_eq!(
            feed.add_reply(&CommentId::from("nope"), "User", "x", at(3)),
            Ok(None)
        );
        assert_eq!(feed, before);
    }

    #[test]
    fn edit_top_level_and_nested() {
        let mut feed = Feed::default();
        let parent = feed.add_comment("User", "parent", at(1)).unwrap();
        let reply = feed.add_reply(&parent, "User", "reply", at(2)).unwrap().unwrap();
        assert_eq!(feed.edit(&parent, "edited parent"), Ok(true));
        assert_eq!(feed.edit(&reply, "edited reply"), Ok(true));
        assert_eq!(feed.edit(&CommentId::from("nope"), "x"), Ok(false));
        let p = feed.find_comment(&parent).unwrap();
        assert_eq!(p.text, "edited parent");
        assert_eq!(p.replies[0].text, "edited reply");
    }

    #[test]
    fn like_counts_one_per_call() {
        let mut feed = Feed::default();
        let parent = feed.add_comment("User", "parent", at(1)).unwrap();
        let reply = feed.add_reply(&parent, "User", "reply", at(2)).unwrap().unwrap();
        assert!(feed.like(&parent));
        assert!(feed.like(&parent));
        assert!(feed.like(&reply));
        assert!(!feed.like(&CommentId::from("nope")));
        assert_eq!(feed.find_comment(&parent).unwrap().likes, 2);
        assert_eq!(feed.find_reply(&reply).unwrap().1.likes, 1);
    }

    #[test]
    fn delete_top_level_and_restore() {
        let mut feed = Feed::default();
        let a = feed.add_comment("User", "a", at(1)).unwrap();
        let b = feed.add_comment("User", "b", at(2)).unwrap();
        feed.add_reply(&a, "User", "reply", at(3)).unwrap();
        let snapshot = feed.find_comment(&a).unwrap().clone();

        let deleted = feed.delete(&a).unwrap();
        assert_eq!(deleted, Deleted::Comment(snapshot.clone()));
        assert_eq!(feed.len(), 1);
        assert!(!feed.contains(&a));

        assert!(feed.restore(deleted.clone()));
        assert_eq!(feed.comments()[0], snapshot);
        assert_eq!(feed.comments()[1].id, b);

        // A second restore would duplicate the id
        assert!(!feed.restore(deleted));
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn delete_reply_restores_at_top_level() {
        let mut feed = Feed::default();
        let parent = feed.add_comment("User", "parent", at(1)).unwrap();
        let other = feed.add_comment("User", "other", at(2)).unwrap();
        let reply = feed.add_reply(&parent, "User", "reply", at(3)).unwrap().unwrap();
        feed.like(&reply);

        let deleted = feed.delete(&reply).unwrap();
        assert!(deleted.is_reply());
        assert_eq!(deleted.id(), &reply);
        match &deleted {
            Deleted::Reply { parent: p, reply: r } => {
                assert_eq!(p, &parent);
                assert_eq!(r.likes, 1);
            }
            Deleted::Comment(_) => panic!("deleted reply came back as a comment"),
        }
        assert!(feed.find_comment(&parent).unwrap().replies.is_empty());
        assert_eq!(feed.len(), 2);

        assert!(feed.restore(deleted));
        assert_eq!(feed.len(), 3);
        let restored = &feed.comments()[0];
        assert_eq!(restored.id, reply);
        assert_eq!(restored.text, "reply");
        assert_eq!(restored.likes, 1);
        assert!(restored.replies.is_empty());
        assert_eq!(feed.comments()[1].id, other);
        assert!(feed.find_comment(&parent).unwrap().replies.is_empty());
    }

    #[test]
    fn delete_unknown_is_noop() {
        let mut feed = Feed::default();
        feed.add_comment("User", "a", at(1)).unwrap();
        let before = feed.clone();
        assert_eq!(feed.delete(&CommentId::from("nope")), None);
        assert_eq!(feed, before);
    }

    #[test]
    fn pin_toggles_and_replaces() {
        let mut feed = Feed::default();
        let x = feed.add_comment("User", "x", at(1)).unwrap();
        let y = feed.add_comment("User", "y", at(2)).unwrap();

        feed.toggle_pin(&x);
        assert_eq!(feed.pinned_id(), Some(&x));
        feed.toggle_pin(&x);
        assert_eq!(feed.pinned_id(), None);

        feed.toggle_pin(&x);
        feed.toggle_pin(&y);
        assert_eq!(feed.pinned_id(), Some(&y));
        assert!(feed.is_pinned(&y));
        assert!(!feed.is_pinned(&x));
    }

    #[test]
    fn deleted_pin_stops_resolving() {
        let mut feed = Feed::default();
        let x = feed.add_comment("User", "x", at(1)).unwrap();
        feed.toggle_pin(&x);
        let deleted = feed.delete(&x).unwrap();
        assert_eq!(feed.pinned_id(), Some(&x));
        assert_eq!(feed.pinned(), None);
        feed.restore(deleted);
        assert_eq!(feed.pinned().map(|c| c.id.clone()), Some(x));
    }

    #[test]
    fn mutations_leave_earlier_snapshots_alone() {
        let mut feed = Feed::default();
        let a = feed.add_comment("User", "a", at(1)).unwrap();
        let snapshot = feed.clone();
        feed.like(&a);
        feed.edit(&a, "changed").unwrap();
        assert_eq!(snapshot.find_comment(&a).unwrap().likes, 0);
        assert_eq!(snapshot.find_comment(&a).unwrap().text, "a");
    }
}
