use crate::{
    api::{Comment, SortOrder},
    Feed, OrderExt,
};

/// What the comment list displays: the pinned comment on its own, then the rest
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FeedView {
    pub pinned: Option<Comment>,
    pub rest: Vec<Comment>,
}

impl FeedView {
    pub fn new(feed: &Feed, order: SortOrder) -> FeedView {
        let pinned = feed.pinned().cloned();
        let mut rest = feed
            .comments()
            .iter()
            .filter(|c| !feed.is_pinned(&c.id))
            .cloned()
            .collect::<Vec<_>>();
        order.sort(&mut rest);
        FeedView { pinned, rest }
    }

    pub fn is_empty(&self) -> bool {
        self.pinned.is_none() && self.rest.is_empty()
    }
}
