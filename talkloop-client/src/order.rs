use std::cmp::Reverse;

use crate::api::{Comment, SortOrder};

pub trait OrderExt {
    fn sort(&self, comments: &mut [Comment]);
}

impl OrderExt for SortOrder {
    /// Stable: comments that compare equal keep their feed order
    fn sort(&self, comments: &mut [Comment]) {
        match self {
            SortOrder::Recent => comments.sort_by_key(|c| Reverse(c.date)),
            SortOrder::Liked => comments.sort_by_key(|c| Reverse(c.likes)),
        }
    }
}
