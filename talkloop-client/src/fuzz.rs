#![cfg(test)]

use std::collections::{HashMap, HashSet};

use bolero::generator::TypeGenerator;
use chrono::{Duration, TimeZone, Utc};

use crate::{
    api::{CommentId, Error, SortOrder},
    Celebrations, Config, Feed, FeedView, ToastId, Toasts,
};

#[derive(Clone, Debug, bolero::generator::TypeGenerator)]
enum FuzzOp {
    Post {
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        text: String,
    },
    Reply {
        target: usize,
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        text: String,
    },
    Edit {
        target: usize,
        #[generator(bolero::generator::gen_with::<String>().len(0..20usize))]
        text: String,
    },
    Like {
        target: usize,
    },
    Delete {
        target: usize,
    },
    Undo {
        toast: usize,
    },
    Expire {
        toast: usize,
    },
    Pin {
        target: usize,
    },
}

fn all_ids(feed: &Feed) -> Vec<CommentId> {
    feed.comments()
        .iter()
        .flat_map(|c| std::iter::once(c.id.clone()).chain(c.replies.iter().map(|r| r.id.clone())))
        .collect()
}

fn pick<T: Clone>(items: &[T], idx: usize) -> Option<T> {
    match items.is_empty() {
        true => None,
        false => Some(items[idx % items.len()].clone()),
    }
}

fn likes_of(feed: &Feed, id: &CommentId) -> Option<u64> {
    feed.find_comment(id)
        .map(|c| c.likes)
        .or_else(|| feed.find_reply(id).map(|(_, r)| r.likes))
}

#[test]
fn fuzz_feed_operations() {
    bolero::check!()
        .with_type::<Vec<FuzzOp>>()
        .cloned()
        .for_each(|ops| {
            let config = Config::default();
            let mut feed = Feed::default();
            let mut toasts = Toasts::default();
            let mut toast_ids: Vec<ToastId> = Vec::new();
            let mut celebrations = Celebrations::default();
            let mut expected_likes: HashMap<CommentId, u64> = HashMap::new();
            let mut now = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();

            for op in ops {
                now = now + Duration::milliseconds(1);
                let ids = all_ids(&feed);
                match op {
                    FuzzOp::Post { text } => {
                        let len_before = feed.len();
                        match feed.add_comment(&config.author, &text, now) {
                            Ok(id) => {
                                assert_eq!(feed.len(), len_before + 1);
                                assert_eq!(feed.comments()[0].id, id);
                                assert!(!ids.contains(&id));
                                expected_likes.insert(id, 0);
                            }
                            Err(e) => {
                                assert_eq!(e, Error::EmptyText);
                                assert!(text.trim().is_empty());
                            }
                        }
                    }
                    FuzzOp::Reply { target, text } => {
                        if let Some(parent) = pick(&ids, target) {
                            let is_top_level = feed.find_comment(&parent).is_some();
                            match feed.add_reply(&parent, &config.author, &text, now) {
                                Ok(Some(id)) => {
                                    assert!(is_top_level);
                                    expected_likes.insert(id, 0);
                                }
                                Ok(None) => assert!(!is_top_level),
                                Err(e) => assert_eq!(e, Error::EmptyText),
                            }
                        }
                    }
                    FuzzOp::Edit { target, text } => {
                        if let Some(id) = pick(&ids, target) {
                            if let Ok(found) = feed.edit(&id, &text) {
                                assert!(found);
                            }
                        }
                    }
                    FuzzOp::Like { target } => {
                        if let Some(id) = pick(&ids, target) {
                            assert!(feed.like(&id));
                            let count = expected_likes.get_mut(&id).expect("like of unknown id");
                            assert_eq!(celebrations.on_like(&id), *count == 0);
                            *count += 1;
                            assert!(celebrations.was_liked(&id));
                        }
                    }
                    FuzzOp::Delete { target } => {
                        if let Some(id) = pick(&ids, target) {
                            let deleted = feed.delete(&id).expect("deleting existing id");
                            assert_eq!(deleted.id(), &id);
                            assert!(!feed.contains(&id));
                            let msg = config.deleted_message(&deleted).to_string();
                            toast_ids.push(toasts.push(msg, Some(deleted)));
                        }
                    }
                    FuzzOp::Undo { toast } => {
                        if let Some(t) = pick(&toast_ids, toast) {
                            let was_shown = toasts.get(t).is_some();
                            match toasts.take_undo(t) {
                                Some(deleted) => {
                                    assert!(was_shown);
                                    let id = deleted.id().clone();
                                    let len_before = feed.len();
                                    assert!(feed.restore(deleted));
                                    assert_eq!(feed.len(), len_before + 1);
                                    assert_eq!(feed.comments()[0].id, id);
                                }
                                None => assert!(!was_shown),
                            }
                            assert!(toasts.take_undo(t).is_none());
                        }
                    }
                    FuzzOp::Expire { toast } => {
                        if let Some(t) = pick(&toast_ids, toast) {
                            let len_before = feed.len();
                            toasts.expire(t);
                            assert!(toasts.get(t).is_none());
                            assert_eq!(feed.len(), len_before);
                        }
                    }
                    FuzzOp::Pin { target } => {
                        if let Some(id) = pick(&ids, target) {
                            let was_pinned = feed.is_pinned(&id);
                            feed.toggle_pin(&id);
                            assert_eq!(feed.is_pinned(&id), !was_pinned);
                        }
                    }
                }

                // Ids stay unique across top-level comments and replies
                let ids = all_ids(&feed);
                let unique = ids.iter().collect::<HashSet<_>>();
                assert_eq!(unique.len(), ids.len());

                // Likes never drift, whether an entity was moved around or not
                for id in &ids {
                    assert_eq!(likes_of(&feed, id), expected_likes.get(id).copied());
                }

                // Presentation always shows every top-level comment exactly once
                for order in SortOrder::all() {
                    let view = FeedView::new(&feed, order);
                    assert_eq!(
                        view.rest.len() + view.pinned.is_some() as usize,
                        feed.len()
                    );
                    if let Some(p) = &view.pinned {
                        assert!(feed.is_pinned(&p.id));
                    }
                }
            }
        });
}
