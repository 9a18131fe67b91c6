use chrono::{Duration, Utc};
use rand::Rng;
use talkloop_client::{
    api::{CommentId, Time},
    Feed,
};

const NUM_COMMENTS: usize = 40;
const MAX_REPLIES: usize = 4;
const MAX_LIKES: u64 = 30;
const COMMENT_WORD_COUNT: usize = 25;
const USERS: [&str; 4] = ["User", "Alice", "Bob", "Carol"];

// Covers about a month of activity
const MAX_AGE_MINUTES: i64 = 60 * 24 * 30;

fn gen_text(rng: &mut impl Rng) -> String {
    let words = rng.gen_range(3..COMMENT_WORD_COUNT);
    lipsum::lipsum_words_with_rng(rng, words)
}

fn gen_user(rng: &mut impl Rng) -> &'static str {
    USERS[rng.gen_range(0..USERS.len())]
}

/// A date after `parent` but never in the future
fn gen_reply_date(rng: &mut impl Rng, parent: Time, now: Time) -> Time {
    let max_delay = (now - parent).num_minutes().max(1);
    (parent + Duration::minutes(rng.gen_range(1..=max_delay))).min(now)
}

/// Prints a feed as it would be stored under the comments key
///
/// Paste the output in the browser console as
/// `localStorage.setItem("talkloop-comments", JSON.stringify(<output>))`.
fn main() {
    let mut rng = rand::thread_rng();
    let now = Utc::now();

    // Oldest first, so that prepending leaves the newest at the top
    let mut ages = (0..NUM_COMMENTS)
        .map(|_| rng.gen_range(0..MAX_AGE_MINUTES))
        .collect::<Vec<_>>();
    ages.sort_unstable_by(|a, b| b.cmp(a));

    let mut feed = Feed::default();
    for age in ages {
        let date = now - Duration::minutes(age);
        let id = feed
            .add_comment(gen_user(&mut rng), &gen_text(&mut rng), date)
            .expect("generated comment text is not empty");
        for _ in 0..rng.gen_range(0..=MAX_REPLIES) {
            let reply_date = gen_reply_date(&mut rng, date, now);
            let reply = feed
                .add_reply(&id, gen_user(&mut rng), &gen_text(&mut rng), reply_date)
                .expect("generated reply text is not empty")
                .expect("replying to a comment just added");
            like_n_times(&mut feed, &reply, rng.gen_range(0..MAX_LIKES / 3));
        }
        like_n_times(&mut feed, &id, rng.gen_range(0..=MAX_LIKES));
    }

    let json = serde_json::to_string_pretty(feed.comments()).expect("serializing feed");
    println!("{json}");
}

fn like_n_times(feed: &mut Feed, id: &CommentId, n: u64) {
    for _ in 0..n {
        feed.like(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn replies_are_never_in_the_future() {
        let mut rng = rand::thread_rng();
        let now = Utc::now();
        for age in [0, 1, 2, 60, MAX_AGE_MINUTES] {
            let parent = now - Duration::minutes(age);
            for _ in 0..50 {
                let date = gen_reply_date(&mut rng, parent, now);
                assert!(date <= now, "reply at {date} after {now}");
                assert!(date >= parent);
            }
        }
    }
}
