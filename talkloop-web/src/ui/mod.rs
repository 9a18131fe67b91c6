mod app;
pub use app::{App, AppMsg};

mod comment_card;
pub use comment_card::{CommentCard, FeedActions};

mod comment_list;
pub use comment_list::CommentList;

mod comment_text;
pub use comment_text::comment_text;

mod header;
pub use header::Header;

mod new_comment_box;
pub use new_comment_box::NewCommentBox;

mod offline_banner;
pub use offline_banner::OfflineBanner;

mod reply_card;
pub use reply_card::ReplyCard;

mod sort_select;
pub use sort_select::SortSelect;

mod toast_list;
pub use toast_list::ToastList;
