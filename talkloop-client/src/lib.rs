mod celebration;
pub use celebration::Celebrations;

mod config;
pub use config::Config;

mod feed;
pub use feed::{Deleted, Feed};

mod fuzz;

mod order;
pub use order::OrderExt;

mod session;
pub use session::Session;

mod storage;
pub use storage::{load_feed, save_feed, FeedStorage, MemoryStorage};

mod toast;
pub use toast::{Toast, ToastId, Toasts};

mod view;
pub use view::FeedView;

pub mod api {
    pub use talkloop_api::*;
}

pub mod prelude {
    pub use crate::{FeedStorage, OrderExt};
}
