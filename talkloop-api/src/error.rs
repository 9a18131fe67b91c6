#[derive(Debug, Eq, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Comment text is empty")]
    EmptyText,

    #[error("Unknown sort order {0:?}")]
    UnknownSortOrder(String),

    #[error("Malformed value stored under {key:?}: {message}")]
    MalformedStoredState { key: String, message: String },
}
