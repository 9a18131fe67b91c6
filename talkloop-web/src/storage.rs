use anyhow::anyhow;
use gloo_storage::{errors::StorageError, LocalStorage, Storage};
use talkloop_client::{
    api::{Comment, CommentId, Error},
    Config, FeedStorage,
};

/// The browser's local storage
///
/// Comments are stored as JSON, the pin as the raw id string.
pub struct BrowserStorage {
    comments_key: String,
    pinned_key: String,
}

impl BrowserStorage {
    pub fn new(config: &Config) -> BrowserStorage {
        BrowserStorage {
            comments_key: config.comments_key.clone(),
            pinned_key: config.pinned_key.clone(),
        }
    }
}

impl FeedStorage for BrowserStorage {
    fn load_comments(&self) -> anyhow::Result<Option<Vec<Comment>>> {
        match LocalStorage::get(&self.comments_key) {
            Ok(comments) => Ok(Some(comments)),
            Err(StorageError::KeyNotFound(_)) => Ok(None),
            Err(StorageError::SerdeError(e)) => Err(Error::MalformedStoredState {
                key: self.comments_key.clone(),
                message: e.to_string(),
            }
            .into()),
            Err(e) => Err(anyhow!("reading {:?} from local storage: {e}", self.comments_key)),
        }
    }

    fn save_comments(&mut self, comments: &[Comment]) -> anyhow::Result<()> {
        LocalStorage::set(&self.comments_key, comments)
            .map_err(|e| anyhow!("writing {:?} to local storage: {e}", self.comments_key))
    }

    fn load_pin(&self) -> anyhow::Result<Option<CommentId>> {
        let pin = LocalStorage::raw()
            .get_item(&self.pinned_key)
            .map_err(|e| anyhow!("reading {:?} from local storage: {e:?}", self.pinned_key))?;
        Ok(pin.map(CommentId))
    }

    fn save_pin(&mut self, pin: Option<&CommentId>) -> anyhow::Result<()> {
        match pin {
            Some(id) => LocalStorage::raw()
                .set_item(&self.pinned_key, id.as_str())
                .map_err(|e| anyhow!("writing {:?} to local storage: {e:?}", self.pinned_key)),
            None => {
                LocalStorage::delete(&self.pinned_key);
                Ok(())
            }
        }
    }
}
