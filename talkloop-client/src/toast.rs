use crate::{api::Uuid, Deleted};

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct ToastId(pub Uuid);

impl ToastId {
    pub fn generate() -> ToastId {
        ToastId(Uuid::new_v4())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,

    /// What undoing this toast brings back
    undo: Option<Deleted>,
}

impl Toast {
    pub fn has_undo(&self) -> bool {
        self.undo.is_some()
    }
}

/// Notices currently on screen, oldest first
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Toasts {
    toasts: Vec<Toast>,
}

impl Toasts {
    pub fn push(&mut self, message: impl Into<String>, undo: Option<Deleted>) -> ToastId {
        let id = ToastId::generate();
        self.toasts.push(Toast {
            id,
            message: message.into(),
            undo,
        });
        id
    }

    /// Drops the toast without undoing anything, returns whether it was still there
    pub fn expire(&mut self, id: ToastId) -> bool {
        let len_before = self.toasts.len();
        self.toasts.retain(|t| t.id != id);
        self.toasts.len() != len_before
    }

    /// Drops the toast and hands back its undo payload
    ///
    /// Only the first call for a given toast can return something.
    pub fn take_undo(&mut self, id: ToastId) -> Option<Deleted> {
        let idx = self.toasts.iter().position(|t| t.id == id)?;
        self.toasts.remove(idx).undo
    }

    pub fn get(&self, id: ToastId) -> Option<&Toast> {
        self.toasts.iter().find(|t| t.id == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }
}
