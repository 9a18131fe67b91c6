use std::{collections::HashMap, rc::Rc};

use chrono::Utc;
use futures::future::AbortHandle;
use talkloop_client::{
    api::{CommentId, SortOrder},
    load_feed, save_feed, Config, Feed, FeedView, Session, ToastId,
};
use yew::prelude::*;

use crate::{storage::BrowserStorage, ui, util};

pub enum AppMsg {
    Post(String),
    Reply(CommentId, String),
    Edit(CommentId, String),
    Delete(CommentId),
    Like(CommentId),
    TogglePin(CommentId),
    SetSort(SortOrder),

    Undo(ToastId),
    ToastExpired(ToastId),
    CelebrationExpired(CommentId),

    ConnectivityChanged(bool),
}

pub struct App {
    session: Session,
    storage: BrowserStorage,
    sort: SortOrder,
    online: bool,
    toast_timers: HashMap<ToastId, AbortHandle>,
    celebration_timer: Option<AbortHandle>,
    _connectivity: Option<util::ConnectivityListener>,
}

impl App {
    fn persist(&mut self, before: &Feed) {
        if let Err(e) = save_feed(&mut self.storage, before, self.session.feed()) {
            tracing::error!("failed saving feed to local storage: {e:#}");
        }
    }

    fn celebrate(&mut self, ctx: &Context<Self>, id: CommentId) {
        if let Some(previous) = self.celebration_timer.take() {
            previous.abort();
        }
        self.celebration_timer = Some(util::schedule(
            ctx.link(),
            self.session.config().celebration_lifetime,
            AppMsg::CelebrationExpired(id),
        ));
    }

    fn actions(&self, ctx: &Context<Self>) -> ui::FeedActions {
        let link = ctx.link();
        ui::FeedActions {
            on_like: link.callback(AppMsg::Like),
            on_reply: link.callback(|(id, text): (CommentId, String)| AppMsg::Reply(id, text)),
            on_pin: link.callback(AppMsg::TogglePin),
            on_edit: link.callback(|(id, text): (CommentId, String)| AppMsg::Edit(id, text)),
            on_delete: link.callback(AppMsg::Delete),
        }
    }
}

impl Component for App {
    type Message = AppMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let config = Config::default();
        let storage = BrowserStorage::new(&config);

        // A broken stored value would otherwise keep the widget from ever starting
        let feed = load_feed(&storage).unwrap_or_else(|e| {
            tracing::error!("failed loading feed from local storage, starting empty: {e:#}");
            Feed::default()
        });

        let connectivity =
            util::ConnectivityListener::new(ctx.link().callback(AppMsg::ConnectivityChanged))
                .map_err(|e| tracing::error!("failed listening to connectivity changes: {e:#}"))
                .ok();

        App {
            session: Session::new(config, feed),
            storage,
            sort: SortOrder::default(),
            online: util::is_online(),
            toast_timers: HashMap::new(),
            celebration_timer: None,
            _connectivity: connectivity,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let before = self.session.feed().clone();
        match msg {
            AppMsg::Post(text) => match self.session.post(&text, Utc::now()) {
                Ok(id) => tracing::debug!(%id, "posted comment"),
                Err(e) => tracing::debug!("not posting comment: {e}"),
            },
            AppMsg::Reply(parent, text) => match self.session.reply(&parent, &text, Utc::now()) {
                Ok(Some(id)) => tracing::debug!(%id, %parent, "posted reply"),
                Ok(None) => (),
                Err(e) => tracing::debug!("not posting reply: {e}"),
            },
            AppMsg::Edit(id, text) => {
                if let Err(e) = self.session.edit(&id, &text) {
                    tracing::debug!(%id, "not editing comment: {e}");
                }
            }
            AppMsg::Delete(id) => {
                if let Some(toast) = self.session.delete(&id) {
                    let timer = util::schedule(
                        ctx.link(),
                        self.session.config().toast_lifetime,
                        AppMsg::ToastExpired(toast),
                    );
                    self.toast_timers.insert(toast, timer);
                    tracing::debug!(%id, "deleted comment");
                }
            }
            AppMsg::Like(id) => {
                if self.session.like(&id) {
                    tracing::debug!(%id, "first like, celebrating");
                    self.celebrate(ctx, id);
                }
            }
            AppMsg::TogglePin(id) => self.session.toggle_pin(&id),
            AppMsg::SetSort(order) => self.sort = order,
            AppMsg::Undo(toast) => {
                if let Some(timer) = self.toast_timers.remove(&toast) {
                    timer.abort();
                }
                if self.session.undo(toast) {
                    tracing::debug!(?toast, "restored deleted comment");
                }
            }
            AppMsg::ToastExpired(toast) => {
                self.toast_timers.remove(&toast);
                self.session.expire_toast(toast);
            }
            AppMsg::CelebrationExpired(id) => {
                if self.session.expire_celebration(&id) {
                    self.celebration_timer = None;
                }
            }
            AppMsg::ConnectivityChanged(online) => {
                tracing::info!(online, "connectivity changed");
                self.online = online;
            }
        }
        if !Rc::ptr_eq(&before, self.session.feed()) {
            self.persist(&before);
        }
        true
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let view = Rc::new(FeedView::new(self.session.feed(), self.sort));
        html! {
            <div class="talkloop min-vh-100 d-flex flex-column">
                <ui::Header />
                <ui::OfflineBanner online={ self.online } />
                <main class="flex-fill d-flex flex-column w-100 pt-4 px-lg-4">
                    <div class="d-flex justify-content-between align-items-center mb-2">
                        <span class="fs-5 fw-semibold">{ "Comments" }</span>
                        <ui::SortSelect
                            value={ self.sort }
                            on_change={ ctx.link().callback(AppMsg::SetSort) }
                        />
                    </div>
                    <ui::NewCommentBox
                        placeholder="Share your thoughts..."
                        submit_label="Post"
                        on_post={ ctx.link().callback(AppMsg::Post) }
                    />
                    <ui::CommentList
                        { view }
                        celebration={ self.session.celebration().cloned() }
                        actions={ self.actions(ctx) }
                    />
                    <ui::ToastList
                        toasts={ self.session.toasts().clone() }
                        on_undo={ ctx.link().callback(AppMsg::Undo) }
                    />
                </main>
            </div>
        }
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        for (_, timer) in self.toast_timers.drain() {
            timer.abort();
        }
        if let Some(timer) = self.celebration_timer.take() {
            timer.abort();
        }
    }
}
