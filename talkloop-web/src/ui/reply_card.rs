use chrono::Utc;
use talkloop_client::api::Reply;
use yew::prelude::*;

use super::comment_card::like_button;
use crate::{ui, util};

#[derive(Clone, PartialEq, Properties)]
pub struct ReplyCardProps {
    pub reply: Reply,
    pub celebrating: bool,
    pub actions: ui::FeedActions,
}

#[function_component(ReplyCard)]
pub fn reply_card(p: &ReplyCardProps) -> Html {
    let edit = use_state(|| None);
    let id = p.reply.id.clone();
    let on_validate = {
        let edit = edit.clone();
        let id = id.clone();
        p.actions.on_edit.reform(move |t| {
            edit.set(None);
            (id.clone(), t)
        })
    };

    html! {
        <div class={ classes!("reply-card", "border-start", "ps-3", "mb-2", p.celebrating.then(|| "confetti")) }>
            <div class="d-flex align-items-center mb-1">
                <span class="fw-semibold me-2">{ &p.reply.user }</span>
                <span class="text-muted small">{ util::format_age(p.reply.date, Utc::now()) }</span>
            </div>
            { ui::comment_text(&p.reply.text, edit.clone(), on_validate) }
            <div class="d-flex align-items-center gap-2">
                { like_button(&id, p.reply.likes, p.celebrating, &p.actions.on_like) }
                <button
                    type="button"
                    class="btn btn-sm btn-light bi-btn bi-pencil"
                    onclick={ let edit = edit.clone(); let text = p.reply.text.clone(); Callback::from(move |_| edit.set(Some(text.clone()))) }
                >
                    { "Edit" }
                </button>
                <button
                    type="button"
                    class="btn btn-sm btn-light bi-btn bi-trash"
                    onclick={ let id = id.clone(); p.actions.on_delete.reform(move |_| id.clone()) }
                >
                    { "Delete" }
                </button>
            </div>
        </div>
    }
}
