use chrono::Utc;
use talkloop_client::api::{Comment, CommentId};
use yew::prelude::*;

use crate::{ui, util};

/// Everything a comment or reply can trigger on the feed
#[derive(Clone, PartialEq)]
pub struct FeedActions {
    pub on_like: Callback<CommentId>,
    pub on_reply: Callback<(CommentId, String)>,
    pub on_pin: Callback<CommentId>,
    pub on_edit: Callback<(CommentId, String)>,
    pub on_delete: Callback<CommentId>,
}

#[derive(Clone, PartialEq, Properties)]
pub struct CommentCardProps {
    pub comment: Comment,
    pub is_pinned: bool,
    pub celebration: Option<CommentId>,
    pub actions: FeedActions,
}

#[function_component(CommentCard)]
pub fn comment_card(p: &CommentCardProps) -> Html {
    let edit = use_state(|| None);
    let replying = use_state(|| false);
    let id = p.comment.id.clone();
    let celebrating = p.celebration.as_ref() == Some(&id);

    let on_validate = {
        let edit = edit.clone();
        let id = id.clone();
        p.actions.on_edit.reform(move |t| {
            edit.set(None);
            (id.clone(), t)
        })
    };
    let on_reply = {
        let replying = replying.clone();
        let id = id.clone();
        p.actions.on_reply.reform(move |t| {
            replying.set(false);
            (id.clone(), t)
        })
    };
    let pin_label = match p.is_pinned {
        true => "Unpin",
        false => "Pin",
    };

    html! {
        <article
            class={ classes!(
                "comment-card", "card", "mb-3",
                p.is_pinned.then(|| "pinned"),
                celebrating.then(|| "confetti")
            ) }
            aria-label={ format!("Comment by {}", p.comment.user) }
        >
            <div class="card-body">
                <div class="d-flex align-items-center mb-1">
                    { for p.is_pinned.then(|| html! {
                        <span class="badge bg-warning text-dark me-2">{ "Pinned" }</span>
                    }) }
                    <span class="fw-semibold me-2">{ &p.comment.user }</span>
                    <span class="text-muted small">
                        { util::format_age(p.comment.date, Utc::now()) }
                    </span>
                </div>
                { ui::comment_text(&p.comment.text, edit.clone(), on_validate) }
                <div class="d-flex align-items-center gap-2">
                    { like_button(&id, p.comment.likes, celebrating, &p.actions.on_like) }
                    <button
                        type="button"
                        class="btn btn-sm btn-light bi-btn bi-reply"
                        onclick={ let replying = replying.clone(); Callback::from(move |_| replying.set(!*replying)) }
                    >
                        { "Reply" }
                    </button>
                    <button
                        type="button"
                        class={ classes!("btn", "btn-sm", "btn-light", "bi-btn", if p.is_pinned { "bi-pin-fill" } else { "bi-pin" }) }
                        aria-pressed={ if p.is_pinned { "true" } else { "false" } }
                        onclick={ let id = id.clone(); p.actions.on_pin.reform(move |_| id.clone()) }
                    >
                        { pin_label }
                    </button>
                    <button
                        type="button"
                        class="btn btn-sm btn-light bi-btn bi-pencil"
                        onclick={ let edit = edit.clone(); let text = p.comment.text.clone(); Callback::from(move |_| edit.set(Some(text.clone()))) }
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
                { for (*replying).then(|| html! {
                    <div class="mt-2">
                        <ui::NewCommentBox placeholder="Write a reply..." submit_label="Reply" on_post={ on_reply } />
                    </div>
                }) }
                <div class="replies ms-4 mt-2">
                    { for p.comment.replies.iter().map(|r| html! {
                        <ui::ReplyCard
                            key={ r.id.as_str() }
                            reply={ r.clone() }
                            celebrating={ p.celebration.as_ref() == Some(&r.id) }
                            actions={ p.actions.clone() }
                        />
                    }) }
                </div>
            </div>
        </article>
    }
}

pub(super) fn like_button(
    id: &CommentId,
    likes: u64,
    celebrating: bool,
    on_like: &Callback<CommentId>,
) -> Html {
    let id = id.clone();
    html! {
        <button
            type="button"
            class="btn btn-sm btn-light bi-btn bi-heart"
            aria-label="Like"
            onclick={ on_like.reform(move |_| id.clone()) }
        >
            { format!(" {likes}") }
            { for celebrating.then(|| html! {
                <span class="confetti-burst ms-1" aria-hidden="true">{ "🎉" }</span>
            }) }
        </button>
    }
}
