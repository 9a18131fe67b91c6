use std::rc::Rc;

use talkloop_client::{api::CommentId, FeedView};
use yew::prelude::*;

use crate::ui;

#[derive(Clone, PartialEq, Properties)]
pub struct CommentListProps {
    pub view: Rc<FeedView>,
    pub celebration: Option<CommentId>,
    pub actions: ui::FeedActions,
}

#[function_component(CommentList)]
pub fn comment_list(p: &CommentListProps) -> Html {
    if p.view.is_empty() {
        return html! {
            <section class="comment-feed" aria-label="Comment feed">
                <div class="text-center text-muted py-5">{ "No comments yet. Be the first!" }</div>
            </section>
        };
    }

    // The pinned comment always comes first, whatever the order
    let pinned = p.view.pinned.iter().map(|c| (c, true));
    let rest = p.view.rest.iter().map(|c| (c, false));
    let cards = pinned.chain(rest).map(|(c, is_pinned)| {
        html! {
            <ui::CommentCard
                key={ c.id.as_str() }
                comment={ c.clone() }
                { is_pinned }
                celebration={ p.celebration.clone() }
                actions={ p.actions.clone() }
            />
        }
    });

    html! {
        <section class="comment-feed flex-fill overflow-auto" aria-label="Comment feed">
            { for cards }
        </section>
    }
}
