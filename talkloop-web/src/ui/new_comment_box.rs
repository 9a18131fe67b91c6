use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct NewCommentBoxProps {
    pub placeholder: AttrValue,
    pub submit_label: AttrValue,
    pub on_post: Callback<String>,
}

/// Text area with a submit button, also used for replies
///
/// Ctrl+Enter (or Cmd+Enter) submits. Blank text is never submitted.
#[function_component(NewCommentBox)]
pub fn new_comment_box(p: &NewCommentBoxProps) -> Html {
    let text = use_state(String::new);
    let is_blank = text.trim().is_empty();

    let submit = {
        let text = text.clone();
        let on_post = p.on_post.clone();
        Callback::from(move |()| {
            if text.trim().is_empty() {
                return;
            }
            on_post.emit((*text).clone());
            text.set(String::new());
        })
    };

    html! {
        <div class="new-comment-box d-flex flex-column gap-2 mb-3">
            <textarea
                class="form-control"
                rows="2"
                placeholder={ p.placeholder.clone() }
                aria-label={ p.placeholder.clone() }
                value={ (*text).clone() }
                oninput={ let text = text.clone(); Callback::from(move |e: InputEvent| {
                    let area: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                    text.set(area.value());
                }) }
                onkeydown={ let submit = submit.clone(); Callback::from(move |e: KeyboardEvent| {
                    if e.key() == "Enter" && (e.ctrl_key() || e.meta_key()) {
                        e.prevent_default();
                        submit.emit(());
                    }
                }) }
            />
            <div class="d-flex justify-content-end">
                <button
                    type="button"
                    class="btn btn-primary"
                    disabled={ is_blank }
                    onclick={ submit.reform(|_| ()) }
                >
                    { &*p.submit_label }
                </button>
            </div>
        </div>
    }
}
