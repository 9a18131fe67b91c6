use yew::prelude::*;

/// Text of a comment or reply, or an input to edit it while `edit` holds a draft
pub fn comment_text(
    text: &str,
    edit: UseStateHandle<Option<String>>,
    on_validate: Callback<String>,
) -> Html {
    let draft = match (*edit).clone() {
        None => return html! { <p class="comment-text mb-2">{ text }</p> },
        Some(draft) => draft,
    };
    let on_save = {
        let draft = draft.clone();
        on_validate.reform(move |_: MouseEvent| draft.clone())
    };
    html! {
        <div class="comment-edit d-flex gap-2 mb-2">
            <input
                type="text"
                class="form-control"
                aria-label="Edit comment"
                value={ draft }
                oninput={ let edit = edit.clone(); Callback::from(move |e: InputEvent| {
                    let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                    edit.set(Some(input.value()))
                }) }
                onkeyup={ let edit = edit.clone(); Callback::from(move |e: KeyboardEvent| {
                    match &e.key() as &str {
                        "Enter" => {
                            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
                            on_validate.emit(input.value());
                        }
                        "Escape" => edit.set(None),
                        _ => (),
                    }
                }) }
            />
            <button type="button" class="btn btn-sm btn-primary" onclick={ on_save }>
                { "Save" }
            </button>
            <button
                type="button"
                class="btn btn-sm btn-light"
                onclick={ Callback::from(move |_| edit.set(None)) }
            >
                { "Cancel" }
            </button>
        </div>
    }
}
