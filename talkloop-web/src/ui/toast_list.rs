use talkloop_client::{ToastId, Toasts};
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct ToastListProps {
    pub toasts: Toasts,
    pub on_undo: Callback<ToastId>,
}

#[function_component(ToastList)]
pub fn toast_list(p: &ToastListProps) -> Html {
    html! {
        <div class="toast-stack position-fixed bottom-0 end-0 p-3">
            { for p.toasts.iter().map(|t| {
                let id = t.id;
                html! {
                    <div key={ id.0.to_string() } class="toast show d-flex align-items-center p-2 mb-2" role="status">
                        <span class="flex-fill me-2">{ &t.message }</span>
                        { for t.has_undo().then(|| html! {
                            <button
                                type="button"
                                class="btn btn-sm btn-primary"
                                onclick={ p.on_undo.reform(move |_| id) }
                            >
                                { "Undo" }
                            </button>
                        }) }
                    </div>
                }
            }) }
        </div>
    }
}
