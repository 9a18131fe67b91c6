use yew::prelude::*;

#[function_component(Header)]
pub fn header() -> Html {
    html! {
        <header class="app-header d-flex align-items-center px-4 py-3">
            <span class="bi-chat-heart fs-3 me-2" aria-hidden="true"></span>
            <h1 class="fs-4 m-0">{ "TalkLoop" }</h1>
        </header>
    }
}
