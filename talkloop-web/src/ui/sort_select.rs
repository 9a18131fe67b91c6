use talkloop_client::api::SortOrder;
use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct SortSelectProps {
    pub value: SortOrder,
    pub on_change: Callback<SortOrder>,
}

#[function_component(SortSelect)]
pub fn sort_select(p: &SortSelectProps) -> Html {
    let on_change = p.on_change.clone();
    let onchange = Callback::from(move |e: web_sys::Event| {
        let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
        match select.value().parse() {
            Ok(order) => on_change.emit(order),
            Err(e) => tracing::warn!("ignoring sort selection: {e}"),
        }
    });
    html! {
        <select class="form-select w-auto" aria-label="Sort comments" {onchange}>
            { for SortOrder::all().into_iter().map(|o| html! {
                <option value={ o.name() } selected={ o == p.value }>{ o.label() }</option>
            }) }
        </select>
    }
}
