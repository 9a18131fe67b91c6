use yew::prelude::*;

#[derive(Clone, PartialEq, Properties)]
pub struct OfflineBannerProps {
    pub online: bool,
}

#[function_component(OfflineBanner)]
pub fn offline_banner(p: &OfflineBannerProps) -> Html {
    html! {
        <div
            class={ classes!(
                "offline-banner", p.online.then(|| "is-online"),
                "w-100", "text-center", "py-2", "fw-semibold"
            ) }
            role="status"
            aria-hidden={ if p.online { "true" } else { "false" } }
        >
            { "You are offline. Changes will be saved locally." }
        </div>
    }
}
