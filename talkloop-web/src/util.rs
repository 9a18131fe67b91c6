use std::time::Duration;

use anyhow::anyhow;
use futures::future::{abortable, AbortHandle};
use talkloop_client::api::Time;
use wasm_bindgen::{closure::Closure, JsCast};
use wasm_bindgen_futures::spawn_local;
use yew::{html::Scope, Callback, Component};

async fn sleep_for(d: Duration) {
    if let Err(e) = wasm_timer::Delay::new(d).await {
        tracing::error!(?e, "timer failed, firing early");
    }
}

/// Sends `msg` to the component after `after`, unless aborted first
pub fn schedule<C: Component>(link: &Scope<C>, after: Duration, msg: C::Message) -> AbortHandle {
    let (delay, handle) = abortable(sleep_for(after));
    let link = link.clone();
    spawn_local(async move {
        if delay.await.is_ok() {
            link.send_message(msg);
        }
    });
    handle
}

pub fn is_online() -> bool {
    web_sys::window()
        .map(|w| w.navigator().on_line())
        .unwrap_or(true)
}

/// Reports the window's online/offline events until dropped
pub struct ConnectivityListener {
    window: web_sys::Window,
    on_online: Closure<dyn Fn()>,
    on_offline: Closure<dyn Fn()>,
}

impl ConnectivityListener {
    pub fn new(on_change: Callback<bool>) -> anyhow::Result<ConnectivityListener> {
        let window = web_sys::window().ok_or_else(|| anyhow!("no global window"))?;
        let on_online = {
            let on_change = on_change.clone();
            Closure::<dyn Fn()>::new(move || on_change.emit(true))
        };
        let on_offline = Closure::<dyn Fn()>::new(move || on_change.emit(false));
        window
            .add_event_listener_with_callback("online", on_online.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("registering online listener: {e:?}"))?;
        window
            .add_event_listener_with_callback("offline", on_offline.as_ref().unchecked_ref())
            .map_err(|e| anyhow!("registering offline listener: {e:?}"))?;
        Ok(ConnectivityListener {
            window,
            on_online,
            on_offline,
        })
    }
}

impl Drop for ConnectivityListener {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("online", self.on_online.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("offline", self.on_offline.as_ref().unchecked_ref());
    }
}

pub fn format_age(date: Time, now: Time) -> String {
    let age = now - date;
    if age.num_minutes() < 1 {
        String::from("just now")
    } else if age.num_hours() < 1 {
        format!("{}m ago", age.num_minutes())
    } else if age.num_days() < 1 {
        format!("{}h ago", age.num_hours())
    } else if age.num_days() < 7 {
        format!("{}d ago", age.num_days())
    } else {
        date.format("%b %-d, %Y").to_string()
    }
}
