//! Link Component
//!
//! Anchor that navigates through the History API instead of reloading.

use leptos::prelude::*;

use crate::context::use_app_context;

/// In-app link. Modified clicks (new tab, etc.) fall through to the browser.
#[component]
pub fn Link(
    #[prop(into)] href: Signal<String>,
    #[prop(into)] class: Signal<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_app_context();

    let on_click = move |ev: web_sys::MouseEvent| {
        if ev.button() != 0 || ev.ctrl_key() || ev.meta_key() || ev.shift_key() || ev.alt_key() {
            return;
        }
        ev.prevent_default();
        ctx.navigate(&href.get_untracked());
    };

    view! {
        <a href=move || href.get() class=move || class.get() on:click=on_click>
            {children()}
        </a>
    }
}
