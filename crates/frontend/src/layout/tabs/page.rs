//! Tab page wrappers.
//!
//! Static tabs are mounted once and toggled with a `hidden` class, so
//! their in-memory state (filters, loaded rows) survives a tab switch.
//! Dynamic tabs share one host container and are torn down and rebuilt
//! on every activation.

use leptos::prelude::*;

use super::registry::render_tab_content;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{TabKey, DYNAMIC_CONTAINER_ID};

/// A tab with its own dedicated container. Content mounts on the first
/// activation and stays mounted; afterwards only visibility changes.
#[component]
pub fn StaticTabPage(key: TabKey) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let is_active = move || ctx.active() == key;

    let (mounted, set_mounted) = signal(false);
    Effect::new(move |_| {
        if is_active() && !mounted.get_untracked() {
            set_mounted.set(true);
        }
    });

    view! {
        <section
            id=key.content_container_id()
            class="tab-page"
            class:tab-page--hidden=move || !is_active()
            data-tab-key=key.as_str()
        >
            {move || mounted.get().then(|| render_tab_content(key))}
        </section>
    }
}

/// The shared container for dynamic tabs. Re-creates the content view
/// whenever the active dynamic tab changes, and renders nothing while a
/// static tab is active.
#[component]
pub fn DynamicTabHost() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <section id=DYNAMIC_CONTAINER_ID class="tab-page">
            {move || {
                let active = ctx.active();
                if active.is_dynamic() {
                    render_tab_content(active)
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </section>
    }
}
