use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::TabKey;
use crate::shared::icons::icon;

/// The tab navigation bar. Exactly one button carries the active class at
/// any time; clicking pushes the tab name into the URL hash.
#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    view! {
        <nav class="tab-bar">
            {TabKey::ALL
                .iter()
                .map(|key| {
                    let key = *key;
                    view! {
                        <button
                            class="tab-bar__item"
                            class:tab-bar__item--active=move || ctx.active() == key
                            data-tab=key.as_str()
                            on:click=move |_| ctx.activate(key, true)
                        >
                            {icon(key.icon_name())}
                            <span>{key.label()}</span>
                        </button>
                    }
                })
                .collect::<Vec<_>>()}
        </nav>
    }
}
