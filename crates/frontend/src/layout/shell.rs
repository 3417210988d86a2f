use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::nav::TabBar;
use crate::layout::tabs::{DynamicTabHost, StaticTabPage, TabKey};
use crate::shared::components::confirm::ConfirmDialog;
use crate::shared::components::toast::ToastHost;

/// Root layout: header with the tab bar, one section per static tab plus
/// the shared dynamic host, and the app-wide overlays.
#[component]
pub fn Shell() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    // Runs once: picks up #tabname and subscribes to hashchange.
    ctx.init_hash_integration();

    view! {
        <div class="app">
            <header class="app-header">
                <div class="app-header__title">
                    <h1>"Price Monitor"</h1>
                    <span class="app-header__subtitle">"admin"</span>
                </div>
                <TabBar />
            </header>
            <main class="app-content">
                {TabKey::ALL
                    .iter()
                    .filter(|key| !key.is_dynamic())
                    .map(|key| view! { <StaticTabPage key=*key /> })
                    .collect::<Vec<_>>()}
                <DynamicTabHost />
            </main>
            <ConfirmDialog />
            <ToastHost />
        </div>
    }
}
