use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use crate::shared::components::confirm::ConfirmService;
use crate::shared::components::toast::ToastService;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the app-wide stores via context; components never reach for
    // ambient globals.
    provide_context(AppGlobalContext::new());
    provide_context(ConfirmService::new());
    provide_context(ToastService::new());

    view! {
        <Shell />
    }
}
