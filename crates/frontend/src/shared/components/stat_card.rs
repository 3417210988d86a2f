use crate::shared::icons::icon;
use leptos::prelude::*;

/// Small dashboard card: label, icon and one pre-formatted value.
/// `None` renders the loading placeholder.
#[component]
pub fn StatCard(
    label: &'static str,
    icon_name: &'static str,
    #[prop(into)] value: Signal<Option<String>>,
    #[prop(optional)] subtitle: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__body">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">
                    {move || value.get().unwrap_or_else(|| "…".to_string())}
                </div>
                {subtitle.map(|text| view! { <div class="stat-card__subtitle">{text}</div> })}
            </div>
        </div>
    }
}
