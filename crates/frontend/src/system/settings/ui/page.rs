use contracts::system::settings::{AppSettings, PriceRounding};
use leptos::prelude::*;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::toast::ToastService;
use crate::shared::icons::icon;

fn rounding_value(rounding: PriceRounding) -> &'static str {
    match rounding {
        PriceRounding::None => "none",
        PriceRounding::EndNinetyNine => "end99",
        PriceRounding::NearestTen => "ten",
    }
}

fn rounding_from_value(value: &str) -> PriceRounding {
    match value {
        "end99" => PriceRounding::EndNinetyNine,
        "ten" => PriceRounding::NearestTen,
        _ => PriceRounding::None,
    }
}

/// Settings tab: load the tool-wide knobs into a form, save them back.
#[component]
pub fn SettingsPage() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService context not found");

    let (settings, set_settings) = signal(Option::<AppSettings>::None);
    let (error, set_error) = signal(Option::<String>::None);
    let (saving, set_saving) = signal(false);

    let load = move || {
        set_error.set(None);
        let token = ctx.nav_token();
        leptos::task::spawn_local(async move {
            let result = api::fetch_settings().await;
            if !ctx.accepts(token) {
                return;
            }
            match result {
                Ok(data) => set_settings.set(Some(data)),
                Err(e) => set_error.set(Some(e)),
            }
        });
    };
    load();

    let update = move |apply: &dyn Fn(&mut AppSettings)| {
        set_settings.update(|current| {
            if let Some(settings) = current {
                apply(settings);
            }
        });
    };

    let save = move || {
        let Some(current) = settings.get_untracked() else {
            return;
        };
        set_saving.set(true);
        leptos::task::spawn_local(async move {
            match api::save_settings(&current).await {
                Ok(saved) => {
                    set_settings.set(Some(saved));
                    toasts.success("Settings saved");
                }
                Err(e) => toasts.error(format!("Save failed: {e}")),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="settings-view">
            <div class="toolbar">
                <h2 class="section-title">"Settings"</h2>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Reload"
                </button>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="section-error">{format!("Error: {e}")}</div> })
            }}

            {move || {
                let Some(current) = settings.get() else {
                    return view! { <div class="detail-loading">"Loading..."</div> }.into_any();
                };
                view! {
                    <div class="form form--settings">
                        <label class="form__field">
                            <span class="form__label">"Scan interval (minutes)"</span>
                            <input
                                type="number"
                                class="input"
                                min="5"
                                prop:value=current.scan_interval_minutes.to_string()
                                on:change=move |ev| {
                                    if let Ok(minutes) = event_target_value(&ev).parse::<u32>() {
                                        update(&|s: &mut AppSettings| {
                                            s.scan_interval_minutes = minutes;
                                        });
                                    }
                                }
                            />
                        </label>

                        <label class="form__field">
                            <span class="form__label">"Price rounding"</span>
                            <select
                                class="select"
                                on:change=move |ev| {
                                    let rounding = rounding_from_value(&event_target_value(&ev));
                                    update(&|s: &mut AppSettings| s.price_rounding = rounding);
                                }
                            >
                                {PriceRounding::ALL
                                    .iter()
                                    .map(|rounding| {
                                        view! {
                                            <option
                                                value=rounding_value(*rounding)
                                                selected=current.price_rounding == *rounding
                                            >
                                                {rounding.label()}
                                            </option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>

                        <label class="form__field">
                            <span class="form__label">"Margin floor (%)"</span>
                            <input
                                type="number"
                                class="input"
                                step="0.5"
                                prop:value=current.margin_floor_percent.to_string()
                                on:change=move |ev| {
                                    if let Ok(floor) = event_target_value(&ev).parse::<f64>() {
                                        update(&|s: &mut AppSettings| {
                                            s.margin_floor_percent = floor;
                                        });
                                    }
                                }
                            />
                        </label>

                        <label class="form__field form__field--inline">
                            <input
                                type="checkbox"
                                prop:checked=current.auto_apply_plans
                                on:change=move |ev| {
                                    let checked = event_target_checked(&ev);
                                    update(&|s: &mut AppSettings| s.auto_apply_plans = checked);
                                }
                            />
                            <span>"Apply generated plans automatically"</span>
                        </label>

                        <label class="form__field">
                            <span class="form__label">"Notification email"</span>
                            <input
                                type="email"
                                class="input"
                                placeholder="ops@example.com"
                                prop:value=current.notify_email.clone().unwrap_or_default()
                                on:change=move |ev| {
                                    let value = event_target_value(&ev);
                                    update(&|s: &mut AppSettings| {
                                        s.notify_email =
                                            (!value.trim().is_empty()).then(|| value.trim().to_string());
                                    });
                                }
                            />
                        </label>

                        <div class="form__actions">
                            <button
                                class="button button--primary"
                                disabled=move || saving.get()
                                on:click=move |_| save()
                            >
                                {icon("check")}
                                {move || if saving.get() { "Saving..." } else { "Save settings" }}
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </div>
    }
}
