use contracts::domain::a105_price_plan::{PricePlan, PricePlanId, PricePlanStatus};
use leptos::prelude::*;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::confirm::ConfirmService;
use crate::shared::components::table::{placeholder_colspan, ColumnSpec, HeaderCell, TableMessage};
use crate::shared::components::toast::ToastService;
use crate::shared::format::{format_datetime, format_percent, format_price};
use crate::shared::icons::icon;

const COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec::text("name", "Plan"),
    ColumnSpec::text("status", "Status"),
    ColumnSpec::numeric("lines", "Lines"),
    ColumnSpec::text("created", "Created"),
    ColumnSpec::text("actions", ""),
];

fn status_class(status: PricePlanStatus) -> &'static str {
    match status {
        PricePlanStatus::Draft => "badge",
        PricePlanStatus::Applied => "badge badge--success",
        PricePlanStatus::PartiallyApplied => "badge badge--warning",
        PricePlanStatus::Failed => "badge badge--error",
    }
}

/// Price-plans tab: generated plans with their proposed changes. A plan
/// expands in place; applying is confirm-gated and reports both counts.
#[component]
pub fn PricePlanList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let confirm = use_context::<ConfirmService>().expect("ConfirmService context not found");
    let toasts = use_context::<ToastService>().expect("ToastService context not found");

    let (plans, set_plans) = signal(Vec::<PricePlan>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (expanded, set_expanded) = signal(Option::<PricePlanId>::None);
    let (busy, set_busy) = signal(false);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        let token = ctx.nav_token();
        leptos::task::spawn_local(async move {
            let result = api::fetch_price_plans().await;
            if !ctx.accepts(token) {
                return;
            }
            match result {
                Ok(data) => set_plans.set(data),
                Err(e) => {
                    set_plans.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };
    load();

    let apply = move |plan: &PricePlan| {
        let id = plan.id;
        let line_count = plan.lines.len();
        confirm.request(
            "Apply price plan",
            format!("Apply {line_count} price changes to the shop? This cannot be undone."),
            "Apply",
            Callback::new(move |_| {
                set_busy.set(true);
                leptos::task::spawn_local(async move {
                    match api::apply_plan(id).await {
                        Ok(result) => {
                            if result.failed_count == 0 {
                                toasts.success(format!("Applied {} changes", result.applied_count));
                            } else {
                                toasts.error(format!(
                                    "Applied {}, failed {}: {}",
                                    result.applied_count,
                                    result.failed_count,
                                    result.errors.join("; ")
                                ));
                            }
                            load();
                        }
                        Err(e) => toasts.error(format!("Apply failed: {e}")),
                    }
                    set_busy.set(false);
                });
            }),
        );
    };

    let regenerate = move || {
        confirm.request(
            "Regenerate plans",
            "Discard draft plans and compute a fresh one from the latest scan data?",
            "Regenerate",
            Callback::new(move |_| {
                set_busy.set(true);
                leptos::task::spawn_local(async move {
                    match api::generate_plan().await {
                        Ok(plan) => {
                            toasts.success(format!(
                                "Plan \"{}\" generated ({} lines)",
                                plan.name,
                                plan.lines.len()
                            ));
                            load();
                        }
                        Err(e) => toasts.error(format!("Generation failed: {e}")),
                    }
                    set_busy.set(false);
                });
            }),
        );
    };

    let colspan = placeholder_colspan(&COLUMNS, false);

    view! {
        <div class="list-view">
            <div class="toolbar">
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || busy.get()
                    on:click=move |_| regenerate()
                >
                    {icon("play")}
                    "Regenerate"
                </button>
                <div class="toolbar__counters">
                    <span>
                        "Plans: " <strong>{move || plans.get().len()}</strong>
                    </span>
                </div>
            </div>

            <div class="table-scroll">
                <table class="table">
                    <thead>
                        <tr>
                            <HeaderCell label="Plan" />
                            <HeaderCell label="Status" />
                            <HeaderCell label="Lines" numeric=true />
                            <HeaderCell label="Created" />
                            <HeaderCell label="" />
                        </tr>
                    </thead>
                    <tbody>
                        {move || {
                            if is_loading.get() {
                                return view! {
                                    <TableMessage colspan=colspan text="Loading..." />
                                }
                                .into_any();
                            }
                            if let Some(e) = error.get() {
                                return view! {
                                    <TableMessage colspan=colspan text=format!("Error: {e}") error=true />
                                }
                                .into_any();
                            }
                            let items = plans.get();
                            if items.is_empty() {
                                return view! {
                                    <TableMessage colspan=colspan text="No price plans yet - run Regenerate" />
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|plan| {
                                    let id = plan.id;
                                    let is_draft = plan.status == PricePlanStatus::Draft;
                                    let is_expanded = move || expanded.get() == Some(id);
                                    let plan_for_apply = plan.clone();
                                    let lines = plan.lines.clone();
                                    let currency = plan.currency.clone();
                                    view! {
                                        <tr
                                            class="table__row table__row--clickable"
                                            on:click=move |_| {
                                                set_expanded.update(|current| {
                                                    *current = if *current == Some(id) {
                                                        None
                                                    } else {
                                                        Some(id)
                                                    };
                                                });
                                            }
                                        >
                                            <td>{plan.name.clone()}</td>
                                            <td>
                                                <span class=status_class(plan.status)>
                                                    {plan.status.label()}
                                                </span>
                                            </td>
                                            <td class="table__cell--numeric">{plan.lines.len()}</td>
                                            <td>{format_datetime(&plan.created_at)}</td>
                                            <td class="table__actions">
                                                {is_draft.then(|| {
                                                    view! {
                                                        <button
                                                            class="button button--primary button--small"
                                                            disabled=move || busy.get()
                                                            on:click=move |ev| {
                                                                ev.stop_propagation();
                                                                apply(&plan_for_apply);
                                                            }
                                                        >
                                                            "Apply"
                                                        </button>
                                                    }
                                                })}
                                            </td>
                                        </tr>
                                        {move || {
                                            is_expanded().then(|| {
                                                view! {
                                                    <tr class="table__row--detail">
                                                        <td colspan=colspan.to_string()>
                                                            <PlanLines
                                                                lines=lines.clone()
                                                                currency=currency.clone()
                                                            />
                                                        </td>
                                                    </tr>
                                                }
                                            })
                                        }}
                                    }
                                })
                                .collect::<Vec<_>>()
                                .into_any()
                        }}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[component]
fn PlanLines(
    lines: Vec<contracts::domain::a105_price_plan::PricePlanLine>,
    currency: String,
) -> impl IntoView {
    view! {
        <table class="table table--compact">
            <thead>
                <tr>
                    <th class="table__header">"SKU"</th>
                    <th class="table__header">"Title"</th>
                    <th class="table__header table__header--numeric">"Current"</th>
                    <th class="table__header table__header--numeric">"Proposed"</th>
                    <th class="table__header table__header--numeric">"Delta"</th>
                </tr>
            </thead>
            <tbody>
                {lines
                    .iter()
                    .map(|line| {
                        let delta = line.delta();
                        let delta_percent = if line.current_price != 0.0 {
                            delta / line.current_price * 100.0
                        } else {
                            0.0
                        };
                        let delta_class = if delta < 0.0 {
                            "table__cell--numeric price-gap price-gap--under"
                        } else {
                            "table__cell--numeric price-gap price-gap--over"
                        };
                        view! {
                            <tr>
                                <td>{line.sku.clone()}</td>
                                <td>{line.title.clone()}</td>
                                <td class="table__cell--numeric">
                                    {format_price(line.current_price, &currency)}
                                </td>
                                <td class="table__cell--numeric">
                                    {format_price(line.proposed_price, &currency)}
                                </td>
                                <td class=delta_class>{format_percent(delta_percent)}</td>
                            </tr>
                        }
                    })
                    .collect::<Vec<_>>()}
            </tbody>
        </table>
    }
}
