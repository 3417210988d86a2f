use contracts::dashboards::d401_analytics::{AnalyticsPeriod, AnalyticsSummary, PricePoint};
use leptos::prelude::*;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{placeholder_colspan, ColumnSpec, TableMessage};
use crate::shared::format::{format_date, format_percent, format_price};
use crate::shared::icons::icon;

const HISTORY_COLUMNS: [ColumnSpec; 3] = [
    ColumnSpec::text("date", "Date"),
    ColumnSpec::numeric("shop", "Avg shop price"),
    ColumnSpec::numeric("competitor", "Avg competitor price"),
];

/// Analytics tab: market-position summary and the aggregated price
/// history for a selectable period. Both resources load concurrently.
#[component]
pub fn AnalyticsDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (period, set_period) = signal(AnalyticsPeriod::Last30Days);
    let (summary, set_summary) = signal(Option::<AnalyticsSummary>::None);
    let (history, set_history) = signal(Vec::<PricePoint>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        let selected = period.get_untracked();
        let token = ctx.nav_token();
        leptos::task::spawn_local(async move {
            let (summary_result, history_result) = futures::future::join(
                api::fetch_summary(selected),
                api::fetch_price_history(selected),
            )
            .await;
            if !ctx.accepts(token) {
                return;
            }
            // a stale period response must not overwrite a newer selection
            if period.get_untracked() != selected {
                return;
            }
            match (summary_result, history_result) {
                (Ok(s), Ok(h)) => {
                    set_summary.set(Some(s));
                    set_history.set(h);
                }
                (Err(e), _) | (_, Err(e)) => {
                    set_summary.set(None);
                    set_history.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };
    load();

    let stat = move |pick: fn(&AnalyticsSummary) -> String| {
        Signal::derive(move || summary.get().map(|s| pick(&s)))
    };

    let colspan = placeholder_colspan(&HISTORY_COLUMNS, false);

    view! {
        <div class="dashboard">
            <div class="toolbar">
                <h2 class="section-title">"Analytics"</h2>
                <select
                    class="select"
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        let selected = AnalyticsPeriod::ALL
                            .iter()
                            .copied()
                            .find(|p| p.query_value() == value)
                            .unwrap_or(AnalyticsPeriod::Last30Days);
                        set_period.set(selected);
                        load();
                    }
                >
                    {AnalyticsPeriod::ALL
                        .iter()
                        .map(|p| {
                            let selected = *p == AnalyticsPeriod::Last30Days;
                            view! {
                                <option value=p.query_value() selected=selected>
                                    {p.label()}
                                </option>
                            }
                        })
                        .collect::<Vec<_>>()}
                </select>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </div>

            {move || {
                error
                    .get()
                    .map(|e| view! { <div class="section-error">{format!("Error: {e}")}</div> })
            }}

            <div class="stat-grid">
                <StatCard
                    label="Avg price gap"
                    icon_name="activity"
                    value=stat(|s| format_percent(s.avg_price_gap_percent))
                />
                <StatCard
                    label="Above market"
                    icon_name="bar-chart"
                    value=stat(|s| s.products_above_market.to_string())
                    subtitle="competitor asks more"
                />
                <StatCard
                    label="Below market"
                    icon_name="bar-chart"
                    value=stat(|s| s.products_below_market.to_string())
                    subtitle="competitor asks less"
                />
                <StatCard
                    label="Reprices"
                    icon_name="tag"
                    value=stat(|s| s.reprice_events.to_string())
                />
            </div>

            <h3 class="section-title">"Price history"</h3>
            <div class="table-scroll">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__header">"Date"</th>
                            <th class="table__header table__header--numeric">"Avg shop price"</th>
                            <th class="table__header table__header--numeric">
                                "Avg competitor price"
                            </th>
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
                            let points = history.get();
                            if points.is_empty() {
                                return view! {
                                    <TableMessage colspan=colspan text="No data for this period" />
                                }
                                .into_any();
                            }
                            let currency = summary
                                .get()
                                .map(|s| s.currency)
                                .unwrap_or_default();
                            points
                                .into_iter()
                                .map(|point| {
                                    view! {
                                        <tr class="table__row">
                                            <td>{format_date(&point.date)}</td>
                                            <td class="table__cell--numeric">
                                                {format_price(point.avg_shop_price, &currency)}
                                            </td>
                                            <td class="table__cell--numeric">
                                                {format_price(point.avg_competitor_price, &currency)}
                                            </td>
                                        </tr>
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
