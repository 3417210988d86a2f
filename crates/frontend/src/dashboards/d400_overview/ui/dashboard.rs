use contracts::dashboards::d400_overview::DashboardSummary;
use contracts::domain::a106_scan_log::{ScanLog, ScanOutcome};
use leptos::prelude::*;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::stat_card::StatCard;
use crate::shared::components::table::{placeholder_colspan, ColumnSpec, TableMessage};
use crate::shared::format::{format_datetime, format_datetime_opt};
use crate::shared::icons::icon;

const SCAN_COLUMNS: [ColumnSpec; 5] = [
    ColumnSpec::text("source", "Source"),
    ColumnSpec::text("started", "Started"),
    ColumnSpec::text("outcome", "Outcome"),
    ColumnSpec::numeric("scanned", "Scanned"),
    ColumnSpec::numeric("failed", "Failed"),
];

fn outcome_class(outcome: ScanOutcome) -> &'static str {
    match outcome {
        ScanOutcome::Success => "badge badge--success",
        ScanOutcome::Partial => "badge badge--warning",
        ScanOutcome::Failed => "badge badge--error",
        ScanOutcome::Running => "badge",
    }
}

/// Landing tab: headline counters plus the most recent scans. Both
/// resources load concurrently; if either fails the whole section shows
/// the error.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (summary, set_summary) = signal(Option::<DashboardSummary>::None);
    let (recent, set_recent) = signal(Vec::<ScanLog>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        let token = ctx.nav_token();
        leptos::task::spawn_local(async move {
            let (summary_result, recent_result) =
                futures::future::join(api::fetch_summary(), api::fetch_recent_scans()).await;
            if !ctx.accepts(token) {
                return;
            }
            match (summary_result, recent_result) {
                (Ok(s), Ok(r)) => {
                    set_summary.set(Some(s));
                    set_recent.set(r);
                }
                (Err(e), _) | (_, Err(e)) => {
                    set_summary.set(None);
                    set_recent.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };
    load();

    let stat = move |pick: fn(&DashboardSummary) -> String| {
        Signal::derive(move || summary.get().map(|s| pick(&s)))
    };

    let colspan = placeholder_colspan(&SCAN_COLUMNS, false);

    view! {
        <div class="dashboard">
            <div class="toolbar">
                <h2 class="section-title">"Overview"</h2>
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
                    label="Products"
                    icon_name="package"
                    value=stat(|s| s.product_count.to_string())
                />
                <StatCard
                    label="Mappings"
                    icon_name="link"
                    value=stat(|s| s.mapping_count.to_string())
                />
                <StatCard
                    label="Competitor listings"
                    icon_name="crosshair"
                    value=stat(|s| s.competitor_count.to_string())
                />
                <StatCard
                    label="Supplier products"
                    icon_name="truck"
                    value=stat(|s| s.supplier_count.to_string())
                />
                <StatCard
                    label="Plans pending"
                    icon_name="tag"
                    value=stat(|s| s.plans_pending.to_string())
                />
                <StatCard
                    label="Last scan"
                    icon_name="activity"
                    value=stat(|s| format_datetime_opt(s.last_scan_at.as_ref()))
                />
            </div>

            <h3 class="section-title">"Recent scans"</h3>
            <div class="table-scroll">
                <table class="table">
                    <thead>
                        <tr>
                            <th class="table__header">"Source"</th>
                            <th class="table__header">"Started"</th>
                            <th class="table__header">"Outcome"</th>
                            <th class="table__header table__header--numeric">"Scanned"</th>
                            <th class="table__header table__header--numeric">"Failed"</th>
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
                            let logs = recent.get();
                            if logs.is_empty() {
                                return view! {
                                    <TableMessage colspan=colspan text="No scans yet" />
                                }
                                .into_any();
                            }
                            logs.into_iter()
                                .map(|log| {
                                    view! {
                                        <tr class="table__row">
                                            <td>{log.source.clone()}</td>
                                            <td>{format_datetime(&log.started_at)}</td>
                                            <td>
                                                <span class=outcome_class(log.outcome)>
                                                    {log.outcome.label()}
                                                </span>
                                            </td>
                                            <td class="table__cell--numeric">{log.items_scanned}</td>
                                            <td class="table__cell--numeric">{log.items_failed}</td>
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
