use contracts::domain::a102_competitor_product::CompetitorProduct;
use contracts::domain::a106_scan_log::{ScanLog, ScanOutcome};
use leptos::prelude::*;

use super::super::api;
use crate::shared::components::modal::Modal;
use crate::shared::format::{format_datetime, format_datetime_opt};

fn outcome_class(outcome: ScanOutcome) -> &'static str {
    match outcome {
        ScanOutcome::Success => "badge badge--success",
        ScanOutcome::Partial => "badge badge--warning",
        ScanOutcome::Failed => "badge badge--error",
        ScanOutcome::Running => "badge",
    }
}

/// Read-only scan history for one competitor listing.
#[component]
pub fn ScanLogModal(product: CompetitorProduct, on_close: Callback<()>) -> impl IntoView {
    let (logs, set_logs) = signal(Option::<Vec<ScanLog>>::None);
    let (error, set_error) = signal(Option::<String>::None);

    let title = format!("Scan history: {}", product.title);
    let product_id = product.id;
    let source = product.source.clone();

    leptos::task::spawn_local(async move {
        match api::fetch_scan_logs(product_id, &source).await {
            Ok(data) => set_logs.set(Some(data)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    view! {
        <Modal title=title on_close=on_close>
            {move || {
                if let Some(e) = error.get() {
                    return view! { <div class="detail-error">{format!("Error: {e}")}</div> }
                        .into_any();
                }
                match logs.get() {
                    None => view! { <div class="detail-loading">"Loading..."</div> }.into_any(),
                    Some(entries) if entries.is_empty() => {
                        view! { <div class="detail-loading">"No scans recorded yet"</div> }
                            .into_any()
                    }
                    Some(entries) => view! {
                        <table class="table table--compact">
                            <thead>
                                <tr>
                                    <th class="table__header">"Started"</th>
                                    <th class="table__header">"Finished"</th>
                                    <th class="table__header">"Outcome"</th>
                                    <th class="table__header table__header--numeric">"Scanned"</th>
                                    <th class="table__header table__header--numeric">"Failed"</th>
                                    <th class="table__header">"Message"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {entries
                                    .iter()
                                    .map(|log| {
                                        view! {
                                            <tr>
                                                <td>{format_datetime(&log.started_at)}</td>
                                                <td>{format_datetime_opt(log.finished_at.as_ref())}</td>
                                                <td>
                                                    <span class=outcome_class(log.outcome)>
                                                        {log.outcome.label()}
                                                    </span>
                                                </td>
                                                <td class="table__cell--numeric">{log.items_scanned}</td>
                                                <td class="table__cell--numeric">{log.items_failed}</td>
                                                <td>
                                                    {log.message.clone().unwrap_or_else(|| "-".to_string())}
                                                </td>
                                            </tr>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </tbody>
                        </table>
                    }
                    .into_any(),
                }
            }}
        </Modal>
    }
}
