use std::cmp::Ordering;

use contracts::domain::a102_competitor_product::{CompetitorProduct, CompetitorProductId};
use leptos::prelude::*;

use super::super::api;
use super::scan_log_modal::ScanLogModal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::confirm::ConfirmService;
use crate::shared::components::search::{filter_active, SearchBox};
use crate::shared::components::table::{
    placeholder_colspan, ColumnSpec, HeaderCell, SortableHeaderCell, TableCellCheckbox,
    TableHeaderCheckbox, TableMessage,
};
use crate::shared::components::toast::ToastService;
use crate::shared::format::{format_datetime_opt, format_percent_opt, format_price, format_price_opt};
use crate::shared::icons::icon;
use crate::shared::list_state::{SelectionState, SortColumn, SortState};
use crate::shared::storage;

/// Sort survives reloads; the key is shared with nothing else.
const SORT_STORAGE_KEY: &str = "competitor_sort";

const COLUMNS: [ColumnSpec; 8] = [
    ColumnSpec::text("source", "Source"),
    ColumnSpec::text("title", "Title"),
    ColumnSpec::numeric("price", "Their price"),
    ColumnSpec::numeric("shop_price", "Our price"),
    ColumnSpec::numeric("gap", "Gap"),
    ColumnSpec::text("stock", "Stock"),
    ColumnSpec::text("last_seen", "Last seen"),
    ColumnSpec::text("actions", ""),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum CompetitorColumn {
    Source,
    Title,
    Price,
    ShopPrice,
    Gap,
    LastSeen,
}

impl SortColumn for CompetitorColumn {
    fn as_str(&self) -> &'static str {
        match self {
            CompetitorColumn::Source => "source",
            CompetitorColumn::Title => "title",
            CompetitorColumn::Price => "price",
            CompetitorColumn::ShopPrice => "shop_price",
            CompetitorColumn::Gap => "gap",
            CompetitorColumn::LastSeen => "last_seen",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "source" => Some(CompetitorColumn::Source),
            "title" => Some(CompetitorColumn::Title),
            "price" => Some(CompetitorColumn::Price),
            "shop_price" => Some(CompetitorColumn::ShopPrice),
            "gap" => Some(CompetitorColumn::Gap),
            "last_seen" => Some(CompetitorColumn::LastSeen),
            _ => None,
        }
    }
}

fn compare(a: &CompetitorProduct, b: &CompetitorProduct, column: CompetitorColumn) -> Ordering {
    let by_f64 = |x: Option<f64>, y: Option<f64>| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    match column {
        CompetitorColumn::Source => a.source.cmp(&b.source),
        CompetitorColumn::Title => a.title.cmp(&b.title),
        CompetitorColumn::Price => by_f64(Some(a.price), Some(b.price)),
        CompetitorColumn::ShopPrice => by_f64(a.shop_price, b.shop_price),
        CompetitorColumn::Gap => by_f64(a.price_gap_percent(), b.price_gap_percent()),
        CompetitorColumn::LastSeen => a.last_seen_at.cmp(&b.last_seen_at),
    }
}

fn initial_sort() -> SortState<CompetitorColumn> {
    storage::get_item(SORT_STORAGE_KEY)
        .as_deref()
        .and_then(SortState::decode)
        .unwrap_or_else(|| SortState::new(CompetitorColumn::Gap))
}

/// Competitors tab: the scraped competitor listings. Sort order persists
/// across reloads; checked rows feed the bulk "run scan" action.
#[component]
pub fn CompetitorProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let confirm = use_context::<ConfirmService>().expect("ConfirmService context not found");
    let toasts = use_context::<ToastService>().expect("ToastService context not found");

    let (all_items, set_all_items) = signal(Vec::<CompetitorProduct>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort, set_sort) = signal(initial_sort());
    let (selection, set_selection) = signal(SelectionState::<CompetitorProductId>::new());
    let (scan_busy, set_scan_busy) = signal(false);
    let (log_target, set_log_target) = signal(Option::<CompetitorProduct>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        // selection never survives a reload
        set_selection.set(SelectionState::new());
        let token = ctx.nav_token();
        leptos::task::spawn_local(async move {
            let result = api::fetch_competitor_products().await;
            if !ctx.accepts(token) {
                return;
            }
            match result {
                Ok(data) => set_all_items.set(data),
                Err(e) => {
                    set_all_items.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };
    load();

    let toggle_sort = move |column: CompetitorColumn| {
        set_sort.update(|s| s.toggle(column));
        storage::set_item(SORT_STORAGE_KEY, &sort.get_untracked().encode());
    };

    let visible_items = move || {
        let filter = filter_text.get().trim().to_lowercase();
        let mut items: Vec<CompetitorProduct> = all_items
            .get()
            .into_iter()
            .filter(|item| {
                if !filter_active(&filter) {
                    return true;
                }
                item.title.to_lowercase().contains(&filter)
                    || item.source.to_lowercase().contains(&filter)
                    || item.external_id.to_lowercase().contains(&filter)
            })
            .collect();

        let current = sort.get();
        items.sort_by(|a, b| current.direction.apply(compare(a, b, current.column)));
        items
    };

    let visible_ids =
        move || visible_items().iter().map(|item| item.id).collect::<Vec<_>>();

    let run_scan = move || {
        let ids = selection.get_untracked().visible_selected(&visible_ids());
        if ids.is_empty() {
            return;
        }
        let count = ids.len();
        confirm.request(
            "Run scan",
            format!("Queue a competitor scan for {count} selected listings?"),
            "Run scan",
            Callback::new(move |_| {
                let ids = ids.clone();
                set_scan_busy.set(true);
                leptos::task::spawn_local(async move {
                    match api::trigger_scan(ids).await {
                        Ok(result) => {
                            toasts.success(format!("Scan queued for {} listings", result.queued_count));
                            load();
                        }
                        Err(e) => toasts.error(format!("Scan failed: {e}")),
                    }
                    set_scan_busy.set(false);
                });
            }),
        );
    };

    let header = move |label: &'static str, column: CompetitorColumn, numeric: bool| {
        view! {
            <SortableHeaderCell
                label=label
                numeric=numeric
                indicator=Signal::derive(move || sort.get().indicator(column))
                on_sort=Callback::new(move |_| toggle_sort(column))
            />
        }
    };

    let colspan = placeholder_colspan(&COLUMNS, true);

    view! {
        <div class="list-view">
            <div class="toolbar">
                <SearchBox
                    on_change=Callback::new(move |value| set_filter_text.set(value))
                    placeholder="Search by title, source, listing id..."
                />
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || selection.get().is_empty() || scan_busy.get()
                    on:click=move |_| run_scan()
                >
                    {icon("play")}
                    {move || if scan_busy.get() { "Scanning..." } else { "Run scan" }}
                </button>
                <div class="toolbar__counters">
                    <span>
                        "Total: " <strong>{move || visible_items().len()}</strong>
                    </span>
                    <span>
                        "Selected: " <strong>{move || selection.get().len()}</strong>
                    </span>
                </div>
            </div>

            <div class="table-scroll">
                <table class="table">
                    <thead>
                        <tr>
                            <TableHeaderCheckbox
                                state=Signal::derive(move || {
                                    selection.get().select_all_state(&visible_ids())
                                })
                                on_change=Callback::new(move |checked| {
                                    let ids = visible_ids();
                                    set_selection.update(|s| s.set_all(ids, checked));
                                })
                            />
                            {header("Source", CompetitorColumn::Source, false)}
                            {header("Title", CompetitorColumn::Title, false)}
                            {header("Their price", CompetitorColumn::Price, true)}
                            {header("Our price", CompetitorColumn::ShopPrice, true)}
                            {header("Gap", CompetitorColumn::Gap, true)}
                            <HeaderCell label="Stock" />
                            {header("Last seen", CompetitorColumn::LastSeen, false)}
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
                            let items = visible_items();
                            if items.is_empty() {
                                return view! {
                                    <TableMessage colspan=colspan text="No competitor listings" />
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|item| {
                                    let id = item.id;
                                    let gap = item.price_gap_percent();
                                    let gap_class = match gap {
                                        Some(v) if v < 0.0 => {
                                            "table__cell--numeric price-gap price-gap--under"
                                        }
                                        Some(_) => "table__cell--numeric price-gap price-gap--over",
                                        None => "table__cell--numeric",
                                    };
                                    let log_item = item.clone();
                                    view! {
                                        <tr class="table__row">
                                            <TableCellCheckbox
                                                checked=Signal::derive(move || {
                                                    selection.get().contains(id)
                                                })
                                                on_change=Callback::new(move |_| {
                                                    set_selection.update(|s| s.toggle(id));
                                                })
                                            />
                                            <td>{item.source.clone()}</td>
                                            <td>{item.title.clone()}</td>
                                            <td class="table__cell--numeric">
                                                {format_price(item.price, &item.currency)}
                                            </td>
                                            <td class="table__cell--numeric">
                                                {format_price_opt(item.shop_price, &item.currency)}
                                            </td>
                                            <td class=gap_class>{format_percent_opt(gap)}</td>
                                            <td>{if item.in_stock { "In stock" } else { "Out" }}</td>
                                            <td>{format_datetime_opt(item.last_seen_at.as_ref())}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Scan history"
                                                    on:click=move |_| {
                                                        set_log_target.set(Some(log_item.clone()))
                                                    }
                                                >
                                                    {icon("file-text")}
                                                </button>
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

            {move || {
                log_target.get().map(|product| {
                    view! {
                        <ScanLogModal
                            product=product
                            on_close=Callback::new(move |_| set_log_target.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}
