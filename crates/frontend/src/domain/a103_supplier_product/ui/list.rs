use std::cmp::Ordering;

use contracts::domain::a103_supplier_product::{SupplierProduct, SupplierProductId};
use leptos::prelude::*;

use super::super::api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::confirm::ConfirmService;
use crate::shared::components::search::{filter_active, SearchBox};
use crate::shared::components::table::{
    placeholder_colspan, ColumnSpec, SortableHeaderCell, TableCellCheckbox, TableHeaderCheckbox,
    TableMessage,
};
use crate::shared::components::toast::ToastService;
use crate::shared::format::{format_percent_opt, format_price, format_price_opt};
use crate::shared::icons::icon;
use crate::shared::list_state::{SelectionState, SortColumn, SortState};

const COLUMNS: [ColumnSpec; 7] = [
    ColumnSpec::text("supplier", "Supplier"),
    ColumnSpec::text("sku", "SKU"),
    ColumnSpec::text("title", "Title"),
    ColumnSpec::numeric("purchase_price", "Purchase price"),
    ColumnSpec::numeric("stock", "Stock"),
    ColumnSpec::numeric("shop_price", "Our price"),
    ColumnSpec::numeric("margin", "Margin"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum SupplierColumn {
    Supplier,
    Sku,
    Title,
    PurchasePrice,
    Stock,
    ShopPrice,
    Margin,
}

impl SortColumn for SupplierColumn {
    fn as_str(&self) -> &'static str {
        match self {
            SupplierColumn::Supplier => "supplier",
            SupplierColumn::Sku => "sku",
            SupplierColumn::Title => "title",
            SupplierColumn::PurchasePrice => "purchase_price",
            SupplierColumn::Stock => "stock",
            SupplierColumn::ShopPrice => "shop_price",
            SupplierColumn::Margin => "margin",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "supplier" => Some(SupplierColumn::Supplier),
            "sku" => Some(SupplierColumn::Sku),
            "title" => Some(SupplierColumn::Title),
            "purchase_price" => Some(SupplierColumn::PurchasePrice),
            "stock" => Some(SupplierColumn::Stock),
            "shop_price" => Some(SupplierColumn::ShopPrice),
            "margin" => Some(SupplierColumn::Margin),
            _ => None,
        }
    }
}

fn compare(a: &SupplierProduct, b: &SupplierProduct, column: SupplierColumn) -> Ordering {
    let by_f64 = |x: Option<f64>, y: Option<f64>| x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    match column {
        SupplierColumn::Supplier => a.supplier.cmp(&b.supplier),
        SupplierColumn::Sku => a.sku.cmp(&b.sku),
        SupplierColumn::Title => a.title.cmp(&b.title),
        SupplierColumn::PurchasePrice => by_f64(Some(a.purchase_price), Some(b.purchase_price)),
        SupplierColumn::Stock => a.stock.cmp(&b.stock),
        SupplierColumn::ShopPrice => by_f64(a.shop_price, b.shop_price),
        SupplierColumn::Margin => by_f64(a.margin_percent(), b.margin_percent()),
    }
}

/// Suppliers tab: latest supplier scan results. Checked rows feed the
/// bulk "update prices" action; "scan now" queues a fresh catalog scan.
#[component]
pub fn SupplierProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let confirm = use_context::<ConfirmService>().expect("ConfirmService context not found");
    let toasts = use_context::<ToastService>().expect("ToastService context not found");

    let (all_items, set_all_items) = signal(Vec::<SupplierProduct>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort, set_sort) = signal(SortState::new(SupplierColumn::Margin));
    let (selection, set_selection) = signal(SelectionState::<SupplierProductId>::new());
    let (update_busy, set_update_busy) = signal(false);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        set_selection.set(SelectionState::new());
        let token = ctx.nav_token();
        leptos::task::spawn_local(async move {
            let result = api::fetch_supplier_products().await;
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

    let visible_items = move || {
        let filter = filter_text.get().trim().to_lowercase();
        let mut items: Vec<SupplierProduct> = all_items
            .get()
            .into_iter()
            .filter(|item| {
                if !filter_active(&filter) {
                    return true;
                }
                item.sku.to_lowercase().contains(&filter)
                    || item.title.to_lowercase().contains(&filter)
                    || item.supplier.to_lowercase().contains(&filter)
            })
            .collect();

        let current = sort.get();
        items.sort_by(|a, b| current.direction.apply(compare(a, b, current.column)));
        items
    };

    let visible_ids =
        move || visible_items().iter().map(|item| item.id).collect::<Vec<_>>();

    let run_price_update = move || {
        let ids = selection.get_untracked().visible_selected(&visible_ids());
        if ids.is_empty() {
            return;
        }
        let count = ids.len();
        confirm.request(
            "Update prices",
            format!("Recalculate shop prices from {count} selected supplier rows?"),
            "Update",
            Callback::new(move |_| {
                let ids = ids.clone();
                set_update_busy.set(true);
                leptos::task::spawn_local(async move {
                    match api::trigger_price_update(ids).await {
                        Ok(result) => {
                            if result.failed_count == 0 {
                                toasts.success(format!("Updated {} prices", result.updated_count));
                            } else {
                                toasts.error(format!(
                                    "Updated {}, failed {}: {}",
                                    result.updated_count,
                                    result.failed_count,
                                    result.errors.join("; ")
                                ));
                            }
                            load();
                        }
                        Err(e) => toasts.error(format!("Price update failed: {e}")),
                    }
                    set_update_busy.set(false);
                });
            }),
        );
    };

    let run_scan = move || {
        confirm.request(
            "Scan suppliers",
            "Queue a full supplier catalog scan now?",
            "Scan now",
            Callback::new(move |_| {
                leptos::task::spawn_local(async move {
                    match api::trigger_scan().await {
                        Ok(result) => {
                            toasts.success(format!("Scan queued ({} items)", result.queued_count))
                        }
                        Err(e) => toasts.error(format!("Scan failed: {e}")),
                    }
                });
            }),
        );
    };

    let header = move |label: &'static str, column: SupplierColumn, numeric: bool| {
        view! {
            <SortableHeaderCell
                label=label
                numeric=numeric
                indicator=Signal::derive(move || sort.get().indicator(column))
                on_sort=Callback::new(move |_| set_sort.update(|s| s.toggle(column)))
            />
        }
    };

    let colspan = placeholder_colspan(&COLUMNS, true);

    view! {
        <div class="list-view">
            <div class="toolbar">
                <SearchBox
                    on_change=Callback::new(move |value| set_filter_text.set(value))
                    placeholder="Search by SKU, title, supplier..."
                />
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--secondary" on:click=move |_| run_scan()>
                    {icon("play")}
                    "Scan now"
                </button>
                <button
                    class="button button--primary"
                    disabled=move || selection.get().is_empty() || update_busy.get()
                    on:click=move |_| run_price_update()
                >
                    {icon("tag")}
                    {move || if update_busy.get() { "Updating..." } else { "Update prices" }}
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
                            {header("Supplier", SupplierColumn::Supplier, false)}
                            {header("SKU", SupplierColumn::Sku, false)}
                            {header("Title", SupplierColumn::Title, false)}
                            {header("Purchase price", SupplierColumn::PurchasePrice, true)}
                            {header("Stock", SupplierColumn::Stock, true)}
                            {header("Our price", SupplierColumn::ShopPrice, true)}
                            {header("Margin", SupplierColumn::Margin, true)}
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
                                    <TableMessage colspan=colspan text="No supplier products" />
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|item| {
                                    let id = item.id;
                                    let margin = item.margin_percent();
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
                                            <td>{item.supplier.clone()}</td>
                                            <td>{item.sku.clone()}</td>
                                            <td>{item.title.clone()}</td>
                                            <td class="table__cell--numeric">
                                                {format_price(item.purchase_price, &item.currency)}
                                            </td>
                                            <td class="table__cell--numeric">{item.stock}</td>
                                            <td class="table__cell--numeric">
                                                {format_price_opt(item.shop_price, &item.currency)}
                                            </td>
                                            <td class="table__cell--numeric">
                                                {format_percent_opt(margin)}
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
