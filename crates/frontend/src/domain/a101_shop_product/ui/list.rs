use std::cmp::Ordering;

use contracts::domain::a101_shop_product::{ShopProduct, ShopProductId};
use leptos::prelude::*;

use super::super::api;
use super::detail::ShopProductDetailModal;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::search::{filter_active, SearchBox};
use crate::shared::components::table::{
    placeholder_colspan, ColumnSpec, SortableHeaderCell, TableMessage,
};
use crate::shared::format::{format_datetime, format_price};
use crate::shared::icons::icon;
use crate::shared::list_state::{SortColumn, SortState};

const COLUMNS: [ColumnSpec; 6] = [
    ColumnSpec::text("sku", "SKU"),
    ColumnSpec::text("title", "Title"),
    ColumnSpec::text("vendor", "Vendor"),
    ColumnSpec::numeric("price", "Price"),
    ColumnSpec::numeric("stock", "Stock"),
    ColumnSpec::text("updated", "Updated"),
];

#[derive(Debug, Clone, Copy, PartialEq)]
enum ProductColumn {
    Sku,
    Title,
    Vendor,
    Price,
    Stock,
    Updated,
}

impl SortColumn for ProductColumn {
    fn as_str(&self) -> &'static str {
        match self {
            ProductColumn::Sku => "sku",
            ProductColumn::Title => "title",
            ProductColumn::Vendor => "vendor",
            ProductColumn::Price => "price",
            ProductColumn::Stock => "stock",
            ProductColumn::Updated => "updated",
        }
    }

    fn parse(s: &str) -> Option<Self> {
        match s {
            "sku" => Some(ProductColumn::Sku),
            "title" => Some(ProductColumn::Title),
            "vendor" => Some(ProductColumn::Vendor),
            "price" => Some(ProductColumn::Price),
            "stock" => Some(ProductColumn::Stock),
            "updated" => Some(ProductColumn::Updated),
            _ => None,
        }
    }
}

fn compare(a: &ShopProduct, b: &ShopProduct, column: ProductColumn) -> Ordering {
    match column {
        ProductColumn::Sku => a.sku.cmp(&b.sku),
        ProductColumn::Title => a.title.cmp(&b.title),
        ProductColumn::Vendor => a.vendor.cmp(&b.vendor),
        ProductColumn::Price => a.price.partial_cmp(&b.price).unwrap_or(Ordering::Equal),
        ProductColumn::Stock => a.inventory_quantity.cmp(&b.inventory_quantity),
        ProductColumn::Updated => a.updated_at.cmp(&b.updated_at),
    }
}

/// Products tab: the shop's own catalog, searchable and sortable, with a
/// per-row detail modal.
#[component]
pub fn ShopProductList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");

    let (all_items, set_all_items) = signal(Vec::<ShopProduct>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (filter_text, set_filter_text) = signal(String::new());
    let (sort, set_sort) = signal(SortState::new(ProductColumn::Title));
    let (detail_id, set_detail_id) = signal(Option::<ShopProductId>::None);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        let token = ctx.nav_token();
        leptos::task::spawn_local(async move {
            let result = api::fetch_products().await;
            if !ctx.accepts(token) {
                // user navigated away; drop the response
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
        let mut items: Vec<ShopProduct> = all_items
            .get()
            .into_iter()
            .filter(|item| {
                if !filter_active(&filter) {
                    return true;
                }
                item.sku.to_lowercase().contains(&filter)
                    || item.title.to_lowercase().contains(&filter)
                    || item
                        .vendor
                        .as_deref()
                        .is_some_and(|v| v.to_lowercase().contains(&filter))
            })
            .collect();

        let current = sort.get();
        items.sort_by(|a, b| current.direction.apply(compare(a, b, current.column)));
        items
    };

    let header = move |label: &'static str, column: ProductColumn, numeric: bool| {
        view! {
            <SortableHeaderCell
                label=label
                numeric=numeric
                indicator=Signal::derive(move || sort.get().indicator(column))
                on_sort=Callback::new(move |_| set_sort.update(|s| s.toggle(column)))
            />
        }
    };

    let colspan = placeholder_colspan(&COLUMNS, false);

    view! {
        <div class="list-view">
            <div class="toolbar">
                <SearchBox
                    on_change=Callback::new(move |value| set_filter_text.set(value))
                    placeholder="Search by SKU, title, vendor..."
                />
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <div class="toolbar__counters">
                    <span>
                        "Total: " <strong>{move || visible_items().len()}</strong>
                    </span>
                </div>
            </div>

            <div class="table-scroll">
                <table class="table">
                    <thead>
                        <tr>
                            {header("SKU", ProductColumn::Sku, false)}
                            {header("Title", ProductColumn::Title, false)}
                            {header("Vendor", ProductColumn::Vendor, false)}
                            {header("Price", ProductColumn::Price, true)}
                            {header("Stock", ProductColumn::Stock, true)}
                            {header("Updated", ProductColumn::Updated, false)}
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
                                    <TableMessage colspan=colspan text="No products" />
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|item| {
                                    let id = item.id;
                                    view! {
                                        <tr class="table__row table__row--clickable"
                                            on:click=move |_| set_detail_id.set(Some(id))
                                        >
                                            <td>{item.sku.clone()}</td>
                                            <td>{item.title.clone()}</td>
                                            <td>{item.vendor.clone().unwrap_or_else(|| "-".to_string())}</td>
                                            <td class="table__cell--numeric">
                                                {format_price(item.price, &item.currency)}
                                            </td>
                                            <td class="table__cell--numeric">{item.inventory_quantity}</td>
                                            <td>{format_datetime(&item.updated_at)}</td>
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
                detail_id.get().map(|id| {
                    view! {
                        <ShopProductDetailModal
                            id=id
                            on_close=Callback::new(move |_| set_detail_id.set(None))
                        />
                    }
                })
            }}
        </div>
    }
}
