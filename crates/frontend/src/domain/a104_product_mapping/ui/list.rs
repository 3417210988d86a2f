use std::collections::HashMap;

use contracts::domain::a101_shop_product::ShopProductId;
use contracts::domain::a104_product_mapping::{MappingKind, ProductMapping};
use leptos::prelude::*;

use super::super::api;
use super::map_dialog::MapDialog;
use crate::domain::a101_shop_product::api as products_api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::confirm::ConfirmService;
use crate::shared::components::search::{filter_active, SearchBox};
use crate::shared::components::table::{placeholder_colspan, ColumnSpec, HeaderCell, TableMessage};
use crate::shared::components::toast::ToastService;
use crate::shared::format::format_datetime;
use crate::shared::icons::icon;

const COLUMNS: [ColumnSpec; 6] = [
    ColumnSpec::text("kind", "Kind"),
    ColumnSpec::text("source", "Source"),
    ColumnSpec::text("external", "External item"),
    ColumnSpec::text("shop_product", "Shop product"),
    ColumnSpec::text("created", "Created"),
    ColumnSpec::text("actions", ""),
];

#[derive(Clone, Copy, PartialEq)]
enum KindFilter {
    All,
    Supplier,
    Competitor,
}

/// Mappings tab. Loads the cached shop-product options first, then the
/// mappings, so rows missing a denormalized title can be cross-referenced
/// locally.
#[component]
pub fn ProductMappingList() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let confirm = use_context::<ConfirmService>().expect("ConfirmService context not found");
    let toasts = use_context::<ToastService>().expect("ToastService context not found");

    let (all_items, set_all_items) = signal(Vec::<ProductMapping>::new());
    let (titles, set_titles) = signal(HashMap::<ShopProductId, String>::new());
    let (is_loading, set_is_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (filter_text, set_filter_text) = signal(String::new());
    let (kind_filter, set_kind_filter) = signal(KindFilter::All);
    let (show_map_dialog, set_show_map_dialog) = signal(false);

    let load = move || {
        set_is_loading.set(true);
        set_error.set(None);
        let token = ctx.nav_token();
        leptos::task::spawn_local(async move {
            // options first: mapping rows cross-reference them
            let result = async {
                let options = products_api::ensure_product_options(ctx).await?;
                let mappings = api::fetch_mappings().await?;
                Ok::<_, String>((options, mappings))
            }
            .await;
            if !ctx.accepts(token) {
                return;
            }
            match result {
                Ok((options, mappings)) => {
                    set_titles.set(
                        options
                            .into_iter()
                            .map(|option| (option.id, option.label()))
                            .collect(),
                    );
                    set_all_items.set(mappings);
                }
                Err(e) => {
                    set_all_items.set(Vec::new());
                    set_error.set(Some(e));
                }
            }
            set_is_loading.set(false);
        });
    };
    load();

    let shop_title = move |mapping: &ProductMapping| -> String {
        if let Some(title) = &mapping.shop_product_title {
            return title.clone();
        }
        titles
            .get()
            .get(&mapping.shop_product_ref)
            .cloned()
            .unwrap_or_else(|| "-".to_string())
    };

    let visible_items = move || {
        let filter = filter_text.get().trim().to_lowercase();
        let kind = kind_filter.get();
        all_items
            .get()
            .into_iter()
            .filter(|item| match kind {
                KindFilter::All => true,
                KindFilter::Supplier => item.kind == MappingKind::Supplier,
                KindFilter::Competitor => item.kind == MappingKind::Competitor,
            })
            .filter(|item| {
                if !filter_active(&filter) {
                    return true;
                }
                item.source.to_lowercase().contains(&filter)
                    || item.external_title.to_lowercase().contains(&filter)
                    || shop_title(item).to_lowercase().contains(&filter)
            })
            .collect::<Vec<_>>()
    };

    let unmap = move |mapping: ProductMapping| {
        let id = mapping.id;
        confirm.request(
            "Remove mapping",
            format!(
                "Unmap \"{}\" from \"{}\"? Scans for this listing will no longer update the product.",
                mapping.external_title,
                shop_title(&mapping)
            ),
            "Unmap",
            Callback::new(move |_| {
                leptos::task::spawn_local(async move {
                    match api::delete_mapping(id).await {
                        Ok(()) => {
                            toasts.success("Mapping removed");
                            load();
                        }
                        Err(e) => toasts.error(format!("Unmap failed: {e}")),
                    }
                });
            }),
        );
    };

    let colspan = placeholder_colspan(&COLUMNS, false);

    view! {
        <div class="list-view">
            <div class="toolbar">
                <SearchBox
                    on_change=Callback::new(move |value| set_filter_text.set(value))
                    placeholder="Search by source, titles..."
                />
                <select
                    class="select"
                    on:change=move |ev| {
                        set_kind_filter.set(match event_target_value(&ev).as_str() {
                            "supplier" => KindFilter::Supplier,
                            "competitor" => KindFilter::Competitor,
                            _ => KindFilter::All,
                        });
                    }
                >
                    <option value="all">"All kinds"</option>
                    <option value="supplier">"Suppliers"</option>
                    <option value="competitor">"Competitors"</option>
                </select>
                <button class="button button--secondary" on:click=move |_| load()>
                    {icon("refresh")}
                    "Refresh"
                </button>
                <button class="button button--primary" on:click=move |_| set_show_map_dialog.set(true)>
                    {icon("plus")}
                    "Add mapping"
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
                            <HeaderCell label="Kind" />
                            <HeaderCell label="Source" />
                            <HeaderCell label="External item" />
                            <HeaderCell label="Shop product" />
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
                            let items = visible_items();
                            if items.is_empty() {
                                return view! {
                                    <TableMessage colspan=colspan text="No mappings" />
                                }
                                .into_any();
                            }
                            items
                                .into_iter()
                                .map(|item| {
                                    let row = item.clone();
                                    view! {
                                        <tr class="table__row">
                                            <td>{item.kind.label()}</td>
                                            <td>{item.source.clone()}</td>
                                            <td>{item.external_title.clone()}</td>
                                            <td>{shop_title(&item)}</td>
                                            <td>{format_datetime(&item.created_at)}</td>
                                            <td class="table__actions">
                                                <button
                                                    class="button button--icon"
                                                    title="Remove mapping"
                                                    on:click=move |_| unmap(row.clone())
                                                >
                                                    {icon("trash")}
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
                show_map_dialog.get().then(|| {
                    view! {
                        <MapDialog
                            on_close=Callback::new(move |_| set_show_map_dialog.set(false))
                            on_created=Callback::new(move |_| {
                                set_show_map_dialog.set(false);
                                load();
                            })
                        />
                    }
                })
            }}
        </div>
    }
}
