use contracts::domain::a101_shop_product::{ShopProductDetail, ShopProductId};
use leptos::prelude::*;

use super::super::api;
use crate::shared::components::modal::Modal;
use crate::shared::format::{format_datetime, format_price};

/// Product detail modal. Mounts immediately and fills in once the detail
/// endpoint answers.
#[component]
pub fn ShopProductDetailModal(id: ShopProductId, on_close: Callback<()>) -> impl IntoView {
    let (detail, set_detail) = signal(Option::<ShopProductDetail>::None);
    let (error, set_error) = signal(Option::<String>::None);

    leptos::task::spawn_local(async move {
        match api::fetch_product_detail(id).await {
            Ok(data) => set_detail.set(Some(data)),
            Err(e) => set_error.set(Some(e)),
        }
    });

    let title = "Product".to_string();

    view! {
        <Modal title=title on_close=on_close>
            {move || {
                if let Some(e) = error.get() {
                    return view! { <div class="detail-error">{format!("Error: {e}")}</div> }
                        .into_any();
                }
                match detail.get() {
                    None => view! { <div class="detail-loading">"Loading..."</div> }.into_any(),
                    Some(data) => {
                        let currency = data.product.currency.clone();
                        view! {
                            <div class="detail-grid">
                                <div class="detail-field">
                                    <span class="detail-field__label">"SKU"</span>
                                    <span>{data.product.sku.clone()}</span>
                                </div>
                                <div class="detail-field">
                                    <span class="detail-field__label">"Title"</span>
                                    <span>{data.product.title.clone()}</span>
                                </div>
                                <div class="detail-field">
                                    <span class="detail-field__label">"Vendor"</span>
                                    <span>
                                        {data.product.vendor.clone().unwrap_or_else(|| "-".to_string())}
                                    </span>
                                </div>
                                <div class="detail-field">
                                    <span class="detail-field__label">"Price"</span>
                                    <span>{format_price(data.product.price, &currency)}</span>
                                </div>
                                <div class="detail-field">
                                    <span class="detail-field__label">"Stock"</span>
                                    <span>{data.product.inventory_quantity}</span>
                                </div>
                                <div class="detail-field">
                                    <span class="detail-field__label">"Mappings"</span>
                                    <span>{data.mapping_count}</span>
                                </div>
                                <div class="detail-field">
                                    <span class="detail-field__label">"Updated"</span>
                                    <span>{format_datetime(&data.product.updated_at)}</span>
                                </div>
                            </div>
                            {data.description.clone().map(|text| {
                                view! { <p class="detail-description">{text}</p> }
                            })}
                            {(!data.variants.is_empty()).then(|| {
                                view! {
                                    <table class="table table--compact">
                                        <thead>
                                            <tr>
                                                <th class="table__header">"Variant"</th>
                                                <th class="table__header">"SKU"</th>
                                                <th class="table__header table__header--numeric">"Price"</th>
                                                <th class="table__header table__header--numeric">"Stock"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {data
                                                .variants
                                                .iter()
                                                .map(|variant| {
                                                    view! {
                                                        <tr>
                                                            <td>{variant.title.clone()}</td>
                                                            <td>{variant.sku.clone()}</td>
                                                            <td class="table__cell--numeric">
                                                                {format_price(variant.price, &currency)}
                                                            </td>
                                                            <td class="table__cell--numeric">
                                                                {variant.inventory_quantity}
                                                            </td>
                                                        </tr>
                                                    }
                                                })
                                                .collect::<Vec<_>>()}
                                        </tbody>
                                    </table>
                                }
                            })}
                        }
                        .into_any()
                    }
                }
            }}
        </Modal>
    }
}
