use contracts::domain::a101_shop_product::ProductOption;
use contracts::domain::a104_product_mapping::{CreateMappingRequest, SourceOption};
use leptos::prelude::*;

use super::super::api;
use crate::domain::a101_shop_product::api as products_api;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::modal::Modal;
use crate::shared::components::toast::ToastService;

/// Dialog for creating one mapping: pick an unmapped external item, pick
/// the shop product it corresponds to. Both option lists come from the
/// page-lifetime caches, so reopening the dialog does not refetch.
#[component]
pub fn MapDialog(on_close: Callback<()>, on_created: Callback<()>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let toasts = use_context::<ToastService>().expect("ToastService context not found");

    let (source_options, set_source_options) = signal(Option::<Vec<SourceOption>>::None);
    let (product_options, set_product_options) = signal(Option::<Vec<ProductOption>>::None);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (selected_source, set_selected_source) = signal(Option::<usize>::None);
    let (selected_product, set_selected_product) = signal(Option::<usize>::None);
    let (saving, set_saving) = signal(false);

    leptos::task::spawn_local(async move {
        let result = futures::future::join(
            api::ensure_source_options(ctx),
            products_api::ensure_product_options(ctx),
        )
        .await;
        match result {
            (Ok(sources), Ok(products)) => {
                set_source_options.set(Some(sources));
                set_product_options.set(Some(products));
            }
            (Err(e), _) | (_, Err(e)) => set_load_error.set(Some(e)),
        }
    });

    let submit = move || {
        let (Some(source_idx), Some(product_idx)) =
            (selected_source.get_untracked(), selected_product.get_untracked())
        else {
            return;
        };
        let Some(source) = source_options
            .get_untracked()
            .and_then(|options| options.get(source_idx).cloned())
        else {
            return;
        };
        let Some(product) = product_options
            .get_untracked()
            .and_then(|options| options.get(product_idx).cloned())
        else {
            return;
        };

        let request = CreateMappingRequest {
            kind: source.kind,
            source: source.source.clone(),
            external_id: source.external_id.clone(),
            shop_product_ref: product.id,
        };

        set_saving.set(true);
        leptos::task::spawn_local(async move {
            match api::create_mapping(request).await {
                Ok(_) => {
                    // the chosen item is no longer unmapped
                    ctx.source_options.set(None);
                    toasts.success("Mapping created");
                    on_created.run(());
                }
                Err(e) => {
                    toasts.error(format!("Mapping failed: {e}"));
                    set_saving.set(false);
                }
            }
        });
    };

    let can_submit = move || {
        selected_source.get().is_some() && selected_product.get().is_some() && !saving.get()
    };

    let title = "Add mapping".to_string();

    view! {
        <Modal title=title on_close=on_close>
            {move || {
                if let Some(e) = load_error.get() {
                    return view! { <div class="detail-error">{format!("Error: {e}")}</div> }
                        .into_any();
                }
                let (Some(sources), Some(products)) =
                    (source_options.get(), product_options.get())
                else {
                    return view! { <div class="detail-loading">"Loading options..."</div> }
                        .into_any();
                };
                if sources.is_empty() {
                    return view! {
                        <div class="detail-loading">"Nothing left to map - every scanned item is linked"</div>
                    }
                    .into_any();
                }
                view! {
                    <div class="form">
                        <label class="form__field">
                            <span class="form__label">"External item"</span>
                            <select
                                class="select"
                                on:change=move |ev| {
                                    set_selected_source
                                        .set(event_target_value(&ev).parse::<usize>().ok());
                                }
                            >
                                <option value="">"Select an item..."</option>
                                {sources
                                    .iter()
                                    .enumerate()
                                    .map(|(i, option)| {
                                        let text = match option.price {
                                            Some(price) => {
                                                format!("{} ({:.2})", option.label(), price)
                                            }
                                            None => option.label(),
                                        };
                                        view! { <option value=i.to_string()>{text}</option> }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <label class="form__field">
                            <span class="form__label">"Shop product"</span>
                            <select
                                class="select"
                                on:change=move |ev| {
                                    set_selected_product
                                        .set(event_target_value(&ev).parse::<usize>().ok());
                                }
                            >
                                <option value="">"Select a product..."</option>
                                {products
                                    .iter()
                                    .enumerate()
                                    .map(|(i, option)| {
                                        view! {
                                            <option value=i.to_string()>{option.label()}</option>
                                        }
                                    })
                                    .collect::<Vec<_>>()}
                            </select>
                        </label>
                        <div class="form__actions">
                            <button
                                class="button button--secondary"
                                on:click=move |_| on_close.run(())
                            >
                                "Cancel"
                            </button>
                            <button
                                class="button button--primary"
                                disabled=move || !can_submit()
                                on:click=move |_| submit()
                            >
                                {move || if saving.get() { "Saving..." } else { "Create mapping" }}
                            </button>
                        </div>
                    </div>
                }
                .into_any()
            }}
        </Modal>
    }
}
