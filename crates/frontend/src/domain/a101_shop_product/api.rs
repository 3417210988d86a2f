use contracts::domain::a101_shop_product::{
    ProductOption, ShopProduct, ShopProductDetail, ShopProductId,
};
use leptos::prelude::{GetUntracked, Set};
use wasm_bindgen::JsCast;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api_utils::api_url;

async fn get_text(path: &str) -> Result<String, String> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request =
        Request::new_with_str_and_init(&api_url(path), &opts).map_err(|e| format!("{e:?}"))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|e| format!("{e:?}"))?;

    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let resp_value = wasm_bindgen_futures::JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|e| format!("{e:?}"))?;
    let resp: Response = resp_value.dyn_into().map_err(|e| format!("{e:?}"))?;

    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }

    let text = wasm_bindgen_futures::JsFuture::from(resp.text().map_err(|e| format!("{e:?}"))?)
        .await
        .map_err(|e| format!("{e:?}"))?;
    text.as_string().ok_or_else(|| "bad text".to_string())
}

pub async fn fetch_products() -> Result<Vec<ShopProduct>, String> {
    let text = get_text("/api/v1/products").await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

pub async fn fetch_product_detail(id: ShopProductId) -> Result<ShopProductDetail, String> {
    let text = get_text(&format!("/api/v1/products/{id}")).await?;
    serde_json::from_str(&text).map_err(|e| format!("{e}"))
}

/// Slim option list for pickers and mapping cross-references. Fetched at
/// most once per page life; later callers get the memoized copy.
pub async fn ensure_product_options(ctx: AppGlobalContext) -> Result<Vec<ProductOption>, String> {
    if let Some(cached) = ctx.product_options.get_untracked() {
        return Ok(cached);
    }
    let text = get_text("/api/v1/products/options").await?;
    let options: Vec<ProductOption> = serde_json::from_str(&text).map_err(|e| format!("{e}"))?;
    ctx.product_options.set(Some(options.clone()));
    Ok(options)
}
