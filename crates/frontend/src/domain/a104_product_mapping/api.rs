use contracts::domain::a104_product_mapping::{
    CreateMappingRequest, ProductMapping, ProductMappingId, SourceOption,
};
use leptos::prelude::{GetUntracked, Set};

use crate::layout::global_context::AppGlobalContext;
use crate::shared::api::{delete, get_json, post_json};

pub async fn fetch_mappings() -> Result<Vec<ProductMapping>, String> {
    get_json("/api/v1/mappings").await
}

/// External items without a mapping yet, offered by the map dialog.
/// Cached on the global context alongside the product options.
pub async fn ensure_source_options(ctx: AppGlobalContext) -> Result<Vec<SourceOption>, String> {
    if let Some(cached) = ctx.source_options.get_untracked() {
        return Ok(cached);
    }
    let options: Vec<SourceOption> = get_json("/api/v1/mappings/options").await?;
    ctx.source_options.set(Some(options.clone()));
    Ok(options)
}

pub async fn create_mapping(request: CreateMappingRequest) -> Result<ProductMapping, String> {
    let created: ProductMapping = post_json("/api/v1/mappings", &request).await?;
    Ok(created)
}

pub async fn delete_mapping(id: ProductMappingId) -> Result<(), String> {
    delete(&format!("/api/v1/mappings/{id}")).await
}
