use crate::shared::api_utils::{delete, fetch_list, get_json, options_query, post_command, put_json};
use contracts::domain::a009_store_partner::aggregate::{
    CreateStorePartnerRequest, Partner, StorePartner, UpdateStorePartnerRequest,
    UpdateStorePartnerStatusRequest,
};
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery, ListScope};

fn link_path(store_id: i64, partner_id: i64) -> String {
    format!("/api/storepartners/stores/{}/partners/{}", store_id, partner_id)
}

pub async fn fetch_store_partners(query: ListQuery) -> Result<ListPage<StorePartner>, ApiError> {
    fetch_list("storepartners", &query).await
}

pub async fn fetch_store_partner(store_id: i64, partner_id: i64) -> Result<StorePartner, ApiError> {
    get_json(&link_path(store_id, partner_id)).await
}

/// Платформы доставки для выпадающего списка
pub async fn fetch_partners() -> Result<Vec<Partner>, ApiError> {
    let query = options_query("name", ListScope::default());
    let page: ListPage<Partner> = fetch_list("partners", &query).await?;
    Ok(page.items)
}

pub async fn create_store_partner(request: &CreateStorePartnerRequest) -> Result<(), ApiError> {
    post_command("/api/storepartners", request).await
}

pub async fn update_store_partner(
    store_id: i64,
    partner_id: i64,
    request: &UpdateStorePartnerRequest,
) -> Result<(), ApiError> {
    put_json(&link_path(store_id, partner_id), request).await
}

pub async fn update_store_partner_status(
    store_id: i64,
    partner_id: i64,
    request: &UpdateStorePartnerStatusRequest,
) -> Result<(), ApiError> {
    put_json(&format!("{}/updating-status", link_path(store_id, partner_id)), request).await
}

pub async fn delete_store_partner(store_id: i64, partner_id: i64) -> Result<(), ApiError> {
    delete(&link_path(store_id, partner_id)).await
}
