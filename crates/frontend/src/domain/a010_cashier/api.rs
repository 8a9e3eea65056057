use crate::shared::api_utils::{delete, fetch_list, get_json, post_json, put_json};
use contracts::domain::a010_cashier::aggregate::{
    Cashier, CreateCashierRequest, UpdateCashierRequest, UpdateCashierStatusRequest,
};
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery};

pub async fn fetch_cashiers(query: ListQuery) -> Result<ListPage<Cashier>, ApiError> {
    fetch_list("cashiers", &query).await
}

pub async fn fetch_cashier(id: i64) -> Result<Cashier, ApiError> {
    get_json(&format!("/api/cashiers/{}", id)).await
}

pub async fn create_cashier(request: &CreateCashierRequest) -> Result<Cashier, ApiError> {
    post_json("/api/cashiers", request).await
}

pub async fn update_cashier(id: i64, request: &UpdateCashierRequest) -> Result<(), ApiError> {
    put_json(&format!("/api/cashiers/{}", id), request).await
}

pub async fn update_cashier_status(
    id: i64,
    request: &UpdateCashierStatusRequest,
) -> Result<(), ApiError> {
    put_json(&format!("/api/cashiers/{}/updating-status", id), request).await
}

pub async fn delete_cashier(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/cashiers/{}", id)).await
}
