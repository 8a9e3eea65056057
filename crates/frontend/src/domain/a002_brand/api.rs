use crate::shared::api_utils::{delete, fetch_list, get_json, post_json, put_json};
use contracts::domain::a002_brand::aggregate::{Brand, CreateBrandRequest, UpdateBrandRequest};
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery};

pub async fn fetch_brands(query: ListQuery) -> Result<ListPage<Brand>, ApiError> {
    fetch_list("brands", &query).await
}

pub async fn fetch_brand(id: i64) -> Result<Brand, ApiError> {
    get_json(&format!("/api/brands/{}", id)).await
}

pub async fn create_brand(request: &CreateBrandRequest) -> Result<Brand, ApiError> {
    post_json("/api/brands", request).await
}

pub async fn update_brand(id: i64, request: &UpdateBrandRequest) -> Result<(), ApiError> {
    put_json(&format!("/api/brands/{}", id), request).await
}

pub async fn delete_brand(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/brands/{}", id)).await
}
