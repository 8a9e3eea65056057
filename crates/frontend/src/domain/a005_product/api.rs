use crate::shared::api_utils::{delete, fetch_list, get_json};
use contracts::domain::a005_product::aggregate::Product;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery};

pub async fn fetch_products(query: ListQuery) -> Result<ListPage<Product>, ApiError> {
    fetch_list("products", &query).await
}

pub async fn fetch_product(id: i64) -> Result<Product, ApiError> {
    get_json(&format!("/api/products/{}", id)).await
}

pub async fn delete_product(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/products/{}", id)).await
}
