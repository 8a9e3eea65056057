use crate::shared::api_utils::{fetch_list, get_json, put_json};
use contracts::domain::a006_order::aggregate::Order;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery};
use serde_json::json;

pub async fn fetch_orders(query: ListQuery) -> Result<ListPage<Order>, ApiError> {
    fetch_list("orders", &query).await
}

pub async fn fetch_order(id: i64) -> Result<Order, ApiError> {
    get_json(&format!("/api/orders/{}", id)).await
}

/// Команда смены статуса: `PUT /api/orders/{id}/<suffix>` с пустым телом
pub async fn change_order_status(id: i64, suffix: &str) -> Result<(), ApiError> {
    put_json(&format!("/api/orders/{}/{}", id, suffix), &json!({})).await
}
