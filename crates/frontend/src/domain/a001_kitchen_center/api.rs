use crate::shared::api_utils::{delete, fetch_list, get_json, post_json, put_json};
use contracts::domain::a001_kitchen_center::aggregate::{
    CreateKitchenCenterRequest, KitchenCenter, UpdateKitchenCenterRequest,
};
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery};

pub async fn fetch_kitchen_centers(query: ListQuery) -> Result<ListPage<KitchenCenter>, ApiError> {
    fetch_list("kitchencenters", &query).await
}

pub async fn fetch_kitchen_center(id: i64) -> Result<KitchenCenter, ApiError> {
    get_json(&format!("/api/kitchencenters/{}", id)).await
}

pub async fn create_kitchen_center(
    request: &CreateKitchenCenterRequest,
) -> Result<KitchenCenter, ApiError> {
    post_json("/api/kitchencenters", request).await
}

pub async fn update_kitchen_center(
    id: i64,
    request: &UpdateKitchenCenterRequest,
) -> Result<(), ApiError> {
    put_json(&format!("/api/kitchencenters/{}", id), request).await
}

pub async fn delete_kitchen_center(id: i64) -> Result<(), ApiError> {
    delete(&format!("/api/kitchencenters/{}", id)).await
}
