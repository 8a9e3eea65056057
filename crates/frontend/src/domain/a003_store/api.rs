use crate::shared::api_utils::{fetch_list, options_query};
use contracts::domain::a003_store::aggregate::Store;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery, ListScope};

/// Магазины; ключи `idBrand` / `idKitchenCenter` из запроса сужают выборку
pub async fn fetch_stores(query: ListQuery) -> Result<ListPage<Store>, ApiError> {
    fetch_list("stores", &query).await
}

/// Все магазины владельца для выпадающего списка формы
pub async fn fetch_store_options(scope: ListScope) -> Result<Vec<Store>, ApiError> {
    fetch_stores(options_query("name", scope)).await.map(|page| page.items)
}
