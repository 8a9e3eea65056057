use crate::shared::api_utils::fetch_list;
use contracts::shared::error::ApiError;
use contracts::shared::list::{ListPage, ListQuery, ListScope, PageSpec, SortSpec};

/// Число записей ресурса в области пользователя.
/// Запрашивается страница из одной записи, нужен только `totalCount`.
pub async fn fetch_total(
    resource: &'static str,
    sort_key: &'static str,
    scope: ListScope,
) -> Result<usize, ApiError> {
    let query = ListQuery::new("", SortSpec::asc(sort_key), PageSpec::new(0, 1)).with_scope(scope);
    let page: ListPage<serde_json::Value> = fetch_list(resource, &query).await?;
    Ok(page.total_count)
}
